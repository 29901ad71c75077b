//! # evacnet-api
//!
//! HTTP API layer for EvacNet built on Axum.
//!
//! Provides the news, user, and route map endpoints, the `/ws/stream`
//! relay upgrade, middleware (CORS, logging), DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;

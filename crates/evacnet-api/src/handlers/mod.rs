//! Route handlers organized by domain.

pub mod health;
pub mod news;
pub mod route;
pub mod user;
pub mod ws;

//! # evacnet-core
//!
//! Core crate for the EvacNet server. Contains configuration schemas,
//! type-prefixed record identifiers, the record store traits, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other EvacNet crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

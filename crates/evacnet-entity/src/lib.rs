//! # evacnet-entity
//!
//! Record models for the EvacNet server. Every struct in this crate is
//! either a database row (deriving `sqlx::FromRow`) or the payload used to
//! create or update one. Payloads derive `validator::Validate`.

pub mod news;
pub mod user;
pub mod validation;

pub use news::News;
pub use user::User;

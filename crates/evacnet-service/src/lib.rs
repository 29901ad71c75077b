//! # evacnet-service
//!
//! Business logic for EvacNet records. Services own id parsing, payload
//! validation, and the mapping of missing records to `NotFound`; storage is
//! reached through the repositories of a `RecordStore`.
//!
//! Services follow constructor injection: every dependency is provided at
//! construction time.

pub mod news;
pub mod user;

mod validation;

pub use news::NewsService;
pub use user::UserService;

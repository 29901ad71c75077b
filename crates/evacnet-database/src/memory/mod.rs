//! In-memory record store backend.
//!
//! Mirrors the PostgreSQL repositories on top of `dashmap` so the server can
//! run (and be tested) without a database. Contents live only as long as
//! the process.

pub mod news;
pub mod table;
pub mod user;

pub use news::MemoryNewsRepository;
pub use user::MemoryUserRepository;

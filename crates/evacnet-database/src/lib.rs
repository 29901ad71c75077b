//! # evacnet-database
//!
//! Record store for EvacNet: the PostgreSQL connection pool, embedded
//! migrations, Postgres repositories for the `news` and `users` tables,
//! in-memory equivalents, and [`RecordStore`], which picks a backend from
//! configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{NewsRepo, RecordStore, UserRepo};

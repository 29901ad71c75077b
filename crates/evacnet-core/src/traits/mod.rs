//! Core traits defined in `evacnet-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;

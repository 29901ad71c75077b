//! News bulletin management.

pub mod service;

pub use service::NewsService;

//! PostgreSQL repository implementations.

pub mod news;
pub mod user;

pub use news::NewsRepository;
pub use user::UserRepository;

//! News bulletin entities.

pub mod model;

pub use model::{CreateNews, News, UpdateNews};

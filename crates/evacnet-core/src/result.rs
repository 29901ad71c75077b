//! Convenience result type alias for EvacNet.

use crate::error::AppError;

/// A specialized `Result` type for EvacNet operations.
pub type AppResult<T> = Result<T, AppError>;

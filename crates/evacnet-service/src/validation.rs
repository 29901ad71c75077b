//! Mapping of payload validation failures.

use validator::Validate;

use evacnet_core::error::AppError;

/// Validate a payload, turning failures into a `Validation` error.
pub(crate) fn validate<T: Validate>(what: &str, payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(format!("Invalid {what}: {e}")))
}

//! Error types for the estimation core.
//!
//! The core either returns a complete `FootprintResult` or fails with one of
//! these errors; it never defaults or clamps malformed input.

use thiserror::Error;

pub type Result<T, E = EstimateError> = std::result::Result<T, E>;

/// Validation failure for a single survey field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// A categorical field holds a value outside its declared set.
    #[error("invalid value '{value}' for field '{field}'")]
    InvalidCategory { field: &'static str, value: String },

    /// A magnitude field (distance, usage, hours) is negative or not a number.
    #[error("field '{field}' must be >= 0, got {value}")]
    NegativeValue { field: &'static str, value: f64 },

    /// A percentage field falls outside [0, 100].
    #[error("field '{field}' must be within [0, 100], got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

impl EstimateError {
    /// Name of the field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            EstimateError::InvalidCategory { field, .. } => field,
            EstimateError::NegativeValue { field, .. } => field,
            EstimateError::OutOfRange { field, .. } => field,
        }
    }
}

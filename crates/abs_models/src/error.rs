//! Error types for model construction and simulation.

use abs_core::types::matrix::MatrixError;
use thiserror::Error;

/// Model error type
#[derive(Debug, Error)]
pub enum ModelError {
    /// A model parameter failed validation.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// Requested output size is unusable.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Path storage error.
    #[error("path storage error: {0}")]
    Storage(#[from] MatrixError),
}

impl ModelError {
    /// Create a parameter validation error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::invalid_parameter("step_vol", "must be positive");
        assert!(err.to_string().contains("step_vol"));
        assert!(err.to_string().contains("must be positive"));
    }
}

//! Error types for the abspricer CLI.

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Pricing pipeline error
    #[error("Pricing error: {0}")]
    Pricing(#[from] abs_pricing::PricingError),

    /// Model error
    #[error("Model error: {0}")]
    Model(#[from] abs_models::ModelError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export error
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result alias
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.to_string().contains("IO error"));
    }
}

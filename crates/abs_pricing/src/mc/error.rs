//! Error types for configuration and pricing.

use abs_core::types::grid::GridError;
use abs_core::GradientError;
use abs_models::ModelError;
use thiserror::Error;

/// Errors raised when building or validating a simulation configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Trial count outside the allowed range.
    #[error("invalid trial count {0}: must be in [1, 10000000]")]
    InvalidTrialCount(usize),

    /// Step count outside the allowed range.
    #[error("invalid step count {0}: must be in [2, 10000]")]
    InvalidStepCount(usize),

    /// Horizon is not a positive finite number of years.
    #[error("invalid horizon {0}: must be positive and finite")]
    InvalidHorizon(f64),

    /// Swap rate is not finite.
    #[error("invalid swap rate {0}: must be finite")]
    InvalidSwapRate(f64),
}

/// Errors raised while running the valuation pipeline.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Configuration rejected before simulation started.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Index-aligned inputs disagree on shape.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Time grid construction failed.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// Matrix allocation failed.
    #[error("path storage error: {0}")]
    Storage(#[from] abs_core::types::matrix::MatrixError),

    /// Synthetic data or path simulation failed.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Numeric differentiation failed.
    #[error("gradient error: {0}")]
    Gradient(#[from] GradientError),
}

impl PricingError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }
}

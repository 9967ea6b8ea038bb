//! # abs_pricing: Monte Carlo Swap Valuation
//!
//! Pricing layer of the abspricer workspace. Given a validated
//! [`SimulationConfig`], the [`SwapValuationEngine`] runs the full
//! pipeline:
//!
//! 1. build the time grid and draw the synthetic cash-flow series,
//! 2. simulate the short-rate paths (one RNG stream, fixed draw order),
//! 3. discount each path, price the fixed and floating swap legs,
//! 4. average across trials into the swap value curve,
//! 5. differentiate the curve numerically into the delta curve.
//!
//! The trial loop is serial; every array is freshly created and owned by
//! the stage that produces it. Numeric anomalies (NaN/Inf) propagate into
//! the output arrays untouched, while configuration and shape problems
//! are typed errors.

pub mod mc;
pub mod result;
pub mod sensitivity;

pub use mc::config::{SimulationConfig, SimulationConfigBuilder, MAX_STEPS, MAX_TRIALS};
pub use mc::engine::{discount_factors, swap_value_curve, SwapValuationEngine};
pub use mc::error::{ConfigError, PricingError};
pub use result::{ValuationPoint, ValuationResult};
pub use sensitivity::delta_curve;

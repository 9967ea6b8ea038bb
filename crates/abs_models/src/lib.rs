//! # abs_models: Synthetic Data and Rate Models
//!
//! Model layer of the abspricer workspace:
//! - [`SimRng`]: seeded PRNG wrapper for reproducible runs
//! - [`CashFlowSeries`]: synthetic notional cash flows
//! - [`ShortRateWalk`]: cumulative-walk short-rate path simulator
//!
//! All generation is deterministic for a given seed; a run draws its
//! cash-flow series first and its rate paths second from one RNG stream,
//! so a single seed reproduces every downstream artefact.

pub mod cashflow;
pub mod error;
pub mod rng;
pub mod short_rate;

pub use cashflow::{CashFlowParams, CashFlowSeries};
pub use error::ModelError;
pub use rng::SimRng;
pub use short_rate::{ShortRateWalk, ShortRateWalkParams};

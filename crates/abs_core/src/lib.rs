//! # abs_core: Foundation Types for the Abspricer Workspace
//!
//! Bottom layer of the workspace, providing:
//! - Time axis type: `TimeGrid` (`types::grid`)
//! - Row-major trial storage: `PathMatrix` (`types::matrix`)
//! - Numeric differentiation: `math::gradient`
//! - Error types: `GridError`, `MatrixError`, `GradientError`
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other abs_* crates, with minimal
//! external dependencies:
//! - num-traits: traits for generic numerical computation
//! - thiserror: error derivation
//! - serde: serialisation support (optional)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;

pub use math::gradient::{gradient, GradientError};
pub use types::grid::TimeGrid;
pub use types::matrix::PathMatrix;

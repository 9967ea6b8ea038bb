//! Numeric routines shared across the workspace.

pub mod gradient;

pub use gradient::{gradient, GradientError};

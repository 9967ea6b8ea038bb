//! Core data types shared across the workspace.

pub mod grid;
pub mod matrix;

pub use grid::{GridError, TimeGrid};
pub use matrix::{MatrixError, PathMatrix};

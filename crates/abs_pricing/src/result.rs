//! Valuation result table.
//!
//! Three index-aligned columns (time, swap value, delta) assembled into
//! rows, ready for CSV export or chart rendering.

use abs_core::TimeGrid;
use serde::Serialize;

use crate::mc::error::PricingError;

/// One row of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuationPoint {
    /// Grid time in years.
    pub time: f64,
    /// Cross-trial mean swap value at this time.
    pub swap_value: f64,
    /// Numeric time-derivative of the swap value curve.
    pub delta: f64,
}

/// The assembled result of one valuation run.
///
/// Rows are ordered by time and index-aligned with the grid the run used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationResult {
    points: Vec<ValuationPoint>,
}

impl ValuationResult {
    /// Zips the three curves into a row table.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::ShapeMismatch`] unless all three inputs
    /// share the grid's length.
    pub fn new(
        grid: &TimeGrid,
        swap_values: Vec<f64>,
        deltas: Vec<f64>,
    ) -> Result<Self, PricingError> {
        if swap_values.len() != grid.len() || deltas.len() != grid.len() {
            return Err(PricingError::shape_mismatch(format!(
                "result columns disagree: grid {}, swap values {}, deltas {}",
                grid.len(),
                swap_values.len(),
                deltas.len()
            )));
        }

        let points = grid
            .points()
            .iter()
            .zip(swap_values)
            .zip(deltas)
            .map(|((&time, swap_value), delta)| ValuationPoint {
                time,
                swap_value,
                delta,
            })
            .collect();

        Ok(Self { points })
    }

    /// Returns the table rows in time order.
    #[inline]
    pub fn points(&self) -> &[ValuationPoint] {
        &self.points
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the table holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the time column.
    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// Returns the swap value column.
    pub fn swap_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.swap_value).collect()
    }

    /// Returns the delta column.
    pub fn deltas(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.delta).collect()
    }
}

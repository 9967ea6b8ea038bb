//! Time axis for valuation curves.
//!
//! A [`TimeGrid`] is an ordered sequence of year fractions shared by every
//! curve and path matrix in a run. All series along the time axis are
//! index-aligned with one grid instance.

use thiserror::Error;

/// Errors raised when constructing a [`TimeGrid`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// Fewer than two points requested.
    #[error("time grid needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// Horizon bounds are not a valid interval.
    #[error("invalid horizon [{start}, {end}]: end must be finite and greater than start")]
    InvalidHorizon {
        /// Requested start of the horizon in years.
        start: f64,
        /// Requested end of the horizon in years.
        end: f64,
    },

    /// Explicit points are not strictly increasing or not finite.
    #[error("grid points must be finite and strictly increasing (violation at index {0})")]
    NotMonotonic(usize),
}

/// Evenly spaced valuation time axis in years.
///
/// Both endpoints are included and exact: `linspace(0.0, 5.0, 60)` starts
/// at `0.0` and ends at exactly `5.0`.
///
/// # Examples
///
/// ```
/// use abs_core::TimeGrid;
///
/// let grid = TimeGrid::linspace(0.0, 5.0, 60).unwrap();
/// assert_eq!(grid.len(), 60);
/// assert_eq!(grid.points()[0], 0.0);
/// assert_eq!(grid.points()[59], 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    /// Creates an evenly spaced grid of `n` points over `[start, end]`.
    ///
    /// # Arguments
    ///
    /// * `start` - First point (inclusive), in years
    /// * `end` - Last point (inclusive), in years; must exceed `start`
    /// * `n` - Number of points; must be at least 2
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooFewPoints`] if `n < 2` and
    /// [`GridError::InvalidHorizon`] if the bounds are non-finite or
    /// `end <= start`.
    pub fn linspace(start: f64, end: f64, n: usize) -> Result<Self, GridError> {
        if n < 2 {
            return Err(GridError::TooFewPoints(n));
        }
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(GridError::InvalidHorizon { start, end });
        }

        let step = (end - start) / (n - 1) as f64;
        let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
        // Pin the last point so the horizon end is exact despite rounding.
        points[n - 1] = end;

        Ok(Self { points })
    }

    /// Wraps an explicit, strictly increasing point sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooFewPoints`] for sequences shorter than 2 and
    /// [`GridError::NotMonotonic`] at the first index that is non-finite or
    /// not strictly greater than its predecessor.
    pub fn from_points(points: Vec<f64>) -> Result<Self, GridError> {
        if points.len() < 2 {
            return Err(GridError::TooFewPoints(points.len()));
        }
        if !points[0].is_finite() {
            return Err(GridError::NotMonotonic(0));
        }
        for i in 1..points.len() {
            if !points[i].is_finite() || points[i] <= points[i - 1] {
                return Err(GridError::NotMonotonic(i));
            }
        }
        Ok(Self { points })
    }

    /// Returns the grid points as a slice.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a grid holds at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point.
    #[inline]
    pub fn start(&self) -> f64 {
        self.points[0]
    }

    /// Returns the last point.
    #[inline]
    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }
}

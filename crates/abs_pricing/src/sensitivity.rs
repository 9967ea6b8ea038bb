//! Delta curve of the swap valuation.
//!
//! The delta here is the numeric derivative of the swap value curve with
//! respect to time, a smoothing/sensitivity indicator rather than an
//! analytic Greek.

use abs_core::{gradient, TimeGrid};

use crate::mc::error::PricingError;

/// Differentiates the swap value curve along the time grid.
///
/// # Errors
///
/// Returns [`PricingError::Gradient`] when the curve and grid disagree on
/// length or hold too few points.
pub fn delta_curve(swap_values: &[f64], grid: &TimeGrid) -> Result<Vec<f64>, PricingError> {
    Ok(gradient(swap_values, grid.points())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_delta_of_linear_curve() {
        let grid = TimeGrid::linspace(0.0, 5.0, 60).unwrap();
        let curve: Vec<f64> = grid.points().iter().map(|t| 2.0 * t - 1.0).collect();
        let delta = delta_curve(&curve, &grid).unwrap();
        assert_eq!(delta.len(), 60);
        for d in delta {
            assert_relative_eq!(d, 2.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_delta_interior_is_central_difference() {
        let grid = TimeGrid::linspace(0.0, 5.0, 60).unwrap();
        let t = grid.points();
        let curve: Vec<f64> = t.iter().map(|t| (t * 1.3).sin()).collect();
        let delta = delta_curve(&curve, &grid).unwrap();

        for i in 1..59 {
            let secant = (curve[i + 1] - curve[i - 1]) / (t[i + 1] - t[i - 1]);
            assert_relative_eq!(delta[i], secant, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_delta_length_mismatch() {
        let grid = TimeGrid::linspace(0.0, 5.0, 10).unwrap();
        let curve = vec![1.0; 9];
        assert!(matches!(
            delta_curve(&curve, &grid),
            Err(PricingError::Gradient(_))
        ));
    }
}

//! Finite-difference gradient of a sampled curve.
//!
//! Interior points use the second-order formula for (possibly uneven)
//! spacing, which reduces to the classic central difference
//! `(y[i+1] - y[i-1]) / 2h` on an even grid. The two edge points use
//! first-order one-sided differences. This matches the behaviour of the
//! usual array-library `gradient` routine and is a smoothing indicator,
//! not an analytic derivative.

use num_traits::Float;
use thiserror::Error;

/// Errors raised by [`gradient`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GradientError {
    /// Curve and coordinate slices differ in length.
    #[error("curve has {values} points but coordinate axis has {coords}")]
    LengthMismatch {
        /// Number of curve samples.
        values: usize,
        /// Number of coordinate samples.
        coords: usize,
    },

    /// Fewer than two samples were provided.
    #[error("gradient needs at least 2 points, got {0}")]
    TooFewPoints(usize),
}

/// Computes the numeric derivative of `values` with respect to `coords`.
///
/// # Arguments
///
/// * `values` - Curve samples, index-aligned with `coords`
/// * `coords` - Strictly increasing sample coordinates
///
/// # Errors
///
/// Returns [`GradientError::LengthMismatch`] when the slices differ in
/// length and [`GradientError::TooFewPoints`] for fewer than two samples.
/// Degenerate coordinates (repeated points) are not diagnosed here; they
/// surface as non-finite output values.
///
/// # Examples
///
/// ```
/// use abs_core::gradient;
///
/// // The derivative of a linear curve is recovered exactly.
/// let x = [0.0, 0.5, 1.0, 1.5];
/// let y: Vec<f64> = x.iter().map(|t| 3.0 * t + 1.0).collect();
/// let g = gradient(&y, &x).unwrap();
/// for slope in g {
///     assert!((slope - 3.0).abs() < 1e-12);
/// }
/// ```
pub fn gradient<T: Float>(values: &[T], coords: &[T]) -> Result<Vec<T>, GradientError> {
    if values.len() != coords.len() {
        return Err(GradientError::LengthMismatch {
            values: values.len(),
            coords: coords.len(),
        });
    }
    let n = values.len();
    if n < 2 {
        return Err(GradientError::TooFewPoints(n));
    }

    let mut out = vec![T::zero(); n];

    // One-sided differences at the edges.
    out[0] = (values[1] - values[0]) / (coords[1] - coords[0]);
    out[n - 1] = (values[n - 1] - values[n - 2]) / (coords[n - 1] - coords[n - 2]);

    // Second-order interior stencil for uneven spacing:
    // y'(i) = (hs^2 y[i+1] + (hd^2 - hs^2) y[i] - hd^2 y[i-1]) / (hs hd (hd + hs))
    // with hd = x[i] - x[i-1], hs = x[i+1] - x[i].
    for i in 1..n - 1 {
        let hd = coords[i] - coords[i - 1];
        let hs = coords[i + 1] - coords[i];
        let num = hs * hs * values[i + 1] + (hd * hd - hs * hs) * values[i]
            - hd * hd * values[i - 1];
        out[i] = num / (hs * hd * (hd + hs));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_curve_exact_everywhere() {
        let x: Vec<f64> = (0..60).map(|i| i as f64 * 5.0 / 59.0).collect();
        let y: Vec<f64> = x.iter().map(|t| -2.5 * t + 4.0).collect();
        let g = gradient(&y, &x).unwrap();
        assert_eq!(g.len(), 60);
        for slope in g {
            assert_relative_eq!(slope, -2.5, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_quadratic_interior_exact_on_even_grid() {
        // Central differences are exact for quadratics.
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.25).collect();
        let y: Vec<f64> = x.iter().map(|t| t * t).collect();
        let g = gradient(&y, &x).unwrap();
        for i in 1..19 {
            assert_relative_eq!(g[i], 2.0 * x[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_quadratic_interior_exact_on_uneven_grid() {
        let x = [0.0, 0.1, 0.35, 0.5, 1.2, 1.25];
        let y: Vec<f64> = x.iter().map(|t| t * t).collect();
        let g = gradient(&y, &x).unwrap();
        for i in 1..x.len() - 1 {
            assert_relative_eq!(g[i], 2.0 * x[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_edges_are_one_sided_secants() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 3.0, 4.0];
        let g = gradient(&y, &x).unwrap();
        assert_relative_eq!(g[0], 3.0);
        assert_relative_eq!(g[2], 1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let result = gradient(&[1.0, 2.0, 3.0], &[0.0, 1.0]);
        assert_eq!(
            result,
            Err(GradientError::LengthMismatch {
                values: 3,
                coords: 2
            })
        );
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(
            gradient::<f64>(&[1.0], &[0.0]),
            Err(GradientError::TooFewPoints(1))
        );
        assert_eq!(
            gradient::<f64>(&[], &[]),
            Err(GradientError::TooFewPoints(0))
        );
    }

    #[test]
    fn test_two_points_both_secant() {
        let g = gradient(&[1.0, 3.0], &[0.0, 4.0]).unwrap();
        assert_relative_eq!(g[0], 0.5);
        assert_relative_eq!(g[1], 0.5);
    }

    #[test]
    fn test_f32_compatibility() {
        let x = [0.0_f32, 0.5, 1.0];
        let y = [1.0_f32, 2.0, 3.0];
        let g = gradient(&y, &x).unwrap();
        assert!((g[1] - 2.0).abs() < 1e-6);
    }
}

//! Monte Carlo valuation engine.
//!
//! Discounts every simulated rate path against the time grid, prices the
//! fixed and floating swap legs per trial, and averages the leg difference
//! across trials into the swap value curve.

use abs_core::{PathMatrix, TimeGrid};
use abs_models::{CashFlowSeries, ShortRateWalk, SimRng};

use super::config::SimulationConfig;
use super::error::PricingError;
use crate::result::ValuationResult;
use crate::sensitivity::delta_curve;

/// Computes per-trial discount factors `exp(-rate * t)`.
///
/// Element `(i, j)` discounts trial `i` at grid point `j` using that
/// trial's own simulated short rate.
///
/// # Errors
///
/// Returns [`PricingError::ShapeMismatch`] if the path matrix and grid
/// disagree on the number of time steps.
pub fn discount_factors(
    paths: &PathMatrix,
    grid: &TimeGrid,
) -> Result<PathMatrix, PricingError> {
    if paths.n_cols() != grid.len() {
        return Err(PricingError::shape_mismatch(format!(
            "rate paths have {} steps but grid has {} points",
            paths.n_cols(),
            grid.len()
        )));
    }

    let mut disc = PathMatrix::zeros(paths.n_rows(), paths.n_cols())?;
    for trial in 0..paths.n_rows() {
        let rates = paths.row(trial);
        let out = disc.row_mut(trial);
        for ((d, &r), &t) in out.iter_mut().zip(rates).zip(grid.points()) {
            *d = (-r * t).exp();
        }
    }
    Ok(disc)
}

/// Averages the per-trial swap leg difference into one curve.
///
/// Per trial and grid point, the fixed leg pays `swap_rate * cf * disc`
/// and the floating leg pays `rate * cf * disc`; the curve is the
/// cross-trial mean of fixed minus floating.
///
/// # Errors
///
/// Returns [`PricingError::ShapeMismatch`] if the matrices or the
/// cash-flow series disagree on shape.
pub fn swap_value_curve(
    paths: &PathMatrix,
    disc: &PathMatrix,
    cashflows: &CashFlowSeries,
    swap_rate: f64,
) -> Result<Vec<f64>, PricingError> {
    if paths.n_rows() != disc.n_rows() || paths.n_cols() != disc.n_cols() {
        return Err(PricingError::shape_mismatch(format!(
            "rate paths are {}x{} but discount factors are {}x{}",
            paths.n_rows(),
            paths.n_cols(),
            disc.n_rows(),
            disc.n_cols()
        )));
    }
    if cashflows.len() != paths.n_cols() {
        return Err(PricingError::shape_mismatch(format!(
            "cash-flow series has {} points but paths have {} steps",
            cashflows.len(),
            paths.n_cols()
        )));
    }

    let n_steps = paths.n_cols();
    let mut sums = vec![0.0; n_steps];
    for trial in 0..paths.n_rows() {
        let rates = paths.row(trial);
        let discs = disc.row(trial);
        for j in 0..n_steps {
            // fixed PV - floating PV = (K - r) * cf * disc
            sums[j] += (swap_rate - rates[j]) * cashflows.values()[j] * discs[j];
        }
    }

    let denom = paths.n_rows() as f64;
    for s in &mut sums {
        *s /= denom;
    }
    Ok(sums)
}

/// End-to-end valuation pipeline for one configuration.
///
/// # Examples
///
/// ```rust
/// use abs_pricing::{SimulationConfig, SwapValuationEngine};
///
/// let engine = SwapValuationEngine::new(SimulationConfig::default()).unwrap();
/// let result = engine.run().unwrap();
/// assert_eq!(result.len(), 60);
/// ```
#[derive(Debug, Clone)]
pub struct SwapValuationEngine {
    config: SimulationConfig,
}

impl SwapValuationEngine {
    /// Creates an engine for a validated configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`SimulationConfig::validate`] failures.
    pub fn new(config: SimulationConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the full pipeline and returns the result table.
    ///
    /// One RNG stream is used per run with a fixed draw order (cash flows
    /// first, rate paths second), so the whole result is a pure function
    /// of the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] for grid, model, shape, or gradient
    /// failures. NaN/Inf values inside the arrays are not errors and
    /// propagate into the result.
    pub fn run(&self) -> Result<ValuationResult, PricingError> {
        let cfg = &self.config;

        let grid = TimeGrid::linspace(0.0, cfg.horizon_years(), cfg.n_steps())?;
        let mut rng = SimRng::from_seed(cfg.seed());

        let cashflows = CashFlowSeries::generate(&mut rng, cfg.cashflow(), cfg.n_steps())?;
        let paths =
            ShortRateWalk::simulate(&mut rng, cfg.rate_walk(), cfg.n_trials(), cfg.n_steps())?;

        let disc = discount_factors(&paths, &grid)?;
        let swap_values = swap_value_curve(&paths, &disc, &cashflows, cfg.swap_rate())?;
        let deltas = delta_curve(&swap_values, &grid)?;

        ValuationResult::new(&grid, swap_values, deltas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abs_models::{CashFlowParams, ShortRateWalkParams};
    use approx::assert_relative_eq;

    fn flat_paths(rate: f64, n_trials: usize, n_steps: usize) -> PathMatrix {
        PathMatrix::from_vec(vec![rate; n_trials * n_steps], n_trials, n_steps).unwrap()
    }

    fn constant_cashflows(value: f64, n: usize) -> CashFlowSeries {
        let params = CashFlowParams::new(value, 0.0).unwrap();
        CashFlowSeries::generate(&mut SimRng::from_seed(0), &params, n).unwrap()
    }

    #[test]
    fn test_discount_factors_at_time_zero() {
        let grid = TimeGrid::linspace(0.0, 5.0, 10).unwrap();
        let paths = flat_paths(0.04, 3, 10);
        let disc = discount_factors(&paths, &grid).unwrap();
        for trial in 0..3 {
            assert_eq!(disc.get(trial, 0), 1.0);
        }
    }

    #[test]
    fn test_discount_factors_closed_form() {
        let grid = TimeGrid::linspace(0.0, 2.0, 5).unwrap();
        let paths = flat_paths(0.03, 2, 5);
        let disc = discount_factors(&paths, &grid).unwrap();
        for (j, &t) in grid.points().iter().enumerate() {
            assert_relative_eq!(disc.get(0, j), (-0.03 * t).exp(), epsilon = 1e-14);
        }
    }

    #[test]
    fn test_discount_factors_shape_mismatch() {
        let grid = TimeGrid::linspace(0.0, 5.0, 10).unwrap();
        let paths = flat_paths(0.04, 3, 9);
        assert!(matches!(
            discount_factors(&paths, &grid),
            Err(PricingError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_swap_curve_closed_form_flat_rates() {
        // With every trial at rate r and constant cash flow cf, the curve
        // must equal (K - r) * cf * exp(-r t) exactly.
        let r = 0.03;
        let k = 0.025;
        let cf = 1000.0;
        let grid = TimeGrid::linspace(0.0, 5.0, 12).unwrap();
        let paths = flat_paths(r, 4, 12);
        let disc = discount_factors(&paths, &grid).unwrap();
        let cashflows = constant_cashflows(cf, 12);

        let curve = swap_value_curve(&paths, &disc, &cashflows, k).unwrap();
        assert_eq!(curve.len(), 12);
        for (j, &t) in grid.points().iter().enumerate() {
            let expected = (k - r) * cf * (-r * t).exp();
            assert_relative_eq!(curve[j], expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_swap_curve_shape_mismatches() {
        let grid = TimeGrid::linspace(0.0, 5.0, 10).unwrap();
        let paths = flat_paths(0.03, 4, 10);
        let disc = discount_factors(&paths, &grid).unwrap();

        let short_cashflows = constant_cashflows(1000.0, 9);
        assert!(matches!(
            swap_value_curve(&paths, &disc, &short_cashflows, 0.025),
            Err(PricingError::ShapeMismatch(_))
        ));

        let wrong_disc = flat_paths(1.0, 5, 10);
        let cashflows = constant_cashflows(1000.0, 10);
        assert!(matches!(
            swap_value_curve(&paths, &wrong_disc, &cashflows, 0.025),
            Err(PricingError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = SimulationConfig::builder().n_trials(0).build();
        assert!(config.is_err());

        // An unvalidated config cannot reach the engine, but a direct
        // default is accepted.
        assert!(SwapValuationEngine::new(SimulationConfig::default()).is_ok());
    }

    #[test]
    fn test_engine_run_shapes_and_determinism() {
        let config = SimulationConfig::builder()
            .n_trials(50)
            .n_steps(30)
            .build()
            .unwrap();
        let engine = SwapValuationEngine::new(config.clone()).unwrap();

        let a = engine.run().unwrap();
        let b = SwapValuationEngine::new(config).unwrap().run().unwrap();

        assert_eq!(a.len(), 30);
        assert_eq!(a, b);
    }

    #[test]
    fn test_engine_zero_vol_matches_closed_form() {
        // Zero step volatility makes every trial identical, so the Monte
        // Carlo mean collapses onto the single-path closed form.
        let rate_walk = ShortRateWalkParams::new(0.02, 0.0, 0.01, 0.02).unwrap();
        let cashflow = CashFlowParams::new(1000.0, 0.0).unwrap();
        let config = SimulationConfig::builder()
            .n_trials(10)
            .n_steps(20)
            .rate_walk(rate_walk)
            .cashflow(cashflow)
            .build()
            .unwrap();

        let result = SwapValuationEngine::new(config.clone()).unwrap().run().unwrap();

        let grid = TimeGrid::linspace(0.0, 5.0, 20).unwrap();
        for (j, point) in result.points().iter().enumerate() {
            let t = grid.points()[j];
            // rate[j] = base + scale * mean * (j + 1) with no noise
            let r = 0.02 + 0.01 * 0.02 * (j + 1) as f64;
            let expected = (config.swap_rate() - r) * 1000.0 * (-r * t).exp();
            assert_relative_eq!(point.swap_value, expected, epsilon = 1e-10);
        }
    }
}

//! Synthetic notional cash-flow series.
//!
//! Produces one cash flow per time-grid point: a fixed base amount with
//! Gaussian noise, `cf = base * (1 + noise * z)`. Values are not clamped,
//! so a large draw can in principle produce a negative flow; that is data,
//! not an error.

use crate::error::ModelError;
use crate::rng::SimRng;

/// Parameters for the synthetic cash-flow generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlowParams {
    /// Base notional cash flow per period.
    pub base: f64,
    /// Relative noise amplitude (one standard deviation).
    pub noise: f64,
}

impl CashFlowParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Rejects non-finite values and negative noise.
    pub fn new(base: f64, noise: f64) -> Result<Self, ModelError> {
        if !base.is_finite() {
            return Err(ModelError::invalid_parameter("base", "must be finite"));
        }
        if !noise.is_finite() || noise < 0.0 {
            return Err(ModelError::invalid_parameter(
                "noise",
                "must be finite and non-negative",
            ));
        }
        Ok(Self { base, noise })
    }
}

impl Default for CashFlowParams {
    fn default() -> Self {
        // 1000 notional with 3% noise.
        Self {
            base: 1000.0,
            noise: 0.03,
        }
    }
}

/// Synthetic cash-flow series, index-aligned with the time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowSeries {
    values: Vec<f64>,
}

impl CashFlowSeries {
    /// Draws an `n`-point series from the generator's RNG stream.
    ///
    /// # Arguments
    ///
    /// * `rng` - Simulation RNG (draw order matters for reproducibility)
    /// * `params` - Base amount and noise amplitude
    /// * `n` - Number of points; must be non-zero
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidDimension`] if `n` is zero.
    pub fn generate(
        rng: &mut SimRng,
        params: &CashFlowParams,
        n: usize,
    ) -> Result<Self, ModelError> {
        if n == 0 {
            return Err(ModelError::InvalidDimension(
                "cash-flow series needs at least one point".to_string(),
            ));
        }

        let mut draws = vec![0.0; n];
        rng.fill_normal(&mut draws);

        let values = draws
            .into_iter()
            .map(|z| params.base * (1.0 + params.noise * z))
            .collect();

        Ok(Self { values })
    }

    /// Returns the series values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

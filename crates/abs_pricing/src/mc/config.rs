//! Simulation configuration.
//!
//! [`SimulationConfig`] is the immutable parameter set for one valuation
//! run. The defaults reproduce the reference scenario (seed 42, 1000
//! trials, 60 steps over 5 years, 2.5% swap rate); use
//! [`SimulationConfigBuilder`] to override individual fields.

use abs_models::{CashFlowParams, ShortRateWalkParams};

use super::error::ConfigError;

/// Maximum number of simulation trials allowed.
pub const MAX_TRIALS: usize = 10_000_000;

/// Maximum number of time steps allowed per trial.
pub const MAX_STEPS: usize = 10_000;

/// Monte Carlo valuation configuration.
///
/// # Examples
///
/// ```rust
/// use abs_pricing::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_trials(10_000)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 10_000);
/// assert_eq!(config.n_steps(), 60);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    n_trials: usize,
    n_steps: usize,
    horizon_years: f64,
    swap_rate: f64,
    seed: u64,
    cashflow: CashFlowParams,
    rate_walk: ShortRateWalkParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_trials: 1000,
            n_steps: 60,
            horizon_years: 5.0,
            swap_rate: 0.025,
            seed: 42,
            cashflow: CashFlowParams::default(),
            rate_walk: ShortRateWalkParams::default(),
        }
    }
}

impl SimulationConfig {
    /// Creates a new configuration builder seeded with the defaults.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the number of time steps per trial.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the valuation horizon in years.
    #[inline]
    pub fn horizon_years(&self) -> f64 {
        self.horizon_years
    }

    /// Returns the fixed swap rate.
    #[inline]
    pub fn swap_rate(&self) -> f64 {
        self.swap_rate
    }

    /// Returns the RNG seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the cash-flow generator parameters.
    #[inline]
    pub fn cashflow(&self) -> &CashFlowParams {
        &self.cashflow
    }

    /// Returns the short-rate walk parameters.
    #[inline]
    pub fn rate_walk(&self) -> &ShortRateWalkParams {
        &self.rate_walk
    }

    /// Validates the configuration bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if:
    /// - `n_trials` is 0 or greater than [`MAX_TRIALS`]
    /// - `n_steps` is below 2 or greater than [`MAX_STEPS`]
    /// - the horizon is not positive and finite
    /// - the swap rate is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trials == 0 || self.n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_trials));
        }
        if self.n_steps < 2 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if !self.horizon_years.is_finite() || self.horizon_years <= 0.0 {
            return Err(ConfigError::InvalidHorizon(self.horizon_years));
        }
        if !self.swap_rate.is_finite() {
            return Err(ConfigError::InvalidSwapRate(self.swap_rate));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields keep their default values, so a partial override stays a
/// valid reference scenario.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation trials.
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.config.n_trials = n_trials;
        self
    }

    /// Sets the number of time steps per trial.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.config.n_steps = n_steps;
        self
    }

    /// Sets the valuation horizon in years.
    #[inline]
    pub fn horizon_years(mut self, horizon_years: f64) -> Self {
        self.config.horizon_years = horizon_years;
        self
    }

    /// Sets the fixed swap rate.
    #[inline]
    pub fn swap_rate(mut self, swap_rate: f64) -> Self {
        self.config.swap_rate = swap_rate;
        self
    }

    /// Sets the RNG seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets the cash-flow generator parameters.
    #[inline]
    pub fn cashflow(mut self, cashflow: CashFlowParams) -> Self {
        self.config.cashflow = cashflow;
        self
    }

    /// Sets the short-rate walk parameters.
    #[inline]
    pub fn rate_walk(mut self, rate_walk: ShortRateWalkParams) -> Self {
        self.config.rate_walk = rate_walk;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`SimulationConfig::validate`] failures.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

//! CLI configuration management.
//!
//! Handles loading of run configuration from TOML files with environment
//! variable override support. Every default reproduces the reference
//! scenario, so a missing file is not an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use abs_models::{CashFlowParams, ShortRateWalkParams};
use abs_pricing::{PricingError, SimulationConfig};

/// Simulation parameter section
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimulationSection {
    /// RNG seed
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of Monte Carlo trials
    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Number of time-grid points
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Valuation horizon in years
    #[serde(default = "default_horizon")]
    pub horizon_years: f64,

    /// Fixed swap rate
    #[serde(default = "default_swap_rate")]
    pub swap_rate: f64,

    /// Base notional cash flow
    #[serde(default = "default_cashflow_base")]
    pub cashflow_base: f64,

    /// Relative cash-flow noise amplitude
    #[serde(default = "default_cashflow_noise")]
    pub cashflow_noise: f64,

    /// Mean of one rate-walk step
    #[serde(default = "default_rate_step_mean")]
    pub rate_step_mean: f64,

    /// Standard deviation of one rate-walk step
    #[serde(default = "default_rate_step_vol")]
    pub rate_step_vol: f64,

    /// Scale applied to the accumulated walk
    #[serde(default = "default_rate_cum_scale")]
    pub rate_cum_scale: f64,

    /// Base short rate
    #[serde(default = "default_rate_base")]
    pub rate_base: f64,
}

/// Output path section
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputSection {
    /// Result table CSV path (overwritten each run)
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,

    /// Chart JSON path (overwritten each run)
    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Simulation parameters
    #[serde(default)]
    pub simulation: SimulationSection,

    /// Output paths
    #[serde(default)]
    pub output: OutputSection,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_seed() -> u64 {
    42
}

fn default_trials() -> usize {
    1000
}

fn default_steps() -> usize {
    60
}

fn default_horizon() -> f64 {
    5.0
}

fn default_swap_rate() -> f64 {
    0.025
}

fn default_cashflow_base() -> f64 {
    1000.0
}

fn default_cashflow_noise() -> f64 {
    0.03
}

fn default_rate_step_mean() -> f64 {
    0.02
}

fn default_rate_step_vol() -> f64 {
    0.005
}

fn default_rate_cum_scale() -> f64 {
    0.01
}

fn default_rate_base() -> f64 {
    0.02
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("abs_derivative_results.csv")
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("abs_derivative_chart.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            trials: default_trials(),
            steps: default_steps(),
            horizon_years: default_horizon(),
            swap_rate: default_swap_rate(),
            cashflow_base: default_cashflow_base(),
            cashflow_noise: default_cashflow_noise(),
            rate_step_mean: default_rate_step_mean(),
            rate_step_vol: default_rate_step_vol(),
            rate_cum_scale: default_rate_cum_scale(),
            rate_base: default_rate_base(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            chart_path: default_chart_path(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationSection::default(),
            output: OutputSection::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from the given path or return the defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(seed) = std::env::var("ABSPRICER_SEED") {
            if let Ok(seed) = seed.parse() {
                self.simulation.seed = seed;
            }
        }

        if let Ok(trials) = std::env::var("ABSPRICER_TRIALS") {
            if let Ok(trials) = trials.parse() {
                self.simulation.trials = trials;
            }
        }

        if let Ok(csv_path) = std::env::var("ABSPRICER_CSV_PATH") {
            self.output.csv_path = PathBuf::from(csv_path);
        }

        if let Ok(chart_path) = std::env::var("ABSPRICER_CHART_PATH") {
            self.output.chart_path = PathBuf::from(chart_path);
        }

        if let Ok(log_level) = std::env::var("ABSPRICER_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.simulation.trials == 0 {
            errors.push("trials must be greater than 0".to_string());
        }

        if self.simulation.steps < 2 {
            errors.push("steps must be at least 2".to_string());
        }

        if !self.simulation.horizon_years.is_finite() || self.simulation.horizon_years <= 0.0 {
            errors.push(format!(
                "horizon_years {} must be positive and finite",
                self.simulation.horizon_years
            ));
        }

        if self.simulation.cashflow_noise < 0.0 {
            errors.push("cashflow_noise must not be negative".to_string());
        }

        if self.simulation.rate_step_vol < 0.0 {
            errors.push("rate_step_vol must not be negative".to_string());
        }

        if self.output.csv_path.as_os_str().is_empty() {
            errors.push("csv_path cannot be empty".to_string());
        }

        if self.output.chart_path.as_os_str().is_empty() {
            errors.push("chart_path cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Build the pricing configuration, applying CLI overrides
    pub fn to_simulation_config(
        &self,
        seed_override: Option<u64>,
        trials_override: Option<usize>,
    ) -> Result<SimulationConfig, PricingError> {
        let sim = &self.simulation;

        let cashflow = CashFlowParams::new(sim.cashflow_base, sim.cashflow_noise)?;
        let rate_walk = ShortRateWalkParams::new(
            sim.rate_step_mean,
            sim.rate_step_vol,
            sim.rate_cum_scale,
            sim.rate_base,
        )?;

        let config = SimulationConfig::builder()
            .seed(seed_override.unwrap_or(sim.seed))
            .n_trials(trials_override.unwrap_or(sim.trials))
            .n_steps(sim.steps)
            .horizon_years(sim.horizon_years)
            .swap_rate(sim.swap_rate)
            .cashflow(cashflow)
            .rate_walk(rate_walk)
            .build()?;

        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_reference_scenario() {
        let config = AppConfig::default();
        assert_eq!(config.simulation.seed, 42);
        assert_eq!(config.simulation.trials, 1000);
        assert_eq!(config.simulation.steps, 60);
        assert_eq!(config.simulation.horizon_years, 5.0);
        assert_eq!(config.simulation.swap_rate, 0.025);
        assert_eq!(
            config.output.csv_path,
            PathBuf::from("abs_derivative_results.csv")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            log_level = "debug"

            [simulation]
            seed = 7
            trials = 250

            [output]
            csv_path = "out/results.csv"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.trials, 250);
        // Unset fields keep their defaults.
        assert_eq!(config.simulation.steps, 60);
        assert_eq!(config.output.csv_path, PathBuf::from("out/results.csv"));
        assert_eq!(
            config.output.chart_path,
            PathBuf::from("abs_derivative_chart.json")
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_missing_file_falls_back_to_default() {
        let config = AppConfig::load_or_default(Path::new("definitely/not/here.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("ABSPRICER_SEED", "99");
        let config = AppConfig::default().with_env_override();
        assert_eq!(config.simulation.seed, 99);
        std::env::remove_var("ABSPRICER_SEED");
    }

    #[test]
    fn test_env_override_ignores_unparsable_values() {
        std::env::set_var("ABSPRICER_TRIALS", "not-a-number");
        let config = AppConfig::default().with_env_override();
        assert_eq!(config.simulation.trials, 1000);
        std::env::remove_var("ABSPRICER_TRIALS");
    }

    #[test]
    fn test_validate_collects_multiple_errors() {
        let mut config = AppConfig::default();
        config.log_level = "loud".to_string();
        config.simulation.trials = 0;
        config.simulation.steps = 1;

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.len() >= 3, "Expected at least 3 validation errors");
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_invalid_horizon() {
        let mut config = AppConfig::default();
        config.simulation.horizon_years = -1.0;

        let result = config.validate();
        assert!(result.is_err());

        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("horizon_years")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_to_simulation_config_with_overrides() {
        let config = AppConfig::default();
        let sim = config.to_simulation_config(Some(123), Some(10)).unwrap();
        assert_eq!(sim.seed(), 123);
        assert_eq!(sim.n_trials(), 10);
        assert_eq!(sim.n_steps(), 60);
        assert_eq!(sim.swap_rate(), 0.025);
    }

    #[test]
    fn test_to_simulation_config_defaults_pass_through() {
        let config = AppConfig::default();
        let sim = config.to_simulation_config(None, None).unwrap();
        assert_eq!(sim.seed(), 42);
        assert_eq!(sim.n_trials(), 1000);
        assert_eq!(sim.cashflow().base, 1000.0);
        assert_eq!(sim.rate_walk().step_vol, 0.005);
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}

//! Chart command implementation
//!
//! Executes the valuation pipeline and displays the interactive terminal
//! chart until the user dismisses it.

use tracing::info;

use abs_pricing::SwapValuationEngine;

use crate::config::AppConfig;
use crate::output::tui;
use crate::Result;

/// Run the pipeline and display the TUI chart
pub fn run(config: &AppConfig, seed: Option<u64>, trials: Option<usize>) -> Result<()> {
    let sim_config = config.to_simulation_config(seed, trials)?;

    info!(
        "Running swap valuation ({} trials, seed {})...",
        sim_config.n_trials(),
        sim_config.seed()
    );

    let engine = SwapValuationEngine::new(sim_config)?;
    let result = engine.run()?;

    info!("Displaying chart; press q or Esc to exit");
    tui::display(&result)?;

    Ok(())
}

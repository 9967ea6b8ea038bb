//! Run command implementation
//!
//! Executes the valuation pipeline and exports the result table as CSV
//! plus a chart.js-compatible JSON chart description.

use std::path::Path;

use tracing::info;

use abs_pricing::SwapValuationEngine;

use crate::config::AppConfig;
use crate::output::{chartjs, csv_out};
use crate::Result;

/// Run the pipeline and write both export artefacts
pub fn run(
    config: &AppConfig,
    seed: Option<u64>,
    trials: Option<usize>,
    csv_override: Option<&Path>,
    chart_override: Option<&Path>,
) -> Result<()> {
    let sim_config = config.to_simulation_config(seed, trials)?;

    info!("Running swap valuation...");
    info!("  Seed: {}", sim_config.seed());
    info!("  Trials: {}", sim_config.n_trials());
    info!("  Steps: {}", sim_config.n_steps());
    info!("  Swap rate: {}", sim_config.swap_rate());

    let engine = SwapValuationEngine::new(sim_config)?;
    let result = engine.run()?;

    let csv_path = csv_override.unwrap_or_else(|| config.output.csv_path.as_path());
    csv_out::write_csv(&result, csv_path)?;
    info!("Wrote {} rows to {}", result.len(), csv_path.display());

    let chart_path = chart_override.unwrap_or_else(|| config.output.chart_path.as_path());
    let chart = chartjs::line_chart(&result);
    chartjs::write_json(&chart, chart_path)?;
    info!("Wrote chart description to {}", chart_path.display());

    let points = result.points();
    info!(
        "Swap value: {:.4} at t={:.2} ... {:.4} at t={:.2}",
        points[0].swap_value,
        points[0].time,
        points[points.len() - 1].swap_value,
        points[points.len() - 1].time
    );

    Ok(())
}

//! Abspricer CLI - ABS Swap Valuation and Sensitivity
//!
//! Operational entry point for the abspricer workspace.
//!
//! # Commands
//!
//! - `abspricer run` - Run the Monte Carlo pipeline and export CSV + chart JSON
//! - `abspricer chart` - Run the pipeline and display the chart in the terminal
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! model and pricing layers behind a unified command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::AppConfig;

/// ABS swap Monte Carlo pricing CLI
#[derive(Parser)]
#[command(name = "abspricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "abspricer.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the valuation pipeline and export the result table and chart
    Run {
        /// RNG seed override
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of Monte Carlo trials
        #[arg(short = 'n', long)]
        trials: Option<usize>,

        /// Output CSV path override
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Chart JSON path override
        #[arg(long)]
        chart_json: Option<PathBuf>,
    },

    /// Run the valuation pipeline and display the chart in the terminal
    Chart {
        /// RNG seed override
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of Monte Carlo trials
        #[arg(short = 'n', long)]
        trials: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let app_config = AppConfig::load_or_default(&cli.config).with_env_override();
    app_config.validate()?;

    match cli.command {
        Commands::Run {
            seed,
            trials,
            output,
            chart_json,
        } => commands::run::run(
            &app_config,
            seed,
            trials,
            output.as_deref(),
            chart_json.as_deref(),
        )?,
        Commands::Chart { seed, trials } => commands::chart::run(&app_config, seed, trials)?,
    }

    Ok(())
}

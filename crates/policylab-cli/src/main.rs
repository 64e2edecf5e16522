//! `policylab` -- evaluate gig-platform market equilibria from the shell.
//!
//! # Startup Sequence
//!
//! 1. Parse the command line
//! 2. Load configuration from `--config`, `POLICYLAB_CONFIG` or
//!    `policylab-config.yaml` (defaults when none exists)
//! 3. Initialize structured logging (tracing)
//! 4. Build the engine from the configured constants
//! 5. Run the subcommand and print its output
//!
//! Usage:
//!   policylab compute --r 0.25 --competition 0.2 --strict
//!   policylab scenario strict-regulation
//!   policylab presets
//!   policylab export --output presets.csv
//!   policylab report --r 0.3 --competition 0.1 --format json

mod commands;
mod error;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use policylab_core::{EquilibriumEngine, LabConfig, LoggingConfig, ScenarioPreset};
use policylab_types::{
    DEFAULT_COMPETITION, DEFAULT_INNOVATION, DEFAULT_MONITORING, DEFAULT_REGULATION,
    ParameterVector,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::ReportFormat;
use crate::error::CliError;

/// Configuration file read when no path is given.
const DEFAULT_CONFIG_PATH: &str = "policylab-config.yaml";

/// Gig-platform policy lab
#[derive(Parser, Debug)]
#[command(name = "policylab", version)]
#[command(about = "Compute delivery-platform market equilibria under policy scenarios")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "POLICYLAB_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single parameter vector and print the snapshot as JSON
    Compute {
        #[command(flatten)]
        params: ParamArgs,

        /// Reject parameters outside their documented ranges
        #[arg(long)]
        strict: bool,
    },

    /// Evaluate a named preset
    Scenario {
        /// Preset key (baseline, strict-regulation, intense-competition,
        /// innovation-breakthrough)
        name: ScenarioPreset,
    },

    /// Evaluate every preset and print a comparison with historical analysis
    Presets,

    /// Assess a parameter vector against the presets and print a policy report
    Report {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Evaluate every preset and write the history as CSV
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// The nine model parameters; defaults are the calibration point.
#[derive(Args, Debug)]
struct ParamArgs {
    /// Platform commission rate, [0, 1)
    #[arg(long, default_value_t = 0.2)]
    r: f64,

    /// Labor intensity, (0, 10]
    #[arg(long, default_value_t = 2.5)]
    e: f64,

    /// Algorithm efficiency, (0, 1]
    #[arg(long, default_value_t = 0.85)]
    eta: f64,

    /// Consumer wait tolerance in minutes, (0, 240]
    #[arg(long, default_value_t = 30.0)]
    tau: f64,

    /// Social-optimum blending weight, [0, 1]
    #[arg(long, default_value_t = 0.0)]
    lambda: f64,

    /// Algorithmic monitoring strength, [0, 1]
    #[arg(long, default_value_t = DEFAULT_MONITORING)]
    monitoring: f64,

    /// Market competition level, [0, 1]
    #[arg(long, default_value_t = DEFAULT_COMPETITION)]
    competition: f64,

    /// Regulation strength, [0, 1]
    #[arg(long, default_value_t = DEFAULT_REGULATION)]
    regulation: f64,

    /// Technology innovation level, [0, 1]
    #[arg(long, default_value_t = DEFAULT_INNOVATION)]
    innovation: f64,
}

impl From<&ParamArgs> for ParameterVector {
    fn from(args: &ParamArgs) -> Self {
        Self::new(args.r, args.e, args.eta, args.tau, args.lambda)
            .with_monitoring(args.monitoring)
            .with_competition(args.competition)
            .with_regulation(args.regulation)
            .with_innovation(args.innovation)
    }
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, strict
/// validation rejects the parameters, or the export cannot be written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging);
    info!(
        history_capacity = config.history.capacity,
        trend_window = config.history.trend_window,
        rider_count = config.constants.riders.count,
        "Configuration loaded"
    );

    let engine = EquilibriumEngine::new(config.constants);

    match cli.command {
        Commands::Compute { params, strict } => {
            let params = ParameterVector::from(&params);
            println!("{}", commands::compute(&engine, &params, strict)?);
        }
        Commands::Scenario { name } => {
            println!("{}", commands::scenario(&engine, name)?);
        }
        Commands::Presets => {
            println!("{}", commands::presets(&engine, &config.history)?);
        }
        Commands::Report { params, format } => {
            let params = ParameterVector::from(&params);
            let report = commands::report(&engine, &config.history, &params, format)?;
            println!("{}", report.trim_end());
        }
        Commands::Export { output } => {
            let rows = commands::export(&engine, &config.history, &output)?;
            println!("wrote {rows} rows to {}", output.display());
        }
    }

    Ok(())
}

/// Load configuration from the given path, or from `policylab-config.yaml`.
///
/// An explicit path must exist. Without one, a missing default file means
/// the built-in calibration is used.
fn load_config(path: Option<&Path>) -> Result<LabConfig, CliError> {
    if let Some(path) = path {
        return Ok(LabConfig::from_file(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Ok(LabConfig::from_file(default_path)?)
    } else {
        Ok(LabConfig::from_env())
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the
/// configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

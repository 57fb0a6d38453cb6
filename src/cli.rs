use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Quarterly subscriber forecasting.
#[derive(Parser)]
#[command(
    name = "quartercast",
    version,
    about = "Quarterly subscriber forecasting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Load a series (or the demo series) and forecast it.
    Forecast(ForecastArgs),
    /// Write the synthetic demo series as CSV.
    Sample(SampleArgs),
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// CSV with `Time period` and `Subscribers` columns. Omit to use the
    /// synthetic demo series.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Quarters to forecast (4 to 24, in steps of 4). Overrides config.
    #[arg(short = 'H', long, value_parser = parse_horizon)]
    pub horizon: Option<usize>,

    /// Also report the trend/seasonal components.
    #[arg(long, overrides_with = "no_components")]
    pub components: bool,

    /// Do not report components, even if the config enables them.
    #[arg(long = "no-components", overrides_with = "components")]
    pub no_components: bool,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the synthetic series seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write a JSON report (series, forecast, window, components) here.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ForecastArgs {
    /// Tri-state components flag: `None` defers to the config file.
    pub fn components_flag(&self) -> Option<bool> {
        match (self.components, self.no_components) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the `sample` subcommand.
#[derive(clap::Args)]
pub struct SampleArgs {
    /// Output CSV path; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the synthetic series seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Smallest selectable horizon.
pub const MIN_HORIZON: usize = 4;
/// Largest selectable horizon.
pub const MAX_HORIZON: usize = 24;
/// Horizon step.
pub const HORIZON_STEP: usize = 4;

/// Checks a horizon against the selectable range.
pub fn validate_horizon(horizon: usize) -> Result<usize, String> {
    if !(MIN_HORIZON..=MAX_HORIZON).contains(&horizon) || horizon % HORIZON_STEP != 0 {
        return Err(format!(
            "horizon must be one of {MIN_HORIZON}, {}, ..., {MAX_HORIZON} (got {horizon})",
            MIN_HORIZON + HORIZON_STEP
        ));
    }
    Ok(horizon)
}

fn parse_horizon(s: &str) -> Result<usize, String> {
    let horizon: usize = s
        .parse()
        .map_err(|_| format!("horizon must be a whole number (got {s:?})"))?;
    validate_horizon(horizon)
}

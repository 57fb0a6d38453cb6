//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::cli::validate_horizon;
use crate::config::*;

use quartercast_forecast::{AdditiveConfig, YearlySeasonality};
use quartercast_io::SyntheticConfig;

/// Default seed of the synthetic series.
pub const DEFAULT_SEED: u64 = 42;

/// Parses a yearly seasonality mode name into the corresponding enum variant.
pub fn parse_yearly(s: &str) -> Result<YearlySeasonality> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(YearlySeasonality::Auto),
        "true" | "on" | "enabled" => Ok(YearlySeasonality::Enabled),
        "false" | "off" | "disabled" => Ok(YearlySeasonality::Disabled),
        other => bail!("unknown yearly_seasonality: {other:?} (expected auto, on or off)"),
    }
}

/// Builds an [`AdditiveConfig`] from the TOML forecast section.
pub fn build_additive_config(f: &ForecastToml) -> Result<AdditiveConfig> {
    let cfg = AdditiveConfig::new()
        .with_interval_width(f.interval_width)
        .with_n_changepoints(f.n_changepoints)
        .with_changepoint_range(f.changepoint_range)
        .with_changepoint_prior_scale(f.changepoint_prior_scale)
        .with_seasonality_prior_scale(f.seasonality_prior_scale)
        .with_yearly(parse_yearly(&f.yearly_seasonality)?)
        .with_yearly_order(f.yearly_order);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`SyntheticConfig`] from the TOML synthetic section.
///
/// The seed comes from the CLI override, then the config file, then
/// [`DEFAULT_SEED`].
pub fn build_synthetic_config(
    s: &SyntheticToml,
    config_seed: Option<u64>,
    cli_seed: Option<u64>,
) -> Result<SyntheticConfig> {
    let seed = cli_seed.or(config_seed).unwrap_or(DEFAULT_SEED);
    let cfg = SyntheticConfig::default()
        .with_seed(seed)
        .with_base(s.base)
        .with_range(s.start, s.end)
        .with_growth(s.growth_low, s.growth_high);
    cfg.validate()?;
    Ok(cfg)
}

/// Resolves the forecast horizon: CLI flag, then config file.
pub fn resolve_horizon(f: &ForecastToml, cli_horizon: Option<usize>) -> Result<usize> {
    let horizon = cli_horizon.unwrap_or(f.horizon);
    validate_horizon(horizon).map_err(anyhow::Error::msg)
}

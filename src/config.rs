use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level quartercast configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuartercastConfig {
    /// Seed of the synthetic demo series.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Forecast settings.
    #[serde(default)]
    pub forecast: ForecastToml,

    /// Synthetic series settings.
    #[serde(default)]
    pub synthetic: SyntheticToml,
}

impl QuartercastConfig {
    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&text).context("failed to parse TOML config")
    }

    /// Reads `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    #[serde(default)]
    pub show_components: bool,
    #[serde(default = "default_interval_width")]
    pub interval_width: f64,
    #[serde(default = "default_n_changepoints")]
    pub n_changepoints: usize,
    #[serde(default = "default_changepoint_range")]
    pub changepoint_range: f64,
    #[serde(default = "default_changepoint_prior_scale")]
    pub changepoint_prior_scale: f64,
    #[serde(default = "default_seasonality_prior_scale")]
    pub seasonality_prior_scale: f64,
    #[serde(default = "default_yearly")]
    pub yearly_seasonality: String,
    #[serde(default = "default_yearly_order")]
    pub yearly_order: usize,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            show_components: false,
            interval_width: default_interval_width(),
            n_changepoints: default_n_changepoints(),
            changepoint_range: default_changepoint_range(),
            changepoint_prior_scale: default_changepoint_prior_scale(),
            seasonality_prior_scale: default_seasonality_prior_scale(),
            yearly_seasonality: default_yearly(),
            yearly_order: default_yearly_order(),
        }
    }
}

fn default_horizon() -> usize {
    8
}
fn default_interval_width() -> f64 {
    0.8
}
fn default_n_changepoints() -> usize {
    25
}
fn default_changepoint_range() -> f64 {
    0.8
}
fn default_changepoint_prior_scale() -> f64 {
    0.05
}
fn default_seasonality_prior_scale() -> f64 {
    10.0
}
fn default_yearly() -> String {
    "auto".to_string()
}
fn default_yearly_order() -> usize {
    2
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyntheticToml {
    #[serde(default = "default_base")]
    pub base: u64,
    #[serde(default = "default_start")]
    pub start: NaiveDate,
    #[serde(default = "default_end")]
    pub end: NaiveDate,
    #[serde(default = "default_growth_low")]
    pub growth_low: f64,
    #[serde(default = "default_growth_high")]
    pub growth_high: f64,
}

impl Default for SyntheticToml {
    fn default() -> Self {
        Self {
            base: default_base(),
            start: default_start(),
            end: default_end(),
            growth_low: default_growth_low(),
            growth_high: default_growth_high(),
        }
    }
}

fn default_base() -> u64 {
    20_000_000
}
fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 3, 31).unwrap_or_default()
}
fn default_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default()
}
fn default_growth_low() -> f64 {
    0.03
}
fn default_growth_high() -> f64 {
    0.08
}

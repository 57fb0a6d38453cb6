//! Deterministic synthetic subscriber series.
//!
//! Used when no input file is supplied. The series compounds a base count by
//! a uniformly drawn quarterly growth rate at every quarter end of a fixed
//! date range. A fixed seed always produces the same series.

use chrono::NaiveDate;
use quartercast_calendar::quarter_end_range;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::IoError;
use crate::series::{CanonicalSeries, SeriesPoint};
use crate::validate::ValidationCollector;

/// Settings for [`SyntheticSeriesGenerator`].
///
/// Use the builder methods (`with_*`) to override the defaults: seed 42,
/// base count 20,000,000, quarter ends from 2014-03-31 through 2024-12-31,
/// growth drawn from `[0.03, 0.08)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticConfig {
    /// RNG seed.
    seed: u64,
    /// Starting subscriber count before the first growth step.
    base: u64,
    /// First date of the range (inclusive).
    start: NaiveDate,
    /// Last date of the range (inclusive).
    end: NaiveDate,
    /// Lower bound of the quarterly growth rate (inclusive).
    growth_low: f64,
    /// Upper bound of the quarterly growth rate (exclusive).
    growth_high: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            base: 20_000_000,
            start: NaiveDate::from_ymd_opt(2014, 3, 31).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            growth_low: 0.03,
            growth_high: 0.08,
        }
    }
}

impl SyntheticConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting subscriber count.
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Set the inclusive date range.
    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the quarterly growth bounds.
    pub fn with_growth(mut self, low: f64, high: f64) -> Self {
        self.growth_low = low;
        self.growth_high = high;
        self
    }

    /// Returns the RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the starting subscriber count.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Returns the inclusive date range.
    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Returns the growth bounds `(low, high)`.
    pub fn growth(&self) -> (f64, f64) {
        (self.growth_low, self.growth_high)
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every problem found.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        if self.base == 0 {
            c.push("base must be positive");
        }
        if self.start > self.end {
            c.push(format!("start {} is after end {}", self.start, self.end));
        }
        if !self.growth_low.is_finite() || !self.growth_high.is_finite() {
            c.push("growth bounds must be finite");
        } else {
            if self.growth_low >= self.growth_high {
                c.push(format!(
                    "growth_low ({}) must be below growth_high ({})",
                    self.growth_low, self.growth_high
                ));
            }
            if self.growth_low <= -1.0 {
                c.push(format!("growth_low ({}) must exceed -1", self.growth_low));
            }
        }
        c.finish()
    }
}

/// Generates the fallback demo series.
#[derive(Debug, Clone)]
pub struct SyntheticSeriesGenerator {
    config: SyntheticConfig,
}

impl SyntheticSeriesGenerator {
    /// Creates a generator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the configuration is inconsistent.
    pub fn new(config: SyntheticConfig) -> Result<Self, IoError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    /// Generates the series.
    ///
    /// Every call reseeds its own RNG, so repeated calls return identical
    /// series.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::EmptySeries`] when the date range contains no
    /// quarter end.
    #[tracing::instrument(skip(self), fields(seed = self.config.seed))]
    pub fn generate(&self) -> Result<CanonicalSeries, IoError> {
        let cfg = &self.config;
        let dates = quarter_end_range(cfg.start, cfg.end)?;

        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let mut subscribers = cfg.base;
        let mut points = Vec::with_capacity(dates.len());
        for date in dates {
            let growth: f64 = rng.random_range(cfg.growth_low..cfg.growth_high);
            // Truncates toward zero, matching integer subscriber counts.
            subscribers = (subscribers as f64 * (1.0 + growth)) as u64;
            points.push(SeriesPoint::new(date, subscribers as f64));
        }

        debug!(n_points = points.len(), "generated synthetic series");
        CanonicalSeries::new(points)
    }
}

impl Default for SyntheticSeriesGenerator {
    fn default() -> Self {
        Self {
            config: SyntheticConfig::default(),
        }
    }
}

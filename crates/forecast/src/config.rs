//! Configuration for the additive trend/seasonality model.

use crate::error::ForecastError;

/// Whether the yearly Fourier seasonality is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearlySeasonality {
    /// Enabled when the history spans at least two years.
    #[default]
    Auto,
    /// Always fitted.
    Enabled,
    /// Never fitted.
    Disabled,
}

/// Configuration for [`AdditiveModel`](crate::AdditiveModel).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use quartercast_forecast::AdditiveConfig;
///
/// let config = AdditiveConfig::new()
///     .with_interval_width(0.95)
///     .with_n_changepoints(10);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdditiveConfig {
    /// Probability mass inside the uncertainty interval.
    interval_width: f64,
    /// Maximum number of potential trend changepoints.
    n_changepoints: usize,
    /// Fraction of the history in which changepoints are placed.
    changepoint_range: f64,
    /// Prior scale of the changepoint rate adjustments.
    changepoint_prior_scale: f64,
    /// Prior scale of the seasonal Fourier coefficients.
    seasonality_prior_scale: f64,
    /// Number of Fourier pairs for the yearly seasonality.
    yearly_order: usize,
    /// Yearly seasonality mode.
    yearly: YearlySeasonality,
}

impl AdditiveConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `interval_width = 0.8`, `n_changepoints = 25`,
    /// `changepoint_range = 0.8`, `changepoint_prior_scale = 0.05`,
    /// `seasonality_prior_scale = 10.0`, `yearly_order = 2`,
    /// `yearly = Auto`.
    pub fn new() -> Self {
        Self {
            interval_width: 0.8,
            n_changepoints: 25,
            changepoint_range: 0.8,
            changepoint_prior_scale: 0.05,
            seasonality_prior_scale: 10.0,
            yearly_order: 2,
            yearly: YearlySeasonality::Auto,
        }
    }

    /// Sets the uncertainty interval width.
    pub fn with_interval_width(mut self, width: f64) -> Self {
        self.interval_width = width;
        self
    }

    /// Sets the maximum number of changepoints.
    pub fn with_n_changepoints(mut self, n: usize) -> Self {
        self.n_changepoints = n;
        self
    }

    /// Sets the fraction of history eligible for changepoints.
    pub fn with_changepoint_range(mut self, range: f64) -> Self {
        self.changepoint_range = range;
        self
    }

    /// Sets the changepoint prior scale.
    pub fn with_changepoint_prior_scale(mut self, scale: f64) -> Self {
        self.changepoint_prior_scale = scale;
        self
    }

    /// Sets the seasonality prior scale.
    pub fn with_seasonality_prior_scale(mut self, scale: f64) -> Self {
        self.seasonality_prior_scale = scale;
        self
    }

    /// Sets the number of yearly Fourier pairs.
    pub fn with_yearly_order(mut self, order: usize) -> Self {
        self.yearly_order = order;
        self
    }

    /// Sets the yearly seasonality mode.
    pub fn with_yearly(mut self, yearly: YearlySeasonality) -> Self {
        self.yearly = yearly;
        self
    }

    /// Returns the uncertainty interval width.
    pub fn interval_width(&self) -> f64 {
        self.interval_width
    }

    /// Returns the maximum number of changepoints.
    pub fn n_changepoints(&self) -> usize {
        self.n_changepoints
    }

    /// Returns the changepoint range.
    pub fn changepoint_range(&self) -> f64 {
        self.changepoint_range
    }

    /// Returns the changepoint prior scale.
    pub fn changepoint_prior_scale(&self) -> f64 {
        self.changepoint_prior_scale
    }

    /// Returns the seasonality prior scale.
    pub fn seasonality_prior_scale(&self) -> f64 {
        self.seasonality_prior_scale
    }

    /// Returns the number of yearly Fourier pairs.
    pub fn yearly_order(&self) -> usize {
        self.yearly_order
    }

    /// Returns the yearly seasonality mode.
    pub fn yearly(&self) -> YearlySeasonality {
        self.yearly
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the interval width is outside (0, 1), the
    /// changepoint range is outside (0, 1], a prior scale is not positive and
    /// finite, or seasonality is enabled with zero Fourier order.
    pub fn validate(&self) -> Result<(), ForecastError> {
        let invalid = |reason: String| Err(ForecastError::InvalidConfig { reason });

        if !(self.interval_width > 0.0 && self.interval_width < 1.0) {
            return invalid(format!(
                "interval_width must be in (0, 1), got {}",
                self.interval_width
            ));
        }
        if !(self.changepoint_range > 0.0 && self.changepoint_range <= 1.0) {
            return invalid(format!(
                "changepoint_range must be in (0, 1], got {}",
                self.changepoint_range
            ));
        }
        for (name, value) in [
            ("changepoint_prior_scale", self.changepoint_prior_scale),
            ("seasonality_prior_scale", self.seasonality_prior_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return invalid(format!("{name} must be positive and finite, got {value}"));
            }
        }
        if self.yearly == YearlySeasonality::Enabled && self.yearly_order == 0 {
            return invalid("yearly_order must be at least 1 when yearly seasonality is enabled".into());
        }
        Ok(())
    }
}

impl Default for AdditiveConfig {
    fn default() -> Self {
        Self::new()
    }
}

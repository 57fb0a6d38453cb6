//! Additive trend + yearly seasonality model.
//!
//! ```text
//! y(t) = g(t) + s(t) + ε
//! g(t) = m + k·t + Σ_j δ_j·(t − s_j)₊        piecewise-linear trend
//! s(t) = Σ_i a_i·sin(2πi·d/P) + b_i·cos(2πi·d/P)   P = 365.25 days
//! ```
//!
//! `t` is time rescaled to `[0, 1]` over the history, `d` is days since
//! 1970-01-01 and `y` is divided by `max |y|` before fitting. Coefficients
//! are the MAP estimate under Laplace-like shrinkage of the changepoint
//! deltas and Gaussian shrinkage of the Fourier terms, computed as one
//! ridge-penalised least-squares solve.

use chrono::{Datelike, NaiveDate};
use ndarray::{Array1, Array2};
use quartercast_io::CanonicalSeries;
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::{debug, info};

use crate::config::{AdditiveConfig, YearlySeasonality};
use crate::error::ForecastError;
use crate::linalg::ridge_solve;
use crate::model::{Decomposition, ForecastModel, Prediction};

/// Days from 0001-01-01 (CE) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Length of the seasonal cycle in days.
const YEAR_DAYS: f64 = 365.25;

/// Minimum history span (days) for automatic yearly seasonality.
const AUTO_YEARLY_MIN_SPAN: f64 = 730.0;

/// Ridge added to every coefficient to keep the normal equations regular.
const RIDGE: f64 = 1e-9;

/// Floor on the first-pass noise variance (scaled units).
const MIN_NOISE_VAR: f64 = 1e-6;

/// Minimum observations for a fit.
const MIN_POINTS: usize = 2;

fn days_since_epoch(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
}

/// Row indexes of the potential changepoints.
///
/// Evenly spaced over the first `range` fraction of `n` rows, excluding row
/// zero. The count shrinks when the eligible history is too short.
fn changepoint_indexes(n: usize, requested: usize, range: f64) -> Vec<usize> {
    let hist_size = (n as f64 * range).floor() as usize;
    let n_cp = if requested + 1 > hist_size {
        hist_size.saturating_sub(1)
    } else {
        requested
    };
    if n_cp == 0 {
        return Vec::new();
    }
    let last = (hist_size - 1) as f64;
    (1..=n_cp)
        .map(|i| (i as f64 * last / n_cp as f64).round() as usize)
        .collect()
}

/// Regressors for a single time point.
///
/// Layout: `[1, t, (t − s_1)₊ … (t − s_S)₊, sin_1, cos_1 … sin_K, cos_K]`.
fn basis_row(t: f64, days: f64, changepoints: &[f64], order: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(2 + changepoints.len() + 2 * order);
    row.push(1.0);
    row.push(t);
    row.extend(changepoints.iter().map(|&s| (t - s).max(0.0)));
    for i in 1..=order {
        let angle = 2.0 * std::f64::consts::PI * i as f64 * days / YEAR_DAYS;
        row.push(angle.sin());
        row.push(angle.cos());
    }
    row
}

fn design(t: &[f64], days: &[f64], changepoints: &[f64], order: usize) -> Array2<f64> {
    let p = 2 + changepoints.len() + 2 * order;
    let mut x = Array2::zeros((t.len(), p));
    for (i, (&ti, &di)) in t.iter().zip(days).enumerate() {
        for (j, v) in basis_row(ti, di, changepoints, order).into_iter().enumerate() {
            x[[i, j]] = v;
        }
    }
    x
}

fn residual_ss(x: &Array2<f64>, y: &Array1<f64>, beta: &Array1<f64>) -> f64 {
    let fitted = x.dot(beta);
    y.iter().zip(fitted.iter()).map(|(a, b)| (a - b).powi(2)).sum()
}

/// Headline facts about a fitted [`AdditiveModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSummary {
    /// Number of trend changepoints actually used.
    pub n_changepoints: usize,
    /// Whether yearly seasonality was fitted.
    pub yearly_seasonality: bool,
    /// Residual standard deviation in subscriber units.
    pub noise_sd: f64,
    /// Mean absolute changepoint delta (scaled units).
    pub delta_scale: f64,
}

#[derive(Debug, Clone)]
struct Fitted {
    t_start: f64,
    t_span: f64,
    y_scale: f64,
    changepoints: Vec<f64>,
    order: usize,
    beta: Array1<f64>,
    sigma: f64,
    delta_scale: f64,
}

impl Fitted {
    fn scaled_time(&self, days: f64) -> f64 {
        (days - self.t_start) / self.t_span
    }

    /// Trend and seasonal parts at one date, in subscriber units.
    fn decompose(&self, date: NaiveDate) -> (f64, f64, f64) {
        let days = days_since_epoch(date);
        let t = self.scaled_time(days);
        let row = basis_row(t, days, &self.changepoints, self.order);
        let n_trend = 2 + self.changepoints.len();
        let trend: f64 = row[..n_trend]
            .iter()
            .zip(self.beta.iter())
            .map(|(a, b)| a * b)
            .sum();
        let seasonal: f64 = row[n_trend..]
            .iter()
            .zip(self.beta.iter().skip(n_trend))
            .map(|(a, b)| a * b)
            .sum();
        (t, trend * self.y_scale, seasonal * self.y_scale)
    }

    /// Variance of the simulated future trend at scaled time `t`.
    ///
    /// Future changepoints arrive at rate `S` per unit time with
    /// Laplace(0, λ) deltas, giving `S·2λ²·(t − 1)³ / 3`.
    fn future_trend_var(&self, t: f64) -> f64 {
        if t <= 1.0 {
            return 0.0;
        }
        let rate = self.changepoints.len() as f64;
        rate * 2.0 * self.delta_scale.powi(2) * (t - 1.0).powi(3) / 3.0
    }
}

/// Piecewise-linear trend plus yearly Fourier seasonality.
///
/// # Example
///
/// ```ignore
/// use quartercast_forecast::{AdditiveConfig, AdditiveModel, ForecastModel};
///
/// let mut model = AdditiveModel::new(AdditiveConfig::default())?;
/// model.fit(&series)?;
/// let preds = model.predict(&dates)?;
/// ```
#[derive(Debug, Clone)]
pub struct AdditiveModel {
    config: AdditiveConfig,
    fitted: Option<Fitted>,
}

impl AdditiveModel {
    /// Creates an unfitted model after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidConfig`] for an invalid configuration.
    pub fn new(config: AdditiveConfig) -> Result<Self, ForecastError> {
        config.validate()?;
        Ok(Self {
            config,
            fitted: None,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AdditiveConfig {
        &self.config
    }

    /// Returns `None` until the model is fitted.
    pub fn summary(&self) -> Option<FitSummary> {
        self.fitted.as_ref().map(|f| FitSummary {
            n_changepoints: f.changepoints.len(),
            yearly_seasonality: f.order > 0,
            noise_sd: f.sigma * f.y_scale,
            delta_scale: f.delta_scale,
        })
    }

    fn fitted(&self) -> Result<&Fitted, ForecastError> {
        self.fitted.as_ref().ok_or(ForecastError::NotFitted)
    }

    fn z_score(&self) -> Result<f64, ForecastError> {
        let normal = Normal::new(0.0, 1.0).map_err(|e| ForecastError::InvalidConfig {
            reason: e.to_string(),
        })?;
        Ok(normal.inverse_cdf(0.5 + self.config.interval_width() / 2.0))
    }
}

impl Default for AdditiveModel {
    fn default() -> Self {
        Self {
            config: AdditiveConfig::default(),
            fitted: None,
        }
    }
}

impl ForecastModel for AdditiveModel {
    #[tracing::instrument(skip_all, fields(n = series.len()))]
    fn fit(&mut self, series: &CanonicalSeries) -> Result<(), ForecastError> {
        let n = series.len();
        if n < MIN_POINTS {
            return Err(ForecastError::InsufficientData { n, min: MIN_POINTS });
        }
        let values = series.values();
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::NonFiniteData);
        }

        let days: Vec<f64> = series.iter().map(|p| days_since_epoch(p.timestamp)).collect();
        let t_start = days[0];
        let t_span = days[n - 1] - t_start;
        if t_span <= 0.0 {
            return Err(ForecastError::DegenerateTimeSpan { n });
        }
        let max_abs = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let y_scale = if max_abs > 0.0 { max_abs } else { 1.0 };

        let t: Vec<f64> = days.iter().map(|d| (d - t_start) / t_span).collect();
        let y: Array1<f64> = values.iter().map(|v| v / y_scale).collect();

        let seasonal = match self.config.yearly() {
            YearlySeasonality::Auto => t_span >= AUTO_YEARLY_MIN_SPAN,
            YearlySeasonality::Enabled => true,
            YearlySeasonality::Disabled => false,
        };
        let order = if seasonal { self.config.yearly_order() } else { 0 };

        let changepoints: Vec<f64> = changepoint_indexes(
            n,
            self.config.n_changepoints(),
            self.config.changepoint_range(),
        )
        .into_iter()
        .map(|i| t[i])
        .collect();
        let n_cp = changepoints.len();

        // First pass: no changepoints, sets the noise level for the priors.
        let x0 = design(&t, &days, &[], order);
        let beta0 = ridge_solve(&x0, &y, &Array1::from_elem(x0.ncols(), RIDGE))?;
        let dof = n.saturating_sub(x0.ncols()).max(1) as f64;
        let noise_var = (residual_ss(&x0, &y, &beta0) / dof).max(MIN_NOISE_VAR);

        let x = design(&t, &days, &changepoints, order);
        let delta_penalty = noise_var / self.config.changepoint_prior_scale().powi(2);
        let seasonal_penalty = noise_var / self.config.seasonality_prior_scale().powi(2);
        let penalty: Array1<f64> = (0..x.ncols())
            .map(|j| {
                RIDGE
                    + if j < 2 {
                        0.0
                    } else if j < 2 + n_cp {
                        delta_penalty
                    } else {
                        seasonal_penalty
                    }
            })
            .collect();
        let beta = ridge_solve(&x, &y, &penalty)?;

        let sigma = (residual_ss(&x, &y, &beta) / n as f64).sqrt();
        let delta_scale = if n_cp == 0 {
            0.0
        } else {
            beta.iter().skip(2).take(n_cp).map(|d| d.abs()).sum::<f64>() / n_cp as f64
        };

        debug!(
            n_changepoints = n_cp,
            yearly = seasonal,
            noise_var,
            sigma,
            delta_scale,
            "additive model coefficients solved"
        );
        info!(n, n_changepoints = n_cp, yearly = seasonal, "fitted additive model");

        self.fitted = Some(Fitted {
            t_start,
            t_span,
            y_scale,
            changepoints,
            order,
            beta,
            sigma,
            delta_scale,
        });
        Ok(())
    }

    fn predict(&self, timestamps: &[NaiveDate]) -> Result<Vec<Prediction>, ForecastError> {
        let fitted = self.fitted()?;
        let z = self.z_score()?;
        Ok(timestamps
            .iter()
            .map(|&date| {
                let (t, trend, seasonal) = fitted.decompose(date);
                let var = fitted.sigma.powi(2) + fitted.future_trend_var(t);
                Prediction::symmetric(trend + seasonal, z * fitted.y_scale * var.sqrt())
            })
            .collect())
    }

    fn components(&self, timestamps: &[NaiveDate]) -> Result<Vec<Decomposition>, ForecastError> {
        let fitted = self.fitted()?;
        Ok(timestamps
            .iter()
            .map(|&date| {
                let (_, trend, seasonal) = fitted.decompose(date);
                Decomposition { trend, seasonal }
            })
            .collect())
    }
}

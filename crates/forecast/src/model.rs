//! The forecasting model seam.

use chrono::NaiveDate;
use quartercast_io::CanonicalSeries;
use serde::Serialize;

use crate::error::ForecastError;

/// One model output: point estimate and interval bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Point estimate.
    pub point: f64,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound.
    pub upper: f64,
}

impl Prediction {
    /// Creates a prediction from a point and symmetric half-width.
    pub fn symmetric(point: f64, half_width: f64) -> Self {
        Self {
            point,
            lower: point - half_width,
            upper: point + half_width,
        }
    }
}

/// Additive split of a point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decomposition {
    /// Trend component.
    pub trend: f64,
    /// Seasonal component.
    pub seasonal: f64,
}

/// A trend/seasonality model that can be trained once and queried at
/// arbitrary dates.
///
/// [`ForecastEngine`](crate::ForecastEngine) drives implementors; tests can
/// substitute a stub.
pub trait ForecastModel {
    /// Trains the model on `series`.
    ///
    /// # Errors
    ///
    /// Implementations reject series they cannot learn from.
    fn fit(&mut self, series: &CanonicalSeries) -> Result<(), ForecastError>;

    /// Predicts one [`Prediction`] per timestamp, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::NotFitted`] before [`fit`](Self::fit).
    fn predict(&self, timestamps: &[NaiveDate]) -> Result<Vec<Prediction>, ForecastError>;

    /// Splits each point estimate into trend and seasonal parts.
    ///
    /// The default treats the whole estimate as trend.
    fn components(&self, timestamps: &[NaiveDate]) -> Result<Vec<Decomposition>, ForecastError> {
        Ok(self
            .predict(timestamps)?
            .into_iter()
            .map(|p| Decomposition {
                trend: p.point,
                seasonal: 0.0,
            })
            .collect())
    }
}

impl<M: ForecastModel + ?Sized> ForecastModel for Box<M> {
    fn fit(&mut self, series: &CanonicalSeries) -> Result<(), ForecastError> {
        (**self).fit(series)
    }

    fn predict(&self, timestamps: &[NaiveDate]) -> Result<Vec<Prediction>, ForecastError> {
        (**self).predict(timestamps)
    }

    fn components(&self, timestamps: &[NaiveDate]) -> Result<Vec<Decomposition>, ForecastError> {
        (**self).components(timestamps)
    }
}

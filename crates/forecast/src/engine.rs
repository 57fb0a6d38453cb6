//! Fit-then-predict driver producing the combined history + future table.

use chrono::NaiveDate;
use quartercast_calendar::quarter_ends_after;
use quartercast_io::CanonicalSeries;
use serde::Serialize;
use tracing::info;

use crate::error::ForecastError;
use crate::model::ForecastModel;

/// Minimum observations the engine accepts.
pub const MIN_TRAINING_POINTS: usize = 2;

/// One row of the full forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastRow {
    /// Period end date.
    pub timestamp: NaiveDate,
    /// Point estimate.
    pub point: f64,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound.
    pub upper: f64,
}

/// Trend/seasonal split of one forecast row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentRow {
    /// Period end date.
    pub timestamp: NaiveDate,
    /// Trend component.
    pub trend: f64,
    /// Seasonal component.
    pub seasonal: f64,
}

/// Predictions over every historical timestamp followed by the future
/// quarter ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    rows: Vec<ForecastRow>,
    n_history: usize,
}

impl Forecast {
    /// All rows, history first.
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows at the training timestamps.
    pub fn history(&self) -> &[ForecastRow] {
        &self.rows[..self.n_history]
    }

    /// Rows after the last training timestamp.
    pub fn future(&self) -> &[ForecastRow] {
        &self.rows[self.n_history..]
    }

    /// Timestamps of every row.
    pub fn timestamps(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.timestamp).collect()
    }
}

/// Wraps a [`ForecastModel`] with the quarterly timeline logic.
///
/// The engine owns its model; build a new engine per request.
///
/// # Workflow
///
/// ```mermaid
/// graph LR
///     A["ForecastEngine::new(model)"] -->|".fit(&series)?"| B["fitted engine"]
///     B -->|".predict(horizon)?"| C["Forecast"]
///     C -->|".components(&forecast)?"| D["Vec&lt;ComponentRow&gt;"]
/// ```
#[derive(Debug, Clone)]
pub struct ForecastEngine<M> {
    model: M,
    history: Option<Vec<NaiveDate>>,
}

impl<M: ForecastModel> ForecastEngine<M> {
    /// Creates an engine around an unfitted model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            history: None,
        }
    }

    /// Returns the wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Trains the model on `series`.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InsufficientData`] for fewer than
    /// [`MIN_TRAINING_POINTS`] observations, or any error the model raises.
    #[tracing::instrument(skip_all, fields(n = series.len()))]
    pub fn fit(&mut self, series: &CanonicalSeries) -> Result<(), ForecastError> {
        if series.len() < MIN_TRAINING_POINTS {
            return Err(ForecastError::InsufficientData {
                n: series.len(),
                min: MIN_TRAINING_POINTS,
            });
        }
        self.model.fit(series)?;
        self.history = Some(series.timestamps());
        Ok(())
    }

    /// Predicts every historical timestamp plus `horizon` future quarter
    /// ends.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidHorizon`] when `horizon` is zero and
    /// [`ForecastError::NotFitted`] before [`fit`](Self::fit).
    #[tracing::instrument(skip(self))]
    pub fn predict(&self, horizon: usize) -> Result<Forecast, ForecastError> {
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon { horizon });
        }
        let history = self.history.as_ref().ok_or(ForecastError::NotFitted)?;
        let last = history.last().copied().ok_or(ForecastError::NotFitted)?;

        let mut timeline = history.clone();
        timeline.extend(quarter_ends_after(last, horizon)?);

        let predictions = self.model.predict(&timeline)?;
        if predictions.len() != timeline.len() {
            return Err(ForecastError::PredictionLength {
                expected: timeline.len(),
                got: predictions.len(),
            });
        }

        let rows: Vec<ForecastRow> = timeline
            .into_iter()
            .zip(predictions)
            .map(|(timestamp, p)| ForecastRow {
                timestamp,
                point: p.point,
                lower: p.lower,
                upper: p.upper,
            })
            .collect();
        info!(
            n_history = history.len(),
            horizon,
            n_rows = rows.len(),
            "forecast produced"
        );
        Ok(Forecast {
            rows,
            n_history: history.len(),
        })
    }

    /// Trend and seasonal components for every row of `forecast`.
    ///
    /// # Errors
    ///
    /// Propagates model errors, and [`ForecastError::PredictionLength`] if
    /// the model returns the wrong number of rows.
    pub fn components(&self, forecast: &Forecast) -> Result<Vec<ComponentRow>, ForecastError> {
        let timestamps = forecast.timestamps();
        let parts = self.model.components(&timestamps)?;
        if parts.len() != timestamps.len() {
            return Err(ForecastError::PredictionLength {
                expected: timestamps.len(),
                got: parts.len(),
            });
        }
        Ok(timestamps
            .into_iter()
            .zip(parts)
            .map(|(timestamp, c)| ComponentRow {
                timestamp,
                trend: c.trend,
                seasonal: c.seasonal,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Prediction;
    use quartercast_io::{RawTable, load};

    /// Predicts the row index, so every row is identifiable.
    #[derive(Default)]
    struct Counting {
        fitted: bool,
        short: bool,
    }

    impl ForecastModel for Counting {
        fn fit(&mut self, _series: &CanonicalSeries) -> Result<(), ForecastError> {
            self.fitted = true;
            Ok(())
        }

        fn predict(&self, timestamps: &[NaiveDate]) -> Result<Vec<Prediction>, ForecastError> {
            if !self.fitted {
                return Err(ForecastError::NotFitted);
            }
            let n = if self.short {
                timestamps.len() - 1
            } else {
                timestamps.len()
            };
            Ok((0..n).map(|i| Prediction::symmetric(i as f64, 1.0)).collect())
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_quarters() -> CanonicalSeries {
        load(&RawTable::from_pairs(&[("Q1 2019", "1000"), ("Q2 2019", "1100")])).unwrap()
    }

    #[test]
    fn history_plus_future_rows() {
        let mut engine = ForecastEngine::new(Counting::default());
        engine.fit(&two_quarters()).unwrap();
        let forecast = engine.predict(3).unwrap();

        assert_eq!(forecast.len(), 5);
        assert_eq!(forecast.history().len(), 2);
        assert_eq!(
            forecast
                .future()
                .iter()
                .map(|r| r.timestamp)
                .collect::<Vec<_>>(),
            vec![ymd(2019, 9, 30), ymd(2019, 12, 31), ymd(2020, 3, 31)]
        );
        assert_eq!(forecast.rows()[4].point, 4.0);
        assert_eq!(forecast.rows()[4].lower, 3.0);
    }

    #[test]
    fn zero_horizon_rejected() {
        let mut engine = ForecastEngine::new(Counting::default());
        engine.fit(&two_quarters()).unwrap();
        assert!(matches!(
            engine.predict(0).unwrap_err(),
            ForecastError::InvalidHorizon { horizon: 0 }
        ));
    }

    #[test]
    fn predict_before_fit() {
        let engine = ForecastEngine::new(Counting::default());
        assert!(matches!(
            engine.predict(4).unwrap_err(),
            ForecastError::NotFitted
        ));
    }

    #[test]
    fn single_point_rejected_before_model() {
        let series = load(&RawTable::from_pairs(&[("Q1 2019", "1000")])).unwrap();
        let mut engine = ForecastEngine::new(Counting::default());
        assert!(matches!(
            engine.fit(&series).unwrap_err(),
            ForecastError::InsufficientData { n: 1, min: 2 }
        ));
        assert!(!engine.model().fitted);
    }

    #[test]
    fn short_model_output_detected() {
        let mut engine = ForecastEngine::new(Counting {
            fitted: false,
            short: true,
        });
        engine.fit(&two_quarters()).unwrap();
        assert!(matches!(
            engine.predict(2).unwrap_err(),
            ForecastError::PredictionLength {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn default_components_follow_points() {
        let mut engine = ForecastEngine::new(Counting::default());
        engine.fit(&two_quarters()).unwrap();
        let forecast = engine.predict(1).unwrap();
        let parts = engine.components(&forecast).unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].timestamp, ymd(2019, 9, 30));
        assert_eq!(parts[2].trend, 2.0);
        assert_eq!(parts[2].seasonal, 0.0);
    }

    #[test]
    fn non_quarter_end_history_moves_to_next_quarter_end() {
        let series = load(&RawTable::from_pairs(&[
            ("03/31/2020", "1"),
            ("05/15/2020", "2"),
        ]))
        .unwrap();
        let mut engine = ForecastEngine::new(Counting::default());
        engine.fit(&series).unwrap();
        let forecast = engine.predict(2).unwrap();
        assert_eq!(
            forecast.future()[0].timestamp,
            ymd(2020, 6, 30),
            "first future row is the next quarter end after the last date"
        );
    }
}

//! Canonical `(timestamp, value)` series.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::IoError;

/// One observation of the canonical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Observation date.
    pub timestamp: NaiveDate,
    /// Subscriber count.
    pub value: f64,
}

impl SeriesPoint {
    /// Creates a new point.
    pub fn new(timestamp: NaiveDate, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<(NaiveDate, f64)> for SeriesPoint {
    fn from((timestamp, value): (NaiveDate, f64)) -> Self {
        Self { timestamp, value }
    }
}

/// Validated, time-ordered subscriber series.
///
/// The single input to forecasting and historical charting. Guarantees:
///
/// - at least one point;
/// - every value is finite;
/// - points are in ascending timestamp order (ties keep their input order;
///   duplicate timestamps are not merged).
///
/// The series is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CanonicalSeries {
    points: Vec<SeriesPoint>,
}

/// Headline figures for a series: its date range and most recent value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    /// Earliest timestamp.
    pub first_date: NaiveDate,
    /// Latest timestamp.
    pub latest_date: NaiveDate,
    /// Value at the latest timestamp.
    pub latest_value: f64,
}

impl CanonicalSeries {
    /// Builds a series from points in any order.
    ///
    /// Points are stably sorted by timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::EmptySeries`] when `points` is empty and
    /// [`IoError::Validation`] when any value is NaN or infinite.
    pub fn new(mut points: Vec<SeriesPoint>) -> Result<Self, IoError> {
        if points.is_empty() {
            return Err(IoError::EmptySeries);
        }
        let non_finite: Vec<String> = points
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.value.is_finite())
            .map(|(i, p)| format!("non-finite value at index {i}: {}", p.value))
            .collect();
        if !non_finite.is_empty() {
            return Err(IoError::Validation {
                count: non_finite.len(),
                details: non_finite.join("; "),
            });
        }
        points.sort_by_key(|p| p.timestamp);
        Ok(Self { points })
    }

    /// Returns the number of points (always at least one).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; provided for API symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in timestamp order.
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }

    /// Returns the timestamps in order.
    pub fn timestamps(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    /// Returns the values in timestamp order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Returns the earliest point.
    pub fn first(&self) -> SeriesPoint {
        self.points[0]
    }

    /// Returns the latest point.
    pub fn last(&self) -> SeriesPoint {
        self.points[self.points.len() - 1]
    }

    /// Returns the first date, latest date and latest value.
    pub fn summary(&self) -> SeriesSummary {
        let last = self.last();
        SeriesSummary {
            first_date: self.first().timestamp,
            latest_date: last.timestamp,
            latest_value: last.value,
        }
    }
}

impl<'a> IntoIterator for &'a CanonicalSeries {
    type Item = &'a SeriesPoint;
    type IntoIter = std::slice::Iter<'a, SeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

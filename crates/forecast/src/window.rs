//! Tail window of a forecast, relabeled for display.

use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::ForecastRow;

/// One display row: `Date, Forecast, Lower, Upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowRow {
    /// Period end date.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Point estimate.
    #[serde(rename = "Forecast")]
    pub forecast: f64,
    /// Lower interval bound.
    #[serde(rename = "Lower")]
    pub lower: f64,
    /// Upper interval bound.
    #[serde(rename = "Upper")]
    pub upper: f64,
}

impl From<&ForecastRow> for WindowRow {
    fn from(row: &ForecastRow) -> Self {
        Self {
            date: row.timestamp,
            forecast: row.point,
            lower: row.lower,
            upper: row.upper,
        }
    }
}

/// The last `horizon` forecast rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ForecastWindow {
    rows: Vec<WindowRow>,
}

impl ForecastWindow {
    /// Returns the rows in date order.
    pub fn rows(&self) -> &[WindowRow] {
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
}

/// Takes the trailing `horizon` rows of `rows`.
///
/// Never fails: the window holds `min(horizon, rows.len())` rows.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use quartercast_forecast::{ForecastRow, present};
///
/// let row = |m, d, v| ForecastRow {
///     timestamp: NaiveDate::from_ymd_opt(2024, m, d).unwrap(),
///     point: v,
///     lower: v - 1.0,
///     upper: v + 1.0,
/// };
/// let rows = [row(3, 31, 1.0), row(6, 30, 2.0), row(9, 30, 3.0)];
/// let window = present(&rows, 2);
/// assert_eq!(window.len(), 2);
/// assert_eq!(window.rows()[0].forecast, 2.0);
/// ```
pub fn present(rows: &[ForecastRow], horizon: usize) -> ForecastWindow {
    let start = rows.len().saturating_sub(horizon);
    ForecastWindow {
        rows: rows[start..].iter().map(WindowRow::from).collect(),
    }
}

//! Period label normalization.
//!
//! Turns the free-form labels found in the `Time period` column into dates.
//! Two label families are understood:
//!
//! - quarter codes such as `Q3 2021`, mapped to the last day of the quarter;
//! - date strings, tried first as `MM/DD/YYYY` and then against a small set of
//!   unambiguous fallback layouts.
//!
//! Normalization never fails loudly. Labels that match neither family come
//! back as [`NormalizedPeriod::Invalid`] so that callers can report every bad
//! row at once.

use chrono::{NaiveDate, NaiveDateTime};

use crate::quarter::{Quarter, quarter_end};

/// Outcome of normalizing a single period label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizedPeriod {
    /// The label was understood and maps onto this date.
    Valid(NaiveDate),
    /// The label matched no supported layout.
    Invalid,
}

impl NormalizedPeriod {
    /// Returns the date for a valid label, `None` otherwise.
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Valid(date) => Some(date),
            Self::Invalid => None,
        }
    }

    /// Returns `true` for [`NormalizedPeriod::Valid`].
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl From<Option<NaiveDate>> for NormalizedPeriod {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Self::Invalid, Self::Valid)
    }
}

/// Month-first layout tried before any fallback.
const MONTH_DAY_YEAR: &str = "%m/%d/%Y";

/// Date-only fallbacks. Day-first numeric layouts are deliberately absent.
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
];

/// Date-time fallbacks; only the date part is kept.
const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Normalizes a period label into a date.
///
/// Quarter codes (`Q1 2019`, case-insensitive, surrounding whitespace
/// ignored) map to the last day of March, June, September or December.
/// Anything that starts with `Q` but is not exactly a `Q1`..`Q4` token
/// followed by a year is invalid; it is never retried as a date string.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use quartercast_calendar::{NormalizedPeriod, normalize_period};
///
/// assert_eq!(
///     normalize_period("Q2 2019"),
///     NormalizedPeriod::Valid(NaiveDate::from_ymd_opt(2019, 6, 30).unwrap()),
/// );
/// assert_eq!(normalize_period("Q5 2019"), NormalizedPeriod::Invalid);
/// ```
pub fn normalize_period(label: &str) -> NormalizedPeriod {
    let trimmed = label.trim();
    let upper = trimmed.to_uppercase();
    if upper.starts_with('Q') {
        return parse_quarter_code(&upper).into();
    }
    parse_month_day_year(trimmed)
        .or_else(|| parse_fallback(trimmed))
        .into()
}

/// Parses an uppercased `Q<n> <year>` label.
fn parse_quarter_code(upper: &str) -> Option<NaiveDate> {
    let mut tokens = upper.split_whitespace();
    let (quarter_token, year_token) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(q), Some(y), None) => (q, y),
        _ => return None,
    };

    let quarter = match quarter_token {
        "Q1" => 1,
        "Q2" => 2,
        "Q3" => 3,
        "Q4" => 4,
        _ => return None,
    };
    let year: i32 = year_token.parse().ok()?;

    let quarter = Quarter::new(quarter).ok()?;
    quarter_end(year, quarter).ok()
}

fn parse_month_day_year(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, MONTH_DAY_YEAR).ok()
}

fn parse_fallback(s: &str) -> Option<NaiveDate> {
    FALLBACK_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            FALLBACK_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

//! Series validation.
//!
//! Checks applied to a raw subscriber table before anything is discarded:
//! required columns ([`validate_schema`]), period labels
//! ([`validate_periods`]) and numeric subscriber counts
//! ([`validate_counts`]). Each check fails with a typed [`IoError`] that
//! quotes the original offending text.
//!
//! [`ValidationCollector`] gathers free-form problems (used for settings
//! validation) into a single [`IoError::Validation`].

use chrono::NaiveDate;
use quartercast_calendar::NormalizedPeriod;

use crate::error::IoError;
use crate::record::{ColumnIndex, PERIOD_COLUMN, RawRecord, SUBSCRIBERS_COLUMN};

/// Maximum number of offending values quoted in an error.
pub const MAX_EXAMPLES: usize = 3;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Offending row tracking
// ---------------------------------------------------------------------------

/// Counts offending rows and keeps the first [`MAX_EXAMPLES`] originals.
#[derive(Default)]
struct Offenders {
    count: usize,
    examples: Vec<String>,
}

impl Offenders {
    fn record(&mut self, original: &str) {
        self.count += 1;
        if self.examples.len() < MAX_EXAMPLES {
            self.examples.push(original.to_string());
        }
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Canonical form of a header for matching: surrounding whitespace (and a
/// leading byte-order mark) removed, lowercased.
fn header_key(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Locates the required columns in `headers`.
///
/// Matching ignores surrounding whitespace and letter case. When a header
/// appears more than once, the first occurrence wins.
///
/// # Errors
///
/// Returns [`IoError::MissingColumns`] naming every required column that is
/// absent.
pub fn validate_schema(headers: &[String]) -> Result<ColumnIndex, IoError> {
    let position = |name: &str| {
        let key = header_key(name);
        headers.iter().position(|h| header_key(h) == key)
    };

    match (position(PERIOD_COLUMN), position(SUBSCRIBERS_COLUMN)) {
        (Some(period), Some(subscribers)) => Ok(ColumnIndex {
            period,
            subscribers,
        }),
        (period, subscribers) => {
            let mut missing = Vec::new();
            if period.is_none() {
                missing.push(PERIOD_COLUMN.to_string());
            }
            if subscribers.is_none() {
                missing.push(SUBSCRIBERS_COLUMN.to_string());
            }
            Err(IoError::MissingColumns { missing })
        }
    }
}

// ---------------------------------------------------------------------------
// Periods
// ---------------------------------------------------------------------------

/// Checks that every normalized period is valid and returns the dates.
///
/// `normalized` must be parallel to `records`.
///
/// # Errors
///
/// Returns [`IoError::UnparseablePeriods`] with the number of invalid rows
/// and up to [`MAX_EXAMPLES`] original labels.
pub fn validate_periods(
    records: &[RawRecord],
    normalized: &[NormalizedPeriod],
) -> Result<Vec<NaiveDate>, IoError> {
    debug_assert_eq!(records.len(), normalized.len());

    let mut offenders = Offenders::default();
    let mut dates = Vec::with_capacity(records.len());
    for (record, period) in records.iter().zip(normalized) {
        match period {
            NormalizedPeriod::Valid(date) => dates.push(*date),
            NormalizedPeriod::Invalid => offenders.record(&record.period_label),
        }
    }

    if offenders.is_empty() {
        Ok(dates)
    } else {
        Err(IoError::UnparseablePeriods {
            count: offenders.count,
            examples: offenders.examples,
        })
    }
}

// ---------------------------------------------------------------------------
// Subscriber counts
// ---------------------------------------------------------------------------

/// Reads a subscriber count as a finite number.
///
/// Surrounding whitespace is ignored. Empty strings, `NaN` and infinities
/// are rejected.
pub fn coerce_count(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Coerces every subscriber count to a number.
///
/// # Errors
///
/// Returns [`IoError::NonNumericCounts`] with the number of rows that failed
/// to coerce and up to [`MAX_EXAMPLES`] original values.
pub fn validate_counts(records: &[RawRecord]) -> Result<Vec<f64>, IoError> {
    let mut offenders = Offenders::default();
    let mut values = Vec::with_capacity(records.len());
    for record in records {
        match coerce_count(&record.subscriber_count) {
            Some(v) => values.push(v),
            None => offenders.record(&record.subscriber_count),
        }
    }

    if offenders.is_empty() {
        Ok(values)
    } else {
        Err(IoError::NonNumericCounts {
            count: offenders.count,
            examples: offenders.examples,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Error types for quartercast-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the quartercast-io crate.
///
/// This enum covers I/O and CSV decoding failures, the schema, date and
/// numeric checks applied while loading a subscriber table, and validation
/// of synthetic-series settings.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a failure reading bytes from a file or stream.
    #[error("read error: {reason}")]
    Read {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV decoder.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when one or more required columns are absent from the header.
    #[error("missing required column(s): {}", quoted(missing))]
    MissingColumns {
        /// Names of the required columns that were not found.
        missing: Vec<String>,
    },

    /// Returned when period labels match neither a quarter code nor a date.
    #[error("unparseable dates in {count} row(s); examples: [{}]", quoted(examples))]
    UnparseablePeriods {
        /// Number of offending rows.
        count: usize,
        /// Up to three of the original offending labels, in row order.
        examples: Vec<String>,
    },

    /// Returned when subscriber values cannot be read as finite numbers.
    #[error(
        "non-numeric subscriber value in {count} row(s); examples: [{}]",
        quoted(examples)
    )]
    NonNumericCounts {
        /// Number of offending rows.
        count: usize,
        /// Up to three of the original offending values, in row order.
        examples: Vec<String>,
    },

    /// Returned when a table or generated series contains no data rows.
    #[error("series is empty: at least one data row is required")]
    EmptySeries,

    /// Wraps an error originating from the quartercast-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

fn quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Read {
            reason: e.to_string(),
        }
    }
}

impl From<quartercast_calendar::CalendarError> for IoError {
    fn from(e: quartercast_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_missing_columns() {
        let err = IoError::MissingColumns {
            missing: vec!["Time period".to_string(), "Subscribers".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required column(s): 'Time period', 'Subscribers'"
        );
    }

    #[test]
    fn display_unparseable_periods() {
        let err = IoError::UnparseablePeriods {
            count: 4,
            examples: vec!["13/01/2020".to_string(), "Q5 2020".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unparseable dates in 4 row(s); examples: ['13/01/2020', 'Q5 2020']"
        );
    }

    #[test]
    fn display_non_numeric() {
        let err = IoError::NonNumericCounts {
            count: 1,
            examples: vec!["abc".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "non-numeric subscriber value in 1 row(s); examples: ['abc']"
        );
    }

    #[test]
    fn display_empty_series() {
        assert_eq!(
            IoError::EmptySeries.to_string(),
            "series is empty: at least one data row is required"
        );
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "base must be positive; start after end".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): base must be positive; start after end"
        );
    }

    #[test]
    fn from_io_error() {
        let io = std::io::Error::other("disk gone");
        let err: IoError = io.into();
        assert!(matches!(err, IoError::Read { .. }));
        assert!(err.to_string().contains("disk gone"));
    }

    #[test]
    fn from_calendar_error() {
        let cal_err = quartercast_calendar::CalendarError::InvalidQuarter { quarter: 9 };
        let err: IoError = cal_err.into();
        assert!(matches!(err, IoError::Calendar { .. }));
        assert!(err.to_string().contains("calendar error"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}

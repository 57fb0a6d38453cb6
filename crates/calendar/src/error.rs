//! Error types for the quartercast-calendar crate.

/// Error type for all fallible operations in the quartercast-calendar crate.
///
/// This enum covers validation failures for quarter numbers, month numbers,
/// and years that fall outside the range representable by [`chrono::NaiveDate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a quarter number is outside the valid range 1..=4.
    #[error("invalid quarter: {quarter} (must be 1..=4)")]
    InvalidQuarter {
        /// The invalid quarter number that was provided.
        quarter: u8,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a year cannot be represented as a calendar date.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The year that could not be represented.
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_quarter() {
        let err = CalendarError::InvalidQuarter { quarter: 5 };
        assert_eq!(err.to_string(), "invalid quarter: 5 (must be 1..=4)");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange { year: 400_000 };
        assert_eq!(err.to_string(), "year out of range: 400000");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidQuarter { quarter: 0 };
        let b = CalendarError::InvalidQuarter { quarter: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidQuarter { quarter: 7 };
        assert_ne!(a, c);
    }
}

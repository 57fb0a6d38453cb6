//! Error types for the quartercast-forecast crate.

use quartercast_calendar::CalendarError;

/// Error type for all fallible operations in the quartercast-forecast crate.
///
/// Covers unusable training data, invalid horizons and model settings, and
/// numerical failures while fitting the additive model.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ForecastError {
    /// Returned when the series has fewer observations than a fit needs.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the training values contain NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when every training timestamp is the same date.
    #[error("all {n} observations share one timestamp; the time span is zero")]
    DegenerateTimeSpan {
        /// Number of observations provided.
        n: usize,
    },

    /// Returned when the forecast horizon is zero.
    #[error("invalid horizon: {horizon} (must be at least 1)")]
    InvalidHorizon {
        /// The rejected horizon.
        horizon: usize,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when predicting with a model that has not been fitted.
    #[error("model has not been fitted")]
    NotFitted,

    /// Returned when the normal equations cannot be solved.
    #[error("singular system while fitting ({size}x{size})")]
    Singular {
        /// Dimension of the system.
        size: usize,
    },

    /// Returned when a model produces the wrong number of predictions.
    #[error("model returned {got} predictions for {expected} timestamps")]
    PredictionLength {
        /// Number of timestamps requested.
        expected: usize,
        /// Number of predictions returned.
        got: usize,
    },

    /// Wraps an error originating from the quartercast-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<CalendarError> for ForecastError {
    fn from(e: CalendarError) -> Self {
        ForecastError::Calendar {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_insufficient_data() {
        let err = ForecastError::InsufficientData { n: 1, min: 2 };
        assert_eq!(
            err.to_string(),
            "insufficient data: got 1 observations, need at least 2"
        );
    }

    #[test]
    fn error_invalid_horizon() {
        let err = ForecastError::InvalidHorizon { horizon: 0 };
        assert_eq!(err.to_string(), "invalid horizon: 0 (must be at least 1)");
    }

    #[test]
    fn error_degenerate_span() {
        let err = ForecastError::DegenerateTimeSpan { n: 3 };
        assert_eq!(
            err.to_string(),
            "all 3 observations share one timestamp; the time span is zero"
        );
    }

    #[test]
    fn error_prediction_length() {
        let err = ForecastError::PredictionLength {
            expected: 10,
            got: 9,
        };
        assert_eq!(err.to_string(), "model returned 9 predictions for 10 timestamps");
    }

    #[test]
    fn error_from_calendar() {
        let err: ForecastError = CalendarError::YearOutOfRange { year: 300_000 }.into();
        assert!(matches!(err, ForecastError::Calendar { .. }));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ForecastError>();
    }
}

//! Error types for the quartercast-pipeline crate.

use quartercast_forecast::ForecastError;
use quartercast_io::IoError;

/// Failure category shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Required columns are missing.
    Schema,
    /// Period labels could not be parsed.
    Parse,
    /// Subscriber values are not numeric.
    NonNumeric,
    /// The series cannot be modelled (too few points, zero time span).
    ModelInput,
    /// The input could not be read at all.
    Input,
    /// A request or configuration value is invalid.
    Config,
    /// The model failed numerically.
    Model,
}

impl ErrorKind {
    /// Short label for the category.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Schema => "schema error",
            ErrorKind::Parse => "parse error",
            ErrorKind::NonNumeric => "type error",
            ErrorKind::ModelInput => "model input error",
            ErrorKind::Input => "input error",
            ErrorKind::Config => "configuration error",
            ErrorKind::Model => "model error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type for [`run_pipeline`](crate::run_pipeline).
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Loading or generating the series failed.
    #[error("failed to load series")]
    Load(#[from] IoError),

    /// Fitting or predicting failed.
    #[error("forecast failed")]
    Forecast(#[from] ForecastError),

    /// The requested horizon is zero.
    #[error("invalid horizon: {horizon} (must be at least 1)")]
    InvalidHorizon {
        /// The rejected horizon.
        horizon: usize,
    },
}

impl PipelineError {
    /// Maps the failure onto its display category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Load(e) => match e {
                IoError::MissingColumns { .. } => ErrorKind::Schema,
                IoError::UnparseablePeriods { .. } => ErrorKind::Parse,
                IoError::NonNumericCounts { .. } => ErrorKind::NonNumeric,
                IoError::EmptySeries => ErrorKind::ModelInput,
                IoError::FileNotFound { .. } | IoError::Read { .. } | IoError::Csv { .. } => {
                    ErrorKind::Input
                }
                IoError::Calendar { .. } | IoError::Validation { .. } => ErrorKind::Config,
            },
            PipelineError::Forecast(e) => match e {
                ForecastError::InsufficientData { .. }
                | ForecastError::NonFiniteData
                | ForecastError::DegenerateTimeSpan { .. } => ErrorKind::ModelInput,
                ForecastError::InvalidHorizon { .. } | ForecastError::InvalidConfig { .. } => {
                    ErrorKind::Config
                }
                ForecastError::NotFitted
                | ForecastError::Singular { .. }
                | ForecastError::PredictionLength { .. }
                | ForecastError::Calendar { .. } => ErrorKind::Model,
            },
            PipelineError::InvalidHorizon { .. } => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_kinds() {
        let cases = [
            (
                IoError::MissingColumns {
                    missing: vec!["Subscribers".into()],
                },
                ErrorKind::Schema,
            ),
            (
                IoError::UnparseablePeriods {
                    count: 1,
                    examples: vec!["x".into()],
                },
                ErrorKind::Parse,
            ),
            (
                IoError::NonNumericCounts {
                    count: 1,
                    examples: vec!["abc".into()],
                },
                ErrorKind::NonNumeric,
            ),
            (IoError::EmptySeries, ErrorKind::ModelInput),
            (
                IoError::Csv {
                    reason: "bad".into(),
                },
                ErrorKind::Input,
            ),
        ];
        for (err, kind) in cases {
            assert_eq!(PipelineError::from(err).kind(), kind);
        }
    }

    #[test]
    fn forecast_kinds() {
        assert_eq!(
            PipelineError::from(ForecastError::InsufficientData { n: 1, min: 2 }).kind(),
            ErrorKind::ModelInput
        );
        assert_eq!(
            PipelineError::from(ForecastError::Singular { size: 3 }).kind(),
            ErrorKind::Model
        );
        assert_eq!(
            PipelineError::InvalidHorizon { horizon: 0 }.kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn message_carries_source() {
        let err = PipelineError::from(IoError::NonNumericCounts {
            count: 2,
            examples: vec!["abc".into(), "12k".into()],
        });
        assert_eq!(err.to_string(), "failed to load series");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(
            source.to_string(),
            "non-numeric subscriber value in 2 row(s); examples: ['abc', '12k']"
        );
        assert_eq!(err.kind().to_string(), "type error");
    }
}

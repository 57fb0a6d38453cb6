//! Integration tests: full request runs with a stub model and the additive
//! model.

use chrono::NaiveDate;
use quartercast_calendar::quarter_end_range;
use quartercast_forecast::{AdditiveModel, ForecastError, ForecastModel, Prediction};
use quartercast_io::{CanonicalSeries, SyntheticConfig};
use quartercast_pipeline::{ErrorKind, PipelineError, PipelineRequest, SeriesSource, run_pipeline};

/// Repeats the last observed value with a fixed ±10 band.
#[derive(Default)]
struct LastValue {
    value: Option<f64>,
}

impl ForecastModel for LastValue {
    fn fit(&mut self, series: &CanonicalSeries) -> Result<(), ForecastError> {
        self.value = Some(series.last().value);
        Ok(())
    }

    fn predict(&self, timestamps: &[NaiveDate]) -> Result<Vec<Prediction>, ForecastError> {
        let v = self.value.ok_or(ForecastError::NotFitted)?;
        Ok(timestamps
            .iter()
            .map(|_| Prediction::symmetric(v, 10.0))
            .collect())
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn quarterly_csv(n: usize) -> String {
    let mut csv = String::from("Time period,Subscribers\n");
    let dates = quarter_end_range(ymd(2014, 1, 1), ymd(2100, 1, 1)).unwrap();
    for (i, d) in dates.into_iter().take(n).enumerate() {
        csv.push_str(&format!("{},{}\n", d.format("%m/%d/%Y"), 1000 + 10 * i));
    }
    csv
}

#[test]
fn forty_two_rows_horizon_eight() {
    let csv = quarterly_csv(42);
    let request = PipelineRequest::csv(csv.as_bytes(), 8);
    let output = run_pipeline(&request, LastValue::default()).unwrap();

    assert_eq!(output.series.len(), 42);
    assert_eq!(output.forecast.len(), 50);
    assert_eq!(output.window.len(), 8);
    assert!(output.window.rows()[0].date > output.series.last().timestamp);
    assert_eq!(output.window.rows()[7].forecast, 1410.0);
    assert_eq!(output.window.rows()[7].upper, 1420.0);
    assert!(output.components.is_none());
}

#[test]
fn summary_reports_latest_value() {
    let csv = b"Time period,Subscribers\nQ2 2019,1100\nQ1 2019,1000\n";
    let output = run_pipeline(&PipelineRequest::csv(csv, 4), LastValue::default()).unwrap();
    assert_eq!(output.summary.first_date, ymd(2019, 3, 31));
    assert_eq!(output.summary.latest_date, ymd(2019, 6, 30));
    assert_eq!(output.summary.latest_value, 1100.0);
}

#[test]
fn components_only_when_requested() {
    let csv = quarterly_csv(8);
    let request = PipelineRequest::csv(csv.as_bytes(), 4).with_components(true);
    let output = run_pipeline(&request, LastValue::default()).unwrap();
    let components = output.components.unwrap();
    assert_eq!(components.len(), 12);
}

#[test]
fn parse_error_lists_original_label() {
    let csv = b"Time period,Subscribers\n13/01/2020,500\n";
    let err = run_pipeline(&PipelineRequest::csv(csv, 4), LastValue::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    let source = std::error::Error::source(&err).unwrap().to_string();
    assert!(source.contains("'13/01/2020'"), "{source}");
}

#[test]
fn non_numeric_is_type_error() {
    let csv = b"Time period,Subscribers\nQ1 2019,abc\n";
    let err = run_pipeline(&PipelineRequest::csv(csv, 4), LastValue::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonNumeric);
}

#[test]
fn missing_column_is_schema_error() {
    let csv = b"Date,Subscribers\nQ1 2019,1\n";
    let err = run_pipeline(&PipelineRequest::csv(csv, 4), LastValue::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn empty_upload_is_model_input_error() {
    let csv = b"Time period,Subscribers\n";
    let err = run_pipeline(&PipelineRequest::csv(csv, 4), LastValue::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ModelInput);
}

#[test]
fn single_row_is_model_input_error() {
    let csv = b"Time period,Subscribers\nQ1 2019,1000\n";
    let err = run_pipeline(&PipelineRequest::csv(csv, 4), LastValue::default()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Forecast(ForecastError::InsufficientData { n: 1, .. })
    ));
    assert_eq!(err.kind(), ErrorKind::ModelInput);
}

#[test]
fn zero_horizon_rejected_before_loading() {
    // The CSV is malformed too; the horizon check must win.
    let csv = b"nonsense";
    let err = run_pipeline(&PipelineRequest::csv(csv, 0), LastValue::default()).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidHorizon { horizon: 0 }));
}

#[test]
fn synthetic_source_with_additive_model() {
    let request = PipelineRequest::synthetic(8).with_components(true);
    let output = run_pipeline(&request, AdditiveModel::default()).unwrap();

    assert_eq!(output.series.len(), 44);
    assert_eq!(output.forecast.len(), 52);
    assert_eq!(output.window.rows()[0].date, ymd(2025, 3, 31));
    for row in output.window.rows() {
        assert!(row.lower <= row.forecast && row.forecast <= row.upper);
    }
    assert_eq!(output.components.unwrap().len(), 52);
}

#[test]
fn synthetic_runs_are_repeatable() {
    let request = PipelineRequest {
        source: SeriesSource::Synthetic(SyntheticConfig::default().with_seed(99)),
        horizon: 4,
        show_components: false,
    };
    let a = run_pipeline(&request, AdditiveModel::default()).unwrap();
    let b = run_pipeline(&request, AdditiveModel::default()).unwrap();
    assert_eq!(a.series, b.series);
    assert_eq!(a.window, b.window);
}

#[test]
fn output_serializes_for_charting() {
    let csv = b"Time period,Subscribers\nQ1 2019,1000\nQ2 2019,1100\n";
    let output = run_pipeline(&PipelineRequest::csv(csv, 4), LastValue::default()).unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["window"].as_array().unwrap().len(), 4);
    assert_eq!(json["window"][0]["Date"], "2019-09-30");
    assert!(json.get("components").is_none());
}

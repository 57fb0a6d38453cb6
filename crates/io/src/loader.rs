//! Series loading: raw table to [`CanonicalSeries`].

use std::path::Path;

use quartercast_calendar::{NormalizedPeriod, normalize_period};
use tracing::debug;

use crate::error::IoError;
use crate::reader;
use crate::record::RawTable;
use crate::series::{CanonicalSeries, SeriesPoint};
use crate::validate;

/// Builds the canonical series from a raw table.
///
/// Steps, in order:
///
/// 1. locate the `Time period` and `Subscribers` columns;
/// 2. normalize every period label;
/// 3. reject the table if any label is unparseable;
/// 4. coerce every subscriber count, rejecting the table if any fails;
/// 5. sort ascending by timestamp.
///
/// No row is ever skipped: a single bad row fails the whole load, and the
/// error quotes the original text of the offending rows.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::MissingColumns`] | a required header is absent |
/// | [`IoError::EmptySeries`] | the table has no data rows |
/// | [`IoError::UnparseablePeriods`] | a period label is neither a quarter code nor a date |
/// | [`IoError::NonNumericCounts`] | a subscriber count is not a finite number |
#[tracing::instrument(skip_all, fields(n_rows = table.len()))]
pub fn load(table: &RawTable) -> Result<CanonicalSeries, IoError> {
    let columns = validate::validate_schema(table.headers())?;
    let records = table.records(columns);
    if records.is_empty() {
        return Err(IoError::EmptySeries);
    }

    let normalized: Vec<NormalizedPeriod> = records
        .iter()
        .map(|r| normalize_period(&r.period_label))
        .collect();
    let dates = validate::validate_periods(&records, &normalized)?;
    let values = validate::validate_counts(&records)?;

    let points = dates
        .into_iter()
        .zip(values)
        .map(SeriesPoint::from)
        .collect();
    let series = CanonicalSeries::new(points)?;

    debug!(
        n_points = series.len(),
        first = %series.first().timestamp,
        last = %series.last().timestamp,
        "loaded series"
    );
    Ok(series)
}

/// Decodes CSV bytes and loads them with [`load`].
///
/// # Errors
///
/// Returns [`IoError::Csv`] for malformed CSV, otherwise the errors of [`load`].
pub fn load_csv(bytes: &[u8]) -> Result<CanonicalSeries, IoError> {
    let table = reader::read_csv_bytes(bytes)?;
    load(&table)
}

/// Reads a CSV file and loads it with [`load`].
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, otherwise the
/// errors of [`load_csv`].
pub fn load_csv_file(path: &Path) -> Result<CanonicalSeries, IoError> {
    let table = reader::read_csv_file(path)?;
    load(&table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn two_quarter_rows() {
        let table = RawTable::from_pairs(&[("Q1 2019", "1000"), ("Q2 2019", "1100")]);
        let series = load(&table).unwrap();
        assert_eq!(
            series.points(),
            &[
                SeriesPoint::new(ymd(2019, 3, 31), 1000.0),
                SeriesPoint::new(ymd(2019, 6, 30), 1100.0),
            ]
        );
    }

    #[test]
    fn day_first_date_is_parse_error() {
        let table = RawTable::from_pairs(&[("13/01/2020", "500")]);
        match load(&table).unwrap_err() {
            IoError::UnparseablePeriods { count, examples } => {
                assert_eq!(count, 1);
                assert_eq!(examples, vec!["13/01/2020"]);
            }
            other => panic!("expected UnparseablePeriods, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_is_type_error() {
        let table = RawTable::from_pairs(&[("Q1 2019", "abc")]);
        assert!(matches!(
            load(&table).unwrap_err(),
            IoError::NonNumericCounts { .. }
        ));
    }

    #[test]
    fn dates_checked_before_counts() {
        let table = RawTable::from_pairs(&[("Q9 2019", "abc")]);
        assert!(matches!(
            load(&table).unwrap_err(),
            IoError::UnparseablePeriods { .. }
        ));
    }

    #[test]
    fn schema_checked_before_rows() {
        let table = RawTable::new(
            vec!["Period".into(), "Subscribers".into()],
            vec![vec!["garbage".into(), "abc".into()]],
        );
        assert!(matches!(
            load(&table).unwrap_err(),
            IoError::MissingColumns { .. }
        ));
    }

    #[test]
    fn header_only_is_empty_series() {
        let table = RawTable::from_pairs(&[]);
        assert!(matches!(load(&table).unwrap_err(), IoError::EmptySeries));
    }

    #[test]
    fn mixed_label_formats_are_sorted() {
        let table = RawTable::from_pairs(&[
            ("2019-12-31", "1300"),
            ("Q1 2019", "1000"),
            ("09/30/2019", "1200"),
            ("q2 2019", "1100"),
        ]);
        let series = load(&table).unwrap();
        assert_eq!(series.values(), vec![1000.0, 1100.0, 1200.0, 1300.0]);
    }

    #[test]
    fn load_csv_from_bytes() {
        let series = load_csv(b" Time period , Subscribers \nQ1 2019, 1000\nQ2 2019,1100\n").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.last().value, 1100.0);
    }
}

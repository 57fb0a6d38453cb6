//! Quarter-end date sequences.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::quarter::{Quarter, containing_quarter_end, quarter_end};

/// Returns the first quarter end strictly after `date`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the next quarter end is not
/// representable.
pub fn next_quarter_end(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    let current = containing_quarter_end(date)?;
    if current > date {
        return Ok(current);
    }
    let quarter = Quarter::from_month(current.month() as u8)?;
    let (next, rolled) = quarter.succ();
    let year = if rolled {
        current
            .year()
            .checked_add(1)
            .ok_or(CalendarError::YearOutOfRange {
                year: current.year(),
            })?
    } else {
        current.year()
    };
    quarter_end(year, next)
}

/// Generates the `n` successive quarter ends strictly after `last`.
///
/// This is the future timeline appended to a fitted history: the first
/// element is the quarter end following `last`, each later element the one
/// after that.
///
/// # Example
///
/// ```ignore
/// let last = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let future = quarter_ends_after(last, 2)?;
/// // 2025-03-31, 2025-06-30
/// ```
pub fn quarter_ends_after(last: NaiveDate, n: usize) -> Result<Vec<NaiveDate>, CalendarError> {
    let mut dates = Vec::with_capacity(n);
    let mut current = last;
    for _ in 0..n {
        current = next_quarter_end(current)?;
        dates.push(current);
    }
    Ok(dates)
}

/// Generates every quarter end in `start..=end`.
///
/// `start` need not be a quarter end itself; the sequence begins at the first
/// quarter end on or after it. Returns an empty vector when `end < start`.
pub fn quarter_end_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, CalendarError> {
    let mut dates = Vec::new();
    if end < start {
        return Ok(dates);
    }
    let mut current = containing_quarter_end(start)?;
    while current <= end {
        dates.push(current);
        current = next_quarter_end(current)?;
    }
    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn next_from_quarter_end() {
        assert_eq!(next_quarter_end(ymd(2020, 3, 31)).unwrap(), ymd(2020, 6, 30));
        assert_eq!(next_quarter_end(ymd(2020, 12, 31)).unwrap(), ymd(2021, 3, 31));
    }

    #[test]
    fn next_from_mid_quarter() {
        assert_eq!(next_quarter_end(ymd(2020, 1, 1)).unwrap(), ymd(2020, 3, 31));
        assert_eq!(next_quarter_end(ymd(2020, 11, 15)).unwrap(), ymd(2020, 12, 31));
    }

    #[test]
    fn after_empty() {
        assert!(quarter_ends_after(ymd(2020, 3, 31), 0).unwrap().is_empty());
    }

    #[test]
    fn after_crosses_year() {
        let dates = quarter_ends_after(ymd(2024, 9, 30), 3).unwrap();
        assert_eq!(
            dates,
            vec![ymd(2024, 12, 31), ymd(2025, 3, 31), ymd(2025, 6, 30)]
        );
    }

    #[test]
    fn after_is_strictly_increasing() {
        let dates = quarter_ends_after(ymd(2019, 2, 14), 24).unwrap();
        assert_eq!(dates.len(), 24);
        assert!(dates[0] > ymd(2019, 2, 14));
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn range_inclusive_both_ends() {
        let dates = quarter_end_range(ymd(2014, 3, 31), ymd(2014, 12, 31)).unwrap();
        assert_eq!(
            dates,
            vec![
                ymd(2014, 3, 31),
                ymd(2014, 6, 30),
                ymd(2014, 9, 30),
                ymd(2014, 12, 31)
            ]
        );
    }

    #[test]
    fn range_starts_at_next_quarter_end() {
        let dates = quarter_end_range(ymd(2014, 1, 1), ymd(2014, 7, 1)).unwrap();
        assert_eq!(dates, vec![ymd(2014, 3, 31), ymd(2014, 6, 30)]);
    }

    #[test]
    fn range_reversed_is_empty() {
        assert!(
            quarter_end_range(ymd(2020, 1, 1), ymd(2019, 1, 1))
                .unwrap()
                .is_empty()
        );
    }
}

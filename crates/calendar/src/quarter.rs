//! Quarter newtype and quarter-end date arithmetic.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Calendar quarter (1..=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter(u8);

/// Last month of each quarter (index 0 = Q1).
const QUARTER_END_MONTH: [u32; 4] = [3, 6, 9, 12];

impl Quarter {
    /// Creates a new `Quarter` from a 1-based quarter number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidQuarter`] if `quarter` is not in 1..=4.
    pub fn new(quarter: u8) -> Result<Self, CalendarError> {
        if !(1..=4).contains(&quarter) {
            return Err(CalendarError::InvalidQuarter { quarter });
        }
        Ok(Self(quarter))
    }

    /// Returns the quarter that contains `month`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn from_month(month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self((month - 1) / 3 + 1))
    }

    /// Returns the quarter number (1..=4).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the last month of this quarter: 3, 6, 9 or 12.
    pub fn end_month(self) -> u32 {
        QUARTER_END_MONTH[self.0 as usize - 1]
    }

    /// Returns the following quarter and whether the year rolled over.
    pub(crate) fn succ(self) -> (Self, bool) {
        if self.0 == 4 {
            (Self(1), true)
        } else {
            (Self(self.0 + 1), false)
        }
    }
}

/// Returns the last calendar day of `(year, month)`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for a month outside 1..=12 and
/// [`CalendarError::YearOutOfRange`] when the date is not representable.
pub fn month_end(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month: month as u8 });
    }
    let first_of_next = if month == 12 {
        year.checked_add(1)
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .ok_or(CalendarError::YearOutOfRange { year })
}

/// Returns the last day of quarter `quarter` in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] when the date is not representable.
pub fn quarter_end(year: i32, quarter: Quarter) -> Result<NaiveDate, CalendarError> {
    month_end(year, quarter.end_month())
}

/// Returns the end of the quarter containing `date`.
///
/// The result is never earlier than `date`.
pub fn containing_quarter_end(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    let quarter = Quarter::from_month(date.month() as u8)?;
    quarter_end(date.year(), quarter)
}

/// Returns `true` if `date` is the last day of March, June, September or December.
pub fn is_quarter_end(date: NaiveDate) -> bool {
    containing_quarter_end(date).is_ok_and(|end| end == date)
}

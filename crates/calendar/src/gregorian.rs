//! Closed-form Gregorian month grid.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::grid::{MonthGrid, weekday_offset};
use crate::locale::GREGORIAN_MONTH_NAMES;

/// Returns the number of days in a Gregorian month.
///
/// Computed as the day before the first of the following month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12 and
/// [`CalendarError::DateOutOfRange`] at the edge of chrono's range.
pub fn days_in_gregorian_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    let first = NaiveDate::from_ymd_opt(year, u32::from(month), 1)
        .ok_or(CalendarError::InvalidMonth { month })?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, u32::from(month) + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or(CalendarError::DateOutOfRange {
            date: first,
            days: 31,
        })?;
    Ok(last.day() as u8)
}

/// Builds the Gregorian month grid for the month containing `today`.
///
/// # Errors
///
/// Only fails at the edge of chrono's representable range.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use taqwim_calendar::gregorian_month;
///
/// let today = NaiveDate::from_ymd_opt(2024, 4, 14).unwrap();
/// let grid = gregorian_month(today).unwrap();
/// assert_eq!(grid.month_name(), "April");
/// assert_eq!(grid.first_weekday_offset(), 1); // 2024-04-01 was a Monday
/// assert_eq!(grid.cells().len(), 31);
/// ```
pub fn gregorian_month(today: NaiveDate) -> Result<MonthGrid, CalendarError> {
    let month = today.month() as u8;
    let first = today.with_day(1).ok_or(CalendarError::InvalidDay {
        day: 1,
        month,
        max_day: 31,
    })?;
    let days = days_in_gregorian_month(today.year(), month)?;
    MonthGrid::new(
        GREGORIAN_MONTH_NAMES[usize::from(month - 1)],
        month,
        today.year(),
        weekday_offset(first),
        days,
        today.day() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_gregorian_month(2024, 1).unwrap(), 31);
        assert_eq!(days_in_gregorian_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_gregorian_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_gregorian_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_gregorian_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_gregorian_month(2024, 4).unwrap(), 30);
        assert_eq!(days_in_gregorian_month(2024, 12).unwrap(), 31);
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            days_in_gregorian_month(2024, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            days_in_gregorian_month(2024, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn october_2026() {
        // 2026-10-01 is a Thursday.
        let grid = gregorian_month(date(2026, 10, 16)).unwrap();
        assert_eq!(grid.month_name(), "October");
        assert_eq!(grid.year(), 2026);
        assert_eq!(grid.first_weekday_offset(), 4);
        assert_eq!(grid.days_in_month(), 31);
        assert_eq!(grid.today_index(), Some(4 + 15));
    }

    #[test]
    fn today_on_last_day() {
        let grid = gregorian_month(date(2024, 2, 29)).unwrap();
        assert_eq!(grid.days_in_month(), 29);
        assert_eq!(grid.cells().last().unwrap().day(), Some(29));
        assert!(grid.cells().last().unwrap().is_today());
    }
}

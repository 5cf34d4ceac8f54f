//! Bengali solar calendar: conversion capability, month boundary finder and grid.
//!
//! The month boundary is found by stepping day by day through an injected
//! [`BengaliConverter`] instead of embedding the calendar's rules in the
//! grid builder. Both directions are bounded by [`MAX_MONTH_SEARCH`].

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::error::CalendarError;
use crate::grid::{MonthGrid, shift_days, weekday_offset};
use crate::locale::BENGALI_MONTH_NAMES;

/// Upper bound on days searched in each direction by [`find_month_bounds`].
pub const MAX_MONTH_SEARCH: u32 = 32;

/// The twelve Bengali months, Boishakh first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BengaliMonth {
    Boishakh,
    Joishtho,
    Asharh,
    Srabon,
    Bhadro,
    Ashwin,
    Kartik,
    Ogrohayon,
    Poush,
    Magh,
    Falgun,
    Chaitra,
}

impl BengaliMonth {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Boishakh,
        Self::Joishtho,
        Self::Asharh,
        Self::Srabon,
        Self::Bhadro,
        Self::Ashwin,
        Self::Kartik,
        Self::Ogrohayon,
        Self::Poush,
        Self::Magh,
        Self::Falgun,
        Self::Chaitra,
    ];

    /// Returns the month for a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn from_number(month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self::ALL[usize::from(month - 1)])
    }

    /// Returns the 1-based month number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the month name in Bengali script.
    pub fn name(self) -> &'static str {
        BENGALI_MONTH_NAMES[self as usize]
    }
}

/// A date in the Bengali solar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BengaliDate {
    year: i32,
    month: BengaliMonth,
    day: u8,
}

impl BengaliDate {
    /// Creates a Bengali date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is not in 1..=31; no
    /// Bengali month is longer.
    pub fn new(year: i32, month: BengaliMonth, day: u8) -> Result<Self, CalendarError> {
        if !(1..=31).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.number(),
                max_day: 31,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the Bengali year (Bangabda).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> BengaliMonth {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }
}

/// Gregorian to Bengali date conversion.
pub trait BengaliConverter {
    /// Converts a Gregorian date to its Bengali equivalent.
    fn to_bengali(&self, date: NaiveDate) -> Result<BengaliDate, CalendarError>;
}

impl<F> BengaliConverter for F
where
    F: Fn(NaiveDate) -> Result<BengaliDate, CalendarError>,
{
    fn to_bengali(&self, date: NaiveDate) -> Result<BengaliDate, CalendarError> {
        self(date)
    }
}

/// The revised Bengali calendar used in Bangladesh.
///
/// Boishakh 1 falls on 14 April. The first six months have 31 days, Falgun
/// has 29 days (30 when the Gregorian year it falls in is a leap year) and
/// the rest have 30.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevisedBengali;

impl RevisedBengali {
    /// Returns the length of `month` in Bengali year `year`.
    pub fn month_length(year: i32, month: BengaliMonth) -> u8 {
        match month {
            BengaliMonth::Boishakh
            | BengaliMonth::Joishtho
            | BengaliMonth::Asharh
            | BengaliMonth::Srabon
            | BengaliMonth::Bhadro
            | BengaliMonth::Ashwin => 31,
            BengaliMonth::Falgun => {
                // Falgun spans mid-February of the following Gregorian year.
                if is_gregorian_leap(year + 594) {
                    30
                } else {
                    29
                }
            }
            _ => 30,
        }
    }

    fn new_year(gregorian_year: i32, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(gregorian_year, 4, 14)
            .ok_or(CalendarError::DateOutOfRange { date, days: -366 })
    }
}

impl BengaliConverter for RevisedBengali {
    fn to_bengali(&self, date: NaiveDate) -> Result<BengaliDate, CalendarError> {
        let this_year = Self::new_year(date.year(), date)?;
        let start = if date >= this_year {
            this_year
        } else {
            Self::new_year(date.year() - 1, date)?
        };
        let year = start.year() - 593;

        let mut remaining = (date - start).num_days();
        for month in BengaliMonth::ALL {
            let len = i64::from(Self::month_length(year, month));
            if remaining < len {
                return BengaliDate::new(year, month, remaining as u8 + 1);
            }
            remaining -= len;
        }
        Err(CalendarError::InvalidConversion {
            date,
            reason: format!("date falls {remaining} days past the end of year {year}"),
        })
    }
}

fn is_gregorian_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The Gregorian span of one Bengali month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBounds {
    start: NaiveDate,
    end_exclusive: NaiveDate,
}

impl MonthBounds {
    /// Returns the Gregorian date of day 1.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the Gregorian date of the first day after the month.
    pub fn end_exclusive(&self) -> NaiveDate {
        self.end_exclusive
    }

    /// Returns the number of days in the month.
    pub fn days_in_month(&self) -> u8 {
        (self.end_exclusive - self.start).num_days() as u8
    }

    /// Returns the Sunday-based weekday index of day 1.
    pub fn first_weekday_offset(&self) -> u8 {
        weekday_offset(self.start)
    }
}

/// Finds the Gregorian span of the Bengali month containing `today`.
///
/// Steps backward from `today` until the converted day-of-month is 1, then
/// forward from that start while the converted month is unchanged.
///
/// # Errors
///
/// Returns [`CalendarError::BoundaryNotFound`] if either search exceeds
/// [`MAX_MONTH_SEARCH`] days, [`CalendarError::InvalidConversion`] if the
/// converter reports an empty month, and any error the converter returns.
pub fn find_month_bounds<C>(today: NaiveDate, converter: &C) -> Result<MonthBounds, CalendarError>
where
    C: BengaliConverter + ?Sized,
{
    let month = converter.to_bengali(today)?.month();

    let mut start = today;
    let mut steps = 0;
    while converter.to_bengali(start)?.day() != 1 {
        if steps == MAX_MONTH_SEARCH {
            return Err(CalendarError::BoundaryNotFound {
                date: today,
                limit: MAX_MONTH_SEARCH,
            });
        }
        start = shift_days(start, -1)?;
        steps += 1;
    }
    trace!(%start, steps, "found month start");

    let mut end = start;
    steps = 0;
    while converter.to_bengali(end)?.month() == month {
        if steps == MAX_MONTH_SEARCH {
            return Err(CalendarError::BoundaryNotFound {
                date: today,
                limit: MAX_MONTH_SEARCH,
            });
        }
        end = shift_days(end, 1)?;
        steps += 1;
    }
    trace!(end_exclusive = %end, steps, "found month end");

    if end <= start {
        return Err(CalendarError::InvalidConversion {
            date: start,
            reason: format!("month {month:?} does not contain its own day 1"),
        });
    }
    Ok(MonthBounds {
        start,
        end_exclusive: end,
    })
}

/// Builds the Bengali month grid for the month containing `today`.
///
/// # Errors
///
/// Propagates converter failures and boundary search failures; there is no
/// fallback calendar.
#[tracing::instrument(skip(converter))]
pub fn bengali_month<C>(today: NaiveDate, converter: &C) -> Result<MonthGrid, CalendarError>
where
    C: BengaliConverter + ?Sized,
{
    let info = converter.to_bengali(today)?;
    let bounds = find_month_bounds(today, converter)?;
    debug!(
        month = info.month().number(),
        year = info.year(),
        days = bounds.days_in_month(),
        "bengali month resolved"
    );
    MonthGrid::new(
        info.month().name(),
        info.month().number(),
        info.year(),
        bounds.first_weekday_offset(),
        bounds.days_in_month(),
        info.day(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_year_1431() {
        let b = RevisedBengali.to_bengali(date(2024, 4, 14)).unwrap();
        assert_eq!(b.year(), 1431);
        assert_eq!(b.month(), BengaliMonth::Boishakh);
        assert_eq!(b.day(), 1);
    }

    #[test]
    fn day_before_new_year() {
        let b = RevisedBengali.to_bengali(date(2024, 4, 13)).unwrap();
        assert_eq!(b.year(), 1430);
        assert_eq!(b.month(), BengaliMonth::Chaitra);
        assert_eq!(b.day(), 30);
    }

    #[test]
    fn falgun_in_leap_year() {
        // Falgun 1430 spans 2024-02-14..=2024-03-14.
        let first = RevisedBengali.to_bengali(date(2024, 2, 14)).unwrap();
        assert_eq!((first.month(), first.day()), (BengaliMonth::Falgun, 1));
        let last = RevisedBengali.to_bengali(date(2024, 3, 14)).unwrap();
        assert_eq!((last.month(), last.day()), (BengaliMonth::Falgun, 30));
        let chaitra = RevisedBengali.to_bengali(date(2024, 3, 15)).unwrap();
        assert_eq!((chaitra.month(), chaitra.day()), (BengaliMonth::Chaitra, 1));
    }

    #[test]
    fn falgun_in_common_year() {
        assert_eq!(RevisedBengali::month_length(1431, BengaliMonth::Falgun), 29);
        assert_eq!(RevisedBengali::month_length(1430, BengaliMonth::Falgun), 30);
        let chaitra = RevisedBengali.to_bengali(date(2023, 3, 15)).unwrap();
        assert_eq!((chaitra.month(), chaitra.day()), (BengaliMonth::Chaitra, 1));
    }

    #[test]
    fn ashwin_31() {
        let b = RevisedBengali.to_bengali(date(2026, 10, 16)).unwrap();
        assert_eq!(b.year(), 1433);
        assert_eq!(b.month(), BengaliMonth::Ashwin);
        assert_eq!(b.day(), 31);
    }

    #[test]
    fn month_numbers_round_trip() {
        for m in 1..=12 {
            assert_eq!(BengaliMonth::from_number(m).unwrap().number(), m);
        }
        assert!(BengaliMonth::from_number(0).is_err());
        assert!(BengaliMonth::from_number(13).is_err());
    }

    #[test]
    fn bengali_date_rejects_day_32() {
        assert!(BengaliDate::new(1431, BengaliMonth::Boishakh, 32).is_err());
        assert!(BengaliDate::new(1431, BengaliMonth::Boishakh, 0).is_err());
    }

    #[test]
    fn bounds_on_new_year() {
        let bounds = find_month_bounds(date(2024, 4, 14), &RevisedBengali).unwrap();
        assert_eq!(bounds.start(), date(2024, 4, 14));
        assert_eq!(bounds.end_exclusive(), date(2024, 5, 15));
        assert_eq!(bounds.days_in_month(), 31);
        assert_eq!(bounds.first_weekday_offset(), 0);
    }

    #[test]
    fn bounds_from_mid_month() {
        let bounds = find_month_bounds(date(2024, 3, 1), &RevisedBengali).unwrap();
        assert_eq!(bounds.start(), date(2024, 2, 14));
        assert_eq!(bounds.days_in_month(), 30);
    }

    #[test]
    fn boundary_not_found_with_stuck_converter() {
        let stuck = |_: NaiveDate| BengaliDate::new(1431, BengaliMonth::Magh, 5);
        assert_eq!(
            find_month_bounds(date(2024, 1, 1), &stuck).unwrap_err(),
            CalendarError::BoundaryNotFound {
                date: date(2024, 1, 1),
                limit: MAX_MONTH_SEARCH,
            }
        );
    }

    #[test]
    fn converter_error_propagates() {
        let failing = |d: NaiveDate| -> Result<BengaliDate, CalendarError> {
            Err(CalendarError::InvalidConversion {
                date: d,
                reason: "offline".to_string(),
            })
        };
        assert!(matches!(
            bengali_month(date(2024, 1, 1), &failing),
            Err(CalendarError::InvalidConversion { .. })
        ));
    }

    #[test]
    fn grid_for_chaitra() {
        let grid = bengali_month(date(2024, 4, 1), &RevisedBengali).unwrap();
        assert_eq!(grid.month_name(), "চৈত্র");
        assert_eq!(grid.year(), 1430);
        assert_eq!(grid.days_in_month(), 30);
        // Chaitra 1430 starts on Friday 2024-03-15.
        assert_eq!(grid.first_weekday_offset(), 5);
        assert_eq!(grid.today_index(), Some(5 + 17));
    }
}

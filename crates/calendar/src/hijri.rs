//! Hijri lunar calendar: conversion capability and month grid.

use chrono::{Datelike, NaiveDate};
use icu_calendar::islamic::IslamicUmmAlQura;
use icu_calendar::{Date, Ref};
use tracing::debug;

use crate::error::CalendarError;
use crate::grid::{MonthGrid, shift_days, weekday_offset};
use crate::locale::HIJRI_MONTH_NAMES;

/// A date in the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year: i32,
    month: u8,
    day: u8,
}

impl HijriDate {
    /// Creates a Hijri date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
    /// [`CalendarError::InvalidDay`] if `day` is not in 1..=30.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day: 30,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the Hijri year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12, Muharram = 1).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the Arabic month name.
    pub fn month_name(self) -> &'static str {
        HIJRI_MONTH_NAMES[usize::from(self.month - 1)]
    }
}

/// Gregorian to Hijri date conversion.
pub trait HijriConverter {
    /// Converts a Gregorian date to its Hijri equivalent.
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, CalendarError>;

    /// Returns the number of days in a Hijri month.
    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError>;

    /// Returns the Gregorian date on which the Hijri month containing `date` starts.
    fn month_start(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let hijri = self.to_hijri(date)?;
        shift_days(date, -(i64::from(hijri.day()) - 1))
    }
}

/// The Umm al-Qura calendar, as published by Saudi Arabia.
///
/// Backed by `icu_calendar`'s baked month-length tables for AH 1317 onwards;
/// dates outside the table are computed astronomically. Local moon sighting
/// can still differ by a day or two; see [`hijri_month`] for the calibration
/// shift.
#[derive(Debug, Clone)]
pub struct UmmAlQuraHijri {
    calendar: IslamicUmmAlQura,
}

impl UmmAlQuraHijri {
    /// Creates a converter over the compiled Umm al-Qura tables.
    pub fn new() -> Self {
        Self {
            calendar: IslamicUmmAlQura::new(),
        }
    }
}

impl Default for UmmAlQuraHijri {
    fn default() -> Self {
        Self::new()
    }
}

impl HijriConverter for UmmAlQuraHijri {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, CalendarError> {
        let invalid = |reason: String| CalendarError::InvalidConversion { date, reason };

        let month = u8::try_from(date.month()).map_err(|e| invalid(e.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|e| invalid(e.to_string()))?;
        let iso = Date::try_new_iso_date(date.year(), month, day)
            .map_err(|e| invalid(e.to_string()))?;
        let hijri = iso.to_calendar(Ref(&self.calendar));

        let month = u8::try_from(hijri.month().ordinal).map_err(|e| invalid(e.to_string()))?;
        let day = u8::try_from(hijri.day_of_month().0).map_err(|e| invalid(e.to_string()))?;
        HijriDate::new(hijri.year().number, month, day)
    }

    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Date::try_new_ummalqura_date(year, month, 1, Ref(&self.calendar))
            .map(|first| first.days_in_month())
            .map_err(|_| CalendarError::InvalidMonth { month })
    }
}

/// Builds the Hijri month grid for the month containing `today`.
///
/// `day_shift` is added to `today` before conversion to calibrate the
/// converter against local moon sighting; the shifted date is what "today"
/// means inside the Hijri month.
///
/// # Errors
///
/// Propagates converter failures; returns [`CalendarError::TodayOutsideMonth`]
/// if the converter's day number exceeds its own month length.
#[tracing::instrument(skip(converter))]
pub fn hijri_month<C>(
    today: NaiveDate,
    converter: &C,
    day_shift: i64,
) -> Result<MonthGrid, CalendarError>
where
    C: HijriConverter + ?Sized,
{
    let shifted = shift_days(today, day_shift)?;
    let hijri = converter.to_hijri(shifted)?;
    let start = converter.month_start(shifted)?;
    let days = converter.days_in_month(hijri.year(), hijri.month())?;
    debug!(
        year = hijri.year(),
        month = hijri.month(),
        day = hijri.day(),
        %start,
        days,
        "hijri month resolved"
    );
    MonthGrid::new(
        hijri.month_name(),
        hijri.month(),
        hijri.year(),
        weekday_offset(start),
        days,
        hijri.day(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hijri(y: i32, m: u32, d: u32) -> HijriDate {
        UmmAlQuraHijri::new().to_hijri(date(y, m, d)).unwrap()
    }

    #[test]
    fn known_dates() {
        assert_eq!(hijri(2023, 7, 19), HijriDate::new(1445, 1, 1).unwrap());
        assert_eq!(hijri(2024, 3, 11), HijriDate::new(1445, 9, 1).unwrap());
        assert_eq!(hijri(2024, 3, 10), HijriDate::new(1445, 8, 29).unwrap());
        assert_eq!(hijri(2024, 4, 10), HijriDate::new(1445, 10, 1).unwrap());
        assert_eq!(hijri(2000, 1, 1), HijriDate::new(1420, 9, 24).unwrap());
        assert_eq!(hijri(2011, 4, 4), HijriDate::new(1432, 4, 30).unwrap());
    }

    #[test]
    fn new_year_1446() {
        assert_eq!(hijri(2024, 7, 6), HijriDate::new(1445, 12, 30).unwrap());
        assert_eq!(hijri(2024, 7, 7), HijriDate::new(1446, 1, 1).unwrap());
        let converter = UmmAlQuraHijri::new();
        assert_eq!(converter.days_in_month(1445, 12).unwrap(), 30);
        assert_eq!(converter.days_in_month(1446, 12).unwrap(), 29);
    }

    #[test]
    fn month_lengths_follow_tables() {
        let converter = UmmAlQuraHijri::default();
        assert_eq!(converter.days_in_month(1445, 9).unwrap(), 30);
        assert_eq!(converter.days_in_month(1446, 8).unwrap(), 30);
        assert_eq!(converter.days_in_month(1446, 9).unwrap(), 29);
        assert_eq!(
            converter.days_in_month(1446, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            converter.days_in_month(1446, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn month_start_default() {
        assert_eq!(
            UmmAlQuraHijri::new().month_start(date(2024, 4, 9)).unwrap(),
            date(2024, 3, 11)
        );
    }

    #[test]
    fn hijri_date_validation() {
        assert!(HijriDate::new(1445, 0, 1).is_err());
        assert!(HijriDate::new(1445, 1, 31).is_err());
        assert_eq!(HijriDate::new(1445, 9, 1).unwrap().month_name(), "رمضان");
    }

    #[test]
    fn grid_with_default_shift() {
        // Shifted to 2024-03-11, 1 Ramadan 1445, a Monday.
        let grid = hijri_month(date(2024, 3, 12), &UmmAlQuraHijri::new(), -1).unwrap();
        assert_eq!(grid.month_name(), "رمضان");
        assert_eq!(grid.year(), 1445);
        assert_eq!(grid.days_in_month(), 30);
        assert_eq!(grid.first_weekday_offset(), 1);
        assert_eq!(grid.today_index(), Some(1));
    }

    #[test]
    fn grid_without_shift() {
        let grid = hijri_month(date(2024, 3, 12), &UmmAlQuraHijri::new(), 0).unwrap();
        assert_eq!(grid.today_index(), Some(1 + 1));
    }
}

//! Error types for the taqwim-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the taqwim-calendar crate.
///
/// Conversion failures are fatal for the grid being built: no fallback
/// calendar is substituted and no partial grid is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when stepping a date leaves the range chrono can represent.
    #[error("date out of range: {date} shifted by {days} days")]
    DateOutOfRange {
        /// The date that was being shifted.
        date: NaiveDate,
        /// The requested shift in days.
        days: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a calendar converter produces data that contradicts itself.
    #[error("inconsistent conversion for {date}: {reason}")]
    InvalidConversion {
        /// The Gregorian date being converted.
        date: NaiveDate,
        /// Description of the inconsistency.
        reason: String,
    },

    /// Returned when the month boundary search exceeds its day limit.
    #[error("no month boundary within {limit} days of {date}")]
    BoundaryNotFound {
        /// The date the search started from.
        date: NaiveDate,
        /// Maximum number of days searched.
        limit: u32,
    },

    /// Returned when today's day number does not fit in the computed month.
    #[error("today's day {day} is outside a month of {days_in_month} days")]
    TodayOutsideMonth {
        /// Day-of-month reported for today.
        day: u8,
        /// Computed length of the month.
        days_in_month: u8,
    },

    /// Returned when the Hijri calibration shift is outside the accepted window.
    #[error("invalid hijri day shift: {shift} (must be within -{max}..={max})")]
    InvalidDayShift {
        /// The rejected shift in days.
        shift: i64,
        /// Largest accepted magnitude.
        max: i64,
    },
}

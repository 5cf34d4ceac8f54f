//! Current time of day with sub-minute precision.

use chrono::{NaiveTime, Timelike};

use crate::clock_time::ClockTime;
use crate::error::PrayerError;

/// Minutes per day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// A time of day as fractional minutes since midnight, in `0.0..1440.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeOfDay(f64);

impl TimeOfDay {
    /// Creates a time of day from fractional minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns [`PrayerError::InvalidTimeOfDay`] if `minutes` is not finite or
    /// outside `0.0..1440.0`.
    pub fn from_minutes(minutes: f64) -> Result<Self, PrayerError> {
        if !minutes.is_finite() || !(0.0..MINUTES_PER_DAY).contains(&minutes) {
            return Err(PrayerError::InvalidTimeOfDay { minutes });
        }
        Ok(Self(minutes))
    }

    /// Creates a time of day from whole hours, minutes and seconds.
    ///
    /// # Errors
    ///
    /// Returns [`PrayerError::InvalidTimeOfDay`] if any component is out of range.
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, PrayerError> {
        let minutes = f64::from(hour) * 60.0 + f64::from(minute) + f64::from(second) / 60.0;
        if minute > 59 || second > 59 {
            return Err(PrayerError::InvalidTimeOfDay { minutes });
        }
        Self::from_minutes(minutes)
    }

    /// Returns fractional minutes since midnight.
    pub fn minutes(self) -> f64 {
        self.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Whole seconds only; sub-second precision is dropped.
    fn from(time: NaiveTime) -> Self {
        let second = time.second().min(59);
        Self(f64::from(time.hour()) * 60.0 + f64::from(time.minute()) + f64::from(second) / 60.0)
    }
}

impl From<ClockTime> for TimeOfDay {
    fn from(time: ClockTime) -> Self {
        Self(f64::from(time.minutes_since_midnight()))
    }
}

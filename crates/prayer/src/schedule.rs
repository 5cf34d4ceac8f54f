//! One day's prayer schedule.

use std::collections::BTreeMap;

use crate::clock_time::ClockTime;
use crate::error::PrayerError;
use crate::prayer::{AuxiliaryTime, Prayer};

/// Clock times for one day, indexed by [`Prayer`].
///
/// Auxiliary entries (Imsak, Sunset, Midnight) are optional and only shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSchedule {
    times: [ClockTime; 6],
    auxiliary: [Option<ClockTime>; 3],
}

impl PrayerSchedule {
    /// Creates a schedule from times in [`Prayer::ALL`] order.
    pub fn new(times: [ClockTime; 6]) -> Self {
        Self {
            times,
            auxiliary: [None; 3],
        }
    }

    /// Sets an auxiliary entry.
    pub fn with_auxiliary(mut self, entry: AuxiliaryTime, time: ClockTime) -> Self {
        self.auxiliary[entry as usize] = Some(time);
        self
    }

    /// Builds a schedule from a provider's key/value timings.
    ///
    /// Keys are matched by [`Prayer::key`] and [`AuxiliaryTime::key`]; unknown
    /// keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PrayerError::MissingPrayer`] if a prayer key is absent and a
    /// parse error if any known entry is malformed.
    pub fn from_timings(timings: &BTreeMap<String, String>) -> Result<Self, PrayerError> {
        let mut times = [ClockTime::default(); 6];
        for prayer in Prayer::ALL {
            let raw = timings
                .get(prayer.key())
                .ok_or(PrayerError::MissingPrayer { name: prayer.key() })?;
            times[prayer.index()] = raw.parse()?;
        }

        let mut schedule = Self::new(times);
        for entry in AuxiliaryTime::ALL {
            if let Some(raw) = timings.get(entry.key()) {
                schedule = schedule.with_auxiliary(entry, raw.parse()?);
            }
        }
        Ok(schedule)
    }

    /// Returns the clock time of `prayer`.
    pub fn time(&self, prayer: Prayer) -> ClockTime {
        self.times[prayer.index()]
    }

    /// Returns the clock time of an auxiliary entry, if present.
    pub fn auxiliary(&self, entry: AuxiliaryTime) -> Option<ClockTime> {
        self.auxiliary[entry as usize]
    }

    /// Iterates prayers and their times in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, ClockTime)> + '_ {
        Prayer::ALL.into_iter().map(|p| (p, self.time(p)))
    }

    /// Returns `true` if times strictly increase from Fajr to Isha.
    pub fn is_chronological(&self) -> bool {
        self.times.windows(2).all(|w| w[0] < w[1])
    }
}

//! Countdown arithmetic: next prayer, sehri/iftar and interval progress.

use std::fmt;

use tracing::trace;

use crate::clock_time::ClockTime;
use crate::prayer::Prayer;
use crate::schedule::PrayerSchedule;
use crate::time_of_day::{MINUTES_PER_DAY, TimeOfDay};

const SECONDS_PER_DAY: u32 = 86_400;

/// Whole seconds remaining until a target, always below 24 hours.
///
/// Displays as `"HH : MM : SS"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Countdown {
    total_seconds: u32,
}

impl Countdown {
    /// Creates a countdown, folding whole days away.
    pub fn from_seconds(seconds: u32) -> Self {
        Self {
            total_seconds: seconds % SECONDS_PER_DAY,
        }
    }

    pub fn total_seconds(self) -> u32 {
        self.total_seconds
    }

    pub fn hours(self) -> u32 {
        self.total_seconds / 3600
    }

    pub fn minutes(self) -> u32 {
        self.total_seconds % 3600 / 60
    }

    pub fn seconds(self) -> u32 {
        self.total_seconds % 60
    }

    pub fn is_zero(self) -> bool {
        self.total_seconds == 0
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} : {:02} : {:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

/// The upcoming prayer and the time left until it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    pub prayer: Prayer,
    pub time: ClockTime,
    pub remaining: Countdown,
}

/// Minutes from `now` forward to `target`, wrapping past midnight.
fn minutes_until(target: ClockTime, now: TimeOfDay) -> f64 {
    let diff = f64::from(target.minutes_since_midnight()) - now.minutes();
    if diff < 0.0 { diff + MINUTES_PER_DAY } else { diff }
}

fn to_countdown(minutes: f64) -> Countdown {
    // Bounded by 0..=86400 since minutes is within 0..=1440.
    Countdown::from_seconds((minutes * 60.0).round() as u32)
}

/// Finds the next schedule entry at or after `now`.
///
/// Entries already passed today wrap to tomorrow. When two entries are
/// equally near, the one earlier in [`Prayer::ALL`] wins.
pub fn next_prayer(schedule: &PrayerSchedule, now: TimeOfDay) -> NextPrayer {
    let mut best = Prayer::Fajr;
    let mut best_diff = minutes_until(schedule.time(best), now);
    for (prayer, time) in schedule.iter().skip(1) {
        let diff = minutes_until(time, now);
        if diff < best_diff {
            best = prayer;
            best_diff = diff;
        }
    }
    trace!(prayer = best.key(), minutes = best_diff, "next prayer");
    NextPrayer {
        prayer: best,
        time: schedule.time(best),
        remaining: to_countdown(best_diff),
    }
}

/// Time left from `now` until `target`, wrapping past midnight.
pub fn countdown_to(target: ClockTime, now: TimeOfDay) -> Countdown {
    to_countdown(minutes_until(target, now))
}

/// Time left until Fajr, when the pre-dawn meal ends.
pub fn sehri_countdown(schedule: &PrayerSchedule, now: TimeOfDay) -> Countdown {
    countdown_to(schedule.time(Prayer::Fajr), now)
}

/// Time left until Maghrib, when the fast is broken.
pub fn iftar_countdown(schedule: &PrayerSchedule, now: TimeOfDay) -> Countdown {
    countdown_to(schedule.time(Prayer::Maghrib), now)
}

/// Fraction of the current interval already elapsed, in `0.0..=1.0`.
///
/// The interval runs from the entry before the next prayer to the next
/// prayer. A zero-length interval counts as a full day.
///
/// Exactly at a prayer time that prayer is still the next one with zero
/// remaining, so the result is `1.0`; the following interval starts one
/// second later.
pub fn progress(schedule: &PrayerSchedule, now: TimeOfDay) -> f64 {
    let next = next_prayer(schedule, now);
    let previous = schedule.time(next.prayer.previous());
    let span = (i32::from(next.time.minutes_since_midnight())
        - i32::from(previous.minutes_since_midnight()))
    .rem_euclid(MINUTES_PER_DAY as i32);
    let span = if span == 0 {
        MINUTES_PER_DAY
    } else {
        f64::from(span)
    };
    let remaining = f64::from(next.remaining.total_seconds()) / 60.0;
    (1.0 - remaining / span).clamp(0.0, 1.0)
}

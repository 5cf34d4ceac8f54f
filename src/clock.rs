//! Current-instant source and zone-aware date/time helpers.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use taqwim_prayer::TimeOfDay;

/// A source of the current instant.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Local date and time of `clock` in `zone`, or in the system zone when `None`.
fn local_parts(clock: &dyn Clock, zone: Option<Tz>) -> (NaiveDate, NaiveTime) {
    let now = clock.now_utc();
    match zone {
        Some(tz) => {
            let local = now.with_timezone(&tz);
            (local.date_naive(), local.time())
        }
        None => {
            let local = now.with_timezone(&Local);
            (local.date_naive(), local.time())
        }
    }
}

/// Today's date in `zone`.
pub fn today(clock: &dyn Clock, zone: Option<Tz>) -> NaiveDate {
    local_parts(clock, zone).0
}

/// The current time of day in `zone`.
pub fn time_of_day(clock: &dyn Clock, zone: Option<Tz>) -> TimeOfDay {
    TimeOfDay::from(local_parts(clock, zone).1)
}

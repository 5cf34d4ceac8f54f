//! # taqwim-prayer
//!
//! Daily prayer schedules and the countdowns derived from them.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     J["timings JSON"] -->|"parse_timings_response()"| S["PrayerSchedule"]
//!     P["impl PrayerTimeProvider"] --> S
//!     S -->|"next_prayer()"| N["NextPrayer"]
//!     S -->|"sehri_countdown() / iftar_countdown()"| C["Countdown"]
//!     S -->|"progress()"| F["0.0..=1.0"]
//!     T["TimeOfDay"] --> N
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use taqwim_prayer::{ClockTime, PrayerSchedule, Prayer, TimeOfDay, next_prayer};
//!
//! let times = ["04:30", "05:50", "12:00", "15:30", "18:10", "19:30"]
//!     .map(|s| s.parse::<ClockTime>().unwrap());
//! let schedule = PrayerSchedule::new(times);
//! let next = next_prayer(&schedule, TimeOfDay::from_hms(13, 0, 0).unwrap());
//! assert_eq!(next.prayer, Prayer::Asr);
//! assert_eq!(next.remaining.to_string(), "02 : 30 : 00");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `clock_time` | `HH:MM` parsing and 12-hour formatting |
//! | `prayer` | Prayer and auxiliary entry names |
//! | `schedule` | One day's schedule |
//! | `time_of_day` | Fractional time of day |
//! | `countdown` | Next prayer, sehri/iftar countdowns and progress |
//! | `provider` | Provider capability and response decoding |
//! | `error` | Error types |

mod clock_time;
mod countdown;
mod error;
mod prayer;
mod provider;
mod schedule;
mod time_of_day;

pub use clock_time::{ClockTime, Meridiem};
pub use countdown::{
    Countdown, NextPrayer, countdown_to, iftar_countdown, next_prayer, progress, sehri_countdown,
};
pub use error::PrayerError;
pub use prayer::{AuxiliaryTime, Prayer};
pub use provider::{
    DEFAULT_METHOD, PrayerQuery, PrayerTimeProvider, ProviderResponse, StaticProvider,
    parse_timings_response,
};
pub use schedule::PrayerSchedule;
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};

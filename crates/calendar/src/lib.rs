//! # taqwim-calendar
//!
//! Month grids for the Gregorian, Bengali solar and Hijri lunar calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["today (NaiveDate)"] -->|"gregorian_month()"| G["MonthGrid"]
//!     A -->|"find_month_bounds()"| B["MonthBounds"]
//!     C["impl BengaliConverter"] --> B
//!     B -->|"bengali_month()"| G
//!     A -->|"+ day_shift"| H["impl HijriConverter"]
//!     H -->|"hijri_month()"| G
//!     G -->|"localize_digits()"| R["display text"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use taqwim_calendar::{CalendarConfig, CalendarSystem, build_month_grid};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 4, 14).unwrap();
//! let grid = build_month_grid(CalendarSystem::BengaliSolar, today, &CalendarConfig::new()).unwrap();
//! assert_eq!(grid.year(), 1431);
//! assert_eq!(grid.cells().len(), grid.first_weekday_offset() as usize + grid.days_in_month() as usize);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `grid` | Month grid and cells |
//! | `gregorian` | Closed-form Gregorian grid |
//! | `bengali` | Bengali converter, month boundary finder and grid |
//! | `hijri` | Umm al-Qura converter (`icu_calendar`) and grid |
//! | `system` | Calendar system dispatch |
//! | `config` | Grid configuration |
//! | `locale` | Month names, weekday labels and digit localization |
//! | `error` | Error types |

mod bengali;
mod config;
mod error;
mod gregorian;
mod grid;
mod hijri;
mod locale;
mod system;

pub use bengali::{
    BengaliConverter, BengaliDate, BengaliMonth, MAX_MONTH_SEARCH, MonthBounds, RevisedBengali,
    bengali_month, find_month_bounds,
};
pub use config::{CalendarConfig, DEFAULT_HIJRI_DAY_SHIFT, MAX_HIJRI_DAY_SHIFT};
pub use error::CalendarError;
pub use gregorian::{days_in_gregorian_month, gregorian_month};
pub use grid::{Cell, MonthGrid};
pub use hijri::{HijriConverter, HijriDate, UmmAlQuraHijri, hijri_month};
pub use locale::{
    BENGALI_MONTH_NAMES, GREGORIAN_MONTH_NAMES, HIJRI_MONTH_NAMES, Locale, format_number,
    localize_digits, parse_localized_digits,
};
pub use system::{CalendarSystem, build_month_grid};

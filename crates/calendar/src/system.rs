//! Calendar system selection and grid dispatch.

use chrono::NaiveDate;

use crate::bengali::{RevisedBengali, bengali_month};
use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::gregorian::gregorian_month;
use crate::grid::MonthGrid;
use crate::hijri::{UmmAlQuraHijri, hijri_month};
use crate::locale::Locale;

/// The calendar systems a month grid can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSystem {
    /// Proleptic Gregorian calendar.
    Gregorian,
    /// Revised Bengali solar calendar.
    BengaliSolar,
    /// Umm al-Qura Hijri lunar calendar.
    HijriLunar,
}

impl CalendarSystem {
    /// All systems, in display order.
    pub const ALL: [Self; 3] = [Self::BengaliSolar, Self::Gregorian, Self::HijriLunar];

    /// The locale a grid of this system is displayed in by default.
    pub fn default_locale(self) -> Locale {
        match self {
            Self::Gregorian => Locale::En,
            Self::BengaliSolar => Locale::Bn,
            Self::HijriLunar => Locale::Ar,
        }
    }
}

/// Builds the month grid for `today` in `system` with the built-in converters.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDayShift`] for an invalid configuration
/// and propagates any conversion failure.
pub fn build_month_grid(
    system: CalendarSystem,
    today: NaiveDate,
    config: &CalendarConfig,
) -> Result<MonthGrid, CalendarError> {
    config.validate()?;
    match system {
        CalendarSystem::Gregorian => gregorian_month(today),
        CalendarSystem::BengaliSolar => bengali_month(today, &RevisedBengali),
        CalendarSystem::HijriLunar => {
            hijri_month(today, &UmmAlQuraHijri::new(), config.hijri_day_shift())
        }
    }
}

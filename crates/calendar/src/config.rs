//! Configuration for month grid construction.

use crate::error::CalendarError;

/// Default Hijri calibration shift in days.
pub const DEFAULT_HIJRI_DAY_SHIFT: i64 = -1;

/// Largest accepted magnitude for the Hijri calibration shift.
pub const MAX_HIJRI_DAY_SHIFT: i64 = 3;

/// Configuration for [`build_month_grid`](crate::build_month_grid).
///
/// # Example
///
/// ```
/// use taqwim_calendar::CalendarConfig;
///
/// let config = CalendarConfig::new().with_hijri_day_shift(0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct CalendarConfig {
    hijri_day_shift: i64,
}

impl CalendarConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `hijri_day_shift = -1`.
    pub fn new() -> Self {
        Self {
            hijri_day_shift: DEFAULT_HIJRI_DAY_SHIFT,
        }
    }

    /// Sets the number of days added to today before Hijri conversion.
    pub fn with_hijri_day_shift(mut self, shift: i64) -> Self {
        self.hijri_day_shift = shift;
        self
    }

    /// Returns the Hijri calibration shift in days.
    pub fn hijri_day_shift(&self) -> i64 {
        self.hijri_day_shift
    }

    /// Validates this configuration.
    ///
    /// The shift must lie within `-MAX_HIJRI_DAY_SHIFT..=MAX_HIJRI_DAY_SHIFT`.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(-MAX_HIJRI_DAY_SHIFT..=MAX_HIJRI_DAY_SHIFT).contains(&self.hijri_day_shift) {
            return Err(CalendarError::InvalidDayShift {
                shift: self.hijri_day_shift,
                max: MAX_HIJRI_DAY_SHIFT,
            });
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new()
    }
}

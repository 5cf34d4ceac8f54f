//! Wall-clock time of day with minute resolution.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PrayerError;

/// Before or after noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Am => f.write_str("AM"),
            Self::Pm => f.write_str("PM"),
        }
    }
}

/// A time of day as `(hour 0..=23, minute 0..=59)`.
///
/// Parsed from `"HH:MM"`. A trailing parenthesized annotation such as
/// `"04:30 (+06)"` is accepted and ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a clock time.
    ///
    /// # Errors
    ///
    /// Returns [`PrayerError::InvalidClockTime`] if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, PrayerError> {
        if hour > 23 || minute > 59 {
            return Err(PrayerError::InvalidClockTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns minutes since midnight (0..1440).
    pub fn minutes_since_midnight(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Formats as a 12-hour clock reading, e.g. `("4:30", Am)`.
    pub fn to_12_hour(self) -> (String, Meridiem) {
        let meridiem = if self.hour >= 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        };
        let hour = (self.hour + 11) % 12 + 1;
        (format!("{hour}:{:02}", self.minute), meridiem)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = PrayerError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| PrayerError::MalformedClockTime {
            input: input.to_string(),
            reason,
        };

        let mut text = input.trim();
        if let Some(idx) = text.find('(') {
            if !text.ends_with(')') {
                return Err(malformed("unterminated annotation"));
            }
            text = text[..idx].trim_end();
        }

        let (h, m) = text.split_once(':').ok_or_else(|| malformed("expected HH:MM"))?;
        if h.is_empty() || h.len() > 2 || !h.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("hour must be one or two digits"));
        }
        if m.len() != 2 || !m.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("minute must be two digits"));
        }
        let hour: u8 = h.parse().map_err(|_| malformed("hour is not a number"))?;
        let minute: u8 = m.parse().map_err(|_| malformed("minute is not a number"))?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = PrayerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

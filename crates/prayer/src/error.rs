//! Error types for the taqwim-prayer crate.

/// Error type for all fallible operations in the taqwim-prayer crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrayerError {
    /// Returned when a clock-time string is not `HH:MM`.
    #[error("malformed clock time {input:?}: {reason}")]
    MalformedClockTime {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Returned when hour or minute is out of range.
    #[error("invalid clock time: {hour:02}:{minute:02}")]
    InvalidClockTime {
        /// Hour component.
        hour: u8,
        /// Minute component.
        minute: u8,
    },

    /// Returned when a time of day is non-finite or outside a day.
    #[error("invalid time of day: {minutes} minutes (must be in 0..1440)")]
    InvalidTimeOfDay {
        /// The rejected value in minutes since midnight.
        minutes: f64,
    },

    /// Returned when a required prayer is absent from the timings.
    #[error("schedule is missing {name}")]
    MissingPrayer {
        /// Provider key of the missing prayer.
        name: &'static str,
    },

    /// Returned when the prayer-time provider reports a failure.
    #[error("prayer-time provider failed: {reason}")]
    Upstream {
        /// Provider status and message.
        reason: String,
    },

    /// Returned when a provider response cannot be decoded.
    #[error("invalid provider response: {reason}")]
    InvalidResponse {
        /// Decoder message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_malformed_clock_time() {
        let e = PrayerError::MalformedClockTime {
            input: "4.30".to_string(),
            reason: "expected HH:MM",
        };
        assert_eq!(e.to_string(), "malformed clock time \"4.30\": expected HH:MM");
    }

    #[test]
    fn error_invalid_clock_time() {
        let e = PrayerError::InvalidClockTime {
            hour: 24,
            minute: 5,
        };
        assert_eq!(e.to_string(), "invalid clock time: 24:05");
    }

    #[test]
    fn error_missing_prayer() {
        let e = PrayerError::MissingPrayer { name: "Asr" };
        assert_eq!(e.to_string(), "schedule is missing Asr");
    }

    #[test]
    fn error_upstream() {
        let e = PrayerError::Upstream {
            reason: "400 BAD_REQUEST".to_string(),
        };
        assert_eq!(e.to_string(), "prayer-time provider failed: 400 BAD_REQUEST");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<PrayerError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PrayerError>();
    }
}

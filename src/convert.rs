//! Pure conversion functions: TOML config structs and CLI strings -> crate API types.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;
use chrono_tz::Tz;

use taqwim_calendar::{CalendarConfig, CalendarSystem, Locale};
use taqwim_prayer::{PrayerQuery, PrayerSchedule, ProviderResponse, TimeOfDay};

use crate::config::{CalendarToml, CountdownToml, LocationToml};

/// Parses a calendar system name into the corresponding enum variant.
pub fn parse_system(s: &str) -> Result<CalendarSystem> {
    match s.to_lowercase().as_str() {
        "gregorian" => Ok(CalendarSystem::Gregorian),
        "bengali" | "bangla" => Ok(CalendarSystem::BengaliSolar),
        "hijri" | "islamic" => Ok(CalendarSystem::HijriLunar),
        other => bail!("unknown calendar system: {other:?}"),
    }
}

/// Parses a locale code into the corresponding enum variant.
pub fn parse_locale(s: &str) -> Result<Locale> {
    match s.to_lowercase().as_str() {
        "bn" => Ok(Locale::Bn),
        "en" => Ok(Locale::En),
        "ar" => Ok(Locale::Ar),
        other => bail!("unknown locale: {other:?}"),
    }
}

/// Parses an IANA zone name. An empty name selects the local zone (`None`).
pub fn parse_timezone(s: &str) -> Result<Option<Tz>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Tz>()
        .map(Some)
        .map_err(|_| anyhow!("unknown time zone: {trimmed:?}"))
}

/// Parses `HH:MM` or `HH:MM:SS` into a time of day.
pub fn parse_at(s: &str) -> Result<TimeOfDay> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    let (h, m, sec) = match parts.as_slice() {
        [h, m] => (*h, *m, "0"),
        [h, m, sec] => (*h, *m, *sec),
        _ => bail!("expected HH:MM or HH:MM:SS, got {s:?}"),
    };
    let field = |v: &str, name: &str| -> Result<u8> {
        v.parse().map_err(|_| anyhow!("invalid {name} in {s:?}"))
    };
    Ok(TimeOfDay::from_hms(
        field(h, "hour")?,
        field(m, "minute")?,
        field(sec, "second")?,
    )?)
}

/// Builds a [`CalendarConfig`] from the TOML calendar section.
pub fn build_calendar_config(calendar: &CalendarToml) -> Result<CalendarConfig> {
    let cfg = CalendarConfig::new().with_hijri_day_shift(calendar.hijri_day_shift);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`PrayerQuery`] for `date` at the configured location.
pub fn build_query(location: &LocationToml, date: NaiveDate) -> PrayerQuery {
    PrayerQuery::new(location.latitude, location.longitude, date).with_method(location.method)
}

/// Wraps fixed `[schedule]` timings as a provider response in the configured zone.
pub fn build_config_response(
    schedule: &BTreeMap<String, String>,
    location: &LocationToml,
) -> Result<ProviderResponse> {
    Ok(ProviderResponse {
        schedule: PrayerSchedule::from_timings(schedule)?,
        timezone: location.timezone.clone(),
        readable_date: None,
    })
}

/// Returns the ticker interval from the countdown section.
pub fn tick_interval(countdown: &CountdownToml) -> Result<Duration> {
    if countdown.tick_ms == 0 {
        bail!("countdown.tick_ms must be positive");
    }
    Ok(Duration::from_millis(countdown.tick_ms))
}

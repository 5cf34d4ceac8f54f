use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Taqwim configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TaqwimConfig {
    /// Location settings.
    #[serde(default)]
    pub location: LocationToml,

    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Fixed prayer timings keyed by prayer name.
    #[serde(default)]
    pub schedule: Option<BTreeMap<String, String>>,

    /// Countdown settings.
    #[serde(default)]
    pub countdown: CountdownToml,
}

impl TaqwimConfig {
    /// Reads and parses a config file, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// IANA zone name; the local zone is used when empty.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_method")]
    pub method: u8,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
            method: default_method(),
        }
    }
}

fn default_latitude() -> f64 {
    23.8053793
}
fn default_longitude() -> f64 {
    90.3612129
}
fn default_timezone() -> String {
    "Asia/Dhaka".to_string()
}
fn default_method() -> u8 {
    taqwim_prayer::DEFAULT_METHOD
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_system")]
    pub system: String,
    #[serde(default = "default_hijri_day_shift")]
    pub hijri_day_shift: i64,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            system: default_system(),
            hijri_day_shift: default_hijri_day_shift(),
        }
    }
}

fn default_system() -> String {
    "bengali".to_string()
}
fn default_hijri_day_shift() -> i64 {
    taqwim_calendar::DEFAULT_HIJRI_DAY_SHIFT
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountdownToml {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for CountdownToml {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_tick_ms() -> u64 {
    1000
}

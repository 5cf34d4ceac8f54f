//! Resolves today's prayer schedule from a saved response or the config file.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use tracing::{info, warn};

use taqwim_prayer::{PrayerSchedule, PrayerTimeProvider, StaticProvider, parse_timings_response};

use crate::clock::{self, Clock};
use crate::config::TaqwimConfig;
use crate::convert;

/// A schedule and the zone its clock times are expressed in.
#[derive(Debug, Clone)]
pub struct ResolvedSchedule {
    pub schedule: PrayerSchedule,
    /// `None` means the local zone.
    pub zone: Option<Tz>,
}

/// Builds the provider: a saved JSON response wins over `[schedule]`.
fn provider(config: &TaqwimConfig, response: Option<&Path>) -> Result<StaticProvider> {
    if let Some(path) = response {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read timings response: {}", path.display()))?;
        let parsed = parse_timings_response(&json)
            .with_context(|| format!("failed to decode timings response: {}", path.display()))?;
        return Ok(StaticProvider::new(parsed));
    }
    let timings = config.schedule.as_ref().ok_or_else(|| {
        anyhow!("no prayer schedule: set [schedule] in config or use --response")
    })?;
    Ok(StaticProvider::new(convert::build_config_response(
        timings,
        &config.location,
    )?))
}

/// Fetches today's schedule for the configured location.
pub fn resolve(
    config: &TaqwimConfig,
    response: Option<&Path>,
    clock: &dyn Clock,
) -> Result<ResolvedSchedule> {
    let provider = provider(config, response)?;
    let config_zone = convert::parse_timezone(&config.location.timezone)?;
    let query = convert::build_query(&config.location, clock::today(clock, config_zone));
    let fetched = provider
        .fetch(&query)
        .context("failed to fetch prayer times")?;
    let zone = convert::parse_timezone(&fetched.timezone)?;
    info!(
        date = %query.date,
        timezone = %fetched.timezone,
        readable = fetched.readable_date.as_deref().unwrap_or("-"),
        "prayer schedule resolved"
    );
    if !fetched.schedule.is_chronological() {
        warn!("prayer times are not in chronological order");
    }
    Ok(ResolvedSchedule {
        schedule: fetched.schedule,
        zone,
    })
}

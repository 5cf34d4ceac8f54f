//! Prayer-time provider capability and response decoding.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::error::PrayerError;
use crate::schedule::PrayerSchedule;

/// Calculation method used when none is given (University of Islamic
/// Sciences, Karachi).
pub const DEFAULT_METHOD: u8 = 1;

/// Location and date for a schedule request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub method: u8,
}

impl PrayerQuery {
    pub fn new(latitude: f64, longitude: f64, date: NaiveDate) -> Self {
        Self {
            latitude,
            longitude,
            date,
            method: DEFAULT_METHOD,
        }
    }

    pub fn with_method(mut self, method: u8) -> Self {
        self.method = method;
        self
    }

    /// The date as `DD-MM-YYYY`, the form timing services expect in paths.
    pub fn date_path(&self) -> String {
        self.date.format("%d-%m-%Y").to_string()
    }
}

/// A decoded schedule with the metadata that came with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub schedule: PrayerSchedule,
    /// IANA time zone the times are expressed in.
    pub timezone: String,
    pub readable_date: Option<String>,
}

/// A source of daily prayer schedules.
pub trait PrayerTimeProvider {
    /// Fetches the schedule for `query`.
    fn fetch(&self, query: &PrayerQuery) -> Result<ProviderResponse, PrayerError>;
}

/// A provider that always returns the same response.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    response: ProviderResponse,
}

impl StaticProvider {
    pub fn new(response: ProviderResponse) -> Self {
        Self { response }
    }
}

impl PrayerTimeProvider for StaticProvider {
    fn fetch(&self, query: &PrayerQuery) -> Result<ProviderResponse, PrayerError> {
        debug!(date = %query.date, "serving static schedule");
        Ok(self.response.clone())
    }
}

#[derive(Deserialize)]
struct Envelope {
    code: u16,
    #[serde(default)]
    status: String,
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct TimingsData {
    timings: BTreeMap<String, String>,
    #[serde(default)]
    date: Option<DateInfo>,
    meta: Meta,
}

#[derive(Deserialize)]
struct DateInfo {
    readable: String,
}

#[derive(Deserialize)]
struct Meta {
    timezone: String,
}

fn invalid(e: serde_json::Error) -> PrayerError {
    PrayerError::InvalidResponse {
        reason: e.to_string(),
    }
}

/// Decodes a JSON timings response of the form
/// `{"code": 200, "status": "OK", "data": {"timings": {...}, "date": {"readable": ...}, "meta": {"timezone": ...}}}`.
///
/// # Errors
///
/// Returns [`PrayerError::Upstream`] if `code` is not 200,
/// [`PrayerError::InvalidResponse`] if the JSON does not decode, and the
/// schedule errors of [`PrayerSchedule::from_timings`].
pub fn parse_timings_response(json: &str) -> Result<ProviderResponse, PrayerError> {
    let envelope: Envelope = serde_json::from_str(json).map_err(invalid)?;
    if envelope.code != 200 {
        let detail = match &envelope.data {
            serde_json::Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        return Err(PrayerError::Upstream {
            reason: format!("{} {}: {detail}", envelope.code, envelope.status),
        });
    }

    let data: TimingsData = serde_json::from_value(envelope.data).map_err(invalid)?;
    let schedule = PrayerSchedule::from_timings(&data.timings)?;
    debug!(timezone = %data.meta.timezone, "decoded timings response");
    Ok(ProviderResponse {
        schedule,
        timezone: data.meta.timezone,
        readable_date: data.date.map(|d| d.readable),
    })
}

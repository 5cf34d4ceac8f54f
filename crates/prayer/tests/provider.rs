use approx::assert_relative_eq;
use chrono::NaiveDate;
use taqwim_prayer::{
    AuxiliaryTime, ClockTime, Meridiem, Prayer, PrayerError, PrayerQuery, PrayerTimeProvider,
    StaticProvider, TimeOfDay, iftar_countdown, parse_timings_response, progress, sehri_countdown,
};

const RESPONSE: &str = r#"{
  "code": 200,
  "status": "OK",
  "data": {
    "timings": {
      "Fajr": "04:42 (+06)",
      "Sunrise": "05:57 (+06)",
      "Dhuhr": "11:45 (+06)",
      "Asr": "15:04 (+06)",
      "Sunset": "17:33 (+06)",
      "Maghrib": "17:33 (+06)",
      "Isha": "18:47 (+06)",
      "Imsak": "04:32 (+06)",
      "Midnight": "23:45 (+06)",
      "Firstthird": "21:41 (+06)",
      "Lastthird": "01:49 (+06)"
    },
    "date": {
      "readable": "16 Oct 2026",
      "gregorian": {"date": "16-10-2026"},
      "hijri": {"date": "04-05-1448"}
    },
    "meta": {
      "latitude": 23.8053793,
      "longitude": 90.3612129,
      "timezone": "Asia/Dhaka",
      "method": {"id": 1, "name": "University of Islamic Sciences, Karachi"}
    }
  }
}"#;

#[test]
fn annotated_response_decodes() {
    let response = parse_timings_response(RESPONSE).unwrap();
    let s = &response.schedule;
    assert!(s.is_chronological());
    assert_eq!(
        s.auxiliary(AuxiliaryTime::Sunset),
        Some(ClockTime::new(17, 33).unwrap())
    );
    let (text, meridiem) = s.time(Prayer::Maghrib).to_12_hour();
    assert_eq!(text, "5:33");
    assert_eq!(meridiem, Meridiem::Pm);
}

#[test]
fn fasting_day_countdowns() {
    let response = parse_timings_response(RESPONSE).unwrap();
    let s = &response.schedule;
    let now = TimeOfDay::from_hms(16, 33, 0).unwrap();
    assert_eq!(iftar_countdown(s, now).to_string(), "01 : 00 : 00");
    assert_eq!(sehri_countdown(s, now).to_string(), "12 : 09 : 00");
    // Asr 15:04 to Maghrib 17:33 is 149 minutes, 89 elapsed.
    assert_relative_eq!(progress(s, now), 89.0 / 149.0, epsilon = 1e-9);
}

#[test]
fn provider_failure_surfaces() {
    let err = parse_timings_response(r#"{"code": 500, "status": "ERROR", "data": "down"}"#)
        .unwrap_err();
    assert!(matches!(err, PrayerError::Upstream { .. }));
}

#[test]
fn missing_prayer_in_response() {
    let json = RESPONSE.replace("\"Isha\": \"18:47 (+06)\",", "");
    assert_eq!(
        parse_timings_response(&json).unwrap_err(),
        PrayerError::MissingPrayer { name: "Isha" }
    );
}

#[test]
fn provider_trait_object() {
    let provider: Box<dyn PrayerTimeProvider> =
        Box::new(StaticProvider::new(parse_timings_response(RESPONSE).unwrap()));
    let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let query = PrayerQuery::new(23.8053793, 90.3612129, date);
    assert_eq!(provider.fetch(&query).unwrap().timezone, "Asia/Dhaka");
}

//! Next command: report the upcoming prayer and fasting countdowns.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use taqwim_prayer::{iftar_countdown, next_prayer, progress, sehri_countdown};

use crate::cli::NextArgs;
use crate::clock::{self, Clock, SystemClock};
use crate::config::TaqwimConfig;
use crate::convert;
use crate::render;
use crate::source;

/// Run the next command against the system clock and stdout.
pub fn run(args: NextArgs) -> Result<()> {
    let _cmd = info_span!("next").entered();
    let stdout = std::io::stdout();
    execute(&args, &SystemClock, &mut stdout.lock())
}

fn execute(args: &NextArgs, clock: &dyn Clock, out: &mut dyn Write) -> Result<()> {
    let config = TaqwimConfig::load(args.config.as_deref())?;
    let locale = convert::parse_locale(&args.locale)?;
    let resolved = source::resolve(&config, args.response.as_deref(), clock)?;

    let now = match args.at.as_deref() {
        Some(at) => convert::parse_at(at)?,
        None => clock::time_of_day(clock, resolved.zone),
    };
    debug!(minutes = now.minutes(), "counting from");

    let schedule = &resolved.schedule;
    let next = next_prayer(schedule, now);
    let report = render::render_next(
        &next,
        sehri_countdown(schedule, now),
        iftar_countdown(schedule, now),
        progress(schedule, now),
        locale,
    );
    out.write_all(report.as_bytes())
        .context("failed to write report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::FixedClock;

    const CONFIG: &str = r#"
[schedule]
Fajr = "04:30"
Sunrise = "05:50"
Dhuhr = "12:00"
Asr = "15:30"
Maghrib = "18:10"
Isha = "19:30"
"#;

    fn config_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();
        file
    }

    fn run_with(at: Option<&str>, clock: &dyn Clock) -> String {
        let file = config_file();
        let args = NextArgs {
            config: Some(file.path().to_path_buf()),
            response: None,
            at: at.map(str::to_string),
            locale: "en".to_string(),
        };
        let mut buf = Vec::new();
        execute(&args, clock, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn clock() -> FixedClock {
        // 13:00:00 in Dhaka.
        FixedClock(Utc.with_ymd_and_hms(2026, 10, 16, 7, 0, 0).unwrap())
    }

    #[test]
    fn afternoon_from_clock() {
        let text = run_with(None, &clock());
        assert!(text.contains("Next:      Asr at 3:30 PM"));
        assert!(text.contains("Remaining: 02 : 30 : 00"));
        assert!(text.contains("Iftar:     05 : 10 : 00"));
    }

    #[test]
    fn at_flag_overrides_clock() {
        let text = run_with(Some("20:00"), &clock());
        assert!(text.contains("Next:      Fajr at 4:30 AM"));
        assert!(text.contains("Remaining: 08 : 30 : 00"));
        assert!(text.contains("Sehri:     08 : 30 : 00"));
    }

    #[test]
    fn bad_at_fails() {
        let file = config_file();
        let args = NextArgs {
            config: Some(file.path().to_path_buf()),
            response: None,
            at: Some("noon".to_string()),
            locale: "en".to_string(),
        };
        let mut buf = Vec::new();
        assert!(execute(&args, &clock(), &mut buf).is_err());
    }
}

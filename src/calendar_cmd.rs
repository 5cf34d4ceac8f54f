//! Calendar command: print the month grid containing today.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use taqwim_calendar::build_month_grid;

use crate::cli::CalendarArgs;
use crate::clock::{self, Clock, SystemClock};
use crate::config::TaqwimConfig;
use crate::convert;
use crate::render;

/// Run the calendar command against the system clock and stdout.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let stdout = std::io::stdout();
    execute(&args, &SystemClock, &mut stdout.lock())
}

fn execute(args: &CalendarArgs, clock: &dyn Clock, out: &mut dyn Write) -> Result<()> {
    let config = TaqwimConfig::load(args.config.as_deref())?;

    // CLI flags override the config file.
    let system_name = args.system.as_deref().unwrap_or(&config.calendar.system);
    let system = convert::parse_system(system_name)?;
    let calendar_cfg = convert::build_calendar_config(&config.calendar)?;
    let locale = match args.locale.as_deref() {
        Some(code) => convert::parse_locale(code)?,
        None => system.default_locale(),
    };

    let today = match args.date {
        Some(date) => date,
        None => clock::today(clock, convert::parse_timezone(&config.location.timezone)?),
    };
    info!(?system, %today, "building month grid");

    let grid = build_month_grid(system, today, &calendar_cfg)
        .with_context(|| format!("failed to build {system:?} month for {today}"))?;
    out.write_all(render::render_grid(&grid, locale).as_bytes())
        .context("failed to write calendar")?;
    Ok(())
}

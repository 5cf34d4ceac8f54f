//! Watch command: print the next-prayer countdown once per tick.

use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono_tz::Tz;
use tracing::{info, info_span, warn};

use taqwim_calendar::Locale;
use taqwim_prayer::next_prayer;

use crate::cli::WatchArgs;
use crate::clock::{self, Clock, SystemClock};
use crate::config::TaqwimConfig;
use crate::convert;
use crate::render;
use crate::source::{self, ResolvedSchedule};
use crate::ticker::Ticker;

/// Run the watch command against the system clock and stdout.
pub fn run(args: WatchArgs) -> Result<()> {
    let _cmd = info_span!("watch").entered();
    if args.ticks == Some(0) {
        bail!("--ticks must be positive");
    }
    let config = TaqwimConfig::load(args.config.as_deref())?;
    let locale = convert::parse_locale(&args.locale)?;
    let interval = convert::tick_interval(&config.countdown)?;
    let response = args.response.clone();
    let resolved = source::resolve(&config, response.as_deref(), &SystemClock)?;

    info!(?interval, ticks = ?args.ticks, "starting countdown");
    watch(
        resolved,
        move |at: &dyn Clock| source::resolve(&config, response.as_deref(), at),
        interval,
        args.ticks,
        locale,
        SystemClock,
        |line| println!("{line}"),
    )
}

/// Recomputes the next prayer from scratch on every tick and emits one line.
///
/// When the date in the schedule's zone changes, `refresh` resolves a new
/// schedule which replaces the current one whole. A failed refresh keeps the
/// previous schedule and is retried on the next tick.
///
/// Runs until `ticks` lines were emitted, or forever when `ticks` is `None`.
fn watch<C, R, E>(
    resolved: ResolvedSchedule,
    mut refresh: R,
    interval: Duration,
    ticks: Option<u64>,
    locale: Locale,
    time_source: C,
    mut emit: E,
) -> Result<()>
where
    C: Clock + Send + 'static,
    R: FnMut(&dyn Clock) -> Result<ResolvedSchedule> + Send + 'static,
    E: FnMut(String) + Send + 'static,
{
    let mut current = resolved;
    let mut resolved_on = clock::today(&time_source, current.zone);
    let ticker = Ticker::start(interval, move |tick| {
        let today = clock::today(&time_source, current.zone);
        if today != resolved_on {
            match refresh(&time_source) {
                Ok(next) => {
                    info!(from = %resolved_on, to = %today, "date changed, schedule refreshed");
                    current = next;
                    resolved_on = clock::today(&time_source, current.zone);
                }
                Err(err) => warn!(error = %format!("{err:#}"), "schedule refresh failed"),
            }
        }
        let now = clock::time_of_day(&time_source, current.zone);
        emit(render::render_tick(&next_prayer(&current.schedule, now), locale));
        if ticks.is_some_and(|limit| tick >= limit) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .context("failed to start ticker thread")?;
    ticker.join();
    Ok(())
}

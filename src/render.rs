//! Plain-text rendering of month grids and countdowns.

use std::fmt::Write;

use taqwim_calendar::{Cell, Locale, MonthGrid, format_number, localize_digits};
use taqwim_prayer::{Countdown, NextPrayer, Prayer};

const COLUMN_WIDTH: usize = 5;

/// Prayer name in `locale`.
pub fn prayer_name(prayer: Prayer, locale: Locale) -> &'static str {
    match locale {
        Locale::En => prayer.key(),
        Locale::Bn => prayer.bengali_name(),
        Locale::Ar => prayer.arabic_name(),
    }
}

/// Renders a month grid as a title line, a weekday header and one row per week.
///
/// Today is marked with a trailing `*`.
pub fn render_grid(grid: &MonthGrid, locale: Locale) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        grid.month_name(),
        format_number(grid.year(), locale)
    );

    let header: Vec<String> = locale
        .weekday_labels()
        .iter()
        .map(|label| format!("{label:>COLUMN_WIDTH$}"))
        .collect();
    let _ = writeln!(out, "{}", header.join("").trim_end());

    for week in grid.weeks() {
        let row: String = week.iter().map(|cell| render_cell(*cell, locale)).collect();
        let _ = writeln!(out, "{}", row.trim_end());
    }
    out
}

fn render_cell(cell: Cell, locale: Locale) -> String {
    match cell {
        Cell::Empty => " ".repeat(COLUMN_WIDTH),
        Cell::Day { day, is_today } => {
            let mark = if is_today { '*' } else { ' ' };
            let digits = format_number(day, locale);
            format!("{digits:>width$}{mark}", width = COLUMN_WIDTH - 1)
        }
    }
}

fn countdown_text(countdown: Countdown, locale: Locale) -> String {
    localize_digits(&countdown.to_string(), locale)
}

/// Renders the full `next` report.
pub fn render_next(
    next: &NextPrayer,
    sehri: Countdown,
    iftar: Countdown,
    progress: f64,
    locale: Locale,
) -> String {
    let (clock, meridiem) = next.time.to_12_hour();
    let percent = (progress * 100.0).round() as u32;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Next:      {} at {} {meridiem}",
        prayer_name(next.prayer, locale),
        localize_digits(&clock, locale)
    );
    let _ = writeln!(out, "Remaining: {}", countdown_text(next.remaining, locale));
    let _ = writeln!(out, "Sehri:     {}", countdown_text(sehri, locale));
    let _ = writeln!(out, "Iftar:     {}", countdown_text(iftar, locale));
    let _ = writeln!(out, "Progress:  {}%", format_number(percent, locale));
    out
}

/// Renders one `watch` line.
pub fn render_tick(next: &NextPrayer, locale: Locale) -> String {
    format!(
        "{} {}",
        prayer_name(next.prayer, locale),
        countdown_text(next.remaining, locale)
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taqwim_calendar::gregorian_month;
    use taqwim_prayer::ClockTime;

    use super::*;

    #[test]
    fn grid_layout() {
        // April 2024 starts on a Monday.
        let grid = gregorian_month(NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()).unwrap();
        let text = render_grid(&grid, Locale::En);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "April 2024");
        assert_eq!(lines[1], "  Sun  Mon  Tue  Wed  Thu  Fri  Sat");
        assert_eq!(lines[2], "        1    2    3    4    5    6");
        assert!(lines[3].contains("  10*"));
        assert_eq!(lines.len(), 2 + grid.weeks().count());
    }

    #[test]
    fn grid_localized_digits() {
        let grid = gregorian_month(NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()).unwrap();
        let text = render_grid(&grid, Locale::Bn);
        assert!(text.starts_with("April ২০২৪"));
        assert!(text.contains("১০*"));
    }

    #[test]
    fn next_report() {
        let next = NextPrayer {
            prayer: Prayer::Asr,
            time: ClockTime::new(15, 30).unwrap(),
            remaining: Countdown::from_seconds(9000),
        };
        let text = render_next(
            &next,
            Countdown::from_seconds(55_800),
            Countdown::from_seconds(18_600),
            0.5,
            Locale::En,
        );
        assert!(text.contains("Next:      Asr at 3:30 PM"));
        assert!(text.contains("Remaining: 02 : 30 : 00"));
        assert!(text.contains("Sehri:     15 : 30 : 00"));
        assert!(text.contains("Iftar:     05 : 10 : 00"));
        assert!(text.contains("Progress:  50%"));
    }

    #[test]
    fn tick_line() {
        let next = NextPrayer {
            prayer: Prayer::Fajr,
            time: ClockTime::new(4, 30).unwrap(),
            remaining: Countdown::from_seconds(3661),
        };
        assert_eq!(render_tick(&next, Locale::En), "Fajr 01 : 01 : 01");
        assert_eq!(render_tick(&next, Locale::Bn), "ফজর ০১ : ০১ : ০১");
    }
}

//! Month grid: the rendered unit shared by every calendar system.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::error::CalendarError;

/// A single cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Padding before day 1.
    Empty,
    /// A day of the month.
    Day {
        /// Day-of-month, starting at 1.
        day: u8,
        /// Whether this cell is today.
        is_today: bool,
    },
}

impl Cell {
    /// Returns the day number, or `None` for padding.
    pub fn day(self) -> Option<u8> {
        match self {
            Self::Empty => None,
            Self::Day { day, .. } => Some(day),
        }
    }

    /// Returns `true` only for the cell marked as today.
    pub fn is_today(self) -> bool {
        matches!(self, Self::Day { is_today: true, .. })
    }
}

/// The cells of one month, laid out in Sunday-first week rows.
///
/// `cells.len() == first_weekday_offset + days_in_month` always holds, and
/// exactly one cell is marked as today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month_name: String,
    month: u8,
    year: i32,
    first_weekday_offset: u8,
    days_in_month: u8,
    cells: Vec<Cell>,
}

impl MonthGrid {
    /// Lays out a month starting on weekday `first_weekday_offset`
    /// (0 = Sunday) and marks `today_day` as today.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// [`CalendarError::InvalidDay`] if the offset is not a weekday index or
    /// the month is empty, and [`CalendarError::TodayOutsideMonth`] if
    /// `today_day` does not fall in `1..=days_in_month`.
    pub fn new(
        month_name: impl Into<String>,
        month: u8,
        year: i32,
        first_weekday_offset: u8,
        days_in_month: u8,
        today_day: u8,
    ) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if first_weekday_offset > 6 || days_in_month == 0 {
            return Err(CalendarError::InvalidDay {
                day: days_in_month,
                month,
                max_day: 32,
            });
        }
        if !(1..=days_in_month).contains(&today_day) {
            return Err(CalendarError::TodayOutsideMonth {
                day: today_day,
                days_in_month,
            });
        }

        let mut cells = Vec::with_capacity(first_weekday_offset as usize + days_in_month as usize);
        cells.extend(std::iter::repeat_n(Cell::Empty, first_weekday_offset as usize));
        cells.extend((1..=days_in_month).map(|day| Cell::Day {
            day,
            is_today: day == today_day,
        }));

        Ok(Self {
            month_name: month_name.into(),
            month,
            year,
            first_weekday_offset,
            days_in_month,
            cells,
        })
    }

    /// Returns the localized month name.
    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    /// Returns the month number (1..=12) within its calendar year.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the year in the grid's calendar system.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the number of padding cells before day 1.
    pub fn first_weekday_offset(&self) -> u8 {
        self.first_weekday_offset
    }

    /// Returns the number of days in the month.
    pub fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    /// Returns all cells, padding first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the index of today's cell.
    pub fn today_index(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.is_today())
    }

    /// Iterates over week rows of up to seven cells.
    pub fn weeks(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(7)
    }
}

/// Sunday-based weekday index (0 = Sunday) of `date`.
pub(crate) fn weekday_offset(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Shifts `date` by a signed number of days.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(CalendarError::DateOutOfRange { date, days })
}

//! Type definitions and constants for calendar formatting.

use chrono::{Datelike, Month, NaiveDate, Weekday};

use crate::error::CalError;

/// A validated month to render: which month and year, and which weekday
/// occupies the leftmost column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpec {
    /// Day 1 of the month.
    first: NaiveDate,
    month: Month,
    /// Weekday shown in the first column.
    week_start: Weekday,
}

impl MonthSpec {
    /// Build a spec from numeric fields.
    ///
    /// `first_day_of_week` uses ISO numbering (1 = Monday .. 7 = Sunday).
    pub fn new(month: u32, year: i32, first_day_of_week: u32) -> Result<Self, CalError> {
        let month_enum = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(|| {
                CalError::invalid_month_spec(format!("month {} (must be 1-12)", month))
            })?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalError::invalid_month_spec(format!(
                "year {} (must be {}-{})",
                year, MIN_YEAR, MAX_YEAR
            )));
        }
        let week_start = weekday_from_iso(first_day_of_week).ok_or_else(|| {
            CalError::invalid_month_spec(format!(
                "first day of week {} (must be 1-7)",
                first_day_of_week
            ))
        })?;
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            CalError::invalid_month_spec(format!("no such date {:04}-{:02}-01", year, month))
        })?;

        Ok(MonthSpec {
            first,
            month: month_enum,
            week_start,
        })
    }

    /// Spec for the month containing `date`, Monday first.
    pub fn from_date(date: NaiveDate) -> Result<Self, CalError> {
        Self::new(date.month(), date.year(), DEFAULT_FIRST_DAY_OF_WEEK)
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn month_enum(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// ISO number (1 = Monday .. 7 = Sunday) of the first grid column.
    pub fn first_day_of_week(&self) -> u32 {
        self.week_start.number_from_monday()
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// The first day of the month.
    pub fn first_date(&self) -> NaiveDate {
        self.first
    }
}

/// Map an ISO weekday number to `Weekday`.
pub fn weekday_from_iso(n: u32) -> Option<Weekday> {
    match n {
        1..=7 => Weekday::try_from((n - 1) as u8).ok(),
        _ => None,
    }
}

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;
pub const DAYS_PER_WEEK: u32 = 7;

/// Monday.
pub const DEFAULT_FIRST_DAY_OF_WEEK: u32 = 1;

// Layout widths
pub const TITLE_YEAR_WIDTH: usize = 12;
pub const DAY_CELL_WIDTH: usize = 4;
pub const ROW_START_CELL_WIDTH: usize = 3;

/// Environment variable that pins "today" to a fixed `YYYY-MM-DD` date.
pub const TEST_TIME_ENV: &str = "MONTHCAL_TEST_TIME";

//! Calendar calculations: leap years, month lengths and the grid column of
//! the first day.

use chrono::Datelike;
use tracing::trace;

use crate::types::{DAYS_PER_WEEK, MonthSpec};

/// Gregorian leap year: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

impl MonthSpec {
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Column (1..=7) of day 1 when the first column is `first_day_of_week`.
    pub fn first_weekday_of_month(&self) -> u32 {
        let weekday_iso = self.first_date().weekday().number_from_monday();
        let column =
            (weekday_iso + (DAYS_PER_WEEK + 1 - self.first_day_of_week()) - 1) % DAYS_PER_WEEK + 1;
        trace!(
            weekday_iso,
            first_day_of_week = self.first_day_of_week(),
            column,
            "first weekday of month"
        );
        column
    }
}

//! Calendar formatting: title, weekday header and the date grid.

use std::io::Write;

use chrono::Weekday;
use tracing::debug;

use crate::error::CalError;
use crate::types::{
    DAY_CELL_WIDTH, DAYS_PER_WEEK, MonthSpec, ROW_START_CELL_WIDTH, TITLE_YEAR_WIDTH,
};

/// Get weekday order based on week start day.
pub fn weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut day = week_start;
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}

/// Year right-aligned in a 12 column field, followed by the month name.
pub fn format_title(spec: &MonthSpec) -> String {
    format!(
        "{:>width$}, {}",
        spec.year(),
        spec.month_enum().name(),
        width = TITLE_YEAR_WIDTH
    )
}

/// Abbreviated weekday names starting at the spec's first day of week.
pub fn format_weekday_header(spec: &MonthSpec) -> String {
    weekday_order(spec.week_start())
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Field width for day 1 so it lands under its weekday column.
pub fn first_day_offset(column: u32) -> usize {
    (column * 3 + column - 1) as usize
}

/// Day numbers laid out in rows of seven.
///
/// Day 1 is padded to its column. Other days take four columns, except the
/// first day on a new row which takes three: the header's gap between
/// weekday names is one column wide and a row has no leading gap.
pub fn format_date_grid(spec: &MonthSpec) -> String {
    let first_column = spec.first_weekday_of_month();
    let last_day = spec.days_in_month();
    debug!(first_column, last_day, "laying out date grid");

    let mut grid = String::new();
    let mut column = first_column;
    for day in 1..=last_day {
        let width = if day == 1 {
            first_day_offset(first_column)
        } else if column == 1 {
            ROW_START_CELL_WIDTH
        } else {
            DAY_CELL_WIDTH
        };
        grid.push_str(&format!("{:>width$}", day, width = width));

        if column == DAYS_PER_WEEK {
            grid.push('\n');
            column = 1;
        } else {
            column += 1;
        }
    }
    grid
}

/// Title line, weekday header line and date grid.
pub fn render_month(spec: &MonthSpec) -> String {
    format!(
        "{}\n{}\n{}",
        format_title(spec),
        format_weekday_header(spec),
        format_date_grid(spec)
    )
}

/// Write the rendered month exactly as `render_month` lays it out.
pub fn write_month<W: Write>(out: &mut W, spec: &MonthSpec) -> Result<(), CalError> {
    out.write_all(render_month(spec).as_bytes())?;
    out.flush()?;
    Ok(())
}

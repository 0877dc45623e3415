//! Command-line argument parsing using clap.
//!
//! Positional arguments follow `[month year [first-day-of-week]]`.

use chrono::NaiveDate;
use clap::{Parser, ValueHint};
use tracing::debug;

use crate::error::CalError;
use crate::types::{DEFAULT_FIRST_DAY_OF_WEEK, MonthSpec, TEST_TIME_ENV};

#[derive(Parser, Debug)]
#[command(name = "monthcal")]
#[command(about = "Displays a calendar for a single month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month (1-12), year (0001-9999) and optional first day of week
    /// (1=Monday .. 7=Sunday).
    ///
    /// Values starting with a hyphen that are not known flags are kept here
    /// and rejected by the format checks.
    #[arg(
        value_name = "month year [first-day-of-week]",
        value_hint = ValueHint::Other,
        allow_hyphen_values = true
    )]
    pub values: Vec<String>,

    /// Enable debug logging on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any arguments, display the current month.

Examples:
  monthcal           Display current month
  monthcal 2 2026    Display February 2026, weeks starting on Monday
  monthcal 2 2026 7  Display February 2026, weeks starting on Sunday";

const MONTH_FORMAT_MESSAGE: &str = "Incorrect month format. Can be used only numbers 1-12.";
const YEAR_FORMAT_MESSAGE: &str = "Incorrect year format. Can be used only numbers 0001-9999";
const DAY_OF_WEEK_FORMAT_MESSAGE: &str =
    "Incorrect day of week format. Can be used only numbers 1-7";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Resolve the month to display, using today's date when no positional
    /// arguments were given.
    pub fn month_spec(&self) -> Result<MonthSpec, CalError> {
        resolve_month_spec(self.values.as_slice(), get_today_date())
    }
}

/// Get today's date, respecting MONTHCAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var(TEST_TIME_ENV) {
        match NaiveDate::parse_from_str(&test_time, "%Y-%m-%d") {
            Ok(date) => return date,
            Err(e) => debug!(%test_time, error = %e, "ignoring unparsable {}", TEST_TIME_ENV),
        }
    }
    chrono::Local::now().date_naive()
}

/// Month: `1`-`9`, `01`-`09` or `10`-`12`.
pub fn is_valid_month(s: &str) -> bool {
    matches!(
        s.as_bytes(),
        [b'1'..=b'9'] | [b'0', b'1'..=b'9'] | [b'1', b'0'..=b'2']
    )
}

/// Year: exactly four digits, the last one non-zero.
pub fn is_valid_year(s: &str) -> bool {
    matches!(
        s.as_bytes(),
        [b'0'..=b'9', b'0'..=b'9', b'0'..=b'9', b'1'..=b'9']
    )
}

/// First day of week: a single digit `1`-`7`.
pub fn is_valid_day_of_week(s: &str) -> bool {
    matches!(s.as_bytes(), [b'1'..=b'7'])
}

/// Resolve positional arguments into a month spec.
///
/// Argument patterns:
/// - 0 args: the month containing `today`, Monday first
/// - 2 args: month year
/// - 3 args: month year first-day-of-week
pub fn resolve_month_spec<S: AsRef<str>>(
    values: &[S],
    today: NaiveDate,
) -> Result<MonthSpec, CalError> {
    let spec = match values {
        [] => MonthSpec::from_date(today)?,
        [_] => {
            return Err(CalError::argument_count(
                "Only one argument supplied: must supply two or three arguments",
            ));
        }
        [month, year] => {
            check_fields(month.as_ref(), year.as_ref(), None)?;
            MonthSpec::new(
                parse_field(month.as_ref())?,
                parse_field(year.as_ref())?,
                DEFAULT_FIRST_DAY_OF_WEEK,
            )?
        }
        [month, year, first_day] => {
            check_fields(month.as_ref(), year.as_ref(), Some(first_day.as_ref()))?;
            MonthSpec::new(
                parse_field(month.as_ref())?,
                parse_field(year.as_ref())?,
                parse_field(first_day.as_ref())?,
            )?
        }
        _ => {
            return Err(CalError::argument_count(
                "More than three arguments supplied: must supply two or three arguments",
            ));
        }
    };

    debug!(
        month = spec.month(),
        year = spec.year(),
        first_day_of_week = spec.first_day_of_week(),
        "resolved month spec"
    );
    Ok(spec)
}

/// Check every field independently and report all failures together.
fn check_fields(month: &str, year: &str, first_day: Option<&str>) -> Result<(), CalError> {
    let mut messages = Vec::new();
    if !is_valid_month(month) {
        messages.push(MONTH_FORMAT_MESSAGE.to_string());
    }
    if !is_valid_year(year) {
        messages.push(YEAR_FORMAT_MESSAGE.to_string());
    }
    if let Some(day) = first_day
        && !is_valid_day_of_week(day)
    {
        messages.push(DAY_OF_WEEK_FORMAT_MESSAGE.to_string());
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(CalError::Format { messages })
    }
}

/// Parse a field that already passed its format check.
fn parse_field<T: std::str::FromStr>(s: &str) -> Result<T, CalError> {
    s.parse()
        .map_err(|_| CalError::invalid_month_spec(format!("unparsable field: {}", s)))
}

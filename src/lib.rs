//! Single month calendar display utility.
//!
//! Features:
//! - Current month by default, or any month of years 0001-9999
//! - Configurable first day of week (1=Monday .. 7=Sunday)
//! - Plain text output: title, weekday header and a grid of day numbers

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod types;

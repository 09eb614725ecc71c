mod catalog;
mod consts;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use catalog::{CatalogError, Season, SeasonCatalog};
pub use consts::*;
pub use range::{RangeError, SeasonRange};
pub use types::{Day, Month, MonthDay};

use crate::prelude::*;
use chrono::{Datelike, Local};

/// Number of months in a year, the upper bound for calendar month numbers
const MONTHS_PER_YEAR: u8 = MAX_MONTH_INDEX + 1;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid month/day format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", MAX_MONTH_INDEX)]
    InvalidMonthIndex(u8),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MONTHS_PER_YEAR)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    InvalidDay(u8),
    #[display(fmt = "Empty month/day string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Returns the built-in season active on today's local date, if any.
pub fn current_season() -> Option<&'static Season> {
    season_on(&Local::now())
}

/// Returns the built-in season active on `date`, if any.
/// The first season in catalog order wins.
///
/// A zoned `date` is read in its own timezone; convert with
/// `.with_timezone(&Local)` first to match on the local calendar day.
pub fn season_on<D: Datelike>(date: &D) -> Option<&'static Season> {
    SeasonCatalog::builtin().season_on(date)
}

/// Returns the spinner frames for today's local date.
pub fn seasonal_frames() -> &'static [String] {
    seasonal_frames_on(&Local::now())
}

/// Returns the spinner frames for `date`: the active season's frames, or
/// the default bouncing ball. Never empty.
///
/// A zoned `date` is read in its own timezone; convert with
/// `.with_timezone(&Local)` first to match on the local calendar day.
pub fn seasonal_frames_on<D: Datelike>(date: &D) -> &'static [String] {
    SeasonCatalog::builtin().frames_on(date)
}

/// Returns the name of the season active today, or `"Default"`.
pub fn season_name() -> &'static str {
    season_name_on(&Local::now())
}

/// Returns the name of the season active on `date`, or `"Default"`.
///
/// A zoned `date` is read in its own timezone; convert with
/// `.with_timezone(&Local)` first to match on the local calendar day.
pub fn season_name_on<D: Datelike>(date: &D) -> &'static str {
    SeasonCatalog::builtin().name_on(date)
}

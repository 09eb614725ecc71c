//! Shared constructors for unit tests.

use chrono::{Datelike, NaiveDate};

use crate::{MonthDay, Season, SeasonRange};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

/// Every calendar day of `year`, in order.
pub fn every_day_of(year: i32) -> impl Iterator<Item = NaiveDate> {
    date(year, 1, 1)
        .iter_days()
        .take_while(move |d| d.year() == year)
}

/// Point from a zero-based month index and a day
pub fn md(month_index: u8, day: u8) -> MonthDay {
    MonthDay::new(month_index, day).expect("invalid test month/day")
}

pub fn range(start: (u8, u8), end: (u8, u8)) -> SeasonRange {
    SeasonRange::new(md(start.0, start.1), md(end.0, end.1)).expect("invalid test range")
}

pub fn season(name: &str, start: (u8, u8), end: (u8, u8), frames: &[&str]) -> Season {
    Season::new(name, range(start, end), frames.iter().copied()).expect("invalid test season")
}

use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{
    DECEMBER, JANUARY, MAX_DAY, MIN_DAY, MonthDay, ParseError, RANGE_SEPARATOR, prelude::*,
};

const YEAR_START: MonthDay = MonthDay::from_raw(JANUARY, MIN_DAY);
const YEAR_END: MonthDay = MonthDay::from_raw(DECEMBER, MAX_DAY);

/// An inclusive range of month/day points, repeated every year.
///
/// A range whose start month is after its end month wraps across the year
/// boundary (e.g. `12-20/01-05`). Otherwise the range is a contiguous span
/// within one year and start must not be after end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct SeasonRange {
    start: MonthDay,
    end:   MonthDay,
}

/// Error type for season range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start day is after end day within the same month.
    #[error("Invalid season range: start ({start}) is after end ({end}) in the same month")]
    InvalidRange { start: MonthDay, end: MonthDay },

    /// Error parsing a month/day point.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl SeasonRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if both ends share a month and the
    /// start day is after the end day. Such a range could never match.
    pub fn new(start: MonthDay, end: MonthDay) -> Result<Self, RangeError> {
        if start.month() == end.month() && start.day() > end.day() {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from table data known to be well formed.
    pub(crate) const fn from_raw(start: MonthDay, end: MonthDay) -> Self {
        Self { start, end }
    }

    /// Returns the first point of the range
    pub const fn start(&self) -> MonthDay {
        self.start
    }

    /// Returns the last point of the range (inclusive)
    pub const fn end(&self) -> MonthDay {
        self.end
    }

    /// True if the range runs from late in one year into the next
    pub fn wraps_year(&self) -> bool {
        self.start.month() > self.end.month()
    }

    /// Checks if the range contains a given point.
    pub fn contains(&self, point: &MonthDay) -> bool {
        let after_start = point.is_on_or_after(&self.start);
        let before_end = point.is_on_or_before(&self.end);

        if self.wraps_year() {
            // tail of one year or head of the next
            after_start || before_end
        } else {
            after_start && before_end
        }
    }

    /// Checks if the range contains the month and day of `date`.
    pub fn contains_date<D: Datelike>(&self, date: &D) -> bool {
        self.contains(&MonthDay::of(date))
    }

    /// Checks if this range shares any month/day point with another range.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.segments().iter().any(|(a_start, a_end)| {
            other
                .segments()
                .iter()
                .any(|(b_start, b_end)| a_start <= b_end && b_start <= a_end)
        })
    }

    /// Splits the range into contiguous same-year spans.
    fn segments(&self) -> Vec<(MonthDay, MonthDay)> {
        if self.wraps_year() {
            vec![(self.start, YEAR_END), (YEAR_START, self.end)]
        } else {
            vec![(self.start, self.end)]
        }
    }
}

impl FromStr for SeasonRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match trimmed.split_once(RANGE_SEPARATOR) {
            None => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            Some(_) if separator_count > 1 => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
            Some((start_str, end_str)) => {
                let start = start_str.trim().parse::<MonthDay>()?;
                let end = end_str.trim().parse::<MonthDay>()?;

                Self::new(start, end)
            },
        }
    }
}

impl Serialize for SeasonRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SeasonRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

use crate::ParseError;
use crate::consts::{DATE_SEPARATOR, MAX_DAY, MAX_MONTH_INDEX, MIN_DAY};
use crate::prelude::*;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A zero-based month index guaranteed to be in the range `0..=MAX_MONTH_INDEX` (0..=11).
/// January is 0, matching `chrono::Datelike::month0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Creates a new Month from a zero-based index
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthIndex` if the index is > `MAX_MONTH_INDEX`.
    pub const fn new(index: u8) -> Result<Self, ParseError> {
        if index > MAX_MONTH_INDEX {
            return Err(ParseError::InvalidMonthIndex(index));
        }
        Ok(Self(index))
    }

    /// Creates a new Month from its calendar number (1 = January)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the number is 0 or > 12.
    pub fn from_number(number: u8) -> Result<Self, ParseError> {
        number
            .checked_sub(1)
            .filter(|index| *index <= MAX_MONTH_INDEX)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(number))
    }

    /// Returns the zero-based month index
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the calendar month number (1..=12)
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.number())
    }
}

/// A day of month in the range `MIN_DAY..=MAX_DAY` (1..=31).
/// Not checked against the length of any particular month: a day that a
/// month never reaches just never matches a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's within `MIN_DAY..=MAX_DAY`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay(value))?;
        if value > MAX_DAY {
            return Err(ParseError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A point in the calendar year, independent of any particular year.
/// Ordered lexicographically by (month, day). Text form is `MM-DD` with a
/// 1-based month, so `03-15` is March 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{month}-{day}")]
pub struct MonthDay {
    month: Month,
    day:   Day,
}

impl MonthDay {
    /// Creates a new point from a zero-based month index and a day
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthIndex` or `ParseError::InvalidDay`.
    pub fn new(month_index: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            month: Month::new(month_index)?,
            day:   Day::new(day)?,
        })
    }

    /// Builds a point from table data known to be in range.
    pub(crate) const fn from_raw(month_index: u8, day: u8) -> Self {
        debug_assert!(month_index <= MAX_MONTH_INDEX);
        debug_assert!(day >= MIN_DAY);
        debug_assert!(day <= MAX_DAY);
        let day = match NonZeroU8::new(day) {
            Some(day) => day,
            None => NonZeroU8::MIN,
        };
        Self {
            month: Month(month_index),
            day:   Day(day),
        }
    }

    /// Takes the month and day of `date` in whatever calendar and timezone
    /// the value already carries.
    #[allow(clippy::cast_possible_truncation)]
    pub fn of<D: Datelike>(date: &D) -> Self {
        // chrono keeps month0 in 0..=11 and day in 1..=31
        Self::from_raw(date.month0() as u8, date.day() as u8)
    }

    /// Returns the month of this point
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of month of this point
    pub const fn day(&self) -> Day {
        self.day
    }

    /// True if this point is on or after `start`
    pub fn is_on_or_after(&self, start: &Self) -> bool {
        self.month > start.month || (self.month == start.month && self.day >= start.day)
    }

    /// True if this point is on or before `end`
    pub fn is_on_or_before(&self, end: &Self) -> bool {
        self.month < end.month || (self.month == end.month && self.day <= end.day)
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl<D: Datelike> From<&D> for MonthDay {
    fn from(date: &D) -> Self {
        Self::of(date)
    }
}

impl FromStr for MonthDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators: {trimmed}",
                parts.len() - 1
            )));
        };

        let month = Month::from_number(Self::parse_u8(month)?)?;
        let day = Day::new(Self::parse_u8(day)?)?;
        Ok(Self { month, day })
    }
}

impl Serialize for MonthDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, md};

    #[test]
    fn test_month_new_valid() {
        for m in 0..=11 {
            assert!(Month::new(m).is_ok(), "Month index {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid_too_large() {
        let result = Month::new(12);
        assert!(matches!(result, Err(ParseError::InvalidMonthIndex(12))));

        let result = Month::new(255);
        assert!(matches!(result, Err(ParseError::InvalidMonthIndex(255))));
    }

    #[test]
    fn test_month_from_number() {
        let march = Month::from_number(3).expect("March is a valid month number");
        assert_eq!(march.index(), 2);
        assert_eq!(march.number(), 3);

        assert!(matches!(Month::from_number(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::from_number(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_display_uses_calendar_number() {
        let month = Month::new(0).expect("January index is valid");
        assert_eq!(month.to_string(), "01");

        let month = Month::new(11).expect("December index is valid");
        assert_eq!(month.to_string(), "12");
    }

    #[test]
    fn test_month_serde_uses_index() {
        let month = Month::new(9).expect("October index is valid");
        let json = serde_json::to_string(&month).expect("failed to serialize month");
        assert_eq!(json, "9");

        let parsed: Month = serde_json::from_str(&json).expect("failed to deserialize month");
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("12");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        assert!(Day::new(1).is_ok());
        assert!(Day::new(31).is_ok());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(Day::new(0), Err(ParseError::InvalidDay(0))));
        assert!(matches!(Day::new(32), Err(ParseError::InvalidDay(32))));
    }

    #[test]
    fn test_day_not_checked_against_month_length() {
        // February 31 never occurs, but it is a representable bound
        assert!(MonthDay::new(1, 31).is_ok());
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().expect("15 is a valid day");
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_day_of_chrono_date() {
        let point = MonthDay::of(&date(2023, 4, 1));
        assert_eq!(point.month().index(), 3);
        assert_eq!(point.day().get(), 1);

        let point = MonthDay::of(&date(2023, 12, 31));
        assert_eq!(point, md(11, 31));
    }

    #[test]
    fn test_month_day_of_datetime() {
        let datetime = date(2024, 10, 15)
            .and_hms_opt(23, 59, 59)
            .expect("valid time of day");
        assert_eq!(MonthDay::from(&datetime), md(9, 15));
    }

    #[test]
    fn test_month_day_ordering() {
        assert!(md(2, 14) < md(2, 15));
        assert!(md(2, 31) < md(3, 1));
        assert!(md(0, 1) < md(11, 31));
        assert_eq!(md(5, 15), md(5, 15));
    }

    #[test]
    fn test_month_day_point_comparisons() {
        let start = md(2, 15);
        assert!(md(2, 15).is_on_or_after(&start));
        assert!(md(3, 1).is_on_or_after(&start));
        assert!(!md(2, 14).is_on_or_after(&start));

        let end = md(3, 25);
        assert!(md(3, 25).is_on_or_before(&end));
        assert!(md(0, 1).is_on_or_before(&end));
        assert!(!md(3, 26).is_on_or_before(&end));
    }

    #[test]
    fn test_month_day_display() {
        assert_eq!(md(2, 15).to_string(), "03-15");
        assert_eq!(md(11, 1).to_string(), "12-01");
    }

    #[test]
    fn test_month_day_from_str() {
        let point = "03-15".parse::<MonthDay>().expect("failed to parse month/day");
        assert_eq!(point, md(2, 15));

        let point = " 12 - 1 ".parse::<MonthDay>().expect("failed to parse padded month/day");
        assert_eq!(point, md(11, 1));
    }

    #[test]
    fn test_month_day_from_str_errors() {
        struct TestCase {
            input:       &'static str,
            expected:    ParseError,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "",
                expected:    ParseError::EmptyInput,
                description: "empty input",
            },
            TestCase {
                input:       "13-01",
                expected:    ParseError::InvalidMonth(13),
                description: "month number past December",
            },
            TestCase {
                input:       "00-10",
                expected:    ParseError::InvalidMonth(0),
                description: "month number zero",
            },
            TestCase {
                input:       "04-32",
                expected:    ParseError::InvalidDay(32),
                description: "day past 31",
            },
            TestCase {
                input:       "AB-01",
                expected:    ParseError::InvalidFormat("AB".to_owned()),
                description: "non-numeric month",
            },
        ];

        for case in &cases {
            let result = case.input.parse::<MonthDay>();
            assert_eq!(result, Err(case.expected.clone()), "{}", case.description);
        }
    }

    #[test]
    fn test_month_day_from_str_separator_count() {
        let err = "0315".parse::<MonthDay>().expect_err("expected error for missing separator");
        assert!(err.to_string().contains("found 0 - separators"));

        let err = "2024-03-15"
            .parse::<MonthDay>()
            .expect_err("expected error for full date");
        assert!(err.to_string().contains("found 2 - separators"));
    }

    #[test]
    fn test_month_day_serde() {
        let point = md(9, 31);
        let json = serde_json::to_string(&point).expect("failed to serialize month/day");
        assert_eq!(json, r#""10-31""#);

        let parsed: MonthDay = serde_json::from_str(&json).expect("failed to deserialize month/day");
        assert_eq!(point, parsed);

        let result: Result<MonthDay, _> = serde_json::from_str(r#""10-32""#);
        assert!(result.is_err());
    }
}

//! Calendar month identifier
//!
//! A `MonthKey` is the canonical "YYYY-MM" grouping key used throughout the
//! app: month overrides are keyed by it, and the engine buckets transactions
//! with it. Derived from local calendar dates only, never via UTC conversion,
//! so day-boundary bucketing stays consistent with "today".

use chrono::{Datelike, NaiveDate};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month (year + month), ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; month must be 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The first calendar day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month key holds a valid year/month")
    }

    /// The date of the given day-of-month within this month
    ///
    /// Returns None for days past the end of the month.
    pub fn date_of_day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Number of days in this month (28-31, leap years honored)
    ///
    /// Computed as "day 0 of the next month": the day before the 1st of the
    /// following month.
    pub fn days(&self) -> u32 {
        self.next()
            .first_day()
            .pred_opt()
            .expect("date before first of a month always exists")
            .day()
    }

    /// The last calendar day of this month
    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .expect("date before first of a month always exists")
    }

    /// Check whether a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| MonthKeyParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthKeyParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthKeyParseError::InvalidFormat(s.to_string()))?;

        MonthKey::new(year, month).ok_or(MonthKeyParseError::InvalidMonth(month))
    }
}

// Serialized as the canonical "YYYY-MM" string so MonthKey can key JSON maps.

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MonthKeyVisitor;

        impl Visitor<'_> for MonthKeyVisitor {
            type Value = MonthKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a month key in YYYY-MM format")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<MonthKey, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(MonthKeyVisitor)
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthKeyParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format (expected YYYY-MM): {}", s)
            }
            MonthKeyParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthKeyParseError {}

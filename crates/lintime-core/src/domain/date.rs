use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

use crate::ValidationError;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Calendar date with day granularity, used as the key of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeriesDate(Date);

impl SeriesDate {
    /// Build a date from raw calendar components.
    ///
    /// Years are limited to `1..=9999` so every date fits the four-digit wire prefix.
    pub fn from_calendar(year: i32, month: i32, day: i32) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate { year, month, day };

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(invalid());
        }

        let month = u8::try_from(month)
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .ok_or_else(invalid)?;
        let day = u8::try_from(day).map_err(|_| invalid())?;

        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Parse an ISO `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let not_iso = || ValidationError::DateNotIso {
            value: input.to_owned(),
        };

        let mut parts = input.trim().splitn(3, '-');
        let mut component = |width: usize| -> Result<i32, ValidationError> {
            let part = parts.next().ok_or_else(not_iso)?;
            if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(not_iso());
            }
            part.parse::<i32>().map_err(|_| not_iso())
        };

        let year = component(4)?;
        let month = component(2)?;
        let day = component(2)?;
        Self::from_calendar(year, month, day)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    /// Absolute number of days between two dates.
    pub fn days_between(self, other: Self) -> f64 {
        f64::from((other.0.to_julian_day() - self.0.to_julian_day()).abs())
    }

    /// Fixed-width `YYYYMMDD` form used as the prefix of an encoded point.
    pub fn compact(self) -> String {
        format!("{:04}{:02}{:02}", self.year(), self.month(), self.day())
    }
}

impl Display for SeriesDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for SeriesDate {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl From<Date> for SeriesDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl From<PrimitiveDateTime> for SeriesDate {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(value.date())
    }
}

impl From<OffsetDateTime> for SeriesDate {
    fn from(value: OffsetDateTime) -> Self {
        Self(value.date())
    }
}

impl From<&SeriesDate> for SeriesDate {
    fn from(value: &SeriesDate) -> Self {
        *value
    }
}

impl TryFrom<String> for SeriesDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SeriesDate> for String {
    fn from(value: SeriesDate) -> Self {
        value.to_string()
    }
}

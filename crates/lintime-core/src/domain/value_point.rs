use serde::{Deserialize, Serialize};

use crate::codec::format_invariant;
use crate::{SeriesDate, ValidationError};

/// One dated observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    date: SeriesDate,
    value: f64,
}

impl ValuePoint {
    /// Any time-of-day carried by `date` is truncated.
    pub fn new(date: impl Into<SeriesDate>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }

    pub fn from_calendar(year: i32, month: i32, day: i32, value: f64) -> Result<Self, ValidationError> {
        Ok(Self::new(SeriesDate::from_calendar(year, month, day)?, value))
    }

    pub fn date(&self) -> SeriesDate {
        self.date
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Absolute distance in days to another point or date.
    pub fn distance_in_days(&self, other: impl Into<SeriesDate>) -> f64 {
        self.date.days_between(other.into())
    }

    /// `YYYYMMDD` immediately followed by the invariant rendering of the value.
    pub fn encode(&self) -> String {
        format!("{}{}", self.date.compact(), format_invariant(self.value))
    }
}

impl From<&ValuePoint> for SeriesDate {
    fn from(value: &ValuePoint) -> Self {
        value.date
    }
}

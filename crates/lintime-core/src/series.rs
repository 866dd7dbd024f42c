use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::codec::{self, DecodeReport};
use crate::{SeriesDate, ValidationError, ValuePoint};

const NAMELESS: &str = "[Nameless series]";

/// Named, sparse, date-indexed series answering interpolated point queries.
///
/// Holds at most one [`ValuePoint`] per calendar date, kept in ascending date
/// order. Inserting a point for an existing date replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SeriesRecord", into = "SeriesRecord")]
pub struct Series {
    name: String,
    points: BTreeMap<SeriesDate, ValuePoint>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim().to_owned(),
            points: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) {
        self.name = name.as_ref().trim().to_owned();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in ascending date order.
    pub fn points(&self) -> impl DoubleEndedIterator<Item = &ValuePoint> + ExactSizeIterator {
        self.points.values()
    }

    pub fn dates(&self) -> impl DoubleEndedIterator<Item = SeriesDate> + ExactSizeIterator + '_ {
        self.points.keys().copied()
    }

    pub fn first(&self) -> Option<&ValuePoint> {
        self.points.values().next()
    }

    pub fn last(&self) -> Option<&ValuePoint> {
        self.points.values().next_back()
    }

    /// Insert or replace the observation for the day of `date`.
    pub fn add_source(&mut self, date: impl Into<SeriesDate>, value: f64) {
        self.add_point(ValuePoint::new(date, value));
    }

    pub fn add_source_ymd(
        &mut self,
        year: i32,
        month: i32,
        day: i32,
        value: f64,
    ) -> Result<(), ValidationError> {
        self.add_point(ValuePoint::from_calendar(year, month, day, value)?);
        Ok(())
    }

    pub fn add_point(&mut self, point: ValuePoint) {
        if let Some(previous) = self.points.insert(point.date(), point) {
            log::trace!(
                "series '{}': replaced {} value {} with {}",
                self.name,
                previous.date(),
                previous.value(),
                point.value()
            );
        }
    }

    /// Stored point for the exact day, without interpolation.
    pub fn value_point(&self, date: impl Into<SeriesDate>) -> Option<&ValuePoint> {
        self.points.get(&date.into())
    }

    /// Value for `date`: the stored value on an exact hit, the boundary value
    /// outside the stored range, and a linear interpolation between the
    /// bracketing points otherwise. An empty series yields `0.0`.
    pub fn value_at(&self, date: impl Into<SeriesDate>) -> f64 {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return 0.0;
        };
        if self.points.len() == 1 {
            return first.value();
        }

        let key = date.into();
        if let Some(hit) = self.points.get(&key) {
            return hit.value();
        }
        if key <= first.date() {
            return first.value();
        }
        if key >= last.date() {
            return last.value();
        }

        let (before, after) = self.bracket(key).unwrap_or((first, last));
        let full_span = before.distance_in_days(after);
        let partial_span = before.distance_in_days(key);
        let fraction = partial_span / full_span;
        before.value() + fraction * (after.value() - before.value())
    }

    pub fn value_at_ymd(&self, year: i32, month: i32, day: i32) -> Result<f64, ValidationError> {
        Ok(self.value_at(SeriesDate::from_calendar(year, month, day)?))
    }

    /// Adjacent stored points with `before <= key <= after`.
    fn bracket(&self, key: SeriesDate) -> Option<(&ValuePoint, &ValuePoint)> {
        let (_, before) = self.points.range(..=key).next_back()?;
        let (_, after) = self.points.range(key..).next()?;
        Some((before, after))
    }

    pub fn date_span_description(&self) -> String {
        match (self.first(), self.last(), self.points.len()) {
            (Some(first), _, 1) => first.date().to_string(),
            (Some(first), Some(last), _) => format!("{} - {}", first.date(), last.date()),
            _ => String::new(),
        }
    }

    pub fn encode(&self) -> String {
        codec::encode(self)
    }

    /// Best-effort decode; `None` only when the input has no parts at all.
    pub fn decode(data: &str) -> Option<Self> {
        Self::decode_with_report(data).map(|report| report.series)
    }

    pub fn decode_with_report(data: &str) -> Option<DecodeReport> {
        codec::decode(data)
    }
}

impl Display for Series {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = if self.name.trim().is_empty() {
            NAMELESS
        } else {
            self.name.trim()
        };

        match self.points.len() {
            0 => f.write_str(name),
            1 => write!(f, "{name} ({})", self.date_span_description()),
            count => write!(f, "{name} ({count} values, {})", self.date_span_description()),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SeriesRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    points: Vec<ValuePoint>,
}

impl From<SeriesRecord> for Series {
    fn from(record: SeriesRecord) -> Self {
        let mut series = Self::named(record.name);
        for point in record.points {
            series.add_point(point);
        }
        series
    }
}

impl From<Series> for SeriesRecord {
    fn from(series: Series) -> Self {
        Self {
            name: series.name,
            points: series.points.into_values().collect(),
        }
    }
}

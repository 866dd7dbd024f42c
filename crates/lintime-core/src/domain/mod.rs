//! # Domain Models
//!
//! Day-granularity dates and the observations stored in a series.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SeriesDate`] | Validated calendar date, no time of day |
//! | [`ValuePoint`] | One `(date, value)` observation |
//!
//! Dates built from raw components are validated at construction:
//!
//! ```rust
//! use lintime_core::{SeriesDate, ValidationError};
//!
//! let date = SeriesDate::from_calendar(2020, 1, 6).unwrap();
//! assert_eq!(date.to_string(), "2020-01-06");
//!
//! let invalid = SeriesDate::from_calendar(2020, 13, 1);
//! assert!(matches!(invalid, Err(ValidationError::InvalidDate { .. })));
//! ```

mod date;
mod value_point;

pub use date::SeriesDate;
pub use value_point::ValuePoint;

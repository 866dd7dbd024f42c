//! # Lintime Core
//!
//! Sparse, date-indexed series with linear interpolation between observations.
//!
//! ## Overview
//!
//! - **Day-granularity dates**: every stored or queried date is truncated to
//!   the calendar day
//! - **Interpolated lookup**: exact hits return the stored value, queries
//!   outside the stored range clamp to the boundary values, everything else is
//!   interpolated linearly between the bracketing points
//! - **Text codec**: a compact, round-trippable encoding for persistence
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`codec`] | Text encoding, lenient decoding, decode warnings |
//! | [`domain`] | `SeriesDate` and `ValuePoint` |
//! | [`error`] | Core error types |
//! | [`series`] | The `Series` aggregate |
//!
//! ## Quick Start
//!
//! ```rust
//! use lintime_core::{Series, SeriesDate};
//!
//! # fn main() -> Result<(), lintime_core::ValidationError> {
//! let mut rates = Series::named("Rates");
//! rates.add_source_ymd(2020, 1, 1, 100.0)?;
//! rates.add_source_ymd(2020, 1, 11, 200.0)?;
//!
//! assert_eq!(rates.value_at(SeriesDate::from_calendar(2020, 1, 6)?), 150.0);
//! assert_eq!(rates.encode(), "Rates|20200101100¤20200111200");
//!
//! let restored = Series::decode(&rates.encode()).expect("non-empty input");
//! assert_eq!(restored, rates);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Building a date from raw components returns
//! [`ValidationError::InvalidDate`] for impossible dates. Decoding never
//! fails on a bad segment; it skips or defaults it and records a
//! [`DecodeWarning`] instead.

pub mod codec;
pub mod domain;
pub mod error;
pub mod series;

pub use codec::{DecodeReport, DecodeWarning, DecodeWarningKind, SegmentField};
pub use domain::{SeriesDate, ValuePoint};
pub use error::ValidationError;
pub use series::Series;

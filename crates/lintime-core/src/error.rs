use thiserror::Error;

/// Validation errors exposed by `lintime-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    DateNotIso { value: String },
}

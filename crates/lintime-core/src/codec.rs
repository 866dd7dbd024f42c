//! Compact text encoding for a [`Series`].
//!
//! ```text
//! <name>|<YYYYMMDD><value>¤<YYYYMMDD><value>¤...
//! ```
//!
//! Decoding is best-effort: unparsable numeric fields fall back to zero and
//! unusable segments are dropped, each reported as a [`DecodeWarning`].

use std::fmt::{Display, Formatter};

use crate::{Series, ValidationError};

/// Separates the series name from the points block.
pub const FIELD_SEPARATOR: char = '|';
/// Separates encoded points.
pub const POINT_SEPARATOR: char = '¤';
/// Stripped from names on encode but never used structurally.
const RESERVED_NAME_CHAR: char = '~';
/// Width of the `YYYYMMDD` prefix of an encoded point.
pub const DATE_PREFIX_LEN: usize = 8;

/// Component of a point segment that may be coerced to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentField {
    Year,
    Month,
    Day,
    Value,
}

impl SegmentField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Value => "value",
        }
    }
}

impl Display for SegmentField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a point segment was dropped or altered during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarningKind {
    /// Segment is shorter than the date prefix and was skipped.
    TooShort { len: usize },
    /// Field failed to parse and was read as zero.
    FieldDefaulted { field: SegmentField },
    /// Date components do not form a calendar date; segment skipped.
    InvalidDate(ValidationError),
}

/// Non-fatal issue found in one point segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeWarning {
    /// Position of the segment within the points block.
    pub index: usize,
    pub segment: String,
    pub kind: DecodeWarningKind,
}

impl Display for DecodeWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DecodeWarningKind::TooShort { len } => write!(
                f,
                "segment {} '{}' skipped: {len} characters, expected at least {DATE_PREFIX_LEN}",
                self.index, self.segment
            ),
            DecodeWarningKind::FieldDefaulted { field } => write!(
                f,
                "segment {} '{}': unparsable {field} read as 0",
                self.index, self.segment
            ),
            DecodeWarningKind::InvalidDate(error) => {
                write!(f, "segment {} '{}' skipped: {error}", self.index, self.segment)
            }
        }
    }
}

/// Decoded series together with the warnings raised along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeReport {
    pub series: Series,
    pub warnings: Vec<DecodeWarning>,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Remove the separator characters from a name and trim it.
pub fn clean_name(name: &str) -> String {
    name.chars()
        .filter(|ch| !matches!(*ch, FIELD_SEPARATOR | RESERVED_NAME_CHAR | POINT_SEPARATOR))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Render a value with the locale-independent general format.
///
/// Shortest round-trip digits; positional when the decimal exponent lies in
/// `-4..15`, otherwise `d.dddE+XX`.
pub fn format_invariant(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return String::from(text);
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if (-4..15).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Lenient invariant-culture decimal parse.
///
/// Accepts surrounding whitespace, a leading or trailing sign, parenthesized
/// negatives, `,` group separators in the integral digits, exponents, and the
/// exact `NaN`/`Infinity` spellings.
pub fn parse_invariant(input: &str) -> Option<f64> {
    let mut text = input.trim();
    let mut parenthesized = false;

    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        parenthesized = true;
        text = inner.trim();
    }

    let (sign, body) = split_sign(text)?;
    if parenthesized && sign.is_some() {
        return None;
    }

    let magnitude = match body {
        "NaN" => f64::NAN,
        "Infinity" => f64::INFINITY,
        _ => normalize_decimal(body)?.parse::<f64>().ok()?,
    };

    if parenthesized || sign == Some('-') {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

/// Split off one leading or one trailing sign; both at once is rejected.
fn split_sign(text: &str) -> Option<(Option<char>, &str)> {
    let mut sign = None;
    let mut body = text;

    if let Some(first @ ('+' | '-')) = body.chars().next() {
        sign = Some(first);
        body = &body[1..];
    }
    if let Some(last @ ('+' | '-')) = body.chars().next_back() {
        if sign.is_some() {
            return None;
        }
        sign = Some(last);
        body = body[..body.len() - 1].trim_end();
    }

    Some((sign, body))
}

/// Digits-only rendering of an unsigned decimal that `f64::from_str` accepts.
fn normalize_decimal(body: &str) -> Option<String> {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let (integral, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if integral.starts_with(',') {
        return None;
    }
    let integral = integral.replace(',', "");
    let is_digits = |text: &str| text.bytes().all(|byte| byte.is_ascii_digit());
    if !is_digits(&integral) || !is_digits(fraction) {
        return None;
    }
    if integral.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut out = if integral.is_empty() {
        String::from("0")
    } else {
        integral
    };
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }

    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if digits.is_empty() || !is_digits(digits) {
            return None;
        }
        out.push('e');
        out.push_str(exponent);
    }

    Some(out)
}

fn parse_component(input: &str) -> Option<i32> {
    input.trim().parse::<i32>().ok()
}

pub(crate) fn encode(series: &Series) -> String {
    let mut out = clean_name(series.name());
    out.push(FIELD_SEPARATOR);

    for (index, point) in series.points().enumerate() {
        if index > 0 {
            out.push(POINT_SEPARATOR);
        }
        out.push_str(&point.encode());
    }

    out
}

pub(crate) fn decode(data: &str) -> Option<DecodeReport> {
    let mut parts = data.split(FIELD_SEPARATOR);
    let mut series = Series::named(parts.next()?);
    let mut warnings = Vec::new();

    let Some(points) = parts.next() else {
        return Some(DecodeReport { series, warnings });
    };

    for (index, segment) in points.split(POINT_SEPARATOR).enumerate() {
        if segment.trim().is_empty() {
            continue;
        }

        let mut warn = |kind: DecodeWarningKind| {
            let warning = DecodeWarning {
                index,
                segment: segment.to_owned(),
                kind,
            };
            log::debug!("decode: {warning}");
            warnings.push(warning);
        };

        let chars = segment.chars().collect::<Vec<_>>();
        if chars.len() < DATE_PREFIX_LEN {
            warn(DecodeWarningKind::TooShort { len: chars.len() });
            continue;
        }

        let slice = |from: usize, to: usize| chars[from..to].iter().collect::<String>();
        let mut component = |field: SegmentField, from: usize, to: usize| {
            parse_component(&slice(from, to)).unwrap_or_else(|| {
                warn(DecodeWarningKind::FieldDefaulted { field });
                0
            })
        };

        let year = component(SegmentField::Year, 0, 4);
        let month = component(SegmentField::Month, 4, 6);
        let day = component(SegmentField::Day, 6, 8);

        let value = if chars.len() > DATE_PREFIX_LEN {
            parse_invariant(&slice(DATE_PREFIX_LEN, chars.len())).unwrap_or_else(|| {
                warn(DecodeWarningKind::FieldDefaulted {
                    field: SegmentField::Value,
                });
                0.0
            })
        } else {
            0.0
        };

        if let Err(error) = series.add_source_ymd(year, month, day, value) {
            warn(DecodeWarningKind::InvalidDate(error));
        }
    }

    Some(DecodeReport { series, warnings })
}

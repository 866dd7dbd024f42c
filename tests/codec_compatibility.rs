//! Compatibility tests for the persisted text format
//!
//! Encoded strings are compared byte for byte against the format other
//! readers of persisted series expect.

use lintime_core::{DecodeWarningKind, SegmentField, Series, SeriesDate, ValidationError};

fn date(year: i32, month: i32, day: i32) -> SeriesDate {
    SeriesDate::from_calendar(year, month, day).expect("valid date")
}

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn empty_unnamed_series_encodes_to_bare_separator() {
    assert_eq!(Series::new().encode(), "|");
}

#[test]
fn single_point_has_no_point_separator() {
    let mut series = Series::named("One");
    series.add_source(date(2020, 1, 1), 2.5);

    assert_eq!(series.encode(), "One|202001012.5");
}

#[test]
fn points_are_encoded_in_date_order() {
    let mut series = Series::named("Rates");
    series.add_source(date(2020, 1, 11), 200.0);
    series.add_source(date(2020, 1, 1), 100.0);
    series.add_source(date(2019, 12, 31), 1e15);

    assert_eq!(
        series.encode(),
        "Rates|201912311E+15¤20200101100¤20200111200"
    );
}

#[test]
fn reserved_characters_are_stripped_from_encoded_name() {
    let series = Series::named(" a|b~c¤d ");

    assert_eq!(series.name(), "a|b~c¤d", "the in-memory name is only trimmed");
    assert_eq!(series.encode(), "abcd|");
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn name_only_input_yields_empty_named_series() {
    let series = Series::decode("  Lonely  ").expect("decodes");

    assert_eq!(series.name(), "Lonely");
    assert!(series.is_empty());
}

#[test]
fn empty_input_yields_empty_series() {
    let series = Series::decode("").expect("decodes");

    assert_eq!(series, Series::new());
}

#[test]
fn non_numeric_value_suffix_defaults_to_zero() {
    // Given: A segment whose value field is not a number
    let report = Series::decode_with_report("X|20200101100~25").expect("decodes");

    // Then: The date survives and the value is read as zero
    let point = report
        .series
        .value_point(date(2020, 1, 1))
        .expect("point is stored");
    assert_eq!(point.value(), 0.0);
    assert_eq!(report.series.name(), "X");

    // And: The coercion is reported
    assert_eq!(
        report.warnings[0].kind,
        DecodeWarningKind::FieldDefaulted {
            field: SegmentField::Value
        }
    );
}

#[test]
fn abbreviated_non_finite_values_default_to_zero() {
    // Given: Value fields spelled the way only Rust's float parser accepts
    let report = Series::decode_with_report("X|20200101inf¤20200102nan¤202001031.2,3")
        .expect("decodes");

    // Then: Each value is read as zero
    for day in 1..=3 {
        assert_eq!(report.series.value_at(date(2020, 1, day)), 0.0, "day {day}");
    }

    // And: Every coercion is reported
    assert_eq!(report.warnings.len(), 3);
    assert!(report.warnings.iter().all(|warning| warning.kind
        == DecodeWarningKind::FieldDefaulted {
            field: SegmentField::Value
        }));
}

#[test]
fn spelled_out_non_finite_values_decode() {
    let report = Series::decode_with_report("X|20200101Infinity¤20200102-Infinity¤20200103NaN")
        .expect("decodes");

    assert!(report.is_clean());
    assert_eq!(report.series.value_at(date(2020, 1, 1)), f64::INFINITY);
    assert_eq!(report.series.value_at(date(2020, 1, 2)), f64::NEG_INFINITY);
    assert!(report.series.value_at(date(2020, 1, 3)).is_nan());
}

#[test]
fn date_only_segment_stores_zero_without_warning() {
    let report = Series::decode_with_report("X|20200101").expect("decodes");

    assert_eq!(report.series.value_at(date(2020, 1, 1)), 0.0);
    assert_eq!(report.series.len(), 1);
    assert!(report.is_clean());
}

#[test]
fn bad_segments_do_not_abort_decoding() {
    // Given: A payload mixing valid, short, blank and impossible segments
    let data = "Mixed|20200101100¤123¤ ¤20201340 5¤20200111200";

    // When: It is decoded
    let report = Series::decode_with_report(data).expect("decodes");

    // Then: The valid points survive
    assert_eq!(report.series.len(), 2);
    assert_eq!(report.series.value_at(date(2020, 1, 6)), 150.0);

    // And: Each dropped segment is reported
    let kinds = report
        .warnings
        .iter()
        .map(|warning| (warning.index, warning.kind.clone()))
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            (1, DecodeWarningKind::TooShort { len: 3 }),
            (
                3,
                DecodeWarningKind::InvalidDate(ValidationError::InvalidDate {
                    year: 2020,
                    month: 13,
                    day: 40
                })
            ),
        ]
    );
}

#[test]
fn later_duplicate_segment_wins() {
    let series = Series::decode("D|202001011¤202001012").expect("decodes");

    assert_eq!(series.len(), 1);
    assert_eq!(series.value_at(date(2020, 1, 1)), 2.0);
}

#[test]
fn parts_after_the_points_block_are_ignored() {
    let series = Series::decode("N|20200101100|garbage").expect("decodes");

    assert_eq!(series.name(), "N");
    assert_eq!(series.len(), 1);
}

// =============================================================================
// Round Trip
// =============================================================================

#[test]
fn round_trip_preserves_name_and_points() {
    let mut series = Series::named("Round trip");
    let values = [
        ((1, 1, 1), 0.0),
        ((1999, 12, 31), -0.000_012_5),
        ((2020, 2, 29), 0.1 + 0.2),
        ((2020, 3, 1), 123_456_789_012_345.0),
        ((2020, 3, 2), 1.5e300),
        ((9999, 12, 31), -42.0),
    ];
    for ((year, month, day), value) in values {
        series.add_source_ymd(year, month, day, value).expect("valid date");
    }

    let encoded = series.encode();
    let report = Series::decode_with_report(&encoded).expect("decodes");

    assert!(report.is_clean(), "{:?}", report.warnings);
    assert_eq!(report.series, series);
    assert_eq!(report.series.encode(), encoded);
}

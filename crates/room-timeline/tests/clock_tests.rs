//! Tests for the `"HH:MM"` clock codec.

use room_timeline::clock::{minutes_to_time_str, parse_range, range_to_str, to_minutes, DAY_END};
use room_timeline::TimelineError;

#[test]
fn to_minutes_parses_clock_strings() {
    assert_eq!(to_minutes("00:00").unwrap(), 0);
    assert_eq!(to_minutes("09:30").unwrap(), 570);
    assert_eq!(to_minutes("23:59").unwrap(), 1439);
    assert_eq!(to_minutes("24:00").unwrap(), DAY_END);
}

#[test]
fn to_minutes_does_not_validate_ranges() {
    // Only the shape is checked; out-of-range values pass through.
    assert_eq!(to_minutes("25:90").unwrap(), 25 * 60 + 90);
}

#[test]
fn to_minutes_rejects_non_numeric_text() {
    assert_eq!(
        to_minutes("ab:cd"),
        Err(TimelineError::InvalidTime("ab:cd".to_string()))
    );
    assert!(to_minutes("0900").is_err());
    assert!(to_minutes("").is_err());
}

#[test]
fn minutes_to_time_str_zero_pads() {
    assert_eq!(minutes_to_time_str(0), "00:00");
    assert_eq!(minutes_to_time_str(65), "01:05");
    assert_eq!(minutes_to_time_str(1439), "23:59");
}

#[test]
fn day_end_formats_as_24_00() {
    assert_eq!(minutes_to_time_str(DAY_END), "24:00");
}

#[test]
fn range_formatting_and_parsing_agree() {
    assert_eq!(range_to_str(540, 600), "09:00-10:00");
    assert_eq!(parse_range("09:00-10:00").unwrap(), (540, 600));
    assert_eq!(parse_range("22:00-24:00").unwrap(), (1320, DAY_END));
}

#[test]
fn parse_range_requires_a_dash() {
    assert!(parse_range("09:00").is_err());
}

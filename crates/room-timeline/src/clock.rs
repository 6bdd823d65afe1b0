//! Clock codec -- converts between `"HH:MM"` strings and minute offsets from midnight.
//!
//! All values are naive same-day local clock times. The end of the day is the
//! minute offset [`DAY_END`] and renders as `"24:00"`.

use crate::error::{Result, TimelineError};

/// First minute of the day.
pub const DAY_START: u32 = 0;

/// One past the last minute of the day (exclusive upper bound).
pub const DAY_END: u32 = 24 * 60;

/// Parse an `"HH:MM"` clock string into minutes since midnight.
///
/// Only the shape is checked: two numeric parts separated by `:`. Out-of-range
/// values such as `"25:90"` are accepted and yield `25 * 60 + 90`.
///
/// # Errors
/// Returns `TimelineError::InvalidTime` when either part is missing or non-numeric.
pub fn to_minutes(time: &str) -> Result<u32> {
    let invalid = || TimelineError::InvalidTime(time.to_string());

    let (hours, minutes) = time.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(invalid)
}

/// Format minutes since midnight as a zero-padded `"HH:MM"` string.
///
/// [`DAY_END`] formats as `"24:00"`.
pub fn minutes_to_time_str(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Format a `(start, end)` minute pair as `"HH:MM-HH:MM"`.
pub fn range_to_str(start: u32, end: u32) -> String {
    format!("{}-{}", minutes_to_time_str(start), minutes_to_time_str(end))
}

/// Parse an `"HH:MM-HH:MM"` range into a `(start, end)` minute pair.
pub fn parse_range(range: &str) -> Result<(u32, u32)> {
    let (start, end) = range
        .split_once('-')
        .ok_or_else(|| TimelineError::InvalidTime(range.to_string()))?;
    Ok((to_minutes(start)?, to_minutes(end)?))
}

/// Serde adapter storing a minute offset as an `"HH:MM"` string.
///
/// Use with `#[serde(with = "crate::clock::hhmm")]`.
pub mod hhmm {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::minutes_to_time_str(*minutes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::to_minutes(&raw).map_err(de::Error::custom)
    }
}

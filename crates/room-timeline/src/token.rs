//! Token classification -- turns one scraped event label into a typed slot.
//!
//! The source grammar is closed. A token is either:
//!
//! - **unavailable**: `... (HH:MM-HH:MM) (not available)`, the portion of the day
//!   outside the scrape window, or
//! - **booked**: `Booking Time: HH:MM-HH:MM` followed by `Label: value` lines.
//!
//! Anything else is an [`TimelineError::UnrecognizedToken`].

use lazy_static::lazy_static;
use regex::Regex;

use crate::clock;
use crate::error::{Result, TimelineError};

/// Marker that identifies the unavailable shape.
pub const NOT_AVAILABLE_MARKER: &str = "(not available)";

/// Prefix that identifies the booked shape.
pub const BOOKING_TIME_PREFIX: &str = "Booking Time:";

lazy_static! {
    static ref UNAVAILABLE_RANGE_RE: Regex =
        Regex::new(r"\((\d{2}:\d{2}-\d{2}:\d{2})\) \(not available\)")
            .expect("Failed to compile UNAVAILABLE_RANGE_RE regex");
    static ref BOOKING_RANGE_RE: Regex = Regex::new(r"Booking Time: (\d{2}:\d{2}-\d{2}:\d{2})")
        .expect("Failed to compile BOOKING_RANGE_RE regex");
    static ref ROOM_START_RE: Regex = Regex::new(r"^\(00:00-\d{2}:\d{2}\) \(not available\)$")
        .expect("Failed to compile ROOM_START_RE regex");
}

/// Raw kind of a classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Unavailable,
    Booked,
}

/// The parsed form of a token: time bounds, kind, and the raw detail text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSlot<'a> {
    pub start_min: u32,
    pub end_min: u32,
    pub kind: SlotKind,
    /// The whole token for booked slots, empty for unavailable ones.
    pub details: &'a str,
}

/// Classify a raw token.
///
/// # Errors
/// - `TimelineError::MalformedToken` if the token carries a marker but the
///   expected `HH:MM-HH:MM` range is missing.
/// - `TimelineError::UnrecognizedToken` if it matches neither shape.
pub fn classify(token: &str) -> Result<ParsedSlot<'_>> {
    if token.contains(NOT_AVAILABLE_MARKER) {
        let (start_min, end_min) = capture_range(&UNAVAILABLE_RANGE_RE, token)?;
        return Ok(ParsedSlot {
            start_min,
            end_min,
            kind: SlotKind::Unavailable,
            details: "",
        });
    }

    if token.starts_with(BOOKING_TIME_PREFIX) {
        let (start_min, end_min) = capture_range(&BOOKING_RANGE_RE, token)?;
        return Ok(ParsedSlot {
            start_min,
            end_min,
            kind: SlotKind::Booked,
            details: token,
        });
    }

    Err(TimelineError::UnrecognizedToken(token.to_string()))
}

/// Whether `token` opens a new room's block.
///
/// Every room's run of tokens begins with an unavailable placeholder anchored
/// at `00:00`, and nothing else has that exact shape.
pub fn is_room_start(token: &str) -> bool {
    ROOM_START_RE.is_match(token)
}

fn capture_range(re: &Regex, token: &str) -> Result<(u32, u32)> {
    let range = re
        .captures(token)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| TimelineError::MalformedToken(token.to_string()))?;
    clock::parse_range(range.as_str())
}

//! Timeline construction -- one room's tokens into a gapless partition of the day.
//!
//! Tokens are classified, sorted by start (stable), then swept with a cursor from
//! `00:00`. Gaps before a slot become `free` intervals and the remainder of the
//! day after the last slot becomes a trailing `free` interval. Adjacent intervals
//! with the same status are never merged.
//!
//! # Overlapping slots
//!
//! Overlaps in the source are not repaired. Each slot is emitted with its raw
//! bounds in sorted order, no gap is emitted when a slot starts at or before the
//! cursor, and the cursor always moves to the end of the most recent slot (the
//! later sorted slot wins, even if that moves the cursor backwards).

use serde::{Deserialize, Serialize};

use crate::clock::{self, DAY_END, DAY_START};
use crate::detail::{self, BookingDetail};
use crate::error::Result;
use crate::token::{self, SlotKind};

/// Reason attached to every unavailable interval.
pub const OUTSIDE_SCRAPE_WINDOW: &str = "Outside scrape window";

/// Status of one interval in a room's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Free,
    Booked,
    Unavailable,
}

/// A typed interval of a room's day. Bounds are minutes since midnight and
/// serialize as `"HH:MM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    #[serde(with = "clock::hhmm")]
    pub start: u32,
    #[serde(with = "clock::hhmm")]
    pub end: u32,
    pub status: SlotStatus,
    /// Present only for `unavailable` intervals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Present only for `booked` intervals with at least one extracted field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingDetail>,
}

impl TimeInterval {
    pub fn free(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            status: SlotStatus::Free,
            reason: None,
            booking: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.status == SlotStatus::Free
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether `[start, end)` lies entirely within this interval.
    pub fn contains_window(&self, start: u32, end: u32) -> bool {
        self.start <= start && end <= self.end
    }
}

/// The full-day timeline of one room, ordered by start.
pub type RoomTimeline = Vec<TimeInterval>;

/// The timeline of a room with no events: one free interval spanning the day.
pub fn all_day_free() -> RoomTimeline {
    vec![TimeInterval::free(DAY_START, DAY_END)]
}

/// Build the timeline for one room's raw tokens.
///
/// An empty token list yields [`all_day_free`].
///
/// # Errors
/// Propagates the first classification error. No partial timeline is returned.
pub fn build_timeline<T: AsRef<str>>(tokens: &[T]) -> Result<RoomTimeline> {
    let mut slots = tokens
        .iter()
        .map(|t| token::classify(t.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    // `sort_by_key` is stable: ties keep their original token order.
    slots.sort_by_key(|slot| slot.start_min);

    let mut timeline = Vec::with_capacity(slots.len() * 2 + 1);
    let mut cursor = DAY_START;

    for slot in slots {
        if slot.start_min > cursor {
            timeline.push(TimeInterval::free(cursor, slot.start_min));
        } else if slot.start_min < cursor {
            tracing::warn!(
                slot = %clock::range_to_str(slot.start_min, slot.end_min),
                cursor = %clock::minutes_to_time_str(cursor),
                "overlapping source slot, no gap emitted"
            );
        }

        let interval = match slot.kind {
            SlotKind::Unavailable => TimeInterval {
                start: slot.start_min,
                end: slot.end_min,
                status: SlotStatus::Unavailable,
                reason: Some(OUTSIDE_SCRAPE_WINDOW.to_string()),
                booking: None,
            },
            SlotKind::Booked => TimeInterval {
                start: slot.start_min,
                end: slot.end_min,
                status: SlotStatus::Booked,
                reason: None,
                booking: detail::extract_details(slot.details).filter(|b| !b.is_empty()),
            },
        };
        timeline.push(interval);
        cursor = slot.end_min;
    }

    if cursor < DAY_END {
        timeline.push(TimeInterval::free(cursor, DAY_END));
    }

    Ok(timeline)
}

//! Availability statistics for one room's timeline, relative to a caller-supplied `now`.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::timeline::TimeInterval;

/// Aggregate availability of one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    /// `now` falls inside a free interval.
    pub is_available_now: bool,
    /// Start of the first free interval after `now`, on the same date. Only
    /// computed while the room is not yet known to be available now.
    pub next_available_at: Option<NaiveDateTime>,
    pub free_slots_count: usize,
    pub free_duration_minutes: u32,
}

/// Summarize a timeline at the wall-clock instant `now`.
///
/// Intervals are scanned in order. `next_available_at` is taken from the first
/// free interval starting strictly after `now`, but only if no free interval
/// containing `now` has been scanned before it. Once the room is found to be
/// available now, later free intervals never set it.
pub fn summarize(timeline: &[TimeInterval], now: NaiveDateTime) -> AvailabilitySummary {
    let now_minutes = now.hour() * 60 + now.minute();
    let midnight = now.date().and_time(NaiveTime::MIN);

    let mut summary = AvailabilitySummary {
        is_available_now: false,
        next_available_at: None,
        free_slots_count: 0,
        free_duration_minutes: 0,
    };

    for interval in timeline.iter().filter(|i| i.is_free()) {
        summary.free_slots_count += 1;
        summary.free_duration_minutes += interval.duration_minutes();

        if interval.start <= now_minutes && now_minutes < interval.end {
            summary.is_available_now = true;
        }

        if !summary.is_available_now
            && interval.start > now_minutes
            && summary.next_available_at.is_none()
        {
            summary.next_available_at =
                Some(midnight + Duration::minutes(i64::from(interval.start)));
        }
    }

    summary
}

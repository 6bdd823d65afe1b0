//! First-fit room matching for a desired booking window.
//!
//! Rooms are scanned in caller order and each room's intervals in timeline order.
//! The first free interval that fully contains the window wins; there is no
//! best-fit or slack comparison.

use serde::Serialize;

use crate::clock;
use crate::error::Result;
use crate::rooms::RoomRecord;
use crate::timeline::TimeInterval;

/// A room together with the free interval that contains the desired window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomMatch<'a> {
    pub room: &'a RoomRecord,
    #[serde(rename = "matchingSlot")]
    pub matching_slot: &'a TimeInterval,
}

/// Find the first room with a free interval containing `[desired_start, desired_end)`.
///
/// # Errors
/// Returns `TimelineError::InvalidTime` if either desired time is not `HH:MM`.
pub fn find_match<'a>(
    rooms: &'a [RoomRecord],
    desired_start: &str,
    desired_end: &str,
) -> Result<Option<RoomMatch<'a>>> {
    let start = clock::to_minutes(desired_start)?;
    let end = clock::to_minutes(desired_end)?;

    let found = find_match_minutes(rooms, start, end);
    match &found {
        Some(m) => tracing::info!(
            room = %m.room.name,
            slot = %clock::range_to_str(m.matching_slot.start, m.matching_slot.end),
            desired = %clock::range_to_str(start, end),
            "found matching room"
        ),
        None => tracing::info!(
            desired = %clock::range_to_str(start, end),
            "no room found with availability"
        ),
    }
    Ok(found)
}

/// Minute-based form of [`find_match`].
pub fn find_match_minutes(rooms: &[RoomRecord], start: u32, end: u32) -> Option<RoomMatch<'_>> {
    rooms.iter().find_map(|room| {
        room.timeslots
            .iter()
            .find(|slot| slot.is_free() && slot.contains_window(start, end))
            .map(|matching_slot| RoomMatch {
                room,
                matching_slot,
            })
    })
}

//! Room records: the per-room output of one reconstruction run.
//!
//! [`reconstruct`] is the pure engine (segment, then build every timeline).
//! [`build_room_records`] adds the availability summary and the static metadata
//! each downstream consumer expects.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metadata::{self, ScrapeFilters};
use crate::segment;
use crate::summary::{self, AvailabilitySummary};
use crate::timeline::{self, RoomTimeline};

/// One room's reconstructed day. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: String,
    pub name: String,
    pub building: String,
    pub building_code: String,
    pub floor: String,
    pub facility_type: String,
    pub equipment: Vec<String>,
    pub timeslots: RoomTimeline,
    pub availability_summary: AvailabilitySummary,
}

/// Segment the tokens and build a timeline for every room, in room order.
///
/// # Errors
/// Fails on the first segmentation or classification error. Nothing is
/// returned for any room in that case.
pub fn reconstruct<R: AsRef<str>, T: AsRef<str>>(
    room_names: &[R],
    tokens: &[T],
) -> Result<Vec<(String, RoomTimeline)>> {
    segment::segment(room_names, tokens)?
        .into_iter()
        .map(|group| -> Result<(String, RoomTimeline)> {
            let timeline = timeline::build_timeline(&group.tokens)?;
            tracing::debug!(
                room = %group.room,
                tokens = group.tokens.len(),
                intervals = timeline.len(),
                padded = group.is_padded(),
                "built room timeline"
            );
            Ok((group.room, timeline))
        })
        .collect()
}

/// Reconstruct every room and enrich it with metadata and an availability summary.
pub fn build_room_records<R: AsRef<str>, T: AsRef<str>>(
    room_names: &[R],
    tokens: &[T],
    filters: &ScrapeFilters,
    now: NaiveDateTime,
) -> Result<Vec<RoomRecord>> {
    let rooms = reconstruct(room_names, tokens)?
        .into_iter()
        .map(|(name, timeslots)| {
            let meta = metadata::extract_room_metadata(&name, filters);
            let availability_summary = summary::summarize(&timeslots, now);
            RoomRecord {
                id: name.clone(),
                name,
                building: meta.building,
                building_code: meta.building_code,
                floor: meta.floor,
                facility_type: meta.facility_type,
                equipment: meta.equipment,
                timeslots,
                availability_summary,
            }
        })
        .collect();
    Ok(rooms)
}

/// Aggregate counts over a run's rooms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub total_rooms: usize,
    /// Rooms free right now.
    pub available_rooms: usize,
    /// Rooms with no free interval at all.
    pub booked_rooms: usize,
    /// Rooms with at least one free interval (includes `available_rooms`).
    pub partially_available_rooms: usize,
}

impl RunStatistics {
    pub fn from_rooms(rooms: &[RoomRecord]) -> Self {
        rooms.iter().fold(
            RunStatistics {
                total_rooms: rooms.len(),
                ..RunStatistics::default()
            },
            |mut stats, room| {
                let summary = &room.availability_summary;
                if summary.free_slots_count > 0 {
                    stats.partially_available_rooms += 1;
                    if summary.is_available_now {
                        stats.available_rooms += 1;
                    }
                } else {
                    stats.booked_rooms += 1;
                }
                stats
            },
        )
    }
}

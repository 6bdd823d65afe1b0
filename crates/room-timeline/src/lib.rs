//! # room-timeline
//!
//! Reconstructs per-room booking timelines from the flat list of event labels
//! scraped off a facility-booking calendar grid.
//!
//! The input is the ordered list of room names and the ordered list of raw event
//! labels for one day. The output is, per room, a gapless and non-overlapping
//! partition of `00:00-24:00` into `free`, `booked`, and `unavailable` intervals,
//! with booking metadata parsed out of the label text. A first-fit matcher then
//! finds the first room whose free interval contains a desired window.
//!
//! The engine is pure: it never reads the clock, and the same input always
//! yields the same output.
//!
//! ## Modules
//!
//! - [`clock`] — `"HH:MM"` ↔ minutes since midnight
//! - [`token`] — Classify one raw label as unavailable or booked
//! - [`detail`] — Extract booking fields from `Label: value` lines
//! - [`segment`] — Split the flat token list into per-room groups
//! - [`timeline`] — Build one room's gapless day timeline
//! - [`summary`] — Availability statistics relative to `now`
//! - [`matcher`] — First-fit room/slot search for a desired window
//! - [`metadata`] — Building and floor derived from room names
//! - [`rooms`] — Room records and run statistics
//! - [`report`] — Success/failure run report
//! - [`error`] — Error types

pub mod clock;
pub mod detail;
pub mod error;
pub mod matcher;
pub mod metadata;
pub mod report;
pub mod rooms;
pub mod segment;
pub mod summary;
pub mod timeline;
pub mod token;

pub use detail::{extract_details, BookingDetail};
pub use error::TimelineError;
pub use matcher::{find_match, RoomMatch};
pub use metadata::ScrapeFilters;
pub use report::{RunReport, ScrapeConfig};
pub use rooms::{build_room_records, reconstruct, RoomRecord, RunStatistics};
pub use segment::{segment, RoomTokens};
pub use summary::{summarize, AvailabilitySummary};
pub use timeline::{build_timeline, RoomTimeline, SlotStatus, TimeInterval};

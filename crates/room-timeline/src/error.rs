//! Error types for timeline reconstruction.
//!
//! Every variant is fatal for the run that raised it: the scraped input fell
//! outside the expected grammar and no partial output is produced.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// The token carries a recognized marker but no embedded `HH:MM-HH:MM` range.
    #[error("Malformed token (missing time range): {0}")]
    MalformedToken(String),

    /// The token matches neither the unavailable nor the booked shape.
    #[error("Unrecognized token: {0}")]
    UnrecognizedToken(String),

    #[error("More timeslot blocks than rooms: {blocks} blocks for {rooms} rooms")]
    TooManyBlocks { rooms: usize, blocks: usize },

    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, TimelineError>;

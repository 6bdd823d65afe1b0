//! Room segmentation -- splits the flat token list into per-room groups.
//!
//! The calendar grid emits one contiguous run of tokens per room, in table
//! order, and each run opens with a `(00:00-HH:MM) (not available)` placeholder.
//! A new block starts at every such sentinel. Rooms left without a block (no
//! events at all, or a truncated grid) are padded with an empty group, which the
//! timeline builder turns into a single all-day free interval.

use crate::error::{Result, TimelineError};
use crate::token;

/// The raw tokens assigned to one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTokens {
    pub room: String,
    /// Empty for rooms that received no block.
    pub tokens: Vec<String>,
}

impl RoomTokens {
    pub fn is_padded(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Split `tokens` into contiguous blocks, one per room-start sentinel.
///
/// Tokens before the first sentinel form a block of their own. The total
/// number of tokens across all blocks equals `tokens.len()`.
pub fn split_blocks<T: AsRef<str>>(tokens: &[T]) -> Vec<Vec<String>> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .fold(Vec::new(), |mut blocks: Vec<Vec<String>>, token| {
            if !token::is_room_start(token) {
                if let Some(block) = blocks.last_mut() {
                    block.push(token.to_string());
                    return blocks;
                }
            }
            blocks.push(vec![token.to_string()]);
            blocks
        })
}

/// Assign token blocks to rooms in order, padding rooms without a block.
///
/// The result has exactly one entry per room name, in the given order.
///
/// # Errors
/// Returns `TimelineError::TooManyBlocks` if there are more blocks than rooms.
pub fn segment<R: AsRef<str>, T: AsRef<str>>(
    room_names: &[R],
    tokens: &[T],
) -> Result<Vec<RoomTokens>> {
    let blocks = split_blocks(tokens);

    if blocks.len() > room_names.len() {
        return Err(TimelineError::TooManyBlocks {
            rooms: room_names.len(),
            blocks: blocks.len(),
        });
    }

    let filled = blocks.len();
    let mut blocks = blocks.into_iter();
    let rooms: Vec<RoomTokens> = room_names
        .iter()
        .map(|name| RoomTokens {
            room: name.as_ref().to_string(),
            tokens: blocks.next().unwrap_or_default(),
        })
        .collect();

    tracing::debug!(
        rooms = rooms.len(),
        blocks = filled,
        padded = rooms.len() - filled,
        tokens = tokens.len(),
        "segmented tokens into rooms"
    );

    Ok(rooms)
}

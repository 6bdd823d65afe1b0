//! Run report -- the document handed to the dashboard and booking consumers.
//!
//! A run either succeeds with every room reconstructed, or fails with the error
//! text and no rooms. There is no partially successful report.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::metadata::ScrapeFilters;
use crate::rooms::{RoomRecord, RunStatistics};

/// Version of the report document format.
pub const REPORT_VERSION: &str = "4.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub version: String,
    pub scraped_at: NaiveDateTime,
    pub success: bool,
    pub error: Option<String>,
    pub engine_version: String,
}

/// The scrape configuration echoed back in the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub filters: ScrapeFilters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub metadata: RunMetadata,
    pub config: ScrapeConfig,
    pub statistics: RunStatistics,
    pub rooms: Vec<RoomRecord>,
}

impl RunReport {
    pub fn success(config: ScrapeConfig, rooms: Vec<RoomRecord>, scraped_at: NaiveDateTime) -> Self {
        Self {
            metadata: RunMetadata::new(scraped_at, None),
            config,
            statistics: RunStatistics::from_rooms(&rooms),
            rooms,
        }
    }

    /// A failed run: zeroed statistics and no rooms.
    pub fn failure(config: ScrapeConfig, error: impl ToString, scraped_at: NaiveDateTime) -> Self {
        Self {
            metadata: RunMetadata::new(scraped_at, Some(error.to_string())),
            config,
            statistics: RunStatistics::default(),
            rooms: Vec::new(),
        }
    }
}

impl RunMetadata {
    fn new(scraped_at: NaiveDateTime, error: Option<String>) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            scraped_at,
            success: error.is_none(),
            error,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

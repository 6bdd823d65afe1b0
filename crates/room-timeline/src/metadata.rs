//! Static room metadata derived from the room name and the scrape filters.
//!
//! Room names follow the `<BUILDING>-<FLOOR>.<ROOM>-<SUFFIX>` convention, e.g.
//! `KGC-4.02-PR` is on level 4 of building `KGC`, and `LKSL-B1.05-GSR` is on
//! basement 1.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder for any attribute that could not be derived.
pub const UNKNOWN: &str = "Unknown";

lazy_static! {
    static ref FLOOR_RE: Regex =
        Regex::new(r"(?i)-(\d+|B\d+)\.").expect("Failed to compile FLOOR_RE regex");
}

/// Known building codes and their full names.
const BUILDINGS: &[(&str, &str)] = &[
    ("KGC", "Kwa Geok Choo Law Library"),
    ("YPHSL", "Yong Pung How School of Law"),
    ("LKCSB", "Lee Kong Chian School of Business"),
    ("SOA", "School of Accountancy"),
    ("SCIS", "School of Computing & Information Systems"),
    ("SOE", "School of Economics"),
    ("SOSS", "School of Social Sciences"),
    ("CIS", "College of Integrative Studies"),
    ("LKSL", "Li Ka Shing Library"),
    ("AB", "Administration Building"),
    ("SMUC", "SMU Connexion"),
];

/// Filters the scrape was run with. They double as metadata fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeFilters {
    #[serde(default)]
    pub buildings: Vec<String>,
    #[serde(default)]
    pub floors: Vec<String>,
    #[serde(default)]
    pub facility_types: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub capacity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMetadata {
    pub building_code: String,
    pub building: String,
    pub floor: String,
    pub facility_type: String,
    pub equipment: Vec<String>,
}

/// Full building name for a code, if known.
pub fn building_name(code: &str) -> Option<&'static str> {
    BUILDINGS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Human-readable floor parsed from a room name: `"Level 4"`, `"Basement 1"`.
pub fn floor_label(room_name: &str) -> Option<String> {
    let floor = FLOOR_RE.captures(room_name)?.get(1)?.as_str();
    match floor.strip_prefix(['B', 'b']) {
        Some(level) => Some(format!("Basement {}", level)),
        None => Some(format!("Level {}", floor)),
    }
}

/// Derive a room's metadata from its name, falling back to the scrape filters.
pub fn extract_room_metadata(room_name: &str, filters: &ScrapeFilters) -> RoomMetadata {
    let building_code = room_name.split('-').next().unwrap_or_default().to_string();

    let building = building_name(&building_code)
        .map(str::to_string)
        .or_else(|| filters.buildings.first().cloned())
        .unwrap_or_else(|| UNKNOWN.to_string());

    RoomMetadata {
        building,
        floor: floor_label(room_name).unwrap_or_else(|| UNKNOWN.to_string()),
        facility_type: filters
            .facility_types
            .first()
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        equipment: filters.equipment.clone(),
        building_code,
    }
}

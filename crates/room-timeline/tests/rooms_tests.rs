//! Tests for whole-run reconstruction: room records, metadata, statistics, reports.

use chrono::{NaiveDate, NaiveDateTime};
use room_timeline::clock::DAY_END;
use room_timeline::metadata::{building_name, extract_room_metadata, floor_label, UNKNOWN};
use room_timeline::report::REPORT_VERSION;
use room_timeline::{
    build_room_records, reconstruct, RunReport, RunStatistics, ScrapeConfig, ScrapeFilters,
    SlotStatus, TimelineError,
};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn filters() -> ScrapeFilters {
    ScrapeFilters {
        buildings: vec!["Li Ka Shing Library".to_string()],
        floors: vec![],
        facility_types: vec!["Group Study Room".to_string()],
        equipment: vec!["Projector".to_string(), "Whiteboard".to_string()],
        capacity: "6".to_string(),
    }
}

const ROOMS: [&str; 3] = ["KGC-4.02-PR", "LKSL-B1.05-GSR", "SCIS1-2.01-SR"];

/// KGC: fully booked inside the window. LKSL: free from 08:00 except 12-13.
/// SCIS1: no events, padded.
const TOKENS: [&str; 6] = [
    "(00:00-08:00) (not available)",
    "Booking Time: 08:00-22:00\nBooking Reference Number: R-1\nBooking Status: Confirmed",
    "(22:00-24:00) (not available)",
    "(00:00-08:00) (not available)",
    "Booking Time: 12:00-13:00\nBooking Reference Number: R-2\nUse Type: Academic",
    "(22:00-24:00) (not available)",
];

// ── reconstruct ─────────────────────────────────────────────────────────────

#[test]
fn single_room_scenario() {
    let rooms = reconstruct(&["R1"], &["(00:00-09:00) (not available)"]).unwrap();
    assert_eq!(rooms.len(), 1);
    let (name, timeline) = &rooms[0];
    assert_eq!(name, "R1");
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].status, SlotStatus::Unavailable);
    assert_eq!((timeline[1].start, timeline[1].end), (540, DAY_END));
    assert_eq!(timeline[1].status, SlotStatus::Free);
}

#[test]
fn room_without_block_gets_all_day_free() {
    let rooms = reconstruct(&["R1", "R2"], &["(00:00-09:00) (not available)"]).unwrap();
    let (name, timeline) = &rooms[1];
    assert_eq!(name, "R2");
    assert_eq!(timeline.len(), 1);
    assert_eq!((timeline[0].start, timeline[0].end), (0, DAY_END));
    assert_eq!(timeline[0].status, SlotStatus::Free);
}

#[test]
fn unrecognized_token_anywhere_fails_the_whole_run() {
    let tokens = [
        "(00:00-09:00) (not available)",
        "(00:00-09:00) (not available)",
        "Team lunch",
    ];
    assert_eq!(
        reconstruct(&["R1", "R2"], &tokens),
        Err(TimelineError::UnrecognizedToken("Team lunch".to_string()))
    );
}

// ── build_room_records ──────────────────────────────────────────────────────

#[test]
fn records_carry_metadata_and_summary() {
    let rooms = build_room_records(&ROOMS, &TOKENS, &filters(), now()).unwrap();
    assert_eq!(rooms.len(), 3);

    let kgc = &rooms[0];
    assert_eq!(kgc.id, "KGC-4.02-PR");
    assert_eq!(kgc.name, "KGC-4.02-PR");
    assert_eq!(kgc.building, "Kwa Geok Choo Law Library");
    assert_eq!(kgc.building_code, "KGC");
    assert_eq!(kgc.floor, "Level 4");
    assert_eq!(kgc.facility_type, "Group Study Room");
    assert_eq!(kgc.equipment, vec!["Projector", "Whiteboard"]);
    assert_eq!(kgc.availability_summary.free_slots_count, 0);

    let lksl = &rooms[1];
    assert_eq!(lksl.floor, "Basement 1");
    assert!(lksl.availability_summary.is_available_now);
    assert_eq!(lksl.availability_summary.free_slots_count, 2);

    let scis = &rooms[2];
    assert_eq!(scis.building_code, "SCIS1");
    // Unknown code falls back to the first building filter.
    assert_eq!(scis.building, "Li Ka Shing Library");
    assert_eq!(scis.timeslots.len(), 1);
    assert_eq!(scis.availability_summary.free_duration_minutes, DAY_END);
}

#[test]
fn statistics_split_booked_and_available_rooms() {
    let rooms = build_room_records(&ROOMS, &TOKENS, &filters(), now()).unwrap();
    assert_eq!(
        RunStatistics::from_rooms(&rooms),
        RunStatistics {
            total_rooms: 3,
            available_rooms: 2,
            booked_rooms: 1,
            partially_available_rooms: 2,
        }
    );
}

#[test]
fn records_are_deterministic() {
    let a = build_room_records(&ROOMS, &TOKENS, &filters(), now()).unwrap();
    let b = build_room_records(&ROOMS, &TOKENS, &filters(), now()).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn zero_rooms_is_an_empty_result() {
    let names: [&str; 0] = [];
    let tokens: [&str; 0] = [];
    let rooms = build_room_records(&names, &tokens, &filters(), now()).unwrap();
    assert!(rooms.is_empty());
    assert_eq!(RunStatistics::from_rooms(&rooms), RunStatistics::default());
}

// ── metadata ────────────────────────────────────────────────────────────────

#[test]
fn metadata_without_filters_is_unknown() {
    let meta = extract_room_metadata("XYZ-Hall", &ScrapeFilters::default());
    assert_eq!(meta.building_code, "XYZ");
    assert_eq!(meta.building, UNKNOWN);
    assert_eq!(meta.floor, UNKNOWN);
    assert_eq!(meta.facility_type, UNKNOWN);
    assert!(meta.equipment.is_empty());
}

#[test]
fn floor_labels() {
    assert_eq!(floor_label("SOE-3.12-SR").as_deref(), Some("Level 3"));
    assert_eq!(floor_label("LKSL-B2.01-GSR").as_deref(), Some("Basement 2"));
    assert_eq!(floor_label("Auditorium"), None);
}

#[test]
fn building_lookup() {
    assert_eq!(building_name("SMUC"), Some("SMU Connexion"));
    assert_eq!(building_name("NOPE"), None);
}

// ── report ──────────────────────────────────────────────────────────────────

#[test]
fn success_report() {
    let rooms = build_room_records(&ROOMS, &TOKENS, &filters(), now()).unwrap();
    let report = RunReport::success(ScrapeConfig::default(), rooms, now());

    assert!(report.metadata.success);
    assert_eq!(report.metadata.error, None);
    assert_eq!(report.metadata.version, REPORT_VERSION);
    assert_eq!(report.statistics.total_rooms, 3);
    assert_eq!(report.rooms.len(), 3);
}

#[test]
fn failure_report_has_no_rooms() {
    let err = reconstruct(&["R1"], &["garbage"]).unwrap_err();
    let report = RunReport::failure(ScrapeConfig::default(), &err, now());

    assert!(!report.metadata.success);
    assert_eq!(report.metadata.error.as_deref(), Some("Unrecognized token: garbage"));
    assert_eq!(report.statistics, RunStatistics::default());
    assert!(report.rooms.is_empty());
}

#[test]
fn report_roundtrips_through_json() {
    let rooms = build_room_records(&ROOMS, &TOKENS, &filters(), now()).unwrap();
    let report = RunReport::success(ScrapeConfig::default(), rooms, now());
    let json = serde_json::to_string_pretty(&report).unwrap();
    let back: RunReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

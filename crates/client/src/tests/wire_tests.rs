// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::wire::{
    CandidatePoolsPayload, RosterPayload, SavedRosterDto, WireError, normalize_candidates,
    normalize_saved_roster, normalize_snapshot,
};
use skyroster_domain::{
    AttendantCategory, PersonId, PilotRank, RosterSnapshot, SeatClass, StorageKind,
};

fn parse_payload(json: &str) -> RosterPayload {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_numeric_and_string_ids_normalize_identically() {
    let payload: RosterPayload = parse_payload(
        r#"{
            "flight_info": {"number": "TK1234", "vehicle": "Boeing 737"},
            "crew": [
                {"type": "PILOT", "original_id": 5, "name": "Ada", "role": "Senior"},
                {"type": "PILOT", "original_id": "5", "name": "Ada Again", "role": "Senior"}
            ],
            "passengers": []
        }"#,
    );

    let snapshot: RosterSnapshot = normalize_snapshot(&payload).unwrap();

    // Normalization happens here; the reconciler's dedup pass would
    // collapse the two rows because their keys are equal.
    assert_eq!(snapshot.pilots.len(), 2);
    assert_eq!(snapshot.pilots[0].id, snapshot.pilots[1].id);
    assert_eq!(snapshot.pilots[0].id, PersonId::new("5"));
}

#[test]
fn test_vehicle_accepts_object_and_label_shapes() {
    let object_form: RosterPayload = parse_payload(
        r#"{"flight_info": {"number": "TK1", "vehicle": {"type": "Boeing 777"}}}"#,
    );
    let label_form: RosterPayload =
        parse_payload(r#"{"flight_info": {"number": "TK1", "vehicle": "Boeing 777"}}"#);

    let from_object: RosterSnapshot = normalize_snapshot(&object_form).unwrap();
    let from_label: RosterSnapshot = normalize_snapshot(&label_form).unwrap();

    assert_eq!(from_object.flight_info.vehicle_type, "Boeing 777");
    assert_eq!(from_label.flight_info.vehicle_type, "Boeing 777");
}

#[test]
fn test_missing_vehicle_defaults_to_unknown() {
    let payload: RosterPayload = parse_payload(r#"{"flight_info": {"number": "TK1"}}"#);
    let snapshot: RosterSnapshot = normalize_snapshot(&payload).unwrap();
    assert_eq!(snapshot.flight_info.vehicle_type, "Unknown");
}

#[test]
fn test_seat_markers_normalize_to_pending() {
    let payload: RosterPayload = parse_payload(
        r#"{
            "flight_info": {"number": "TK1234"},
            "passengers": [
                {"id": 1, "name": "A", "age": 30, "seat_number": "STANDBY"},
                {"id": 2, "name": "B", "age": 1, "seat_number": "INFANT", "parent_id": 1},
                {"id": 3, "name": "C", "age": 30, "seat_number": "12C"}
            ]
        }"#,
    );

    let snapshot: RosterSnapshot = normalize_snapshot(&payload).unwrap();

    assert_eq!(snapshot.passengers[0].seat, None);
    assert_eq!(snapshot.passengers[1].seat, None);
    assert_eq!(
        snapshot.passengers[1].parent_id,
        Some(PersonId::new("1"))
    );
    assert_eq!(
        snapshot.passengers[2].seat.map(|s| s.to_string()),
        Some(String::from("12C"))
    );
}

#[test]
fn test_infant_with_real_seat_code_loses_it() {
    let payload: RosterPayload = parse_payload(
        r#"{
            "flight_info": {"number": "TK1234"},
            "passengers": [
                {"id": 2, "name": "Baby", "age": 2, "seat_number": "12C", "parent_id": 1}
            ]
        }"#,
    );

    let snapshot: RosterSnapshot = normalize_snapshot(&payload).unwrap();

    assert_eq!(snapshot.passengers[0].seat, None);
}

#[test]
fn test_unparseable_seat_code_is_an_error() {
    let payload: RosterPayload = parse_payload(
        r#"{
            "flight_info": {"number": "TK1234"},
            "passengers": [{"id": 1, "name": "A", "age": 30, "seat_number": "WINDOW"}]
        }"#,
    );

    assert!(matches!(
        normalize_snapshot(&payload),
        Err(WireError::InvalidSeatCode { .. })
    ));
}

#[test]
fn test_empty_flight_number_is_an_error() {
    let payload: RosterPayload = parse_payload(r#"{"flight_info": {"number": "  "}}"#);
    assert!(matches!(
        normalize_snapshot(&payload),
        Err(WireError::InvalidFlightNumber(_))
    ));
}

#[test]
fn test_crew_splits_by_type_discriminator() {
    let payload: RosterPayload = parse_payload(
        r#"{
            "flight_info": {"number": "TK1234"},
            "crew": [
                {"type": "PILOT", "original_id": 1, "name": "Ada", "role": "Senior"},
                {"type": "CABIN", "original_id": 10, "name": "Cleo", "role": "Chief"},
                {"type": "CABIN", "original_id": 11, "name": "Chef Deniz", "role": "Junior", "attendant_type": "CHEF"}
            ]
        }"#,
    );

    let snapshot: RosterSnapshot = normalize_snapshot(&payload).unwrap();

    assert_eq!(snapshot.pilots.len(), 1);
    assert_eq!(snapshot.pilots[0].rank, PilotRank::Senior);
    assert_eq!(snapshot.cabin_crew.len(), 2);
    assert!(snapshot.cabin_crew[0].role.is_chief());
    assert_eq!(snapshot.cabin_crew[1].category, AttendantCategory::Chef);
}

#[test]
fn test_booked_class_defaults_to_economy() {
    let payload: RosterPayload = parse_payload(
        r#"{
            "flight_info": {"number": "TK1234"},
            "passengers": [
                {"id": 1, "name": "A", "age": 30, "type": "business"},
                {"id": 2, "name": "B", "age": 30, "type": "economy"},
                {"id": 3, "name": "C", "age": 30}
            ]
        }"#,
    );

    let snapshot: RosterSnapshot = normalize_snapshot(&payload).unwrap();

    assert_eq!(snapshot.passengers[0].seat_class, SeatClass::Business);
    assert_eq!(snapshot.passengers[1].seat_class, SeatClass::Economy);
    assert_eq!(snapshot.passengers[2].seat_class, SeatClass::Economy);
}

#[test]
fn test_departure_datetime_parses_rfc3339() {
    let payload: RosterPayload = parse_payload(
        r#"{"flight_info": {"number": "TK1", "datetime": "2026-03-14T09:30:00Z"}}"#,
    );
    let snapshot: RosterSnapshot = normalize_snapshot(&payload).unwrap();
    assert!(snapshot.flight_info.departure.is_some());

    let bad: RosterPayload =
        parse_payload(r#"{"flight_info": {"number": "TK1", "datetime": "next Tuesday"}}"#);
    let lenient: RosterSnapshot = normalize_snapshot(&bad).unwrap();
    assert!(lenient.flight_info.departure.is_none());
}

#[test]
fn test_shared_flight_tag_requires_is_shared() {
    let shared: RosterPayload = parse_payload(
        r#"{"flight_info": {"number": "TK1", "shared_flight": {"is_shared": true, "airline": "Partner Air", "flight_number": "PA99"}}}"#,
    );
    let snapshot: RosterSnapshot = normalize_snapshot(&shared).unwrap();
    assert_eq!(
        snapshot.flight_info.shared_with.as_ref().map(|s| s.airline.as_str()),
        Some("Partner Air")
    );

    let unshared: RosterPayload = parse_payload(
        r#"{"flight_info": {"number": "TK1", "shared_flight": {"is_shared": false, "airline": "Partner Air"}}}"#,
    );
    let none: RosterSnapshot = normalize_snapshot(&unshared).unwrap();
    assert!(none.flight_info.shared_with.is_none());
}

#[test]
fn test_candidate_range_accepts_stringified_numbers() {
    let payload: CandidatePoolsPayload = serde_json::from_str(
        r#"{
            "pilots": [
                {"pilot_id": 3, "full_name": "Can", "vehicle_types": ["Boeing 737"], "allowed_range": "5000", "seniority_level": "junior"},
                {"pilot_id": "4", "full_name": "Demir", "allowed_range": 3200.5}
            ],
            "attendants": [
                {"attendant_id": 12, "full_name": "Ece", "attendant_type": "REGULAR"}
            ]
        }"#,
    )
    .unwrap();

    let pools = normalize_candidates(&payload);

    assert_eq!(pools.pilots[0].allowed_range_km, Some(5000.0));
    assert_eq!(pools.pilots[0].rank, PilotRank::Junior);
    assert_eq!(pools.pilots[1].allowed_range_km, Some(3200.5));
    assert_eq!(pools.pilots[1].id, PersonId::new("4"));
    assert_eq!(pools.attendants[0].category, AttendantCategory::Regular);
}

#[test]
fn test_saved_roster_normalization() {
    let dto: SavedRosterDto = serde_json::from_str(
        r#"{"id": 7, "flight_number": "TK1234", "db_type": "NOSQL", "saved_at": "2026-03-14T12:00:00Z"}"#,
    )
    .unwrap();

    let summary = normalize_saved_roster(&dto).unwrap();

    assert_eq!(summary.id, "7");
    assert_eq!(summary.storage_kind, StorageKind::Document);
    assert!(summary.saved_at.is_some());

    let bad: SavedRosterDto =
        serde_json::from_str(r#"{"id": 8, "flight_number": "TK1", "db_type": "GRAPH"}"#).unwrap();
    assert!(matches!(
        normalize_saved_roster(&bad),
        Err(WireError::InvalidStorageKind(_))
    ));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_passenger;
use crate::{ConnectionSummary, Relation, resolve_connections};
use skyroster_domain::{Passenger, PersonId};

#[test]
fn test_guardian_line_shows_name_and_seat() {
    let guardian: Passenger = create_test_passenger("101", "John", 35, Some("1A"));
    let mut infant: Passenger = create_test_passenger("102", "Baby", 1, None);
    infant.parent_id = Some(PersonId::new("101"));

    let all: Vec<Passenger> = vec![guardian, infant.clone()];
    let summary: ConnectionSummary = resolve_connections(&infant, &all);

    assert!(summary.has_connection);
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.lines[0].relation, Relation::Guardian);
    assert_eq!(summary.lines[0].label, "John (1A)");
}

#[test]
fn test_guardian_without_seat_shows_no_seat() {
    let guardian: Passenger = create_test_passenger("101", "John", 35, None);
    let mut infant: Passenger = create_test_passenger("102", "Baby", 1, None);
    infant.parent_id = Some(PersonId::new("101"));

    let all: Vec<Passenger> = vec![guardian, infant.clone()];
    let summary: ConnectionSummary = resolve_connections(&infant, &all);

    assert_eq!(summary.lines[0].label, "John (No Seat)");
}

#[test]
fn test_missing_guardian_falls_back_to_unknown_id() {
    let mut infant: Passenger = create_test_passenger("102", "Baby", 1, None);
    infant.parent_id = Some(PersonId::new("101"));

    let all: Vec<Passenger> = vec![infant.clone()];
    let summary: ConnectionSummary = resolve_connections(&infant, &all);

    assert!(summary.has_connection);
    assert_eq!(summary.lines[0].label, "Unknown ID: 101");
}

#[test]
fn test_companion_lines_follow_declaration_order() {
    let mut traveler: Passenger = create_test_passenger("1", "Alice", 28, Some("10C"));
    traveler.affiliated_ids = vec![PersonId::new("2"), PersonId::new("3")];
    let friend: Passenger = create_test_passenger("2", "Bob", 30, Some("10D"));

    let all: Vec<Passenger> = vec![traveler.clone(), friend];
    let summary: ConnectionSummary = resolve_connections(&traveler, &all);

    assert_eq!(summary.lines.len(), 2);
    assert_eq!(summary.lines[0].relation, Relation::Companion);
    assert_eq!(summary.lines[0].label, "Bob (10D)");
    assert_eq!(summary.lines[1].label, "Unknown ID: 3");
}

#[test]
fn test_guardian_line_precedes_companions() {
    let guardian: Passenger = create_test_passenger("101", "John", 35, Some("2C"));
    let friend: Passenger = create_test_passenger("2", "Bob", 30, None);
    let mut child: Passenger = create_test_passenger("102", "Kid", 2, None);
    child.parent_id = Some(PersonId::new("101"));
    child.affiliated_ids = vec![PersonId::new("2")];

    let all: Vec<Passenger> = vec![guardian, friend, child.clone()];
    let summary: ConnectionSummary = resolve_connections(&child, &all);

    assert_eq!(summary.lines.len(), 2);
    assert_eq!(summary.lines[0].relation, Relation::Guardian);
    assert_eq!(summary.lines[1].relation, Relation::Companion);
}

#[test]
fn test_unlinked_passenger_has_no_connection() {
    let loner: Passenger = create_test_passenger("1", "Alice", 28, Some("10C"));

    let all: Vec<Passenger> = vec![loner.clone()];
    let summary: ConnectionSummary = resolve_connections(&loner, &all);

    assert!(!summary.has_connection);
    assert!(summary.lines.is_empty());
}

#[test]
fn test_resolver_matches_numeric_and_string_id_forms() {
    let guardian: Passenger = create_test_passenger("101", "John", 35, Some("1A"));
    let mut infant: Passenger = create_test_passenger("102", "Baby", 1, None);
    infant.parent_id = Some(PersonId::from(101));

    let all: Vec<Passenger> = vec![guardian, infant.clone()];
    let summary: ConnectionSummary = resolve_connections(&infant, &all);

    assert_eq!(summary.lines[0].label, "John (1A)");
}

#[test]
fn test_resolver_is_idempotent() {
    let mut traveler: Passenger = create_test_passenger("1", "Alice", 28, None);
    traveler.affiliated_ids = vec![PersonId::new("9")];

    let all: Vec<Passenger> = vec![traveler.clone()];
    let first: ConnectionSummary = resolve_connections(&traveler, &all);
    let second: ConnectionSummary = resolve_connections(&traveler, &all);

    assert_eq!(first, second);
}

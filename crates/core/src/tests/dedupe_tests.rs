// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_pilot;
use crate::{dedupe_by_id, dedupe_by_key};
use skyroster_domain::{PersonId, Pilot, PilotRank};

#[test]
fn test_dedupe_keeps_first_occurrence_in_order() {
    let pilots: Vec<Pilot> = vec![
        create_test_pilot("1", "First", PilotRank::Senior),
        create_test_pilot("2", "Second", PilotRank::Junior),
        create_test_pilot("1", "First Again", PilotRank::Trainee),
        create_test_pilot("3", "Third", PilotRank::Senior),
        create_test_pilot("2", "Second Again", PilotRank::Senior),
    ];

    let unique: Vec<Pilot> = dedupe_by_id(pilots);

    assert_eq!(unique.len(), 3);
    assert_eq!(unique[0].name, "First");
    assert_eq!(unique[1].name, "Second");
    assert_eq!(unique[2].name, "Third");
}

#[test]
fn test_dedupe_is_idempotent() {
    let pilots: Vec<Pilot> = vec![
        create_test_pilot("1", "First", PilotRank::Senior),
        create_test_pilot("1", "Duplicate", PilotRank::Junior),
        create_test_pilot("2", "Second", PilotRank::Senior),
    ];

    let once: Vec<Pilot> = dedupe_by_id(pilots);
    let twice: Vec<Pilot> = dedupe_by_id(once.clone());

    assert_eq!(once, twice);
}

#[test]
fn test_dedupe_empty_input_yields_empty_output() {
    let unique: Vec<Pilot> = dedupe_by_id(Vec::new());
    assert!(unique.is_empty());
}

#[test]
fn test_dedupe_treats_numeric_and_string_ids_as_equal() {
    let records: Vec<PersonId> = vec![PersonId::from(5), PersonId::new("5"), PersonId::new("6")];

    let unique: Vec<PersonId> = dedupe_by_key(records, Clone::clone);

    assert_eq!(unique.len(), 2);
    assert_eq!(unique[0].value(), "5");
    assert_eq!(unique[1].value(), "6");
}

#[test]
fn test_dedupe_with_custom_key() {
    let words: Vec<&str> = vec!["alpha", "apricot", "bravo", "cherry", "banana"];

    let unique: Vec<&str> = dedupe_by_key(words, |w| w.chars().next());

    assert_eq!(unique, vec!["alpha", "bravo", "cherry"]);
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AircraftConfig, plan_layout};
use skyroster_domain::{DomainError, SeatClass, SeatCode, SeatColumn};
use std::str::FromStr;

#[test]
fn test_wide_body_profile_for_777_labels() {
    for label in ["Boeing 777", "boeing 777-300ER", "B777"] {
        let config: AircraftConfig = plan_layout(label);
        assert_eq!(config.name, "Boeing 777");
        assert_eq!(config.business_rows, (1..=6).collect::<Vec<u16>>());
        assert_eq!(config.economy_rows, (7..=41).collect::<Vec<u16>>());
        assert_eq!(config.total_crew_stations, 10);
        assert_eq!(config.front_crew_stations, 5);
        assert_eq!(config.rear_crew_stations, 5);
    }
}

#[test]
fn test_narrow_body_profile_for_737_labels() {
    for label in ["Boeing 737", "b737-800", "737 MAX"] {
        let config: AircraftConfig = plan_layout(label);
        assert_eq!(config.name, "Boeing 737");
        assert_eq!(config.business_rows, (1..=4).collect::<Vec<u16>>());
        assert_eq!(config.economy_rows, (5..=33).collect::<Vec<u16>>());
        assert_eq!(config.total_crew_stations, 7);
        assert_eq!(config.front_crew_stations, 4);
        assert_eq!(config.rear_crew_stations, 3);
    }
}

#[test]
fn test_unknown_labels_fall_back_to_default_profile() {
    for label in ["Airbus A320", "", "Concorde"] {
        let config: AircraftConfig = plan_layout(label);
        assert_eq!(config.name, "Airbus A320");
        assert_eq!(config.business_rows, (1..=4).collect::<Vec<u16>>());
        assert_eq!(config.economy_rows, (5..=33).collect::<Vec<u16>>());
        assert_eq!(config.total_crew_stations, 6);
        assert_eq!(config.front_crew_stations, 3);
        assert_eq!(config.rear_crew_stations, 3);
    }
}

#[test]
fn test_seat_counts_per_profile() {
    let wide: AircraftConfig = plan_layout("Boeing 777");
    assert_eq!(wide.business_seat_count(), 24);
    assert_eq!(wide.economy_seat_count(), 210);

    let narrow: AircraftConfig = plan_layout("Boeing 737");
    assert_eq!(narrow.business_seat_count(), 16);
    assert_eq!(narrow.economy_seat_count(), 174);
}

#[test]
fn test_business_rows_skip_middle_columns() {
    let config: AircraftConfig = plan_layout("Boeing 737");

    assert!(config.contains(SeatCode::from_str("1A").unwrap()));
    assert!(config.contains(SeatCode::from_str("1C").unwrap()));
    assert!(!config.contains(SeatCode::from_str("1B").unwrap()));
    assert!(!config.contains(SeatCode::from_str("4E").unwrap()));
}

#[test]
fn test_economy_rows_install_all_six_columns() {
    let config: AircraftConfig = plan_layout("Boeing 737");

    for column in SeatColumn::ALL {
        assert!(config.contains(SeatCode::new(5, column).unwrap()));
    }
}

#[test]
fn test_rows_outside_profile_are_rejected() {
    let config: AircraftConfig = plan_layout("Boeing 737");

    assert!(!config.contains(SeatCode::from_str("34A").unwrap()));
    assert_eq!(config.class_for_row(34), None);
    assert_eq!(config.class_for_row(4), Some(SeatClass::Business));
    assert_eq!(config.class_for_row(5), Some(SeatClass::Economy));
}

#[test]
fn test_seat_codes_enumerates_full_grid_in_order() {
    let config: AircraftConfig = plan_layout("Boeing 777");
    let codes: Vec<(SeatCode, SeatClass)> = config.seat_codes();

    assert_eq!(codes.len(), 24 + 210);
    assert_eq!(codes[0].0.to_string(), "1A");
    assert_eq!(codes[0].1, SeatClass::Business);
    assert_eq!(codes[24].0.to_string(), "7A");
    assert_eq!(codes[24].1, SeatClass::Economy);
}

#[test]
fn test_validate_seat_reports_the_profile_name() {
    let config: AircraftConfig = plan_layout("Boeing 737");

    assert!(config.validate_seat(SeatCode::from_str("10C").unwrap()).is_ok());
    assert!(matches!(
        config.validate_seat(SeatCode::from_str("34A").unwrap()),
        Err(DomainError::SeatOutsideLayout { .. })
    ));
}

#[test]
fn test_planner_is_deterministic() {
    assert_eq!(plan_layout("Boeing 777"), plan_layout("BOEING 777"));
    assert_eq!(plan_layout("A320"), plan_layout("unrecognized"));
}

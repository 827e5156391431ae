// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use skyroster_domain::{
    AttendantCategory, CabinCrewMember, CabinRole, FlightNumber, Passenger, PersonId, Pilot,
    PilotRank, SeatClass, SeatCode,
};
use std::str::FromStr;

pub fn create_test_pilot(id: &str, name: &str, rank: PilotRank) -> Pilot {
    Pilot::new(PersonId::new(id), name.to_string(), rank)
}

pub fn create_test_attendant(id: &str, name: &str, role: CabinRole) -> CabinCrewMember {
    CabinCrewMember::new(
        PersonId::new(id),
        name.to_string(),
        role,
        AttendantCategory::Regular,
    )
}

pub fn create_test_passenger(id: &str, name: &str, age: u8, seat: Option<&str>) -> Passenger {
    Passenger {
        id: PersonId::new(id),
        flight_number: FlightNumber::new("TK1234").unwrap(),
        name: name.to_string(),
        age,
        gender: String::from("Female"),
        nationality: String::from("Turkish"),
        seat_class: SeatClass::Economy,
        seat: seat.map(|s| SeatCode::from_str(s).unwrap()),
        parent_id: None,
        affiliated_ids: Vec::new(),
    }
}

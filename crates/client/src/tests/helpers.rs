// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::wire::{
    CandidatePoolsPayload, CrewMemberDto, FlightInfoDto, PassengerDto, PilotCandidateDto,
    RawId, RosterPayload, VehicleDto,
};
use crate::{InMemoryService, Session};
use skyroster_domain::{AttendantCandidate, AttendantCategory, PersonId, PilotCandidate, PilotRank};

pub fn create_test_session() -> Session {
    Session::new(String::from("token-123"))
}

pub fn crew_dto(kind: &str, id: i64, name: &str, role: &str) -> CrewMemberDto {
    CrewMemberDto {
        kind: kind.to_string(),
        original_id: RawId::Number(id),
        name: name.to_string(),
        role: Some(role.to_string()),
        attendant_type: None,
    }
}

pub fn passenger_dto(id: i64, name: &str, age: u8, seat: Option<&str>) -> PassengerDto {
    PassengerDto {
        id: RawId::Number(id),
        name: name.to_string(),
        age,
        gender: Some(String::from("Female")),
        nationality: Some(String::from("Turkish")),
        seat_class: Some(String::from("economy")),
        seat_number: seat.map(str::to_string),
        affiliated_passengers: Vec::new(),
        parent_id: None,
    }
}

pub fn roster_payload(
    number: &str,
    vehicle: &str,
    crew: Vec<CrewMemberDto>,
    passengers: Vec<PassengerDto>,
) -> RosterPayload {
    RosterPayload {
        flight_info: FlightInfoDto {
            number: number.to_string(),
            datetime: Some(String::from("2026-03-14T09:30:00Z")),
            duration: Some(String::from("2h 45m")),
            distance: None,
            source: None,
            destination: None,
            vehicle: Some(VehicleDto::Label(vehicle.to_string())),
            capacity: Some(190),
            menu: Some(String::from("Standard")),
            shared_flight: None,
        },
        crew,
        passengers,
    }
}

/// Seeds TK1234 (Boeing 737) with two senior pilots, one chief and one
/// junior attendant, and two passengers.
pub fn seeded_service() -> InMemoryService {
    let service: InMemoryService = InMemoryService::new();
    service.seed_roster(roster_payload(
        "TK1234",
        "Boeing 737",
        vec![
            crew_dto("PILOT", 1, "Ada Captain", "Senior"),
            crew_dto("PILOT", 2, "Ben Officer", "Senior"),
            crew_dto("CABIN", 10, "Cleo Chief", "Chief"),
            crew_dto("CABIN", 11, "Dara Junior", "Junior"),
        ],
        vec![
            passenger_dto(20, "Eda Traveler", 30, Some("10C")),
            passenger_dto(21, "Firat Standby", 25, Some("STANDBY")),
        ],
    ));
    service.seed_crew_directory(vec![
        crew_dto("PILOT", 1, "Ada Captain", "Senior"),
        crew_dto("PILOT", 2, "Ben Officer", "Senior"),
        crew_dto("PILOT", 3, "Can Reserve", "Junior"),
        crew_dto("PILOT", 4, "Demir Reserve", "Senior"),
        crew_dto("CABIN", 10, "Cleo Chief", "Chief"),
        crew_dto("CABIN", 11, "Dara Junior", "Junior"),
        crew_dto("CABIN", 12, "Ece Reserve", "Regular"),
    ]);
    service
}

pub fn pilot_candidate(id: i64, rank: PilotRank) -> PilotCandidate {
    PilotCandidate {
        id: PersonId::from(id),
        name: format!("Candidate {id}"),
        rank,
        licensed_vehicles: vec![String::from("Boeing 737")],
        allowed_range_km: Some(5000.0),
        age: Some(40),
        nationality: Some(String::from("Turkish")),
    }
}

pub fn attendant_candidate(id: i64, category: AttendantCategory) -> AttendantCandidate {
    AttendantCandidate {
        id: PersonId::from(id),
        name: format!("Candidate {id}"),
        category,
        licensed_vehicles: vec![String::from("Boeing 737")],
        known_recipes: Vec::new(),
    }
}

pub fn candidate_pools_payload() -> CandidatePoolsPayload {
    CandidatePoolsPayload {
        pilots: vec![PilotCandidateDto {
            pilot_id: RawId::Number(3),
            full_name: String::from("Can Reserve"),
            vehicle_types: vec![String::from("Boeing 737")],
            allowed_range: None,
            seniority_level: Some(String::from("Junior")),
            age: Some(35),
            nationality: Some(String::from("Turkish")),
        }],
        attendants: Vec::new(),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire payloads and their normalization into canonical entities.
//!
//! The remote endpoints are lenient about shapes: identifiers arrive as
//! numbers or strings, the vehicle field is sometimes an object and
//! sometimes a bare label, and placeholder markers ride in the seat
//! field. Every one of those tolerances is resolved here, once, at the
//! boundary; canonical types never branch on which field shape was
//! present.

use serde::{Deserialize, Serialize};
use skyroster_domain::{
    AttendantCandidate, AttendantCategory, CabinCrewMember, CabinRole, FlightInfo, FlightNumber,
    Passenger, PersonId, Pilot, PilotCandidate, PilotRank, RosterSnapshot, RouteEndpoint,
    SavedRosterSummary, SeatClass, SeatCode, SharedFlight, StorageKind,
};
use std::str::FromStr;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::warn;

/// Seat-field marker for a passenger awaiting automatic assignment.
const SEAT_MARKER_STANDBY: &str = "STANDBY";
/// Seat-field marker for an infant riding on a guardian's lap.
const SEAT_MARKER_INFANT: &str = "INFANT";

/// Errors raised while normalizing a wire payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The payload's flight number is empty or invalid.
    #[error("Payload flight number is invalid: {0}")]
    InvalidFlightNumber(String),

    /// A passenger record carries a seat value that is neither a
    /// marker nor a parseable seat code.
    #[error("Passenger {passenger_id} carries unparseable seat code '{code}'")]
    InvalidSeatCode {
        /// The passenger's raw identifier.
        passenger_id: String,
        /// The unparseable seat value.
        code: String,
    },

    /// An archive entry carries an unknown storage kind tag.
    #[error("Unknown storage kind tag '{0}'")]
    InvalidStorageKind(String),
}

/// An identifier that arrives as a number from some endpoints and a
/// string from others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// Numeric identifier form.
    Number(i64),
    /// String identifier form.
    Text(String),
}

impl RawId {
    /// Normalizes the identifier into the canonical string form.
    #[must_use]
    pub fn normalize(&self) -> PersonId {
        match self {
            Self::Number(n) => PersonId::from(*n),
            Self::Text(s) => PersonId::new(s),
        }
    }
}

/// A numeric field that some endpoints serialize as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// Native numeric form.
    Number(f64),
    /// Stringified numeric form.
    Text(String),
}

impl RawNumber {
    /// Returns the numeric value, if the text form parses.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// The vehicle field: an object on newer endpoints, a bare label on
/// older ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleDto {
    /// Object form: `{"type": "Boeing 737"}`.
    Object {
        /// The aircraft type label.
        #[serde(rename = "type")]
        vehicle_type: String,
    },
    /// Bare label form: `"Boeing 737"`.
    Label(String),
}

impl VehicleDto {
    /// Returns the aircraft type label regardless of shape.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Object { vehicle_type } => vehicle_type,
            Self::Label(label) => label,
        }
    }
}

/// One endpoint of the route in a flight-info payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDto {
    /// The airport code.
    #[serde(default)]
    pub code: Option<String>,
    /// The city name.
    #[serde(default)]
    pub city: Option<String>,
    /// The airport name.
    #[serde(default)]
    pub name: Option<String>,
}

/// The codeshare block in a flight-info payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFlightDto {
    /// Whether the leg is shared at all.
    #[serde(default)]
    pub is_shared: bool,
    /// The partner airline's name.
    #[serde(default)]
    pub airline: Option<String>,
    /// The partner airline's flight number.
    #[serde(default)]
    pub flight_number: Option<String>,
}

/// The flight-info block of a roster payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightInfoDto {
    /// The flight number.
    pub number: String,
    /// The scheduled departure as an RFC 3339 timestamp.
    #[serde(default)]
    pub datetime: Option<String>,
    /// The flight duration label.
    #[serde(default)]
    pub duration: Option<String>,
    /// The route distance in kilometers.
    #[serde(default)]
    pub distance: Option<RawNumber>,
    /// The departure endpoint.
    #[serde(default)]
    pub source: Option<EndpointDto>,
    /// The arrival endpoint.
    #[serde(default)]
    pub destination: Option<EndpointDto>,
    /// The aircraft type, as an object or a bare label.
    #[serde(default)]
    pub vehicle: Option<VehicleDto>,
    /// The aircraft's passenger capacity.
    #[serde(default)]
    pub capacity: Option<u32>,
    /// The on-board menu label.
    #[serde(default)]
    pub menu: Option<String>,
    /// The codeshare block.
    #[serde(default)]
    pub shared_flight: Option<SharedFlightDto>,
}

/// One entry of the mixed crew list in a roster payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMemberDto {
    /// The type discriminator: `PILOT` or `CABIN`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The crew member's directory identifier.
    pub original_id: RawId,
    /// The crew member's name.
    pub name: String,
    /// The rank or role label.
    #[serde(default)]
    pub role: Option<String>,
    /// The attendant category label, when the endpoint provides one.
    #[serde(default)]
    pub attendant_type: Option<String>,
}

/// One passenger entry in a roster payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerDto {
    /// The passenger's identifier.
    pub id: RawId,
    /// The passenger's name.
    pub name: String,
    /// The passenger's age in years.
    pub age: u8,
    /// The passenger's gender.
    #[serde(default)]
    pub gender: Option<String>,
    /// The passenger's nationality.
    #[serde(default)]
    pub nationality: Option<String>,
    /// The booked class: `business` or `economy`.
    #[serde(rename = "type", default)]
    pub seat_class: Option<String>,
    /// The seat code, or a `STANDBY`/`INFANT` marker.
    #[serde(default)]
    pub seat_number: Option<String>,
    /// Companion passenger identifiers.
    #[serde(default)]
    pub affiliated_passengers: Vec<RawId>,
    /// The seated guardian's identifier, for infants.
    #[serde(default)]
    pub parent_id: Option<RawId>,
}

/// The roster payload returned by the detail and create endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPayload {
    /// The flight-info block.
    pub flight_info: FlightInfoDto,
    /// The mixed crew list, tagged with the PILOT/CABIN discriminator.
    #[serde(default)]
    pub crew: Vec<CrewMemberDto>,
    /// The passenger list.
    #[serde(default)]
    pub passengers: Vec<PassengerDto>,
}

/// The response of the narrow pilot-update endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPilotsPayload {
    /// The cockpit assignment after the update.
    pub current_pilots: Vec<CrewMemberDto>,
}

/// One pilot entry of the available-crew payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotCandidateDto {
    /// The candidate's directory identifier.
    pub pilot_id: RawId,
    /// The candidate's full name.
    pub full_name: String,
    /// Aircraft types the candidate is licensed for.
    #[serde(default)]
    pub vehicle_types: Vec<String>,
    /// The candidate's maximum range, numeric or stringified.
    #[serde(default)]
    pub allowed_range: Option<RawNumber>,
    /// The candidate's seniority label.
    #[serde(default)]
    pub seniority_level: Option<String>,
    /// The candidate's age.
    #[serde(default)]
    pub age: Option<u8>,
    /// The candidate's nationality.
    #[serde(default)]
    pub nationality: Option<String>,
}

/// One attendant entry of the available-crew payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendantCandidateDto {
    /// The candidate's directory identifier.
    pub attendant_id: RawId,
    /// The candidate's full name.
    pub full_name: String,
    /// Aircraft types the candidate is licensed for.
    #[serde(default)]
    pub vehicle_types: Vec<String>,
    /// The attendant category label.
    #[serde(default)]
    pub attendant_type: Option<String>,
    /// Recipes a chef candidate can prepare.
    #[serde(default)]
    pub known_recipes: Vec<String>,
}

/// The available-crew payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidatePoolsPayload {
    /// Pilots available for this flight.
    #[serde(default)]
    pub pilots: Vec<PilotCandidateDto>,
    /// Attendants available for this flight.
    #[serde(default)]
    pub attendants: Vec<AttendantCandidateDto>,
}

/// The normalized candidate pools.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePools {
    /// Pilots available for this flight.
    pub pilots: Vec<PilotCandidate>,
    /// Attendants available for this flight.
    pub attendants: Vec<AttendantCandidate>,
}

/// One entry of the saved-roster archive listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRosterDto {
    /// The archive entry's opaque identifier.
    pub id: RawId,
    /// The flight the archived roster belongs to.
    pub flight_number: String,
    /// The storage kind tag: `SQL` or `NOSQL`.
    pub db_type: String,
    /// When the roster was archived, as an RFC 3339 timestamp.
    #[serde(default)]
    pub saved_at: Option<String>,
}

/// Normalizes a roster payload into a canonical snapshot.
///
/// The mixed crew list is split by its PILOT/CABIN discriminator,
/// identifiers are normalized to string form, seat markers become
/// pending seats, and the infant-seating invariant is enforced. The
/// lists are returned as received; deduplication is the reconciler's
/// job.
///
/// # Errors
///
/// Returns an error if the flight number is invalid or a non-marker
/// seat value fails to parse.
pub fn normalize_snapshot(payload: &RosterPayload) -> Result<RosterSnapshot, WireError> {
    let flight_number: FlightNumber = FlightNumber::new(&payload.flight_info.number)
        .map_err(|err| WireError::InvalidFlightNumber(err.to_string()))?;

    let flight_info: FlightInfo = normalize_flight_info(&payload.flight_info, &flight_number);

    let pilots: Vec<Pilot> = normalize_pilots(&payload.crew);
    let cabin_crew: Vec<CabinCrewMember> = normalize_cabin(&payload.crew);

    let mut passengers: Vec<Passenger> = Vec::with_capacity(payload.passengers.len());
    for dto in &payload.passengers {
        passengers.push(normalize_passenger(dto, &flight_number)?);
    }

    Ok(RosterSnapshot {
        flight_number,
        flight_info,
        pilots,
        cabin_crew,
        passengers,
    })
}

/// Extracts and normalizes the pilot entries of a mixed crew list.
#[must_use]
pub fn normalize_pilots(crew: &[CrewMemberDto]) -> Vec<Pilot> {
    crew.iter()
        .filter(|member| member.kind.eq_ignore_ascii_case("PILOT"))
        .map(|member| {
            Pilot::new(
                member.original_id.normalize(),
                member.name.clone(),
                PilotRank::from_label(member.role.as_deref().unwrap_or_default()),
            )
        })
        .collect()
}

/// Extracts and normalizes the cabin entries of a mixed crew list.
fn normalize_cabin(crew: &[CrewMemberDto]) -> Vec<CabinCrewMember> {
    crew.iter()
        .filter(|member| member.kind.eq_ignore_ascii_case("CABIN"))
        .map(|member| {
            let role_label: &str = member.role.as_deref().unwrap_or_default();
            let category_label: &str = member.attendant_type.as_deref().unwrap_or(role_label);
            CabinCrewMember::new(
                member.original_id.normalize(),
                member.name.clone(),
                CabinRole::from_label(role_label),
                AttendantCategory::from_label(category_label),
            )
        })
        .collect()
}

/// Normalizes the available-crew payload into candidate pools.
#[must_use]
pub fn normalize_candidates(payload: &CandidatePoolsPayload) -> CandidatePools {
    let pilots: Vec<PilotCandidate> = payload
        .pilots
        .iter()
        .map(|dto| PilotCandidate {
            id: dto.pilot_id.normalize(),
            name: dto.full_name.clone(),
            rank: PilotRank::from_label(dto.seniority_level.as_deref().unwrap_or_default()),
            licensed_vehicles: dto.vehicle_types.clone(),
            allowed_range_km: dto.allowed_range.as_ref().and_then(RawNumber::to_f64),
            age: dto.age,
            nationality: dto.nationality.clone(),
        })
        .collect();

    let attendants: Vec<AttendantCandidate> = payload
        .attendants
        .iter()
        .map(|dto| AttendantCandidate {
            id: dto.attendant_id.normalize(),
            name: dto.full_name.clone(),
            category: AttendantCategory::from_label(
                dto.attendant_type.as_deref().unwrap_or_default(),
            ),
            licensed_vehicles: dto.vehicle_types.clone(),
            known_recipes: dto.known_recipes.clone(),
        })
        .collect();

    CandidatePools { pilots, attendants }
}

/// Normalizes one archive listing entry.
///
/// # Errors
///
/// Returns an error if the storage kind tag is not recognized.
pub fn normalize_saved_roster(dto: &SavedRosterDto) -> Result<SavedRosterSummary, WireError> {
    let storage_kind: StorageKind = StorageKind::from_str(&dto.db_type)
        .map_err(|_| WireError::InvalidStorageKind(dto.db_type.clone()))?;
    Ok(SavedRosterSummary {
        id: dto.id.normalize().value().to_owned(),
        flight_number: dto.flight_number.clone(),
        storage_kind,
        saved_at: dto.saved_at.as_deref().and_then(parse_datetime),
    })
}

fn normalize_flight_info(dto: &FlightInfoDto, flight_number: &FlightNumber) -> FlightInfo {
    FlightInfo {
        number: flight_number.clone(),
        departure: dto.datetime.as_deref().and_then(parse_datetime),
        duration: dto.duration.clone(),
        distance_km: dto.distance.as_ref().and_then(RawNumber::to_f64),
        origin: normalize_endpoint(dto.source.as_ref(), "DEP", "Departure"),
        destination: normalize_endpoint(dto.destination.as_ref(), "ARR", "Arrival"),
        vehicle_type: dto
            .vehicle
            .as_ref()
            .map_or_else(|| String::from("Unknown"), |v| v.label().to_owned()),
        seat_capacity: dto.capacity,
        menu: dto.menu.clone(),
        shared_with: dto.shared_flight.as_ref().and_then(normalize_shared),
    }
}

fn normalize_endpoint(
    dto: Option<&EndpointDto>,
    default_code: &str,
    default_city: &str,
) -> RouteEndpoint {
    RouteEndpoint {
        code: dto
            .and_then(|e| e.code.clone())
            .unwrap_or_else(|| default_code.to_owned()),
        city: dto
            .and_then(|e| e.city.clone())
            .unwrap_or_else(|| default_city.to_owned()),
        airport: dto
            .and_then(|e| e.name.clone())
            .unwrap_or_else(|| String::from("-")),
    }
}

fn normalize_shared(dto: &SharedFlightDto) -> Option<SharedFlight> {
    if !dto.is_shared {
        return None;
    }
    Some(SharedFlight {
        airline: dto.airline.clone().unwrap_or_default(),
        flight_number: dto.flight_number.clone().unwrap_or_default(),
    })
}

fn normalize_passenger(
    dto: &PassengerDto,
    flight_number: &FlightNumber,
) -> Result<Passenger, WireError> {
    let id: PersonId = dto.id.normalize();
    let seat_class: SeatClass = match dto.seat_class.as_deref() {
        Some(label) if label.eq_ignore_ascii_case("business") => SeatClass::Business,
        _ => SeatClass::Economy,
    };

    let is_infant: bool = dto.age <= skyroster_domain::INFANT_AGE_LIMIT;
    let seat: Option<SeatCode> = match dto.seat_number.as_deref() {
        None => None,
        Some(marker)
            if marker.eq_ignore_ascii_case(SEAT_MARKER_STANDBY)
                || marker.eq_ignore_ascii_case(SEAT_MARKER_INFANT) =>
        {
            None
        }
        Some(code) if is_infant => {
            // The invariant is enforced at the boundary: an infant row
            // carrying a real seat code loses it.
            warn!(passenger = %id, code, "dropping seat code on infant record");
            None
        }
        Some(code) => Some(SeatCode::from_str(code).map_err(|_| WireError::InvalidSeatCode {
            passenger_id: id.value().to_owned(),
            code: code.to_owned(),
        })?),
    };

    Ok(Passenger {
        id,
        flight_number: flight_number.clone(),
        name: dto.name.clone(),
        age: dto.age,
        gender: dto.gender.clone().unwrap_or_default(),
        nationality: dto.nationality.clone().unwrap_or_default(),
        seat_class,
        seat,
        parent_id: dto.parent_id.as_ref().map(RawId::normalize),
        affiliated_ids: dto.affiliated_passengers.iter().map(RawId::normalize).collect(),
    })
}

fn parse_datetime(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok()
}

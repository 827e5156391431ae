// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::seat::{SeatClass, SeatCode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Passengers at or below this age are infants and ride on a guardian's
/// lap instead of holding a seat of their own.
pub const INFANT_AGE_LIMIT: u8 = 2;

/// A string-normalized person identity key.
///
/// Identifiers arrive as numbers from some endpoints and strings from
/// others. Every identity comparison in the system (deduplication,
/// assignment membership, affiliation lookup) goes through this type,
/// so a numeric `5` and a string `"5"` always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId {
    /// The normalized identifier value.
    value: String,
}

impl PersonId {
    /// Creates a new `PersonId` from a string form.
    ///
    /// Surrounding whitespace is stripped so that padded identifiers
    /// from lenient endpoints still compare equal.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the normalized identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<i64> for PersonId {
    fn from(value: i64) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A flight number such as `TK1234`.
///
/// Flight numbers are normalized to uppercase to ensure
/// case-insensitive uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightNumber {
    /// The normalized flight number value.
    value: String,
}

impl FlightNumber {
    /// Creates a new `FlightNumber`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty after trimming.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let normalized: String = value.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidFlightNumber(String::from(
                "Flight number cannot be empty",
            )));
        }
        Ok(Self { value: normalized })
    }

    /// Returns the flight number value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A pilot's seniority rank.
///
/// Ranks are parsed from free-form service labels; an unrecognized
/// label degrades to `Unranked` rather than erroring, since crew data
/// quality cannot be guaranteed. Safety rules only ever trigger on the
/// recognized `Junior` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PilotRank {
    /// Junior rank: may never co-occupy both cockpit slots.
    Junior,
    /// Senior rank.
    Senior,
    /// Trainee rank.
    Trainee,
    /// The label was missing or not recognized.
    Unranked,
}

impl PilotRank {
    /// Parses a rank from a service label, case-insensitively.
    ///
    /// Unknown labels yield `Unranked`; this function is total.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "JUNIOR" => Self::Junior,
            "SENIOR" => Self::Senior,
            "TRAINEE" => Self::Trainee,
            _ => Self::Unranked,
        }
    }

    /// Returns the display name for this rank.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Senior => "Senior",
            Self::Trainee => "Trainee",
            Self::Unranked => "Unranked",
        }
    }

    /// Whether this is the junior cockpit rank.
    #[must_use]
    pub const fn is_junior(&self) -> bool {
        matches!(self, Self::Junior)
    }
}

impl std::fmt::Display for PilotRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cabin crew member's role rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CabinRole {
    /// Chief attendant: at least one must be on board while any cabin
    /// crew are assigned.
    Chief,
    /// Senior attendant.
    Senior,
    /// Junior attendant.
    Junior,
    /// The label was missing or not recognized.
    Unranked,
}

impl CabinRole {
    /// Parses a cabin role from a service label, case-insensitively.
    ///
    /// Unknown labels yield `Unranked`; this function is total.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "CHIEF" => Self::Chief,
            "SENIOR" => Self::Senior,
            "JUNIOR" => Self::Junior,
            _ => Self::Unranked,
        }
    }

    /// Returns the display name for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chief => "Chief",
            Self::Senior => "Senior",
            Self::Junior => "Junior",
            Self::Unranked => "Unranked",
        }
    }

    /// Whether this is the chief rank.
    #[must_use]
    pub const fn is_chief(&self) -> bool {
        matches!(self, Self::Chief)
    }
}

impl std::fmt::Display for CabinRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An attendant's category as reported by the crew directory.
///
/// Categories classify candidates in the available-crew pool; the role
/// rank above classifies members already on a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendantCategory {
    /// Chief attendant.
    Chief,
    /// Regular attendant.
    Regular,
    /// On-board chef.
    Chef,
    /// The label was missing or not recognized.
    Unspecified,
}

impl AttendantCategory {
    /// Parses a category from a service label, case-insensitively.
    ///
    /// Unknown labels yield `Unspecified`; this function is total.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "CHIEF" => Self::Chief,
            "REGULAR" => Self::Regular,
            "CHEF" => Self::Chef,
            _ => Self::Unspecified,
        }
    }

    /// Returns the display name for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chief => "Chief",
            Self::Regular => "Regular",
            Self::Chef => "Chef",
            Self::Unspecified => "Unspecified",
        }
    }

    /// Whether this is the chief category.
    #[must_use]
    pub const fn is_chief(&self) -> bool {
        matches!(self, Self::Chief)
    }
}

impl std::fmt::Display for AttendantCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pilot assigned to one of the two cockpit slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    /// The pilot's identity key.
    pub id: PersonId,
    /// The pilot's name (informational, not unique).
    pub name: String,
    /// The pilot's seniority rank.
    pub rank: PilotRank,
}

impl Pilot {
    /// Creates a new `Pilot`.
    #[must_use]
    pub const fn new(id: PersonId, name: String, rank: PilotRank) -> Self {
        Self { id, name, rank }
    }
}

/// A cabin crew member assigned to an ordinal crew station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinCrewMember {
    /// The crew member's identity key.
    pub id: PersonId,
    /// The crew member's name (informational, not unique).
    pub name: String,
    /// The crew member's role rank on this roster.
    pub role: CabinRole,
    /// The crew member's attendant category.
    pub category: AttendantCategory,
}

impl CabinCrewMember {
    /// Creates a new `CabinCrewMember`.
    #[must_use]
    pub const fn new(
        id: PersonId,
        name: String,
        role: CabinRole,
        category: AttendantCategory,
    ) -> Self {
        Self {
            id,
            name,
            role,
            category,
        }
    }
}

/// A passenger booked on a flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// The passenger's identity key.
    pub id: PersonId,
    /// The flight this booking belongs to.
    pub flight_number: FlightNumber,
    /// The passenger's name.
    pub name: String,
    /// The passenger's age in years.
    pub age: u8,
    /// The passenger's gender as reported by the directory.
    pub gender: String,
    /// The passenger's nationality.
    pub nationality: String,
    /// The booked travel class.
    pub seat_class: SeatClass,
    /// The assigned seat, or `None` while assignment is pending.
    ///
    /// Infants never carry a seat code; they ride through `parent_id`.
    pub seat: Option<SeatCode>,
    /// The seated guardian for an infant passenger.
    pub parent_id: Option<PersonId>,
    /// Travel companions linked to this passenger.
    pub affiliated_ids: Vec<PersonId>,
}

impl Passenger {
    /// Whether this passenger is an infant (age at or below
    /// [`INFANT_AGE_LIMIT`]).
    #[must_use]
    pub const fn is_infant(&self) -> bool {
        self.age <= INFANT_AGE_LIMIT
    }
}

/// One endpoint of a flight route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEndpoint {
    /// The IATA-style airport code (e.g. `IST`).
    pub code: String,
    /// The city name.
    pub city: String,
    /// The airport name.
    pub airport: String,
}

/// The shared-flight tag for codeshare operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFlight {
    /// The partner airline's name.
    pub airline: String,
    /// The partner airline's flight number for the same leg.
    pub flight_number: String,
}

/// Descriptive flight data attached to a roster snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightInfo {
    /// The flight number.
    pub number: FlightNumber,
    /// The scheduled departure, when the catalog provides one.
    pub departure: Option<OffsetDateTime>,
    /// The flight duration as reported by the catalog (e.g. `2h 45m`).
    pub duration: Option<String>,
    /// The route distance in kilometers.
    pub distance_km: Option<f64>,
    /// The departure endpoint.
    pub origin: RouteEndpoint,
    /// The arrival endpoint.
    pub destination: RouteEndpoint,
    /// The aircraft type label (e.g. `Boeing 737`).
    pub vehicle_type: String,
    /// The aircraft's passenger seat capacity.
    pub seat_capacity: Option<u32>,
    /// The on-board menu label.
    pub menu: Option<String>,
    /// The codeshare tag, when this leg is shared with a partner.
    pub shared_with: Option<SharedFlight>,
}

/// The unit of roster state persisted and retrieved externally.
///
/// The remote service reports crew as one mixed list tagged with a
/// PILOT/CABIN discriminator; the boundary splits it into the canonical
/// lists held here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// The flight this roster belongs to.
    pub flight_number: FlightNumber,
    /// Descriptive flight data.
    pub flight_info: FlightInfo,
    /// The cockpit assignment (slot 0 = Captain, slot 1 = First Officer).
    pub pilots: Vec<Pilot>,
    /// The cabin crew assignment, in crew-station order.
    pub cabin_crew: Vec<CabinCrewMember>,
    /// All passengers booked on the flight.
    pub passengers: Vec<Passenger>,
}

/// A pilot in the available-crew candidate pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotCandidate {
    /// The candidate's identity key.
    pub id: PersonId,
    /// The candidate's name.
    pub name: String,
    /// The candidate's seniority rank.
    pub rank: PilotRank,
    /// Aircraft types the candidate is licensed for.
    pub licensed_vehicles: Vec<String>,
    /// The candidate's maximum allowed flight range in kilometers.
    pub allowed_range_km: Option<f64>,
    /// The candidate's age, when the directory provides it.
    pub age: Option<u8>,
    /// The candidate's nationality, when the directory provides it.
    pub nationality: Option<String>,
}

/// An attendant in the available-crew candidate pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendantCandidate {
    /// The candidate's identity key.
    pub id: PersonId,
    /// The candidate's name.
    pub name: String,
    /// The candidate's attendant category.
    pub category: AttendantCategory,
    /// Aircraft types the candidate is licensed for.
    pub licensed_vehicles: Vec<String>,
    /// Recipes a chef candidate can prepare.
    pub known_recipes: Vec<String>,
}

/// The storage backend a roster selection is archived into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageKind {
    /// Relational storage (wire tag `SQL`).
    Relational,
    /// Document storage (wire tag `NOSQL`).
    Document,
}

impl StorageKind {
    /// Returns the wire tag for this storage kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Relational => "SQL",
            Self::Document => "NOSQL",
        }
    }
}

impl FromStr for StorageKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SQL" => Ok(Self::Relational),
            "NOSQL" => Ok(Self::Document),
            _ => Err(DomainError::InvalidStorageKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the saved-snapshot archive listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRosterSummary {
    /// The archive's opaque identifier.
    pub id: String,
    /// The flight the archived roster belongs to.
    pub flight_number: String,
    /// The storage backend the roster was archived into.
    pub storage_kind: StorageKind,
    /// When the roster was archived, if recorded.
    pub saved_at: Option<OffsetDateTime>,
}

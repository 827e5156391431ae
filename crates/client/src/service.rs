// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The remote roster-service contract.
//!
//! The data service itself (flight catalog, crew and passenger
//! directories, seat-assignment computation, archive storage) is an
//! external collaborator; this trait is the complete interface the
//! core depends on. Every method is an independent suspension point
//! and carries the operator's session explicitly.

use crate::session::Session;
use crate::wire::{CandidatePoolsPayload, CurrentPilotsPayload, RosterPayload, SavedRosterDto};
use skyroster_domain::{FlightNumber, PersonId, StorageKind};

/// Failures reported by the remote roster service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No roster exists for the requested flight.
    ///
    /// Expected control flow during open-flight: the caller falls
    /// through to roster creation instead of surfacing this.
    NotFound,
    /// The bearer credential was rejected; the operator must
    /// re-authenticate. Distinct from every other failure.
    Unauthorized,
    /// The service rejected the operation with structured validation
    /// reasons (e.g. aircraft-capacity checks). The reasons are
    /// preserved verbatim for display.
    Rejected {
        /// The server-provided reasons, in server order.
        details: Vec<String>,
    },
    /// A generic network or service failure.
    Transport(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Roster not found"),
            Self::Unauthorized => write!(f, "Session expired"),
            Self::Rejected { details } => {
                write!(f, "Rejected by the service: {}", details.join("; "))
            }
            Self::Transport(msg) => write!(f, "Service unreachable: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// The remote data service the roster client drives.
///
/// Implementations perform no client-side validation; safety rules run
/// in the engine before any of these methods is called. In-flight
/// calls are not abortable; stale responses are discarded by the
/// reconciler's generation token instead.
#[allow(async_fn_in_trait)]
pub trait RosterService {
    /// Fetches the existing snapshot (`GET roster/detail/{flight}`).
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if no roster exists yet, or
    /// another variant for authentication/transport failures.
    async fn fetch_roster(
        &self,
        session: &Session,
        flight: &FlightNumber,
    ) -> Result<RosterPayload, ServiceError>;

    /// Creates or recomputes the snapshot (`POST roster/create`),
    /// optionally pinning manual pilot and attendant selections.
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` on rejection or failure.
    async fn create_roster(
        &self,
        session: &Session,
        flight: &FlightNumber,
        manual_pilots: Option<&[PersonId]>,
        manual_attendants: Option<&[PersonId]>,
    ) -> Result<RosterPayload, ServiceError>;

    /// Replaces the cockpit assignment (`POST roster/update-pilots`).
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` on rejection or failure.
    async fn update_pilots(
        &self,
        session: &Session,
        flight: &FlightNumber,
        pilot_ids: &[PersonId],
    ) -> Result<CurrentPilotsPayload, ServiceError>;

    /// Fetches the candidate pools (`GET available-crew?flight=`).
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` on failure.
    async fn available_crew(
        &self,
        session: &Session,
        flight: &FlightNumber,
    ) -> Result<CandidatePoolsPayload, ServiceError>;

    /// Archives the current selection (`POST roster/save-selection`).
    ///
    /// Returns the service's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` on failure.
    async fn save_selection(
        &self,
        session: &Session,
        flight: &FlightNumber,
        storage_kind: StorageKind,
    ) -> Result<String, ServiceError>;

    /// Triggers the remote seat-assignment computation for one
    /// passenger (`POST roster/assign-seat`).
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` on failure.
    async fn assign_seat(
        &self,
        session: &Session,
        passenger_id: &PersonId,
        flight: &FlightNumber,
    ) -> Result<(), ServiceError>;

    /// Lists the archived rosters (`GET roster/list-saved`).
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` on failure.
    async fn list_saved(&self, session: &Session) -> Result<Vec<SavedRosterDto>, ServiceError>;

    /// Retrieves one archived roster (`GET roster/open-nosql/{id}`).
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` on failure.
    async fn open_saved(
        &self,
        session: &Session,
        archive_id: &str,
    ) -> Result<RosterPayload, ServiceError>;

    /// Removes one archived roster
    /// (`DELETE roster/delete-nosql/{id}`).
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` on failure.
    async fn delete_saved(&self, session: &Session, archive_id: &str)
    -> Result<(), ServiceError>;
}

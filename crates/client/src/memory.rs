// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An in-memory roster service over seeded fixture payloads.
//!
//! Used by the test suites and the offline CLI. The service mimics the
//! remote contract faithfully enough to exercise every reconciler
//! path: fetch-or-create fallback, manual-override creation, narrow
//! pilot updates, scripted failures, and session expiry.

use crate::service::{RosterService, ServiceError};
use crate::session::Session;
use crate::wire::{
    CandidatePoolsPayload, CrewMemberDto, CurrentPilotsPayload, RawId, RosterPayload,
    SavedRosterDto,
};
use skyroster_domain::{FlightNumber, PersonId, StorageKind};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MemoryState {
    required_token: Option<String>,
    session_expired: bool,
    rosters: HashMap<String, RosterPayload>,
    creatable: HashMap<String, RosterPayload>,
    candidates: HashMap<String, CandidatePoolsPayload>,
    directory: HashMap<String, CrewMemberDto>,
    seat_plan: HashMap<String, String>,
    saved: Vec<SavedRosterDto>,
    archived: HashMap<String, RosterPayload>,
    fail_next: Option<ServiceError>,
    fetch_calls: usize,
    create_calls: usize,
    update_calls: usize,
}

/// A seeded, scriptable implementation of [`RosterService`].
#[derive(Debug, Default)]
pub struct InMemoryService {
    inner: Mutex<MemoryState>,
}

impl InMemoryService {
    /// Creates an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires every call to carry this bearer credential.
    pub fn require_token(&self, token: &str) {
        self.state().required_token = Some(token.to_owned());
    }

    /// Marks the session as expired: every subsequent call returns
    /// `ServiceError::Unauthorized`.
    pub fn expire_session(&self) {
        self.state().session_expired = true;
    }

    /// Scripts one failure for the next call, whichever it is.
    pub fn fail_next(&self, error: ServiceError) {
        self.state().fail_next = Some(error);
    }

    /// Seeds an existing roster snapshot for a flight.
    pub fn seed_roster(&self, payload: RosterPayload) {
        let key: String = normalize_flight_key(&payload.flight_info.number);
        self.state().rosters.insert(key, payload);
    }

    /// Seeds a payload returned when a roster is created for a flight
    /// with no existing snapshot.
    pub fn seed_creatable(&self, payload: RosterPayload) {
        let key: String = normalize_flight_key(&payload.flight_info.number);
        self.state().creatable.insert(key, payload);
    }

    /// Seeds the candidate pools for a flight.
    pub fn seed_candidates(&self, flight: &str, payload: CandidatePoolsPayload) {
        self.state()
            .candidates
            .insert(normalize_flight_key(flight), payload);
    }

    /// Seeds crew directory records used to resolve manual selections.
    pub fn seed_crew_directory(&self, members: Vec<CrewMemberDto>) {
        let mut state: MutexGuard<'_, MemoryState> = self.state();
        for member in members {
            state
                .directory
                .insert(member.original_id.normalize().value().to_owned(), member);
        }
    }

    /// Seeds the seat the assignment computation will pick for a
    /// passenger.
    pub fn seed_seat(&self, passenger_id: &str, seat: &str) {
        self.state()
            .seat_plan
            .insert(PersonId::new(passenger_id).value().to_owned(), seat.to_owned());
    }

    /// The number of roster fetch calls observed.
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.state().fetch_calls
    }

    /// The number of roster create calls observed.
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.state().create_calls
    }

    /// The number of pilot update calls observed.
    #[must_use]
    pub fn update_calls(&self) -> usize {
        self.state().update_calls
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn normalize_flight_key(flight: &str) -> String {
    flight.trim().to_uppercase()
}

fn check_session(state: &mut MemoryState, session: &Session) -> Result<(), ServiceError> {
    if let Some(scripted) = state.fail_next.take() {
        return Err(scripted);
    }
    if state.session_expired {
        return Err(ServiceError::Unauthorized);
    }
    if let Some(required) = &state.required_token {
        if session.bearer_token() != required {
            return Err(ServiceError::Unauthorized);
        }
    }
    Ok(())
}

/// Resolves manual id selections against the crew directory.
fn resolve_selection(
    state: &MemoryState,
    kind: &str,
    ids: &[PersonId],
) -> Result<Vec<CrewMemberDto>, ServiceError> {
    ids.iter()
        .map(|id| {
            state
                .directory
                .get(id.value())
                .filter(|member| member.kind.eq_ignore_ascii_case(kind))
                .cloned()
                .ok_or_else(|| ServiceError::Rejected {
                    details: vec![format!("Unknown {} id {}", kind.to_lowercase(), id)],
                })
        })
        .collect()
}

fn split_crew(crew: &[CrewMemberDto], kind: &str) -> Vec<CrewMemberDto> {
    crew.iter()
        .filter(|member| member.kind.eq_ignore_ascii_case(kind))
        .cloned()
        .collect()
}

impl RosterService for InMemoryService {
    async fn fetch_roster(
        &self,
        session: &Session,
        flight: &FlightNumber,
    ) -> Result<RosterPayload, ServiceError> {
        let mut state: MutexGuard<'_, MemoryState> = self.state();
        state.fetch_calls += 1;
        check_session(&mut state, session)?;
        state
            .rosters
            .get(flight.value())
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    async fn create_roster(
        &self,
        session: &Session,
        flight: &FlightNumber,
        manual_pilots: Option<&[PersonId]>,
        manual_attendants: Option<&[PersonId]>,
    ) -> Result<RosterPayload, ServiceError> {
        let mut state: MutexGuard<'_, MemoryState> = self.state();
        state.create_calls += 1;
        check_session(&mut state, session)?;

        let mut payload: RosterPayload = state
            .rosters
            .get(flight.value())
            .or_else(|| state.creatable.get(flight.value()))
            .cloned()
            .ok_or_else(|| ServiceError::Rejected {
                details: vec![format!("Flight {flight} not found in the catalog")],
            })?;

        let pilots: Vec<CrewMemberDto> = match manual_pilots {
            Some(ids) => resolve_selection(&state, "PILOT", ids)?,
            None => split_crew(&payload.crew, "PILOT"),
        };
        let cabin: Vec<CrewMemberDto> = match manual_attendants {
            Some(ids) => resolve_selection(&state, "CABIN", ids)?,
            None => split_crew(&payload.crew, "CABIN"),
        };
        payload.crew = pilots.into_iter().chain(cabin).collect();

        state
            .rosters
            .insert(flight.value().to_owned(), payload.clone());
        Ok(payload)
    }

    async fn update_pilots(
        &self,
        session: &Session,
        flight: &FlightNumber,
        pilot_ids: &[PersonId],
    ) -> Result<CurrentPilotsPayload, ServiceError> {
        let mut state: MutexGuard<'_, MemoryState> = self.state();
        state.update_calls += 1;
        check_session(&mut state, session)?;

        if !state.rosters.contains_key(flight.value()) {
            return Err(ServiceError::NotFound);
        }
        let pilots: Vec<CrewMemberDto> = resolve_selection(&state, "PILOT", pilot_ids)?;

        if let Some(payload) = state.rosters.get_mut(flight.value()) {
            let cabin: Vec<CrewMemberDto> = split_crew(&payload.crew, "CABIN");
            payload.crew = pilots.iter().cloned().chain(cabin).collect();
        }
        Ok(CurrentPilotsPayload {
            current_pilots: pilots,
        })
    }

    async fn available_crew(
        &self,
        session: &Session,
        flight: &FlightNumber,
    ) -> Result<CandidatePoolsPayload, ServiceError> {
        let mut state: MutexGuard<'_, MemoryState> = self.state();
        check_session(&mut state, session)?;
        Ok(state
            .candidates
            .get(flight.value())
            .cloned()
            .unwrap_or_default())
    }

    async fn save_selection(
        &self,
        session: &Session,
        flight: &FlightNumber,
        storage_kind: StorageKind,
    ) -> Result<String, ServiceError> {
        let mut state: MutexGuard<'_, MemoryState> = self.state();
        check_session(&mut state, session)?;

        let payload: RosterPayload = state
            .rosters
            .get(flight.value())
            .cloned()
            .ok_or(ServiceError::NotFound)?;

        let archive_id: String = format!("ar-{}", state.saved.len() + 1);
        state.saved.push(SavedRosterDto {
            id: RawId::Text(archive_id.clone()),
            flight_number: flight.value().to_owned(),
            db_type: storage_kind.as_str().to_owned(),
            saved_at: None,
        });
        state.archived.insert(archive_id, payload);
        Ok(format!(
            "Roster for {flight} saved to {storage_kind} storage"
        ))
    }

    async fn assign_seat(
        &self,
        session: &Session,
        passenger_id: &PersonId,
        flight: &FlightNumber,
    ) -> Result<(), ServiceError> {
        let mut state: MutexGuard<'_, MemoryState> = self.state();
        check_session(&mut state, session)?;

        let seat: String = state
            .seat_plan
            .get(passenger_id.value())
            .cloned()
            .ok_or_else(|| ServiceError::Rejected {
                details: vec![format!("No free seat available for passenger {passenger_id}")],
            })?;

        let payload: &mut RosterPayload = state
            .rosters
            .get_mut(flight.value())
            .ok_or(ServiceError::NotFound)?;
        let dto = payload
            .passengers
            .iter_mut()
            .find(|p| p.id.normalize() == *passenger_id)
            .ok_or_else(|| ServiceError::Rejected {
                details: vec![format!("Passenger {passenger_id} is not on flight {flight}")],
            })?;
        dto.seat_number = Some(seat);
        Ok(())
    }

    async fn list_saved(&self, session: &Session) -> Result<Vec<SavedRosterDto>, ServiceError> {
        let mut state: MutexGuard<'_, MemoryState> = self.state();
        check_session(&mut state, session)?;
        Ok(state.saved.clone())
    }

    async fn open_saved(
        &self,
        session: &Session,
        archive_id: &str,
    ) -> Result<RosterPayload, ServiceError> {
        let mut state: MutexGuard<'_, MemoryState> = self.state();
        check_session(&mut state, session)?;
        state
            .archived
            .get(archive_id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    async fn delete_saved(
        &self,
        session: &Session,
        archive_id: &str,
    ) -> Result<(), ServiceError> {
        let mut state: MutexGuard<'_, MemoryState> = self.state();
        check_session(&mut state, session)?;
        if state.archived.remove(archive_id).is_none() {
            return Err(ServiceError::NotFound);
        }
        state.saved.retain(|entry| {
            entry.id.normalize().value() != archive_id
        });
        Ok(())
    }
}

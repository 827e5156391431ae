// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The roster reconciler: fetch-or-create orchestration and canonical
//! state ownership.
//!
//! The reconciler exclusively owns the canonical pilot/cabin/passenger
//! state for the currently open flight. Every other component (layout
//! planner, occupancy mapper, safety validator, affiliation resolver)
//! is a pure reader. State moves `Empty → Loading → Ready`, re-enters
//! `Loading` on every refresh or replacement, and retains the previous
//! snapshot when an operation fails.

use crate::error::ReconcileError;
use crate::service::{RosterService, ServiceError};
use crate::session::Session;
use crate::wire::{
    CandidatePools, CurrentPilotsPayload, RosterPayload, normalize_candidates, normalize_pilots,
    normalize_saved_roster, normalize_snapshot,
};
use skyroster::{
    AircraftConfig, CandidateAnnotation, ReplacementRequest, annotate_candidate, dedupe_by_id,
    plan_layout, validate_replacement,
};
use skyroster_domain::{
    AttendantCandidate, FlightNumber, Passenger, PersonId, Pilot, PilotCandidate, RosterSnapshot,
    SavedRosterSummary, StorageKind, validate_chief_presence, validate_cockpit_ranks,
    validate_infant_seating,
};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// The reconciler's lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterPhase {
    /// No flight has been opened yet.
    Empty,
    /// A remote operation is in flight.
    Loading,
    /// A canonical snapshot is available.
    Ready,
}

/// A validated crew-replacement intent.
#[derive(Debug, Clone, PartialEq)]
pub enum CrewChange {
    /// Replace the pilot in a cockpit slot.
    Pilot {
        /// The cockpit slot being vacated (0 or 1).
        slot: usize,
        /// The incoming candidate.
        candidate: PilotCandidate,
    },
    /// Replace the cabin crew member at a station slot.
    Cabin {
        /// The station slot being vacated.
        slot: usize,
        /// The incoming candidate.
        candidate: AttendantCandidate,
    },
}

impl CrewChange {
    /// Builds the safety-validator request for this change.
    #[must_use]
    pub fn to_request(&self) -> ReplacementRequest {
        match self {
            Self::Pilot { slot, candidate } => ReplacementRequest::Pilot {
                slot: *slot,
                incoming_rank: candidate.rank.clone(),
            },
            Self::Cabin { slot, candidate } => ReplacementRequest::Cabin {
                slot: *slot,
                incoming_category: candidate.category.clone(),
            },
        }
    }
}

/// Mutable reconciler state, guarded so that readers always observe a
/// complete snapshot swap.
#[derive(Debug)]
struct Inner {
    phase: RosterPhase,
    snapshot: Option<RosterSnapshot>,
    generation: u64,
}

/// Orchestrates fetch-or-create semantics for a roster snapshot and
/// merges service responses into canonical state.
#[derive(Debug)]
pub struct RosterReconciler<S> {
    service: S,
    inner: Mutex<Inner>,
}

impl<S: RosterService> RosterReconciler<S> {
    /// Creates a reconciler over a roster service.
    pub const fn new(service: S) -> Self {
        Self {
            service,
            inner: Mutex::new(Inner {
                phase: RosterPhase::Empty,
                snapshot: None,
                generation: 0,
            }),
        }
    }

    /// Returns the underlying roster service.
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> RosterPhase {
        self.state().phase
    }

    /// Returns a copy of the canonical snapshot, if one is ready.
    #[must_use]
    pub fn snapshot(&self) -> Option<RosterSnapshot> {
        self.state().snapshot.clone()
    }

    /// Returns the currently open flight number, if any.
    #[must_use]
    pub fn flight_number(&self) -> Option<FlightNumber> {
        self.state()
            .snapshot
            .as_ref()
            .map(|snapshot| snapshot.flight_number.clone())
    }

    /// Opens a flight: fetches its existing roster snapshot, falling
    /// through to snapshot creation when none exists yet.
    ///
    /// Each open intent takes a fresh generation token; a response
    /// arriving after a newer intent was issued is discarded rather
    /// than applied.
    ///
    /// # Errors
    ///
    /// Returns a `ReconcileError` on authentication, transport or
    /// payload failures. The previous snapshot (if any) is retained.
    pub async fn open_flight(
        &self,
        session: &Session,
        flight: &FlightNumber,
    ) -> Result<(), ReconcileError> {
        let token: u64 = self.begin_load();
        debug!(flight = %flight, generation = token, "opening flight");
        let result: Result<RosterPayload, ServiceError> =
            self.fetch_or_create(session, flight, None, None).await;
        self.apply_full(token, flight, result)
    }

    /// Re-fetches the currently open flight.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::NoOpenFlight` if no flight is open,
    /// or any open-flight failure.
    pub async fn refresh(&self, session: &Session) -> Result<(), ReconcileError> {
        let flight: FlightNumber = self.flight_number().ok_or(ReconcileError::NoOpenFlight)?;
        self.open_flight(session, &flight).await
    }

    /// Applies a crew replacement after local safety validation.
    ///
    /// A pilot change issues the narrow update call and replaces only
    /// the canonical pilot list; a cabin change forces a full
    /// re-fetch-with-manual-override that replaces all three lists,
    /// since cabin changes can cascade into passenger seating
    /// recomputation on the service side.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::Safety` without any remote call if a
    /// safety rule rejects the replacement, or a remote error
    /// otherwise.
    pub async fn replace_crew(
        &self,
        session: &Session,
        change: &CrewChange,
    ) -> Result<(), ReconcileError> {
        let (flight, pilots, cabin_crew) = {
            let inner: MutexGuard<'_, Inner> = self.state();
            let snapshot: &RosterSnapshot =
                inner.snapshot.as_ref().ok_or(ReconcileError::NoOpenFlight)?;
            (
                snapshot.flight_number.clone(),
                snapshot.pilots.clone(),
                snapshot.cabin_crew.clone(),
            )
        };

        // The safety check resolves locally; a rejection never reaches
        // the network layer.
        validate_replacement(&change.to_request(), &pilots, &cabin_crew)?;

        match change {
            CrewChange::Pilot { slot, candidate } => {
                let mut pilot_ids: Vec<PersonId> =
                    pilots.iter().map(|pilot| pilot.id.clone()).collect();
                set_slot(&mut pilot_ids, *slot, candidate.id.clone());

                let token: u64 = self.begin_load();
                debug!(flight = %flight, slot, candidate = %candidate.id, "replacing pilot");
                let result: Result<CurrentPilotsPayload, ServiceError> = self
                    .service
                    .update_pilots(session, &flight, &pilot_ids)
                    .await;
                self.apply_pilots(token, &flight, result)
            }
            CrewChange::Cabin { slot, candidate } => {
                let pilot_ids: Vec<PersonId> =
                    pilots.iter().map(|pilot| pilot.id.clone()).collect();
                let mut cabin_ids: Vec<PersonId> =
                    cabin_crew.iter().map(|member| member.id.clone()).collect();
                set_slot(&mut cabin_ids, *slot, candidate.id.clone());

                let token: u64 = self.begin_load();
                debug!(flight = %flight, slot, candidate = %candidate.id, "replacing cabin crew");
                let result: Result<RosterPayload, ServiceError> = self
                    .fetch_or_create(session, &flight, Some(&pilot_ids), Some(&cabin_ids))
                    .await;
                self.apply_full(token, &flight, result)
            }
        }
    }

    /// Triggers the remote seat-assignment computation for one
    /// passenger, then re-fetches the roster to merge the resulting
    /// seat code.
    ///
    /// # Errors
    ///
    /// Returns a domain error locally if the passenger is unknown, an
    /// infant, or already seated; a remote error otherwise.
    pub async fn assign_seat(
        &self,
        session: &Session,
        passenger_id: &PersonId,
    ) -> Result<(), ReconcileError> {
        let flight: FlightNumber = {
            let inner: MutexGuard<'_, Inner> = self.state();
            let snapshot: &RosterSnapshot =
                inner.snapshot.as_ref().ok_or(ReconcileError::NoOpenFlight)?;
            let passenger: &Passenger = snapshot
                .passengers
                .iter()
                .find(|p| &p.id == passenger_id)
                .ok_or_else(|| {
                    ReconcileError::Domain(skyroster_domain::DomainError::PassengerNotFound {
                        passenger_id: passenger_id.value().to_owned(),
                        flight: snapshot.flight_number.value().to_owned(),
                    })
                })?;
            if passenger.is_infant() {
                return Err(ReconcileError::Domain(
                    skyroster_domain::DomainError::InfantSeatRequest {
                        passenger_id: passenger_id.value().to_owned(),
                    },
                ));
            }
            if let Some(seat) = passenger.seat {
                return Err(ReconcileError::Domain(
                    skyroster_domain::DomainError::SeatAlreadyAssigned {
                        passenger_id: passenger_id.value().to_owned(),
                        seat: seat.to_string(),
                    },
                ));
            }
            snapshot.flight_number.clone()
        };

        self.service
            .assign_seat(session, passenger_id, &flight)
            .await
            .map_err(ReconcileError::from)?;
        info!(flight = %flight, passenger = %passenger_id, "seat assigned, refreshing roster");
        self.open_flight(session, &flight).await
    }

    /// Archives the current selection, returning the service's
    /// confirmation message.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::NoOpenFlight` if no flight is open, or
    /// a remote error.
    pub async fn save_selection(
        &self,
        session: &Session,
        storage_kind: StorageKind,
    ) -> Result<String, ReconcileError> {
        let flight: FlightNumber = self.flight_number().ok_or(ReconcileError::NoOpenFlight)?;
        let message: String = self
            .service
            .save_selection(session, &flight, storage_kind)
            .await?;
        info!(flight = %flight, storage = %storage_kind, "selection archived");
        Ok(message)
    }

    /// Fetches and normalizes the candidate pools for the open flight.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::NoOpenFlight` if no flight is open, or
    /// a remote error.
    pub async fn available_candidates(
        &self,
        session: &Session,
    ) -> Result<CandidatePools, ReconcileError> {
        let flight: FlightNumber = self.flight_number().ok_or(ReconcileError::NoOpenFlight)?;
        let payload = self.service.available_crew(session, &flight).await?;
        Ok(normalize_candidates(&payload))
    }

    /// Computes the soft annotation flags for a pilot candidate
    /// against the open flight.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::NoOpenFlight` if no flight is open.
    pub fn annotate_pilot_candidate(
        &self,
        candidate: &PilotCandidate,
    ) -> Result<CandidateAnnotation, ReconcileError> {
        let inner: MutexGuard<'_, Inner> = self.state();
        let snapshot: &RosterSnapshot =
            inner.snapshot.as_ref().ok_or(ReconcileError::NoOpenFlight)?;
        let assigned: Vec<PersonId> = snapshot.pilots.iter().map(|p| p.id.clone()).collect();
        Ok(annotate_candidate(
            &candidate.id,
            &candidate.licensed_vehicles,
            &snapshot.flight_info.vehicle_type,
            &assigned,
        ))
    }

    /// Computes the soft annotation flags for an attendant candidate
    /// against the open flight.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::NoOpenFlight` if no flight is open.
    pub fn annotate_attendant_candidate(
        &self,
        candidate: &AttendantCandidate,
    ) -> Result<CandidateAnnotation, ReconcileError> {
        let inner: MutexGuard<'_, Inner> = self.state();
        let snapshot: &RosterSnapshot =
            inner.snapshot.as_ref().ok_or(ReconcileError::NoOpenFlight)?;
        let assigned: Vec<PersonId> = snapshot.cabin_crew.iter().map(|c| c.id.clone()).collect();
        Ok(annotate_candidate(
            &candidate.id,
            &candidate.licensed_vehicles,
            &snapshot.flight_info.vehicle_type,
            &assigned,
        ))
    }

    /// Lists the saved-roster archive.
    ///
    /// Archive operations never touch canonical state.
    ///
    /// # Errors
    ///
    /// Returns a remote or payload error.
    pub async fn saved_rosters(
        &self,
        session: &Session,
    ) -> Result<Vec<SavedRosterSummary>, ReconcileError> {
        let dtos = self.service.list_saved(session).await?;
        dtos.iter()
            .map(|dto| normalize_saved_roster(dto).map_err(ReconcileError::from))
            .collect()
    }

    /// Retrieves one archived roster as a read-only snapshot.
    ///
    /// # Errors
    ///
    /// Returns a remote or payload error.
    pub async fn open_saved(
        &self,
        session: &Session,
        archive_id: &str,
    ) -> Result<RosterSnapshot, ReconcileError> {
        let payload = self.service.open_saved(session, archive_id).await?;
        deduped_snapshot(&payload)
    }

    /// Deletes one archived roster.
    ///
    /// # Errors
    ///
    /// Returns a remote error.
    pub async fn delete_saved(
        &self,
        session: &Session,
        archive_id: &str,
    ) -> Result<(), ReconcileError> {
        self.service
            .delete_saved(session, archive_id)
            .await
            .map_err(ReconcileError::from)
    }

    /// Issues the fetch, falling through to creation on a not-found
    /// signal; manual overrides force a direct create.
    async fn fetch_or_create(
        &self,
        session: &Session,
        flight: &FlightNumber,
        manual_pilots: Option<&[PersonId]>,
        manual_attendants: Option<&[PersonId]>,
    ) -> Result<RosterPayload, ServiceError> {
        if manual_pilots.is_some() || manual_attendants.is_some() {
            return self
                .service
                .create_roster(session, flight, manual_pilots, manual_attendants)
                .await;
        }
        match self.service.fetch_roster(session, flight).await {
            Ok(payload) => Ok(payload),
            Err(ServiceError::NotFound) => {
                debug!(flight = %flight, "no existing roster, creating one");
                self.service
                    .create_roster(session, flight, None, None)
                    .await
            }
            Err(err) => Err(err),
        }
    }

    /// Takes the next generation token and enters the loading phase.
    fn begin_load(&self) -> u64 {
        let mut inner: MutexGuard<'_, Inner> = self.state();
        inner.generation += 1;
        inner.phase = RosterPhase::Loading;
        inner.generation
    }

    /// Applies a full-snapshot response, replacing all three canonical
    /// lists atomically.
    fn apply_full(
        &self,
        token: u64,
        flight: &FlightNumber,
        result: Result<RosterPayload, ServiceError>,
    ) -> Result<(), ReconcileError> {
        let mut inner: MutexGuard<'_, Inner> = self.state();
        if inner.generation != token {
            warn!(
                flight = %flight,
                generation = token,
                latest = inner.generation,
                "discarding late roster response"
            );
            return Err(ReconcileError::Superseded);
        }

        let outcome: Result<RosterSnapshot, ReconcileError> = result
            .map_err(ReconcileError::from)
            .and_then(|payload| merge_snapshot(flight, &payload));

        match outcome {
            Ok(snapshot) => {
                log_invariant_warnings(&snapshot);
                info!(
                    flight = %flight,
                    pilots = snapshot.pilots.len(),
                    cabin_crew = snapshot.cabin_crew.len(),
                    passengers = snapshot.passengers.len(),
                    "roster ready"
                );
                inner.snapshot = Some(snapshot);
                inner.phase = RosterPhase::Ready;
                Ok(())
            }
            Err(err) => {
                inner.phase = if inner.snapshot.is_some() {
                    RosterPhase::Ready
                } else {
                    RosterPhase::Empty
                };
                Err(err)
            }
        }
    }

    /// Applies a narrow pilot-update response, replacing only the
    /// canonical pilot list.
    fn apply_pilots(
        &self,
        token: u64,
        flight: &FlightNumber,
        result: Result<CurrentPilotsPayload, ServiceError>,
    ) -> Result<(), ReconcileError> {
        let mut inner: MutexGuard<'_, Inner> = self.state();
        if inner.generation != token {
            warn!(
                flight = %flight,
                generation = token,
                latest = inner.generation,
                "discarding late pilot-update response"
            );
            return Err(ReconcileError::Superseded);
        }

        match result {
            Ok(payload) => {
                let pilots: Vec<Pilot> = dedupe_by_id(normalize_pilots(&payload.current_pilots));
                if let Err(err) = validate_cockpit_ranks(&pilots) {
                    warn!(flight = %flight, %err, "service returned an invalid cockpit");
                }
                if let Some(snapshot) = inner.snapshot.as_mut() {
                    // Cabin and passengers are untouched by a pilot
                    // change; only a cabin replacement forces the full
                    // recompute.
                    snapshot.pilots = pilots;
                }
                inner.phase = RosterPhase::Ready;
                Ok(())
            }
            Err(err) => {
                inner.phase = if inner.snapshot.is_some() {
                    RosterPhase::Ready
                } else {
                    RosterPhase::Empty
                };
                Err(err.into())
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Replaces the id at `slot`, or appends when the slot is vacant.
fn set_slot(ids: &mut Vec<PersonId>, slot: usize, incoming: PersonId) {
    if slot < ids.len() {
        ids[slot] = incoming;
    } else {
        ids.push(incoming);
    }
}

/// Normalizes and deduplicates a payload without installing it.
fn deduped_snapshot(payload: &RosterPayload) -> Result<RosterSnapshot, ReconcileError> {
    let mut snapshot: RosterSnapshot = normalize_snapshot(payload)?;
    snapshot.pilots = dedupe_by_id(snapshot.pilots);
    snapshot.cabin_crew = dedupe_by_id(snapshot.cabin_crew);
    snapshot.passengers = dedupe_by_id(snapshot.passengers);
    Ok(snapshot)
}

/// Normalizes a payload and validates it against the open flight.
fn merge_snapshot(
    flight: &FlightNumber,
    payload: &RosterPayload,
) -> Result<RosterSnapshot, ReconcileError> {
    let snapshot: RosterSnapshot = deduped_snapshot(payload)?;
    if snapshot.flight_number != *flight {
        return Err(ReconcileError::InvalidPayload(format!(
            "response for flight {} while {} is open",
            snapshot.flight_number, flight
        )));
    }
    Ok(snapshot)
}

/// Warns when service data violates the safety invariants.
///
/// The snapshot is still installed: the invariants gate local
/// replacement operations, not what the service reports.
fn log_invariant_warnings(snapshot: &RosterSnapshot) {
    if let Err(err) = validate_cockpit_ranks(&snapshot.pilots) {
        warn!(flight = %snapshot.flight_number, %err, "service returned an invalid cockpit");
    }
    if let Err(err) = validate_chief_presence(&snapshot.cabin_crew) {
        warn!(flight = %snapshot.flight_number, %err, "service returned a cabin without a chief");
    }
    let config: AircraftConfig = plan_layout(&snapshot.flight_info.vehicle_type);
    for passenger in &snapshot.passengers {
        if let Err(err) = validate_infant_seating(passenger) {
            warn!(flight = %snapshot.flight_number, %err, "service returned a seated infant");
        }
        if let Some(seat) = passenger.seat {
            if let Err(err) = config.validate_seat(seat) {
                warn!(flight = %snapshot.flight_number, %err, "service assigned a nonexistent seat");
            }
        }
    }
}

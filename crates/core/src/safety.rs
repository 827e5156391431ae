// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SafetyViolation;
use skyroster_domain::{AttendantCategory, CabinCrewMember, PersonId, Pilot, PilotRank};

/// A proposed crew replacement, evaluated before any remote mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplacementRequest {
    /// Replace the pilot in a cockpit slot.
    Pilot {
        /// The cockpit slot being vacated (0 or 1).
        slot: usize,
        /// The incoming candidate's seniority rank.
        incoming_rank: PilotRank,
    },
    /// Replace the cabin crew member at a station slot.
    Cabin {
        /// The station slot being vacated.
        slot: usize,
        /// The incoming candidate's attendant category.
        incoming_category: AttendantCategory,
    },
}

/// Evaluates a proposed crew replacement against the safety invariants.
///
/// This check runs strictly before the remote update is attempted; a
/// rejection performs no state change and no network call.
///
/// # Errors
///
/// Returns the violated safety rule if the replacement must not
/// proceed.
pub fn validate_replacement(
    request: &ReplacementRequest,
    current_pilots: &[Pilot],
    current_cabin_crew: &[CabinCrewMember],
) -> Result<(), SafetyViolation> {
    match request {
        ReplacementRequest::Pilot {
            slot,
            incoming_rank,
        } => validate_pilot_replacement(*slot, incoming_rank, current_pilots),
        ReplacementRequest::Cabin {
            slot,
            incoming_category,
        } => validate_cabin_replacement(*slot, incoming_category, current_cabin_crew),
    }
}

/// Evaluates a pilot replacement against the cockpit rank invariant.
///
/// The cockpit may never hold two junior pilots: if the pilot staying
/// in the other slot is junior and the incoming candidate is junior,
/// the replacement is rejected. A vacant other slot allows any rank.
///
/// # Errors
///
/// Returns `SafetyViolation::TwoJuniorPilots` if the replacement would
/// pair two juniors.
pub fn validate_pilot_replacement(
    slot: usize,
    incoming_rank: &PilotRank,
    current_pilots: &[Pilot],
) -> Result<(), SafetyViolation> {
    let other_slot: usize = if slot == 0 { 1 } else { 0 };
    if let Some(other) = current_pilots.get(other_slot) {
        if other.rank.is_junior() && incoming_rank.is_junior() {
            return Err(SafetyViolation::TwoJuniorPilots);
        }
    }
    Ok(())
}

/// Evaluates a cabin replacement against the chief-presence invariant.
///
/// If the departing member is the only chief on board and the incoming
/// candidate is not a chief, the replacement is rejected. A vacant slot
/// is an addition and can never reduce the chief count.
///
/// # Errors
///
/// Returns `SafetyViolation::ChiefRequired` if the replacement would
/// remove the last chief.
pub fn validate_cabin_replacement(
    slot: usize,
    incoming_category: &AttendantCategory,
    current_cabin_crew: &[CabinCrewMember],
) -> Result<(), SafetyViolation> {
    let Some(leaving) = current_cabin_crew.get(slot) else {
        return Ok(());
    };

    let chief_count: usize = current_cabin_crew
        .iter()
        .filter(|member| member.role.is_chief())
        .count();

    if leaving.role.is_chief() && !incoming_category.is_chief() && chief_count <= 1 {
        return Err(SafetyViolation::ChiefRequired);
    }
    Ok(())
}

/// Soft per-candidate signals shown alongside the candidate list.
///
/// Neither flag blocks selection; a license mismatch is a warning and
/// an already-on-board candidate is merely not re-assignable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateAnnotation {
    /// Whether the candidate's licenses cover the flight's aircraft.
    pub license_ok: bool,
    /// Whether the candidate already occupies a slot on this roster.
    pub already_on_board: bool,
}

/// Whether a candidate's vehicle licenses cover an aircraft type.
///
/// The match is a symmetric substring comparison, mirroring the loose
/// labels the crew directory emits (`B737` vs `Boeing 737-800`). An
/// empty license list or an unknown aircraft type is treated as
/// compatible, since absence of data is not a mismatch.
#[must_use]
pub fn license_compatible(licensed_vehicles: &[String], vehicle_type: &str) -> bool {
    let required: &str = vehicle_type.trim();
    if required.is_empty() || licensed_vehicles.is_empty() {
        return true;
    }
    licensed_vehicles
        .iter()
        .any(|license| license.contains(required) || required.contains(license.as_str()))
}

/// Computes the soft annotation flags for one candidate.
#[must_use]
pub fn annotate_candidate(
    candidate_id: &PersonId,
    licensed_vehicles: &[String],
    vehicle_type: &str,
    assigned_ids: &[PersonId],
) -> CandidateAnnotation {
    CandidateAnnotation {
        license_ok: license_compatible(licensed_vehicles, vehicle_type),
        already_on_board: assigned_ids.contains(candidate_id),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CabinCrewMember, Passenger, Pilot};

/// Validates that an infant passenger holds no independent seat code.
///
/// Infants are represented through their guardian's `parent_id` linkage;
/// a seat code on an infant record indicates corrupt upstream data.
///
/// # Errors
///
/// Returns `DomainError::InfantSeatAssignment` if the passenger is an
/// infant and carries a seat code.
pub fn validate_infant_seating(passenger: &Passenger) -> Result<(), DomainError> {
    if passenger.is_infant() {
        if let Some(seat) = passenger.seat {
            return Err(DomainError::InfantSeatAssignment {
                passenger_id: passenger.id.value().to_owned(),
                seat: seat.to_string(),
            });
        }
    }
    Ok(())
}

/// Validates the cockpit rank invariant over an assigned pilot list.
///
/// The two occupied cockpit slots must never both hold junior pilots.
/// Vacant slots and lists shorter than two are valid.
///
/// # Errors
///
/// Returns `DomainError::TwoJuniorPilots` if two assigned pilots both
/// hold the junior rank.
pub fn validate_cockpit_ranks(pilots: &[Pilot]) -> Result<(), DomainError> {
    let junior_count: usize = pilots.iter().filter(|p| p.rank.is_junior()).count();
    if junior_count >= 2 {
        return Err(DomainError::TwoJuniorPilots);
    }
    Ok(())
}

/// Validates the chief-presence invariant over an assigned cabin list.
///
/// While any cabin crew are assigned, at least one must hold the chief
/// role. An empty cabin list is valid.
///
/// # Errors
///
/// Returns `DomainError::NoChiefOnBoard` if crew are assigned and none
/// of them is a chief.
pub fn validate_chief_presence(cabin_crew: &[CabinCrewMember]) -> Result<(), DomainError> {
    if !cabin_crew.is_empty() && !cabin_crew.iter().any(|c| c.role.is_chief()) {
        return Err(DomainError::NoChiefOnBoard {
            assigned: cabin_crew.len(),
        });
    }
    Ok(())
}

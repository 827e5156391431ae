// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::layout::{AircraftConfig, COCKPIT_SLOTS};
use skyroster_domain::{CabinCrewMember, Passenger, Pilot, SeatClass, SeatCode};
use std::collections::HashMap;

/// Whether a crew station sits at the front or the rear of the cabin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationPosition {
    /// Stations `[0, front_crew_stations)`.
    Front,
    /// Stations `[front_crew_stations, total_crew_stations)`.
    Rear,
}

/// One passenger seat on the rendered map.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatAssignment<'a> {
    /// The seat code.
    pub seat: SeatCode,
    /// The class the seat's row belongs to.
    pub class: SeatClass,
    /// The seated passenger, if any.
    pub occupant: Option<&'a Passenger>,
}

/// One cabin-crew station on the rendered map.
#[derive(Debug, Clone, PartialEq)]
pub struct CrewStation<'a> {
    /// The station's ordinal index.
    pub index: usize,
    /// Whether the station is at the front or rear of the cabin.
    pub position: StationPosition,
    /// The assigned crew member, if any.
    pub occupant: Option<&'a CabinCrewMember>,
}

/// The renderable binding of people onto an aircraft topology.
///
/// Borrows the canonical lists; it is a derived view, not state.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatMap<'a> {
    /// The cockpit slots (0 = Captain, 1 = First Officer).
    pub cockpit: [Option<&'a Pilot>; COCKPIT_SLOTS],
    /// Every passenger seat on the profile, front to back.
    pub seats: Vec<SeatAssignment<'a>>,
    /// Every crew station, front stations first.
    pub stations: Vec<CrewStation<'a>>,
}

impl<'a> SeatMap<'a> {
    /// Looks up the passenger seated at a seat code.
    #[must_use]
    pub fn occupant_of(&self, seat: SeatCode) -> Option<&'a Passenger> {
        self.seats
            .iter()
            .find(|assignment| assignment.seat == seat)
            .and_then(|assignment| assignment.occupant)
    }

    /// The number of occupied passenger seats.
    #[must_use]
    pub fn occupied_seat_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|assignment| assignment.occupant.is_some())
            .count()
    }
}

/// Binds passengers, pilots and cabin crew onto an aircraft topology.
///
/// Passengers bind by exact seat-code match; pilots and cabin crew bind
/// by ordinal slot index. A seat or slot with no matching record stays
/// empty; there are no error conditions. Infant passengers never
/// occupy a seat code; they are represented solely through their
/// guardian's `parent_id` back-reference.
#[must_use]
pub fn map_occupancy<'a>(
    config: &AircraftConfig,
    passengers: &'a [Passenger],
    pilots: &'a [Pilot],
    cabin_crew: &'a [CabinCrewMember],
) -> SeatMap<'a> {
    let mut seated: HashMap<SeatCode, &'a Passenger> = HashMap::new();
    for passenger in passengers {
        if passenger.is_infant() {
            continue;
        }
        if let Some(seat) = passenger.seat {
            seated.entry(seat).or_insert(passenger);
        }
    }

    let seats: Vec<SeatAssignment<'a>> = config
        .seat_codes()
        .into_iter()
        .map(|(seat, class)| SeatAssignment {
            seat,
            class,
            occupant: seated.get(&seat).copied(),
        })
        .collect();

    let stations: Vec<CrewStation<'a>> = (0..config.total_crew_stations)
        .map(|index| CrewStation {
            index,
            position: if index < config.front_crew_stations {
                StationPosition::Front
            } else {
                StationPosition::Rear
            },
            occupant: cabin_crew.get(index),
        })
        .collect();

    SeatMap {
        cockpit: [pilots.first(), pilots.get(1)],
        seats,
        stations,
    }
}

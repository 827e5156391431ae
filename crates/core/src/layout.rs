// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use skyroster_domain::{DomainError, SeatClass, SeatCode, SeatColumn};

/// The number of cockpit slots on every flight.
///
/// Slot 0 is the Captain, slot 1 the First Officer.
pub const COCKPIT_SLOTS: usize = 2;

/// Business rows install two seats per side of the aisle.
const BUSINESS_COLUMNS: [SeatColumn; 4] = [
    SeatColumn::A,
    SeatColumn::C,
    SeatColumn::D,
    SeatColumn::F,
];

/// The physical seat and crew-station topology of an aircraft.
///
/// Derived purely from the aircraft-type label by [`plan_layout`];
/// never persisted and never mutated. Re-derive at will.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AircraftConfig {
    /// The profile's display name.
    pub name: String,
    /// Business-class row numbers, front to back.
    pub business_rows: Vec<u16>,
    /// Economy-class row numbers, front to back.
    pub economy_rows: Vec<u16>,
    /// The total number of cabin-crew stations.
    pub total_crew_stations: usize,
    /// Stations positioned at the front of the cabin.
    pub front_crew_stations: usize,
    /// Stations positioned at the rear of the cabin.
    pub rear_crew_stations: usize,
}

impl AircraftConfig {
    /// Returns the seat columns installed in a row of the given class.
    #[must_use]
    pub const fn columns_for_class(class: SeatClass) -> &'static [SeatColumn] {
        match class {
            SeatClass::Business => &BUSINESS_COLUMNS,
            SeatClass::Economy => &SeatColumn::ALL,
        }
    }

    /// Returns the class a row belongs to, or `None` for a row outside
    /// this profile.
    #[must_use]
    pub fn class_for_row(&self, row: u16) -> Option<SeatClass> {
        if self.business_rows.contains(&row) {
            Some(SeatClass::Business)
        } else if self.economy_rows.contains(&row) {
            Some(SeatClass::Economy)
        } else {
            None
        }
    }

    /// Whether a seat code exists on this profile.
    ///
    /// The row must belong to a row set and the column must be
    /// installed in that row's class.
    #[must_use]
    pub fn contains(&self, seat: SeatCode) -> bool {
        self.class_for_row(seat.row())
            .is_some_and(|class| Self::columns_for_class(class).contains(&seat.column()))
    }

    /// Validates that a seat code exists on this profile.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeatOutsideLayout` if the row or column
    /// is not installed on this aircraft.
    pub fn validate_seat(&self, seat: SeatCode) -> Result<(), DomainError> {
        if self.contains(seat) {
            return Ok(());
        }
        Err(DomainError::SeatOutsideLayout {
            seat: seat.to_string(),
            aircraft: self.name.clone(),
        })
    }

    /// Generates every seat code on this profile, front to back,
    /// columns in cabin order within each row.
    #[must_use]
    pub fn seat_codes(&self) -> Vec<(SeatCode, SeatClass)> {
        let mut codes: Vec<(SeatCode, SeatClass)> = Vec::new();
        for (rows, class) in [
            (&self.business_rows, SeatClass::Business),
            (&self.economy_rows, SeatClass::Economy),
        ] {
            for &row in rows {
                for &column in Self::columns_for_class(class) {
                    if let Ok(code) = SeatCode::new(row, column) {
                        codes.push((code, class));
                    }
                }
            }
        }
        codes
    }

    /// The number of business-class seats.
    #[must_use]
    pub fn business_seat_count(&self) -> usize {
        self.business_rows.len() * BUSINESS_COLUMNS.len()
    }

    /// The number of economy-class seats.
    #[must_use]
    pub fn economy_seat_count(&self) -> usize {
        self.economy_rows.len() * SeatColumn::ALL.len()
    }
}

/// Derives the canonical seat/crew-station topology for an aircraft
/// type label.
///
/// Classification is a case-insensitive substring match: labels
/// containing `777` select the wide-body profile, labels containing
/// `737` the narrow-body profile, and anything else falls back to the
/// narrow-body row plan with the smallest crew complement. Flight data
/// quality cannot be guaranteed, so this function is total and never
/// fails.
#[must_use]
pub fn plan_layout(aircraft_type: &str) -> AircraftConfig {
    let label: String = aircraft_type.to_lowercase();

    if label.contains("777") {
        let total: usize = 10;
        let front: usize = total.div_ceil(2);
        return AircraftConfig {
            name: String::from("Boeing 777"),
            business_rows: (1..=6).collect(),
            economy_rows: (7..=41).collect(),
            total_crew_stations: total,
            front_crew_stations: front,
            rear_crew_stations: total - front,
        };
    }

    let is_b737: bool = label.contains("737");
    let total: usize = if is_b737 { 7 } else { 6 };
    let front: usize = total.div_ceil(2);
    AircraftConfig {
        name: String::from(if is_b737 { "Boeing 737" } else { "Airbus A320" }),
        business_rows: (1..=4).collect(),
        economy_rows: (5..=33).collect(),
        total_crew_stations: total,
        front_crew_stations: front,
        rear_crew_stations: total - front,
    }
}

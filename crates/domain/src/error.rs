// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Flight number is empty or invalid.
    InvalidFlightNumber(String),
    /// Seat column letter is not one of A-F.
    InvalidSeatColumn(char),
    /// Seat row number must be at least 1.
    InvalidSeatRow(u16),
    /// Seat code string could not be parsed.
    InvalidSeatCode(String),
    /// Storage kind tag is not recognized.
    InvalidStorageKind(String),
    /// An infant passenger carries an independent seat code.
    InfantSeatAssignment {
        /// The infant's identifier.
        passenger_id: String,
        /// The offending seat code.
        seat: String,
    },
    /// A seat code falls outside the aircraft's row layout.
    SeatOutsideLayout {
        /// The offending seat code.
        seat: String,
        /// The aircraft profile name.
        aircraft: String,
    },
    /// The referenced passenger is not on the flight.
    PassengerNotFound {
        /// The passenger's identifier.
        passenger_id: String,
        /// The flight number searched.
        flight: String,
    },
    /// Seat assignment was requested for an infant passenger.
    InfantSeatRequest {
        /// The infant's identifier.
        passenger_id: String,
    },
    /// Seat assignment was requested for an already-seated passenger.
    SeatAlreadyAssigned {
        /// The passenger's identifier.
        passenger_id: String,
        /// The seat currently held.
        seat: String,
    },
    /// Both occupied cockpit slots hold junior pilots.
    TwoJuniorPilots,
    /// Cabin crew are assigned but no chief is among them.
    NoChiefOnBoard {
        /// How many cabin crew are currently assigned.
        assigned: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFlightNumber(msg) => write!(f, "Invalid flight number: {msg}"),
            Self::InvalidSeatColumn(c) => {
                write!(f, "Invalid seat column '{c}': must be one of A-F")
            }
            Self::InvalidSeatRow(row) => write!(f, "Invalid seat row {row}: must be at least 1"),
            Self::InvalidSeatCode(code) => write!(f, "Invalid seat code '{code}'"),
            Self::InvalidStorageKind(tag) => write!(f, "Invalid storage kind '{tag}'"),
            Self::InfantSeatAssignment { passenger_id, seat } => {
                write!(
                    f,
                    "Infant passenger '{passenger_id}' must not hold seat '{seat}'"
                )
            }
            Self::SeatOutsideLayout { seat, aircraft } => {
                write!(f, "Seat '{seat}' does not exist on a {aircraft}")
            }
            Self::PassengerNotFound {
                passenger_id,
                flight,
            } => {
                write!(
                    f,
                    "Passenger '{passenger_id}' is not booked on flight {flight}"
                )
            }
            Self::InfantSeatRequest { passenger_id } => {
                write!(
                    f,
                    "Infant passenger '{passenger_id}' rides with a guardian and cannot receive a seat"
                )
            }
            Self::SeatAlreadyAssigned { passenger_id, seat } => {
                write!(
                    f,
                    "Passenger '{passenger_id}' already holds seat '{seat}'"
                )
            }
            Self::TwoJuniorPilots => {
                write!(f, "Cockpit cannot hold two junior pilots")
            }
            Self::NoChiefOnBoard { assigned } => {
                write!(
                    f,
                    "No chief among the {assigned} assigned cabin crew members"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

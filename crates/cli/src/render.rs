// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of rosters and seat maps.

use color_eyre::Result;
use skyroster::{
    AircraftConfig, SeatMap, StationPosition, map_occupancy, plan_layout, resolve_connections,
};
use skyroster_client::{CandidatePools, InMemoryService, RosterReconciler};
use skyroster_domain::{Passenger, RosterSnapshot, SeatClass, SeatColumn};
use std::fmt::Write as _;

/// Renders the flight card, crew panel, passenger panel and seat map.
pub fn render_roster(snapshot: &RosterSnapshot) -> String {
    let mut out: String = String::new();

    let info = &snapshot.flight_info;
    let _ = writeln!(out, "Flight {}", info.number);
    let _ = writeln!(
        out,
        "  {} ({}) -> {} ({})",
        info.origin.city, info.origin.code, info.destination.city, info.destination.code
    );
    let _ = writeln!(out, "  Vehicle: {}", info.vehicle_type);
    if let Some(shared) = &info.shared_with {
        let _ = writeln!(out, "  Shared by {} ({})", shared.airline, shared.flight_number);
    }
    out.push('\n');

    let _ = writeln!(out, "Pilots:");
    for (slot, pilot) in snapshot.pilots.iter().enumerate() {
        let seat_name: &str = if slot == 0 { "Captain" } else { "First Officer" };
        let _ = writeln!(out, "  {} - {} ({})", seat_name, pilot.name, pilot.rank);
    }

    let _ = writeln!(out, "Cabin crew:");
    for member in &snapshot.cabin_crew {
        let _ = writeln!(out, "  {} ({})", member.name, member.role);
    }
    out.push('\n');

    let _ = writeln!(out, "Passengers:");
    for passenger in &snapshot.passengers {
        out.push_str(&render_passenger_line(passenger, &snapshot.passengers));
    }
    out.push('\n');

    out.push_str(&render_seat_map(snapshot));
    out
}

fn render_passenger_line(passenger: &Passenger, all: &[Passenger]) -> String {
    let seat_label: String = passenger.seat.map_or_else(
        || {
            if passenger.is_infant() {
                String::from("Infant")
            } else {
                String::from("Not Assigned")
            }
        },
        |seat| seat.to_string(),
    );

    let mut line: String = format!(
        "  {} [{}] - {}\n",
        passenger.name, seat_label, passenger.seat_class
    );
    let connections = resolve_connections(passenger, all);
    for connection in &connections.lines {
        let _ = writeln!(line, "      {}: {}", connection.relation, connection.label);
    }
    line
}

/// Renders the cockpit, crew stations and seat grid as text rows.
pub fn render_seat_map(snapshot: &RosterSnapshot) -> String {
    let config: AircraftConfig = plan_layout(&snapshot.flight_info.vehicle_type);
    let map: SeatMap<'_> = map_occupancy(
        &config,
        &snapshot.passengers,
        &snapshot.pilots,
        &snapshot.cabin_crew,
    );

    let mut out: String = String::new();
    let _ = writeln!(out, "Seat map ({})", config.name);

    let cockpit: String = map
        .cockpit
        .iter()
        .map(|slot| if slot.is_some() { "[P]" } else { "[ ]" })
        .collect();
    let _ = writeln!(out, "  Cockpit: {cockpit}");

    let front: String = station_row(&map, StationPosition::Front);
    let _ = writeln!(out, "  Front crew: {front}");

    let mut current_class: Option<SeatClass> = None;
    let mut row_cells: Vec<String> = Vec::new();
    let mut current_row: u16 = 0;
    for assignment in &map.seats {
        if current_class != Some(assignment.class) {
            flush_row(&mut out, current_row, &mut row_cells);
            current_class = Some(assignment.class);
            let _ = writeln!(out, "  -- {} --", assignment.class);
        } else if assignment.seat.row() != current_row {
            flush_row(&mut out, current_row, &mut row_cells);
        }
        current_row = assignment.seat.row();
        // The aisle sits between columns C and D.
        if assignment.seat.column() == SeatColumn::D {
            row_cells.push(String::from(" "));
        }
        row_cells.push(if assignment.occupant.is_some() {
            format!("[{}]", assignment.seat.column().as_char())
        } else {
            String::from("[ ]")
        });
    }
    flush_row(&mut out, current_row, &mut row_cells);

    let rear: String = station_row(&map, StationPosition::Rear);
    let _ = writeln!(out, "  Rear crew: {rear}");
    out
}

fn station_row(map: &SeatMap<'_>, position: StationPosition) -> String {
    map.stations
        .iter()
        .filter(|station| station.position == position)
        .map(|station| {
            if station.occupant.is_some() {
                "[C]"
            } else {
                "[ ]"
            }
        })
        .collect()
}

fn flush_row(out: &mut String, row: u16, cells: &mut Vec<String>) {
    if !cells.is_empty() {
        let _ = writeln!(out, "  {:>2} {}", row, cells.join(""));
        cells.clear();
    }
}

/// Renders the candidate pools with their soft annotation flags.
pub fn render_candidates(
    reconciler: &RosterReconciler<InMemoryService>,
    pools: &CandidatePools,
) -> Result<String> {
    let mut out: String = String::new();

    let _ = writeln!(out, "Pilot candidates:");
    if pools.pilots.is_empty() {
        let _ = writeln!(out, "  (none available)");
    }
    for candidate in &pools.pilots {
        let annotation = reconciler.annotate_pilot_candidate(candidate)?;
        let _ = writeln!(
            out,
            "  {} ({}){}{}",
            candidate.name,
            candidate.rank,
            if annotation.already_on_board {
                " [assigned]"
            } else {
                ""
            },
            if annotation.license_ok {
                ""
            } else {
                " [license warning]"
            },
        );
    }

    let _ = writeln!(out, "Attendant candidates:");
    if pools.attendants.is_empty() {
        let _ = writeln!(out, "  (none available)");
    }
    for candidate in &pools.attendants {
        let annotation = reconciler.annotate_attendant_candidate(candidate)?;
        let _ = writeln!(
            out,
            "  {} ({}){}{}",
            candidate.name,
            candidate.category,
            if annotation.already_on_board {
                " [assigned]"
            } else {
                ""
            },
            if annotation.license_ok {
                ""
            } else {
                " [license warning]"
            },
        );
    }

    Ok(out)
}

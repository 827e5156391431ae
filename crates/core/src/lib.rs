// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod affiliation;
mod dedupe;
mod error;
mod layout;
mod occupancy;
mod safety;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use affiliation::{ConnectionLine, ConnectionSummary, Relation, resolve_connections};
pub use dedupe::{Identified, dedupe_by_id, dedupe_by_key};
pub use error::SafetyViolation;
pub use layout::{AircraftConfig, COCKPIT_SLOTS, plan_layout};
pub use occupancy::{CrewStation, SeatAssignment, SeatMap, StationPosition, map_occupancy};
pub use safety::{
    CandidateAnnotation, ReplacementRequest, annotate_candidate, license_compatible,
    validate_cabin_replacement, validate_pilot_replacement, validate_replacement,
};

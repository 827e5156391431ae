// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use skyroster_domain::{Passenger, PersonId};

/// The kind of link between two passenger records.
///
/// Affiliations are display-only relationships; seat derivation never
/// consults them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// The linked party is the passenger's parent or guardian.
    Guardian,
    /// The linked party travels with the passenger.
    Companion,
}

impl Relation {
    /// Returns the display prefix for this relation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guardian => "Parent/Guardian",
            Self::Companion => "Traveling with",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One resolved connection line for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionLine {
    /// The relation between the passenger and the linked party.
    pub relation: Relation,
    /// The linked party's display label, e.g. `John (1A)`,
    /// `Jane (No Seat)` or `Unknown ID: 101`.
    pub label: String,
}

/// The resolved connections of a single passenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSummary {
    /// Whether the passenger has any guardian or companion link.
    pub has_connection: bool,
    /// The resolved lines, guardian first, companions in declaration
    /// order.
    pub lines: Vec<ConnectionLine>,
}

/// Resolves a passenger's guardian and companion links against the full
/// passenger list.
///
/// A linked id with no matching record resolves to an `Unknown ID`
/// fallback label instead of failing; linked records without a seat
/// resolve to `No Seat`. Pure and idempotent, so it is safe to call on every
/// render.
#[must_use]
pub fn resolve_connections(passenger: &Passenger, all_passengers: &[Passenger]) -> ConnectionSummary {
    let mut lines: Vec<ConnectionLine> = Vec::new();

    if let Some(parent_id) = &passenger.parent_id {
        lines.push(ConnectionLine {
            relation: Relation::Guardian,
            label: display_label(parent_id, all_passengers),
        });
    }

    for companion_id in &passenger.affiliated_ids {
        lines.push(ConnectionLine {
            relation: Relation::Companion,
            label: display_label(companion_id, all_passengers),
        });
    }

    ConnectionSummary {
        has_connection: passenger.parent_id.is_some() || !passenger.affiliated_ids.is_empty(),
        lines,
    }
}

/// Builds the display label for a linked passenger id.
fn display_label(id: &PersonId, all_passengers: &[Passenger]) -> String {
    all_passengers.iter().find(|p| &p.id == id).map_or_else(
        || format!("Unknown ID: {id}"),
        |found| match found.seat {
            Some(seat) => format!("{} ({seat})", found.name),
            None => format!("{} (No Seat)", found.name),
        },
    )
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use skyroster_domain::{CabinCrewMember, Passenger, PersonId, Pilot};
use std::collections::HashSet;
use std::hash::Hash;

/// A record addressed by a normalized person identity key.
///
/// This trait is the seam the deduplicator works through: pilots, cabin
/// crew and passengers all carry a [`PersonId`] and are collapsed with
/// the same function after every remote fetch.
pub trait Identified {
    /// Returns the record's identity key.
    fn person_id(&self) -> &PersonId;
}

impl Identified for Pilot {
    fn person_id(&self) -> &PersonId {
        &self.id
    }
}

impl Identified for CabinCrewMember {
    fn person_id(&self) -> &PersonId {
        &self.id
    }
}

impl Identified for Passenger {
    fn person_id(&self) -> &PersonId {
        &self.id
    }
}

/// Collapses a record list to one record per distinct key.
///
/// Only the first record observed for each key survives, and surviving
/// records keep their original relative order. The remote service may
/// return duplicate rows for flight-sharing scenarios, so this runs
/// over every crew and passenger list after every fetch.
///
/// Idempotent: deduplicating an already-deduplicated list is a no-op.
/// Empty input yields empty output.
#[must_use]
pub fn dedupe_by_key<T, K, F>(records: Vec<T>, key_of: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(key_of(record)))
        .collect()
}

/// Collapses a list of identified records to one per person identity.
#[must_use]
pub fn dedupe_by_id<T: Identified>(records: Vec<T>) -> Vec<T> {
    dedupe_by_key(records, |record| record.person_id().clone())
}

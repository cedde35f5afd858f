//! Accumulator rows and the delta-merge boundary.
//!
//! The historical corpus lives in an external store as flat
//! (person, predicate, fires, opportunities) rows. The core never holds a
//! running total; per game it computes deltas and hands them to a
//! [`CountStore`] for additive merge. Addition is associative and
//! commutative, so deltas can be merged in any order or reduced via a
//! parallel fold and still land on the same accumulator state.

use std::collections::BTreeMap;

use quorum_evaluator::CountDelta;
use serde::{Deserialize, Serialize};

/// Accumulated counts for one (person, predicate) pair.
///
/// Grows monotonically as games are ingested; `opportunities >= fires`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPredicateCounts {
    pub person_id: String,
    pub predicate: String,
    pub fires: u64,
    pub opportunities: u64,
}

/// Population totals for one predicate across every person and game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredicateBaseline {
    pub predicate: String,
    pub fires: u64,
    pub opportunities: u64,
}

impl PredicateBaseline {
    /// Population fire rate; `0.0` when no opportunity was ever recorded.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn rate(&self) -> f64 {
        if self.opportunities == 0 {
            0.0
        } else {
            self.fires as f64 / self.opportunities as f64
        }
    }
}

/// Additive-merge boundary to the external accumulator store.
pub trait CountStore {
    /// Merges one game's delta for a (person, predicate) pair. Additive,
    /// never an overwrite.
    fn apply_delta(&mut self, person_id: &str, predicate: &str, fires: u64, opportunities: u64);
}

/// In-memory [`CountStore`], used by tests and batch recomputations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCountStore {
    rows: BTreeMap<(String, String), (u64, u64)>,
}

impl MemoryCountStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated rows, sorted by (person, predicate).
    #[must_use]
    pub fn rows(&self) -> Vec<PersonPredicateCounts> {
        self.rows
            .iter()
            .map(
                |((person_id, predicate), (fires, opportunities))| PersonPredicateCounts {
                    person_id: person_id.clone(),
                    predicate: predicate.clone(),
                    fires: *fires,
                    opportunities: *opportunities,
                },
            )
            .collect()
    }

    /// Rows belonging to one person.
    #[must_use]
    pub fn rows_for(&self, person_id: &str) -> Vec<PersonPredicateCounts> {
        self.rows()
            .into_iter()
            .filter(|row| row.person_id == person_id)
            .collect()
    }
}

impl CountStore for MemoryCountStore {
    fn apply_delta(&mut self, person_id: &str, predicate: &str, fires: u64, opportunities: u64) {
        let entry = self
            .rows
            .entry((person_id.to_owned(), predicate.to_owned()))
            .or_default();
        entry.0 += fires;
        entry.1 += opportunities;
    }
}

/// Folds one game's dense deltas into a store, resolving display names to
/// person ids with the given lookup. Deltas for names the lookup cannot
/// resolve (players since deleted from the account system) are skipped.
pub fn fold_game_counts<S, F>(store: &mut S, deltas: &[CountDelta], person_of: F)
where
    S: CountStore,
    F: Fn(&str) -> Option<String>,
{
    for delta in deltas {
        if let Some(person_id) = person_of(&delta.player) {
            store.apply_delta(&person_id, &delta.predicate, delta.fires, delta.opportunities);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(player: &str, predicate: &str, fires: u64, opportunities: u64) -> CountDelta {
        CountDelta {
            predicate: predicate.to_owned(),
            player: player.to_owned(),
            opportunities,
            fires,
        }
    }

    #[test]
    fn deltas_merge_additively() {
        let mut store = MemoryCountStore::new();
        store.apply_delta("u1", "rejected_hammer", 1, 2);
        store.apply_delta("u1", "rejected_hammer", 0, 3);
        let rows = store.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].fires, rows[0].opportunities), (1, 5));
    }

    #[test]
    fn merge_order_does_not_matter() {
        let deltas = [
            delta("Alice", "a", 1, 2),
            delta("Bob", "a", 0, 1),
            delta("Alice", "b", 2, 2),
        ];
        let resolve = |name: &str| Some(format!("uid-{name}"));

        let mut forward = MemoryCountStore::new();
        fold_game_counts(&mut forward, &deltas, resolve);

        let mut backward = MemoryCountStore::new();
        let reversed: Vec<CountDelta> = deltas.iter().rev().cloned().collect();
        fold_game_counts(&mut backward, &reversed, resolve);

        assert_eq!(forward, backward);
    }

    #[test]
    fn unresolvable_names_are_skipped() {
        let mut store = MemoryCountStore::new();
        fold_game_counts(&mut store, &[delta("Ghost", "a", 1, 1)], |_| None);
        assert!(store.rows().is_empty());
    }

    #[test]
    fn rows_round_trip_through_json() {
        let row = PersonPredicateCounts {
            person_id: "u1".to_owned(),
            predicate: "rejected_hammer".to_owned(),
            fires: 3,
            opportunities: 10,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains(r#""personId":"u1""#));
        let parsed: PersonPredicateCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, row);
    }

    #[test]
    fn baseline_rate_guards_empty_corpus() {
        let empty = PredicateBaseline {
            predicate: "a".to_owned(),
            fires: 0,
            opportunities: 0,
        };
        assert_eq!(empty.rate(), 0.0);

        let populated = PredicateBaseline {
            predicate: "a".to_owned(),
            fires: 1200,
            opportunities: 8000,
        };
        assert!((populated.rate() - 0.15).abs() < 1e-12);
    }
}

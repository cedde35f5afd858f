//! Rarity tiers for display priority.
//!
//! A predicate's tier comes from its historical total fire count through a
//! fixed ascending threshold table. The historical counts are regenerated
//! offline by a batch analysis over the full corpus and checked in as data;
//! nothing here learns or adapts online. Rarity is a display hint, so an
//! unknown predicate resolves to [`Rarity::Common`] rather than failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::counts::PredicateBaseline;

/// Display rarity of a predicate, rarest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Legendary,
    Epic,
    Rare,
    Uncommon,
    Common,
}

/// Ascending fire-count thresholds; counts at or above the last bound are
/// [`Rarity::Common`].
const THRESHOLDS: [(u64, Rarity); 4] = [
    (500, Rarity::Legendary),
    (1000, Rarity::Epic),
    (2500, Rarity::Rare),
    (6000, Rarity::Uncommon),
];

/// Tier for a historical total fire count.
///
/// ```
/// use quorum_analysis::rarity::{Rarity, rarity_for_count};
///
/// assert_eq!(rarity_for_count(300), Rarity::Legendary);
/// assert_eq!(rarity_for_count(5500), Rarity::Uncommon);
/// assert_eq!(rarity_for_count(6000), Rarity::Common);
/// ```
#[must_use]
pub fn rarity_for_count(total_fires: u64) -> Rarity {
    for (bound, rarity) in THRESHOLDS {
        if total_fires < bound {
            return rarity;
        }
    }
    Rarity::Common
}

/// Historical fire-count totals, regenerated offline and checked in.
///
/// Counts over the corpus as of the last batch analysis; they only gate
/// display tiers, so staleness is harmless.
const HISTORICAL_FIRES: [(&str, u64); 17] = [
    ("all_evil_mission_succeeded", 160),
    ("sole_evil_passed_mission", 450),
    ("evil_stacked_team", 410),
    ("percival_risked_morgana", 460),
    ("merlin_proposed_visible_evil", 870),
    ("merlin_approved_visible_evil", 720),
    ("evil_rejected_partner_team", 980),
    ("evil_proposed_clean_team", 1900),
    ("good_rejected_clean_team", 2100),
    ("evil_held_hammer", 2300),
    ("proposer_self_excluded", 3100),
    ("evil_approved_own_team", 3400),
    ("reproposed_rejected_team", 4800),
    ("rejected_own_proposal", 5200),
    ("rejected_hammer", 6800),
    ("single_swap_proposal", 7200),
    ("good_on_failed_mission", 9100),
];

/// Lookup from predicate name to rarity tier.
#[derive(Debug, Clone, Default)]
pub struct RarityTable {
    counts: BTreeMap<String, u64>,
}

impl RarityTable {
    /// Table over explicit historical counts.
    #[must_use]
    pub fn new(counts: BTreeMap<String, u64>) -> Self {
        Self { counts }
    }

    /// The checked-in table for the built-in rule library.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            counts: HISTORICAL_FIRES
                .iter()
                .map(|(name, count)| ((*name).to_owned(), *count))
                .collect(),
        }
    }

    /// Rebuilds the table from freshly aggregated baselines (the offline
    /// regeneration path).
    #[must_use]
    pub fn from_baselines(baselines: &BTreeMap<String, PredicateBaseline>) -> Self {
        Self {
            counts: baselines
                .iter()
                .map(|(name, baseline)| (name.clone(), baseline.fires))
                .collect(),
        }
    }

    /// Tier for a predicate; unknown names default to [`Rarity::Common`].
    #[must_use]
    pub fn classify(&self, predicate: &str) -> Rarity {
        self.counts
            .get(predicate)
            .copied()
            .map_or(Rarity::Common, rarity_for_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundaries() {
        assert_eq!(rarity_for_count(0), Rarity::Legendary);
        assert_eq!(rarity_for_count(499), Rarity::Legendary);
        assert_eq!(rarity_for_count(500), Rarity::Epic);
        assert_eq!(rarity_for_count(999), Rarity::Epic);
        assert_eq!(rarity_for_count(1000), Rarity::Rare);
        assert_eq!(rarity_for_count(2499), Rarity::Rare);
        assert_eq!(rarity_for_count(2500), Rarity::Uncommon);
        assert_eq!(rarity_for_count(5999), Rarity::Uncommon);
        assert_eq!(rarity_for_count(6000), Rarity::Common);
    }

    #[test]
    fn classification_uses_table_and_defaults_to_common() {
        let table = RarityTable::new(
            [("seen_often".to_owned(), 5500), ("seen_rarely".to_owned(), 300)]
                .into_iter()
                .collect(),
        );
        assert_eq!(table.classify("seen_rarely"), Rarity::Legendary);
        assert_eq!(table.classify("seen_often"), Rarity::Uncommon);
        assert_eq!(table.classify("never_recorded"), Rarity::Common);
    }

    #[test]
    fn builtin_table_covers_the_rule_library() {
        let table = RarityTable::builtin();
        assert_eq!(table.classify("all_evil_mission_succeeded"), Rarity::Legendary);
        assert_eq!(table.classify("merlin_proposed_visible_evil"), Rarity::Epic);
        assert_eq!(table.classify("good_on_failed_mission"), Rarity::Common);
    }

    #[test]
    fn rarity_orders_rarest_first() {
        assert!(Rarity::Legendary < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Common);
    }
}

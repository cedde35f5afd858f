//! Population statistics over accumulated rule counts.
//!
//! This crate sits downstream of the per-game evaluator. Ingestion folds each
//! game's dense [`CountDelta`](quorum_evaluator::CountDelta) rows into an
//! external [`CountStore`](counts::CountStore); everything else is derived at
//! read time from the flat accumulator rows:
//!
//! - [`baseline`] sums rows into per-predicate population totals,
//! - [`rarity`] maps historical fire counts to display tiers,
//! - [`person`] turns one person's rows into ranked behavioral statistics
//!   (raw and shrunk rates, Wilson intervals, z-scores, percentiles).
//!
//! Only raw counts are ever stored. Derived statistics are recomputed per
//! request, so statistical parameters can change without touching stored data.

pub use self::{
    baseline::{aggregate_baselines, merge_baselines},
    counts::{
        CountStore, MemoryCountStore, PersonPredicateCounts, PredicateBaseline, fold_game_counts,
    },
    person::{Deviation, PersonAnnotationStatistic, StatisticsConfig, person_statistics},
    rarity::{Rarity, RarityTable, rarity_for_count},
};

pub mod baseline;
pub mod counts;
pub mod person;
pub mod rarity;

//! Population baseline aggregation.
//!
//! The baseline for each predicate is nothing more than the sum of every
//! person's fires and opportunities. The full recompute is the source of
//! truth and is idempotent over the corpus; the incremental merge exists as
//! an optimization for ingestion batches and must land on the same totals as
//! recomputing from scratch.

use std::collections::BTreeMap;

use crate::counts::{PersonPredicateCounts, PredicateBaseline};

/// Sums all accumulator rows into one baseline per predicate.
#[must_use]
pub fn aggregate_baselines<'a, I>(rows: I) -> BTreeMap<String, PredicateBaseline>
where
    I: IntoIterator<Item = &'a PersonPredicateCounts>,
{
    let mut baselines = BTreeMap::new();
    merge_baselines(&mut baselines, rows);
    baselines
}

/// Adds a batch of accumulator rows on top of previously aggregated totals.
pub fn merge_baselines<'a, I>(baselines: &mut BTreeMap<String, PredicateBaseline>, rows: I)
where
    I: IntoIterator<Item = &'a PersonPredicateCounts>,
{
    for row in rows {
        let entry = baselines
            .entry(row.predicate.clone())
            .or_insert_with(|| PredicateBaseline {
                predicate: row.predicate.clone(),
                fires: 0,
                opportunities: 0,
            });
        entry.fires += row.fires;
        entry.opportunities += row.opportunities;
    }
}

//! Per-person behavioral statistics against the population baseline.
//!
//! Everything here is derived on demand from raw counts and discarded after
//! the response. Smoothed rates, intervals, z-scores and percentiles are
//! deliberately never persisted: changing the shrinkage strength or the
//! significance threshold is a configuration change, not a data migration.

use std::collections::BTreeMap;

use quorum_stats::{
    normal::z_score_to_percentile,
    proportion::{
        empirical_bayes_estimate, is_significant, proportion_z_score, wilson_score_interval,
    },
};
use serde::Serialize;

use crate::{
    counts::{PersonPredicateCounts, PredicateBaseline},
    rarity::{Rarity, RarityTable},
};

/// Statistical parameters, applied uniformly at read time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsConfig {
    /// Pseudo-observations added at the baseline rate before estimating.
    pub shrinkage: f64,
    /// Confidence level for the Wilson interval.
    pub confidence_level: f64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            shrinkage: 10.0,
            confidence_level: 0.95,
        }
    }
}

/// Which side of the baseline a person's rate falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Deviation {
    Above,
    Below,
    Neutral,
}

/// One person's derived statistic for one predicate. Never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAnnotationStatistic {
    pub predicate: String,
    pub rarity: Rarity,
    pub fires: u64,
    pub opportunities: u64,
    pub raw_rate: f64,
    pub smoothed_rate: f64,
    pub interval_lower: f64,
    pub interval_upper: f64,
    pub z_score: f64,
    pub percentile_rank: f64,
    pub deviation: Deviation,
    pub is_significant: bool,
}

/// Computes one person's ranked behavioral statistics.
///
/// Each predicate the person ever had an opportunity for is compared against
/// the global baseline rate, with the person's opportunity count as sample
/// size. Predicates with zero opportunities are omitted entirely: "never had
/// the chance" is not a statistic. A predicate missing from the baselines
/// (a rule newer than the last baseline batch) compares against a 0.0 rate,
/// which the z-score guard keeps neutral rather than significant.
///
/// Output is sorted rarest-first, then by descending |z|, then by name.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn person_statistics(
    rows: &[PersonPredicateCounts],
    baselines: &BTreeMap<String, PredicateBaseline>,
    rarities: &RarityTable,
    config: &StatisticsConfig,
) -> Vec<PersonAnnotationStatistic> {
    // Fold defensively in case the store hands back split rows.
    let mut folded: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for row in rows {
        let entry = folded.entry(&row.predicate).or_default();
        entry.0 += row.fires;
        entry.1 += row.opportunities;
    }

    let mut statistics: Vec<PersonAnnotationStatistic> = folded
        .into_iter()
        .filter(|(_, (_, opportunities))| *opportunities > 0)
        .map(|(predicate, (fires, opportunities))| {
            let baseline_rate = baselines.get(predicate).map_or(0.0, PredicateBaseline::rate);
            let raw_rate = fires as f64 / opportunities as f64;
            let z_score = proportion_z_score(raw_rate, baseline_rate, opportunities);
            let (interval_lower, interval_upper) =
                wilson_score_interval(fires, opportunities, config.confidence_level);
            let deviation = if z_score > 0.0 {
                Deviation::Above
            } else if z_score < 0.0 {
                Deviation::Below
            } else {
                Deviation::Neutral
            };

            PersonAnnotationStatistic {
                predicate: predicate.to_owned(),
                rarity: rarities.classify(predicate),
                fires,
                opportunities,
                raw_rate,
                smoothed_rate: empirical_bayes_estimate(
                    fires,
                    opportunities,
                    baseline_rate,
                    config.shrinkage,
                ),
                interval_lower,
                interval_upper,
                z_score,
                percentile_rank: z_score_to_percentile(z_score),
                deviation,
                is_significant: is_significant(z_score),
            }
        })
        .collect();

    statistics.sort_by(|a, b| {
        a.rarity
            .cmp(&b.rarity)
            .then_with(|| b.z_score.abs().total_cmp(&a.z_score.abs()))
            .then_with(|| a.predicate.cmp(&b.predicate))
    });
    statistics
}

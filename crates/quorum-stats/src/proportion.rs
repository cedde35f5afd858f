//! Rate comparisons against a fixed population baseline.
//!
//! The baseline rate is treated as a known constant, not as a noisy sample:
//! the z statistic uses the baseline for its variance estimate and does not
//! propagate the baseline's own sampling error. When the baseline corpus is
//! small this understates variance for every comparison system-wide; see the
//! crate notes before changing it, since all significance determinations
//! shift together.

use crate::normal::normal_quantile;

/// Two-tailed 95% significance threshold on |z|.
pub const SIGNIFICANCE_Z: f64 = 1.96;

/// z statistic for a sample proportion against a fixed baseline proportion.
///
/// Returns `0.0` (neutral) when `sample_size` is zero or the baseline rate is
/// degenerate (0 or 1), so downstream percentile/significance logic never
/// sees `NaN`.
///
/// ```
/// use quorum_stats::proportion::proportion_z_score;
///
/// assert_eq!(proportion_z_score(0.5, 0.5, 100), 0.0);
/// assert!(proportion_z_score(0.9, 0.5, 100) > 0.0);
/// assert_eq!(proportion_z_score(0.9, 0.5, 0), 0.0);
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn proportion_z_score(sample_rate: f64, baseline_rate: f64, sample_size: u64) -> f64 {
    if sample_size == 0 {
        return 0.0;
    }
    let variance = baseline_rate * (1.0 - baseline_rate) / (sample_size as f64);
    if variance <= 0.0 {
        return 0.0;
    }
    (sample_rate - baseline_rate) / variance.sqrt()
}

/// Wilson score interval for a binomial proportion.
///
/// Returns `(0.0, 0.0)` when `opportunities` is zero: no evidence supports no
/// claim, not the vacuous `(0, 1)`.
///
/// ```
/// use quorum_stats::proportion::wilson_score_interval;
///
/// assert_eq!(wilson_score_interval(0, 0, 0.95), (0.0, 0.0));
///
/// let (lower, upper) = wilson_score_interval(8, 12, 0.95);
/// assert!(lower > 0.3);
/// assert!(upper < 1.0);
/// assert!(lower < 8.0 / 12.0 && 8.0 / 12.0 < upper);
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn wilson_score_interval(fires: u64, opportunities: u64, confidence_level: f64) -> (f64, f64) {
    if opportunities == 0 {
        return (0.0, 0.0);
    }
    let n = opportunities as f64;
    let p = fires as f64 / n;
    let z = normal_quantile(0.5 + confidence_level / 2.0);
    let z2 = z * z;

    let denominator = 1.0 + z2 / n;
    let center = (p + z2 / (2.0 * n)) / denominator;
    let margin = (z / denominator) * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt();

    ((center - margin).max(0.0), (center + margin).min(1.0))
}

/// Empirical-Bayes point estimate: the raw rate shrunk toward the baseline.
///
/// Adds `shrinkage` pseudo-observations at the baseline rate before taking
/// the rate; larger `shrinkage` means more distrust of small samples. With
/// zero opportunities the estimate is exactly the baseline.
///
/// ```
/// use quorum_stats::proportion::empirical_bayes_estimate;
///
/// assert_eq!(empirical_bayes_estimate(0, 0, 0.15, 10.0), 0.15);
/// assert_eq!(empirical_bayes_estimate(1, 3, 0.25, 1.0), 0.3125);
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn empirical_bayes_estimate(
    fires: u64,
    opportunities: u64,
    baseline_rate: f64,
    shrinkage: f64,
) -> f64 {
    if opportunities == 0 {
        return baseline_rate;
    }
    (fires as f64 + shrinkage * baseline_rate) / (opportunities as f64 + shrinkage)
}

/// Shared significance rule: |z| beyond the two-tailed 95% threshold, and
/// finite, so the guarded zero-opportunity cases can never read significant.
///
/// ```
/// use quorum_stats::proportion::is_significant;
///
/// assert!(is_significant(1.97));
/// assert!(!is_significant(1.96));
/// assert!(is_significant(-2.5));
/// assert!(!is_significant(f64::INFINITY));
/// assert!(!is_significant(f64::NAN));
/// ```
#[must_use]
pub fn is_significant(z_score: f64) -> bool {
    z_score.is_finite() && z_score.abs() > SIGNIFICANCE_Z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_score_matches_hand_computation() {
        // 8/12 against a 0.15 baseline: se = sqrt(0.15 * 0.85 / 12).
        let z = proportion_z_score(8.0 / 12.0, 0.15, 12);
        let se = (0.15_f64 * 0.85 / 12.0).sqrt();
        assert!((z - (8.0 / 12.0 - 0.15) / se).abs() < 1e-12);
        assert!(z > SIGNIFICANCE_Z);
    }

    #[test]
    fn z_score_degenerate_baselines_are_neutral() {
        assert_eq!(proportion_z_score(0.5, 0.0, 100), 0.0);
        assert_eq!(proportion_z_score(0.5, 1.0, 100), 0.0);
    }

    #[test]
    fn wilson_degenerate_and_extreme_counts() {
        assert_eq!(wilson_score_interval(0, 0, 0.95), (0.0, 0.0));

        let (lower, upper) = wilson_score_interval(0, 10, 0.95);
        assert!(lower.abs() < 1e-9);
        assert!(upper > 0.0 && upper < 0.5);

        let (lower, upper) = wilson_score_interval(10, 10, 0.95);
        assert!(lower > 0.5 && lower < 1.0);
        assert!(upper > 1.0 - 1e-9);
    }

    #[test]
    fn wilson_narrows_with_more_evidence() {
        let (l_small, u_small) = wilson_score_interval(5, 10, 0.95);
        let (l_big, u_big) = wilson_score_interval(500, 1000, 0.95);
        assert!(u_big - l_big < u_small - l_small);
    }

    #[test]
    fn shrinkage_boundary_holds_for_any_strength() {
        for k in [0.5, 1.0, 10.0, 1000.0] {
            for baseline in [0.0, 0.15, 0.5, 1.0] {
                assert_eq!(empirical_bayes_estimate(0, 0, baseline, k), baseline);
            }
        }
    }

    #[test]
    fn shrinkage_pulls_toward_baseline() {
        let raw = 8.0 / 12.0;
        let shrunk = empirical_bayes_estimate(8, 12, 0.15, 10.0);
        assert!(shrunk < raw);
        assert!(shrunk > 0.15);
        // Heavier shrinkage pulls harder.
        assert!(empirical_bayes_estimate(8, 12, 0.15, 100.0) < shrunk);
    }

    #[test]
    fn significance_threshold_is_exclusive_and_finite() {
        assert!(!is_significant(0.0));
        assert!(!is_significant(1.96));
        assert!(is_significant(1.960_001));
        assert!(is_significant(-1.97));
        assert!(!is_significant(f64::NEG_INFINITY));
    }
}

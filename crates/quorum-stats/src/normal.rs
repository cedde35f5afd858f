//! Standard normal distribution functions.
//!
//! Closed-form approximations, accurate far beyond what rate comparisons
//! need: the CDF uses the Abramowitz & Stegun 7.1.26 error-function
//! polynomial (absolute error < 1.5e-7) and the quantile uses Acklam's
//! rational approximation (relative error < 1.15e-9).

use std::f64::consts::SQRT_2;

/// Error function approximation (Abramowitz & Stegun 7.1.26).
fn erf(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    const P: f64 = 0.327_591_1;
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;

    let sign = x.signum();
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Cumulative distribution function of the standard normal.
///
/// Monotonic; `normal_cdf(0.0) == 0.5` exactly.
#[must_use]
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Maps a z-score to a percentile rank in `[0, 100]`.
///
/// `z_score_to_percentile(0.0) == 50.0` exactly; non-finite input saturates
/// to the nearest bound instead of propagating.
///
/// ```
/// use quorum_stats::normal::z_score_to_percentile;
///
/// assert_eq!(z_score_to_percentile(0.0), 50.0);
/// assert!(z_score_to_percentile(1.96) > 97.0);
/// assert!(z_score_to_percentile(-1.96) < 3.0);
/// ```
#[must_use]
pub fn z_score_to_percentile(z: f64) -> f64 {
    if z == f64::INFINITY {
        return 100.0;
    }
    if z == f64::NEG_INFINITY {
        return 0.0;
    }
    (normal_cdf(z) * 100.0).clamp(0.0, 100.0)
}

/// Quantile (inverse CDF) of the standard normal (Acklam's approximation).
///
/// Returns `-INFINITY` at `p <= 0` and `INFINITY` at `p >= 1`.
#[must_use]
pub fn normal_quantile(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.02425;

    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}

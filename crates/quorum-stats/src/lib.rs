//! Statistical utilities for behavioral annotation analysis.
//!
//! This crate provides the pure numeric layer under the population
//! statistics: comparing one person's fire rate against a global baseline.
//! Every function is total over its domain, with explicit base cases for the
//! zero-opportunity inputs that would otherwise produce `NaN` or `Infinity`.
//!
//! # Modules
//!
//! - [`proportion`]: z-scores against a fixed baseline rate, Wilson score
//!   intervals, empirical-Bayes shrinkage, the shared significance rule
//! - [`normal`]: standard normal CDF/quantile and z-to-percentile mapping
//!
//! # Examples
//!
//! ## Shrinking a small-sample rate toward the baseline
//!
//! ```
//! use quorum_stats::proportion::empirical_bayes_estimate;
//!
//! // One fire in three tries reads as 33%, but with 1 pseudo-observation at
//! // a 25% baseline the estimate is pulled toward the population.
//! let estimate = empirical_bayes_estimate(1, 3, 0.25, 1.0);
//! assert_eq!(estimate, 0.3125);
//!
//! // No evidence at all: the estimate is exactly the baseline.
//! assert_eq!(empirical_bayes_estimate(0, 0, 0.25, 10.0), 0.25);
//! ```
//!
//! ## Testing a rate against the population
//!
//! ```
//! use quorum_stats::proportion::{is_significant, proportion_z_score};
//!
//! let z = proportion_z_score(8.0 / 12.0, 0.15, 12);
//! assert!(z > 1.96);
//! assert!(is_significant(z));
//! assert!(!is_significant(f64::INFINITY));
//! ```
//!
//! ## Percentile ranks
//!
//! ```
//! use quorum_stats::normal::z_score_to_percentile;
//!
//! assert_eq!(z_score_to_percentile(0.0), 50.0);
//! assert!(z_score_to_percentile(1.0) > z_score_to_percentile(-1.0));
//! ```

pub mod normal;
pub mod proportion;

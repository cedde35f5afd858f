//! Per-game evaluation of the behavioral rule library.
//!
//! Given one finished [`GameLogRecord`](quorum_game::GameLogRecord), this
//! crate produces the two per-game outputs of the pipeline:
//!
//! 1. Sparse [`AnnotationResult`](annotation::AnnotationResult) rows for
//!    fired rules, regrouped by [`annotator::annotate_game`] into the
//!    mission → proposal → player display tree.
//! 2. Dense [`CountDelta`](evaluator::CountDelta) rows per (rule, player),
//!    including non-firing opportunities, destined for additive merge into
//!    the external accumulator store.
//!
//! Evaluation is deterministic and stateless: the same record always yields
//! identical output, and distinct games can be evaluated concurrently.
//!
//! # Example
//!
//! ```no_run
//! use quorum_evaluator::{annotator::annotate_game, evaluator::GameEvaluator};
//! use quorum_game::GameLogRecord;
//!
//! # fn load_game() -> GameLogRecord { unimplemented!() }
//! let record = load_game();
//! let evaluation = GameEvaluator::default().evaluate(&record);
//!
//! // Dense counts go to the accumulator store; annotations go to display.
//! let tree = annotate_game(&record, &evaluation.annotations, false);
//! println!(
//!     "{} annotations across {} missions",
//!     evaluation.annotations.len(),
//!     tree.missions.len()
//! );
//! ```

pub use self::{
    annotation::{AnnotationResult, DecisionRef},
    annotator::{AnnotatedGame, annotate_game},
    evaluator::{CountDelta, GameEvaluation, GameEvaluator},
};

pub mod annotation;
pub mod annotator;
pub mod evaluator;
#[cfg(test)]
pub(crate) mod testutil;

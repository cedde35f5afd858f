//! Annotation output rows.

use serde::{Deserialize, Serialize};

/// Reference to the decision point an annotation was observed at.
///
/// Indices are zero-based positions within the game record; the subject
/// player (voter, team member) lives on the [`AnnotationResult`] itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DecisionRef {
    #[serde(rename_all = "camelCase")]
    Proposal { mission: usize, proposal: usize },
    #[serde(rename_all = "camelCase")]
    ProposalVote { mission: usize, proposal: usize },
    #[serde(rename_all = "camelCase")]
    MissionVote { mission: usize },
}

impl DecisionRef {
    /// Mission index of the decision point.
    #[must_use]
    pub const fn mission(&self) -> usize {
        match self {
            DecisionRef::Proposal { mission, .. }
            | DecisionRef::ProposalVote { mission, .. }
            | DecisionRef::MissionVote { mission } => *mission,
        }
    }

    /// Proposal index, when the decision point is proposal-scoped.
    #[must_use]
    pub const fn proposal(&self) -> Option<usize> {
        match self {
            DecisionRef::Proposal { proposal, .. }
            | DecisionRef::ProposalVote { proposal, .. } => Some(*proposal),
            DecisionRef::MissionVote { .. } => None,
        }
    }
}

/// One fired observation: a named rule that applied to a player's decision.
///
/// Rows exist only for fired cases; non-firing opportunities are tracked in
/// the dense per-game counts instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationResult {
    /// Stable rule identifier (the accumulator/baseline key).
    pub predicate: String,
    /// Display name of the subject player.
    pub player: String,
    /// Where in the game the behavior was observed.
    pub decision: DecisionRef,
    /// Always true on emitted rows; kept for wire compatibility.
    pub fired: bool,
    /// Human-readable sentence describing the behavior.
    pub commentary: String,
    /// Whether the commentary reveals secret information.
    pub hidden: bool,
}

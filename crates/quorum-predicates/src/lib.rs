//! Named behavioral rules over finished hidden-role games.
//!
//! Three independent rule families, one per decision-point shape:
//!
//! - [`ProposalRule`] - judged against each team proposal (subject: proposer)
//! - [`ProposalVoteRule`] - judged against each (proposal, voter) pair
//! - [`MissionVoteRule`] - judged against each (decided mission, member) pair
//!
//! Each rule exposes the same three-part contract:
//!
//! 1. `relevant` - was this decision point an opportunity for the behavior at
//!    all, independent of what the player actually did. Side-effect free.
//! 2. `fired` - did the notable behavior occur. May assume `relevant` held;
//!    the evaluator never calls `fired` otherwise.
//! 3. `commentary` - human-readable sentence plus a `hidden` flag marking
//!    text that reveals secret information (roles, alignments) and must not
//!    be shown without explicit consent.
//!
//! Rules that need a known alignment report `relevant = false` when the
//! context answers "unknown"; a game without a role reveal therefore yields
//! no role-dependent observations rather than an error.
//!
//! The registry functions ([`proposal_rules`], [`proposal_vote_rules`],
//! [`mission_vote_rules`]) list each family rarest-first. That ordering is a
//! display priority only; rules are independent and evaluation order has no
//! semantic effect.

use std::fmt;

use quorum_game::GameContext;

pub use self::{
    mission_vote::mission_vote_rules,
    point::{MissionPoint, ProposalPoint, VotePoint},
    proposal::proposal_rules,
    proposal_vote::proposal_vote_rules,
};

pub mod mission_vote;
pub mod point;
pub mod proposal;
pub mod proposal_vote;
#[cfg(test)]
pub(crate) mod testutil;

/// Human-readable annotation text with its visibility flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commentary {
    /// One sentence describing the observed behavior.
    pub text: String,
    /// Whether the text reveals secret information (roles, alignments).
    pub hidden: bool,
}

impl Commentary {
    /// Commentary safe to show to anyone.
    #[must_use]
    pub fn shown(text: String) -> Self {
        Self {
            text,
            hidden: false,
        }
    }

    /// Commentary that leaks secret information and needs consent to display.
    #[must_use]
    pub fn secret(text: String) -> Self {
        Self { text, hidden: true }
    }
}

/// A named rule judged against each team proposal.
pub trait ProposalRule: fmt::Debug + Send + Sync {
    /// Stable identifier used as the accumulator/baseline key.
    fn name(&self) -> &str;
    /// Whether this proposal was an opportunity for the behavior.
    fn relevant(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool;
    /// Whether the behavior occurred. May assume `relevant` returned true.
    fn fired(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool;
    /// Commentary for a fired observation. May assume `fired` returned true.
    fn commentary(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> Commentary;
    #[must_use]
    fn clone_boxed(&self) -> BoxedProposalRule;
}

pub type BoxedProposalRule = Box<dyn ProposalRule>;

impl Clone for BoxedProposalRule {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// A named rule judged against each (proposal, voter) pair.
pub trait ProposalVoteRule: fmt::Debug + Send + Sync {
    /// Stable identifier used as the accumulator/baseline key.
    fn name(&self) -> &str;
    /// Whether this vote was an opportunity for the behavior.
    fn relevant(&self, ctx: &GameContext, point: &VotePoint<'_>) -> bool;
    /// Whether the behavior occurred. May assume `relevant` returned true.
    fn fired(&self, ctx: &GameContext, point: &VotePoint<'_>) -> bool;
    /// Commentary for a fired observation. May assume `fired` returned true.
    fn commentary(&self, ctx: &GameContext, point: &VotePoint<'_>) -> Commentary;
    #[must_use]
    fn clone_boxed(&self) -> BoxedProposalVoteRule;
}

pub type BoxedProposalVoteRule = Box<dyn ProposalVoteRule>;

impl Clone for BoxedProposalVoteRule {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// A named rule judged against each (decided mission, team member) pair.
pub trait MissionVoteRule: fmt::Debug + Send + Sync {
    /// Stable identifier used as the accumulator/baseline key.
    fn name(&self) -> &str;
    /// Whether this mission slot was an opportunity for the behavior.
    fn relevant(&self, ctx: &GameContext, point: &MissionPoint<'_>) -> bool;
    /// Whether the behavior occurred. May assume `relevant` returned true.
    fn fired(&self, ctx: &GameContext, point: &MissionPoint<'_>) -> bool;
    /// Commentary for a fired observation. May assume `fired` returned true.
    fn commentary(&self, ctx: &GameContext, point: &MissionPoint<'_>) -> Commentary;
    #[must_use]
    fn clone_boxed(&self) -> BoxedMissionVoteRule;
}

pub type BoxedMissionVoteRule = Box<dyn MissionVoteRule>;

impl Clone for BoxedMissionVoteRule {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn rule_names_are_unique_across_families() {
        let mut names = BTreeSet::new();
        for rule in proposal_rules() {
            assert!(names.insert(rule.name().to_owned()), "{}", rule.name());
        }
        for rule in proposal_vote_rules() {
            assert!(names.insert(rule.name().to_owned()), "{}", rule.name());
        }
        for rule in mission_vote_rules() {
            assert!(names.insert(rule.name().to_owned()), "{}", rule.name());
        }
        assert_eq!(names.len(), 17);
    }
}

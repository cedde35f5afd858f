//! Runs the full rule library against one finished game.
//!
//! For every decision point and every rule whose shape matches it, the
//! evaluator checks relevance first and only then the fire test; `fired` is
//! structurally unreachable without `relevant` having held, which is what
//! makes the per-rule "may assume relevant" contract safe.
//!
//! Two outputs per game:
//!
//! - the sparse [`AnnotationResult`] list for fired cases, consumed by the
//!   annotator for display, and
//! - dense per-(rule, player) `{opportunities, fires}` deltas, which is what
//!   actually gets merged into the external accumulator store.
//!
//! The evaluator holds no mutable state between games and its counts are
//! folded through a `BTreeMap`, so evaluating the same record twice yields
//! byte-identical results and distinct games can be processed concurrently.

use std::collections::BTreeMap;

use quorum_game::{GameContext, GameLogRecord};
use quorum_predicates::{
    BoxedMissionVoteRule, BoxedProposalRule, BoxedProposalVoteRule, MissionPoint, ProposalPoint,
    VotePoint, mission_vote_rules, proposal_rules, proposal_vote_rules,
};
use serde::{Deserialize, Serialize};

use crate::annotation::{AnnotationResult, DecisionRef};

/// Dense per-game accumulator delta for one (rule, player) pair.
///
/// Destined for an additive merge into the external accumulator store;
/// `opportunities >= fires` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountDelta {
    pub predicate: String,
    pub player: String,
    pub opportunities: u64,
    pub fires: u64,
}

/// Everything the evaluator derives from one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEvaluation {
    /// Fired observations, in game order.
    pub annotations: Vec<AnnotationResult>,
    /// Dense counts, sorted by (rule, player).
    pub counts: Vec<CountDelta>,
}

/// Evaluates the rule library against finished game records.
#[derive(Debug, Clone)]
pub struct GameEvaluator {
    proposal_rules: Vec<BoxedProposalRule>,
    proposal_vote_rules: Vec<BoxedProposalVoteRule>,
    mission_vote_rules: Vec<BoxedMissionVoteRule>,
}

impl Default for GameEvaluator {
    /// An evaluator carrying the full built-in rule library.
    fn default() -> Self {
        Self {
            proposal_rules: proposal_rules(),
            proposal_vote_rules: proposal_vote_rules(),
            mission_vote_rules: mission_vote_rules(),
        }
    }
}

impl GameEvaluator {
    /// An evaluator over an explicit rule set (used by tests and offline
    /// recalibration jobs that run a subset of the library).
    #[must_use]
    pub fn with_rules(
        proposal_rules: Vec<BoxedProposalRule>,
        proposal_vote_rules: Vec<BoxedProposalVoteRule>,
        mission_vote_rules: Vec<BoxedMissionVoteRule>,
    ) -> Self {
        Self {
            proposal_rules,
            proposal_vote_rules,
            mission_vote_rules,
        }
    }

    /// Evaluates every matching rule at every decision point of one game.
    ///
    /// A record whose roles were never revealed (canceled or truncated game)
    /// yields an empty evaluation: role-dependent rules would all report
    /// "not relevant" and the remaining role-free observations would skew
    /// baselines with games that never finished.
    #[must_use]
    pub fn evaluate(&self, record: &GameLogRecord) -> GameEvaluation {
        let ctx = GameContext::new(record);
        if !ctx.any_roles_known() {
            return GameEvaluation::default();
        }

        let mut annotations = Vec::new();
        let mut tally: BTreeMap<(String, String), (u64, u64)> = BTreeMap::new();

        for (mission_index, mission) in record.missions.iter().enumerate() {
            for proposal_index in 0..mission.proposals.len() {
                let point = ProposalPoint {
                    record,
                    mission_index,
                    proposal_index,
                };
                self.evaluate_proposal(&ctx, &point, &mut annotations, &mut tally);

                for player in &record.players {
                    let point = VotePoint {
                        record,
                        mission_index,
                        proposal_index,
                        voter: &player.name,
                    };
                    self.evaluate_vote(&ctx, &point, &mut annotations, &mut tally);
                }
            }

            if mission.is_decided() {
                for member in mission.final_team() {
                    let point = MissionPoint {
                        record,
                        mission_index,
                        member,
                    };
                    self.evaluate_mission_slot(&ctx, &point, &mut annotations, &mut tally);
                }
            }
        }

        let counts = tally
            .into_iter()
            .map(|((predicate, player), (opportunities, fires))| CountDelta {
                predicate,
                player,
                opportunities,
                fires,
            })
            .collect();

        GameEvaluation {
            annotations,
            counts,
        }
    }

    fn evaluate_proposal(
        &self,
        ctx: &GameContext,
        point: &ProposalPoint<'_>,
        annotations: &mut Vec<AnnotationResult>,
        tally: &mut BTreeMap<(String, String), (u64, u64)>,
    ) {
        for rule in &self.proposal_rules {
            if !rule.relevant(ctx, point) {
                continue;
            }
            let entry = tally
                .entry((rule.name().to_owned(), point.proposer().to_owned()))
                .or_default();
            entry.0 += 1;
            if rule.fired(ctx, point) {
                entry.1 += 1;
                let commentary = rule.commentary(ctx, point);
                annotations.push(AnnotationResult {
                    predicate: rule.name().to_owned(),
                    player: point.proposer().to_owned(),
                    decision: DecisionRef::Proposal {
                        mission: point.mission_index,
                        proposal: point.proposal_index,
                    },
                    fired: true,
                    commentary: commentary.text,
                    hidden: commentary.hidden,
                });
            }
        }
    }

    fn evaluate_vote(
        &self,
        ctx: &GameContext,
        point: &VotePoint<'_>,
        annotations: &mut Vec<AnnotationResult>,
        tally: &mut BTreeMap<(String, String), (u64, u64)>,
    ) {
        for rule in &self.proposal_vote_rules {
            if !rule.relevant(ctx, point) {
                continue;
            }
            let entry = tally
                .entry((rule.name().to_owned(), point.voter.to_owned()))
                .or_default();
            entry.0 += 1;
            if rule.fired(ctx, point) {
                entry.1 += 1;
                let commentary = rule.commentary(ctx, point);
                annotations.push(AnnotationResult {
                    predicate: rule.name().to_owned(),
                    player: point.voter.to_owned(),
                    decision: DecisionRef::ProposalVote {
                        mission: point.mission_index,
                        proposal: point.proposal_index,
                    },
                    fired: true,
                    commentary: commentary.text,
                    hidden: commentary.hidden,
                });
            }
        }
    }

    fn evaluate_mission_slot(
        &self,
        ctx: &GameContext,
        point: &MissionPoint<'_>,
        annotations: &mut Vec<AnnotationResult>,
        tally: &mut BTreeMap<(String, String), (u64, u64)>,
    ) {
        for rule in &self.mission_vote_rules {
            if !rule.relevant(ctx, point) {
                continue;
            }
            let entry = tally
                .entry((rule.name().to_owned(), point.member.to_owned()))
                .or_default();
            entry.0 += 1;
            if rule.fired(ctx, point) {
                entry.1 += 1;
                let commentary = rule.commentary(ctx, point);
                annotations.push(AnnotationResult {
                    predicate: rule.name().to_owned(),
                    player: point.member.to_owned(),
                    decision: DecisionRef::MissionVote {
                        mission: point.mission_index,
                    },
                    fired: true,
                    commentary: commentary.text,
                    hidden: commentary.hidden,
                });
            }
        }
    }
}

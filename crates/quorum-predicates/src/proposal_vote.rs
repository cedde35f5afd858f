//! Proposal-vote rules. The subject is the voting player.
//!
//! Every seated player votes on every proposal; only approvals are recorded
//! on the wire, so absence from the approval list is a reject.
//!
//! Rules that read a vote as a genuine trust signal exclude the forced 5th
//! (hammer) proposal from relevance, where rejecting is close to throwing the
//! game. Rules that are about the hammer itself, or about self-interest,
//! include it.

use quorum_game::{GameContext, Role};

use crate::{BoxedProposalVoteRule, Commentary, ProposalVoteRule, point::VotePoint};

/// All proposal-vote rules, rarest-first.
#[must_use]
pub fn proposal_vote_rules() -> Vec<BoxedProposalVoteRule> {
    vec![
        Box::new(MerlinApprovedVisibleEvil),
        Box::new(EvilRejectedPartnerTeam),
        Box::new(GoodRejectedCleanTeam),
        Box::new(EvilApprovedOwnTeam),
        Box::new(RejectedOwnProposal),
        Box::new(RejectedHammer),
    ]
}

/// Merlin approved a team carrying evil Merlin can see.
///
/// Either deep camouflage or a costly mistake. Hammer votes are excluded:
/// approving a forced proposal says nothing.
#[derive(Debug, Clone)]
pub struct MerlinApprovedVisibleEvil;

impl ProposalVoteRule for MerlinApprovedVisibleEvil {
    fn name(&self) -> &'static str {
        "merlin_approved_visible_evil"
    }
    fn relevant(&self, ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        ctx.role(point.voter) == Some(Role::Merlin)
            && !point.is_hammer()
            && !point.is_proposer()
            && ctx.visible_evil_on_team(point.voter, &point.proposal().team) > 0
    }
    fn fired(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        point.approved()
    }
    fn commentary(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{} (Merlin) approved a team carrying evil they can see",
            point.voter
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalVoteRule {
        Box::new(self.clone())
    }
}

/// An evil player rejected a team that already carried a visible partner.
///
/// Turning down a mission their side was positioned to fail.
#[derive(Debug, Clone)]
pub struct EvilRejectedPartnerTeam;

impl ProposalVoteRule for EvilRejectedPartnerTeam {
    fn name(&self) -> &'static str {
        "evil_rejected_partner_team"
    }
    fn relevant(&self, ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        ctx.is_evil(point.voter) == Some(true)
            && !point.on_team()
            && !point.is_hammer()
            && ctx.visible_evil_on_team(point.voter, &point.proposal().team) >= 1
    }
    fn fired(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        !point.approved()
    }
    fn commentary(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{}, who is evil, rejected a team carrying a fellow evil",
            point.voter
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalVoteRule {
        Box::new(self.clone())
    }
}

/// A good player rejected a team that was, by the reveal, entirely good.
///
/// The misread that costs good teams games. Hammer votes are excluded.
#[derive(Debug, Clone)]
pub struct GoodRejectedCleanTeam;

impl ProposalVoteRule for GoodRejectedCleanTeam {
    fn name(&self) -> &'static str {
        "good_rejected_clean_team"
    }
    fn relevant(&self, ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        ctx.is_evil(point.voter) == Some(false)
            && !point.is_hammer()
            && ctx.team_all_good(&point.proposal().team) == Some(true)
    }
    fn fired(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        !point.approved()
    }
    fn commentary(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{}, who is good, rejected a team of all good players",
            point.voter
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalVoteRule {
        Box::new(self.clone())
    }
}

/// An evil player approved a team containing themselves without proposing it.
///
/// Self-interest on the record: they were handed a mission seat and took it.
/// Hammer votes count; accepting a forced seat is still accepting it.
#[derive(Debug, Clone)]
pub struct EvilApprovedOwnTeam;

impl ProposalVoteRule for EvilApprovedOwnTeam {
    fn name(&self) -> &'static str {
        "evil_approved_own_team"
    }
    fn relevant(&self, ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        ctx.is_evil(point.voter) == Some(true) && point.on_team() && !point.is_proposer()
    }
    fn fired(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        point.approved()
    }
    fn commentary(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{}, who is evil, approved a team containing themselves without proposing it",
            point.voter
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalVoteRule {
        Box::new(self.clone())
    }
}

/// A player voted against their own proposal.
///
/// Role-free; almost always a deliberate distancing play.
#[derive(Debug, Clone)]
pub struct RejectedOwnProposal;

impl ProposalVoteRule for RejectedOwnProposal {
    fn name(&self) -> &'static str {
        "rejected_own_proposal"
    }
    fn relevant(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        point.is_proposer()
    }
    fn fired(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        !point.approved()
    }
    fn commentary(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> Commentary {
        Commentary::shown(format!("{} voted against their own proposal", point.voter))
    }
    fn clone_boxed(&self) -> BoxedProposalVoteRule {
        Box::new(self.clone())
    }
}

/// A player rejected the forced hammer proposal.
///
/// Rejecting the hammer hands the game away; doing it anyway is notable.
#[derive(Debug, Clone)]
pub struct RejectedHammer;

impl ProposalVoteRule for RejectedHammer {
    fn name(&self) -> &'static str {
        "rejected_hammer"
    }
    fn relevant(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        point.is_hammer()
    }
    fn fired(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> bool {
        !point.approved()
    }
    fn commentary(&self, _ctx: &GameContext, point: &VotePoint<'_>) -> Commentary {
        Commentary::shown(format!(
            "{} voted against the forced hammer proposal",
            point.voter
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalVoteRule {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use quorum_game::{GameLogRecord, MissionState, ProposalState};

    use super::*;
    use crate::testutil::{FIVE_SEATS, mission, proposal, record};

    fn vote<'a>(record: &'a GameLogRecord, proposal_index: usize, voter: &'a str) -> VotePoint<'a> {
        VotePoint {
            record,
            mission_index: 0,
            proposal_index,
            voter,
        }
    }

    #[test]
    fn merlin_approval_of_dirty_team_fires_off_hammer_only() {
        let proposals = vec![
            proposal("Bob", &["Bob", "Eve"], &["Alice", "Bob", "Eve"], ProposalState::Rejected),
            proposal("Carol", &["Carol", "Dave"], &["Carol"], ProposalState::Rejected),
            proposal("Dave", &["Dave", "Eve"], &[], ProposalState::Rejected),
            proposal("Alice", &["Bob", "Eve"], &["Alice"], ProposalState::Rejected),
            proposal("Eve", &["Bob", "Eve"], &["Alice", "Bob"], ProposalState::Rejected),
        ];
        let game = record(&FIVE_SEATS, vec![mission(MissionState::Fail, &[], proposals)]);
        let ctx = GameContext::new(&game);
        let rule = MerlinApprovedVisibleEvil;

        let early = vote(&game, 0, "Alice");
        assert!(rule.relevant(&ctx, &early));
        assert!(rule.fired(&ctx, &early));

        // Merlin rejected the second dirty team: relevant, not fired.
        let rejected = vote(&game, 1, "Alice");
        assert!(rule.relevant(&ctx, &rejected));
        assert!(!rule.fired(&ctx, &rejected));

        // Merlin proposing is the proposal rule's business, not a vote signal.
        assert!(!rule.relevant(&ctx, &vote(&game, 3, "Alice")));
        // Hammer approval is forced, not a signal.
        assert!(!rule.relevant(&ctx, &vote(&game, 4, "Alice")));
    }

    #[test]
    fn evil_rejecting_partner_team_fires() {
        let game = record(
            &FIVE_SEATS,
            vec![mission(
                MissionState::Fail,
                &[],
                vec![proposal("Carol", &["Carol", "Eve"], &["Carol", "Eve"], ProposalState::Rejected)],
            )],
        );
        let ctx = GameContext::new(&game);
        let rule = EvilRejectedPartnerTeam;

        // Dave (evil, off team) sees Eve on the team and still rejected.
        let dave = vote(&game, 0, "Dave");
        assert!(rule.relevant(&ctx, &dave));
        assert!(rule.fired(&ctx, &dave));

        // Eve is on the team herself: different rule's territory.
        assert!(!rule.relevant(&ctx, &vote(&game, 0, "Eve")));
    }

    #[test]
    fn good_rejecting_clean_team_fires() {
        let game = record(
            &FIVE_SEATS,
            vec![mission(
                MissionState::Success,
                &["Alice", "Carol"],
                vec![proposal(
                    "Alice",
                    &["Alice", "Carol"],
                    &["Alice", "Carol", "Dave"],
                    ProposalState::Approved,
                )],
            )],
        );
        let ctx = GameContext::new(&game);
        let rule = GoodRejectedCleanTeam;

        // Bob is good and rejected an all-good team.
        let bob = vote(&game, 0, "Bob");
        assert!(rule.relevant(&ctx, &bob));
        assert!(rule.fired(&ctx, &bob));
        assert!(rule.commentary(&ctx, &bob).hidden);

        // Carol approved the same team: relevant, not fired.
        let carol = vote(&game, 0, "Carol");
        assert!(rule.relevant(&ctx, &carol));
        assert!(!rule.fired(&ctx, &carol));

        // Dave is evil: not an opportunity for this rule.
        assert!(!rule.relevant(&ctx, &vote(&game, 0, "Dave")));
    }

    #[test]
    fn evil_approving_own_seat_requires_not_proposing() {
        let game = record(
            &FIVE_SEATS,
            vec![mission(
                MissionState::Fail,
                &["Carol", "Dave"],
                vec![proposal(
                    "Carol",
                    &["Carol", "Dave"],
                    &["Carol", "Dave"],
                    ProposalState::Approved,
                )],
            )],
        );
        let ctx = GameContext::new(&game);
        let rule = EvilApprovedOwnTeam;

        let dave = vote(&game, 0, "Dave");
        assert!(rule.relevant(&ctx, &dave));
        assert!(rule.fired(&ctx, &dave));

        // Off-team evil and proposers are out of scope.
        assert!(!rule.relevant(&ctx, &vote(&game, 0, "Eve")));
        assert!(!rule.relevant(&ctx, &vote(&game, 0, "Carol")));
    }

    #[test]
    fn rejecting_own_proposal_and_hammer_are_role_free() {
        let proposals = vec![
            proposal("Alice", &["Alice", "Bob"], &["Bob"], ProposalState::Rejected),
            proposal("Bob", &["Alice", "Bob"], &[], ProposalState::Rejected),
            proposal("Carol", &["Alice", "Bob"], &[], ProposalState::Rejected),
            proposal("Dave", &["Alice", "Bob"], &[], ProposalState::Rejected),
            proposal("Eve", &["Alice", "Bob"], &["Alice", "Bob", "Carol", "Eve"], ProposalState::Approved),
        ];
        let game = record(&FIVE_SEATS, vec![mission(MissionState::Success, &[], proposals)]);
        let ctx = GameContext::new(&game);

        let own = RejectedOwnProposal;
        let alice = vote(&game, 0, "Alice");
        assert!(own.relevant(&ctx, &alice));
        assert!(own.fired(&ctx, &alice));
        assert!(!own.relevant(&ctx, &vote(&game, 0, "Bob")));

        let hammer = RejectedHammer;
        assert!(!hammer.relevant(&ctx, &vote(&game, 3, "Dave")));
        let dave = vote(&game, 4, "Dave");
        assert!(hammer.relevant(&ctx, &dave));
        assert!(hammer.fired(&ctx, &dave));
        assert!(!hammer.fired(&ctx, &vote(&game, 4, "Carol")));
    }
}

//! Proposal-time rules. The subject is always the proposing player.

use quorum_game::{GameContext, Role};

use crate::{BoxedProposalRule, Commentary, ProposalRule, point::ProposalPoint};

/// All proposal-time rules, rarest-first.
#[must_use]
pub fn proposal_rules() -> Vec<BoxedProposalRule> {
    vec![
        Box::new(EvilStackedTeam),
        Box::new(PercivalRiskedMorgana),
        Box::new(MerlinProposedVisibleEvil),
        Box::new(EvilProposedCleanTeam),
        Box::new(EvilHeldHammer),
        Box::new(ProposerSelfExcluded),
        Box::new(ReproposedRejectedTeam),
        Box::new(SingleSwapProposal),
    ]
}

/// An evil proposer put themselves on a team alongside a partner they can see.
///
/// Double-loading a team is a high-risk play: one fail card is enough on most
/// missions, and a second evil on the team only adds exposure.
#[derive(Debug, Clone)]
pub struct EvilStackedTeam;

impl ProposalRule for EvilStackedTeam {
    fn name(&self) -> &'static str {
        "evil_stacked_team"
    }
    fn relevant(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        ctx.is_evil(point.proposer()) == Some(true) && ctx.sees_any_evil(point.proposer())
    }
    fn fired(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        let proposal = point.proposal();
        proposal.has_member(point.proposer())
            && ctx.visible_evil_on_team(point.proposer(), &proposal.team) >= 1
    }
    fn commentary(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{} proposed themselves alongside a fellow evil they can see",
            point.proposer()
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalRule {
        Box::new(self.clone())
    }
}

/// Percival proposed a team containing Morgana without Merlin as cover.
///
/// Percival only sees the ambiguous Merlin/Morgana pair; including one of the
/// pair while leaving the other off is a bet on the wrong half.
#[derive(Debug, Clone)]
pub struct PercivalRiskedMorgana;

impl ProposalRule for PercivalRiskedMorgana {
    fn name(&self) -> &'static str {
        "percival_risked_morgana"
    }
    fn relevant(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        ctx.role(point.proposer()) == Some(Role::Percival)
            && ctx.player_with_role(Role::Morgana).is_some()
            && ctx.player_with_role(Role::Merlin).is_some()
    }
    fn fired(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        let proposal = point.proposal();
        let morgana = ctx.player_with_role(Role::Morgana);
        let merlin = ctx.player_with_role(Role::Merlin);
        morgana.is_some_and(|m| proposal.has_member(m))
            && merlin.is_some_and(|m| !proposal.has_member(m))
    }
    fn commentary(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{} (Percival) proposed Morgana without Merlin on the team",
            point.proposer()
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalRule {
        Box::new(self.clone())
    }
}

/// Merlin proposed a team carrying a player Merlin knows is evil.
///
/// Sometimes deliberate camouflage, sometimes a blunder; rare either way.
#[derive(Debug, Clone)]
pub struct MerlinProposedVisibleEvil;

impl ProposalRule for MerlinProposedVisibleEvil {
    fn name(&self) -> &'static str {
        "merlin_proposed_visible_evil"
    }
    fn relevant(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        ctx.role(point.proposer()) == Some(Role::Merlin) && ctx.sees_any_evil(point.proposer())
    }
    fn fired(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        ctx.visible_evil_on_team(point.proposer(), &point.proposal().team) > 0
    }
    fn commentary(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{} (Merlin) put a player they know is evil on the team",
            point.proposer()
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalRule {
        Box::new(self.clone())
    }
}

/// An evil proposer put forward a team of revealed-good players only.
///
/// Giving up the chance to place any evil on the mission, including
/// themselves, usually to build voting credit.
#[derive(Debug, Clone)]
pub struct EvilProposedCleanTeam;

impl ProposalRule for EvilProposedCleanTeam {
    fn name(&self) -> &'static str {
        "evil_proposed_clean_team"
    }
    fn relevant(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        ctx.is_evil(point.proposer()) == Some(true)
    }
    fn fired(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        ctx.team_all_good(&point.proposal().team) == Some(true)
    }
    fn commentary(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{}, who is evil, proposed a team of all good players",
            point.proposer()
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalRule {
        Box::new(self.clone())
    }
}

/// The forced hammer proposal ended up in evil hands.
///
/// The table rejected its way into handing the deciding proposal to an evil
/// player.
#[derive(Debug, Clone)]
pub struct EvilHeldHammer;

impl ProposalRule for EvilHeldHammer {
    fn name(&self) -> &'static str {
        "evil_held_hammer"
    }
    fn relevant(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        point.is_hammer() && ctx.alignment(point.proposer()).is_some()
    }
    fn fired(&self, ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        ctx.is_evil(point.proposer()) == Some(true)
    }
    fn commentary(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{}, who is evil, held the forced hammer proposal",
            point.proposer()
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalRule {
        Box::new(self.clone())
    }
}

/// A proposer left themselves off their own team.
///
/// Role-free observation; proposers overwhelmingly include themselves.
#[derive(Debug, Clone)]
pub struct ProposerSelfExcluded;

impl ProposalRule for ProposerSelfExcluded {
    fn name(&self) -> &'static str {
        "proposer_self_excluded"
    }
    fn relevant(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        !point.proposal().team.is_empty()
    }
    fn fired(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        !point.proposal().has_member(point.proposer())
    }
    fn commentary(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> Commentary {
        Commentary::shown(format!(
            "{} proposed a team without themselves on it",
            point.proposer()
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalRule {
        Box::new(self.clone())
    }
}

/// A proposer re-submitted a team the table already rejected.
#[derive(Debug, Clone)]
pub struct ReproposedRejectedTeam;

impl ProposalRule for ReproposedRejectedTeam {
    fn name(&self) -> &'static str {
        "reproposed_rejected_team"
    }
    fn relevant(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        let size = point.proposal().team.len();
        point
            .earlier_proposals()
            .any(|p| p.state.is_rejected() && p.team.len() == size)
    }
    fn fired(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        let proposal = point.proposal();
        point
            .earlier_proposals()
            .any(|p| p.state.is_rejected() && p.same_team(proposal))
    }
    fn commentary(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> Commentary {
        Commentary::shown(format!(
            "{} re-proposed a team the table had already rejected",
            point.proposer()
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalRule {
        Box::new(self.clone())
    }
}

/// A proposal changed the previous one by exactly one member.
///
/// The classic "swap one" read: the proposer agrees with most of the previous
/// team and is signalling exactly who they distrust.
#[derive(Debug, Clone)]
pub struct SingleSwapProposal;

impl ProposalRule for SingleSwapProposal {
    fn name(&self) -> &'static str {
        "single_swap_proposal"
    }
    fn relevant(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        point
            .previous_proposal()
            .is_some_and(|prev| prev.team.len() == point.proposal().team.len())
    }
    fn fired(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> bool {
        let Some(prev) = point.previous_proposal() else {
            return false;
        };
        let swapped_in = point
            .proposal()
            .team
            .iter()
            .filter(|m| !prev.has_member(m))
            .count();
        swapped_in == 1
    }
    fn commentary(&self, _ctx: &GameContext, point: &ProposalPoint<'_>) -> Commentary {
        Commentary::shown(format!(
            "{} changed the previous proposal by a single member",
            point.proposer()
        ))
    }
    fn clone_boxed(&self) -> BoxedProposalRule {
        Box::new(self.clone())
    }
}

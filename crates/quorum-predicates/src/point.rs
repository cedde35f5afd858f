//! Decision points: the places in a game where a predicate can apply.
//!
//! Each of the three rule families is evaluated against its own point shape:
//!
//! - [`ProposalPoint`] - one proposal; the subject is the proposer
//! - [`VotePoint`] - one (proposal, voter) pair; the subject is the voter
//! - [`MissionPoint`] - one (decided mission, team member) pair; the subject
//!   is the team member
//!
//! Points are cheap `Copy` views into the game record, carrying indices plus
//! the record reference so rules can look back at earlier proposals.

use quorum_game::{GameLogRecord, Mission, Proposal, is_hammer};

/// One team proposal within a game.
#[derive(Debug, Clone, Copy)]
pub struct ProposalPoint<'a> {
    pub record: &'a GameLogRecord,
    pub mission_index: usize,
    pub proposal_index: usize,
}

impl<'a> ProposalPoint<'a> {
    /// The mission this proposal belongs to.
    #[must_use]
    pub fn mission(&self) -> &'a Mission {
        &self.record.missions[self.mission_index]
    }

    /// The proposal itself.
    #[must_use]
    pub fn proposal(&self) -> &'a Proposal {
        &self.mission().proposals[self.proposal_index]
    }

    /// Display name of the proposing player (the subject of proposal rules).
    #[must_use]
    pub fn proposer(&self) -> &'a str {
        &self.proposal().proposer
    }

    /// Whether this is the forced 5th (hammer) proposal.
    #[must_use]
    pub fn is_hammer(&self) -> bool {
        is_hammer(self.proposal_index)
    }

    /// The immediately preceding proposal within the same mission.
    #[must_use]
    pub fn previous_proposal(&self) -> Option<&'a Proposal> {
        let index = self.proposal_index.checked_sub(1)?;
        self.mission().proposals.get(index)
    }

    /// All proposals strictly before this one, in game order.
    pub fn earlier_proposals(&self) -> impl Iterator<Item = &'a Proposal> {
        let prior_missions = self.record.missions[..self.mission_index]
            .iter()
            .flat_map(|m| m.proposals.iter());
        let same_mission = self.mission().proposals[..self.proposal_index].iter();
        prior_missions.chain(same_mission)
    }
}

/// One (proposal, voter) pair. Every seated player votes on every proposal.
#[derive(Debug, Clone, Copy)]
pub struct VotePoint<'a> {
    pub record: &'a GameLogRecord,
    pub mission_index: usize,
    pub proposal_index: usize,
    /// Display name of the voting player (the subject of vote rules).
    pub voter: &'a str,
}

impl<'a> VotePoint<'a> {
    /// The proposal being voted on.
    #[must_use]
    pub fn proposal(&self) -> &'a Proposal {
        &self.record.missions[self.mission_index].proposals[self.proposal_index]
    }

    /// The same decision point viewed as a proposal.
    #[must_use]
    pub fn proposal_point(&self) -> ProposalPoint<'a> {
        ProposalPoint {
            record: self.record,
            mission_index: self.mission_index,
            proposal_index: self.proposal_index,
        }
    }

    /// Whether this vote is on the forced hammer proposal.
    #[must_use]
    pub fn is_hammer(&self) -> bool {
        is_hammer(self.proposal_index)
    }

    /// Whether the voter approved. Absence from the approval list is a reject.
    #[must_use]
    pub fn approved(&self) -> bool {
        self.proposal().approved_by(self.voter)
    }

    /// Whether the voter is the proposing player.
    #[must_use]
    pub fn is_proposer(&self) -> bool {
        self.proposal().proposer == self.voter
    }

    /// Whether the voter is on the proposed team.
    #[must_use]
    pub fn on_team(&self) -> bool {
        self.proposal().has_member(self.voter)
    }
}

/// One (decided mission, team member) pair.
///
/// The evaluator only constructs mission points for missions that reached a
/// success/fail verdict, so rules may assume the state is decided.
#[derive(Debug, Clone, Copy)]
pub struct MissionPoint<'a> {
    pub record: &'a GameLogRecord,
    pub mission_index: usize,
    /// Display name of the team member (the subject of mission rules).
    pub member: &'a str,
}

impl<'a> MissionPoint<'a> {
    /// The mission that was played.
    #[must_use]
    pub fn mission(&self) -> &'a Mission {
        &self.record.missions[self.mission_index]
    }

    /// The team that went on the mission.
    #[must_use]
    pub fn team(&self) -> &'a [String] {
        self.mission().final_team()
    }
}

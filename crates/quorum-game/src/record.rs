//! Wire-faithful record of one finished hidden-role game.
//!
//! Game logs originate from an external document store and arrive as JSON with
//! camelCase keys. The types here mirror that schema one-to-one; everything
//! derived from it (alignments, visibility, mission tables) lives in
//! [`GameContext`](crate::context::GameContext).
//!
//! A well-formed record carries exactly 5 missions in play order. Missions a
//! game never reached are still present with [`MissionState::NotReached`] and
//! no proposals. Each mission holds at most 5 proposals; the 5th is the forced
//! "hammer" proposal.

use std::str::FromStr;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// Maximum number of proposals per mission; the last one is the hammer.
pub const MAX_PROPOSALS: usize = 5;

/// Zero-based index of the forced hammer proposal within a mission.
pub const HAMMER_INDEX: usize = MAX_PROPOSALS - 1;

/// Returns whether a proposal index refers to the forced hammer proposal.
#[must_use]
pub const fn is_hammer(proposal_index: usize) -> bool {
    proposal_index == HAMMER_INDEX
}

/// Immutable record of one finished game, as read from the game-log store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogRecord {
    /// Players in seat order.
    pub players: Vec<Player>,
    /// The 5 missions in play order (fewer only in malformed records).
    pub missions: ArrayVec<Mission, 5>,
    /// Final outcome, including the full role reveal.
    pub outcome: GameOutcome,
}

impl GameLogRecord {
    /// Looks up a player by display name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Seat index of a player (position in the original player list).
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }
}

/// One seat at the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Stable person identifier from the account system.
    pub uid: String,
    /// Display name, unique within one game.
    pub name: String,
    /// Secret role, present once the game has been revealed.
    #[serde(default)]
    pub role: Option<Role>,
}

/// One of the 5 missions of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Required team size for this mission at this table size.
    pub team_size: u8,
    /// Number of fail cards required to fail the mission (2 on mission 4 at
    /// tables of 7 or more, otherwise 1).
    pub fails_required: u8,
    /// Terminal state of the mission.
    pub state: MissionState,
    /// Team that actually went on the mission, if one was approved.
    #[serde(default)]
    pub team: Vec<String>,
    /// Proposals in order; at most 5, the 5th being the hammer.
    #[serde(default)]
    pub proposals: ArrayVec<Proposal, 5>,
}

impl Mission {
    /// Whether the mission reached a success/fail verdict.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        !self.state.is_not_reached()
    }

    /// The team that played the mission.
    ///
    /// Prefers the explicit `team` field; falls back to the approved
    /// proposal's team when the ETL layer left `team` empty.
    #[must_use]
    pub fn final_team(&self) -> &[String] {
        if !self.team.is_empty() {
            return &self.team;
        }
        self.proposals
            .iter()
            .find(|p| p.state.is_approved())
            .map_or(&[], |p| p.team.as_slice())
    }
}

/// Terminal state of one mission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "camelCase")]
pub enum MissionState {
    Success,
    Fail,
    NotReached,
}

/// One team proposal and its public vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Display name of the proposing player.
    pub proposer: String,
    /// Proposed team, by display name.
    pub team: Vec<String>,
    /// Players who voted to approve. Absence means a reject vote.
    #[serde(default)]
    pub votes: Vec<String>,
    /// Terminal state of the vote.
    pub state: ProposalState,
}

impl Proposal {
    /// Whether `name` voted to approve this proposal.
    #[must_use]
    pub fn approved_by(&self, name: &str) -> bool {
        self.votes.iter().any(|v| v == name)
    }

    /// Whether `name` is on the proposed team.
    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        self.team.iter().any(|m| m == name)
    }

    /// Whether two proposals put forward the same team, ignoring order.
    #[must_use]
    pub fn same_team(&self, other: &Proposal) -> bool {
        self.team.len() == other.team.len()
            && self.team.iter().all(|m| other.has_member(m))
    }
}

/// Terminal state of one proposal vote.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "camelCase")]
pub enum ProposalState {
    Approved,
    Rejected,
}

/// Final outcome of the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    /// Which side won, or whether the game was voided.
    pub state: OutcomeState,
    /// Human-readable reason ("three missions failed", ...).
    #[serde(default)]
    pub reason: Option<String>,
    /// Merlin-shot target, when the game ended in an assassination attempt.
    #[serde(default)]
    pub assassinated: Option<String>,
    /// Full role reveal. Empty for canceled games.
    #[serde(default)]
    pub roles: Vec<RoleReveal>,
}

/// Winner side of a finished game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeState {
    GoodWin,
    EvilWin,
    Canceled,
}

/// One entry of the end-of-game role reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleReveal {
    /// Display name of the player.
    pub name: String,
    /// Revealed secret role.
    pub role: Role,
    /// Whether this player carried the assassin token.
    #[serde(default)]
    pub assassin: bool,
}

/// Secret roles of the Avalon-style role set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Merlin,
    Percival,
    LoyalServant,
    Morgana,
    Mordred,
    Oberon,
    Assassin,
    Minion,
}

impl Role {
    /// Alignment this role fights for.
    #[must_use]
    pub const fn alignment(self) -> Alignment {
        match self {
            Role::Merlin | Role::Percival | Role::LoyalServant => Alignment::Good,
            Role::Morgana | Role::Mordred | Role::Oberon | Role::Assassin | Role::Minion => {
                Alignment::Evil
            }
        }
    }

    /// Whether this role is on the evil side.
    #[must_use]
    pub const fn is_evil(self) -> bool {
        matches!(self.alignment(), Alignment::Evil)
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "merlin" => Ok(Role::Merlin),
            "percival" => Ok(Role::Percival),
            "loyalservant" | "servant" => Ok(Role::LoyalServant),
            "morgana" => Ok(Role::Morgana),
            "mordred" => Ok(Role::Mordred),
            "oberon" => Ok(Role::Oberon),
            "assassin" => Ok(Role::Assassin),
            "minion" | "minionofmordred" => Ok(Role::Minion),
            _ => Err(RoleParseError),
        }
    }
}

/// Error returned when a role string from the wire is not recognized.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unrecognized role name")]
pub struct RoleParseError;

/// Side a role fights for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    Good,
    Evil,
}

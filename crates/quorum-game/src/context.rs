//! Derived, read-only view over one finished game.
//!
//! [`GameContext`] is built once per game and shared by every predicate
//! evaluated against that game. It answers the questions predicates keep
//! asking: who is evil, who can see whom, what the standard mission tables
//! say for this table size.
//!
//! Construction is total. A record with no revealed roles (a canceled game,
//! a truncated log) yields a context where every role/alignment query returns
//! `None` and every visibility query returns nothing; predicates that need a
//! known alignment report "not relevant" instead of failing.

use std::collections::{BTreeMap, BTreeSet};

use crate::record::{Alignment, GameLogRecord, Role};

/// Standard team sizes per mission, indexed by `player_count - 5`.
const TEAM_SIZE_TABLE: [[u8; 5]; 6] = [
    [2, 3, 2, 3, 3], // 5 players
    [2, 3, 4, 3, 4], // 6 players
    [2, 3, 3, 4, 4], // 7 players
    [3, 4, 4, 5, 5], // 8 players
    [3, 4, 4, 5, 5], // 9 players
    [3, 4, 4, 5, 5], // 10 players
];

/// Role/alignment lookups and visibility queries derived from one record.
#[derive(Debug, Clone)]
pub struct GameContext {
    seats: Vec<String>,
    roles: BTreeMap<String, Role>,
    visible_evil: BTreeMap<String, BTreeSet<String>>,
}

impl GameContext {
    /// Builds the context from a finished game record.
    ///
    /// Roles come from the end-of-game reveal, falling back to per-player
    /// role fields for logs where the ETL layer wrote them directly.
    #[must_use]
    pub fn new(record: &GameLogRecord) -> Self {
        let seats = record.players.iter().map(|p| p.name.clone()).collect();

        let mut roles = BTreeMap::new();
        for player in &record.players {
            if let Some(role) = player.role {
                roles.insert(player.name.clone(), role);
            }
        }
        for reveal in &record.outcome.roles {
            roles.insert(reveal.name.clone(), reveal.role);
        }

        let visible_evil = roles
            .iter()
            .map(|(name, role)| {
                let seen = Self::visible_evil_for(*role, name, &roles);
                (name.clone(), seen)
            })
            .collect();

        Self {
            seats,
            roles,
            visible_evil,
        }
    }

    /// Which evil identities `viewer_role` learns at night.
    ///
    /// Evil players (except Oberon) see each other, except Oberon. Merlin
    /// sees all evil except Mordred. Percival only learns the ambiguous
    /// Merlin/Morgana pair, which identifies nobody as evil.
    fn visible_evil_for(
        viewer_role: Role,
        viewer_name: &str,
        roles: &BTreeMap<String, Role>,
    ) -> BTreeSet<String> {
        let sees = |target: Role| match viewer_role {
            Role::Merlin => target.is_evil() && target != Role::Mordred,
            Role::Morgana | Role::Mordred | Role::Assassin | Role::Minion => {
                target.is_evil() && target != Role::Oberon
            }
            Role::Percival | Role::LoyalServant | Role::Oberon => false,
        };
        roles
            .iter()
            .filter(|(name, role)| name.as_str() != viewer_name && sees(**role))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Number of seats at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Player names in seat order.
    #[must_use]
    pub fn seats(&self) -> &[String] {
        &self.seats
    }

    /// Whether any role was revealed at all.
    ///
    /// `false` marks a canceled or truncated game; every role-dependent query
    /// then returns "unknown".
    #[must_use]
    pub fn any_roles_known(&self) -> bool {
        !self.roles.is_empty()
    }

    /// Revealed role of a player, if known.
    #[must_use]
    pub fn role(&self, name: &str) -> Option<Role> {
        self.roles.get(name).copied()
    }

    /// Alignment of a player, if their role is known.
    #[must_use]
    pub fn alignment(&self, name: &str) -> Option<Alignment> {
        self.role(name).map(Role::alignment)
    }

    /// Whether a player is evil; `None` when their role was never revealed.
    #[must_use]
    pub fn is_evil(&self, name: &str) -> Option<bool> {
        self.role(name).map(Role::is_evil)
    }

    /// The (unique) player revealed with `role`, if any.
    #[must_use]
    pub fn player_with_role(&self, role: Role) -> Option<&str> {
        self.roles
            .iter()
            .find(|(_, r)| **r == role)
            .map(|(name, _)| name.as_str())
    }

    /// Whether `viewer` knows `target` to be evil.
    #[must_use]
    pub fn sees_as_evil(&self, viewer: &str, target: &str) -> bool {
        self.visible_evil
            .get(viewer)
            .is_some_and(|seen| seen.contains(target))
    }

    /// Whether `viewer` can see at least one evil partner or identity.
    #[must_use]
    pub fn sees_any_evil(&self, viewer: &str) -> bool {
        self.visible_evil
            .get(viewer)
            .is_some_and(|seen| !seen.is_empty())
    }

    /// How many members of `team` are known to `viewer` as evil.
    #[must_use]
    pub fn visible_evil_on_team(&self, viewer: &str, team: &[String]) -> usize {
        team.iter()
            .filter(|member| self.sees_as_evil(viewer, member))
            .count()
    }

    /// Whether every member of `team` is revealed good.
    ///
    /// `Some(false)` as soon as one member is revealed evil; `None` when no
    /// member is evil but at least one role is unknown.
    #[must_use]
    pub fn team_all_good(&self, team: &[String]) -> Option<bool> {
        if team.iter().any(|m| self.is_evil(m) == Some(true)) {
            return Some(false);
        }
        if team.iter().any(|m| self.is_evil(m).is_none()) {
            return None;
        }
        Some(true)
    }

    /// Whether every member of `team` is revealed evil.
    #[must_use]
    pub fn team_all_evil(&self, team: &[String]) -> Option<bool> {
        if team.iter().any(|m| self.is_evil(m) == Some(false)) {
            return Some(false);
        }
        if team.iter().any(|m| self.is_evil(m).is_none()) {
            return None;
        }
        Some(true)
    }

    /// Standard team size for a mission at a given table size.
    ///
    /// Returns `None` for table sizes or mission indices outside the standard
    /// 5-10 player, 5-mission tables.
    #[must_use]
    pub fn team_size_for(player_count: usize, mission_index: usize) -> Option<u8> {
        let row = player_count.checked_sub(5)?;
        TEAM_SIZE_TABLE
            .get(row)
            .and_then(|sizes| sizes.get(mission_index))
            .copied()
    }

    /// Standard fails-required threshold for a mission at a given table size.
    ///
    /// Mission 4 requires two fails at tables of 7 or more.
    #[must_use]
    pub fn fails_required_for(player_count: usize, mission_index: usize) -> Option<u8> {
        Self::team_size_for(player_count, mission_index)?;
        if player_count >= 7 && mission_index == 3 {
            Some(2)
        } else {
            Some(1)
        }
    }
}

//! Shared fixtures for rule tests.

use quorum_game::{
    GameLogRecord, GameOutcome, Mission, MissionState, OutcomeState, Player, Proposal,
    ProposalState, Role, RoleReveal,
};

pub(crate) fn names(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|x| (*x).to_owned()).collect()
}

pub(crate) fn proposal(
    proposer: &str,
    team: &[&str],
    votes: &[&str],
    state: ProposalState,
) -> Proposal {
    Proposal {
        proposer: proposer.to_owned(),
        team: names(team),
        votes: names(votes),
        state,
    }
}

pub(crate) fn mission(state: MissionState, team: &[&str], proposals: Vec<Proposal>) -> Mission {
    let team_size = proposals
        .first()
        .map_or(team.len(), |p| p.team.len())
        .try_into()
        .unwrap_or(0);
    Mission {
        team_size,
        fails_required: 1,
        state,
        team: names(team),
        proposals: proposals.into_iter().collect(),
    }
}

pub(crate) fn unreached_mission() -> Mission {
    mission(MissionState::NotReached, &[], vec![])
}

pub(crate) fn record(roles: &[(&str, Role)], mut missions: Vec<Mission>) -> GameLogRecord {
    while missions.len() < 5 {
        missions.push(unreached_mission());
    }
    GameLogRecord {
        players: roles
            .iter()
            .enumerate()
            .map(|(i, (name, _))| Player {
                uid: format!("u{i}"),
                name: (*name).to_owned(),
                role: None,
            })
            .collect(),
        missions: missions.into_iter().collect(),
        outcome: GameOutcome {
            state: OutcomeState::GoodWin,
            reason: None,
            assassinated: None,
            roles: roles
                .iter()
                .map(|(name, role)| RoleReveal {
                    name: (*name).to_owned(),
                    role: *role,
                    assassin: *role == Role::Assassin,
                })
                .collect(),
        },
    }
}

/// Standard 5-seat table used across rule tests.
pub(crate) const FIVE_SEATS: [(&str, Role); 5] = [
    ("Alice", Role::Merlin),
    ("Bob", Role::Percival),
    ("Carol", Role::LoyalServant),
    ("Dave", Role::Assassin),
    ("Eve", Role::Morgana),
];

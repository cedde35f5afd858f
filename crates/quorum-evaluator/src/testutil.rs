//! Game fixtures shared by evaluator and annotator tests.

use quorum_game::{
    GameLogRecord, GameOutcome, Mission, MissionState, OutcomeState, Player, Proposal,
    ProposalState, Role, RoleReveal,
};

fn names(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|x| (*x).to_owned()).collect()
}

fn proposal(proposer: &str, team: &[&str], votes: &[&str], state: ProposalState) -> Proposal {
    Proposal {
        proposer: proposer.to_owned(),
        team: names(team),
        votes: names(votes),
        state,
    }
}

fn mission(state: MissionState, team: &[&str], proposals: Vec<Proposal>) -> Mission {
    Mission {
        team_size: 2,
        fails_required: 1,
        state,
        team: names(team),
        proposals: proposals.into_iter().collect(),
    }
}

fn unreached() -> Mission {
    mission(MissionState::NotReached, &[], vec![])
}

fn five_seat_record(missions: Vec<Mission>, state: OutcomeState) -> GameLogRecord {
    let roles = [
        ("Alice", Role::Merlin),
        ("Bob", Role::Percival),
        ("Carol", Role::LoyalServant),
        ("Dave", Role::Assassin),
        ("Eve", Role::Morgana),
    ];
    let mut missions = missions;
    while missions.len() < 5 {
        missions.push(unreached());
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
            state,
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

/// Four rejected proposals, then a hammer approved 4-0 with the evil Dave on
/// the team, neither proposing nor abstaining.
pub(crate) fn hammer_selfseat_game() -> GameLogRecord {
    let proposals = vec![
        proposal("Alice", &["Alice", "Bob"], &["Alice"], ProposalState::Rejected),
        proposal("Bob", &["Bob", "Carol"], &["Bob"], ProposalState::Rejected),
        proposal("Carol", &["Carol", "Alice"], &["Carol"], ProposalState::Rejected),
        proposal("Dave", &["Alice", "Bob"], &["Dave"], ProposalState::Rejected),
        proposal(
            "Eve",
            &["Carol", "Dave"],
            &["Alice", "Bob", "Carol", "Dave"],
            ProposalState::Approved,
        ),
    ];
    five_seat_record(
        vec![mission(MissionState::Success, &["Carol", "Dave"], proposals)],
        OutcomeState::GoodWin,
    )
}

/// One approved all-good team; Bob is the lone reject vote.
pub(crate) fn simple_clean_game() -> GameLogRecord {
    let proposals = vec![proposal(
        "Alice",
        &["Alice", "Carol"],
        &["Alice", "Carol", "Dave", "Eve"],
        ProposalState::Approved,
    )];
    five_seat_record(
        vec![mission(MissionState::Success, &["Alice", "Carol"], proposals)],
        OutcomeState::GoodWin,
    )
}

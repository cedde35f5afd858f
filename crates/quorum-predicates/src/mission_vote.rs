//! Mission-vote rules. The subject is a team member of a decided mission.
//!
//! The wire format records only the mission verdict, not individual cards, so
//! this family is limited to behavior the verdict pins down exactly: a lone
//! evil on a succeeded mission must have played success, and so on.

use quorum_game::GameContext;

use crate::{BoxedMissionVoteRule, Commentary, MissionVoteRule, point::MissionPoint};

/// All mission-vote rules, rarest-first.
#[must_use]
pub fn mission_vote_rules() -> Vec<BoxedMissionVoteRule> {
    vec![
        Box::new(AllEvilMissionSucceeded),
        Box::new(SoleEvilPassedMission),
        Box::new(GoodOnFailedMission),
    ]
}

/// An entirely evil team let its mission succeed.
///
/// Every member could have failed it; nobody did.
#[derive(Debug, Clone)]
pub struct AllEvilMissionSucceeded;

impl MissionVoteRule for AllEvilMissionSucceeded {
    fn name(&self) -> &'static str {
        "all_evil_mission_succeeded"
    }
    fn relevant(&self, ctx: &GameContext, point: &MissionPoint<'_>) -> bool {
        let team = point.team();
        team.len() >= 2
            && ctx.is_evil(point.member) == Some(true)
            && ctx.team_all_evil(team) == Some(true)
    }
    fn fired(&self, _ctx: &GameContext, point: &MissionPoint<'_>) -> bool {
        point.mission().state.is_success()
    }
    fn commentary(&self, _ctx: &GameContext, point: &MissionPoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{} was on an all-evil team that let the mission succeed",
            point.member
        ))
    }
    fn clone_boxed(&self) -> BoxedMissionVoteRule {
        Box::new(self.clone())
    }
}

/// The only evil player on a mission let it succeed.
///
/// The verdict identifies the card: with one evil seat and a success, that
/// seat played success.
#[derive(Debug, Clone)]
pub struct SoleEvilPassedMission;

impl MissionVoteRule for SoleEvilPassedMission {
    fn name(&self) -> &'static str {
        "sole_evil_passed_mission"
    }
    fn relevant(&self, ctx: &GameContext, point: &MissionPoint<'_>) -> bool {
        if ctx.is_evil(point.member) != Some(true) {
            return false;
        }
        let others: Vec<String> = point
            .team()
            .iter()
            .filter(|m| m.as_str() != point.member)
            .cloned()
            .collect();
        !others.is_empty() && ctx.team_all_good(&others) == Some(true)
    }
    fn fired(&self, _ctx: &GameContext, point: &MissionPoint<'_>) -> bool {
        point.mission().state.is_success()
    }
    fn commentary(&self, _ctx: &GameContext, point: &MissionPoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{} was the only evil on the mission and let it succeed",
            point.member
        ))
    }
    fn clone_boxed(&self) -> BoxedMissionVoteRule {
        Box::new(self.clone())
    }
}

/// A good player sat on a mission that failed.
///
/// Common, but it is the suspicion magnet every table argues about, so it is
/// tracked as an opportunity/fire pair like everything else.
#[derive(Debug, Clone)]
pub struct GoodOnFailedMission;

impl MissionVoteRule for GoodOnFailedMission {
    fn name(&self) -> &'static str {
        "good_on_failed_mission"
    }
    fn relevant(&self, ctx: &GameContext, point: &MissionPoint<'_>) -> bool {
        ctx.is_evil(point.member) == Some(false)
    }
    fn fired(&self, _ctx: &GameContext, point: &MissionPoint<'_>) -> bool {
        point.mission().state.is_fail()
    }
    fn commentary(&self, _ctx: &GameContext, point: &MissionPoint<'_>) -> Commentary {
        Commentary::secret(format!(
            "{}, who is good, was on a mission that failed",
            point.member
        ))
    }
    fn clone_boxed(&self) -> BoxedMissionVoteRule {
        Box::new(self.clone())
    }
}

//! Display-ready regrouping of one game's annotations.
//!
//! A pure presentation transform: the sparse [`AnnotationResult`] list is
//! reassembled into a tree mirroring the game structure (mission → proposal →
//! player row), with no logic beyond grouping, stable ordering, and hidden
//! commentary filtering. Order is mission index, then proposal index, then
//! the player's seat in the original player list; notes within a row keep
//! evaluation order, which is the library's rarest-first display priority.

use quorum_game::GameLogRecord;
use serde::Serialize;

use crate::annotation::{AnnotationResult, DecisionRef};

/// One game's annotations, arranged for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedGame {
    pub missions: Vec<AnnotatedMission>,
}

/// Annotations attached to one mission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedMission {
    /// Zero-based mission index.
    pub mission: usize,
    pub proposals: Vec<AnnotatedProposal>,
    /// Mission-vote annotations, one row per annotated team member.
    pub mission_rows: Vec<PlayerCommentary>,
}

/// Annotations attached to one proposal (proposing and voting actions).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedProposal {
    /// Zero-based proposal index within the mission.
    pub proposal: usize,
    pub rows: Vec<PlayerCommentary>,
}

/// All of one player's notes at one decision point.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCommentary {
    pub player: String,
    pub notes: Vec<AnnotationNote>,
}

/// One sentence of commentary with its source rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationNote {
    pub predicate: String,
    pub commentary: String,
    pub hidden: bool,
}

/// Regroups a game's annotations into the display tree.
///
/// `include_hidden` gates commentary that reveals secret information; without
/// explicit consent those notes are dropped entirely, not blanked. Players
/// with no remaining notes at a decision point get no row.
#[must_use]
pub fn annotate_game(
    record: &GameLogRecord,
    annotations: &[AnnotationResult],
    include_hidden: bool,
) -> AnnotatedGame {
    let visible: Vec<&AnnotationResult> = annotations
        .iter()
        .filter(|a| include_hidden || !a.hidden)
        .collect();

    let rows_for = |player: &str, matches: &dyn Fn(&DecisionRef) -> bool| -> Vec<AnnotationNote> {
        visible
            .iter()
            .filter(|a| a.player == player && matches(&a.decision))
            .map(|a| AnnotationNote {
                predicate: a.predicate.clone(),
                commentary: a.commentary.clone(),
                hidden: a.hidden,
            })
            .collect()
    };

    let missions = record
        .missions
        .iter()
        .enumerate()
        .map(|(mission_index, mission)| {
            let proposals = (0..mission.proposals.len())
                .map(|proposal_index| {
                    let rows = record
                        .players
                        .iter()
                        .filter_map(|player| {
                            let notes = rows_for(&player.name, &|d| {
                                d.mission() == mission_index
                                    && d.proposal() == Some(proposal_index)
                            });
                            (!notes.is_empty()).then(|| PlayerCommentary {
                                player: player.name.clone(),
                                notes,
                            })
                        })
                        .collect();
                    AnnotatedProposal {
                        proposal: proposal_index,
                        rows,
                    }
                })
                .collect();

            let mission_rows = record
                .players
                .iter()
                .filter_map(|player| {
                    let notes = rows_for(&player.name, &|d| {
                        matches!(d, DecisionRef::MissionVote { mission } if *mission == mission_index)
                    });
                    (!notes.is_empty()).then(|| PlayerCommentary {
                        player: player.name.clone(),
                        notes,
                    })
                })
                .collect();

            AnnotatedMission {
                mission: mission_index,
                proposals,
                mission_rows,
            }
        })
        .collect();

    AnnotatedGame { missions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluator::GameEvaluator, testutil::hammer_selfseat_game};

    #[test]
    fn tree_mirrors_game_structure_in_stable_order() {
        let game = hammer_selfseat_game();
        let evaluation = GameEvaluator::default().evaluate(&game);
        let annotated = annotate_game(&game, &evaluation.annotations, true);

        assert_eq!(annotated.missions.len(), 5);
        assert_eq!(annotated.missions[0].proposals.len(), 5);
        // Unreached missions have no proposals and no rows.
        assert!(annotated.missions[4].proposals.is_empty());
        assert!(annotated.missions[4].mission_rows.is_empty());

        // Rows follow seat order within each proposal.
        for proposal in &annotated.missions[0].proposals {
            let seats: Vec<usize> = proposal
                .rows
                .iter()
                .map(|r| game.seat_of(&r.player).unwrap())
                .collect();
            assert!(seats.is_sorted());
        }

        // Dave's self-seat approval lands on the hammer proposal row.
        let hammer = &annotated.missions[0].proposals[4];
        let dave = hammer.rows.iter().find(|r| r.player == "Dave").unwrap();
        assert!(
            dave.notes
                .iter()
                .any(|n| n.predicate == "evil_approved_own_team")
        );

        // The sole-evil pass shows up as a mission row, not a proposal row.
        let mission_dave = annotated.missions[0]
            .mission_rows
            .iter()
            .find(|r| r.player == "Dave")
            .unwrap();
        assert!(
            mission_dave
                .notes
                .iter()
                .any(|n| n.predicate == "sole_evil_passed_mission")
        );
    }

    #[test]
    fn hidden_notes_require_consent() {
        let game = hammer_selfseat_game();
        let evaluation = GameEvaluator::default().evaluate(&game);

        let without = annotate_game(&game, &evaluation.annotations, false);
        let all_notes: Vec<&AnnotationNote> = without
            .missions
            .iter()
            .flat_map(|m| m.proposals.iter().flat_map(|p| &p.rows).chain(&m.mission_rows))
            .flat_map(|r| &r.notes)
            .collect();
        assert!(!all_notes.is_empty());
        assert!(all_notes.iter().all(|n| !n.hidden));

        // Eve voting down her own hammer is public commentary and survives.
        assert!(
            all_notes
                .iter()
                .any(|n| n.predicate == "rejected_own_proposal")
        );
        // Alignment-revealing notes do not.
        assert!(
            !all_notes
                .iter()
                .any(|n| n.predicate == "evil_approved_own_team")
        );
    }
}

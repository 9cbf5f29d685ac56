use serde::Serialize;
use thiserror::Error;

use super::MatchPhase;
use crate::models::TeamId;

/// Why an operation was turned down.
///
/// A refused operation leaves the match state and its log untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Refusal {
    #[error("{team} player {slot} has no name")]
    IncompleteRoster { team: TeamId, slot: u8 },

    #[error("match already started (phase: {phase})")]
    AlreadyStarted { phase: MatchPhase },

    #[error("match is not in progress (phase: {phase})")]
    NotInProgress { phase: MatchPhase },

    #[error("game already decided at {team1_score}-{team2_score}")]
    GameDecided { team1_score: u16, team2_score: u16 },

    #[error("{team} score cannot go past {score}")]
    ScoreLimit { team: TeamId, score: u16 },

    #[error("match has not started")]
    NotStarted,

    #[error("match is finished")]
    MatchFinished,
}

impl Refusal {
    pub fn code(&self) -> &'static str {
        match self {
            Refusal::IncompleteRoster { .. } => "INCOMPLETE_ROSTER",
            Refusal::AlreadyStarted { .. } => "ALREADY_STARTED",
            Refusal::NotInProgress { .. } => "NOT_IN_PROGRESS",
            Refusal::GameDecided { .. } => "GAME_DECIDED",
            Refusal::ScoreLimit { .. } => "SCORE_LIMIT",
            Refusal::NotStarted => "NOT_STARTED",
            Refusal::MatchFinished => "MATCH_FINISHED",
        }
    }
}

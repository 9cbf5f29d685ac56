use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a single game.
///
/// `Finished` is terminal; only a reset leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    Setup,
    InProgress,
    Paused,
    Finished,
}

impl MatchPhase {
    /// Is the match clock shown as running?
    pub fn is_clock_running(&self) -> bool {
        matches!(self, MatchPhase::InProgress)
    }

    /// Has `start` been accepted for the current match?
    pub fn is_started(&self) -> bool {
        !matches!(self, MatchPhase::Setup)
    }

    pub fn is_match_ended(&self) -> bool {
        matches!(self, MatchPhase::Finished)
    }
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchPhase::Setup => "setup",
            MatchPhase::InProgress => "in_progress",
            MatchPhase::Paused => "paused",
            MatchPhase::Finished => "finished",
        };
        f.write_str(name)
    }
}

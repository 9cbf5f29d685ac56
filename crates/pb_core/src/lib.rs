//! # pb_core - Pickleball Match Scoring Engine
//!
//! Scoring rules for a single pickleball game, independent of how the score
//! is displayed.
//!
//! ## Features
//! - Win-by-2 detection against a target of 11, 15 or 21
//! - Serve rotation for singles and doubles
//! - Explicit refusals instead of silently dropped operations
//! - Newest-first event log and a scoreboard projection for UIs
//! - JSON command API for replaying a match

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod view;

pub use api::{run_match, run_match_json, Command, ScorerRequest, ScorerResponse};
pub use config::ScorerSettings;
pub use engine::{
    Clock, ManualClock, MatchPhase, MatchScorer, MatchState, Refusal, Serve, SystemClock,
};
pub use error::{Result, ScoreError};
pub use models::{
    GameTarget, MatchConfig, MatchEvent, MatchRules, PlayersMode, ServingPlayer, TeamId,
    TeamRoster,
};
pub use view::Scoreboard;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_replay_is_deterministic() {
        let request = json!({
            "schema_version": 1,
            "started_at": "2026-02-01T12:00:00Z",
            "config": {
                "rules": {"players_mode": "doubles", "target": 15},
                "team1": {"player1": "Ana", "player2": "Ben"},
                "team2": {"player1": "Cy", "player2": "Di"}
            },
            "commands": [
                {"type": "start"},
                {"type": "point", "team": 1, "at_ms": 20000},
                {"type": "point", "team": 2, "at_ms": 41000},
                {"type": "pause_resume", "at_ms": 50000},
                {"type": "pause_resume", "at_ms": 80000},
                {"type": "point", "team": 2, "at_ms": 95000}
            ]
        })
        .to_string();

        let first = run_match_json(&request).unwrap();
        let second = run_match_json(&request).unwrap();
        assert_eq!(first, second, "Same request should produce the same response");
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(SCHEMA_VERSION, 1);
    }
}

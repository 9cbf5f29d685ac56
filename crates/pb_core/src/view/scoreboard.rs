use serde::Serialize;
use std::fmt;

use crate::engine::{format_elapsed, Clock, MatchPhase, MatchScorer};
use crate::models::{PlayersMode, TeamId};

/// Snapshot of everything the game screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub phase: MatchPhase,
    pub status: String,
    pub players_mode: PlayersMode,
    pub target_label: String,
    pub team1: TeamPanel,
    pub team2: TeamPanel,
    /// `m:ss`, present only while the match clock runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
    /// Score buttons enabled?
    pub can_score: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Newest first, truncated.
    pub history: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPanel {
    pub team: TeamId,
    pub score: u16,
    pub players: Vec<String>,
    pub serving: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_label: Option<String>,
}

impl Scoreboard {
    pub fn project<C: Clock>(scorer: &MatchScorer<C>, history_limit: usize) -> Self {
        let state = scorer.state();
        let rules = state.rules();
        let phase = state.phase();
        let serve = state.serve();

        let panel = |team: TeamId| {
            let serving = phase.is_started() && serve.team == team;
            TeamPanel {
                team,
                score: state.score(team),
                players: scorer
                    .config()
                    .map(|c| {
                        c.roster(team)
                            .names(rules.players_mode)
                            .into_iter()
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
                serving,
                serving_label: (serving && rules.players_mode == PlayersMode::Doubles)
                    .then(|| format!("Serving: Player {}", serve.player.number())),
            }
        };

        let result = state.winner().map(|winner| {
            format!(
                "{winner} wins {}-{}!",
                state.score(winner),
                state.score(winner.opponent())
            )
        });

        Self {
            phase,
            status: status_label(phase).to_string(),
            players_mode: rules.players_mode,
            target_label: format!("Playing to {}", rules.target),
            team1: panel(TeamId::One),
            team2: panel(TeamId::Two),
            elapsed: scorer.elapsed().map(format_elapsed),
            can_score: phase == MatchPhase::InProgress && state.can_score_point(),
            result,
            history: state
                .event_log()
                .iter()
                .take(history_limit)
                .map(ToString::to_string)
                .collect(),
        }
    }
}

fn status_label(phase: MatchPhase) -> &'static str {
    match phase {
        MatchPhase::Setup => "Set up your match",
        MatchPhase::InProgress => "Game in Progress",
        MatchPhase::Paused => "Game Paused",
        MatchPhase::Finished => "Game Finished!",
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | {}", self.target_label, self.status)?;
        if let Some(elapsed) = &self.elapsed {
            writeln!(f, "Clock {elapsed}")?;
        }
        for panel in [&self.team1, &self.team2] {
            let marker = if panel.serving { " *" } else { "" };
            write!(f, "{}{marker}: {:>2}", panel.team, panel.score)?;
            if !panel.players.is_empty() {
                write!(f, "  ({})", panel.players.join(" / "))?;
            }
            if let Some(label) = &panel.serving_label {
                write!(f, "  {label}")?;
            }
            writeln!(f)?;
        }
        if let Some(result) = &self.result {
            writeln!(f, "{result}")?;
        }
        if !self.history.is_empty() {
            writeln!(f, "History:")?;
            for entry in &self.history {
                writeln!(f, "  {entry}")?;
            }
        }
        Ok(())
    }
}

//! JSON command API.
//!
//! A request carries a match configuration and a list of timed commands; the
//! response carries the final scoreboard and state plus every refused command.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ScorerSettings;
use crate::engine::{ManualClock, MatchState, Refusal};
use crate::error::{Result, ScoreError};
use crate::models::{MatchConfig, TeamId};
use crate::view::Scoreboard;
use crate::SCHEMA_VERSION;

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Start,
    Point { team: TeamId },
    PauseResume,
    Reset,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Start => f.write_str("start"),
            Command::Point { team } => write!(f, "point for {team}"),
            Command::PauseResume => f.write_str("pause/resume"),
            Command::Reset => f.write_str("reset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedCommand {
    #[serde(flatten)]
    pub command: Command,
    /// Milliseconds after `started_at`. Commands must not go back in time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_ms: Option<u64>,
}

impl From<Command> for TimedCommand {
    fn from(command: Command) -> Self {
        Self { command, at_ms: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScorerRequest {
    pub schema_version: u8,
    /// Clock origin; defaults to now.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    pub config: MatchConfig,
    #[serde(default)]
    pub commands: Vec<TimedCommand>,
    /// Overrides the settings' history limit.
    #[serde(default)]
    pub history_limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandRefusal {
    pub index: usize,
    pub command: Command,
    pub code: &'static str,
    pub message: String,
    pub refusal: Refusal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScorerResponse {
    pub schema_version: u8,
    pub scoreboard: Scoreboard,
    pub state: MatchState,
    pub refusals: Vec<CommandRefusal>,
}

/// Replay `request` against a fresh scorer built from `settings`.
pub fn run_match(request: &ScorerRequest, settings: &ScorerSettings) -> Result<ScorerResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(ScoreError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let history_limit = request.history_limit.unwrap_or(settings.history_limit);
    ScorerSettings { history_limit, ..settings.clone() }.validate()?;

    let origin = request.started_at.unwrap_or_else(Utc::now);
    let mut scorer = settings.scorer(ManualClock::new(origin));
    let mut last_ms = 0u64;
    let mut refusals = Vec::new();

    for (index, timed) in request.commands.iter().enumerate() {
        if let Some(at_ms) = timed.at_ms {
            if at_ms < last_ms {
                warn!(index, at_ms, last_ms, "command timestamp goes backwards; keeping clock");
            } else {
                let at = i64::try_from(at_ms)
                    .ok()
                    .and_then(TimeDelta::try_milliseconds)
                    .and_then(|offset| origin.checked_add_signed(offset));
                match at {
                    Some(at) => {
                        last_ms = at_ms;
                        scorer.clock().set(at);
                    }
                    None => warn!(index, at_ms, "command timestamp out of range; keeping clock"),
                }
            }
        }

        let outcome = match timed.command {
            Command::Start => scorer.start(request.config.clone()).map(|_| ()),
            Command::Point { team } => scorer.score_point(team).map(|_| ()),
            Command::PauseResume => scorer.pause_resume().map(|_| ()),
            Command::Reset => {
                scorer.reset();
                Ok(())
            }
        };

        if let Err(refusal) = outcome {
            refusals.push(CommandRefusal {
                index,
                command: timed.command,
                code: refusal.code(),
                message: refusal.to_string(),
                refusal,
            });
        }
    }

    debug!(
        commands = request.commands.len(),
        refused = refusals.len(),
        phase = %scorer.state().phase(),
        "replay complete"
    );

    Ok(ScorerResponse {
        schema_version: SCHEMA_VERSION,
        scoreboard: Scoreboard::project(&scorer, history_limit),
        state: scorer.state().clone(),
        refusals,
    })
}

/// String-in/string-out wrapper around [`run_match`] using default settings.
pub fn run_match_json(request_json: &str) -> std::result::Result<String, String> {
    let request: ScorerRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code("INVALID_REQUEST", format!("Failed to parse request: {e}")))?;

    let response = run_match(&request, &ScorerSettings::default())
        .map_err(|e| err_code(e.code(), e))?;

    serde_json::to_string(&response)
        .map_err(|e| err_code("SERIALIZATION_ERROR", format!("Failed to serialize response: {e}")))
}

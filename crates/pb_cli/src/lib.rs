//! Scorekeeper library behind the `pb_cli` binary.
//!
//! Rally strings such as `"1,2,2,p,1"` are turned into scorer commands and
//! replayed through [`pb_core::run_match`].

use anyhow::{bail, Context, Result};
use chrono::Utc;
use pb_core::api::{CommandRefusal, TimedCommand};
use pb_core::{Command, MatchConfig, ScorerRequest, ScorerResponse, ScorerSettings, TeamId};
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse a comma or whitespace separated rally list.
///
/// `1` / `2` award a point, `p` toggles pause, `r` resets.
pub fn parse_rallies(input: &str) -> Result<Vec<Command>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token.to_ascii_lowercase().as_str() {
            "1" => Ok(Command::Point { team: TeamId::One }),
            "2" => Ok(Command::Point { team: TeamId::Two }),
            "p" | "pause" => Ok(Command::PauseResume),
            "r" | "reset" => Ok(Command::Reset),
            other => bail!("Unknown rally token '{other}' (expected 1, 2, p or r)"),
        })
        .collect()
}

/// Start a match with `config` and replay `rallies` against it.
pub fn play(
    config: MatchConfig,
    rallies: &[Command],
    settings: &ScorerSettings,
) -> Result<ScorerResponse> {
    let commands = std::iter::once(Command::Start)
        .chain(rallies.iter().copied())
        .map(TimedCommand::from)
        .collect();

    let request = ScorerRequest {
        schema_version: pb_core::SCHEMA_VERSION,
        started_at: Some(Utc::now()),
        config,
        commands,
        history_limit: None,
    };

    let response = pb_core::run_match(&request, settings)?;
    info!(
        rallies = rallies.len(),
        refused = response.refusals.len(),
        "rallies replayed"
    );
    Ok(response)
}

/// Run a JSON request file and return the pretty-printed response.
pub fn run_request_file(input: &Path, settings: &ScorerSettings) -> Result<String> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read request file: {}", input.display()))?;
    let request: ScorerRequest = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse request file: {}", input.display()))?;

    let response = pb_core::run_match(&request, settings)?;
    Ok(serde_json::to_string_pretty(&response)?)
}

/// One line per refused rally, as printed before the scoreboard.
pub fn refusal_line(refused: &CommandRefusal) -> String {
    format!("#{} {} refused: {}", refused.index, refused.command, refused.message)
}

/// Settings from an explicit path, else from `PB_SETTINGS_PATH`.
pub fn load_settings(path: Option<&Path>) -> Result<ScorerSettings> {
    let settings = match path {
        Some(path) => ScorerSettings::load(path)
            .with_context(|| format!("Failed to load settings: {}", path.display()))?,
        None => ScorerSettings::from_env()?,
    };
    Ok(settings)
}

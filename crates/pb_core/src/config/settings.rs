use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

use crate::engine::{Clock, MatchScorer};
use crate::error::{Result, ScoreError};
use crate::models::MatchRules;

pub const SETTINGS_PATH_ENV: &str = "PB_SETTINGS_PATH";
pub const MAX_HISTORY_LIMIT: usize = 100;

fn default_history_limit() -> usize {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerSettings {
    /// Mode and target pre-selected on the setup screen and restored on reset.
    #[serde(default)]
    pub default_rules: MatchRules,
    /// How many log entries the scoreboard shows.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for ScorerSettings {
    fn default() -> Self {
        Self { default_rules: MatchRules::default(), history_limit: default_history_limit() }
    }
}

impl ScorerSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Load from the file named by `PB_SETTINGS_PATH`, or defaults if unset.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(SETTINGS_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::load(path).map_err(|e| match e {
            ScoreError::Io(io) => ScoreError::InvalidSettings(format!(
                "failed to read settings file from {SETTINGS_PATH_ENV}='{path}': {io}"
            )),
            other => other,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 || self.history_limit > MAX_HISTORY_LIMIT {
            return Err(ScoreError::InvalidSettings(format!(
                "history_limit must be 1..={MAX_HISTORY_LIMIT}, got {}",
                self.history_limit
            )));
        }
        Ok(())
    }

    /// A scorer whose setup state and resets use these settings.
    pub fn scorer<C: Clock>(&self, clock: C) -> MatchScorer<C> {
        MatchScorer::with_clock(clock).with_default_rules(self.default_rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SystemClock;
    use crate::models::{GameTarget, PlayersMode};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = ScorerSettings::default();
        assert_eq!(settings.history_limit, 5);
        assert_eq!(settings.default_rules.players_mode, PlayersMode::Doubles);
        assert_eq!(settings.default_rules.target, GameTarget::Eleven);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            ScorerSettings::from_json(r#"{"default_rules": {"target": 21}}"#).unwrap();
        assert_eq!(settings.default_rules.target, GameTarget::TwentyOne);
        assert_eq!(settings.default_rules.players_mode, PlayersMode::Doubles);
        assert_eq!(settings.history_limit, 5);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ScorerSettings::from_json(r#"{"history_limit": 0}"#),
            Err(ScoreError::InvalidSettings(_))
        ));
        assert!(ScorerSettings::from_json(r#"{"default_rules": {"target": 9}}"#).is_err());
        assert!(matches!(ScorerSettings::from_json("not json"), Err(ScoreError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"default_rules": {{"players_mode": "singles", "target": 15}}, "history_limit": 8}}"#
        )
        .unwrap();

        let settings = ScorerSettings::load(file.path()).unwrap();
        assert_eq!(settings.history_limit, 8);

        let scorer = settings.scorer(SystemClock);
        assert_eq!(scorer.state().rules().players_mode, PlayersMode::Singles);
        assert_eq!(scorer.state().rules().target, GameTarget::Fifteen);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScorerSettings::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ScoreError::Io(_))));
    }

    #[test]
    fn test_from_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"history_limit": 3}}"#).unwrap();

        env::set_var(SETTINGS_PATH_ENV, file.path());
        let loaded = ScorerSettings::from_env();
        env::set_var(SETTINGS_PATH_ENV, "  ");
        let blank = ScorerSettings::from_env();
        env::remove_var(SETTINGS_PATH_ENV);

        assert_eq!(loaded.unwrap().history_limit, 3);
        assert_eq!(blank.unwrap(), ScorerSettings::default());
        assert_eq!(ScorerSettings::from_env().unwrap(), ScorerSettings::default());
    }
}

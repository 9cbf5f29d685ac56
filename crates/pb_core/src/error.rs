use thiserror::Error;

use crate::engine::Refusal;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Operation refused: {0}")]
    Refused(#[from] Refusal),

    #[error("Invalid target score: {0} (expected 11, 15 or 21)")]
    InvalidTarget(u16),

    #[error("Invalid team: {0} (expected 1 or 2)")]
    InvalidTeam(u8),

    #[error("Invalid serving player: {0} (expected 1 or 2)")]
    InvalidServingPlayer(u8),

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    /// Stable machine-readable code, used as the prefix of API error strings.
    pub fn code(&self) -> &'static str {
        match self {
            ScoreError::Refused(refusal) => refusal.code(),
            ScoreError::InvalidTarget(_) => "INVALID_TARGET",
            ScoreError::InvalidTeam(_) => "INVALID_TEAM",
            ScoreError::InvalidServingPlayer(_) => "INVALID_SERVING_PLAYER",
            ScoreError::InvalidRoster(_) => "INVALID_ROSTER",
            ScoreError::InvalidSettings(_) => "INVALID_SETTINGS",
            ScoreError::UnsupportedSchema { .. } => "UNSUPPORTED_SCHEMA",
            ScoreError::Io(_) => "IO_ERROR",
            ScoreError::Json(_) => "INVALID_JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ScoreError;

/// Side of the court, numbered the way the scoreboard shows it.
///
/// Serialized as the bare integer `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum TeamId {
    #[default]
    One,
    Two,
}

impl TeamId {
    pub const ALL: [TeamId; 2] = [TeamId::One, TeamId::Two];

    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            TeamId::One => 1,
            TeamId::Two => 2,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            TeamId::One => TeamId::Two,
            TeamId::Two => TeamId::One,
        }
    }
}

impl TryFrom<u8> for TeamId {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TeamId::One),
            2 => Ok(TeamId::Two),
            other => Err(ScoreError::InvalidTeam(other)),
        }
    }
}

impl From<TeamId> for u8 {
    fn from(team: TeamId) -> Self {
        team.number()
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.number())
    }
}

/// Which of the two serving-team players holds the serve.
///
/// Only meaningful in doubles; singles keeps it at `First`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum ServingPlayer {
    #[default]
    First,
    Second,
}

impl ServingPlayer {
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            ServingPlayer::First => 1,
            ServingPlayer::Second => 2,
        }
    }
}

impl TryFrom<u8> for ServingPlayer {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ServingPlayer::First),
            2 => Ok(ServingPlayer::Second),
            other => Err(ScoreError::InvalidServingPlayer(other)),
        }
    }
}

impl From<ServingPlayer> for u8 {
    fn from(player: ServingPlayer) -> Self {
        player.number()
    }
}

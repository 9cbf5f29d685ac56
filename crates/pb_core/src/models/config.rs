use serde::{Deserialize, Serialize};
use std::fmt;

use super::TeamId;
use crate::error::ScoreError;

/// Singles (1 vs 1) or doubles (2 vs 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayersMode {
    Singles,
    #[default]
    Doubles,
}

impl PlayersMode {
    pub fn parse(s: &str) -> Result<Self, ScoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "singles" | "single" | "1v1" => Ok(PlayersMode::Singles),
            "doubles" | "double" | "2v2" => Ok(PlayersMode::Doubles),
            other => Err(ScoreError::InvalidSettings(format!("unknown players mode: {other}"))),
        }
    }
}

impl fmt::Display for PlayersMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayersMode::Singles => f.write_str("singles"),
            PlayersMode::Doubles => f.write_str("doubles"),
        }
    }
}

/// Points needed to win a game (still subject to win-by-2).
///
/// Serialized as the bare number; only 11, 15 and 21 are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u16", into = "u16")]
pub enum GameTarget {
    #[default]
    Eleven,
    Fifteen,
    TwentyOne,
}

impl GameTarget {
    pub const ALL: [GameTarget; 3] = [GameTarget::Eleven, GameTarget::Fifteen, GameTarget::TwentyOne];

    #[inline]
    pub const fn points(self) -> u16 {
        match self {
            GameTarget::Eleven => 11,
            GameTarget::Fifteen => 15,
            GameTarget::TwentyOne => 21,
        }
    }
}

impl TryFrom<u16> for GameTarget {
    type Error = ScoreError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            11 => Ok(GameTarget::Eleven),
            15 => Ok(GameTarget::Fifteen),
            21 => Ok(GameTarget::TwentyOne),
            other => Err(ScoreError::InvalidTarget(other)),
        }
    }
}

impl From<GameTarget> for u16 {
    fn from(target: GameTarget) -> Self {
        target.points()
    }
}

impl fmt::Display for GameTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// The rule knobs a match is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchRules {
    #[serde(default)]
    pub players_mode: PlayersMode,
    #[serde(default)]
    pub target: GameTarget,
}

impl MatchRules {
    pub const fn new(players_mode: PlayersMode, target: GameTarget) -> Self {
        Self { players_mode, target }
    }

    /// True when `score` has reached the target and leads `other` by two or more.
    #[inline]
    pub const fn is_winning(&self, score: u16, other: u16) -> bool {
        score >= self.target.points() && score.saturating_sub(other) >= 2
    }
}

/// Player names for one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamRoster {
    #[serde(default)]
    pub player1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player2: Option<String>,
}

impl TeamRoster {
    pub fn single(player1: impl Into<String>) -> Self {
        Self { player1: player1.into(), player2: None }
    }

    pub fn pair(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self { player1: player1.into(), player2: Some(player2.into()) }
    }

    /// Parse `"Alice"` or `"Alice,Bob"`. A third name is an error.
    pub fn parse(list: &str) -> Result<Self, ScoreError> {
        let mut names = list.split(',').map(|n| n.trim().to_string());
        let player1 = names.next().unwrap_or_default();
        let player2 = names.next().filter(|n| !n.is_empty());
        if names.next().is_some() {
            return Err(ScoreError::InvalidRoster(format!(
                "at most two names per team, got \"{list}\""
            )));
        }
        Ok(Self { player1, player2 })
    }

    /// First slot (1-based) left blank for the given mode, if any.
    pub fn missing_slot(&self, mode: PlayersMode) -> Option<u8> {
        if is_blank(&self.player1) {
            return Some(1);
        }
        if mode == PlayersMode::Doubles && self.player2.as_deref().map_or(true, is_blank) {
            return Some(2);
        }
        None
    }

    /// Names that take part under `mode`; the second slot is ignored in singles.
    pub fn names(&self, mode: PlayersMode) -> Vec<&str> {
        let mut names = vec![self.player1.as_str()];
        if mode == PlayersMode::Doubles {
            if let Some(p2) = self.player2.as_deref() {
                names.push(p2);
            }
        }
        names
    }
}

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Everything collected on the setup screen before a match can start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchConfig {
    #[serde(default)]
    pub rules: MatchRules,
    pub team1: TeamRoster,
    pub team2: TeamRoster,
}

impl MatchConfig {
    pub fn singles(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            rules: MatchRules::new(PlayersMode::Singles, GameTarget::default()),
            team1: TeamRoster::single(player1),
            team2: TeamRoster::single(player2),
        }
    }

    pub fn doubles(team1: (&str, &str), team2: (&str, &str)) -> Self {
        Self {
            rules: MatchRules::new(PlayersMode::Doubles, GameTarget::default()),
            team1: TeamRoster::pair(team1.0, team1.1),
            team2: TeamRoster::pair(team2.0, team2.1),
        }
    }

    pub fn with_target(mut self, target: GameTarget) -> Self {
        self.rules.target = target;
        self
    }

    pub fn roster(&self, team: TeamId) -> &TeamRoster {
        match team {
            TeamId::One => &self.team1,
            TeamId::Two => &self.team2,
        }
    }

    /// First empty roster slot, checked team 1 before team 2.
    pub fn missing_slot(&self) -> Option<(TeamId, u8)> {
        TeamId::ALL.into_iter().find_map(|team| {
            self.roster(team)
                .missing_slot(self.rules.players_mode)
                .map(|slot| (team, slot))
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ScoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TeamId;

/// One entry in the match log.
///
/// `Display` renders the text shown in the game history panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    Started,
    Paused,
    Resumed,
    PointScored {
        team: TeamId,
        team1_score: u16,
        team2_score: u16,
    },
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchEvent::Started => f.write_str("Game started!"),
            MatchEvent::Paused => f.write_str("Game paused"),
            MatchEvent::Resumed => f.write_str("Game resumed"),
            MatchEvent::PointScored { team, team1_score, team2_score } => {
                write!(f, "{team} scores! ({team1_score}-{team2_score})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_text() {
        assert_eq!(MatchEvent::Started.to_string(), "Game started!");
        assert_eq!(MatchEvent::Paused.to_string(), "Game paused");
        assert_eq!(MatchEvent::Resumed.to_string(), "Game resumed");
        let point = MatchEvent::PointScored { team: TeamId::Two, team1_score: 3, team2_score: 4 };
        assert_eq!(point.to_string(), "Team 2 scores! (3-4)");
    }

    #[test]
    fn test_event_json_is_tagged() {
        let point = MatchEvent::PointScored { team: TeamId::One, team1_score: 1, team2_score: 0 };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["type"], "point_scored");
        assert_eq!(json["team"], 1);
    }
}

//! Serve rotation.
//!
//! The serve only moves when the receiving side wins the rally. In doubles the
//! serving side first hands over to its second server; a further lost rally
//! is a side-out.

use serde::{Deserialize, Serialize};

use crate::models::{PlayersMode, ServingPlayer, TeamId};

/// Who is serving right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Serve {
    pub team: TeamId,
    pub player: ServingPlayer,
}

impl Serve {
    /// Team 1, first server.
    pub const OPENING: Serve = Serve { team: TeamId::One, player: ServingPlayer::First };

    /// Serve after `scorer` won a rally.
    ///
    /// Returns the new serve and whether the serve changed sides.
    pub fn after_point(self, scorer: TeamId, mode: PlayersMode) -> (Serve, bool) {
        if scorer == self.team {
            return (self, false);
        }

        match (mode, self.player) {
            (PlayersMode::Doubles, ServingPlayer::First) => {
                (Serve { team: self.team, player: ServingPlayer::Second }, false)
            }
            (PlayersMode::Doubles, ServingPlayer::Second) => {
                (Serve { team: self.team.opponent(), player: ServingPlayer::First }, true)
            }
            // Singles never leaves the first server.
            (PlayersMode::Singles, _) => {
                (Serve { team: self.team.opponent(), player: ServingPlayer::First }, true)
            }
        }
    }
}

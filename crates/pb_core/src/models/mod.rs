pub mod config;
pub mod events;
pub mod team;

pub use config::{GameTarget, MatchConfig, MatchRules, PlayersMode, TeamRoster};
pub use events::MatchEvent;
pub use team::{ServingPlayer, TeamId};

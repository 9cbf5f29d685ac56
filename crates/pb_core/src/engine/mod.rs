//! Scoring engine: phases, serve rotation, transitions and the session owner.

pub mod clock;
pub mod phase;
pub mod refusal;
pub mod scorer;
pub mod serve;
pub mod state;

pub use clock::{format_elapsed, Clock, ManualClock, SystemClock};
pub use phase::MatchPhase;
pub use refusal::Refusal;
pub use scorer::MatchScorer;
pub use serve::Serve;
pub use state::MatchState;

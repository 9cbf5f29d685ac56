//! Read-time projections for a presentation layer.

pub mod scoreboard;

pub use scoreboard::{Scoreboard, TeamPanel};

pub mod json_api;

pub use json_api::{
    run_match, run_match_json, Command, CommandRefusal, ScorerRequest, ScorerResponse,
    TimedCommand,
};

//! Scorer settings.
//!
//! Settings come from a JSON file whose path is read from
//! [`SETTINGS_PATH_ENV`]; an unset or blank variable means defaults.

mod settings;

pub use settings::{ScorerSettings, MAX_HISTORY_LIMIT, SETTINGS_PATH_ENV};

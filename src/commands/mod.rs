//! Command implementations for the fantasy scoring CLI.

pub mod compare;
pub mod players;
pub mod positions;

use crate::error::Result;
use crate::scoring::profile::ScoringProfile;
use std::path::Path;

/// Resolve the scoring profile for a command: an explicit JSON file wins
/// over a built-in profile name.
pub fn resolve_profile(name: &str, profile_file: Option<&Path>) -> Result<ScoringProfile> {
    match profile_file {
        Some(path) => ScoringProfile::from_json_file(path),
        None => ScoringProfile::builtin(name),
    }
}

//! Fantasy Football Scoring Comparison Library
//!
//! Computes fantasy scoring totals and per-position averages from a
//! season-by-season player statistics table under configurable scoring rule
//! sets, and compares rule-set variants side by side.
//!
//! ## Pipeline
//!
//! Raw CSV rows flow one direction:
//! points ([`scoring::points`]) → per-player aggregates
//! ([`scoring::aggregate`]) → top-N positional averages ([`scoring::rank`])
//! → nested cross-profile comparison ([`scoring::compare`]), consumed by the
//! reporter ([`report`]) and chart sink ([`chart`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_scoring::{Season, ScoringProfile, commands::players::handle_players};
//! use std::path::Path;
//!
//! # fn example() -> ffl_scoring::Result<()> {
//! let mut stdout = std::io::stdout();
//! handle_players(
//!     &mut stdout,
//!     Path::new("player_stats.csv"),
//!     &Season::new("2021"),
//!     &ScoringProfile::standard(),
//!     false,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use cli::types::{Position, Season};
pub use error::{Result, ScoringError};
pub use input::StatRow;
pub use scoring::{ComparisonResult, PlayerAggregate, PositionAverage, ProfileSet, ScoringProfile};

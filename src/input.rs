//! Stat table loading.
//!
//! Reads the delimited player statistics file and produces [`StatRow`]s for
//! one requested season. The season filter happens before numeric parsing,
//! so a malformed number on a row from another season never fails the run.

use crate::cli::types::Season;
use crate::error::{Result, ScoringError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Columns the scoring pipeline reads. A header missing any of these is a
/// fatal input-format error before any row is processed.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "season",
    "player_name",
    "position",
    "passing_tds",
    "passing_yards",
    "interceptions",
    "sacks",
    "rushing_tds",
    "rushing_yards",
    "receiving_tds",
    "receiving_yards",
    "receptions",
];

/// One player's counting stats for one season, as read from the input file.
///
/// `player_name` and `position` are verbatim strings; grouping downstream
/// does no normalization, so inconsistent capitalization in the source data
/// creates distinct entities. That is a documented limitation of the data,
/// not something this layer repairs.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub season: String,
    pub player_name: String,
    pub position: String,
    pub passing_tds: f64,
    pub passing_yards: f64,
    pub interceptions: f64,
    pub sacks: f64,
    pub rushing_tds: f64,
    pub rushing_yards: f64,
    pub receiving_tds: f64,
    pub receiving_yards: f64,
    pub receptions: f64,
}

/// Raw record with every field as text. Numeric conversion is deferred so
/// that only rows matching the requested season are parsed.
#[derive(Debug, Deserialize)]
struct RawStatRecord {
    season: String,
    player_name: String,
    position: String,
    passing_tds: String,
    passing_yards: String,
    interceptions: String,
    sacks: String,
    rushing_tds: String,
    rushing_yards: String,
    receiving_tds: String,
    receiving_yards: String,
    receptions: String,
}

impl RawStatRecord {
    fn into_stat_row(self) -> Result<StatRow> {
        let player = &self.player_name;
        Ok(StatRow {
            passing_tds: parse_stat("passing_tds", &self.passing_tds, player)?,
            passing_yards: parse_stat("passing_yards", &self.passing_yards, player)?,
            interceptions: parse_stat("interceptions", &self.interceptions, player)?,
            sacks: parse_stat("sacks", &self.sacks, player)?,
            rushing_tds: parse_stat("rushing_tds", &self.rushing_tds, player)?,
            rushing_yards: parse_stat("rushing_yards", &self.rushing_yards, player)?,
            receiving_tds: parse_stat("receiving_tds", &self.receiving_tds, player)?,
            receiving_yards: parse_stat("receiving_yards", &self.receiving_yards, player)?,
            receptions: parse_stat("receptions", &self.receptions, player)?,
            season: self.season,
            player_name: self.player_name,
            position: self.position,
        })
    }
}

fn parse_stat(column: &str, value: &str, player: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ScoringError::FieldParse {
            column: column.to_string(),
            value: value.to_string(),
            player: player.to_string(),
        })
}

/// Load all rows for one season from a stats CSV.
///
/// Seasons compare as exact strings: `"2020"` never matches `"2020.0"`.
/// A season with no matching rows yields an empty vector, not an error.
pub fn load_season_rows(path: &Path, season: &Season) -> Result<Vec<StatRow>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ScoringError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize::<RawStatRecord>() {
        let raw = record?;
        if raw.season == season.as_str() {
            rows.push(raw.into_stat_row()?);
        }
    }
    debug!(season = %season, rows = rows.len(), "season rows loaded");
    Ok(rows)
}

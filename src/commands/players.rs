//! Per-player totals and averages for one season.

use crate::cli::types::Season;
use crate::error::Result;
use crate::input::load_season_rows;
use crate::report::{player_lines, write_player_report};
use crate::scoring::aggregate::aggregate_rows;
use crate::scoring::profile::ScoringProfile;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Score every row of one season under one profile and report per-player
/// totals and averages, as text or JSON.
pub fn handle_players(
    out: &mut impl Write,
    input: &Path,
    season: &Season,
    profile: &ScoringProfile,
    as_json: bool,
) -> Result<()> {
    let rows = load_season_rows(input, season)?;
    info!(season = %season, rows = rows.len(), "scoring player rows");

    let groups = aggregate_rows(&rows, profile);
    let lines = player_lines(&groups);

    if as_json {
        serde_json::to_writer_pretty(&mut *out, &lines)?;
        writeln!(out)?;
    } else {
        write_player_report(out, &lines)?;
    }
    Ok(())
}

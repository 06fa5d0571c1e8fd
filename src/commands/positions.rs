//! Top-N positional averages for one season.

use crate::cli::types::Season;
use crate::error::Result;
use crate::input::load_season_rows;
use crate::report::{position_lines, write_position_report};
use crate::scoring::aggregate::aggregate_rows;
use crate::scoring::profile::ScoringProfile;
use crate::scoring::rank::top_n_position_averages;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Report the top-N positional averages (QB/RB/WR) for one season under
/// one profile.
pub fn handle_positions(
    out: &mut impl Write,
    input: &Path,
    season: &Season,
    profile: &ScoringProfile,
    top_n: usize,
    as_json: bool,
) -> Result<()> {
    let rows = load_season_rows(input, season)?;
    info!(season = %season, top_n, rows = rows.len(), "ranking positions");

    let groups = aggregate_rows(&rows, profile);
    let averages = top_n_position_averages(&groups, top_n)?;
    let lines = position_lines(&averages);

    if as_json {
        serde_json::to_writer_pretty(&mut *out, &lines)?;
        writeln!(out)?;
    } else {
        write_position_report(out, &lines)?;
    }
    Ok(())
}

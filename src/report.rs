//! Human-readable and JSON report output.
//!
//! Rounding to two decimals happens here and only here; the pipeline keeps
//! full-precision values throughout.

use crate::cli::types::Position;
use crate::error::Result;
use crate::scoring::aggregate::PlayerAggregate;
use crate::scoring::compare::ComparisonResult;
use crate::scoring::rank::PositionAverage;
use serde::Serialize;
use std::io::Write;

/// One per-player report line.
#[derive(Debug, Serialize)]
pub struct PlayerLine {
    pub player_name: String,
    pub position: String,
    pub total_points: f64,
    pub average_points: f64,
}

/// One per-position summary line.
#[derive(Debug, Serialize)]
pub struct PositionLine {
    pub position: String,
    pub average_points: f64,
}

/// Flatten aggregates into report rows, keeping aggregate order.
pub fn player_lines(groups: &[PlayerAggregate]) -> Vec<PlayerLine> {
    groups
        .iter()
        .map(|g| PlayerLine {
            player_name: g.player_name.clone(),
            position: g.position.clone(),
            total_points: g.total(),
            average_points: g.average(),
        })
        .collect()
}

/// Keep only the reported positions (QB/RB/WR), preserving ranking order.
pub fn position_lines(averages: &[PositionAverage]) -> Vec<PositionLine> {
    averages
        .iter()
        .filter(|a| Position::REPORTED.iter().any(|p| p.matches(&a.position)))
        .map(|a| PositionLine {
            position: a.position.clone(),
            average_points: a.average,
        })
        .collect()
}

pub fn write_player_report(out: &mut impl Write, lines: &[PlayerLine]) -> Result<()> {
    writeln!(out, "Player Averages and Totals:")?;
    for line in lines {
        writeln!(
            out,
            "Player Name: {}, Position: {}, Total Points: {:.2}, Average Points: {:.2}",
            line.player_name, line.position, line.total_points, line.average_points
        )?;
    }
    Ok(())
}

pub fn write_position_report(out: &mut impl Write, lines: &[PositionLine]) -> Result<()> {
    for line in lines {
        writeln!(
            out,
            "Position: {}, Average Points: {:.2}",
            line.position, line.average_points
        )?;
    }
    Ok(())
}

/// Print every (season, N) bucket of a comparison. Empty buckets print
/// their header and nothing else.
pub fn write_comparison_report(out: &mut impl Write, result: &ComparisonResult) -> Result<()> {
    for (season, by_threshold) in &result.seasons {
        for (top_n, entries) in by_threshold {
            writeln!(out)?;
            writeln!(
                out,
                "Average points in {} for top {} players by position:",
                season, top_n
            )?;
            for entry in entries {
                writeln!(out, "  {}: {:.2}", entry.label, entry.average)?;
            }
        }
    }
    Ok(())
}

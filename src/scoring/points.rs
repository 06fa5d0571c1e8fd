//! Fantasy point calculation for a single stat row.

use crate::cli::types::is_quarterback;
use crate::input::StatRow;
use crate::scoring::profile::ScoringProfile;

/// Compute fantasy points for one player-season row under one profile.
///
/// Quarterbacks use the QB-specific rushing coefficients and take the sack
/// penalty; every other position uses the generic rushing coefficients and
/// never pays for sacks, even when the profile carries a nonzero
/// `points_per_sack`. The gate is the row's position, not a profile flag.
///
/// No rounding happens here; two-decimal formatting is a presentation
/// concern in the reporter.
pub fn fantasy_points(row: &StatRow, profile: &ScoringProfile) -> f64 {
    let passing = row.passing_tds * profile.points_per_passing_td
        + row.passing_yards * profile.points_per_passing_yard;
    let interceptions = row.interceptions * profile.points_per_interception;

    let qb = is_quarterback(&row.position);

    let sacks = if qb {
        row.sacks * profile.points_per_sack
    } else {
        0.0
    };

    let rushing = if qb {
        row.rushing_tds * profile.qb_points_per_rushing_td
            + row.rushing_yards * profile.qb_points_per_rushing_yard
    } else {
        row.rushing_tds * profile.points_per_rushing_td
            + row.rushing_yards * profile.points_per_rushing_yard
    };

    let receiving = row.receiving_tds * profile.points_per_receiving_td
        + row.receiving_yards * profile.points_per_receiving_yard
        + row.receptions * profile.points_per_reception;

    passing + interceptions + sacks + rushing + receiving
}

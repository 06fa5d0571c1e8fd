//! Side-by-side comparison of scoring rule sets.
//!
//! Runs the aggregate + rank pipeline for every (season, profile) pair and
//! merges the variants' QB figures into the baseline buckets, so one report
//! or chart can show baseline QB/RB/WR next to each adjusted QB value.

use crate::cli::types::{Position, Season};
use crate::error::Result;
use crate::input::{load_season_rows, StatRow};
use crate::scoring::aggregate::aggregate_rows;
use crate::scoring::profile::ScoringProfile;
use crate::scoring::rank::{top_n_position_averages, PositionAverage};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// A baseline profile plus labeled variants to compare against it.
#[derive(Debug, Clone)]
pub struct ProfileSet {
    pub baseline: ScoringProfile,
    pub variants: Vec<(String, ScoringProfile)>,
}

impl ProfileSet {
    /// The QB balance study from the original league discussion: standard
    /// PPR against a slight and a heavy QB nerf.
    pub fn qb_nerf_study() -> Self {
        Self {
            baseline: ScoringProfile::standard(),
            variants: vec![
                ("slight_nerf".to_string(), ScoringProfile::slight_qb_nerf()),
                ("heavy_nerf".to_string(), ScoringProfile::heavy_qb_nerf()),
            ],
        }
    }

    /// Baseline only, no variant columns.
    pub fn baseline_only(profile: ScoringProfile) -> Self {
        Self {
            baseline: profile,
            variants: Vec::new(),
        }
    }
}

/// One labeled point on a comparison series: a reported position, or a
/// variant key such as `QB_slight_nerf`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledAverage {
    pub label: String,
    pub average: f64,
}

/// Labeled averages for every N threshold within one season.
pub type SeasonComparison = BTreeMap<usize, Vec<LabeledAverage>>;

/// Nested comparison output: season, then N threshold, then ordered
/// labeled averages. This is the final artifact consumed by reporting and
/// charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub seasons: BTreeMap<Season, SeasonComparison>,
}

/// Pick the reported positions (QB, RB, WR in that order) out of ranked
/// averages. Unreported positions are computed upstream but dropped here;
/// positions with no players are absent entirely.
fn reported_entries(averages: &[PositionAverage]) -> Vec<LabeledAverage> {
    Position::REPORTED
        .iter()
        .filter_map(|position| {
            averages
                .iter()
                .find(|a| position.matches(&a.position))
                .map(|a| LabeledAverage {
                    label: a.position.clone(),
                    average: a.average,
                })
        })
        .collect()
}

fn qb_entry(averages: &[PositionAverage], variant_label: &str) -> Option<LabeledAverage> {
    averages
        .iter()
        .find(|a| Position::QB.matches(&a.position))
        .map(|a| LabeledAverage {
            label: format!("QB_{variant_label}"),
            average: a.average,
        })
}

/// Run the full comparison: every season against every N threshold under
/// the baseline and each variant profile.
///
/// Rows for a season are loaded from `input` once and shared read-only
/// across profiles and thresholds. Each variant run recomputes RB/WR even
/// though only its QB figure is kept; the redundancy is accepted for
/// simplicity. A season with no matching rows produces empty buckets
/// rather than an error.
pub fn run_comparison(
    input: &Path,
    seasons: &[Season],
    thresholds: &[usize],
    profiles: &ProfileSet,
) -> Result<ComparisonResult> {
    let mut result = ComparisonResult {
        seasons: BTreeMap::new(),
    };

    for season in seasons {
        let rows: Vec<StatRow> = load_season_rows(input, season)?;
        info!(season = %season, rows = rows.len(), "comparing scoring profiles");

        let baseline_groups = aggregate_rows(&rows, &profiles.baseline);
        let variant_groups: Vec<(&str, _)> = profiles
            .variants
            .iter()
            .map(|(label, profile)| (label.as_str(), aggregate_rows(&rows, profile)))
            .collect();

        let mut by_threshold: SeasonComparison = BTreeMap::new();
        for &top_n in thresholds {
            let baseline_averages = top_n_position_averages(&baseline_groups, top_n)?;
            let mut entries = reported_entries(&baseline_averages);

            for (label, groups) in &variant_groups {
                let averages = top_n_position_averages(groups, top_n)?;
                if let Some(entry) = qb_entry(&averages, label) {
                    entries.push(entry);
                }
            }

            debug!(season = %season, top_n, entries = entries.len(), "bucket assembled");
            by_threshold.insert(top_n, entries);
        }
        result.seasons.insert(season.clone(), by_threshold);
    }

    Ok(result)
}

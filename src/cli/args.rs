//! CLI argument definitions and parsing structures.

use super::types::Season;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Arguments shared by the single-season commands.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Path to the player statistics CSV.
    #[clap(long, short, default_value = "player_stats.csv")]
    pub input: PathBuf,

    /// Season to score, matched as exact text against the `season` column.
    #[clap(long, short)]
    pub season: Season,

    /// Built-in scoring profile: `standard`, `slight-qb-nerf`, or `heavy-qb-nerf`.
    #[clap(long, short, default_value = "standard")]
    pub profile: String,

    /// JSON file with a full set of scoring coefficients; overrides --profile.
    #[clap(long)]
    pub profile_file: Option<PathBuf>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "ffl-scoring", about = "Compare fantasy football scoring rule sets")]
pub struct FflScoring {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Per-player totals and averages for one season under one profile.
    Players {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Top-N positional averages (QB/RB/WR) for one season under one profile.
    Positions {
        #[clap(flatten)]
        common: CommonArgs,

        /// How many top players per position feed the positional average.
        #[clap(long, short = 'n', default_value_t = 30)]
        top_n: usize,
    },

    /// Compare baseline scoring against the QB nerf variants across seasons
    /// and top-N thresholds, with optional SVG charts.
    Compare {
        /// Path to the player statistics CSV.
        #[clap(long, short, default_value = "player_stats.csv")]
        input: PathBuf,

        /// Season to include (repeatable): `-s 2020 -s 2021`.
        #[clap(long, short, default_values_t = default_seasons())]
        season: Vec<Season>,

        /// Top-N threshold to include (repeatable): `-n 10 -n 20`.
        #[clap(long = "top-n", short = 'n', default_values_t = default_thresholds())]
        top_n: Vec<usize>,

        /// Output the nested comparison as JSON instead of text.
        #[clap(long)]
        json: bool,

        /// Write one SVG chart per season into this directory.
        #[clap(long)]
        chart_dir: Option<PathBuf>,
    },
}

/// Seasons of the original league study.
pub fn default_seasons() -> Vec<Season> {
    ["2020", "2021", "2022"].into_iter().map(Season::new).collect()
}

/// Thresholds of the original league study.
pub fn default_thresholds() -> Vec<usize> {
    vec![10, 20, 30, 40]
}

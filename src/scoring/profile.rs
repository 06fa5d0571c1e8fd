//! League scoring profiles.
//!
//! A [`ScoringProfile`] is an immutable set of named coefficients applied to
//! a player's counting stats. Every coefficient the points calculation uses
//! is a struct field, so a constructed profile is complete by definition; no
//! key lookup can fail at scoring time.

use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Coefficients for one scoring rule set, in points per unit stat.
///
/// The `qb_points_per_rushing_td` / `qb_points_per_rushing_yard` pair
/// overrides the generic rushing coefficients for quarterbacks only, which
/// is how superflex leagues tune QB value without touching RB scoring.
/// `points_per_sack` is likewise only ever applied to quarterbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    pub points_per_passing_td: f64,
    pub points_per_passing_yard: f64,
    pub points_per_interception: f64,
    pub points_per_rushing_td: f64,
    pub points_per_rushing_yard: f64,
    pub points_per_receiving_td: f64,
    pub points_per_receiving_yard: f64,
    pub points_per_reception: f64,
    pub points_per_sack: f64,
    pub qb_points_per_rushing_td: f64,
    pub qb_points_per_rushing_yard: f64,
}

impl ScoringProfile {
    /// Standard PPR scoring: 4-point passing TDs, 1 point per 25 passing
    /// yards, full rushing value for QBs, no sack penalty.
    pub fn standard() -> Self {
        Self {
            points_per_passing_td: 4.0,
            points_per_passing_yard: 0.04,
            points_per_interception: -2.0,
            points_per_rushing_td: 6.0,
            points_per_rushing_yard: 0.1,
            points_per_receiving_td: 6.0,
            points_per_receiving_yard: 0.1,
            points_per_reception: 1.0,
            points_per_sack: 0.0,
            qb_points_per_rushing_td: 6.0,
            qb_points_per_rushing_yard: 0.1,
        }
    }

    /// Mild QB devaluation: harsher interceptions, QB rushing TDs down to 5.
    pub fn slight_qb_nerf() -> Self {
        Self {
            points_per_interception: -3.0,
            qb_points_per_rushing_td: 5.0,
            ..Self::standard()
        }
    }

    /// Aggressive QB devaluation: 3-point passing TDs, QB rushing TDs down to 4.
    pub fn heavy_qb_nerf() -> Self {
        Self {
            points_per_passing_td: 3.0,
            qb_points_per_rushing_td: 4.0,
            ..Self::standard()
        }
    }

    /// Look up a built-in profile by CLI name.
    pub fn builtin(name: &str) -> Result<Self> {
        match name {
            "standard" => Ok(Self::standard()),
            "slight-qb-nerf" => Ok(Self::slight_qb_nerf()),
            "heavy-qb-nerf" => Ok(Self::heavy_qb_nerf()),
            _ => Err(ScoringError::UnknownProfile {
                name: name.to_string(),
            }),
        }
    }

    /// Load a custom profile from a JSON file. All coefficients must be
    /// present; a missing field is a deserialization error.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

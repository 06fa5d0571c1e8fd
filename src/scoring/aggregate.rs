//! Grouping of scored rows into per-player aggregates.

use crate::input::StatRow;
use crate::scoring::points::fantasy_points;
use crate::scoring::profile::ScoringProfile;
use std::collections::HashMap;

/// Scored results for one (player, position) pair within one season.
///
/// The key is the exact string pair from the input; no name normalization
/// happens, so "Joe Smith" and "joe smith" aggregate separately. Point
/// values keep input encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAggregate {
    pub player_name: String,
    pub position: String,
    pub points: Vec<f64>,
}

impl PlayerAggregate {
    pub fn total(&self) -> f64 {
        self.points.iter().sum()
    }

    /// Mean of this player's per-row points. Aggregates are only created
    /// with at least one row, so the divisor is never zero.
    pub fn average(&self) -> f64 {
        self.total() / self.points.len() as f64
    }
}

/// Score every row under `profile` and group by (player name, position).
///
/// Groups appear in first-encounter order, which downstream ranking relies
/// on as the tie-break order among equal averages.
pub fn aggregate_rows(rows: &[StatRow], profile: &ScoringProfile) -> Vec<PlayerAggregate> {
    let mut groups: Vec<PlayerAggregate> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for row in rows {
        let points = fantasy_points(row, profile);
        let key = (row.player_name.clone(), row.position.clone());
        match index.get(&key) {
            Some(&i) => groups[i].points.push(points),
            None => {
                index.insert(key, groups.len());
                groups.push(PlayerAggregate {
                    player_name: row.player_name.clone(),
                    position: row.position.clone(),
                    points: vec![points],
                });
            }
        }
    }
    groups
}

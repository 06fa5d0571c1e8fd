//! Top-N positional averages.

use crate::error::{Result, ScoringError};
use crate::scoring::aggregate::PlayerAggregate;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Mean of the top-N player averages at one position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionAverage {
    pub position: String,
    pub average: f64,
}

/// Sort (player, average) entries descending and keep the first
/// min(n, len). The sort is stable with no secondary key, so equal averages
/// keep their aggregate encounter order when the cut lands between them.
fn top_cut(mut entries: Vec<(String, f64)>, n: usize) -> Vec<(String, f64)> {
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    entries.truncate(n);
    entries
}

/// For every position present in `groups`, average the top `top_n` player
/// averages.
///
/// Positions appear in encounter order; a position with no players is
/// simply absent. All positions are computed here; restricting the report
/// to QB/RB/WR happens downstream.
pub fn top_n_position_averages(
    groups: &[PlayerAggregate],
    top_n: usize,
) -> Result<Vec<PositionAverage>> {
    if top_n == 0 {
        return Err(ScoringError::InvalidThreshold);
    }

    let mut positions: Vec<(String, Vec<(String, f64)>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for group in groups {
        let entry = (group.player_name.clone(), group.average());
        match index.get(&group.position) {
            Some(&i) => positions[i].1.push(entry),
            None => {
                index.insert(group.position.clone(), positions.len());
                positions.push((group.position.clone(), vec![entry]));
            }
        }
    }

    Ok(positions
        .into_iter()
        .map(|(position, entries)| {
            let cut = top_cut(entries, top_n);
            let average = cut.iter().map(|(_, avg)| avg).sum::<f64>() / cut.len() as f64;
            PositionAverage { position, average }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(name: &str, position: &str, points: Vec<f64>) -> PlayerAggregate {
        PlayerAggregate {
            player_name: name.to_string(),
            position: position.to_string(),
            points,
        }
    }

    #[test]
    fn averages_top_n_per_position() {
        let groups = vec![
            aggregate("A", "QB", vec![30.0]),
            aggregate("B", "QB", vec![20.0]),
            aggregate("C", "QB", vec![10.0]),
            aggregate("D", "RB", vec![15.0]),
        ];
        let result = top_n_position_averages(&groups, 2).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].position, "QB");
        assert!((result[0].average - 25.0).abs() < 1e-9);
        assert_eq!(result[1].position, "RB");
        assert!((result[1].average - 15.0).abs() < 1e-9);
    }

    #[test]
    fn n_at_least_player_count_means_plain_average() {
        let groups = vec![
            aggregate("A", "WR", vec![12.0]),
            aggregate("B", "WR", vec![6.0]),
            aggregate("C", "WR", vec![3.0]),
        ];
        let capped = top_n_position_averages(&groups, 3).unwrap();
        let oversized = top_n_position_averages(&groups, 50).unwrap();

        assert!((capped[0].average - 7.0).abs() < 1e-9);
        assert_eq!(capped[0].average, oversized[0].average);
    }

    #[test]
    fn ties_at_the_cut_keep_encounter_order() {
        // B and C tie at 10.0; with n=2 the cut lands between them and the
        // earlier entry (B) must survive.
        let entries = vec![
            ("A".to_string(), 20.0),
            ("B".to_string(), 10.0),
            ("C".to_string(), 10.0),
            ("D".to_string(), 5.0),
        ];
        let cut = top_cut(entries, 2);

        assert_eq!(cut.len(), 2);
        assert_eq!(cut[0].0, "A");
        assert_eq!(cut[1].0, "B");
    }

    #[test]
    fn cut_is_stable_across_a_run_of_ties() {
        let entries = vec![
            ("B".to_string(), 10.0),
            ("C".to_string(), 10.0),
            ("A".to_string(), 10.0),
        ];
        let cut = top_cut(entries, 3);
        let names: Vec<&str> = cut.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["B", "C", "A"]);
    }

    #[test]
    fn empty_positions_are_omitted_not_zeroed() {
        let groups = vec![aggregate("A", "QB", vec![10.0])];
        let result = top_n_position_averages(&groups, 5).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.iter().all(|p| p.position != "RB"));
    }

    #[test]
    fn no_groups_yields_no_positions() {
        let result = top_n_position_averages(&[], 10).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let groups = vec![aggregate("A", "QB", vec![10.0])];
        assert!(matches!(
            top_n_position_averages(&groups, 0),
            Err(ScoringError::InvalidThreshold)
        ));
    }
}

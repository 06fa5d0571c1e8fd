//! End-to-end tests for the scoring pipeline, from CSV input to the nested
//! comparison result.

use ffl_scoring::{
    chart::{render_comparison, RecordingSink},
    input::load_season_rows,
    scoring::{
        aggregate_rows, fantasy_points, run_comparison, top_n_position_averages, ProfileSet,
        ScoringProfile,
    },
    Season,
};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "season,player_name,position,passing_tds,passing_yards,interceptions,sacks,rushing_tds,rushing_yards,receiving_tds,receiving_yards,receptions";

fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

#[test]
fn worked_qb_example_scores_23_points_end_to_end() {
    let file = write_csv(&["2021,A,QB,3,300,1,2,0,10,0,0,0"]);

    let rows = load_season_rows(file.path(), &Season::new("2021")).unwrap();
    assert_eq!(rows.len(), 1);

    let total = fantasy_points(&rows[0], &ScoringProfile::standard());
    assert!((total - 23.0).abs() < 1e-9);

    let groups = aggregate_rows(&rows, &ScoringProfile::standard());
    assert!((groups[0].total() - 23.0).abs() < 1e-9);
    assert!((groups[0].average() - 23.0).abs() < 1e-9);
}

#[test]
fn group_totals_match_the_sum_of_row_points() {
    let file = write_csv(&[
        "2021,A,WR,0,0,0,0,0,0,1,80,6",
        "2021,A,WR,0,0,0,0,0,0,0,120,9",
        "2021,A,WR,0,0,0,0,0,0,2,40,3",
    ]);
    let profile = ScoringProfile::standard();
    let rows = load_season_rows(file.path(), &Season::new("2021")).unwrap();

    let by_row: f64 = rows.iter().map(|r| fantasy_points(r, &profile)).sum();
    let groups = aggregate_rows(&rows, &profile);

    assert_eq!(groups.len(), 1);
    assert!((groups[0].total() - by_row).abs() < 1e-9);
}

#[test]
fn oversized_threshold_equals_unrestricted_average() {
    let file = write_csv(&[
        "2021,A,RB,0,0,0,0,1,100,0,0,0",
        "2021,B,RB,0,0,0,0,0,50,0,0,0",
        "2021,C,RB,0,0,0,0,2,10,0,0,0",
    ]);
    let rows = load_season_rows(file.path(), &Season::new("2021")).unwrap();
    let groups = aggregate_rows(&rows, &ScoringProfile::standard());

    let unrestricted: f64 =
        groups.iter().map(|g| g.average()).sum::<f64>() / groups.len() as f64;
    let ranked = top_n_position_averages(&groups, 100).unwrap();

    assert_eq!(ranked.len(), 1);
    assert!((ranked[0].average - unrestricted).abs() < 1e-9);
}

#[test]
fn comparison_is_tolerant_of_an_empty_season_through_charting() {
    let file = write_csv(&["2021,A,QB,3,300,1,2,0,10,0,0,0"]);

    let result = run_comparison(
        file.path(),
        &[Season::new("1999"), Season::new("2021")],
        &[10, 20],
        &ProfileSet::qb_nerf_study(),
    )
    .unwrap();

    // Empty season is present with empty buckets.
    let empty = &result.seasons[&Season::new("1999")];
    assert!(empty.values().all(|entries| entries.is_empty()));

    // Charting simply omits the empty season instead of failing.
    let mut sink = RecordingSink::default();
    render_comparison(&mut sink, &result).unwrap();
    assert_eq!(sink.rendered.len(), 1);
    assert_eq!(sink.rendered[0].0, Season::new("2021"));
}

#[test]
fn variants_only_shift_the_qb_figures() {
    let file = write_csv(&[
        "2021,QB One,QB,3,300,1,2,1,40,0,0,0",
        "2021,Back One,RB,0,0,0,0,1,80,0,20,2",
        "2021,Wide One,WR,0,0,0,0,0,0,1,90,7",
    ]);

    let result = run_comparison(
        file.path(),
        &[Season::new("2021")],
        &[10],
        &ProfileSet::qb_nerf_study(),
    )
    .unwrap();

    let entries = &result.seasons[&Season::new("2021")][&10];
    let get = |label: &str| {
        entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.average)
            .unwrap()
    };

    // Baseline QB: 3*4 + 300*0.04 - 2 + 1*6 + 40*0.1 = 32.0
    assert!((get("QB") - 32.0).abs() < 1e-9);
    // Slight nerf: interception -3, QB rushing TD 5 -> 32 - 1 - 1 = 30.0
    assert!((get("QB_slight_nerf") - 30.0).abs() < 1e-9);
    // Heavy nerf: passing TD 3, QB rushing TD 4 -> 32 - 3 - 2 = 27.0
    assert!((get("QB_heavy_nerf") - 27.0).abs() < 1e-9);

    // RB/WR figures exist once, under the baseline labels only.
    // RB: 1*6 + 80*0.1 + 20*0.1 + 2*1 = 18.0
    assert!((get("RB") - 18.0).abs() < 1e-9);
    assert_eq!(entries.iter().filter(|e| e.label.contains("RB")).count(), 1);
    assert_eq!(entries.iter().filter(|e| e.label.contains("WR")).count(), 1);
}

#[test]
fn duplicate_entities_from_inconsistent_names_are_preserved() {
    // No name normalization: "a" and "A" are different players by design.
    let file = write_csv(&[
        "2021,A,WR,0,0,0,0,0,0,0,100,0",
        "2021,a,WR,0,0,0,0,0,0,0,100,0",
    ]);
    let rows = load_season_rows(file.path(), &Season::new("2021")).unwrap();
    let groups = aggregate_rows(&rows, &ScoringProfile::standard());
    assert_eq!(groups.len(), 2);
}

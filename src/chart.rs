//! Chart rendering for comparison results.
//!
//! The core pipeline never talks to a drawing library directly; it hands a
//! [`ComparisonResult`] to a [`ChartSink`]. The shipped sink renders one SVG
//! line chart per season with plotters; tests use [`RecordingSink`].

use crate::cli::types::Season;
use crate::error::{Result, ScoringError};
use crate::scoring::compare::ComparisonResult;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// One line on a season figure: the labeled averages for a single N.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub top_n: usize,
    pub points: Vec<(String, f64)>,
}

/// Receives one figure's worth of series per season.
pub trait ChartSink {
    fn render_season(&mut self, season: &Season, series: &[ChartSeries]) -> Result<()>;
}

/// Feed every season of a comparison into the sink. Empty buckets produce
/// no series, and a season whose buckets are all empty is skipped outright.
pub fn render_comparison(sink: &mut dyn ChartSink, result: &ComparisonResult) -> Result<()> {
    for (season, by_threshold) in &result.seasons {
        let series: Vec<ChartSeries> = by_threshold
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(&top_n, entries)| ChartSeries {
                top_n,
                points: entries
                    .iter()
                    .map(|e| (e.label.clone(), e.average))
                    .collect(),
            })
            .collect();

        if series.is_empty() {
            continue;
        }
        sink.render_season(season, &series)?;
    }
    Ok(())
}

/// Renders one SVG file per season into an output directory.
pub struct SvgChartSink {
    output_dir: PathBuf,
}

impl SvgChartSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn figure_path(&self, season: &Season) -> PathBuf {
        self.output_dir.join(format!("season_{season}.svg"))
    }
}

fn chart_err(e: impl std::fmt::Display) -> ScoringError {
    ScoringError::Chart {
        message: e.to_string(),
    }
}

impl ChartSink for SvgChartSink {
    fn render_season(&mut self, season: &Season, series: &[ChartSeries]) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.figure_path(season);
        draw_season_chart(&path, season, series)?;
        info!(season = %season, path = %path.display(), "chart written");
        Ok(())
    }
}

fn draw_season_chart(path: &Path, season: &Season, series: &[ChartSeries]) -> Result<()> {
    // X positions come from the widest series; every series indexes into
    // the same label axis.
    let labels: Vec<String> = series
        .iter()
        .max_by_key(|s| s.points.len())
        .map(|s| s.points.iter().map(|(label, _)| label.clone()).collect())
        .unwrap_or_default();
    if labels.is_empty() {
        return Ok(());
    }

    let max_y = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(_, avg)| *avg))
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
        * 1.1;

    let root = SVGBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Average fantasy points by position, season {season}"),
            ("sans-serif", 24),
        )
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(0i32..(labels.len() as i32 - 1).max(1), 0f64..max_y)
        .map_err(chart_err)?;

    let axis_labels = labels.clone();
    chart
        .configure_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&move |idx| {
            axis_labels
                .get(*idx as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_desc("Average Points")
        .x_desc("Position")
        .draw()
        .map_err(chart_err)?;

    for (i, s) in series.iter().enumerate() {
        let color = Palette99::pick(i).mix(0.9);
        let data: Vec<(i32, f64)> = s
            .points
            .iter()
            .enumerate()
            .map(|(x, (_, avg))| (x as i32, *avg))
            .collect();
        chart
            .draw_series(LineSeries::new(data, color.stroke_width(2)))
            .map_err(chart_err)?
            .label(format!("{season} - Top {}", s.top_n))
            .legend(move |(x, y)| {
                plotters::element::PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

/// A sink that records what it was asked to draw. Used in tests and
/// anywhere charts should be suppressed.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub rendered: Vec<(Season, Vec<ChartSeries>)>,
}

impl ChartSink for RecordingSink {
    fn render_season(&mut self, season: &Season, series: &[ChartSeries]) -> Result<()> {
        self.rendered.push((season.clone(), series.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::compare::LabeledAverage;
    use std::collections::BTreeMap;

    fn result_with(
        season: &str,
        buckets: Vec<(usize, Vec<(&str, f64)>)>,
    ) -> ComparisonResult {
        let mut by_threshold = BTreeMap::new();
        for (top_n, entries) in buckets {
            by_threshold.insert(
                top_n,
                entries
                    .into_iter()
                    .map(|(label, average)| LabeledAverage {
                        label: label.to_string(),
                        average,
                    })
                    .collect(),
            );
        }
        let mut seasons = BTreeMap::new();
        seasons.insert(Season::new(season), by_threshold);
        ComparisonResult { seasons }
    }

    #[test]
    fn one_series_per_threshold() {
        let result = result_with(
            "2021",
            vec![
                (10, vec![("QB", 20.0), ("RB", 15.0)]),
                (20, vec![("QB", 17.0), ("RB", 13.0)]),
            ],
        );

        let mut sink = RecordingSink::default();
        render_comparison(&mut sink, &result).unwrap();

        assert_eq!(sink.rendered.len(), 1);
        let (season, series) = &sink.rendered[0];
        assert_eq!(season, &Season::new("2021"));
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].top_n, 10);
        assert_eq!(series[0].points[0], ("QB".to_string(), 20.0));
    }

    #[test]
    fn empty_buckets_produce_no_series() {
        let result = result_with("1999", vec![(10, vec![]), (20, vec![])]);

        let mut sink = RecordingSink::default();
        render_comparison(&mut sink, &result).unwrap();
        assert!(sink.rendered.is_empty());
    }

    #[test]
    fn svg_sink_writes_one_file_per_season() {
        let dir = tempfile::tempdir().unwrap();
        let result = result_with("2021", vec![(10, vec![("QB", 20.0), ("RB", 15.0), ("WR", 12.0)])]);

        let mut sink = SvgChartSink::new(dir.path());
        render_comparison(&mut sink, &result).unwrap();

        let path = dir.path().join("season_2021.svg");
        assert!(path.exists());
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("<svg"));
    }
}

//! Multi-season, multi-threshold scoring profile comparison.

use crate::chart::{render_comparison, ChartSink, SvgChartSink};
use crate::cli::types::Season;
use crate::error::Result;
use crate::report::write_comparison_report;
use crate::scoring::compare::{run_comparison, ProfileSet};
use std::io::Write;
use std::path::PathBuf;

/// Parameters for the compare command.
#[derive(Debug)]
pub struct CompareParams {
    pub input: PathBuf,
    pub seasons: Vec<Season>,
    pub thresholds: Vec<usize>,
    pub as_json: bool,
    /// Directory to write one SVG per season into; `None` skips charts.
    pub chart_dir: Option<PathBuf>,
}

/// Run the QB nerf study across the requested seasons and thresholds,
/// report the nested result, and optionally render charts.
pub fn handle_compare(out: &mut impl Write, params: &CompareParams) -> Result<()> {
    let profiles = ProfileSet::qb_nerf_study();
    let result = run_comparison(&params.input, &params.seasons, &params.thresholds, &profiles)?;

    if params.as_json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        write_comparison_report(out, &result)?;
    }

    if let Some(dir) = &params.chart_dir {
        let mut sink = SvgChartSink::new(dir.as_path());
        render_comparison(&mut sink, &result)?;
    }
    Ok(())
}

/// Same as [`handle_compare`] but with a caller-supplied sink, so the
/// comparison can run without a drawing backend.
pub fn handle_compare_with_sink(
    out: &mut impl Write,
    params: &CompareParams,
    sink: &mut dyn ChartSink,
) -> Result<()> {
    let profiles = ProfileSet::qb_nerf_study();
    let result = run_comparison(&params.input, &params.seasons, &params.thresholds, &profiles)?;

    if params.as_json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        write_comparison_report(out, &result)?;
    }
    render_comparison(sink, &result)
}

//! Multi-baseline command handler.
//!
//! Implements the `diff-multi` subcommand: one snapshot compared against
//! several historical baselines.

use crate::diff::{compare_against_baselines, BaselineComparison};
use crate::error::ErrorContext;
use crate::persist;
use crate::pipeline::{write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Run the diff-multi command (1:N comparison)
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff_multi(
    new_path: PathBuf,
    baseline_paths: Vec<PathBuf>,
    output: ReportFormat,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    if baseline_paths.is_empty() {
        bail!("At least one baseline snapshot is required");
    }

    let current = persist::load(&new_path).context("loading new snapshot")?;
    let baselines = baseline_paths
        .iter()
        .map(|path| persist::load(path).with_context(|| format!("loading baseline {}", path.display())))
        .collect::<crate::error::Result<Vec<_>>>()?;

    let comparisons = compare_against_baselines(&baselines, &current);

    let content = match output {
        ReportFormat::Json => render_json(&baseline_paths, &comparisons)?,
        ReportFormat::Text | ReportFormat::Summary => render_table(&baseline_paths, &comparisons),
    };
    write_output(&content, &OutputTarget::from_option(output_file), quiet)
}

#[derive(Serialize)]
struct MultiEntry<'a> {
    baseline: String,
    #[serde(flatten)]
    comparison: &'a BaselineComparison,
}

fn render_json(paths: &[PathBuf], comparisons: &[BaselineComparison]) -> Result<String> {
    let entries: Vec<MultiEntry<'_>> = paths
        .iter()
        .zip(comparisons)
        .map(|(path, comparison)| MultiEntry {
            baseline: path.display().to_string(),
            comparison,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

fn render_table(paths: &[PathBuf], comparisons: &[BaselineComparison]) -> String {
    let mut out = String::new();
    for (path, comparison) in paths.iter().zip(comparisons) {
        let summary = comparison.tree.summary();
        let _ = writeln!(
            out,
            "{} ({}): {} -> {} [{} changes, {} breaking]",
            path.display(),
            comparison.baseline_version,
            comparison.verdict.compatibility,
            comparison.verdict.new_version,
            summary.total(),
            summary.breaking
        );
    }
    out
}

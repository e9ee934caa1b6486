//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two snapshot files.

use super::check::determine_exit_code;
use crate::config::DiffConfig;
use crate::pipeline::{compare_snapshots, output_report};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let diff = compare_snapshots(&config.paths.old, &config.paths.new, quiet)?;

    output_report(
        &config.output,
        quiet,
        &diff.tree,
        &diff.verdict,
        Some(&config.paths.old),
        &config.paths.new,
    )?;

    Ok(determine_exit_code(&config.behavior, &diff.verdict))
}

//! The build step: compare the collector's snapshot against the published
//! baseline, derive the next version and write the release outputs.

use super::baseline::{resolve_baseline, Baseline};
use super::output::{version_file_contents, write_build_outputs, BuildOutputs};
use crate::config::CheckConfig;
use crate::diff::{compare, DiffNode, Verdict};
use crate::error::{ApiCompatError, ErrorContext, Result};
use crate::model::Snapshot;
use crate::persist;
use crate::reports::status_message;

/// Everything a check run produced.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub tree: DiffNode,
    pub verdict: Verdict,
    /// Rendered change message, empty when nothing changed
    pub message: String,
    /// The new snapshot stamped with the new version
    pub snapshot: Snapshot,
    pub outputs: BuildOutputs,
}

/// Run the build step described by `config`.
pub fn run_check(config: &CheckConfig) -> Result<CheckOutcome> {
    let quiet = config.behavior.quiet;

    let new = persist::load(&config.paths.new).context("loading new snapshot")?;
    if config.behavior.validate_snapshot {
        validate_snapshot(&new)?;
    }

    let baseline = resolve_baseline(config.reference_version.as_deref(), config.paths.baseline.as_deref())?;
    let (tree, verdict) = match baseline {
        Baseline::Reference(version) => {
            if !quiet {
                tracing::info!("Version override specified, skipping API checks");
            }
            (compare(None, Some(&new)), Verdict::overridden(version))
        }
        Baseline::Snapshot(old) => {
            let tree = compare(Some(&old), Some(&new));
            let verdict = Verdict::try_derive(&tree, old.version)?;
            (tree, verdict)
        }
    };
    let message = status_message(&tree, &verdict);

    let snapshot = new.with_version(verdict.new_version);
    let version_text = version_file_contents(&verdict, config.behavior.publish_marker.as_deref());
    let outputs = write_build_outputs(&config.output.dir, &snapshot, &version_text, &message)?;

    if !quiet {
        tracing::info!(
            "API check complete: {} ({} -> {})",
            verdict.compatibility,
            verdict.old_version.map_or_else(|| "override".to_string(), |v| v.to_string()),
            verdict.new_version
        );
    }

    Ok(CheckOutcome {
        tree,
        verdict,
        message,
        snapshot,
        outputs,
    })
}

fn validate_snapshot(snapshot: &Snapshot) -> Result<()> {
    let issues = snapshot.validate();
    if issues.is_empty() {
        return Ok(());
    }
    for issue in &issues {
        tracing::warn!("{issue}");
    }
    let listing: Vec<String> = issues.iter().map(ToString::to_string).collect();
    Err(ApiCompatError::validation(format!(
        "{} issue(s) in new snapshot: {}",
        issues.len(),
        listing.join("; ")
    )))
}

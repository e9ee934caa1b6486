//! Diff computation stage.
//!
//! Loads two persisted snapshots and compares them without touching any
//! build outputs.

use crate::diff::{compare, DiffNode, Verdict};
use crate::error::{ErrorContext, Result};
use crate::persist;
use std::path::Path;

/// Result of comparing two snapshot files.
#[derive(Debug, Clone)]
pub struct SnapshotDiff {
    pub tree: DiffNode,
    /// Verdict relative to the old snapshot's version
    pub verdict: Verdict,
    pub old_types: usize,
    pub new_types: usize,
}

/// Load and compare two snapshot files.
pub fn compare_snapshots(old_path: &Path, new_path: &Path, quiet: bool) -> Result<SnapshotDiff> {
    let old = persist::load(old_path).context("loading old snapshot")?;
    let new = persist::load(new_path).context("loading new snapshot")?;

    if !quiet {
        tracing::info!(
            "Comparing {} types from old snapshot against {} from new snapshot",
            old.type_count(),
            new.type_count()
        );
    }

    let tree = compare(Some(&old), Some(&new));
    let verdict = Verdict::try_derive(&tree, old.version)?;

    if !quiet {
        let summary = tree.summary();
        tracing::info!(
            "Diff complete: {} changes ({} breaking), compatibility {}",
            summary.total(),
            summary.breaking,
            verdict.compatibility
        );
    }

    Ok(SnapshotDiff {
        tree,
        verdict,
        old_types: old.type_count(),
        new_types: new.type_count(),
    })
}

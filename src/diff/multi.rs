//! Comparing one snapshot against several historical baselines.

use super::{compare, DiffNode, Verdict};
use crate::model::Snapshot;
use crate::version::ApiVersion;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Result of comparing the current snapshot against one baseline.
#[derive(Debug, Clone, Serialize)]
pub struct BaselineComparison {
    pub baseline_version: ApiVersion,
    pub verdict: Verdict,
    pub tree: DiffNode,
}

/// Compare `current` against every baseline in parallel.
///
/// Results are returned in the order of `baselines`; each comparison owns its
/// own tree.
#[must_use]
pub fn compare_against_baselines(baselines: &[Snapshot], current: &Snapshot) -> Vec<BaselineComparison> {
    let results: Vec<BaselineComparison> = baselines
        .par_iter()
        .map(|baseline| {
            let tree = compare(Some(baseline), Some(current));
            BaselineComparison {
                baseline_version: baseline.version,
                verdict: Verdict::derive(&tree, baseline.version),
                tree,
            }
        })
        .collect();

    info!(
        "Compared against {} baselines, {} with changes",
        results.len(),
        results.iter().filter(|r| r.verdict.is_changed()).count()
    );
    results
}

//! Baseline resolution stage.
//!
//! The baseline is what the new snapshot is measured against: either the
//! previously published snapshot or an explicit reference version that skips
//! the comparison altogether.

use crate::error::{ApiCompatError, ErrorContext, Result};
use crate::model::Snapshot;
use crate::persist;
use crate::version::ApiVersion;
use std::path::Path;

/// Where the next version comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Baseline {
    /// Explicit version, used verbatim
    Reference(ApiVersion),
    /// Previously published snapshot
    Snapshot(Snapshot),
}

/// Resolve the baseline for a check run.
///
/// An explicit reference version wins over the snapshot file. A snapshot file
/// that exists but cannot be decoded is an error, never an empty baseline.
pub fn resolve_baseline(reference_version: Option<&str>, snapshot_path: Option<&Path>) -> Result<Baseline> {
    if let Some(reference) = reference_version {
        let version = ApiVersion::parse(reference)?;
        tracing::debug!("Using reference version {version}");
        return Ok(Baseline::Reference(version));
    }

    let Some(path) = snapshot_path else {
        return Err(ApiCompatError::config(
            "no baseline: specify a reference version or a baseline snapshot",
        ));
    };

    let snapshot = persist::load_optional(path)
        .context("loading baseline snapshot")?
        .ok_or_else(|| {
            ApiCompatError::config(format!(
                "no baseline: snapshot {} does not exist and no reference version was given",
                path.display()
            ))
        })?;
    tracing::debug!("Using baseline snapshot {} from {}", snapshot.version, path.display());
    Ok(Baseline::Snapshot(snapshot))
}

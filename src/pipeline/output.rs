//! Output handling for the build step and console reports.

use crate::config::{DEFAULT_SNAPSHOT_FILE, MESSAGE_FILE, VERSION_FILE};
use crate::diff::Verdict;
use crate::error::{ApiCompatError, Result};
use crate::model::Snapshot;
use crate::persist;
use anyhow::Context;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> anyhow::Result<()> {
    match target {
        OutputTarget::Stdout => {
            if !content.is_empty() {
                println!("{}", content.trim_end());
            }
            Ok(())
        }
        OutputTarget::File(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
            Ok(())
        }
    }
}

/// Contents of version.txt: the publish marker when the surface changed and
/// one is configured, the new version otherwise.
#[must_use]
pub fn version_file_contents(verdict: &Verdict, publish_marker: Option<&str>) -> String {
    match publish_marker {
        Some(marker) if verdict.is_changed() => marker.to_string(),
        _ => verdict.new_version.to_string(),
    }
}

/// Files written by one build step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutputs {
    pub snapshot: PathBuf,
    pub version: PathBuf,
    pub message: PathBuf,
}

impl BuildOutputs {
    /// Output file locations inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            snapshot: dir.join(DEFAULT_SNAPSHOT_FILE),
            version: dir.join(VERSION_FILE),
            message: dir.join(MESSAGE_FILE),
        }
    }
}

/// Write the stamped snapshot, version.txt and message.txt into `dir`.
pub fn write_build_outputs(
    dir: &Path,
    snapshot: &Snapshot,
    version_text: &str,
    message: &str,
) -> Result<BuildOutputs> {
    fs::create_dir_all(dir).map_err(|e| ApiCompatError::io(dir, e))?;
    let outputs = BuildOutputs::in_dir(dir);

    persist::save(&outputs.snapshot, snapshot)?;
    fs::write(&outputs.version, version_text).map_err(|e| ApiCompatError::io(&outputs.version, e))?;
    fs::write(&outputs.message, message).map_err(|e| ApiCompatError::io(&outputs.message, e))?;

    tracing::debug!("Wrote build outputs to {}", dir.display());
    Ok(outputs)
}

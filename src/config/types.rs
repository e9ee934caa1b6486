//! Configuration types for api-compat operations.
//!
//! Provides structured configuration for the check and diff operations.

use super::defaults::{DEFAULT_OUTPUT_DIR, DEFAULT_SNAPSHOT_FILE};
use crate::error::{OptionContext, Result};
use crate::reports::ReportFormat;
use crate::version::Compatibility;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct that aggregates all configuration
/// options. It can be constructed from CLI arguments, config files, or both
/// (with CLI overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where the previous snapshot comes from
    pub baseline: BaselineConfig,
    /// Output configuration (directory, format, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Build the configuration of a `check` run for the snapshot at `new`.
    ///
    /// The baseline file comes from `baseline.snapshot_file` unless
    /// `baseline_override` names one explicitly.
    #[must_use]
    pub fn to_check_config(&self, new: PathBuf, baseline_override: Option<PathBuf>) -> CheckConfig {
        CheckConfig {
            paths: CheckPaths {
                new,
                baseline: Some(baseline_override.unwrap_or_else(|| self.baseline.snapshot_file.clone())),
            },
            reference_version: self.baseline.reference_version.clone(),
            output: self.output.clone(),
            behavior: self.behavior.clone(),
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the baseline snapshot file.
    pub fn snapshot_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.baseline.snapshot_file = path.into();
        self
    }

    /// Set an explicit reference version.
    pub fn reference_version(mut self, version: Option<String>) -> Self {
        self.config.baseline.reference_version = version;
        self
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output.dir = dir.into();
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Write the console report to a file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Restrict console output to ASCII.
    pub const fn ascii_only(mut self, ascii_only: bool) -> Self {
        self.config.output.ascii_only = ascii_only;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Fail when the aggregate compatibility reaches this level.
    pub const fn fail_on(mut self, level: Option<Compatibility>) -> Self {
        self.config.behavior.fail_on = level;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Run collector validation on the new snapshot.
    pub const fn validate_snapshot(mut self, validate: bool) -> Self {
        self.config.behavior.validate_snapshot = validate;
        self
    }

    /// Write this marker to version.txt when the surface changed.
    pub fn publish_marker(mut self, marker: Option<String>) -> Self {
        self.config.behavior.publish_marker = marker;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for check operations
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Snapshot files involved
    pub paths: CheckPaths,
    /// Explicit version replacing the baseline comparison
    pub reference_version: Option<String>,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Paths for check operation
#[derive(Debug, Clone)]
pub struct CheckPaths {
    /// Snapshot produced by the collector for this build
    pub new: PathBuf,
    /// Previously published snapshot
    pub baseline: Option<PathBuf>,
}

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Paths for diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to old/baseline snapshot
    pub old: PathBuf,
    /// Path to new snapshot
    pub new: PathBuf,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Baseline-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BaselineConfig {
    /// Previously published snapshot file
    pub snapshot_file: PathBuf,
    /// Explicit `major.minor.patch` version used instead of comparing (re-baseline)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_version: Option<String>,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            snapshot_file: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            reference_version: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the snapshot, version.txt and message.txt
    pub dir: PathBuf,
    /// Console report format
    pub format: ReportFormat,
    /// Write the console report to this file instead of stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Replace emoji markers with ASCII on the console
    pub ascii_only: bool,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: ReportFormat::Text,
            file: None,
            ascii_only: false,
            no_color: false,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when the aggregate compatibility is at least this level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<Compatibility>,
    /// Suppress non-essential output
    pub quiet: bool,
    /// Reject new snapshots that fail collector validation
    pub validate_snapshot: bool,
    /// Written to version.txt instead of the version when the surface changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_marker: Option<String>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            fail_on: None,
            quiet: false,
            validate_snapshot: true,
            publish_marker: None,
        }
    }
}

impl BehaviorConfig {
    /// True when `level` should make the run fail.
    #[must_use]
    pub fn fails_on(&self, level: Compatibility) -> bool {
        self.fail_on.is_some_and(|threshold| level >= threshold)
    }
}

// ============================================================================
// Builder for CheckConfig
// ============================================================================

/// Builder for [`CheckConfig`].
#[derive(Debug, Default)]
pub struct CheckConfigBuilder {
    new: Option<PathBuf>,
    baseline: Option<PathBuf>,
    reference_version: Option<String>,
    output: OutputConfig,
    behavior: BehaviorConfig,
}

impl CheckConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new_snapshot(mut self, path: PathBuf) -> Self {
        self.new = Some(path);
        self
    }

    #[must_use]
    pub fn baseline(mut self, path: Option<PathBuf>) -> Self {
        self.baseline = path;
        self
    }

    #[must_use]
    pub fn reference_version(mut self, version: Option<String>) -> Self {
        self.reference_version = version;
        self
    }

    #[must_use]
    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.output.dir = dir;
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub const fn ascii_only(mut self, ascii_only: bool) -> Self {
        self.output.ascii_only = ascii_only;
        self
    }

    #[must_use]
    pub const fn fail_on(mut self, level: Option<Compatibility>) -> Self {
        self.behavior.fail_on = level;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn validate_snapshot(mut self, validate: bool) -> Self {
        self.behavior.validate_snapshot = validate;
        self
    }

    #[must_use]
    pub fn publish_marker(mut self, marker: Option<String>) -> Self {
        self.behavior.publish_marker = marker;
        self
    }

    pub fn build(self) -> Result<CheckConfig> {
        let new = self.new.context_none("new snapshot path is required")?;
        Ok(CheckConfig {
            paths: CheckPaths {
                new,
                baseline: self.baseline,
            },
            reference_version: self.reference_version,
            output: self.output,
            behavior: self.behavior,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.baseline.snapshot_file, PathBuf::from("api-snapshot.json"));
        assert_eq!(config.output.dir, PathBuf::from("build/api"));
        assert_eq!(config.output.format, ReportFormat::Text);
        assert!(config.behavior.validate_snapshot);
        assert!(config.behavior.fail_on.is_none());
    }

    #[test]
    fn test_fails_on_threshold() {
        let behavior = BehaviorConfig {
            fail_on: Some(Compatibility::Minor),
            ..Default::default()
        };
        assert!(!behavior.fails_on(Compatibility::Patch));
        assert!(behavior.fails_on(Compatibility::Minor));
        assert!(behavior.fails_on(Compatibility::Major));
        assert!(!BehaviorConfig::default().fails_on(Compatibility::Major));
    }

    #[test]
    fn test_check_config_builder_requires_new() {
        assert!(CheckConfigBuilder::new().build().is_err());
        let config = CheckConfigBuilder::new()
            .new_snapshot(PathBuf::from("new.json"))
            .reference_version(Some("2.0.0".into()))
            .build()
            .unwrap();
        assert_eq!(config.paths.new, PathBuf::from("new.json"));
        assert!(config.paths.baseline.is_none());
    }

    #[test]
    fn test_to_check_config_uses_configured_baseline() {
        let config = AppConfig::builder().snapshot_file("prev/api.json").build();
        let check = config.to_check_config(PathBuf::from("new.json"), None);
        assert_eq!(check.paths.baseline, Some(PathBuf::from("prev/api.json")));

        let check = config.to_check_config(PathBuf::from("new.json"), Some(PathBuf::from("x.json")));
        assert_eq!(check.paths.baseline, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = AppConfig::builder()
            .fail_on(Some(Compatibility::Major))
            .publish_marker(Some("SNAPSHOT".into()))
            .build();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("fail_on: MAJOR"), "{yaml}");
        let back: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}

//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::{DEFAULT_OUTPUT_DIR, DEFAULT_SNAPSHOT_FILE};
use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".api-compat.yaml",
    ".api-compat.yml",
    "api-compat.yaml",
    "api-compat.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/api-compat/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|p| p.exists()) {
        return Some(path.to_path_buf());
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = find_git_root().as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("api-compat")) {
            return Some(path);
        }
    }

    dirs::home_dir().as_deref().and_then(find_config_in_dir)
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from their defaults override. This is used to
    /// layer CLI args over file config.
    pub fn merge(&mut self, other: &Self) {
        // Baseline config
        if other.baseline.snapshot_file != Path::new(DEFAULT_SNAPSHOT_FILE) {
            self.baseline.snapshot_file.clone_from(&other.baseline.snapshot_file);
        }
        if other.baseline.reference_version.is_some() {
            self.baseline.reference_version.clone_from(&other.baseline.reference_version);
        }

        // Output config
        if other.output.dir != Path::new(DEFAULT_OUTPUT_DIR) {
            self.output.dir.clone_from(&other.output.dir);
        }
        if other.output.format != ReportFormat::Text {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.ascii_only {
            self.output.ascii_only = true;
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Behavior config
        if other.behavior.fail_on.is_some() {
            self.behavior.fail_on = other.behavior.fail_on;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if !other.behavior.validate_snapshot {
            self.behavior.validate_snapshot = false;
        }
        if other.behavior.publish_marker.is_some() {
            self.behavior.publish_marker.clone_from(&other.behavior.publish_marker);
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# API Compatibility Configuration
# Place this file at .api-compat.yaml in your project root or ~/.config/api-compat/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# API Compatibility Configuration File
# =====================================
#
# This file configures api-compat behavior. Place it at:
#   - .api-compat.yaml in your project root
#   - ~/.config/api-compat/api-compat.yaml for global config
#
# CLI arguments always override file settings.

# Baseline selection
baseline:
  # Previously published snapshot to compare against
  snapshot_file: api-snapshot.json
  # Skip the comparison and use this version (re-baseline)
  # reference_version: 2.0.0

# Output configuration
output:
  # Directory receiving api-snapshot.json, version.txt and message.txt
  dir: build/api
  # Console format: text, summary, json
  format: text
  # Write the console report to a file instead of stdout
  # file: api-report.json
  # Replace emoji with ASCII on the console
  ascii_only: false
  # Disable colored output
  no_color: false

# Behavior flags
behavior:
  # Exit with code 1 when changes reach this level: SAME, PATCH, MINOR, MAJOR
  # fail_on: MAJOR
  # Suppress non-essential output
  quiet: false
  # Reject collector output that fails snapshot validation
  validate_snapshot: true
  # Write this to version.txt instead of the version when the API changed
  # publish_marker: SNAPSHOT
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

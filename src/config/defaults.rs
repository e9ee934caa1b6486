//! Default values and named presets for configuration.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::version::Compatibility;

// ============================================================================
// Default Value Constants
// ============================================================================

/// File name of the published snapshot, both as baseline and as output.
pub const DEFAULT_SNAPSHOT_FILE: &str = "api-snapshot.json";

/// Directory receiving the build step outputs.
pub const DEFAULT_OUTPUT_DIR: &str = "build/api";

/// Output file holding the new version or the publish marker.
pub const VERSION_FILE: &str = "version.txt";

/// Output file holding the change message.
pub const MESSAGE_FILE: &str = "message.txt";

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Report only, never fail
    Default,
    /// Build servers: ASCII console output without color, fail on MAJOR changes
    Ci,
    /// Fail on any surface change
    Strict,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
            Self::Strict => "strict",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci" => Some(Self::Ci),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Report API changes without failing the build",
            Self::Ci => "ASCII output without color; fail when changes are MAJOR",
            Self::Strict => "Fail on any change to the API surface",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci, Self::Strict]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self::ci_preset(),
            ConfigPreset::Strict => Self::strict_preset(),
        }
    }

    fn ci_preset() -> Self {
        Self {
            output: OutputConfig {
                ascii_only: true,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on: Some(Compatibility::Major),
                ..BehaviorConfig::default()
            },
            ..Self::default()
        }
    }

    fn strict_preset() -> Self {
        Self {
            behavior: BehaviorConfig {
                fail_on: Some(Compatibility::Patch),
                validate_snapshot: true,
                ..BehaviorConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        for preset in ConfigPreset::all() {
            let name = preset.name();
            let parsed = ConfigPreset::from_name(name);
            assert_eq!(parsed, Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::Ci));
        assert_eq!(ConfigPreset::from_name("lenient"), None);
    }

    #[test]
    fn test_ci_preset() {
        let config = AppConfig::from_preset(ConfigPreset::Ci);
        assert!(config.output.ascii_only);
        assert!(config.output.no_color);
        assert_eq!(config.behavior.fail_on, Some(Compatibility::Major));
    }

    #[test]
    fn test_strict_preset_fails_on_patch() {
        let config = AppConfig::from_preset(ConfigPreset::Strict);
        assert!(config.behavior.fails_on(Compatibility::Patch));
        assert!(!config.behavior.fails_on(Compatibility::Same));
    }

    #[test]
    fn test_default_preset_is_default() {
        assert_eq!(AppConfig::from_preset(ConfigPreset::Default), AppConfig::default());
    }
}

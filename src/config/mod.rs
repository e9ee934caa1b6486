//! Configuration module for api-compat.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use api_compat::config::{AppConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Ci);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .snapshot_file("published/api-snapshot.json")
//!     .fail_on(Some(Compatibility::Major))
//!     .build();
//!
//! // Load from file
//! use api_compat::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.api-compat.yaml` file in your project root or `~/.config/api-compat/`:
//!
//! ```yaml
//! baseline:
//!   snapshot_file: published/api-snapshot.json
//! behavior:
//!   fail_on: MAJOR
//!   publish_marker: SNAPSHOT
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{ConfigPreset, DEFAULT_OUTPUT_DIR, DEFAULT_SNAPSHOT_FILE, MESSAGE_FILE, VERSION_FILE};
pub use types::{
    AppConfig, AppConfigBuilder, BaselineConfig, BehaviorConfig, CheckConfig, CheckConfigBuilder,
    CheckPaths, DiffConfig, DiffPaths, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.api-compat.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let properties = &value["properties"];
        for section in ["baseline", "output", "behavior"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}

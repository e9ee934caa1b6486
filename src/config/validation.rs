//! Configuration validation for api-compat.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BaselineConfig, BehaviorConfig, CheckConfig, OutputConfig};
use crate::version::ApiVersion;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.baseline.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for BaselineConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.snapshot_file.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "baseline.snapshot_file".to_string(),
                message: "Snapshot file name must not be empty".to_string(),
            });
        }
        if let Some(error) = check_reference_version("baseline.reference_version", self.reference_version.as_deref()) {
            errors.push(error);
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.dir.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "output.dir".to_string(),
                message: "Output directory must not be empty".to_string(),
            });
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref marker) = self.publish_marker {
            if marker.trim().is_empty() {
                errors.push(ConfigError {
                    field: "behavior.publish_marker".to_string(),
                    message: "Publish marker must not be empty".to_string(),
                });
            } else if marker.contains(['\n', '\r']) {
                errors.push(ConfigError {
                    field: "behavior.publish_marker".to_string(),
                    message: "Publish marker must be a single line".to_string(),
                });
            }
        }
        errors
    }
}

impl Validatable for CheckConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.paths.new.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "paths.new".to_string(),
                message: "New snapshot path must not be empty".to_string(),
            });
        }
        if let Some(error) = check_reference_version("reference_version", self.reference_version.as_deref()) {
            errors.push(error);
        }
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

fn check_reference_version(field: &str, value: Option<&str>) -> Option<ConfigError> {
    let value = value?;
    ApiVersion::parse(value).err().map(|e| ConfigError {
        field: field.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.is_valid());
    }

    #[test]
    fn test_invalid_reference_version() {
        let mut config = AppConfig::default();
        config.baseline.reference_version = Some("1.x".to_string());
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "baseline.reference_version");
    }

    #[test]
    fn test_valid_reference_version() {
        let mut config = AppConfig::default();
        config.baseline.reference_version = Some("2.0.0".to_string());
        assert!(config.is_valid());
    }

    #[test]
    fn test_empty_publish_marker() {
        let mut config = AppConfig::default();
        config.behavior.publish_marker = Some("  ".to_string());
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "behavior.publish_marker"));

        config.behavior.publish_marker = Some("SNAP\nSHOT".to_string());
        assert!(!config.is_valid());

        config.behavior.publish_marker = Some("SNAPSHOT".to_string());
        assert!(config.is_valid());
    }

    #[test]
    fn test_empty_snapshot_file() {
        let mut config = AppConfig::default();
        config.baseline.snapshot_file = PathBuf::new();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "baseline.snapshot_file: Snapshot file name must not be empty");
    }

    #[test]
    fn test_check_config_validation() {
        let config = AppConfig::default().to_check_config(PathBuf::new(), None);
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "paths.new"));
    }
}

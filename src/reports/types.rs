//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Change tree followed by the compatibility status, as written to message.txt
    #[default]
    Text,
    /// Compact counts and verdict for terminals (colored)
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Replace the attention marker with `!!!` and drop other non-ASCII output
    pub ascii_only: bool,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ascii_only: false,
            metadata: ReportMetadata::new(),
        }
    }

    #[must_use]
    pub const fn ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }

    #[must_use]
    pub fn with_paths(mut self, old: Option<String>, new: Option<String>) -> Self {
        self.metadata.old_snapshot_path = old;
        self.metadata.new_snapshot_path = new;
        self
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Baseline snapshot file path
    pub old_snapshot_path: Option<String>,
    /// Current snapshot file path
    pub new_snapshot_path: Option<String>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}

//! JSON report generator.

use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::diff::{ChangeSummary, DiffNode, Verdict};
use crate::error::{ApiCompatError, ReportErrorKind, Result};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_report(&self, tree: &DiffNode, verdict: &Verdict, config: &ReportConfig) -> Result<String> {
        let report = JsonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "api-compat".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
                old_snapshot: config.metadata.old_snapshot_path.clone(),
                new_snapshot: config.metadata.new_snapshot_path.clone(),
            },
            verdict: *verdict,
            summary: tree.summary(),
            changes: tree.pruned(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| {
            ApiCompatError::report(
                "serializing JSON report",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures for serialization

#[derive(Serialize)]
struct JsonReport {
    metadata: JsonReportMetadata,
    verdict: Verdict,
    summary: ChangeSummary,
    changes: DiffNode,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_snapshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_snapshot: Option<String>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::EntityKind;
    use crate::version::{ApiVersion, Compatibility};

    #[test]
    fn test_json_report_structure() {
        let tree = DiffNode::root(vec![
            DiffNode::matched(EntityKind::Type, "a.Same".into()),
            DiffNode::added(EntityKind::Type, "a.New".into(), Compatibility::Minor),
        ]);
        let verdict = Verdict::derive(&tree, ApiVersion::new(0, 3, 1));
        let config = ReportConfig::new().with_paths(Some("old.json".into()), None);
        let out = JsonReporter::new().generate_report(&tree, &verdict, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["metadata"]["tool"]["name"], "api-compat");
        assert_eq!(value["metadata"]["old_snapshot"], "old.json");
        assert!(value["metadata"].get("new_snapshot").is_none());
        assert_eq!(value["verdict"]["compatibility"], "MINOR");
        assert_eq!(value["verdict"]["new_version"]["minor"], 4);
        assert_eq!(value["summary"]["added"], 1);
        let changes = value["changes"]["children"].as_array().unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0]["name"], "a.New");
        assert_eq!(changes[0]["diff"], "added");
    }

    #[test]
    fn test_compact_output() {
        let tree = DiffNode::root(Vec::new());
        let verdict = Verdict::derive(&tree, ApiVersion::new(1, 0, 0));
        let out = JsonReporter::new()
            .pretty(false)
            .generate_report(&tree, &verdict, &ReportConfig::new())
            .unwrap();
        assert!(!out.contains('\n'));
    }
}

//! Report output stage.
//!
//! Renders a diff tree and its verdict in the configured console format and
//! writes it to stdout or a file.

use super::{should_use_color, write_output, OutputTarget};
use crate::config::OutputConfig;
use crate::diff::{DiffNode, Verdict};
use crate::reports::{create_reporter_with_options, ReportConfig};
use anyhow::Result;
use std::path::Path;

/// Output a report to the configured destination.
pub fn output_report(
    output: &OutputConfig,
    quiet: bool,
    tree: &DiffNode,
    verdict: &Verdict,
    old_path: Option<&Path>,
    new_path: &Path,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let use_color = should_use_color(output.no_color) && target.is_terminal();

    let report_config = ReportConfig::new()
        .ascii_only(output.ascii_only)
        .with_paths(
            old_path.map(|p| p.to_string_lossy().into_owned()),
            Some(new_path.to_string_lossy().into_owned()),
        );

    let reporter = create_reporter_with_options(output.format, use_color);
    let report = reporter.generate_report(tree, verdict, &report_config)?;

    write_output(&report, &target, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use crate::version::ApiVersion;

    #[test]
    fn test_json_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("report.json");
        let output = OutputConfig {
            format: ReportFormat::Json,
            file: Some(file.clone()),
            ..OutputConfig::default()
        };
        let tree = DiffNode::root(Vec::new());
        let verdict = Verdict::derive(&tree, ApiVersion::new(1, 0, 0));

        output_report(&output, true, &tree, &verdict, Some(Path::new("old.json")), Path::new("new.json")).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(value["metadata"]["old_snapshot"], "old.json");
        assert_eq!(value["verdict"]["compatibility"], "SAME");
    }
}

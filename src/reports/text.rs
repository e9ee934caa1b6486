//! Plain-text change tree and the status message built around it.

use super::ascii::to_console_ascii;
use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::diff::{DiffNode, Verdict};
use crate::error::Result;
use crate::version::{ApiVersion, Compatibility};

/// Marker appended to nodes whose own change is MAJOR.
pub const ATTENTION_MARKER: &str = "\u{2757}";

/// Render every changed node of the tree, one line each, depth first.
///
/// Subtrees whose aggregate is SAME are skipped entirely. The root is never
/// rendered itself; its children start at depth zero. Lines look like
/// `<2 spaces per level><marker> <name>[ - <notes>][ ❗]`.
#[must_use]
pub fn render_tree(tree: &DiffNode) -> String {
    let mut out = String::new();
    for child in &tree.children {
        render_node(child, 0, &mut out);
    }
    out
}

fn render_node(node: &DiffNode, depth: usize, out: &mut String) {
    if node.is_unchanged() {
        return;
    }
    out.push_str(&"  ".repeat(depth));
    out.push(node.diff.marker());
    out.push(' ');
    out.push_str(node.name.as_deref().unwrap_or_default());
    if let Some(note) = node.note() {
        out.push_str(" - ");
        out.push_str(&note);
    }
    if node.is_flagged() {
        out.push(' ');
        out.push_str(ATTENTION_MARKER);
    }
    out.push('\n');
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}

const fn status_emoji(level: Compatibility) -> &'static str {
    match level {
        Compatibility::Major => "\u{1F92F}",
        Compatibility::Minor => "\u{1F527}",
        Compatibility::Patch => "\u{1F485}",
        Compatibility::Same => "",
    }
}

/// Notice used when the version is taken from an explicit reference.
#[must_use]
pub fn override_message(version: ApiVersion) -> String {
    format!("{ATTENTION_MARKER} Skipping API checks, version override specified: {version}\n")
}

/// The full change message: tree, attention warning, status and increment.
///
/// Empty when the surface did not change. With an overridden version the
/// override notice replaces everything else.
#[must_use]
pub fn status_message(tree: &DiffNode, verdict: &Verdict) -> String {
    let Some(old_version) = verdict.old_version else {
        return override_message(verdict.new_version);
    };
    if !verdict.is_changed() {
        return String::new();
    }

    let mut out = render_tree(tree);
    if verdict.compatibility == Compatibility::Major {
        out.push_str(&format!(
            "{ATTENTION_MARKER} There are major changes which require extra attention, \
             they are marked with \"{ATTENTION_MARKER}\".\n"
        ));
    }
    out.push_str(&format!(
        "Compatibility status of API changes: {} {}\n",
        verdict.compatibility,
        status_emoji(verdict.compatibility)
    ));
    out.push_str(&format!(
        "Version increment: {old_version} -> {}\n",
        verdict.new_version
    ));
    out
}

/// Reporter emitting [`status_message`]
#[derive(Debug, Default)]
pub struct TextReporter;

impl TextReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TextReporter {
    fn generate_report(&self, tree: &DiffNode, verdict: &Verdict, config: &ReportConfig) -> Result<String> {
        let message = status_message(tree, verdict);
        Ok(if config.ascii_only {
            to_console_ascii(&message)
        } else {
            message
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::EntityKind;

    fn tree() -> DiffNode {
        let mut field = DiffNode::matched(EntityKind::Field, "int MAX_SIZE".into());
        field.mark(Compatibility::Major, ["changed value"]);
        DiffNode::root(vec![
            DiffNode::matched(EntityKind::Type, "a.Quiet".into())
                .with_children(vec![DiffNode::matched(EntityKind::Method, "f()".into())]),
            DiffNode::matched(EntityKind::Type, "a.Widget".into()).with_children(vec![
                field,
                DiffNode::added(EntityKind::Method, "resize(int,int)".into(), Compatibility::Minor),
            ]),
        ])
    }

    #[test]
    fn test_render_tree_prunes_and_indents() {
        assert_eq!(
            render_tree(&tree()),
            "  a.Widget\n  * int MAX_SIZE - changed value \u{2757}\n  + resize(int,int)\n"
        );
    }

    #[test]
    fn test_status_message_major() {
        let tree = tree();
        let verdict = Verdict::derive(&tree, ApiVersion::new(1, 2, 3));
        let message = status_message(&tree, &verdict);
        let lines: Vec<_> = message.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[3].starts_with("\u{2757} There are major changes"));
        assert_eq!(lines[4], "Compatibility status of API changes: MAJOR \u{1F92F}");
        assert_eq!(lines[5], "Version increment: 1.2.3 -> 2.0.0");
    }

    #[test]
    fn test_status_message_empty_when_same() {
        let tree = DiffNode::root(Vec::new());
        let verdict = Verdict::derive(&tree, ApiVersion::new(1, 0, 0));
        assert_eq!(status_message(&tree, &verdict), "");
    }

    #[test]
    fn test_ascii_text_report() {
        let tree = tree();
        let verdict = Verdict::derive(&tree, ApiVersion::new(1, 2, 3));
        let out = TextReporter::new()
            .generate_report(&tree, &verdict, &ReportConfig::new().ascii_only(true))
            .unwrap();
        assert!(out.is_ascii());
        assert!(out.contains("changed value !!!"));
        assert!(out.ends_with("Version increment: 1.2.3 -> 2.0.0"));
    }
}

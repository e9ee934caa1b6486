//! The compatibility-annotated diff tree.

use crate::version::Compatibility;
use serde::{Deserialize, Serialize};

/// How an entity differs between the two snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Present on both sides and not itself changed
    #[default]
    None,
    Modified,
    Added,
    Removed,
}

impl DiffKind {
    /// One-character marker used in rendered reports.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::None => ' ',
            Self::Modified => '*',
            Self::Added => '+',
            Self::Removed => '-',
        }
    }
}

/// What kind of surface entity a node describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// The snapshot root
    Module,
    Type,
    Field,
    Method,
}

/// One node of the comparison output.
///
/// `compatibility` is the node's own verdict. The verdict reported for the
/// node is [`DiffNode::aggregate`], the maximum over the whole subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffNode {
    /// Display name; `None` only for the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub entity: EntityKind,
    pub diff: DiffKind,
    pub compatibility: Compatibility,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DiffNode>,
}

impl DiffNode {
    /// Root node for a comparison where one side is missing.
    #[must_use]
    pub fn rebaseline() -> Self {
        Self {
            name: None,
            entity: EntityKind::Module,
            diff: DiffKind::Modified,
            compatibility: Compatibility::Major,
            notes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Root node over the top-level type comparisons.
    #[must_use]
    pub fn root(children: Vec<DiffNode>) -> Self {
        Self {
            name: None,
            entity: EntityKind::Module,
            diff: DiffKind::None,
            compatibility: Compatibility::Same,
            notes: Vec::new(),
            children,
        }
    }

    /// Node for an entity present only in the new snapshot.
    #[must_use]
    pub fn added(entity: EntityKind, name: String, compatibility: Compatibility) -> Self {
        Self::leaf(entity, name, DiffKind::Added, compatibility)
    }

    /// Node for an entity present only in the old snapshot.
    #[must_use]
    pub fn removed(entity: EntityKind, name: String) -> Self {
        Self::leaf(entity, name, DiffKind::Removed, Compatibility::Major)
    }

    /// Node for an entity present on both sides, unchanged until rules fire.
    #[must_use]
    pub fn matched(entity: EntityKind, name: String) -> Self {
        Self::leaf(entity, name, DiffKind::None, Compatibility::Same)
    }

    fn leaf(entity: EntityKind, name: String, diff: DiffKind, compatibility: Compatibility) -> Self {
        Self {
            name: Some(name),
            entity,
            diff,
            compatibility,
            notes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<DiffNode>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Record fired rules: the node becomes modified at `level`.
    pub fn mark<I, S>(&mut self, level: Compatibility, notes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.diff == DiffKind::None {
            self.diff = DiffKind::Modified;
        }
        self.compatibility = self.compatibility.max(level);
        self.notes.extend(notes.into_iter().map(Into::into));
    }

    /// Maximum compatibility over this node and all descendants.
    #[must_use]
    pub fn aggregate(&self) -> Compatibility {
        Compatibility::fold(
            std::iter::once(self.compatibility).chain(self.children.iter().map(Self::aggregate)),
        )
    }

    /// True when nothing in this subtree changed the surface.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.aggregate() == Compatibility::Same
    }

    /// Notes joined in firing order, `None` when no rule fired.
    #[must_use]
    pub fn note(&self) -> Option<String> {
        if self.notes.is_empty() {
            None
        } else {
            Some(self.notes.join(", "))
        }
    }

    /// The node's own change is breaking and needs attention.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.compatibility == Compatibility::Major
    }

    /// Copy of the tree without subtrees whose aggregate is SAME.
    ///
    /// The root always survives so callers can still read its verdict.
    #[must_use]
    pub fn pruned(&self) -> DiffNode {
        DiffNode {
            children: self
                .children
                .iter()
                .filter(|c| !c.is_unchanged())
                .map(Self::pruned)
                .collect(),
            ..self.clone_shallow()
        }
    }

    fn clone_shallow(&self) -> DiffNode {
        DiffNode {
            name: self.name.clone(),
            entity: self.entity,
            diff: self.diff,
            compatibility: self.compatibility,
            notes: self.notes.clone(),
            children: Vec::new(),
        }
    }

    /// Counts of changed entities below this node.
    #[must_use]
    pub fn summary(&self) -> ChangeSummary {
        let mut summary = ChangeSummary::default();
        for child in &self.children {
            child.tally(&mut summary);
        }
        summary
    }

    fn tally(&self, summary: &mut ChangeSummary) {
        if self.is_unchanged() {
            return;
        }
        match self.diff {
            DiffKind::Added => summary.added += 1,
            DiffKind::Removed => summary.removed += 1,
            DiffKind::Modified => summary.modified += 1,
            DiffKind::None => {}
        }
        if self.is_flagged() {
            summary.breaking += 1;
        }
        for child in &self.children {
            child.tally(summary);
        }
    }
}

/// Number of changed entities in a diff tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    /// Entities whose own change is MAJOR
    pub breaking: usize,
}

impl ChangeSummary {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiffNode {
        DiffNode::root(vec![
            DiffNode::matched(EntityKind::Type, "a.Same".into()).with_children(vec![
                DiffNode::matched(EntityKind::Method, "f()".into()),
            ]),
            DiffNode::matched(EntityKind::Type, "a.Changed".into()).with_children(vec![
                DiffNode::added(EntityKind::Method, "g()".into(), Compatibility::Minor),
                DiffNode::removed(EntityKind::Field, "int x".into()),
            ]),
        ])
    }

    #[test]
    fn test_aggregate_is_subtree_max() {
        let tree = sample();
        assert_eq!(tree.compatibility, Compatibility::Same);
        assert_eq!(tree.aggregate(), Compatibility::Major);
        assert!(tree.children[0].is_unchanged());
        assert_eq!(tree.children[1].aggregate(), Compatibility::Major);
    }

    #[test]
    fn test_mark_appends_notes_and_sets_modified() {
        let mut node = DiffNode::matched(EntityKind::Field, "int MAX".into());
        node.mark(Compatibility::Major, ["changed type", "changed value"]);
        assert_eq!(node.diff, DiffKind::Modified);
        assert_eq!(node.compatibility, Compatibility::Major);
        assert_eq!(node.note().as_deref(), Some("changed type, changed value"));
        assert!(node.is_flagged());
    }

    #[test]
    fn test_mark_keeps_added_marker() {
        let mut node = DiffNode::added(EntityKind::Method, "f()".into(), Compatibility::Minor);
        node.mark(Compatibility::Major, ["x"]);
        assert_eq!(node.diff, DiffKind::Added);
    }

    #[test]
    fn test_pruned_drops_same_subtrees() {
        let pruned = sample().pruned();
        assert_eq!(pruned.children.len(), 1);
        assert_eq!(pruned.children[0].name.as_deref(), Some("a.Changed"));
        assert_eq!(pruned.children[0].children.len(), 2);
    }

    #[test]
    fn test_summary_counts() {
        let summary = sample().summary();
        assert_eq!(summary.added, 1);
        assert_eq!(summary.removed, 1);
        assert_eq!(summary.modified, 0);
        assert_eq!(summary.breaking, 1);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_markers() {
        let markers: String = [DiffKind::None, DiffKind::Modified, DiffKind::Added, DiffKind::Removed]
            .iter()
            .map(|d| d.marker())
            .collect();
        assert_eq!(markers, " *+-");
    }
}

//! Snapshot comparison.

use super::partition::{compare_members, Pairing};
use super::rules::{evaluate, RuleSet};
use super::{DiffNode, EntityKind};
use crate::model::{ApiType, Field, Method, Snapshot, SurfaceEntity};
use crate::version::Compatibility;
use tracing::debug;

/// Compare two snapshots and build the annotated diff tree.
///
/// When either side is missing the result is a single MAJOR root with no
/// detail, which callers treat as a re-baseline. Otherwise the root's own
/// verdict is PATCH when the surfaces agree but the content hashes differ,
/// and its children are the top-level type comparisons.
#[must_use]
pub fn compare(old: Option<&Snapshot>, new: Option<&Snapshot>) -> DiffNode {
    let (Some(old), Some(new)) = (old, new) else {
        debug!("baseline or current snapshot missing, treating as re-baseline");
        return DiffNode::rebaseline();
    };

    let mut root = DiffNode::root(compare_members(&old.types, &new.types, compare_type));
    if old.content_hash != new.content_hash {
        root.mark(Compatibility::Patch, ["content changed"]);
    }

    debug!(
        old_types = old.type_count(),
        new_types = new.type_count(),
        aggregate = %root.aggregate(),
        "compared snapshots"
    );
    root
}

fn compare_type(pairing: Pairing<'_, ApiType>) -> DiffNode {
    match pairing {
        Pairing::Added(t) => DiffNode::added(EntityKind::Type, t.display_name(), Compatibility::Minor),
        Pairing::Removed(t) => DiffNode::removed(EntityKind::Type, t.display_name()),
        Pairing::Matched(old, new) => {
            let mut children = compare_members(&old.types, &new.types, compare_type);
            children.extend(compare_members(&old.fields, &new.fields, compare_field));
            children.extend(compare_members(&old.methods, &new.methods, |p| {
                compare_method(p, new)
            }));
            matched(EntityKind::Type, old, new).with_children(children)
        }
    }
}

fn compare_field(pairing: Pairing<'_, Field>) -> DiffNode {
    match pairing {
        Pairing::Added(f) => DiffNode::added(EntityKind::Field, f.display_name(), Compatibility::Minor),
        Pairing::Removed(f) => DiffNode::removed(EntityKind::Field, f.display_name()),
        Pairing::Matched(old, new) => matched(EntityKind::Field, old, new),
    }
}

/// `owner` is the declaring type on the new side.
fn compare_method(pairing: Pairing<'_, Method>, owner: &ApiType) -> DiffNode {
    match pairing {
        Pairing::Added(m) => {
            // A non-abstract addition to a client type can still clash with a
            // client method of the same signature; that risk is accepted.
            if owner.usage.inheritable_by_client() && m.modifiers.is_abstract {
                DiffNode::added(EntityKind::Method, m.display_name(), Compatibility::Major)
                    .with_note("added abstract method to client-inheritable type")
            } else {
                DiffNode::added(EntityKind::Method, m.display_name(), Compatibility::Minor)
            }
        }
        Pairing::Removed(m) => DiffNode::removed(EntityKind::Method, m.display_name()),
        Pairing::Matched(old, new) => matched(EntityKind::Method, old, new),
    }
}

fn matched<T: RuleSet + SurfaceEntity>(entity: EntityKind, old: &T, new: &T) -> DiffNode {
    debug_assert!(old.key() == new.key(), "matched entities must share a key");
    let mut node = DiffNode::matched(entity, new.display_name());
    evaluate(&mut node, old, new);
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffKind;
    use crate::model::{Modifiers, SnapshotBuilder, TypeKind, Usage};
    use crate::version::ApiVersion;

    fn widget(usage: Usage) -> ApiType {
        ApiType::new("com.example.Widget", TypeKind::Interface)
            .with_usage(usage)
            .with_method(
                Method::new("resize", ["int"], "void")
                    .with_modifiers(Modifiers::public().with_abstract()),
            )
    }

    fn snapshot(types: impl IntoIterator<Item = ApiType>) -> Snapshot {
        types
            .into_iter()
            .fold(SnapshotBuilder::new().version(ApiVersion::new(1, 0, 0)), |b, t| b.add_type(t))
            .build()
    }

    #[test]
    fn test_missing_side_is_rebaseline() {
        let s = snapshot([widget(Usage::Service)]);
        for tree in [compare(None, Some(&s)), compare(Some(&s), None), compare(None, None)] {
            assert_eq!(tree.aggregate(), Compatibility::Major);
            assert_eq!(tree.diff, DiffKind::Modified);
            assert!(tree.children.is_empty());
        }
    }

    #[test]
    fn test_identical_is_same() {
        let s = snapshot([widget(Usage::Service)]);
        assert_eq!(compare(Some(&s), Some(&s.clone())).aggregate(), Compatibility::Same);
    }

    #[test]
    fn test_hash_only_change_is_patch() {
        let old = snapshot([widget(Usage::Service)]);
        let mut new = old.clone();
        new.content_hash = crate::model::ContentHash(42);
        let tree = compare(Some(&old), Some(&new));
        assert_eq!(tree.aggregate(), Compatibility::Patch);
        assert!(tree.children.iter().all(DiffNode::is_unchanged));
    }

    #[test]
    fn test_added_abstract_method_depends_on_usage() {
        let extra = Method::new("close", Vec::<String>::new(), "void")
            .with_modifiers(Modifiers::public().with_abstract());
        for (usage, expected) in [
            (Usage::Service, Compatibility::Minor),
            (Usage::Client, Compatibility::Major),
            (Usage::TwoWay, Compatibility::Major),
        ] {
            let old = snapshot([widget(usage)]);
            let new = snapshot([widget(usage).with_method(extra.clone())]);
            assert_eq!(compare(Some(&old), Some(&new)).aggregate(), expected, "{usage}");
        }
    }

    #[test]
    fn test_added_method_uses_new_owner_usage() {
        let extra = Method::new("close", Vec::<String>::new(), "void")
            .with_modifiers(Modifiers::public().with_abstract());
        let old = snapshot([widget(Usage::Default)]);
        let new = snapshot([widget(Usage::Client).with_method(extra)]);
        let tree = compare(Some(&old), Some(&new));
        let ty = &tree.children[0];
        assert_eq!(ty.compatibility, Compatibility::Minor);
        assert_eq!(ty.notes, ["allowed inheritance by client"]);
        let method = ty.children.iter().find(|c| c.diff == DiffKind::Added).unwrap();
        assert_eq!(method.compatibility, Compatibility::Major);
    }

    #[test]
    fn test_nested_types_are_compared() {
        let outer = |inner: ApiType| ApiType::new("a.Outer", TypeKind::Class).with_nested(inner);
        let old = snapshot([outer(ApiType::new("a.Outer$In", TypeKind::Class))]);
        let new = snapshot([outer(
            ApiType::new("a.Outer$In", TypeKind::Class).with_field(crate::model::Field::new("x", "int")),
        )]);
        let tree = compare(Some(&old), Some(&new));
        assert_eq!(tree.aggregate(), Compatibility::Minor);
        let nested = &tree.children[0].children[0];
        assert_eq!(nested.name.as_deref(), Some("a.Outer$In"));
        assert_eq!(nested.children[0].diff, DiffKind::Added);
    }

    #[test]
    fn test_child_order_types_fields_methods() {
        let full = ApiType::new("a.T", TypeKind::Class)
            .with_method(Method::new("m", Vec::<String>::new(), "void"))
            .with_field(crate::model::Field::new("f", "int"))
            .with_nested(ApiType::new("a.T$N", TypeKind::Class));
        let old = snapshot([ApiType::new("a.T", TypeKind::Class)]);
        let new = snapshot([full]);
        let tree = compare(Some(&old), Some(&new));
        let kinds: Vec<_> = tree.children[0].children.iter().map(|c| c.entity).collect();
        assert_eq!(kinds, [EntityKind::Type, EntityKind::Field, EntityKind::Method]);
    }
}

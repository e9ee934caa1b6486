//! Collector-side structural checks on a freshly built snapshot.
//!
//! The comparator assumes its inputs already pass these checks and never runs
//! them itself.

use super::{ApiType, Snapshot, TypeKind, Usage};
use std::collections::HashSet;
use std::fmt;

/// What is wrong with a snapshot entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Static fields are part of the surface only as constants
    StaticFieldNotFinal,
    /// A constant value on a field that is not static final
    ConstantOnNonConstantField,
    /// Final types cannot be inheritable, so a usage category is meaningless
    AnnotatedFinalType,
    /// Only classes and interfaces can carry a usage category
    AnnotatedNonClassOrInterface,
    /// Non-final default type that nothing extends; it should be final or categorized
    UnusedInheritableType,
    /// The flattened supertype set names the type itself
    SelfSupertype,
}

impl IssueKind {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::StaticFieldNotFinal => "static field must be final",
            Self::ConstantOnNonConstantField => "constant value on a field that is not static final",
            Self::AnnotatedFinalType => "final type must not have a usage category",
            Self::AnnotatedNonClassOrInterface => {
                "only classes and interfaces may have a usage category"
            }
            Self::UnusedInheritableType => {
                "inheritable type is never extended; make it final or give it a usage category"
            }
            Self::SelfSupertype => "type lists itself as a supertype",
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Display name of the offending entity
    pub subject: String,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.kind.description())
    }
}

impl Snapshot {
    /// Run every collector check and return the findings in surface order.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let extended: HashSet<&str> = self
            .all_types()
            .flat_map(|t| t.supertypes.iter().map(String::as_str))
            .collect();

        let mut issues = Vec::new();
        for api_type in self.all_types() {
            check_type(api_type, &extended, &mut issues);
        }
        issues
    }
}

fn check_type(api_type: &ApiType, extended: &HashSet<&str>, issues: &mut Vec<ValidationIssue>) {
    let mut push = |subject: String, kind| issues.push(ValidationIssue { subject, kind });
    let name = &api_type.qualified_name;

    if api_type.supertypes.contains(name) {
        push(name.clone(), IssueKind::SelfSupertype);
    }

    if api_type.usage == Usage::Default {
        let may_be_extended = matches!(api_type.kind, TypeKind::Class | TypeKind::Interface);
        if may_be_extended && !api_type.modifiers.is_final && !extended.contains(name.as_str()) {
            push(name.clone(), IssueKind::UnusedInheritableType);
        }
    } else {
        if api_type.modifiers.is_final {
            push(name.clone(), IssueKind::AnnotatedFinalType);
        }
        if !matches!(api_type.kind, TypeKind::Class | TypeKind::Interface) {
            push(name.clone(), IssueKind::AnnotatedNonClassOrInterface);
        }
    }

    for field in api_type.fields.values() {
        let subject = || format!("{name}.{}", field.name);
        let m = field.modifiers;
        if m.is_static && !m.is_final {
            push(subject(), IssueKind::StaticFieldNotFinal);
        }
        if field.constant_value.is_some() && !(m.is_static && m.is_final) {
            push(subject(), IssueKind::ConstantOnNonConstantField);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConstantValue, Field, Modifiers, SnapshotBuilder};

    fn kinds(snapshot: &Snapshot) -> Vec<IssueKind> {
        snapshot.validate().into_iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_clean_snapshot() {
        let snapshot = SnapshotBuilder::new()
            .add_type(
                ApiType::new("a.Base", TypeKind::Interface)
                    .with_usage(Usage::Service)
                    .with_field(Field::constant("MAX", "int", ConstantValue::Int(1))),
            )
            .add_type(
                ApiType::new("a.Sealed", TypeKind::Class)
                    .with_modifiers(Modifiers::public().with_final()),
            )
            .add_type(ApiType::new("a.Color", TypeKind::Enum))
            .build();
        assert!(snapshot.validate().is_empty(), "{:?}", snapshot.validate());
    }

    #[test]
    fn test_static_non_final_field() {
        let snapshot = SnapshotBuilder::new()
            .add_type(
                ApiType::new("a.Holder", TypeKind::Class)
                    .with_modifiers(Modifiers::public().with_final())
                    .with_field(
                        Field::new("counter", "int").with_modifiers(Modifiers::public().with_static()),
                    ),
            )
            .build();
        let issues = snapshot.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::StaticFieldNotFinal);
        assert_eq!(issues[0].to_string(), "a.Holder.counter: static field must be final");
    }

    #[test]
    fn test_constant_on_instance_field() {
        let mut field = Field::new("size", "int");
        field.constant_value = Some(ConstantValue::Int(3));
        let snapshot = SnapshotBuilder::new()
            .add_type(
                ApiType::new("a.Holder", TypeKind::Class)
                    .with_modifiers(Modifiers::public().with_final())
                    .with_field(field),
            )
            .build();
        assert_eq!(kinds(&snapshot), [IssueKind::ConstantOnNonConstantField]);
    }

    #[test]
    fn test_usage_category_restrictions() {
        let snapshot = SnapshotBuilder::new()
            .add_type(
                ApiType::new("a.Final", TypeKind::Class)
                    .with_modifiers(Modifiers::public().with_final())
                    .with_usage(Usage::Client),
            )
            .add_type(ApiType::new("a.Mode", TypeKind::Enum).with_usage(Usage::Service))
            .build();
        assert_eq!(
            kinds(&snapshot),
            [IssueKind::AnnotatedFinalType, IssueKind::AnnotatedNonClassOrInterface]
        );
    }

    #[test]
    fn test_unused_inheritable_type() {
        let snapshot = SnapshotBuilder::new()
            .add_type(ApiType::new("a.Orphan", TypeKind::Class))
            .add_type(ApiType::new("a.Base", TypeKind::Class))
            .add_type(
                ApiType::new("a.Impl", TypeKind::Class)
                    .with_modifiers(Modifiers::public().with_final())
                    .with_supertype("a.Base"),
            )
            .build();
        let issues = snapshot.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].subject, "a.Orphan");
        assert_eq!(issues[0].kind, IssueKind::UnusedInheritableType);
    }

    #[test]
    fn test_self_supertype_in_nested_type() {
        let snapshot = SnapshotBuilder::new()
            .add_type(
                ApiType::new("a.Outer", TypeKind::Class)
                    .with_modifiers(Modifiers::public().with_final())
                    .with_nested(
                        ApiType::new("a.Outer$Loop", TypeKind::Interface)
                            .with_usage(Usage::Service)
                            .with_supertype("a.Outer$Loop"),
                    ),
            )
            .build();
        assert_eq!(kinds(&snapshot), [IssueKind::SelfSupertype]);
    }
}

//! Ordered rule tables for matched entities.
//!
//! Each matched entity is checked tier by tier:
//!
//! 1. the entity's own breaking rules (MAJOR)
//! 2. shared modifier breaking rules (MAJOR)
//! 3. shared modifier compatible rules (MINOR)
//! 4. the entity's own compatible rules (MINOR)
//!
//! Every rule of a tier is evaluated and the notes of all firing rules are
//! kept in table order. The first tier with a firing rule decides the node's
//! verdict and later tiers are skipped.

use super::DiffNode;
use crate::model::{ApiType, Field, HasModifiers, Method, Modifiers, Visibility};
use crate::version::Compatibility;

/// A single named check between the old and new state of an entity.
pub struct Rule<T: ?Sized> {
    pub note: &'static str,
    pub fires: fn(&T, &T) -> bool,
}

impl<T: ?Sized> Rule<T> {
    const fn new(note: &'static str, fires: fn(&T, &T) -> bool) -> Self {
        Self { note, fires }
    }
}

/// Entities with their own breaking and compatible rule tables.
pub trait RuleSet: HasModifiers + Sized + 'static {
    const BREAKING: &'static [Rule<Self>];
    const COMPATIBLE: &'static [Rule<Self>];
}

// ============================================================================
// Shared modifier rules
// ============================================================================

pub const MODIFIER_BREAKING: &[Rule<Modifiers>] = &[
    Rule::new("decreased visibility", |a, b| {
        a.visibility == Visibility::Public && b.visibility != Visibility::Public
    }),
    Rule::new("made abstract", |a, b| {
        (!a.is_abstract && b.is_abstract) || (a.is_default && !b.is_default)
    }),
    Rule::new("made final", |a, b| !a.is_final && b.is_final),
    Rule::new("changed static", |a, b| a.is_static != b.is_static),
];

pub const MODIFIER_COMPATIBLE: &[Rule<Modifiers>] = &[
    Rule::new("increased visibility", |a, b| {
        a.visibility != Visibility::Public && b.visibility == Visibility::Public
    }),
    Rule::new("made non-abstract", |a, b| {
        (a.is_abstract && !b.is_abstract) || (!a.is_default && b.is_default)
    }),
    Rule::new("made non-final", |a, b| a.is_final && !b.is_final),
];

// ============================================================================
// Per-entity rules
// ============================================================================

impl RuleSet for ApiType {
    const BREAKING: &'static [Rule<Self>] = &[
        Rule::new("changed kind", |a, b| a.kind != b.kind),
        Rule::new("contracted supertype set", |a, b| {
            !a.supertypes.is_subset(&b.supertypes)
        }),
        Rule::new("changed type parameters", |a, b| {
            a.type_parameters != b.type_parameters
        }),
        Rule::new("prohibited inheritance by provider", |a, b| {
            a.usage.inheritable_by_provider() && !b.usage.inheritable_by_provider()
        }),
        Rule::new("prohibited inheritance by client", |a, b| {
            a.usage.inheritable_by_client() && !b.usage.inheritable_by_client()
        }),
    ];

    const COMPATIBLE: &'static [Rule<Self>] = &[
        Rule::new("expanded supertype set", |a, b| {
            b.supertypes.len() != a.supertypes.len()
        }),
        Rule::new("changed deprecation state", |a, b| a.deprecation != b.deprecation),
        Rule::new("allowed inheritance by provider", |a, b| {
            !a.usage.inheritable_by_provider() && b.usage.inheritable_by_provider()
        }),
        Rule::new("allowed inheritance by client", |a, b| {
            !a.usage.inheritable_by_client() && b.usage.inheritable_by_client()
        }),
    ];
}

impl RuleSet for Field {
    const BREAKING: &'static [Rule<Self>] = &[
        Rule::new("changed type", |a, b| a.declared_type != b.declared_type),
        Rule::new("changed value", |a, b| a.constant_value != b.constant_value),
    ];

    const COMPATIBLE: &'static [Rule<Self>] = &[Rule::new(
        "changed deprecation state",
        |a, b| a.deprecation != b.deprecation,
    )];
}

impl RuleSet for Method {
    const BREAKING: &'static [Rule<Self>] = &[
        Rule::new("changed return type", |a, b| a.return_type != b.return_type),
        Rule::new("changed thrown types", |a, b| a.thrown_types != b.thrown_types),
        Rule::new("changed type parameters", |a, b| {
            a.type_parameters != b.type_parameters
        }),
    ];

    const COMPATIBLE: &'static [Rule<Self>] = &[Rule::new(
        "changed deprecation state",
        |a, b| a.deprecation != b.deprecation,
    )];
}

// ============================================================================
// Evaluation
// ============================================================================

fn fired<T: ?Sized>(rules: &[Rule<T>], old: &T, new: &T) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| (rule.fires)(old, new))
        .map(|rule| rule.note)
        .collect()
}

/// Apply the tiers to a matched pair and record the outcome on `node`.
///
/// Returns the tier verdict, `Same` when nothing fired.
pub fn evaluate<T: RuleSet>(node: &mut DiffNode, old: &T, new: &T) -> Compatibility {
    let (old_mods, new_mods) = (old.modifiers(), new.modifiers());
    let tiers = [
        (Compatibility::Major, fired(T::BREAKING, old, new)),
        (Compatibility::Major, fired(MODIFIER_BREAKING, old_mods, new_mods)),
        (Compatibility::Minor, fired(MODIFIER_COMPATIBLE, old_mods, new_mods)),
        (Compatibility::Minor, fired(T::COMPATIBLE, old, new)),
    ];
    for (level, notes) in tiers {
        if !notes.is_empty() {
            node.mark(level, notes);
            return level;
        }
    }
    Compatibility::Same
}

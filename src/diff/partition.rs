//! Three-way partition of two keyed maps.

use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::hash::Hash;

/// Where an identity key was found.
#[derive(Debug, Clone, Copy)]
pub enum Pairing<'a, T> {
    /// Only in the new map
    Added(&'a T),
    /// Only in the old map
    Removed(&'a T),
    /// In both maps
    Matched(&'a T, &'a T),
}

/// Pair up entities of two maps by key.
///
/// Pairings come out in key order so that the result does not depend on the
/// order in which either map was populated.
pub fn partition<'a, K, T>(old: &'a IndexMap<K, T>, new: &'a IndexMap<K, T>) -> Vec<Pairing<'a, T>>
where
    K: Ord + Hash + Eq,
{
    let keys: BTreeSet<&K> = old.keys().chain(new.keys()).collect();
    keys.into_iter()
        .filter_map(|key| match (old.get(key), new.get(key)) {
            (Some(a), Some(b)) => Some(Pairing::Matched(a, b)),
            (Some(a), None) => Some(Pairing::Removed(a)),
            (None, Some(b)) => Some(Pairing::Added(b)),
            (None, None) => None,
        })
        .collect()
}

/// Partition two maps and compare each pairing with `compare`.
pub fn compare_members<'a, K, T, R, F>(
    old: &'a IndexMap<K, T>,
    new: &'a IndexMap<K, T>,
    compare: F,
) -> Vec<R>
where
    K: Ord + Hash + Eq,
    F: FnMut(Pairing<'a, T>) -> R,
{
    partition(old, new).into_iter().map(compare).collect()
}

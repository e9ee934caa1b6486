//! Identity keys and the traits shared by every surface entity.

use super::Modifiers;
use std::fmt::Debug;
use std::hash::Hash;

/// An entity that is matched across snapshots by an identity key.
///
/// Keys are unique within their owning map. Everything that is not part of
/// the key is compared attribute by attribute once two entities are matched.
pub trait Keyed {
    /// The identity key type
    type Key: Clone + Eq + Hash + Ord + Debug;

    /// The entity's identity key
    fn key(&self) -> &Self::Key;
}

/// Entities carrying structural flags, subject to the shared modifier rules.
pub trait HasModifiers {
    fn modifiers(&self) -> &Modifiers;
}

/// A named, keyed part of the surface (type, field or method).
pub trait SurfaceEntity: Keyed + HasModifiers {
    /// Name shown for this entity in change reports
    fn display_name(&self) -> String;
}

/// Serde adapter storing a keyed map as a sequence of entities.
///
/// Method keys are structured (name plus parameter types) and cannot be JSON
/// object keys, so maps are written as arrays and re-keyed when read back.
/// A repeated key on input is rejected.
pub(crate) mod keyed_seq {
    use super::Keyed;
    use indexmap::IndexMap;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, V>(map: &IndexMap<V::Key, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Keyed + Serialize,
    {
        serializer.collect_seq(map.values())
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<IndexMap<V::Key, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Keyed + Deserialize<'de>,
    {
        let items = Vec::<V>::deserialize(deserializer)?;
        let mut map = IndexMap::with_capacity(items.len());
        for item in items {
            let key = item.key().clone();
            if map.contains_key(&key) {
                return Err(D::Error::custom(format!("duplicate identity key {key:?}")));
            }
            map.insert(key, item);
        }
        Ok(map)
    }
}

//! The snapshot root and its order-independent content hash.

use super::{keyed_seq, ApiType};
use crate::utils::source_unit_hash;
use crate::version::ApiVersion;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate hash of every source unit that contributed to a snapshot.
///
/// Contributions are combined with XOR, so the result does not depend on the
/// order in which the collector visited its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(pub u64);

impl ContentHash {
    pub const EMPTY: Self = Self(0);

    /// Hash of a single source unit.
    #[must_use]
    pub fn of_source(name: &str, content: &str) -> Self {
        Self(source_unit_hash(name, content))
    }

    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }
}

impl FromIterator<ContentHash> for ContentHash {
    fn from_iter<I: IntoIterator<Item = ContentHash>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::combine)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A complete structural description of one surface revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: ApiVersion,
    #[serde(default)]
    pub content_hash: ContentHash,
    #[serde(default, with = "keyed_seq")]
    pub types: IndexMap<String, ApiType>,
}

impl Snapshot {
    /// An empty snapshot at `version`.
    #[must_use]
    pub fn new(version: ApiVersion) -> Self {
        Self {
            version,
            content_hash: ContentHash::EMPTY,
            types: IndexMap::new(),
        }
    }

    /// Look up a top-level type by qualified name.
    #[must_use]
    pub fn get_type(&self, qualified_name: &str) -> Option<&ApiType> {
        self.types.get(qualified_name)
    }

    /// Number of top-level types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Every type of the surface including member types, depth first.
    pub fn all_types(&self) -> impl Iterator<Item = &ApiType> + '_ {
        self.types.values().flat_map(ApiType::walk)
    }

    /// Same snapshot stamped with a different version.
    #[must_use]
    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }
}

/// Fluent builder for [`Snapshot`].
#[derive(Debug, Default)]
#[must_use]
pub struct SnapshotBuilder {
    version: ApiVersion,
    content_hash: ContentHash,
    types: IndexMap<String, ApiType>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Fold one source unit into the content hash.
    pub fn add_source(mut self, name: &str, content: &str) -> Self {
        self.content_hash = self.content_hash.combine(ContentHash::of_source(name, content));
        self
    }

    /// Override the content hash entirely.
    pub fn content_hash(mut self, hash: ContentHash) -> Self {
        self.content_hash = hash;
        self
    }

    /// Add a top-level type, replacing any type with the same qualified name.
    pub fn add_type(mut self, api_type: ApiType) -> Self {
        self.types.insert(api_type.qualified_name.clone(), api_type);
        self
    }

    #[must_use]
    pub fn build(self) -> Snapshot {
        Snapshot {
            version: self.version,
            content_hash: self.content_hash,
            types: self.types,
        }
    }
}

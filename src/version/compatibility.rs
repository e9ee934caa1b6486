//! The four-level compatibility lattice.

use super::ApiVersion;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compatibility class of a change, ordered from harmless to breaking.
///
/// The derived ordering follows declaration order, so `Ord::max` is the
/// lattice join and folding it over any collection of sibling verdicts gives
/// the same answer regardless of iteration order.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Compatibility {
    /// Nothing observable changed
    #[default]
    Same,
    /// Surface identical, something else (docs, behavior) changed
    Patch,
    /// Backward-compatible surface change
    Minor,
    /// Breaks existing binaries or sources
    Major,
}

impl Compatibility {
    /// All levels, lowest first.
    pub const ALL: [Self; 4] = [Self::Same, Self::Patch, Self::Minor, Self::Major];

    /// Lattice join: the higher of the two levels.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    /// Join over an arbitrary collection. Empty input yields `Same`.
    #[must_use]
    pub fn fold<I: IntoIterator<Item = Self>>(levels: I) -> Self {
        levels.into_iter().fold(Self::Same, Self::max)
    }

    /// Derive the next version from `version` for a change of this class.
    ///
    /// A component already at `u32::MAX` stays there. Use
    /// [`Compatibility::checked_increment`] where that must be an error.
    #[must_use]
    pub const fn increment(self, version: ApiVersion) -> ApiVersion {
        match self {
            Self::Same => version,
            Self::Patch => {
                ApiVersion::new(version.major, version.minor, version.patch.saturating_add(1))
            }
            Self::Minor => ApiVersion::new(version.major, version.minor.saturating_add(1), 0),
            Self::Major => ApiVersion::new(version.major.saturating_add(1), 0, 0),
        }
    }

    /// Like [`Compatibility::increment`], but `None` when the bumped component overflows.
    #[must_use]
    pub const fn checked_increment(self, version: ApiVersion) -> Option<ApiVersion> {
        match self {
            Self::Same => Some(version),
            Self::Patch => match version.patch.checked_add(1) {
                Some(patch) => Some(ApiVersion::new(version.major, version.minor, patch)),
                None => None,
            },
            Self::Minor => match version.minor.checked_add(1) {
                Some(minor) => Some(ApiVersion::new(version.major, minor, 0)),
                None => None,
            },
            Self::Major => match version.major.checked_add(1) {
                Some(major) => Some(ApiVersion::new(major, 0, 0)),
                None => None,
            },
        }
    }

    /// Upper-case label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Same => "SAME",
            Self::Patch => "PATCH",
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Compatibility::Same < Compatibility::Patch);
        assert!(Compatibility::Patch < Compatibility::Minor);
        assert!(Compatibility::Minor < Compatibility::Major);
    }

    #[test]
    fn test_max_is_join() {
        for a in Compatibility::ALL {
            assert_eq!(a.max(a), a);
            for b in Compatibility::ALL {
                assert_eq!(a.max(b), b.max(a));
                assert!(a.max(b) >= a && a.max(b) >= b);
            }
        }
    }

    #[test]
    fn test_fold_empty_is_same() {
        assert_eq!(Compatibility::fold(Vec::new()), Compatibility::Same);
        assert_eq!(
            Compatibility::fold([Compatibility::Minor, Compatibility::Patch]),
            Compatibility::Minor
        );
    }

    #[test]
    fn test_increment() {
        let v = ApiVersion::new(1, 2, 3);
        assert_eq!(Compatibility::Same.increment(v), ApiVersion::new(1, 2, 3));
        assert_eq!(Compatibility::Patch.increment(v), ApiVersion::new(1, 2, 4));
        assert_eq!(Compatibility::Minor.increment(v), ApiVersion::new(1, 3, 0));
        assert_eq!(Compatibility::Major.increment(v), ApiVersion::new(2, 0, 0));
    }

    #[test]
    fn test_checked_increment_overflow() {
        let top = ApiVersion::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(Compatibility::Same.checked_increment(top), Some(top));
        for level in [Compatibility::Patch, Compatibility::Minor, Compatibility::Major] {
            assert_eq!(level.checked_increment(top), None, "{level}");
            assert_eq!(level.increment(top).major, u32::MAX);
        }
        assert_eq!(
            Compatibility::Minor.checked_increment(ApiVersion::new(1, 2, 3)),
            Some(ApiVersion::new(1, 3, 0))
        );
    }

    #[test]
    fn test_serde_uses_upper_case() {
        let json = serde_json::to_string(&Compatibility::Minor).unwrap();
        assert_eq!(json, "\"MINOR\"");
        let back: Compatibility = serde_json::from_str("\"MAJOR\"").unwrap();
        assert_eq!(back, Compatibility::Major);
    }
}

//! Aggregate verdict and the version it implies.

use super::DiffNode;
use crate::error::{ApiCompatError, Result};
use crate::version::{ApiVersion, Compatibility};
use serde::{Deserialize, Serialize};

/// Outcome of one comparison: the aggregate level and the version change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub compatibility: Compatibility,
    /// Version of the baseline; `None` when the version was overridden
    pub old_version: Option<ApiVersion>,
    pub new_version: ApiVersion,
}

impl Verdict {
    /// Derive the next version from a diff tree and the baseline version.
    ///
    /// Saturates at `u32::MAX`; see [`Verdict::try_derive`].
    #[must_use]
    pub fn derive(tree: &DiffNode, old_version: ApiVersion) -> Self {
        let compatibility = tree.aggregate();
        Self {
            compatibility,
            old_version: Some(old_version),
            new_version: compatibility.increment(old_version),
        }
    }

    /// Like [`Verdict::derive`], but fails when the next version does not fit.
    pub fn try_derive(tree: &DiffNode, old_version: ApiVersion) -> Result<Self> {
        let compatibility = tree.aggregate();
        let new_version = compatibility.checked_increment(old_version).ok_or_else(|| {
            ApiCompatError::invalid_version(
                old_version.to_string(),
                format!("cannot apply a {compatibility} increment without overflow"),
            )
        })?;
        Ok(Self {
            compatibility,
            old_version: Some(old_version),
            new_version,
        })
    }

    /// Verdict for an explicit reference version: taken verbatim, no checks.
    #[must_use]
    pub const fn overridden(version: ApiVersion) -> Self {
        Self {
            compatibility: Compatibility::Major,
            old_version: None,
            new_version: version,
        }
    }

    /// True when the surface changed at all.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.compatibility != Compatibility::Same
    }

    #[must_use]
    pub const fn is_override(&self) -> bool {
        self.old_version.is_none()
    }
}

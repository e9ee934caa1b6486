//! Three-component API version numbers.

use crate::error::{ApiCompatError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` version of the published surface.
///
/// Unlike full semver there are no pre-release or build components; the
/// surface is either published at a version or it is not.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ApiVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `X.Y.Z` where every component is a non-empty run of ASCII digits.
    ///
    /// Signs, whitespace, empty components and values that overflow `u32` are
    /// rejected with [`ApiCompatError::InvalidVersion`].
    pub fn parse(value: &str) -> Result<Self> {
        let components: Vec<&str> = value.split('.').collect();
        if components.len() != 3 {
            return Err(ApiCompatError::invalid_version(
                value,
                format!("expected 3 components, found {}", components.len()),
            ));
        }
        Ok(Self::new(
            parse_component(value, components[0])?,
            parse_component(value, components[1])?,
            parse_component(value, components[2])?,
        ))
    }
}

fn parse_component(value: &str, component: &str) -> Result<u32> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiCompatError::invalid_version(
            value,
            format!("invalid component '{component}'"),
        ));
    }
    component.parse::<u32>().map_err(|e| {
        ApiCompatError::invalid_version(value, format!("invalid component '{component}': {e}"))
    })
}

impl FromStr for ApiVersion {
    type Err = ApiCompatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(ApiVersion::parse("0.0.0").unwrap(), ApiVersion::new(0, 0, 0));
        assert_eq!(ApiVersion::parse("17.4.12").unwrap(), ApiVersion::new(17, 4, 12));
        // Leading zeros are tolerated, the value is what counts
        assert_eq!(ApiVersion::parse("01.2.003").unwrap(), ApiVersion::new(1, 2, 3));
    }

    #[test]
    fn test_parse_wrong_component_count() {
        for bad in ["", "1", "1.2", "1.2.3.4", "1..2.3"] {
            assert!(
                matches!(ApiVersion::parse(bad), Err(ApiCompatError::InvalidVersion { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_signs_and_garbage() {
        for bad in ["+1.2.3", "1.+2.3", "1.2.-3", "1.2.x", "1. 2.3", "1.2.", "v1.2.3", "1.2.3-rc1"] {
            assert!(
                matches!(ApiVersion::parse(bad), Err(ApiCompatError::InvalidVersion { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(ApiVersion::parse("4294967296.0.0").is_err());
        assert!(ApiVersion::parse("4294967295.0.0").is_ok());
    }

    #[test]
    fn test_display_roundtrip() {
        let v = ApiVersion::new(3, 0, 9);
        assert_eq!(v.to_string(), "3.0.9");
        assert_eq!(v.to_string().parse::<ApiVersion>().unwrap(), v);
    }

    #[test]
    fn test_error_mentions_value() {
        let err = ApiVersion::parse("1.2").unwrap_err();
        assert!(err.to_string().contains("1.2"), "{err}");
    }
}

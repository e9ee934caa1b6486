//! Structural flags, kinds and the usage category of API types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared visibility, ordered from least to most visible.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Package,
    Protected,
    #[default]
    Public,
}

/// Structural flags of a type, field or method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub visibility: Visibility,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    /// Interface method with a default body
    #[serde(rename = "default")]
    pub is_default: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
}

impl Modifiers {
    /// Public, concrete, non-static, non-final.
    #[must_use]
    pub const fn public() -> Self {
        Self {
            visibility: Visibility::Public,
            is_abstract: false,
            is_default: false,
            is_static: false,
            is_final: false,
        }
    }

    /// Protected, otherwise like [`Modifiers::public`].
    #[must_use]
    pub const fn protected() -> Self {
        Self::public().with_visibility(Visibility::Protected)
    }

    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub const fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    #[must_use]
    pub const fn with_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    #[must_use]
    pub const fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub const fn with_final(mut self) -> Self {
        self.is_final = true;
        self
    }
}

/// What kind of type declaration this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    AnnotationType,
}

impl TypeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::AnnotationType => "annotation-type",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deprecation state of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Deprecation {
    #[default]
    None,
    Deprecated,
    ForRemoval,
}

/// Which side may supply new implementations of a type.
///
/// | category | provider-inheritable | client-inheritable |
/// |---|---|---|
/// | `Default` | no | no |
/// | `Service` | yes | no |
/// | `Proxy` | yes | no |
/// | `Client` | no | yes |
/// | `TwoWay` | yes | yes |
///
/// A `Default` type may still be extended by other provider-side API types
/// when it is not final, but that is a collector constraint (see
/// [`IssueKind::UnusedInheritableType`](super::IssueKind::UnusedInheritableType)),
/// not an inheritance grant the comparator can rely on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Usage {
    #[default]
    Default,
    Service,
    Proxy,
    Client,
    TwoWay,
}

impl Usage {
    /// Provider-side code may implement or extend the type.
    #[must_use]
    pub const fn inheritable_by_provider(self) -> bool {
        matches!(self, Self::Service | Self::Proxy | Self::TwoWay)
    }

    /// Client-side code may implement or extend the type.
    #[must_use]
    pub const fn inheritable_by_client(self) -> bool {
        matches!(self, Self::Client | Self::TwoWay)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Service => "service",
            Self::Proxy => "proxy",
            Self::Client => "client",
            Self::TwoWay => "two-way",
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Structural snapshot of a published API surface.
//!
//! A [`Snapshot`] is produced once per build by a collector and is immutable
//! afterwards. Every entity exposes an identity key through [`Keyed`]; the
//! comparator matches entities across two snapshots by that key only, so
//! attributes outside the key (a method's return type, a field's declared
//! type) are free to change and are reported as modifications.
//!
//! ```
//! use api_compat::model::{ApiType, Method, Modifiers, SnapshotBuilder, TypeKind, Usage};
//! use api_compat::version::ApiVersion;
//!
//! let snapshot = SnapshotBuilder::new()
//!     .version(ApiVersion::new(1, 0, 0))
//!     .add_source("Widget.java", "interface Widget { void resize(int w); }")
//!     .add_type(
//!         ApiType::new("com.example.Widget", TypeKind::Interface)
//!             .with_usage(Usage::Service)
//!             .with_method(Method::new("resize", ["int"], "void").with_modifiers(Modifiers::public().with_abstract())),
//!     )
//!     .build();
//!
//! assert_eq!(snapshot.type_count(), 1);
//! ```

mod api_type;
mod keyed;
mod members;
mod modifiers;
mod snapshot;
mod validation;

pub use api_type::ApiType;
pub use keyed::{HasModifiers, Keyed, SurfaceEntity};
pub(crate) use keyed::keyed_seq;
pub use members::{ConstantValue, Field, Method, MethodSignature, TypeParameter};
pub use modifiers::{Deprecation, Modifiers, TypeKind, Usage, Visibility};
pub use snapshot::{ContentHash, Snapshot, SnapshotBuilder};
pub use validation::{IssueKind, ValidationIssue};

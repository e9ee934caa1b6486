//! Structural comparison of API snapshots.
//!
//! [`compare`] matches entities of two snapshots by identity key, applies the
//! ordered rule tables in [`rules`] to every matched pair and builds a
//! [`DiffNode`] tree annotated with per-node compatibility. The aggregate
//! verdict is the maximum over the whole tree.
//!
//! # Architecture
//!
//! - [`partition`]: generic three-way split of two keyed maps
//! - [`rules`]: per-entity and shared modifier rule tables
//! - [`Verdict`]: aggregate level plus the derived version
//! - [`compare_against_baselines`]: parallel comparison against many baselines
//!
//! # Example
//!
//! ```
//! use api_compat::diff::{compare, Verdict};
//! use api_compat::model::{ApiType, Method, SnapshotBuilder, TypeKind, Usage};
//! use api_compat::version::{ApiVersion, Compatibility};
//!
//! let widget = ApiType::new("com.example.Widget", TypeKind::Interface)
//!     .with_usage(Usage::Service)
//!     .with_method(Method::new("resize", ["int"], "void"));
//! let old = SnapshotBuilder::new()
//!     .version(ApiVersion::new(1, 0, 0))
//!     .add_type(widget.clone())
//!     .build();
//! let new = SnapshotBuilder::new()
//!     .add_type(widget.with_method(Method::new("resize", ["int", "int"], "void")))
//!     .build();
//!
//! let tree = compare(Some(&old), Some(&new));
//! let verdict = Verdict::derive(&tree, old.version);
//! assert_eq!(verdict.compatibility, Compatibility::Minor);
//! assert_eq!(verdict.new_version.to_string(), "1.1.0");
//! ```

mod engine;
mod multi;
mod node;
pub mod partition;
pub mod rules;
mod verdict;

pub use engine::compare;
pub use multi::{compare_against_baselines, BaselineComparison};
pub use node::{ChangeSummary, DiffKind, DiffNode, EntityKind};
pub use verdict::Verdict;

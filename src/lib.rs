//! **Structural API snapshot comparison and semantic version derivation.**
//!
//! `api-compat` compares two snapshots of a library's published API surface,
//! classifies every difference on a four-level compatibility scale
//! (`SAME < PATCH < MINOR < MAJOR`), derives the next version number from the
//! aggregate, and renders a human-readable change report.
//!
//! Snapshots are produced by a language-specific collector and handed to this
//! crate as data; extraction itself is out of scope.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the snapshot model. A [`Snapshot`] owns top-level
//!   [`ApiType`]s, which own their nested types, fields and methods.
//! - **[`diff`]**: the comparator. [`compare`] walks two snapshots and returns
//!   a [`DiffNode`] tree annotated with a compatibility level and notes.
//! - **[`version`]**: the [`Compatibility`] lattice and [`ApiVersion`]
//!   arithmetic.
//! - **[`reports`]**: text, summary and JSON renderers behind
//!   [`ReportGenerator`].
//! - **[`persist`]**: the versioned on-disk snapshot envelope.
//! - **[`pipeline`]**: the build step that strings everything together and
//!   writes the release outputs.
//!
//! ## Comparing Two Snapshots
//!
//! ```
//! use api_compat::model::{ApiType, Field, SnapshotBuilder, TypeKind};
//! use api_compat::version::{ApiVersion, Compatibility};
//! use api_compat::{compare, render_tree, Verdict};
//!
//! let old = SnapshotBuilder::new()
//!     .version(ApiVersion::new(1, 4, 0))
//!     .add_type(ApiType::new("com.example.Limits", TypeKind::Class))
//!     .build();
//! let new = SnapshotBuilder::new()
//!     .add_type(ApiType::new("com.example.Limits", TypeKind::Class).with_field(Field::new("max", "int")))
//!     .build();
//!
//! let tree = compare(Some(&old), Some(&new));
//! let verdict = Verdict::derive(&tree, old.version);
//!
//! assert_eq!(verdict.compatibility, Compatibility::Minor);
//! assert_eq!(verdict.new_version.to_string(), "1.5.0");
//! assert_eq!(render_tree(&tree), "  com.example.Limits\n  + int max\n");
//! ```
//!
//! ## Running the Build Step
//!
//! ```no_run
//! use api_compat::config::CheckConfigBuilder;
//! use api_compat::pipeline::run_check;
//! use std::path::PathBuf;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CheckConfigBuilder::new()
//!         .new_snapshot(PathBuf::from("target/api-snapshot.json"))
//!         .baseline(Some(PathBuf::from("published/api-snapshot.json")))
//!         .output_dir(PathBuf::from("build/api"))
//!         .build()?;
//!
//!     let outcome = run_check(&config)?;
//!     println!("{} -> {}", outcome.verdict.compatibility, outcome.verdict.new_version);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod persist;
pub mod pipeline;
pub mod reports;
pub mod utils;
pub mod version;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BaselineConfig, BehaviorConfig, OutputConfig};
pub use config::{CheckConfig, CheckConfigBuilder, DiffConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{compare, compare_against_baselines, DiffKind, DiffNode, EntityKind, Verdict};
pub use error::{ApiCompatError, ErrorContext, OptionContext, Result};
pub use model::{ApiType, Field, Method, Snapshot, SnapshotBuilder};
pub use reports::{render_tree, to_console_ascii, ReportFormat, ReportGenerator};
pub use version::{ApiVersion, Compatibility};

//! Shared utilities.

mod hash;

pub use hash::{content_hash, normalize_line_endings, source_unit_hash};

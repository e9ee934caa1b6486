//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod check;
mod diff;
mod multi;

pub use check::run_check;
pub use diff::run_diff;
pub use multi::run_diff_multi;

// Re-export config types used by handlers
pub use crate::config::{CheckConfig, DiffConfig};

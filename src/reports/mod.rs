//! Report generation for comparison results.
//!
//! This module provides multiple output formats for a diff tree and its
//! verdict:
//! - Text: the change tree plus compatibility status, as persisted to message.txt
//! - Summary: compact, colored shell output
//! - JSON: structured data for programmatic integration
//!
//! The tree renderer itself is [`render_tree`]; [`to_console_ascii`] makes any
//! report safe for consoles that cannot print emoji.

mod ascii;
mod json;
mod summary;
mod text;
mod types;

pub use ascii::to_console_ascii;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use text::{override_message, render_tree, status_message, TextReporter, ATTENTION_MARKER};
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::{DiffNode, Verdict};
use crate::error::{ApiCompatError, Result};
use std::io::Write;

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a diff tree and its verdict
    fn generate_report(&self, tree: &DiffNode, verdict: &Verdict, config: &ReportConfig) -> Result<String>;

    /// Write report to a writer
    fn write_report(
        &self,
        tree: &DiffNode,
        verdict: &Verdict,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let report = self.generate_report(tree, verdict, config)?;
        writer
            .write_all(report.as_bytes())
            .map_err(ApiCompatError::from)
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

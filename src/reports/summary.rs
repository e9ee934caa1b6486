//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::ascii::to_console_ascii;
use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::diff::{DiffNode, Verdict};
use crate::error::Result;
use crate::version::Compatibility;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn level_color(level: Compatibility) -> &'static str {
    match level {
        Compatibility::Major => "red",
        Compatibility::Minor => "yellow",
        Compatibility::Patch => "cyan",
        Compatibility::Same => "green",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_report(&self, tree: &DiffNode, verdict: &Verdict, config: &ReportConfig) -> Result<String> {
        let mut lines = Vec::new();

        lines.push(self.color("API Compatibility Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let level = verdict.compatibility;
        lines.push(format!(
            "{}  {}",
            self.color("Status:", "cyan"),
            self.color(level.label(), level_color(level))
        ));

        match verdict.old_version {
            Some(old) => lines.push(format!(
                "{}  {} → {}",
                self.color("Version:", "cyan"),
                old,
                verdict.new_version
            )),
            None => lines.push(format!(
                "{}  {} (override, checks skipped)",
                self.color("Version:", "cyan"),
                verdict.new_version
            )),
        }

        let summary = tree.summary();
        if summary.total() > 0 {
            lines.push(String::new());
            lines.push(self.color("Changes:", "bold"));
            if summary.added > 0 {
                lines.push(format!("  {} added", self.color(&format!("+{}", summary.added), "green")));
            }
            if summary.removed > 0 {
                lines.push(format!("  {} removed", self.color(&format!("-{}", summary.removed), "red")));
            }
            if summary.modified > 0 {
                lines.push(format!(
                    "  {} modified",
                    self.color(&format!("*{}", summary.modified), "yellow")
                ));
            }
            if summary.breaking > 0 {
                lines.push(format!(
                    "  {} breaking",
                    self.color(&summary.breaking.to_string(), "red")
                ));
            }
        } else if !verdict.is_override() && verdict.is_changed() {
            lines.push(String::new());
            lines.push(self.color("Surface unchanged, content changed", "dim"));
        }

        let report = lines.join("\n") + "\n";
        Ok(if config.ascii_only {
            to_console_ascii(&report) + "\n"
        } else {
            report
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

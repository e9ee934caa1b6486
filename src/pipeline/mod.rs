//! Pipeline orchestration for api-compat operations.
//!
//! This module provides the shared load → compare → report → write workflow
//! used by the CLI command handlers.

mod baseline;
mod check_stage;
mod diff_stage;
mod output;
mod report_stage;

pub use baseline::{resolve_baseline, Baseline};
pub use check_stage::{run_check, CheckOutcome};
pub use diff_stage::{compare_snapshots, SnapshotDiff};
pub use output::{
    should_use_color, version_file_contents, write_build_outputs, write_output, BuildOutputs,
    OutputTarget,
};
pub use report_stage::output_report;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - changes below the failure threshold (or no threshold set)
    pub const SUCCESS: i32 = 0;
    /// Aggregate compatibility reached the `--fail-on` level
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::CHANGES_DETECTED, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }
}

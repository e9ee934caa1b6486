//! Check command handler.
//!
//! Implements the `check` subcommand: the build step that compares the
//! collector's snapshot with the published baseline and writes the release
//! outputs.

use crate::config::{BehaviorConfig, CheckConfig, Validatable};
use crate::diff::Verdict;
use crate::pipeline::{self, exit_codes, output_report};
use anyhow::{bail, Result};

/// Run the check command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_check(config: CheckConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let listing: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration: {}", listing.join("; "));
    }

    let outcome = pipeline::run_check(&config)?;

    let old_path = if outcome.verdict.is_override() {
        None
    } else {
        config.paths.baseline.as_deref()
    };
    output_report(
        &config.output,
        config.behavior.quiet,
        &outcome.tree,
        &outcome.verdict,
        old_path,
        &config.paths.new,
    )?;

    if !config.behavior.quiet {
        tracing::info!(
            "Wrote {}, {} and {}",
            outcome.outputs.snapshot.display(),
            outcome.outputs.version.display(),
            outcome.outputs.message.display()
        );
    }

    Ok(determine_exit_code(&config.behavior, &outcome.verdict))
}

/// Determine the exit code from the verdict and the `fail_on` threshold.
///
/// An explicit reference version never fails the build.
pub(crate) fn determine_exit_code(behavior: &BehaviorConfig, verdict: &Verdict) -> i32 {
    if !verdict.is_override() && behavior.fails_on(verdict.compatibility) {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{ApiVersion, Compatibility};

    fn behavior(fail_on: Option<Compatibility>) -> BehaviorConfig {
        BehaviorConfig {
            fail_on,
            ..BehaviorConfig::default()
        }
    }

    #[test]
    fn test_exit_code_threshold() {
        let verdict = Verdict {
            compatibility: Compatibility::Minor,
            old_version: Some(ApiVersion::new(1, 0, 0)),
            new_version: ApiVersion::new(1, 1, 0),
        };
        assert_eq!(determine_exit_code(&behavior(None), &verdict), exit_codes::SUCCESS);
        assert_eq!(
            determine_exit_code(&behavior(Some(Compatibility::Minor)), &verdict),
            exit_codes::CHANGES_DETECTED
        );
        assert_eq!(
            determine_exit_code(&behavior(Some(Compatibility::Major)), &verdict),
            exit_codes::SUCCESS
        );
    }

    #[test]
    fn test_override_never_fails() {
        let verdict = Verdict::overridden(ApiVersion::new(5, 0, 0));
        assert_eq!(
            determine_exit_code(&behavior(Some(Compatibility::Patch)), &verdict),
            exit_codes::SUCCESS
        );
    }
}

//! Configuration validation command.

use super::common::{LoadOutcome, load_config, report_invalid};
use crate::formatters::format_output;
use anyhow::Result;
use forge_core::cli::{ExitCode, OutputFormat};
use forge_core::{ValidationIssue, ValidationWarning};
use serde::Serialize;
use std::path::Path;

/// Validation report for one configuration file.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Whether the configuration is acceptable
    pub valid: bool,
    /// Field-scoped violations (empty when valid)
    pub issues: Vec<ValidationIssue>,
    /// Non-fatal advisories
    pub warnings: Vec<ValidationWarning>,
}

/// Runs the validate command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or output formatting fails.
pub fn run(config_path: &Path, format: OutputFormat) -> Result<ExitCode> {
    match load_config(config_path)? {
        LoadOutcome::Valid(validated) => {
            let report = ValidationReport {
                valid: true,
                issues: vec![],
                warnings: validated.warnings,
            };
            println!("{}", format_output(&report, format)?);
            Ok(ExitCode::SUCCESS)
        }
        LoadOutcome::Invalid(issues) => {
            report_invalid(issues, format)?;
            Ok(ExitCode::VALIDATION_FAILURE)
        }
    }
}

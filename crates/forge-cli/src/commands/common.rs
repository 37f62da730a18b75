//! Shared helpers for commands that start from a configuration file.

use crate::formatters::format_output;
use anyhow::{Context, Result};
use forge_core::ValidationIssue;
use forge_core::cli::OutputFormat;
use forge_core::validate::{Validated, validate_json};
use serde::Serialize;
use std::path::Path;

/// Result of loading and validating a configuration file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The configuration passed validation
    Valid(Box<Validated>),
    /// The configuration failed validation with field-scoped issues
    Invalid(Vec<ValidationIssue>),
}

/// Reads a JSON configuration file and runs the validator over it.
///
/// Validation failures are a normal outcome, not an error; only unreadable
/// files and malformed JSON are errors.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_config(path: &Path) -> Result<LoadOutcome> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    Ok(match validate_json(&payload) {
        Ok(validated) => LoadOutcome::Valid(Box::new(validated)),
        Err(issues) => LoadOutcome::Invalid(issues),
    })
}

/// Report printed when a command rejects an invalid configuration.
#[derive(Debug, Serialize)]
pub struct InvalidConfigReport {
    /// Always false; present so JSON consumers can branch on it
    pub valid: bool,
    /// Field-scoped validation issues
    pub issues: Vec<ValidationIssue>,
}

/// Prints the standard invalid-configuration report.
///
/// # Errors
///
/// Returns an error if report serialization fails.
pub fn report_invalid(issues: Vec<ValidationIssue>, format: OutputFormat) -> Result<()> {
    let report = InvalidConfigReport {
        valid: false,
        issues,
    };
    println!("{}", format_output(&report, format)?);
    Ok(())
}

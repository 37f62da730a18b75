//! Platform listing command.

use crate::formatters::format_output;
use anyhow::Result;
use forge_core::cli::{ExitCode, OutputFormat};
use forge_deploy::PlatformRegistry;

/// Runs the platforms command: list the deployment platform registry.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn run(format: OutputFormat) -> Result<ExitCode> {
    let registry = PlatformRegistry::new();
    println!("{}", format_output(&registry.list(), format)?);
    Ok(ExitCode::SUCCESS)
}

//! Source generation command.

use super::common::{LoadOutcome, load_config, report_invalid};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use forge_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Report of generated files.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Directory the files were written into
    pub output: String,
    /// Filenames written, in render order
    pub files: Vec<String>,
}

/// Runs the generate command: render source + dependency manifest.
///
/// # Errors
///
/// Returns an error if loading, rendering, or writing fails.
pub fn run(config_path: &Path, output: &Path, format: OutputFormat) -> Result<ExitCode> {
    let validated = match load_config(config_path)? {
        LoadOutcome::Valid(validated) => validated,
        LoadOutcome::Invalid(issues) => {
            report_invalid(issues, format)?;
            return Ok(ExitCode::VALIDATION_FAILURE);
        }
    };

    let files = forge_codegen::render_package(&validated.config)?;
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    for file in &files {
        let target = output.join(&file.filename);
        fs::write(&target, &file.content)
            .with_context(|| format!("failed to write {}", target.display()))?;
    }

    let report = GenerateReport {
        output: output.display().to_string(),
        files: files.into_iter().map(|f| f.filename).collect(),
    };
    println!("{}", format_output(&report, format)?);
    Ok(ExitCode::SUCCESS)
}

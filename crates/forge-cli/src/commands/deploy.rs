//! Deployment manifest rendering command.

use super::common::{LoadOutcome, load_config, report_invalid};
use crate::formatters::format_output;
use anyhow::Result;
use forge_core::cli::{ExitCode, OutputFormat};
use forge_pack::{Assembler, FileSet};
use serde::Serialize;
use std::path::Path;

/// Report of rendered deployment manifests.
#[derive(Debug, Serialize)]
pub struct DeployReport {
    /// Platform the manifests target
    pub platform: String,
    /// Directory the manifests were written into
    pub output: String,
    /// Paths written, in order
    pub files: Vec<String>,
}

/// Runs the deploy command: render one platform's manifest set.
///
/// # Errors
///
/// Returns an error if the platform is unknown or rendering/writing fails.
pub fn run(
    config_path: &Path,
    platform: &str,
    output: &Path,
    format: OutputFormat,
) -> Result<ExitCode> {
    let validated = match load_config(config_path)? {
        LoadOutcome::Valid(validated) => validated,
        LoadOutcome::Invalid(issues) => {
            report_invalid(issues, format)?;
            return Ok(ExitCode::VALIDATION_FAILURE);
        }
    };

    let files = forge_deploy::render_deployment(&validated.config, platform)?;
    let mut set = FileSet::new();
    for file in &files {
        if file.executable {
            set.add_executable(&file.path, &file.content)?;
        } else {
            set.add(&file.path, &file.content)?;
        }
    }
    Assembler::stage(&set, output)?;

    let report = DeployReport {
        platform: platform.to_string(),
        output: output.display().to_string(),
        files: files.into_iter().map(|f| f.path).collect(),
    };
    println!("{}", format_output(&report, format)?);
    Ok(ExitCode::SUCCESS)
}

//! Full packaging pipeline command.

use super::common::{LoadOutcome, load_config, report_invalid};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use forge_core::cli::{ExitCode, OutputFormat};
use forge_deploy::{DeployContext, PlatformRegistry, render_base};
use forge_pack::{Assembler, FileSet};
use serde::Serialize;
use std::path::Path;

/// Report of the assembled archive.
#[derive(Debug, Serialize)]
pub struct PackageReport {
    /// Final archive location
    pub archive: String,
    /// Number of files in the archive
    pub members: usize,
    /// Archive size in bytes
    pub bytes: u64,
    /// Platforms whose manifests were included
    pub platforms: Vec<String>,
}

/// Runs the package command: validate, render everything, zip it.
///
/// Platform manifest sets are staged under `deploy/<id>/` so that two
/// platforms wanting the same filename (every one ships a `deploy.sh`)
/// cannot collide; any collision that does occur fails the whole run
/// before an archive appears.
///
/// # Errors
///
/// Returns an error on unknown platforms, path collisions, or rendering
/// and I/O failures. No archive is left at the output path on failure.
pub fn run(
    config_path: &Path,
    platforms: &[String],
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
    let config = &validated.config;

    // Resolve every platform before rendering anything
    let registry = PlatformRegistry::new();
    let resolved = platforms
        .iter()
        .map(|id| Ok((id.as_str(), registry.get(id)?)))
        .collect::<forge_core::Result<Vec<_>>>()?;

    let mut set = FileSet::new();
    for file in forge_codegen::render_package(config)? {
        set.add(file.filename, file.content)?;
    }
    for file in render_base(config) {
        add_generated(&mut set, "", &file)?;
    }
    let ctx = DeployContext::from_config(config);
    for (id, platform) in resolved {
        for file in platform.render(&ctx) {
            add_generated(&mut set, &format!("deploy/{id}/"), &file)?;
        }
    }

    let staging = tempfile::tempdir().context("failed to create staging directory")?;
    let handle = Assembler::assemble(&set, staging.path(), output)?;

    let report = PackageReport {
        archive: handle.path.display().to_string(),
        members: handle.members,
        bytes: handle.bytes,
        platforms: platforms.to_vec(),
    };
    println!("{}", format_output(&report, format)?);
    Ok(ExitCode::SUCCESS)
}

fn add_generated(
    set: &mut FileSet,
    prefix: &str,
    file: &forge_deploy::GeneratedFile,
) -> Result<()> {
    let path = format!("{prefix}{}", file.path);
    if file.executable {
        set.add_executable(path, &file.content)?;
    } else {
        set.add(path, &file.content)?;
    }
    Ok(())
}

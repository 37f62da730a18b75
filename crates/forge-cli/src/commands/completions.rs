//! Shell completion generation command.

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use forge_core::cli::ExitCode;
use std::io;

/// Runs the completions command.
///
/// Prints the completion script for `shell` to stdout.
///
/// # Errors
///
/// Infallible in practice; keeps the common command signature.
pub fn run(shell: Shell) -> Result<ExitCode> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}

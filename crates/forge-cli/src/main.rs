//! MCP Forge CLI.
//!
//! Command-line front end for validating wizard configurations, rendering
//! MCP server sources, and assembling distributable packages.
//!
//! # Examples
//!
//! ```bash
//! # Validate a configuration
//! mcp-forge validate weather.json
//!
//! # Generate the server source
//! mcp-forge generate weather.json --output ./out
//!
//! # Build the full package with two deployment targets
//! mcp-forge package weather.json --platform docker --platform flyio \
//!     --output weather.zip
//! ```

use anyhow::Result;
use clap::Parser;
use forge_cli::cli::{Cli, Commands};
use forge_cli::commands;
use forge_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::RUNTIME_FAILURE
        }
    };
    std::process::exit(exit_code.as_i32());
}

/// Parses the output format and dispatches the subcommand.
fn run(cli: Cli) -> Result<ExitCode> {
    let format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    match cli.command {
        Commands::Validate { config } => commands::validate::run(&config, format),
        Commands::Generate { config, output } => commands::generate::run(&config, &output, format),
        Commands::Deploy {
            config,
            platform,
            output,
        } => commands::deploy::run(&config, &platform, &output, format),
        Commands::Platforms => commands::platforms::run(format),
        Commands::Package {
            config,
            platforms,
            output,
        } => commands::package::run(&config, &platforms, &output, format),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

/// Initializes logging infrastructure.
///
/// Logs go to stderr so stdout stays clean for command output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

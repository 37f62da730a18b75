//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// MCP Forge - generate, validate, and package MCP servers.
///
/// Takes a JSON server configuration (name, target language, tools with
/// typed parameters) and renders a runnable MCP server plus packaging and
/// deployment artifacts.
#[derive(Parser, Debug)]
#[command(name = "mcp-forge")]
#[command(version, about, long_about = None)]
#[command(author = "MCP Forge Team")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a server configuration.
    ///
    /// Checks every field and reports all violations at once, each scoped
    /// to the offending field path (e.g. `tools[0].parameters[2].name`).
    ///
    /// # Examples
    ///
    /// ```bash
    /// mcp-forge validate weather.json
    /// mcp-forge validate weather.json --format json
    /// ```
    Validate {
        /// Path to the server configuration JSON
        config: PathBuf,
    },

    /// Generate the server source and dependency manifest.
    ///
    /// Renders `server.py` + `requirements.txt` (Python) or `server.js` +
    /// `package.json` (TypeScript/Node) into the output directory.
    ///
    /// # Examples
    ///
    /// ```bash
    /// mcp-forge generate weather.json --output ./out
    /// ```
    Generate {
        /// Path to the server configuration JSON
        config: PathBuf,

        /// Directory to write generated files into
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render deployment manifests for one platform.
    ///
    /// # Examples
    ///
    /// ```bash
    /// mcp-forge deploy weather.json --platform railway --output ./out
    /// ```
    Deploy {
        /// Path to the server configuration JSON
        config: PathBuf,

        /// Platform id (see `mcp-forge platforms`)
        #[arg(short, long)]
        platform: String,

        /// Directory to write manifests into
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List available deployment platforms.
    Platforms,

    /// Build the full distributable package as a ZIP archive.
    ///
    /// Runs the whole pipeline: validate, render source + manifest, add
    /// the base packaging artifacts, add one manifest set per requested
    /// platform (under `deploy/<id>/`), and write the archive.
    ///
    /// # Examples
    ///
    /// ```bash
    /// mcp-forge package weather.json --platform docker --platform flyio \
    ///     --output weather.zip
    /// ```
    Package {
        /// Path to the server configuration JSON
        config: PathBuf,

        /// Platform ids to include (repeatable)
        #[arg(short, long = "platform", num_args = 1)]
        platforms: Vec<String>,

        /// Path of the ZIP archive to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Generate shell completion scripts.
    ///
    /// Prints a completion script to stdout, which can be sourced or
    /// saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

//! Command implementations for the MCP Forge CLI.
//!
//! Each command module parses its arguments, executes the operation, and
//! formats output according to the requested format.

pub mod common;
pub mod completions;
pub mod deploy;
pub mod generate;
pub mod package;
pub mod platforms;
pub mod validate;

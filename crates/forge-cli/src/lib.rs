//! MCP Forge CLI library.
//!
//! Exposes the argument definitions, command implementations, and output
//! formatters so they can be tested outside the binary.

#![deny(unsafe_code)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod formatters;

//! Source generation for MCP server configurations.
//!
//! Lowers a validated [`forge_core::ServerConfig`] into a language-neutral
//! IR, then prints it as a runnable Python or TypeScript/Node server
//! using Handlebars templates.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod backend;
pub mod engine;
pub mod ir;
pub mod python;
pub mod typescript;

pub use backend::{Backend, SourceFile, backend_for, render, render_package};
pub use engine::TemplateEngine;
pub use ir::{ParamIr, ServerIr, ToolIr, lower};

//! Core types, validation, and errors for MCP Forge.
//!
//! This crate provides the foundational configuration model used across
//! the workspace: the validated [`ServerConfig`] snapshot, the closed
//! [`ParameterType`] set with its optional [`Constraints`] record, the
//! identifier normalization shared by every renderer, and the error
//! taxonomy.
//!
//! # Architecture
//!
//! - Strong domain types (`ServerConfig`, `Tool`, `Parameter`, `EntityId`)
//! - Field-scoped validation that collects every violation
//! - One normalization pass feeding both renderers and the packaging layer
//! - Error hierarchy distinguishing user mistakes from pipeline defects

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod ident;
mod types;

pub mod cli;
pub mod validate;

pub use error::{Error, Result, ValidationIssue, ValidationWarning};
pub use ident::{image_name, normalize_identifier};
pub use types::{
    Constraints, EntityId, Parameter, ParameterType, ServerConfig, ServerType, Tool,
};

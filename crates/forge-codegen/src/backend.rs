//! Backend selection and the renderer entry points.
//!
//! A [`Backend`] prints the lowered IR for one target language. The
//! type-mapping table has exactly one implementation per backend, and both
//! consume the same IR, so the two targets cannot silently diverge.

use crate::ir::{ServerIr, lower};
use crate::python::PythonBackend;
use crate::typescript::TypeScriptBackend;
use forge_core::{Result, ServerConfig, ServerType};
use serde::Serialize;

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// File name relative to the package root (e.g. `server.py`)
    pub filename: String,
    /// Complete file content
    pub content: String,
}

impl SourceFile {
    /// Creates a source file.
    #[must_use]
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// A target-language printer for the lowered IR.
pub trait Backend: std::fmt::Debug {
    /// The target language this backend prints.
    fn language(&self) -> ServerType;

    /// Renders the server source file.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    fn source(&self, ir: &ServerIr) -> Result<SourceFile>;

    /// Renders the dependency manifest (`requirements.txt` / `package.json`).
    ///
    /// # Errors
    ///
    /// Returns error if manifest construction fails.
    fn manifest(&self, ir: &ServerIr) -> Result<SourceFile>;
}

/// Returns the backend for a server type.
///
/// # Errors
///
/// Returns error if backend construction (template registration) fails.
/// Selection itself is total: `ServerType` is a closed enum, so an unknown
/// target can never reach this point — it fails closed at validation.
pub fn backend_for(ty: ServerType) -> Result<Box<dyn Backend>> {
    match ty {
        ServerType::Python => Ok(Box::new(PythonBackend::new()?)),
        ServerType::TypeScript => Ok(Box::new(TypeScriptBackend::new()?)),
    }
}

/// Renders the server source file for a configuration.
///
/// Pure with respect to its input: identical configurations produce
/// byte-identical output. Zero tools is not an error; the result is a
/// syntactically valid server that registers nothing.
///
/// # Errors
///
/// Returns error if lowering or template rendering fails. For a validated
/// config neither can happen.
pub fn render(config: &ServerConfig) -> Result<SourceFile> {
    let ir = lower(config)?;
    let backend = backend_for(config.server_type)?;
    tracing::info!(
        server = %config.server_name,
        target = %config.server_type,
        tool_count = ir.tools.len(),
        "rendering server source"
    );
    backend.source(&ir)
}

/// Renders the source file plus the dependency manifest.
///
/// # Errors
///
/// Same failure modes as [`render`].
pub fn render_package(config: &ServerConfig) -> Result<Vec<SourceFile>> {
    let ir = lower(config)?;
    let backend = backend_for(config.server_type)?;
    Ok(vec![backend.source(&ir)?, backend.manifest(&ir)?])
}

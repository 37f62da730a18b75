//! Derived deployment facts shared by every platform renderer.

use forge_core::{ServerConfig, ServerType, image_name, normalize_identifier};
use serde::Serialize;

/// Everything a platform renderer needs, computed once from the config.
///
/// All derived names flow from the same normalization pass, so a
/// Dockerfile tag and the compose/fly/railway references that point at it
/// can never disagree.
#[derive(Debug, Clone, Serialize)]
pub struct DeployContext {
    /// Human-readable server name as configured
    pub display_name: String,
    /// Server description as configured
    pub description: String,
    /// Normalized snake_case identifier
    pub ident: String,
    /// Container image name (kebab-case)
    pub image: String,
    /// Target language of the generated server
    pub server_type: ServerType,
    /// Source entrypoint (`server.py` / `server.js`)
    pub entrypoint: &'static str,
    /// Command that starts the server (`python server.py` / `node server.js`)
    pub runtime_command: &'static str,
}

impl DeployContext {
    /// Derives the context from a validated configuration.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            display_name: config.server_name.clone(),
            description: config.description.clone(),
            ident: normalize_identifier(&config.server_name),
            image: image_name(&config.server_name),
            server_type: config.server_type,
            entrypoint: config.server_type.entrypoint(),
            runtime_command: config.server_type.runtime_command(),
        }
    }
}

/// One file produced by a deployment or packaging renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Path relative to the package root
    pub path: String,
    /// Complete file content
    pub content: String,
    /// Whether the file needs the executable bit on Unix
    pub executable: bool,
}

impl GeneratedFile {
    /// Creates a regular file.
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            executable: false,
        }
    }

    /// Creates a file that should be marked executable.
    #[must_use]
    pub fn executable(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            executable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_names_share_one_normalization() {
        let config = ServerConfig::new(
            "Weather Data Provider",
            ServerType::Python,
            "Forecast data",
            vec![],
        );
        let ctx = DeployContext::from_config(&config);
        assert_eq!(ctx.ident, "weather_data_provider");
        assert_eq!(ctx.image, "weather-data-provider");
        assert_eq!(ctx.entrypoint, "server.py");
        assert_eq!(ctx.runtime_command, "python server.py");
    }

    #[test]
    fn test_typescript_runtime_command() {
        let config = ServerConfig::new("Notes", ServerType::TypeScript, "", vec![]);
        let ctx = DeployContext::from_config(&config);
        assert_eq!(ctx.entrypoint, "server.js");
        assert_eq!(ctx.runtime_command, "node server.js");
    }
}

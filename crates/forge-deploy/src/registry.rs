//! The platform trait and its closed registry.

use crate::context::{DeployContext, GeneratedFile};
use crate::docker::DockerPlatform;
use crate::flyio::FlyioPlatform;
use crate::railway::RailwayPlatform;
use forge_core::{Error, Result};
use serde::Serialize;

/// A deployment target that can render its manifest set.
pub trait Platform: std::fmt::Debug + Send + Sync {
    /// Stable registry key (e.g. `railway`).
    fn id(&self) -> &'static str;

    /// Human-readable platform name.
    fn display_name(&self) -> &'static str;

    /// Environment variables the user must provide before deploying.
    ///
    /// Manifests reference these as `${VAR}` placeholders only; no renderer
    /// ever embeds a credential value.
    fn required_credentials(&self) -> &'static [&'static str];

    /// Renders the platform's manifest files for one server.
    fn render(&self, ctx: &DeployContext) -> Vec<GeneratedFile>;
}

/// Summary row for `platforms` listings.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformInfo {
    /// Registry key
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Required credential environment variables
    pub credentials: Vec<&'static str>,
}

/// Closed set of built-in deployment targets.
///
/// Lookup is exact: an unknown id is an error, never a silent fallback to
/// some default platform.
#[derive(Debug)]
pub struct PlatformRegistry {
    platforms: Vec<Box<dyn Platform>>,
}

impl PlatformRegistry {
    /// Creates the registry with all built-in platforms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            platforms: vec![
                Box::new(DockerPlatform),
                Box::new(RailwayPlatform),
                Box::new(FlyioPlatform),
            ],
        }
    }

    /// Looks up a platform by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlatformNotFound`] if no platform has this id.
    pub fn get(&self, id: &str) -> Result<&dyn Platform> {
        self.platforms
            .iter()
            .map(AsRef::as_ref)
            .find(|p| p.id() == id)
            .ok_or_else(|| Error::PlatformNotFound {
                platform: id.to_string(),
            })
    }

    /// Lists every registered platform in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<PlatformInfo> {
        self.platforms
            .iter()
            .map(|p| PlatformInfo {
                id: p.id(),
                name: p.display_name(),
                credentials: p.required_credentials().to_vec(),
            })
            .collect()
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

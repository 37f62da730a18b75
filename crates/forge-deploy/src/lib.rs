//! Deployment manifest rendering for MCP Forge.
//!
//! Turns a validated server configuration into per-platform manifest sets
//! (container descriptors, process manifests, setup scripts) plus the
//! platform-independent packaging artifacts. All renderers are pure: the
//! same configuration always yields byte-identical files.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod base;
mod context;
mod docker;
mod flyio;
mod railway;
mod registry;

pub use base::render_base;
pub use context::{DeployContext, GeneratedFile};
pub use registry::{Platform, PlatformInfo, PlatformRegistry};

use forge_core::{Result, ServerConfig};

/// Renders one platform's manifest set for a configuration.
///
/// # Errors
///
/// Returns [`forge_core::Error::PlatformNotFound`] for an unknown id; in
/// that case no files are produced.
pub fn render_deployment(config: &ServerConfig, platform_id: &str) -> Result<Vec<GeneratedFile>> {
    let registry = PlatformRegistry::new();
    let platform = registry.get(platform_id)?;
    let ctx = DeployContext::from_config(config);
    tracing::info!(
        server = %ctx.ident,
        platform = platform_id,
        "rendering deployment manifests"
    );
    Ok(platform.render(&ctx))
}

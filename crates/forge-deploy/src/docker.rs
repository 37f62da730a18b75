//! Plain Docker / docker-compose deployment target.

use crate::base::{dockerfile, sh_quote};
use crate::context::{DeployContext, GeneratedFile};
use crate::registry::Platform;

/// Self-hosted deployment with Docker and docker-compose.
#[derive(Debug)]
pub struct DockerPlatform;

impl Platform for DockerPlatform {
    fn id(&self) -> &'static str {
        "docker"
    }

    fn display_name(&self) -> &'static str {
        "Docker (self-hosted)"
    }

    fn required_credentials(&self) -> &'static [&'static str] {
        &[]
    }

    fn render(&self, ctx: &DeployContext) -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new("Dockerfile", dockerfile(ctx)),
            GeneratedFile::new("docker-compose.yml", compose(ctx)),
            GeneratedFile::executable("deploy.sh", deploy_script(ctx)),
            GeneratedFile::new("SETUP.md", setup(ctx)),
        ]
    }
}

fn compose(ctx: &DeployContext) -> String {
    format!(
        "services:\n  \
           {ident}:\n    \
             image: {image}\n    \
             build: .\n    \
             stdin_open: true\n    \
             restart: unless-stopped\n",
        ident = ctx.ident,
        image = ctx.image,
    )
}

fn deploy_script(ctx: &DeployContext) -> String {
    format!(
        "#!/usr/bin/env bash\n\
         set -euo pipefail\n\n\
         docker build -t {image} .\n\
         docker compose up -d\n\n\
         echo {status}\n\
         echo \"  docker run --rm -i {image}\"\n",
        image = ctx.image,
        status = sh_quote(&format!(
            "{} is running. Attach an MCP client over stdio with:",
            ctx.display_name
        )),
    )
}

fn setup(ctx: &DeployContext) -> String {
    format!(
        "# Deploying {name} with Docker\n\n\
         1. Install Docker (https://docs.docker.com/get-docker/).\n\
         2. Run `./deploy.sh` from this directory.\n\
         3. Connect your MCP client with `docker run --rm -i {image}`.\n\n\
         No credentials are required for a local Docker deployment.\n",
        name = ctx.display_name,
        image = ctx.image,
    )
}

//! Fly.io deployment target.

use crate::base::{dockerfile, sh_quote};
use crate::context::{DeployContext, GeneratedFile};
use crate::registry::Platform;

/// Hosted deployment on Fly.io.
#[derive(Debug)]
pub struct FlyioPlatform;

impl Platform for FlyioPlatform {
    fn id(&self) -> &'static str {
        "flyio"
    }

    fn display_name(&self) -> &'static str {
        "Fly.io"
    }

    fn required_credentials(&self) -> &'static [&'static str] {
        &["FLY_API_TOKEN"]
    }

    fn render(&self, ctx: &DeployContext) -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new("Dockerfile", dockerfile(ctx)),
            GeneratedFile::new("fly.toml", fly_toml(ctx)),
            GeneratedFile::executable("deploy.sh", deploy_script(ctx)),
            GeneratedFile::new("SETUP.md", setup(ctx)),
        ]
    }
}

fn fly_toml(ctx: &DeployContext) -> String {
    format!(
        "app = \"{image}\"\n\n\
         [build]\n  \
           dockerfile = \"Dockerfile\"\n\n\
         [processes]\n  \
           server = \"{run}\"\n\n\
         [[vm]]\n  \
           size = \"shared-cpu-1x\"\n",
        image = ctx.image,
        run = ctx.runtime_command,
    )
}

fn deploy_script(ctx: &DeployContext) -> String {
    format!(
        "#!/usr/bin/env bash\n\
         set -euo pipefail\n\n\
         : \"${{FLY_API_TOKEN:?Set FLY_API_TOKEN before deploying}}\"\n\n\
         flyctl deploy --app {image}\n\n\
         echo {status}\n",
        image = ctx.image,
        status = sh_quote(&format!("{} deployed to Fly.io.", ctx.display_name)),
    )
}

fn setup(ctx: &DeployContext) -> String {
    format!(
        "# Deploying {name} to Fly.io\n\n\
         1. Install flyctl (https://fly.io/docs/flyctl/install/).\n\
         2. Create a deploy token and export it:\n\
            `export FLY_API_TOKEN=<YOUR-FLY-TOKEN>`\n\
         3. Run `./deploy.sh` from this directory.\n\n\
         The app name in `fly.toml` is `{image}`; change it there if the\n\
         name is already taken on Fly.io.\n",
        name = ctx.display_name,
        image = ctx.image,
    )
}

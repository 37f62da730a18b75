//! Railway deployment target.

use crate::base::{dockerfile, sh_quote};
use crate::context::{DeployContext, GeneratedFile};
use crate::registry::Platform;

/// Hosted deployment on Railway (https://railway.app).
#[derive(Debug)]
pub struct RailwayPlatform;

impl Platform for RailwayPlatform {
    fn id(&self) -> &'static str {
        "railway"
    }

    fn display_name(&self) -> &'static str {
        "Railway"
    }

    fn required_credentials(&self) -> &'static [&'static str] {
        &["RAILWAY_TOKEN"]
    }

    fn render(&self, ctx: &DeployContext) -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new("Dockerfile", dockerfile(ctx)),
            GeneratedFile::new("railway.json", railway_json(ctx)),
            GeneratedFile::executable("deploy.sh", deploy_script(ctx)),
            GeneratedFile::new("SETUP.md", setup(ctx)),
        ]
    }
}

fn railway_json(ctx: &DeployContext) -> String {
    let manifest = serde_json::json!({
        "$schema": "https://railway.app/railway.schema.json",
        "build": {
            "builder": "DOCKERFILE",
            "dockerfilePath": "Dockerfile"
        },
        "deploy": {
            "startCommand": ctx.runtime_command,
            "restartPolicyType": "ON_FAILURE",
            "restartPolicyMaxRetries": 3
        }
    });
    // json! with only literal keys cannot fail to serialize
    let mut content = serde_json::to_string_pretty(&manifest).unwrap_or_default();
    content.push('\n');
    content
}

fn deploy_script(ctx: &DeployContext) -> String {
    format!(
        "#!/usr/bin/env bash\n\
         set -euo pipefail\n\n\
         : \"${{RAILWAY_TOKEN:?Set RAILWAY_TOKEN before deploying}}\"\n\n\
         railway up --service {image}\n\n\
         echo {status}\n",
        image = ctx.image,
        status = sh_quote(&format!("{} deployed to Railway.", ctx.display_name)),
    )
}

fn setup(ctx: &DeployContext) -> String {
    format!(
        "# Deploying {name} to Railway\n\n\
         1. Install the Railway CLI: `npm install -g @railway/cli`.\n\
         2. Create a project token in the Railway dashboard and export it:\n\
            `export RAILWAY_TOKEN=<YOUR-RAILWAY-TOKEN>`\n\
         3. Run `./deploy.sh` from this directory.\n\n\
         The build uses the bundled Dockerfile; the service starts with\n\
         `{run}`.\n",
        name = ctx.display_name,
        run = ctx.runtime_command,
    )
}

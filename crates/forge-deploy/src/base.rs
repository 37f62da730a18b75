//! Packaging artifacts every server gets regardless of platform choice.

use crate::context::{DeployContext, GeneratedFile};
use forge_core::{ServerConfig, ServerType};

/// Renders the platform-independent packaging files.
///
/// Which files appear, and their contents, depend only on `server_type`;
/// no user choice adds or removes a file here.
#[must_use]
pub fn render_base(config: &ServerConfig) -> Vec<GeneratedFile> {
    let ctx = DeployContext::from_config(config);
    tracing::debug!(server = %ctx.ident, target = %ctx.server_type, "rendering base artifacts");
    vec![
        GeneratedFile::new("Dockerfile", dockerfile(&ctx)),
        GeneratedFile::executable("install.sh", install_script(&ctx)),
        GeneratedFile::new("README.md", readme(&ctx)),
    ]
}

/// Container build file for the server's runtime.
pub(crate) fn dockerfile(ctx: &DeployContext) -> String {
    match ctx.server_type {
        ServerType::Python => format!(
            "FROM python:3.12-slim\n\n\
             WORKDIR /app\n\n\
             COPY requirements.txt .\n\
             RUN pip install --no-cache-dir -r requirements.txt\n\n\
             COPY {entry} .\n\n\
             CMD [\"python\", \"{entry}\"]\n",
            entry = ctx.entrypoint,
        ),
        ServerType::TypeScript => format!(
            "FROM node:20-slim\n\n\
             WORKDIR /app\n\n\
             COPY package.json .\n\
             RUN npm install --omit=dev\n\n\
             COPY {entry} .\n\n\
             CMD [\"node\", \"{entry}\"]\n",
            entry = ctx.entrypoint,
        ),
    }
}

fn install_script(ctx: &DeployContext) -> String {
    let install = match ctx.server_type {
        ServerType::Python => "pip install -r requirements.txt",
        ServerType::TypeScript => "npm install",
    };
    format!(
        "#!/usr/bin/env bash\n\
         set -euo pipefail\n\n\
         echo {greeting}\n\
         {install}\n\n\
         echo {done}\n",
        greeting = sh_quote(&format!(
            "Installing dependencies for {}...",
            ctx.display_name
        )),
        install = install,
        done = sh_quote(&format!(
            "Done. Start the server with: {}",
            ctx.runtime_command
        )),
    )
}

/// Single-quotes text for interpolation into a generated shell script.
///
/// Display names are raw user input and may carry double quotes, `$(...)`,
/// or backticks; inside single quotes the shell treats all of them as
/// literal text. Embedded single quotes become `'\''`.
pub(crate) fn sh_quote(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "'\\''"))
}

fn readme(ctx: &DeployContext) -> String {
    format!(
        "# {name}\n\n\
         {description}\n\n\
         Generated MCP server ({lang}).\n\n\
         ## Quick start\n\n\
         ```sh\n\
         ./install.sh\n\
         {run}\n\
         ```\n\n\
         ## Docker\n\n\
         ```sh\n\
         docker build -t {image} .\n\
         docker run --rm -i {image}\n\
         ```\n\n\
         The server speaks MCP over stdio. Point your MCP client at the\n\
         command above, or see the files under `deploy/` for hosted options.\n",
        name = ctx.display_name,
        description = ctx.description,
        lang = ctx.server_type,
        run = ctx.runtime_command,
        image = ctx.image,
    )
}

//! TypeScript/Node backend: Zod schemas and tool registrations.
//!
//! Emits a single `server.js` (plain ESM, runnable by `node` directly)
//! that builds one Zod schema per tool and registers each tool against the
//! MCP SDK server. Constraints translate to Zod modifier chains
//! (`.min()`, `.max()`, `.regex()`, `.email()`, ...).

use crate::backend::{Backend, SourceFile};
use crate::engine::TemplateEngine;
use crate::ir::{ParamIr, ServerIr, ToolIr};
use forge_core::{ParameterType, Result, ServerType, image_name};
use serde::Serialize;

/// Printer for the TypeScript/Node target.
#[derive(Debug)]
pub struct TypeScriptBackend {
    engine: TemplateEngine<'static>,
}

#[derive(Debug, Serialize)]
struct ServerContext {
    name: String,
    header_name: String,
    header_description: String,
    tools: Vec<ToolContext>,
}

#[derive(Debug, Serialize)]
struct ToolContext {
    ident: String,
    doc: String,
    params: Vec<ParamContext>,
    args: String,
    implementation: Option<String>,
}

#[derive(Debug, Serialize)]
struct ParamContext {
    ident: String,
    schema: String,
}

impl TypeScriptBackend {
    /// Creates the backend with its templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    fn build_context(ir: &ServerIr) -> ServerContext {
        ServerContext {
            name: escape_string(&ir.display_name),
            header_name: comment_safe(&ir.display_name),
            header_description: comment_safe(&ir.description),
            tools: ir.tools.iter().map(build_tool_context).collect(),
        }
    }
}

impl Backend for TypeScriptBackend {
    fn language(&self) -> ServerType {
        ServerType::TypeScript
    }

    fn source(&self, ir: &ServerIr) -> Result<SourceFile> {
        let context = Self::build_context(ir);
        let content = self.engine.render("typescript/server", &context)?;
        tracing::debug!(server = %ir.ident, "rendered server.js");
        Ok(SourceFile::new("server.js", content))
    }

    fn manifest(&self, ir: &ServerIr) -> Result<SourceFile> {
        let manifest = serde_json::json!({
            "name": image_name(&ir.display_name),
            "version": "1.0.0",
            "description": ir.description,
            "type": "module",
            "main": "server.js",
            "scripts": {
                "start": "node server.js"
            },
            "dependencies": {
                "@modelcontextprotocol/sdk": "^1.0.0",
                "zod": "^3.23.0"
            }
        });
        let content = serde_json::to_string_pretty(&manifest).map_err(|e| {
            forge_core::Error::Serialization {
                message: "failed to serialize package.json".to_string(),
                source: Some(e),
            }
        })?;
        Ok(SourceFile::new("package.json", format!("{content}\n")))
    }
}

fn build_tool_context(tool: &ToolIr) -> ToolContext {
    let params: Vec<ParamContext> = tool
        .params
        .iter()
        .map(|p| ParamContext {
            ident: p.ident.clone(),
            schema: zod_schema(p),
        })
        .collect();

    let args = tool
        .params
        .iter()
        .map(|p| p.ident.clone())
        .collect::<Vec<_>>()
        .join(", ");

    ToolContext {
        ident: tool.ident.clone(),
        doc: escape_string(&tool.description),
        params,
        args,
        implementation: tool.implementation.as_deref().map(|body| indent(body, 4)),
    }
}

/// Builds the complete Zod expression for one parameter.
///
/// Base construct and modifier chain per the type-mapping table; always
/// ends with `.describe()`, then `.default()` or `.optional()` as the
/// constraint record dictates.
fn zod_schema(param: &ParamIr) -> String {
    let mut schema = base_schema(param);

    // Length/bound/pattern modifiers apply to string- and number-shaped
    // schemas only; the validator already screened nonsensical combinations.
    match param.ty {
        ParameterType::String | ParameterType::Email | ParameterType::Url | ParameterType::Date => {
            if let Some(min) = param.constraints.min_length {
                schema.push_str(&format!(".min({min})"));
            }
            if let Some(max) = param.constraints.max_length {
                schema.push_str(&format!(".max({max})"));
            }
            if let Some(pattern) = &param.constraints.pattern {
                // A string literal, not a /.../ literal: patterns may contain
                // sequences ("\/", raw newlines) that terminate or break a
                // regex literal but are inert inside a quoted string.
                schema.push_str(&format!(
                    ".regex(new RegExp(\"{}\"))",
                    escape_string(pattern)
                ));
            }
        }
        ParameterType::Number | ParameterType::Integer => {
            if let Some(min) = param.constraints.minimum {
                schema.push_str(&format!(".min({})", number_literal(min)));
            }
            if let Some(max) = param.constraints.maximum {
                schema.push_str(&format!(".max({})", number_literal(max)));
            }
        }
        _ => {}
    }

    schema.push_str(&format!(
        ".describe(\"{}\")",
        escape_string(&param.description)
    ));

    if let Some(default) = &param.constraints.default {
        schema.push_str(&format!(".default({})", js_literal(default)));
    } else if !param.required {
        schema.push_str(".optional()");
    }

    schema
}

/// Maps a parameter type to its base Zod construct.
///
/// Total over [`ParameterType`]: every variant yields a non-empty schema.
fn base_schema(param: &ParamIr) -> String {
    match param.ty {
        ParameterType::String => "z.string()".to_string(),
        ParameterType::Number => "z.number()".to_string(),
        ParameterType::Integer => "z.number().int()".to_string(),
        ParameterType::Boolean => "z.boolean()".to_string(),
        ParameterType::Object => "z.record(z.string(), z.unknown())".to_string(),
        ParameterType::Array => "z.array(z.unknown())".to_string(),
        ParameterType::Date => "z.string().date()".to_string(),
        ParameterType::Email => "z.string().email()".to_string(),
        ParameterType::Url => "z.string().url()".to_string(),
        ParameterType::Enum => {
            let values = param
                .constraints
                .enum_values
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|v| format!("\"{}\"", escape_string(v)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("z.enum([{values}])")
        }
    }
}

/// Escapes text for embedding in a double-quoted JavaScript string.
///
/// Backticks and `$` are escaped too, so the same text stays inert if a
/// user later moves it into a template literal.
fn escape_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '`' => out.push_str("\\`"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Makes text safe inside a `/* ... */` block comment header.
fn comment_safe(raw: &str) -> String {
    raw.replace("*/", "* /").replace(['\n', '\r'], " ")
}

/// Renders a JSON default value as a JavaScript literal.
fn js_literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => format!("\"{}\"", escape_string(s)),
        other => other.to_string(),
    }
}

/// Formats a numeric bound without a trailing `.0` for whole numbers.
#[allow(clippy::cast_possible_truncation)] // fract() == 0.0 and |value| < 1e15
fn number_literal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn indent(body: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    body.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

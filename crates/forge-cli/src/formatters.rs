//! Output formatters for CLI commands.
//!
//! Provides consistent formatting across all CLI commands for JSON, text,
//! and pretty output modes.

use anyhow::Result;
use colored::Colorize;
use forge_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(serde_json::to_string(data)?),
        OutputFormat::Pretty => {
            let value = serde_json::to_value(data)?;
            Ok(pretty_value(&value, 0))
        }
    }
}

/// Recursively formats a JSON value with colors and indentation.
fn pretty_value(value: &serde_json::Value, indent: usize) -> String {
    use serde_json::Value;

    let pad = "  ".repeat(indent);
    let inner_pad = "  ".repeat(indent + 1);

    match value {
        Value::Null => "null".dimmed().to_string(),
        Value::Bool(b) => b.to_string().yellow().to_string(),
        Value::Number(n) => n.to_string().cyan().to_string(),
        Value::String(s) => format!("\"{}\"", s.green()),
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let body = items
                .iter()
                .map(|item| format!("{inner_pad}{}", pretty_value(item, indent + 1)))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("[\n{body}\n{pad}]")
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let body = map
                .iter()
                .map(|(key, val)| {
                    format!(
                        "{inner_pad}\"{}\": {}",
                        key.blue().bold(),
                        pretty_value(val, indent + 1)
                    )
                })
                .collect::<Vec<_>>()
                .join(",\n");
            format!("{{\n{body}\n{pad}}}")
        }
    }
}

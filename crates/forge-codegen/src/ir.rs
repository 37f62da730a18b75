//! Target-language-agnostic intermediate representation.
//!
//! One lowering pass turns a [`ServerConfig`] into a [`ServerIr`] that both
//! backend printers consume. Normalization and collision handling happen
//! here, once, so the two backends can never drift on what a tool is
//! called or which parameters it takes.
//!
//! # Examples
//!
//! ```
//! use forge_codegen::ir::lower;
//! use forge_core::{Parameter, ParameterType, ServerConfig, ServerType, Tool};
//!
//! let config = ServerConfig::new(
//!     "Weather Data Provider",
//!     ServerType::Python,
//!     "Forecast data",
//!     vec![Tool::new(
//!         "get current weather",
//!         "Current conditions",
//!         vec![Parameter::new("city name", ParameterType::String, "City")],
//!     )],
//! );
//!
//! let ir = lower(&config).unwrap();
//! assert_eq!(ir.ident, "weather_data_provider");
//! assert_eq!(ir.tools[0].ident, "get_current_weather");
//! assert_eq!(ir.tools[0].params[0].ident, "city_name");
//! ```

use forge_core::{
    Constraints, Error, ParameterType, Result, ServerConfig, normalize_identifier,
};
use std::collections::HashSet;

/// Lowered server description, ready for backend printing.
#[derive(Debug, Clone)]
pub struct ServerIr {
    /// Original display name, embedded verbatim (escaped) in output
    pub display_name: String,
    /// Normalized identifier for generated artifacts
    pub ident: String,
    /// Free-text server description
    pub description: String,
    /// Lowered tools, in configuration order
    pub tools: Vec<ToolIr>,
}

/// Lowered tool description.
#[derive(Debug, Clone)]
pub struct ToolIr {
    /// Normalized, collision-free identifier
    pub ident: String,
    /// Original display name
    pub display_name: String,
    /// Free-text description
    pub description: String,
    /// Lowered parameters, in configuration order
    pub params: Vec<ParamIr>,
    /// Opaque externally drafted handler body, spliced verbatim
    pub implementation: Option<String>,
}

/// Lowered parameter description.
#[derive(Debug, Clone)]
pub struct ParamIr {
    /// Normalized, collision-free identifier
    pub ident: String,
    /// Free-text description
    pub description: String,
    /// Parameter type
    pub ty: ParameterType,
    /// Constraint record; defaulted (all-absent) when none supplied
    pub constraints: Constraints,
    /// Whether the caller must supply the parameter
    pub required: bool,
}

/// Lowers a configuration into the intermediate representation.
///
/// Identifiers that collide after normalization are de-duplicated with
/// `_2`, `_3`, ... suffixes. The validator rejects such configs, but a
/// hand-built [`ServerConfig`] that bypassed validation must still render
/// syntactically valid code.
///
/// # Errors
///
/// Returns [`Error::Render`] when a name normalizes to the empty string.
/// For a validated config this cannot happen; hitting it indicates a
/// validator completeness defect.
pub fn lower(config: &ServerConfig) -> Result<ServerIr> {
    let server_ident = normalize_identifier(&config.server_name);
    if server_ident.is_empty() {
        return Err(Error::Render {
            entity: config.server_name.clone(),
            stage: "lowering".to_string(),
            message: "server name normalized to an empty identifier".to_string(),
        });
    }

    let mut seen_tools = HashSet::new();
    let mut tools = Vec::with_capacity(config.tools.len());

    for tool in &config.tools {
        let base = normalize_identifier(&tool.name);
        if base.is_empty() {
            return Err(Error::Render {
                entity: tool.name.clone(),
                stage: "lowering".to_string(),
                message: "tool name normalized to an empty identifier".to_string(),
            });
        }
        let ident = deduplicate(&escape_reserved(base), &mut seen_tools);

        let mut seen_params = HashSet::new();
        let mut params = Vec::with_capacity(tool.parameters.len());
        for param in &tool.parameters {
            let param_base = normalize_identifier(&param.name);
            if param_base.is_empty() {
                return Err(Error::Render {
                    entity: format!("{}.{}", tool.name, param.name),
                    stage: "lowering".to_string(),
                    message: "parameter name normalized to an empty identifier".to_string(),
                });
            }
            let param_ident = deduplicate(&escape_reserved(param_base), &mut seen_params);

            let constraints = param.constraints.clone().unwrap_or_default();
            // A supplied default means the caller may omit the parameter;
            // both backends then render a defaulted, optional binding.
            let required = constraints.is_required() && constraints.default.is_none();

            params.push(ParamIr {
                ident: param_ident,
                description: param.description.clone(),
                ty: param.ty,
                constraints,
                required,
            });
        }

        tools.push(ToolIr {
            ident,
            display_name: tool.name.clone(),
            description: tool.description.clone(),
            params,
            implementation: tool.implementation.clone(),
        });
    }

    Ok(ServerIr {
        display_name: config.server_name.clone(),
        ident: server_ident,
        description: config.description.clone(),
        tools,
    })
}

/// Keywords in Python or JavaScript that a normalized name can collide
/// with. A tool or parameter called `class` or `function` passes every
/// validation rule but would render invalid code, so lowering appends `_`.
const RESERVED: &[&str] = &[
    "and",
    "arguments",
    "as",
    "assert",
    "async",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "def",
    "default",
    "del",
    "delete",
    "do",
    "elif",
    "else",
    "enum",
    "eval",
    "except",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "from",
    "function",
    "global",
    "if",
    "import",
    "in",
    "instanceof",
    "is",
    "lambda",
    "let",
    "new",
    "none",
    "nonlocal",
    "not",
    "null",
    "or",
    "pass",
    "raise",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

fn escape_reserved(base: String) -> String {
    if RESERVED.contains(&base.as_str()) {
        format!("{base}_")
    } else {
        base
    }
}

/// Returns `base`, or the first `base_N` suffix not yet taken.
fn deduplicate(base: &str, seen: &mut HashSet<String>) -> String {
    if seen.insert(base.to_string()) {
        return base.to_string();
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}_{n}");
        if seen.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{Constraints, Parameter, ServerType, Tool};

    fn config_with_tools(tools: Vec<Tool>) -> ServerConfig {
        ServerConfig::new("Test Server", ServerType::Python, "", tools)
    }

    #[test]
    fn test_lowering_preserves_order() {
        let config = config_with_tools(vec![
            Tool::new("beta", "", vec![]),
            Tool::new("alpha", "", vec![]),
        ]);
        let ir = lower(&config).unwrap();
        assert_eq!(ir.tools[0].ident, "beta");
        assert_eq!(ir.tools[1].ident, "alpha");
    }

    #[test]
    fn test_colliding_tool_names_get_suffixes() {
        let config = config_with_tools(vec![
            Tool::new("get data", "", vec![]),
            Tool::new("Get  Data", "", vec![]),
            Tool::new("GET DATA!", "", vec![]),
        ]);
        let ir = lower(&config).unwrap();
        let idents: Vec<&str> = ir.tools.iter().map(|t| t.ident.as_str()).collect();
        assert_eq!(idents, vec!["get_data", "get_data_2", "get_data_3"]);
    }

    #[test]
    fn test_suffix_avoids_existing_ident() {
        // "x", "x", and a literal "x_2" must not collide
        let config = config_with_tools(vec![
            Tool::new("x", "", vec![]),
            Tool::new("x_2", "", vec![]),
            Tool::new("X", "", vec![]),
        ]);
        let ir = lower(&config).unwrap();
        let idents: Vec<&str> = ir.tools.iter().map(|t| t.ident.as_str()).collect();
        assert_eq!(idents.len(), 3);
        let unique: HashSet<&&str> = idents.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_colliding_param_names_get_suffixes() {
        let config = config_with_tools(vec![Tool::new(
            "lookup",
            "",
            vec![
                Parameter::new("key", ParameterType::String, ""),
                Parameter::new("Key", ParameterType::String, ""),
            ],
        )]);
        let ir = lower(&config).unwrap();
        let idents: Vec<&str> = ir.tools[0].params.iter().map(|p| p.ident.as_str()).collect();
        assert_eq!(idents, vec!["key", "key_2"]);
    }

    #[test]
    fn test_empty_tool_ident_is_render_error() {
        let config = config_with_tools(vec![Tool::new("!!!", "", vec![])]);
        let err = lower(&config).unwrap_err();
        assert!(err.is_render());
    }

    #[test]
    fn test_empty_param_ident_is_render_error() {
        let config = config_with_tools(vec![Tool::new(
            "ok",
            "",
            vec![Parameter::new("???", ParameterType::String, "")],
        )]);
        let err = lower(&config).unwrap_err();
        assert!(err.is_render());
    }

    #[test]
    fn test_keyword_names_get_trailing_underscore() {
        let config = config_with_tools(vec![Tool::new(
            "class",
            "",
            vec![
                Parameter::new("function", ParameterType::String, ""),
                Parameter::new("lambda", ParameterType::String, ""),
            ],
        )]);
        let ir = lower(&config).unwrap();
        assert_eq!(ir.tools[0].ident, "class_");
        let idents: Vec<&str> = ir.tools[0].params.iter().map(|p| p.ident.as_str()).collect();
        assert_eq!(idents, vec!["function_", "lambda_"]);
    }

    #[test]
    fn test_keyword_escape_happens_before_deduplication() {
        // "Class" and "class_" both land on "class_"; the suffix pass must
        // still keep them distinct.
        let config = config_with_tools(vec![
            Tool::new("Class", "", vec![]),
            Tool::new("class_", "", vec![]),
        ]);
        let ir = lower(&config).unwrap();
        assert_eq!(ir.tools[0].ident, "class_");
        assert_eq!(ir.tools[1].ident, "class__2");
    }

    #[test]
    fn test_default_value_implies_optional() {
        let config = config_with_tools(vec![Tool::new(
            "fetch_items",
            "",
            vec![
                Parameter::new("limit", ParameterType::Integer, "Max items").with_constraints(
                    Constraints {
                        default: Some(serde_json::json!(10)),
                        ..Constraints::default()
                    },
                ),
            ],
        )]);
        let ir = lower(&config).unwrap();
        assert!(!ir.tools[0].params[0].required);
        assert_eq!(
            ir.tools[0].params[0].constraints.default,
            Some(serde_json::json!(10))
        );
    }

    #[test]
    fn test_missing_constraints_default_to_required() {
        let config = config_with_tools(vec![Tool::new(
            "lookup",
            "",
            vec![Parameter::new("key", ParameterType::String, "")],
        )]);
        let ir = lower(&config).unwrap();
        assert!(ir.tools[0].params[0].required);
        assert!(ir.tools[0].params[0].constraints.is_empty());
    }
}

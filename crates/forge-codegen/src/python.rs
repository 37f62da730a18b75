//! Python backend: pydantic parameter models and async handler stubs.
//!
//! Emits a single `server.py` declaring, per tool, a `BaseModel` subclass
//! with one typed, constrained field per parameter, plus an async
//! `@server.tool()` handler that echoes its parameters until implemented.
//! Constraints translate to native pydantic `Field` arguments.

use crate::backend::{Backend, SourceFile};
use crate::engine::TemplateEngine;
use crate::ir::{ParamIr, ServerIr, ToolIr};
use forge_core::{ParameterType, Result, ServerType};
use serde::Serialize;

/// Printer for the Python target.
#[derive(Debug)]
pub struct PythonBackend {
    engine: TemplateEngine<'static>,
}

#[derive(Debug, Serialize)]
struct ServerContext {
    name: String,
    description: String,
    tools: Vec<ToolContext>,
}

#[derive(Debug, Serialize)]
struct ToolContext {
    ident: String,
    doc: String,
    params: Vec<ParamContext>,
    signature: String,
    echo_args: String,
    implementation: Option<String>,
}

#[derive(Debug, Serialize)]
struct ParamContext {
    ident: String,
    field_decl: String,
}

impl PythonBackend {
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
            description: escape_string(&ir.description),
            tools: ir.tools.iter().map(build_tool_context).collect(),
        }
    }
}

impl Backend for PythonBackend {
    fn language(&self) -> ServerType {
        ServerType::Python
    }

    fn source(&self, ir: &ServerIr) -> Result<SourceFile> {
        let context = Self::build_context(ir);
        let content = self.engine.render("python/server", &context)?;
        tracing::debug!(server = %ir.ident, "rendered server.py");
        Ok(SourceFile::new("server.py", content))
    }

    fn manifest(&self, _ir: &ServerIr) -> Result<SourceFile> {
        // Fixed dependency set: the skeleton itself only needs the MCP SDK
        // and pydantic (email extra covers EmailStr fields).
        Ok(SourceFile::new(
            "requirements.txt",
            "mcp>=1.0.0\npydantic[email]>=2.0.0\n",
        ))
    }
}

fn build_tool_context(tool: &ToolIr) -> ToolContext {
    let params: Vec<ParamContext> = tool
        .params
        .iter()
        .map(|p| ParamContext {
            ident: p.ident.clone(),
            field_decl: field_declaration(p),
        })
        .collect();

    // Required parameters precede optional ones in the signature: Python
    // forbids a defaulted parameter before an undefaulted one.
    let mut ordered: Vec<&ParamIr> = tool.params.iter().filter(|p| p.required).collect();
    ordered.extend(tool.params.iter().filter(|p| !p.required));
    let signature = ordered
        .iter()
        .map(|p| signature_entry(p))
        .collect::<Vec<_>>()
        .join(", ");

    let echo_args = tool
        .params
        .iter()
        .map(|p| format!("{{{}}}", p.ident))
        .collect::<Vec<_>>()
        .join(", ");

    ToolContext {
        ident: tool.ident.clone(),
        doc: escape_string(&tool.description),
        params,
        signature,
        echo_args,
        implementation: tool.implementation.as_deref().map(|body| indent(body, 4)),
    }
}

/// Maps a parameter type to its Python construct.
///
/// Total over [`ParameterType`]: every variant yields a non-empty
/// annotation.
fn annotation(param: &ParamIr) -> String {
    let base = match param.ty {
        ParameterType::String => "str".to_string(),
        ParameterType::Number => "float".to_string(),
        ParameterType::Integer => "int".to_string(),
        ParameterType::Boolean => "bool".to_string(),
        ParameterType::Object => "Dict[str, Any]".to_string(),
        ParameterType::Array => "List[Any]".to_string(),
        ParameterType::Date => "date".to_string(),
        ParameterType::Email => "EmailStr".to_string(),
        ParameterType::Url => "AnyUrl".to_string(),
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
            format!("Literal[{values}]")
        }
    };

    if param.required {
        base
    } else {
        format!("Optional[{base}]")
    }
}

fn signature_entry(param: &ParamIr) -> String {
    let ann = annotation(param);
    if param.required {
        format!("{}: {}", param.ident, ann)
    } else {
        let default = param
            .constraints
            .default
            .as_ref()
            .map_or_else(|| "None".to_string(), python_literal);
        format!("{}: {} = {}", param.ident, ann, default)
    }
}

/// Builds the pydantic `Field(...)` declaration for one parameter.
fn field_declaration(param: &ParamIr) -> String {
    let mut args = Vec::new();

    if let Some(default) = &param.constraints.default {
        args.push(format!("default={}", python_literal(default)));
    } else if !param.required {
        args.push("default=None".to_string());
    }

    args.push(format!(
        "description=\"{}\"",
        escape_string(&param.description)
    ));

    if let Some(min) = param.constraints.minimum {
        args.push(format!("ge={}", number_literal(min)));
    }
    if let Some(max) = param.constraints.maximum {
        args.push(format!("le={}", number_literal(max)));
    }
    if let Some(min) = param.constraints.min_length {
        args.push(format!("min_length={min}"));
    }
    if let Some(max) = param.constraints.max_length {
        args.push(format!("max_length={max}"));
    }
    if let Some(pattern) = &param.constraints.pattern {
        args.push(format!("pattern=\"{}\"", escape_string(pattern)));
    }

    format!(
        "{}: {} = Field({})",
        param.ident,
        annotation(param),
        args.join(", ")
    )
}

/// Escapes text for embedding in a double-quoted Python string or a
/// triple-quoted docstring.
///
/// Quotes are escaped individually, so a `"""` sequence in the input can
/// never terminate the surrounding docstring.
fn escape_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Renders a JSON default value as a Python literal.
fn python_literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "None".to_string(),
        serde_json::Value::Bool(true) => "True".to_string(),
        serde_json::Value::Bool(false) => "False".to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => format!("\"{}\"", escape_string(s)),
        serde_json::Value::Array(items) => {
            let inner = items.iter().map(python_literal).collect::<Vec<_>>();
            format!("[{}]", inner.join(", "))
        }
        serde_json::Value::Object(map) => {
            let inner = map
                .iter()
                .map(|(k, v)| format!("\"{}\": {}", escape_string(k), python_literal(v)))
                .collect::<Vec<_>>();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

/// Formats a constraint bound without a trailing `.0` for whole numbers.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::lower;
    use forge_core::{Constraints, Parameter, ServerConfig, Tool};

    fn render_source(config: &ServerConfig) -> String {
        let ir = lower(config).unwrap();
        PythonBackend::new().unwrap().source(&ir).unwrap().content
    }

    fn param(name: &str, ty: ParameterType) -> Parameter {
        Parameter::new(name, ty, format!("{name} description"))
    }

    #[test]
    fn test_happy_path_scenario() {
        let config = ServerConfig::new(
            "Weather Data Provider",
            ServerType::Python,
            "Forecast data",
            vec![Tool::new(
                "get current weather",
                "Current conditions",
                vec![param("city name", ParameterType::String)],
            )],
        );
        let source = render_source(&config);

        assert!(source.contains("async def get_current_weather(city_name: str)"));
        assert!(source.contains("class get_current_weather_params(BaseModel):"));
        assert!(source.contains("city_name: str = Field("));
        assert!(source.contains("name=\"Weather Data Provider\""));
    }

    #[test]
    fn test_every_parameter_type_maps_to_nonempty_construct() {
        for ty in ParameterType::ALL {
            let mut p = param("value", ty);
            if ty == ParameterType::Enum {
                p = p.with_constraints(Constraints {
                    enum_values: Some(vec!["a".to_string(), "b".to_string()]),
                    ..Constraints::default()
                });
            }
            let config = ServerConfig::new(
                "Coverage",
                ServerType::Python,
                "",
                vec![Tool::new("check", "", vec![p])],
            );
            let source = render_source(&config);
            assert!(
                source.contains("value: "),
                "no annotation rendered for {ty}"
            );
        }
    }

    #[test]
    fn test_type_mapping_table() {
        let ir_param = |ty| ParamIr {
            ident: "x".to_string(),
            description: String::new(),
            ty,
            constraints: Constraints::default(),
            required: true,
        };
        assert_eq!(annotation(&ir_param(ParameterType::String)), "str");
        assert_eq!(annotation(&ir_param(ParameterType::Number)), "float");
        assert_eq!(annotation(&ir_param(ParameterType::Integer)), "int");
        assert_eq!(annotation(&ir_param(ParameterType::Boolean)), "bool");
        assert_eq!(annotation(&ir_param(ParameterType::Object)), "Dict[str, Any]");
        assert_eq!(annotation(&ir_param(ParameterType::Array)), "List[Any]");
        assert_eq!(annotation(&ir_param(ParameterType::Date)), "date");
        assert_eq!(annotation(&ir_param(ParameterType::Email)), "EmailStr");
        assert_eq!(annotation(&ir_param(ParameterType::Url)), "AnyUrl");
    }

    #[test]
    fn test_constraints_translate_to_field_arguments() {
        let config = ServerConfig::new(
            "Bounded",
            ServerType::Python,
            "",
            vec![Tool::new(
                "count_items",
                "",
                vec![param("limit", ParameterType::Integer).with_constraints(Constraints {
                    minimum: Some(1.0),
                    maximum: Some(100.0),
                    ..Constraints::default()
                })],
            )],
        );
        let source = render_source(&config);
        assert!(source.contains("ge=1"));
        assert!(source.contains("le=100"));
        assert!(!source.contains("ge=1.0"), "whole bounds render as ints");
    }

    #[test]
    fn test_enum_renders_literal_choices() {
        let config = ServerConfig::new(
            "Colors",
            ServerType::Python,
            "",
            vec![Tool::new(
                "pick",
                "",
                vec![param("color", ParameterType::Enum).with_constraints(Constraints {
                    enum_values: Some(vec![
                        "red".to_string(),
                        "green".to_string(),
                        "blue".to_string(),
                    ]),
                    ..Constraints::default()
                })],
            )],
        );
        let source = render_source(&config);
        assert!(source.contains("Literal[\"red\", \"green\", \"blue\"]"));
    }

    #[test]
    fn test_optional_parameters_come_after_required_in_signature() {
        let config = ServerConfig::new(
            "Ordering",
            ServerType::Python,
            "",
            vec![Tool::new(
                "search",
                "",
                vec![
                    param("unit", ParameterType::String).with_constraints(Constraints {
                        required: Some(false),
                        ..Constraints::default()
                    }),
                    param("query", ParameterType::String),
                ],
            )],
        );
        let source = render_source(&config);
        assert!(source.contains(
            "async def search(query: str, unit: Optional[str] = None)"
        ));
    }

    #[test]
    fn test_default_value_rendered_as_python_literal() {
        let config = ServerConfig::new(
            "Defaults",
            ServerType::Python,
            "",
            vec![Tool::new(
                "fetch",
                "",
                vec![param("limit", ParameterType::Integer).with_constraints(Constraints {
                    required: Some(false),
                    default: Some(serde_json::json!(10)),
                    ..Constraints::default()
                })],
            )],
        );
        let source = render_source(&config);
        assert!(source.contains("limit: Optional[int] = 10"));
        assert!(source.contains("default=10"));
    }

    #[test]
    fn test_keyword_tool_name_renders_legal_python() {
        let config = ServerConfig::new(
            "Keywords",
            ServerType::Python,
            "",
            vec![Tool::new(
                "class",
                "",
                vec![param("del", ParameterType::String)],
            )],
        );
        let source = render_source(&config);
        assert!(source.contains("async def class_("));
        assert!(source.contains("del_: str"));
        assert!(!source.contains("async def class("));
    }

    #[test]
    fn test_required_with_default_renders_defaulted_signature() {
        // No explicit required flag: the default alone makes it optional,
        // so the signature and the pydantic model agree.
        let config = ServerConfig::new(
            "Defaults",
            ServerType::Python,
            "",
            vec![Tool::new(
                "fetch",
                "",
                vec![param("limit", ParameterType::Integer).with_constraints(Constraints {
                    default: Some(serde_json::json!(5)),
                    ..Constraints::default()
                })],
            )],
        );
        let source = render_source(&config);
        assert!(source.contains("limit: Optional[int] = 5"));
        assert!(source.contains("default=5"));
        assert!(!source.contains("limit: int"));
    }

    #[test]
    fn test_hostile_descriptions_are_escaped() {
        let hostile = "ends with \"\"\" and 'quotes'\nand a newline\tand \\ backslash";
        let config = ServerConfig::new(
            "Hostile",
            ServerType::Python,
            hostile,
            vec![Tool::new(
                "tricky_tool",
                hostile,
                vec![Parameter::new("input_value", ParameterType::String, hostile)],
            )],
        );
        let source = render_source(&config);

        // No raw newline or unescaped triple quote may survive inside a
        // string context.
        assert!(!source.contains("\"\"\" and"));
        assert!(source.contains("\\\"\\\"\\\""));
        assert!(source.contains("\\n"));
        assert!(source.contains("\\\\ backslash"));
    }

    #[test]
    fn test_zero_tools_renders_loadable_server() {
        let config = ServerConfig::new("Empty Server", ServerType::Python, "Nothing", vec![]);
        let source = render_source(&config);
        assert!(source.contains("server = MCPServer("));
        assert!(source.contains("if __name__ == \"__main__\":"));
        assert!(!source.contains("@server.tool()"));
    }

    #[test]
    fn test_zero_parameter_tool_gets_pass_body_model() {
        let config = ServerConfig::new(
            "NoParams",
            ServerType::Python,
            "",
            vec![Tool::new("ping", "Liveness probe", vec![])],
        );
        let source = render_source(&config);
        assert!(source.contains("class ping_params(BaseModel):"));
        assert!(source.contains("    pass"));
        assert!(source.contains("async def ping() -> Dict[str, Any]:"));
    }

    #[test]
    fn test_implementation_splice_replaces_stub() {
        let config = ServerConfig::new(
            "Spliced",
            ServerType::Python,
            "",
            vec![
                Tool::new("custom", "", vec![])
                    .with_implementation("return {\"result\": \"drafted\"}"),
            ],
        );
        let source = render_source(&config);
        assert!(source.contains("    return {\"result\": \"drafted\"}"));
        assert!(!source.contains("Echo stub"));
    }

    #[test]
    fn test_echo_stub_mentions_parameters() {
        let config = ServerConfig::new(
            "Echo",
            ServerType::Python,
            "",
            vec![Tool::new(
                "greet",
                "",
                vec![param("name", ParameterType::String)],
            )],
        );
        let source = render_source(&config);
        assert!(source.contains("f\"greet executed with parameters: {name}\""));
    }

    #[test]
    fn test_python_literal_rendering() {
        assert_eq!(python_literal(&serde_json::json!(null)), "None");
        assert_eq!(python_literal(&serde_json::json!(true)), "True");
        assert_eq!(python_literal(&serde_json::json!(3.5)), "3.5");
        assert_eq!(python_literal(&serde_json::json!("hi")), "\"hi\"");
        assert_eq!(python_literal(&serde_json::json!([1, 2])), "[1, 2]");
        assert_eq!(
            python_literal(&serde_json::json!({"a": 1})),
            "{\"a\": 1}"
        );
    }

    #[test]
    fn test_requirements_manifest() {
        let config = ServerConfig::new("Any", ServerType::Python, "", vec![]);
        let ir = lower(&config).unwrap();
        let manifest = PythonBackend::new().unwrap().manifest(&ir).unwrap();
        assert_eq!(manifest.filename, "requirements.txt");
        assert!(manifest.content.contains("pydantic"));
        assert!(manifest.content.contains("mcp"));
    }
}

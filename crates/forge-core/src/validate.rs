//! Wizard payload validation.
//!
//! Turns the raw, loosely typed wizard payload into an immutable
//! [`ServerConfig`], or an ordered list of field-scoped issues. Every
//! violated rule is reported — validation collects, it never
//! short-circuits — so the wizard can highlight all offending inputs in
//! one round trip.
//!
//! # Examples
//!
//! ```
//! use forge_core::validate::{validate, RawServerConfig};
//!
//! let raw: RawServerConfig = serde_json::from_str(
//!     r#"{
//!         "serverName": "Weather Data Provider",
//!         "serverType": "python",
//!         "description": "Forecast data",
//!         "tools": [{
//!             "name": "get current weather",
//!             "description": "Current conditions",
//!             "parameters": [
//!                 {"name": "city name", "type": "string", "description": "City"}
//!             ]
//!         }]
//!     }"#,
//! )
//! .unwrap();
//!
//! let validated = validate(&raw).unwrap();
//! assert!(validated.warnings.is_empty());
//! assert_eq!(validated.config.tools.len(), 1);
//! ```

use crate::error::{ValidationIssue, ValidationWarning};
use crate::ident::normalize_identifier;
use crate::types::{
    Constraints, EntityId, Parameter, ParameterType, ServerConfig, ServerType, Tool,
};
use serde::Deserialize;
use std::collections::HashSet;

/// Raw wizard payload, mirrored with loose types.
///
/// `serverType` and parameter `type` stay strings here so that an unknown
/// value produces a field-scoped issue instead of aborting
/// deserialization of the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawServerConfig {
    /// Server display name
    #[serde(rename = "serverName")]
    pub server_name: String,
    /// Target language as supplied by the wizard
    #[serde(rename = "serverType")]
    pub server_type: String,
    /// Free-text description
    pub description: String,
    /// Tool definitions
    pub tools: Vec<RawTool>,
}

/// Raw tool definition from the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTool {
    /// Session-scoped token, generated when absent
    pub id: Option<String>,
    /// Tool name as typed by the user
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Parameter definitions
    pub parameters: Vec<RawParameter>,
    /// Optional externally drafted handler body
    pub implementation: Option<String>,
}

/// Raw parameter definition from the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawParameter {
    /// Session-scoped token, generated when absent
    pub id: Option<String>,
    /// Parameter name as typed by the user
    pub name: String,
    /// Parameter type as supplied by the wizard
    #[serde(rename = "type")]
    pub ty: String,
    /// Free-text description
    pub description: String,
    /// Optional constraint record
    pub constraints: Option<Constraints>,
}

/// Successful validation outcome.
///
/// Warnings are usability findings that never block generation.
#[derive(Debug, Clone)]
pub struct Validated {
    /// The immutable configuration snapshot
    pub config: ServerConfig,
    /// Non-fatal findings (e.g. a server with zero tools)
    pub warnings: Vec<ValidationWarning>,
}

/// Validates a raw wizard payload.
///
/// Checks, per field:
/// - `serverName` non-empty and normalizing to a non-empty identifier;
/// - `serverType` within the supported set (fail closed, no default);
/// - every tool and parameter name normalizing to a non-empty identifier;
/// - tool names unique after normalization;
/// - `minimum <= maximum` and `minLength <= maxLength` when both present;
/// - `pattern` compiling as a regular expression;
/// - `enum` values present and non-empty when `type == enum`.
///
/// Pure: no side effects, no I/O.
///
/// # Errors
///
/// Returns the full ordered list of [`ValidationIssue`]s when any rule is
/// violated; the list holds one entry per violation, never just the first.
pub fn validate(raw: &RawServerConfig) -> Result<Validated, Vec<ValidationIssue>> {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    if raw.server_name.trim().is_empty() {
        issues.push(ValidationIssue::new("serverName", "must not be empty"));
    } else if normalize_identifier(&raw.server_name).is_empty() {
        issues.push(ValidationIssue::new(
            "serverName",
            "must contain at least one alphanumeric character",
        ));
    }

    let server_type = match ServerType::parse(&raw.server_type) {
        Ok(ty) => Some(ty),
        Err(_) => {
            issues.push(ValidationIssue::new(
                "serverType",
                format!(
                    "unsupported value '{}'; expected 'python' or 'typescript'",
                    raw.server_type
                ),
            ));
            None
        }
    };

    if raw.tools.is_empty() {
        warnings.push(ValidationWarning::new(
            "tools",
            "server defines no tools; it will start but expose nothing",
        ));
    }

    let mut seen_tool_idents: HashSet<String> = HashSet::new();
    let mut tools = Vec::with_capacity(raw.tools.len());

    for (tool_index, raw_tool) in raw.tools.iter().enumerate() {
        let tool_field = format!("tools[{tool_index}]");
        let tool_ident = normalize_identifier(&raw_tool.name);

        if raw_tool.name.trim().is_empty() {
            issues.push(ValidationIssue::new(
                format!("{tool_field}.name"),
                "must not be empty",
            ));
        } else if tool_ident.is_empty() {
            issues.push(ValidationIssue::new(
                format!("{tool_field}.name"),
                "must contain at least one alphanumeric character",
            ));
        } else if !seen_tool_idents.insert(tool_ident.clone()) {
            issues.push(ValidationIssue::new(
                format!("{tool_field}.name"),
                format!("duplicates another tool after normalization ('{tool_ident}')"),
            ));
        }

        let parameters =
            validate_parameters(raw_tool, &tool_field, &mut issues, &mut warnings);

        tools.push(Tool {
            id: raw_tool
                .id
                .as_deref()
                .map_or_else(EntityId::generate, EntityId::new),
            name: raw_tool.name.clone(),
            description: raw_tool.description.clone(),
            parameters,
            implementation: raw_tool.implementation.clone(),
        });
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    // server_type is Some here: a None pushed an issue above
    let server_type = server_type.expect("serverType validated");

    tracing::debug!(
        server_name = %raw.server_name,
        tool_count = tools.len(),
        warning_count = warnings.len(),
        "wizard payload validated"
    );

    Ok(Validated {
        config: ServerConfig {
            server_name: raw.server_name.clone(),
            server_type,
            description: raw.description.clone(),
            tools,
        },
        warnings,
    })
}

/// Validates a raw JSON payload straight from the HTTP layer.
///
/// # Errors
///
/// A payload that does not even have the expected shape yields a single
/// issue on the root field; shape-valid payloads defer to [`validate`].
pub fn validate_json(payload: &serde_json::Value) -> Result<Validated, Vec<ValidationIssue>> {
    let raw: RawServerConfig = serde_json::from_value(payload.clone()).map_err(|e| {
        vec![ValidationIssue::new(
            "$",
            format!("payload does not match the expected shape: {e}"),
        )]
    })?;
    validate(&raw)
}

fn validate_parameters(
    raw_tool: &RawTool,
    tool_field: &str,
    issues: &mut Vec<ValidationIssue>,
    warnings: &mut Vec<ValidationWarning>,
) -> Vec<Parameter> {
    let mut parameters = Vec::with_capacity(raw_tool.parameters.len());

    for (param_index, raw_param) in raw_tool.parameters.iter().enumerate() {
        let param_field = format!("{tool_field}.parameters[{param_index}]");

        if raw_param.name.trim().is_empty() {
            issues.push(ValidationIssue::new(
                format!("{param_field}.name"),
                "must not be empty",
            ));
        } else if normalize_identifier(&raw_param.name).is_empty() {
            issues.push(ValidationIssue::new(
                format!("{param_field}.name"),
                "must contain at least one alphanumeric character",
            ));
        }

        let ty = match parse_parameter_type(&raw_param.ty) {
            Some(ty) => ty,
            None => {
                issues.push(ValidationIssue::new(
                    format!("{param_field}.type"),
                    format!("unknown parameter type '{}'", raw_param.ty),
                ));
                // Placeholder so constraint checks can still run
                ParameterType::String
            }
        };

        let constraints = raw_param.constraints.clone().map(|c| {
            validate_constraints(&c, ty, &param_field, issues, warnings);
            sanitize_constraints(c, ty)
        });

        if ty == ParameterType::Enum
            && !constraints
                .as_ref()
                .is_some_and(|c| c.enum_values.as_ref().is_some_and(|v| !v.is_empty()))
        {
            issues.push(ValidationIssue::new(
                format!("{param_field}.constraints.enum"),
                "enum parameters must list at least one allowed value",
            ));
        }

        parameters.push(Parameter {
            id: raw_param
                .id
                .as_deref()
                .map_or_else(EntityId::generate, EntityId::new),
            name: raw_param.name.clone(),
            ty,
            description: raw_param.description.clone(),
            constraints,
        });
    }

    parameters
}

fn validate_constraints(
    constraints: &Constraints,
    ty: ParameterType,
    param_field: &str,
    issues: &mut Vec<ValidationIssue>,
    warnings: &mut Vec<ValidationWarning>,
) {
    if let (Some(min), Some(max)) = (constraints.minimum, constraints.maximum) {
        if min > max {
            issues.push(ValidationIssue::new(
                format!("{param_field}.constraints.minimum"),
                format!("minimum ({min}) exceeds maximum ({max})"),
            ));
        }
    }

    if let (Some(min), Some(max)) = (constraints.min_length, constraints.max_length) {
        if min > max {
            issues.push(ValidationIssue::new(
                format!("{param_field}.constraints.minLength"),
                format!("minLength ({min}) exceeds maxLength ({max})"),
            ));
        }
    }

    if let Some(pattern) = &constraints.pattern {
        if let Err(e) = regex::Regex::new(pattern) {
            issues.push(ValidationIssue::new(
                format!("{param_field}.constraints.pattern"),
                format!("invalid regular expression: {e}"),
            ));
        }
    }

    if let Some(values) = &constraints.enum_values {
        if ty == ParameterType::Enum {
            if values.is_empty() {
                issues.push(ValidationIssue::new(
                    format!("{param_field}.constraints.enum"),
                    "enum value list must not be empty",
                ));
            }
        } else {
            warnings.push(ValidationWarning::new(
                format!("{param_field}.constraints.enum"),
                format!(
                    "enum values are ignored for parameter type '{}'",
                    ty.as_str()
                ),
            ));
        }
    }
}

/// Drops constraint fields that are meaningless for the parameter type.
///
/// Enum values on a non-enum parameter were already reported as a warning;
/// stripping them here keeps downstream rendering deterministic.
fn sanitize_constraints(mut constraints: Constraints, ty: ParameterType) -> Constraints {
    if ty != ParameterType::Enum {
        constraints.enum_values = None;
    }
    constraints
}

fn parse_parameter_type(raw: &str) -> Option<ParameterType> {
    match raw {
        "string" => Some(ParameterType::String),
        "number" => Some(ParameterType::Number),
        "integer" => Some(ParameterType::Integer),
        "boolean" => Some(ParameterType::Boolean),
        "object" => Some(ParameterType::Object),
        "array" => Some(ParameterType::Array),
        "date" => Some(ParameterType::Date),
        "email" => Some(ParameterType::Email),
        "url" => Some(ParameterType::Url),
        "enum" => Some(ParameterType::Enum),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_raw() -> RawServerConfig {
        serde_json::from_value(json!({
            "serverName": "Weather Data Provider",
            "serverType": "python",
            "description": "Forecast data",
            "tools": [{
                "name": "get current weather",
                "description": "Current conditions",
                "parameters": [
                    {"name": "city name", "type": "string", "description": "City"}
                ]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_happy_path() {
        let validated = validate(&minimal_raw()).unwrap();
        assert_eq!(validated.config.server_name, "Weather Data Provider");
        assert_eq!(validated.config.server_type, ServerType::Python);
        assert!(validated.warnings.is_empty());
    }

    #[test]
    fn test_empty_server_name_rejected() {
        let mut raw = minimal_raw();
        raw.server_name = String::new();
        let issues = validate(&raw).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "serverName");
    }

    #[test]
    fn test_unknown_server_type_fails_closed() {
        let mut raw = minimal_raw();
        raw.server_type = "golang".to_string();
        let issues = validate(&raw).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "serverType");
        assert!(issues[0].message.contains("golang"));
    }

    #[test]
    fn test_zero_tools_is_warning_not_error() {
        let mut raw = minimal_raw();
        raw.tools.clear();
        let validated = validate(&raw).unwrap();
        assert_eq!(validated.warnings.len(), 1);
        assert_eq!(validated.warnings[0].field, "tools");
        assert!(validated.config.tools.is_empty());
    }

    #[test]
    fn test_all_independent_violations_reported() {
        // Three independent violations across distinct fields must yield
        // exactly three issues.
        let raw: RawServerConfig = serde_json::from_value(json!({
            "serverName": "",
            "serverType": "python",
            "description": "",
            "tools": [{
                "name": "",
                "description": "",
                "parameters": [{
                    "name": "count",
                    "type": "integer",
                    "description": "",
                    "constraints": {"minimum": 10.0, "maximum": 1.0}
                }]
            }]
        }))
        .unwrap();

        let issues = validate(&raw).unwrap_err();
        assert_eq!(issues.len(), 3, "issues: {issues:?}");
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"serverName"));
        assert!(fields.contains(&"tools[0].name"));
        assert!(fields.contains(&"tools[0].parameters[0].constraints.minimum"));
    }

    #[test]
    fn test_name_normalizing_to_empty_is_field_scoped() {
        let mut raw = minimal_raw();
        raw.tools[0].name = "!!!".to_string();
        let issues = validate(&raw).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "tools[0].name");
        assert!(issues[0].message.contains("alphanumeric"));
    }

    #[test]
    fn test_duplicate_tool_names_after_normalization_rejected() {
        let mut raw = minimal_raw();
        let mut dup = raw.tools[0].clone();
        dup.name = "Get  Current   Weather".to_string();
        raw.tools.push(dup);
        let issues = validate(&raw).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "tools[1].name");
        assert!(issues[0].message.contains("get_current_weather"));
    }

    #[test]
    fn test_length_bounds_checked() {
        let mut raw = minimal_raw();
        raw.tools[0].parameters[0].constraints = Some(Constraints {
            min_length: Some(10),
            max_length: Some(2),
            ..Constraints::default()
        });
        let issues = validate(&raw).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].field.ends_with("constraints.minLength"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let mut raw = minimal_raw();
        raw.tools[0].parameters[0].constraints = Some(Constraints {
            pattern: Some("[unclosed".to_string()),
            ..Constraints::default()
        });
        let issues = validate(&raw).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].field.ends_with("constraints.pattern"));
    }

    #[test]
    fn test_enum_type_requires_values() {
        let mut raw = minimal_raw();
        raw.tools[0].parameters[0].ty = "enum".to_string();
        raw.tools[0].parameters[0].constraints = None;
        let issues = validate(&raw).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].field.ends_with("constraints.enum"));
    }

    #[test]
    fn test_enum_values_on_non_enum_type_warn_and_ignore() {
        let mut raw = minimal_raw();
        raw.tools[0].parameters[0].constraints = Some(Constraints {
            enum_values: Some(vec!["a".to_string()]),
            ..Constraints::default()
        });
        let validated = validate(&raw).unwrap();
        assert_eq!(validated.warnings.len(), 1);
        assert!(validated.warnings[0].field.ends_with("constraints.enum"));
        // Ignored deterministically: stripped from the config snapshot
        let constraints = validated.config.tools[0].parameters[0]
            .constraints
            .as_ref()
            .unwrap();
        assert!(constraints.enum_values.is_none());
    }

    #[test]
    fn test_unknown_parameter_type_rejected() {
        let mut raw = minimal_raw();
        raw.tools[0].parameters[0].ty = "decimal".to_string();
        let issues = validate(&raw).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].field.ends_with(".type"));
    }

    #[test]
    fn test_validate_json_shape_mismatch() {
        let issues = validate_json(&json!({"tools": "not-an-array"})).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "$");
    }

    #[test]
    fn test_supplied_ids_are_preserved() {
        let raw: RawServerConfig = serde_json::from_value(json!({
            "serverName": "S",
            "serverType": "typescript",
            "description": "",
            "tools": [{
                "id": "tool-7",
                "name": "lookup",
                "description": "",
                "parameters": []
            }]
        }))
        .unwrap();
        let validated = validate(&raw).unwrap();
        assert_eq!(validated.config.tools[0].id.as_str(), "tool-7");
    }
}

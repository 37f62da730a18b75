//! Domain types for the MCP Forge configuration model.
//!
//! A [`ServerConfig`] is the validated, immutable description of the MCP
//! server to generate: identity, target language, and an ordered list of
//! tools with typed, constrained parameters. Instances exist for the
//! duration of one generation request; nothing in this module is shared or
//! mutated across requests.
//!
//! # Examples
//!
//! ```
//! use forge_core::{Parameter, ParameterType, ServerConfig, ServerType, Tool};
//!
//! let config = ServerConfig::new(
//!     "Weather Data Provider",
//!     ServerType::Python,
//!     "Weather forecast data for any location",
//!     vec![Tool::new(
//!         "get current weather",
//!         "Fetches the current weather",
//!         vec![Parameter::new("city name", ParameterType::String, "City to query")],
//!     )],
//! );
//!
//! assert_eq!(config.tools.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Target language for the generated server.
///
/// Selects which backend renderer runs. Unknown values fail closed at the
/// validation boundary; there is no default target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerType {
    /// Python server using pydantic parameter models
    Python,
    /// TypeScript/Node server using Zod schemas
    TypeScript,
}

impl ServerType {
    /// Returns the wire representation of the server type.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_core::ServerType;
    ///
    /// assert_eq!(ServerType::Python.as_str(), "python");
    /// assert_eq!(ServerType::TypeScript.as_str(), "typescript");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::TypeScript => "typescript",
        }
    }

    /// Parses a raw wizard value, failing closed on unknown input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedTarget`] for any value outside
    /// the supported set.
    pub fn parse(raw: &str) -> crate::Result<Self> {
        match raw {
            "python" => Ok(Self::Python),
            "typescript" => Ok(Self::TypeScript),
            other => Err(crate::Error::UnsupportedTarget {
                target: other.to_string(),
            }),
        }
    }

    /// Filename of the generated entrypoint source file.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_core::ServerType;
    ///
    /// assert_eq!(ServerType::Python.entrypoint(), "server.py");
    /// assert_eq!(ServerType::TypeScript.entrypoint(), "server.js");
    /// ```
    #[must_use]
    pub const fn entrypoint(self) -> &'static str {
        match self {
            Self::Python => "server.py",
            Self::TypeScript => "server.js",
        }
    }

    /// Command line that launches the generated server.
    #[must_use]
    pub const fn runtime_command(self) -> &'static str {
        match self {
            Self::Python => "python server.py",
            Self::TypeScript => "node server.js",
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Closed set of parameter types the wizard can express.
///
/// Deliberately a tagged enum rather than an open string map: every value
/// maps to exactly one construct in each target language, and the mapping
/// lives in one place per backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    /// Free-form text
    String,
    /// Floating-point number
    Number,
    /// Whole number
    Integer,
    /// True/false flag
    Boolean,
    /// Nested key/value structure
    Object,
    /// Ordered list of values
    Array,
    /// Calendar date string
    Date,
    /// Email address string
    Email,
    /// URL string
    Url,
    /// One of a fixed set of string values
    Enum,
}

impl ParameterType {
    /// All parameter type variants, in declaration order.
    ///
    /// Used by the total-coverage tests: every variant must render a
    /// non-empty construct in both backends.
    pub const ALL: [Self; 10] = [
        Self::String,
        Self::Number,
        Self::Integer,
        Self::Boolean,
        Self::Object,
        Self::Array,
        Self::Date,
        Self::Email,
        Self::Url,
        Self::Enum,
    ];

    /// Returns the wire representation of the type.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_core::ParameterType;
    ///
    /// assert_eq!(ParameterType::Integer.as_str(), "integer");
    /// assert_eq!(ParameterType::Enum.as_str(), "enum");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Date => "date",
            Self::Email => "email",
            Self::Url => "url",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional validation constraints attached to a parameter.
///
/// Presence and absence are both meaningful: an absent field means "no
/// constraint", never "constraint = zero/empty". Constraints translate to
/// native validation declarations in the generated code (pydantic `Field`
/// arguments, Zod modifier chains).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Inclusive lower bound for numeric types
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numeric types
    pub maximum: Option<f64>,
    /// Minimum string length
    #[serde(rename = "minLength")]
    pub min_length: Option<u64>,
    /// Maximum string length
    #[serde(rename = "maxLength")]
    pub max_length: Option<u64>,
    /// Regular expression the value must match
    pub pattern: Option<String>,
    /// Named string format hint (e.g. "date-time")
    pub format: Option<String>,
    /// Allowed values; only meaningful when the parameter type is `enum`
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,
    /// Default value, embedded verbatim in the generated schema
    pub default: Option<serde_json::Value>,
    /// Whether the parameter must be supplied by the caller
    pub required: Option<bool>,
}

impl Constraints {
    /// Returns `true` if no constraint field is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_core::Constraints;
    ///
    /// assert!(Constraints::default().is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.minimum.is_none()
            && self.maximum.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.pattern.is_none()
            && self.format.is_none()
            && self.enum_values.is_none()
            && self.default.is_none()
            && self.required.is_none()
    }

    /// Whether the parameter is required. Absent means required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(true)
    }
}

/// Opaque, generation-session-scoped entity token.
///
/// Identifies a tool or parameter within one wizard session. Carries no
/// persisted meaning and never appears in rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing token (e.g. one supplied by the wizard UI).
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One typed, constrained input to a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Session-scoped opaque token
    pub id: EntityId,
    /// Raw name as typed by the user; normalized before code generation
    pub name: String,
    /// Parameter type from the closed set
    #[serde(rename = "type")]
    pub ty: ParameterType,
    /// Free-text description, escaped per target language when embedded
    pub description: String,
    /// Optional constraints; `None` means unconstrained
    pub constraints: Option<Constraints>,
}

impl Parameter {
    /// Creates an unconstrained parameter with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: ParameterType, description: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            ty,
            description: description.into(),
            constraints: None,
        }
    }

    /// Attaches constraints to the parameter.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Whether the caller must supply this parameter.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.constraints
            .as_ref()
            .is_none_or(Constraints::is_required)
    }
}

/// One named capability the generated server exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Session-scoped opaque token
    pub id: EntityId,
    /// Raw name as typed by the user; normalized before code generation
    pub name: String,
    /// Free-text description, embedded into generated doc-comments
    pub description: String,
    /// Ordered parameter list (insertion order preserved)
    pub parameters: Vec<Parameter>,
    /// Optional externally drafted handler body.
    ///
    /// Opaque text spliced into the handler stub location; the renderer
    /// neither validates nor executes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
}

impl Tool {
    /// Creates a tool with a fresh id and no drafted implementation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            description: description.into(),
            parameters,
            implementation: None,
        }
    }

    /// Attaches an externally drafted handler body.
    #[must_use]
    pub fn with_implementation(mut self, body: impl Into<String>) -> Self {
        self.implementation = Some(body.into());
        self
    }
}

/// Validated description of the server to generate.
///
/// Root entity of the configuration model. Construct via
/// [`crate::validate::validate`] for wizard input, or directly in tests
/// and embedding code that already holds trusted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Display name; normalized into an identifier for generated artifacts
    #[serde(rename = "serverName")]
    pub server_name: String,
    /// Target language; immutable once generation starts
    #[serde(rename = "serverType")]
    pub server_type: ServerType,
    /// Free-text server description
    pub description: String,
    /// Ordered tool list (order affects file layout only, not semantics)
    pub tools: Vec<Tool>,
}

impl ServerConfig {
    /// Creates a configuration snapshot.
    #[must_use]
    pub fn new(
        server_name: impl Into<String>,
        server_type: ServerType,
        description: impl Into<String>,
        tools: Vec<Tool>,
    ) -> Self {
        Self {
            server_name: server_name.into(),
            server_type,
            description: description.into(),
            tools,
        }
    }
}

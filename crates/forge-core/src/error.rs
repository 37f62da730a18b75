//! Error types for MCP Forge.
//!
//! This module provides the error hierarchy shared by the generator
//! pipeline. Validation problems are collected, not short-circuited, so a
//! single `Error::Validation` represents one field-scoped rule violation
//! and callers work with `Vec<ValidationIssue>` during validation.
//!
//! # Examples
//!
//! ```
//! use forge_core::{Error, Result};
//!
//! fn pick_target(name: &str) -> Result<()> {
//!     if name != "python" && name != "typescript" {
//!         return Err(Error::UnsupportedTarget {
//!             target: name.to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = pick_target("ruby").unwrap_err();
//! assert!(err.is_unsupported_target());
//! ```

use thiserror::Error;

/// Main error type for the MCP Forge generator pipeline.
///
/// The configuration model and both renderers are pure: for any config that
/// passed validation they must not fail. A `Render` error escaping from a
/// validated config is a validator completeness defect, not an expected
/// runtime condition. Filesystem failures live in `forge-pack`'s own error
/// type so callers can tell "fix your input" from "try again".
#[derive(Error, Debug)]
pub enum Error {
    /// A single field-scoped validation rule violation.
    ///
    /// Surfaced directly to the end user; generation never proceeds while
    /// any of these exist.
    #[error("Validation error in {field}: {reason}")]
    Validation {
        /// The input field that violated a rule (e.g. `tools[1].name`)
        field: String,
        /// Detailed reason for the violation
        reason: String,
    },

    /// Unknown `serverType` value.
    ///
    /// Fatal to the single request. Never falls back to a default target.
    #[error("Unsupported server type: {target}")]
    UnsupportedTarget {
        /// The unrecognized target value as supplied
        target: String,
    },

    /// Unknown deployment platform identifier.
    ///
    /// Fatal to the single request. Never falls back to a default platform.
    #[error("Deployment platform not found: {platform}")]
    PlatformNotFound {
        /// The unrecognized platform id as supplied
        platform: String,
    },

    /// Internal renderer failure for one tool or parameter.
    ///
    /// Raised when lowering or printing fails for a specific entity, so the
    /// user can fix the one offending tool rather than the whole config.
    #[error("Render failed for '{entity}' at {stage}: {message}")]
    Render {
        /// The tool or parameter that failed to render
        entity: String,
        /// Pipeline stage that failed (e.g. "lowering", "python-backend")
        stage: String,
        /// Description of the failure
        message: String,
    },

    /// Template registration or rendering failure.
    #[error("Template error: {message}")]
    Template {
        /// Description of the template failure
        message: String,
        /// Underlying handlebars error, when available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl Error {
    /// Returns `true` if this is a field-scoped validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_core::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "serverName".to_string(),
    ///     reason: "must not be empty".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns `true` if this is an unsupported target error.
    #[must_use]
    pub const fn is_unsupported_target(&self) -> bool {
        matches!(self, Self::UnsupportedTarget { .. })
    }

    /// Returns `true` if this is a platform lookup failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_core::Error;
    ///
    /// let err = Error::PlatformNotFound {
    ///     platform: "not-a-real-platform".to_string(),
    /// };
    /// assert!(err.is_platform_not_found());
    /// ```
    #[must_use]
    pub const fn is_platform_not_found(&self) -> bool {
        matches!(self, Self::PlatformNotFound { .. })
    }

    /// Returns `true` if this is an internal render error.
    #[must_use]
    pub const fn is_render(&self) -> bool {
        matches!(self, Self::Render { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template(&self) -> bool {
        matches!(self, Self::Template { .. })
    }
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// One field-scoped validation problem.
///
/// The validator reports every violated rule, one entry per rule, so the
/// wizard UI can highlight the exact offending inputs.
///
/// # Examples
///
/// ```
/// use forge_core::ValidationIssue;
///
/// let issue = ValidationIssue::new("tools[0].name", "must not be empty");
/// assert_eq!(issue.field, "tools[0].name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationIssue {
    /// Path of the offending input field
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A non-fatal usability finding produced during validation.
///
/// Warnings never block generation. A server with zero tools is the
/// canonical example: syntactically permitted, practically useless.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationWarning {
    /// Path of the input field the warning concerns
    pub field: String,
    /// Human-readable description
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

//! CLI support types.
//!
//! Strong types for CLI concepts shared between the core crates and the
//! `forge-cli` front end: output format selection and semantic exit codes.
//!
//! # Examples
//!
//! ```
//! use forge_core::cli::{ExitCode, OutputFormat};
//!
//! let format: OutputFormat = "pretty".parse().unwrap();
//! assert_eq!(format, OutputFormat::Pretty);
//!
//! assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
//! ```

use std::fmt;
use std::str::FromStr;

/// CLI output format.
///
/// Determines how command results are formatted for user display. All
/// formats carry the same information with different presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Plain text output for scripts
    Text,
    /// Pretty-printed output with colors for human reading
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_core::cli::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.as_str(), "json");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!(
                "unknown output format '{other}' (expected json, text, or pretty)"
            )),
        }
    }
}

/// Semantic process exit code.
///
/// Validation failures and runtime failures are distinguishable so that
/// calling scripts can tell "fix your input" from "try again".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Command completed successfully.
    pub const SUCCESS: Self = Self(0);
    /// Input failed validation; the user must fix the configuration.
    pub const VALIDATION_FAILURE: Self = Self(1);
    /// A runtime failure (I/O, packaging); retrying may succeed.
    pub const RUNTIME_FAILURE: Self = Self(2);

    /// Returns the raw exit code value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

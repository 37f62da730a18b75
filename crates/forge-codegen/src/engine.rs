//! Template engine for code generation using Handlebars.
//!
//! Wraps Handlebars with the built-in backend templates pre-registered.
//! Strict mode is on: a template referencing a missing variable is a bug
//! in the backend's context builder and must fail, not render blanks.
//!
//! # Examples
//!
//! ```
//! use forge_codegen::engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "Hello {{name}}").unwrap();
//! assert_eq!(engine.render("greeting", &json!({"name": "World"})).unwrap(), "Hello World");
//! ```

use forge_core::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine with the backend templates pre-registered.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across thread
/// boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        register(
            &mut handlebars,
            "python/server",
            include_str!("../templates/python/server.py.hbs"),
        )?;
        register(
            &mut handlebars,
            "typescript/server",
            include_str!("../templates/typescript/server.js.hbs"),
        )?;

        Ok(Self { handlebars })
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if the template name is unknown, the context cannot
    /// be serialized, or rendering fails.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::Template {
                message: format!("rendering '{template_name}' failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Registers an additional template at runtime.
    ///
    /// # Errors
    ///
    /// Returns error if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::Template {
                message: format!("failed to register template '{name}': {e}"),
                source: Some(Box::new(e)),
            })
    }
}

fn register(handlebars: &mut Handlebars<'_>, name: &str, template: &str) -> Result<()> {
    handlebars
        .register_template_string(name, template)
        .map_err(|e| Error::Template {
            message: format!("failed to register built-in template '{name}': {e}"),
            source: Some(Box::new(e)),
        })
}

//! Template renderer and rendering functionality for clistart.
//! Templates are embedded in the binary; an optional directory can override
//! any of them by file name.
use crate::error::{Error, Result};
use crate::templates;
use log::debug;
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use std::path::PathBuf;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the named template with the given context.
    ///
    /// # Arguments
    /// * `name` - Template name, e.g. `main.j2`
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template text
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that only knows the embedded templates.
    pub fn new() -> Self {
        Self::with_template_dir(None)
    }

    /// Creates a renderer that looks in `template_dir` first and falls back
    /// to the embedded templates.
    pub fn with_template_dir(template_dir: Option<PathBuf>) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("go_string", go_string);
        env.add_filter("go_comment", go_comment);
        env.set_loader(move |name| {
            if let Some(dir) = &template_dir {
                let path = dir.join(name);
                match std::fs::read_to_string(&path) {
                    Ok(source) => {
                        debug!("Using template override {}", path.display());
                        return Ok(Some(source));
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => {
                        return Err(minijinja::Error::new(
                            ErrorKind::InvalidOperation,
                            format!("could not read template {}", path.display()),
                        )
                        .with_source(e));
                    }
                }
            }
            Ok(templates::embedded(name).map(str::to_owned))
        });
        Self { env }
    }
}

/// Quotes a value as a Go interpreted string literal.
///
/// JSON string escapes are a subset of Go's, so the JSON encoding is a valid
/// Go literal.
fn go_string(value: &str) -> std::result::Result<String, minijinja::Error> {
    serde_json::to_string(value).map_err(|e| {
        minijinja::Error::new(ErrorKind::InvalidOperation, "could not quote value").with_source(e)
    })
}

/// Flattens a value onto one line so it fits in a `//` comment.
fn go_comment(value: &str) -> String {
    value.lines().map(str::trim).filter(|line| !line.is_empty()).collect::<Vec<_>>().join(" ")
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateNotFoundError` if no template has that name
    /// * `Error::TemplateSyntaxError` if the template does not parse
    /// * `Error::RenderError` if rendering fails, e.g. on an undefined field
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name).map_err(|source| match source.kind() {
            ErrorKind::TemplateNotFound => Error::TemplateNotFoundError { name: name.to_string() },
            ErrorKind::SyntaxError => {
                Error::TemplateSyntaxError { name: name.to_string(), source }
            }
            _ => Error::RenderError { name: name.to_string(), source },
        })?;

        tmpl.render(context).map_err(|source| Error::RenderError { name: name.to_string(), source })
    }
}

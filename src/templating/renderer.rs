//! Template rendering engine with Tera.
//!
//! [`RecipeRenderer`] compiles the recipe template once and renders it for
//! each matrix cell from a [`RecipeContext`].

use tera::{Context as TeraContext, Tera};

use super::{RecipeContext, RecipeTemplate};
use crate::core::DockgenError;

const TEMPLATE_NAME: &str = "recipe";

/// Template renderer with a pre-compiled recipe template.
///
/// Autoescaping is disabled: recipe values are shell commands and image
/// references that must be inserted verbatim.
#[derive(Debug)]
pub struct RecipeRenderer {
    tera: Tera,
}

impl RecipeRenderer {
    /// Compile `template`.
    ///
    /// # Errors
    ///
    /// Returns [`DockgenError::TemplateSyntax`] if the template does not parse.
    pub fn new(template: &RecipeTemplate) -> Result<Self, DockgenError> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        tera.add_raw_template(TEMPLATE_NAME, template.source()).map_err(|e| {
            DockgenError::TemplateSyntax {
                message: Self::format_tera_error(&e),
            }
        })?;

        Ok(Self {
            tera,
        })
    }

    /// Renderer for the built-in recipe template.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in template is malformed.
    pub fn builtin() -> Result<Self, DockgenError> {
        Self::new(&RecipeTemplate::builtin())
    }

    /// Render the recipe for `platform`/`compiler`.
    ///
    /// The names are only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`DockgenError::TemplateError`] if the template references a
    /// value the context does not supply.
    pub fn render(
        &self,
        context: &RecipeContext<'_>,
        platform: &str,
        compiler: &str,
    ) -> Result<String, DockgenError> {
        let template_error = |e: &tera::Error| DockgenError::TemplateError {
            platform: platform.to_string(),
            compiler: compiler.to_string(),
            message: Self::format_tera_error(e),
        };

        let tera_context = TeraContext::from_serialize(context).map_err(|e| template_error(&e))?;

        tracing::debug!(
            platform,
            compiler,
            image = context.image,
            "rendering recipe template"
        );

        self.tera.render(TEMPLATE_NAME, &tera_context).map_err(|e| template_error(&e))
    }

    /// Flatten a Tera error chain into one readable message.
    ///
    /// Tera wraps the useful message ("Variable `x` not found ...") inside
    /// a generic "Failed to render" error, so the whole source chain is
    /// walked.
    pub fn format_tera_error(error: &tera::Error) -> String {
        use std::error::Error;

        let mut messages = vec![error.to_string()];
        let mut current: Option<&dyn Error> = error.source();
        while let Some(err) = current {
            messages.push(err.to_string());
            current = err.source();
        }

        messages
            .into_iter()
            .map(|msg| msg.trim().to_string())
            .filter(|msg| !msg.is_empty())
            .collect::<Vec<_>>()
            .join(": ")
    }
}

//! Template engine for server-rendered pages using Jinja2 syntax.
//!
//! Page templates live under `templates/pages/` and are embedded into the
//! binary, so rendering never touches the filesystem at runtime.

use minijinja::{AutoEscape, Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// (name, source) for every embedded template
const TEMPLATES: &[(&str, &str)] = &[
    (
        "layout.jinja",
        include_str!("../../../templates/pages/layout.jinja"),
    ),
    (
        "home.jinja",
        include_str!("../../../templates/pages/home.jinja"),
    ),
    (
        "reports.jinja",
        include_str!("../../../templates/pages/reports.jinja"),
    ),
    (
        "report_form.jinja",
        include_str!("../../../templates/pages/report_form.jinja"),
    ),
    (
        "admin_reports.jinja",
        include_str!("../../../templates/pages/admin_reports.jinja"),
    ),
    (
        "partials/report_card.jinja",
        include_str!("../../../templates/pages/partials/report_card.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    // Templates use the .jinja extension, which minijinja does not escape by default
    env.set_auto_escape_callback(|_| AutoEscape::Html);

    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

/// Get the global template environment
fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a page template with the given context.
///
/// # Example
/// ```ignore
/// use minijinja::context;
/// use crate::shared::views::render_page;
///
/// let html = render_page("reports.jinja", context! { reports => cards })?;
/// ```
pub fn render_page(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_missing_template() {
        let result = render_page("nonexistent.jinja", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_all_templates_load() {
        let env = get_environment();
        for (name, _) in TEMPLATES {
            assert!(env.get_template(name).is_ok(), "{} failed to load", name);
        }
    }

    #[test]
    fn test_output_is_escaped() {
        let card = context! {
            department => "La Paz",
            city => "<script>alert(1)</script>",
            descriptionSnippet => "x",
            createdDate => "01/01/2025",
            isAnonymous => true,
        };
        let html = render_page(
            "reports.jinja",
            context! { reports => vec![card] },
        )
        .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

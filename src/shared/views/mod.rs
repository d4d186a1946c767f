//! Server-rendered HTML pages.
//!
//! Templates are stored in `templates/pages/` and use Jinja2 syntax. Every
//! template is HTML-escaped regardless of extension.

pub mod engine;

pub use engine::{render_page, TemplateError};

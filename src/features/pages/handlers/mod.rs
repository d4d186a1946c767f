pub mod page_handlers;

pub use page_handlers::{home, report_form, reports, submit_report};

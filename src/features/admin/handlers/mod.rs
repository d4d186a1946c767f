pub mod admin_handlers;

pub use admin_handlers::{__path_list_reports, list_reports, reports_page};

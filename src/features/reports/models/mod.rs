mod report;
mod report_query;

pub use report::{Coordinates, Department, NewReport, Report, ReportStatus};
pub use report_query::{ReportListOptions, ReportPage};

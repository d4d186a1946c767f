//! Public statistics: approved report, document and category counts plus the
//! latest items shown on the home page.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::DashboardService;

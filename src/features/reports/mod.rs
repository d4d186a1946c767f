//! Citizen report intake and listing.
//!
//! Reports are submitted anonymously, stored as PENDING and only become
//! visible on public read paths once an external moderator approves them.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reports` | No | Submit a report |
//! | GET | `/api/reports` | No | List approved reports |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgReportRepository;
pub use services::ReportService;

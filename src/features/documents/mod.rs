//! Published institutional documents (budgets, contracts, reports).
//! Only public documents are ever listed.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgDocumentRepository;
pub use services::DocumentService;

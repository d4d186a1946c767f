use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a document category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a category
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
}

/// Categories upserted at startup when seeding is enabled
pub const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    (
        "Presupuesto",
        "Documentos relacionados con presupuestos públicos",
    ),
    ("Contratos", "Contratos y licitaciones públicas"),
    ("Normatividad", "Leyes, decretos y reglamentos"),
    ("Informes", "Informes de gestión y rendición de cuentas"),
];

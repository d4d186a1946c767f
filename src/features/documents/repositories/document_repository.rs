use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::documents::models::{CreateDocument, Document};

/// Storage for institutional documents
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Public documents, most recently published first. `None` means no limit.
    async fn list_public(&self, limit: Option<i64>) -> Result<Vec<Document>>;

    async fn insert(&self, document: &CreateDocument) -> Result<Document>;

    async fn count_public(&self) -> Result<i64>;
}

pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    async fn list_public(&self, limit: Option<i64>) -> Result<Vec<Document>> {
        // LIMIT NULL is LIMIT ALL in Postgres
        sqlx::query_as::<_, Document>(
            r#"
            SELECT id, title, description, category, file_url, file_type, file_size,
                   is_public, published_at, created_at, updated_at
            FROM documents
            WHERE is_public = TRUE
            ORDER BY published_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list documents: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert(&self, document: &CreateDocument) -> Result<Document> {
        sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (id, title, description, category, file_url, file_type, file_size)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, category, file_url, file_type, file_size,
                      is_public, published_at, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&document.title)
        .bind(&document.description)
        .bind(&document.category)
        .bind(&document.file_url)
        .bind(&document.file_type)
        .bind(document.file_size)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create document: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn count_public(&self) -> Result<i64> {
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM documents WHERE is_public = TRUE"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count documents: {:?}", e);
                AppError::Database(e)
            })
    }
}

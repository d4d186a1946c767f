use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::documents::models::{CreateDocument, Document};

/// Request DTO for creating a document
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub description: Option<String>,

    /// Name of the category the document belongs to
    #[validate(length(min = 1, max = 120, message = "Category must be 1-120 characters"))]
    pub category: String,

    #[validate(length(max = 2048, message = "fileUrl must not exceed 2048 characters"))]
    pub file_url: Option<String>,

    #[validate(length(max = 50, message = "fileType must not exceed 50 characters"))]
    pub file_type: Option<String>,

    /// Size in bytes
    #[validate(range(min = 0, message = "fileSize must not be negative"))]
    pub file_size: Option<i64>,
}

impl From<CreateDocumentDto> for CreateDocument {
    fn from(dto: CreateDocumentDto) -> Self {
        let blank_to_none = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            title: dto.title.trim().to_string(),
            description: blank_to_none(dto.description),
            category: dto.category.trim().to_string(),
            file_url: blank_to_none(dto.file_url),
            file_type: blank_to_none(dto.file_type),
            file_size: dto.file_size,
        }
    }
}

/// Response DTO for document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub is_public: bool,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponseDto {
    fn from(d: Document) -> Self {
        Self {
            id: d.id,
            title: d.title,
            description: d.description,
            category: d.category,
            file_url: d.file_url,
            file_type: d.file_type,
            file_size: d.file_size,
            is_public: d.is_public,
            published_at: d.published_at,
            created_at: d.created_at,
        }
    }
}

/// Compact document entry for the home page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub file_type: Option<String>,
    pub published_at: DateTime<Utc>,
    /// dd/mm/yyyy
    pub published_date: String,
}

impl From<Document> for DocumentSummaryDto {
    fn from(d: Document) -> Self {
        Self {
            id: d.id,
            title: d.title,
            category: d.category,
            file_type: d.file_type,
            published_date: d.published_at.format("%d/%m/%Y").to_string(),
            published_at: d.published_at,
        }
    }
}

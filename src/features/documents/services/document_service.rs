use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::documents::dtos::{CreateDocumentDto, DocumentResponseDto};
use crate::features::documents::models::CreateDocument;
use crate::features::documents::repositories::DocumentRepository;

/// Service for document operations
pub struct DocumentService {
    repository: Arc<dyn DocumentRepository>,
}

impl DocumentService {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    /// List public documents, most recently published first
    pub async fn list_public(&self) -> Result<Vec<DocumentResponseDto>> {
        let documents = self.repository.list_public(None).await?;
        Ok(documents.into_iter().map(|d| d.into()).collect())
    }

    /// Create a new document
    pub async fn create(&self, dto: CreateDocumentDto) -> Result<DocumentResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let data = CreateDocument::from(dto);
        if data.title.is_empty() || data.category.is_empty() {
            return Err(AppError::Validation(
                "Title and category must not be blank".to_string(),
            ));
        }

        let document = self.repository.insert(&data).await?;
        tracing::info!(
            "Document created: id={}, category={}",
            document.id,
            document.category
        );

        Ok(document.into())
    }
}

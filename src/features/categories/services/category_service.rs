use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::models::{CreateCategory, DEFAULT_CATEGORIES};
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// List all categories ordered by name
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Create a new category
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let data = CreateCategory::from(dto);
        if data.name.is_empty() {
            return Err(AppError::Validation("Name must not be blank".to_string()));
        }

        let category = self.repository.insert(&data).await?;
        tracing::info!("Category created: id={}, name={}", category.id, category.name);

        Ok(category.into())
    }

    /// Upsert the built-in categories. Safe to run on every startup.
    pub async fn seed_defaults(&self) -> Result<usize> {
        for (name, description) in DEFAULT_CATEGORIES {
            self.repository
                .upsert_by_name(&CreateCategory {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                })
                .await?;
        }

        tracing::info!("Default categories ensured: {}", DEFAULT_CATEGORIES.len());
        Ok(DEFAULT_CATEGORIES.len())
    }
}

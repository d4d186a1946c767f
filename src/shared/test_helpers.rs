//! In-memory repositories and fixtures shared by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fake::faker::address::en::CityName;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CreateCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::documents::models::{CreateDocument, Document};
use crate::features::documents::repositories::DocumentRepository;
use crate::features::reports::models::{
    Department, NewReport, Report, ReportListOptions, ReportStatus,
};
use crate::features::reports::repositories::ReportRepository;

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

// =============================================================================
// REPORTS
// =============================================================================

pub fn report_fixture(status: ReportStatus, created_at: DateTime<Utc>) -> Report {
    Report {
        id: Uuid::now_v7(),
        description: Sentence(4..12).fake(),
        department: Department::Cochabamba.label().to_string(),
        city: CityName().fake(),
        police_unit: None,
        police_name: None,
        latitude: None,
        longitude: None,
        is_anonymous: true,
        status,
        created_at,
    }
}

#[derive(Default)]
pub struct InMemoryReportRepository {
    reports: Mutex<Vec<Report>>,
    failing: bool,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a database error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: Mutex::new(reports),
            failing: false,
        }
    }

    pub fn all(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    pub fn push(&self, report: Report) {
        self.reports.lock().unwrap().push(report);
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn insert(&self, report: &NewReport) -> Result<Report> {
        if self.failing {
            return Err(unavailable());
        }

        let stored = Report {
            id: Uuid::now_v7(),
            description: report.description.clone(),
            department: report.department.label().to_string(),
            city: report.city.clone(),
            police_unit: report.police_unit.clone(),
            police_name: report.police_name.clone(),
            latitude: report.coordinates.map(|c| c.latitude),
            longitude: report.coordinates.map(|c| c.longitude),
            is_anonymous: report.is_anonymous,
            status: ReportStatus::Pending,
            created_at: Utc::now(),
        };
        self.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, options: &ReportListOptions) -> Result<(Vec<Report>, i64)> {
        if self.failing {
            return Err(unavailable());
        }

        let mut matching: Vec<Report> = self
            .all()
            .into_iter()
            .filter(|r| options.status().map_or(true, |s| r.status == s))
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(options.offset() as usize)
            .take(options.limit() as usize)
            .collect();
        Ok((page, total))
    }

    async fn count_by_status(&self, status: ReportStatus) -> Result<i64> {
        if self.failing {
            return Err(unavailable());
        }
        Ok(self.all().iter().filter(|r| r.status == status).count() as i64)
    }
}

// =============================================================================
// CATEGORIES
// =============================================================================

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
    failing: bool,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn all(&self) -> Vec<Category> {
        self.categories.lock().unwrap().clone()
    }

    fn build(category: &CreateCategory) -> Category {
        let now = Utc::now();
        Category {
            id: Uuid::now_v7(),
            name: category.name.clone(),
            description: category.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>> {
        if self.failing {
            return Err(unavailable());
        }
        let mut categories = self.all();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn insert(&self, category: &CreateCategory) -> Result<Category> {
        if self.failing {
            return Err(unavailable());
        }

        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.name == category.name) {
            return Err(AppError::BadRequest(format!(
                "Category '{}' already exists",
                category.name
            )));
        }
        let created = Self::build(category);
        categories.push(created.clone());
        Ok(created)
    }

    async fn upsert_by_name(&self, category: &CreateCategory) -> Result<Category> {
        if self.failing {
            return Err(unavailable());
        }

        let mut categories = self.categories.lock().unwrap();
        if let Some(existing) = categories.iter().find(|c| c.name == category.name) {
            return Ok(existing.clone());
        }
        let created = Self::build(category);
        categories.push(created.clone());
        Ok(created)
    }

    async fn count(&self) -> Result<i64> {
        if self.failing {
            return Err(unavailable());
        }
        Ok(self.all().len() as i64)
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

pub fn document_fixture(title: &str, published_at: DateTime<Utc>) -> Document {
    Document {
        id: Uuid::now_v7(),
        title: title.to_string(),
        description: Some(Sentence(3..8).fake()),
        category: "Informes".to_string(),
        file_url: None,
        file_type: Some("PDF".to_string()),
        file_size: None,
        is_public: true,
        published_at,
        created_at: published_at,
        updated_at: published_at,
    }
}

#[derive(Default)]
pub struct InMemoryDocumentRepository {
    documents: Mutex<Vec<Document>>,
    failing: bool,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: Mutex::new(documents),
            failing: false,
        }
    }

    fn public(&self) -> Vec<Document> {
        let mut documents: Vec<Document> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.is_public)
            .cloned()
            .collect();
        documents.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(b.id.cmp(&a.id)));
        documents
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn list_public(&self, limit: Option<i64>) -> Result<Vec<Document>> {
        if self.failing {
            return Err(unavailable());
        }
        let documents = self.public();
        Ok(match limit {
            Some(limit) => documents.into_iter().take(limit as usize).collect(),
            None => documents,
        })
    }

    async fn insert(&self, document: &CreateDocument) -> Result<Document> {
        if self.failing {
            return Err(unavailable());
        }

        let now = Utc::now();
        let created = Document {
            id: Uuid::now_v7(),
            title: document.title.clone(),
            description: document.description.clone(),
            category: document.category.clone(),
            file_url: document.file_url.clone(),
            file_type: document.file_type.clone(),
            file_size: document.file_size,
            is_public: true,
            published_at: now,
            created_at: now,
            updated_at: now,
        };
        self.documents.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn count_public(&self) -> Result<i64> {
        if self.failing {
            return Err(unavailable());
        }
        Ok(self.public().len() as i64)
    }
}

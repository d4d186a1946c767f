use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report, ReportListOptions, ReportStatus};

/// Storage for citizen reports.
///
/// Status is never written after insert; moderation happens outside this service.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Insert one report in the pending state
    async fn insert(&self, report: &NewReport) -> Result<Report>;

    /// Reports matching `options`, newest first, plus the total match count
    async fn list(&self, options: &ReportListOptions) -> Result<(Vec<Report>, i64)>;

    async fn count_by_status(&self, status: ReportStatus) -> Result<i64>;
}

pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn insert(&self, report: &NewReport) -> Result<Report> {
        let (latitude, longitude) = match report.coordinates {
            Some(c) => (Some(c.latitude), Some(c.longitude)),
            None => (None, None),
        };

        let created = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (
                id, description, department, city, police_unit, police_name,
                latitude, longitude, is_anonymous, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'pending')
            RETURNING id, description, department, city, police_unit, police_name,
                      latitude, longitude, is_anonymous, status, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&report.description)
        .bind(report.department.label())
        .bind(&report.city)
        .bind(&report.police_unit)
        .bind(&report.police_name)
        .bind(latitude)
        .bind(longitude)
        .bind(report.is_anonymous)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert report: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(created)
    }

    async fn list(&self, options: &ReportListOptions) -> Result<(Vec<Report>, i64)> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM reports
            WHERE ($1::report_status IS NULL OR status = $1)
            "#,
        )
        .bind(options.status())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count reports: {:?}", e);
            AppError::Database(e)
        })?;

        let reports = sqlx::query_as::<_, Report>(
            r#"
            SELECT id, description, department, city, police_unit, police_name,
                   latitude, longitude, is_anonymous, status, created_at
            FROM reports
            WHERE ($1::report_status IS NULL OR status = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(options.status())
        .bind(options.limit())
        .bind(options.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((reports, total))
    }

    async fn count_by_status(&self, status: ReportStatus) -> Result<i64> {
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM reports WHERE status = $1"#)
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count {} reports: {:?}", status, e);
                AppError::Database(e)
            })
    }
}

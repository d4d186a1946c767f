use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::reports::models::{Report, ReportPage, ReportStatus};
use crate::shared::constants::SNIPPET_MAX_CHARS;
use crate::shared::types::Pagination;

// =============================================================================
// INTAKE
// =============================================================================

/// Raw citizen submission, shared by the HTML form and the JSON API.
///
/// Nothing here is trusted yet; see `intake::normalize`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSubmission {
    pub description: Option<String>,
    pub department: Option<String>,
    pub city: Option<String>,
    pub police_name: Option<String>,
    pub police_unit: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub is_anonymous: bool,
}

/// Fields posted by the `/denunciar` form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFormDto {
    pub description: Option<String>,
    pub department: Option<String>,
    pub city: Option<String>,
    pub police_name: Option<String>,
    pub police_unit: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// Checkbox value; browsers send "on" when checked and omit it otherwise
    pub is_anonymous: Option<String>,
}

impl From<ReportFormDto> for ReportSubmission {
    fn from(form: ReportFormDto) -> Self {
        let is_anonymous = form
            .is_anonymous
            .as_deref()
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "on" | "true" | "1"))
            .unwrap_or(false);

        Self {
            description: form.description,
            department: form.department,
            city: form.city,
            police_name: form.police_name,
            police_unit: form.police_unit,
            latitude: form.latitude,
            longitude: form.longitude,
            is_anonymous,
        }
    }
}

/// A coordinate sent either as a JSON number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CoordinateInput {
    Number(f64),
    Text(String),
}

impl CoordinateInput {
    fn into_text(self) -> String {
        match self {
            CoordinateInput::Number(n) => n.to_string(),
            CoordinateInput::Text(s) => s,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Request DTO for submitting a report through the JSON API
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDto {
    /// What happened (required, max 2000 characters)
    pub description: Option<String>,
    /// One of the nine departments (required)
    pub department: Option<String>,
    /// City or municipality (required)
    pub city: Option<String>,
    pub police_name: Option<String>,
    pub police_unit: Option<String>,
    pub latitude: Option<CoordinateInput>,
    pub longitude: Option<CoordinateInput>,
    /// Defaults to true when omitted
    #[serde(default = "default_true")]
    pub is_anonymous: bool,
}

impl From<CreateReportDto> for ReportSubmission {
    fn from(dto: CreateReportDto) -> Self {
        Self {
            description: dto.description,
            department: dto.department,
            city: dto.city,
            police_name: dto.police_name,
            police_unit: dto.police_unit,
            latitude: dto.latitude.map(CoordinateInput::into_text),
            longitude: dto.longitude.map(CoordinateInput::into_text),
            is_anonymous: dto.is_anonymous,
        }
    }
}

/// Response DTO for a freshly submitted report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub description: String,
    pub department: String,
    pub city: String,
    pub police_unit: Option<String>,
    pub police_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_anonymous: bool,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            description: r.description,
            department: r.department,
            city: r.city,
            police_unit: r.police_unit,
            police_name: r.police_name,
            latitude: r.latitude,
            longitude: r.longitude,
            is_anonymous: r.is_anonymous,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

// =============================================================================
// LISTING
// =============================================================================

/// Query params for report listings
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListReportsQuery {
    /// Page number (1-indexed). Invalid values fall back to 1.
    pub page: Option<String>,
}

/// Report as shown on a listing card
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportCardDto {
    pub id: Uuid,
    pub department: String,
    pub city: String,
    pub description_snippet: String,
    pub created_at: DateTime<Utc>,
    /// dd/mm/yyyy
    pub created_date: String,
    pub is_anonymous: bool,
    /// A police unit or officer name was given
    pub has_reference: bool,
    pub status: ReportStatus,
    pub status_label: String,
}

impl From<Report> for ReportCardDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            description_snippet: snippet(&r.description, SNIPPET_MAX_CHARS),
            department: r.department,
            city: r.city,
            created_date: r.created_at.format("%d/%m/%Y").to_string(),
            created_at: r.created_at,
            is_anonymous: r.is_anonymous,
            has_reference: r.police_unit.is_some() || r.police_name.is_some(),
            status: r.status,
            status_label: r.status.label().to_string(),
        }
    }
}

/// A page of report cards with pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportPageDto {
    pub items: Vec<ReportCardDto>,
    pub pagination: Pagination,
}

impl From<ReportPage> for ReportPageDto {
    fn from(page: ReportPage) -> Self {
        Self {
            items: page.reports.into_iter().map(ReportCardDto::from).collect(),
            pagination: page.pagination,
        }
    }
}

/// Cut `text` to at most `max_chars` characters, ending in an ellipsis when cut
pub fn snippet(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_checkbox_semantics() {
        let checked = ReportFormDto {
            is_anonymous: Some("on".to_string()),
            ..Default::default()
        };
        assert!(ReportSubmission::from(checked).is_anonymous);

        let unchecked = ReportFormDto::default();
        assert!(!ReportSubmission::from(unchecked).is_anonymous);
    }

    #[test]
    fn test_json_anonymity_defaults_to_true() {
        let dto: CreateReportDto =
            serde_json::from_str(r#"{"description":"x","department":"Beni","city":"Trinidad"}"#)
                .unwrap();
        assert!(dto.is_anonymous);
    }

    #[test]
    fn test_json_coordinates_accept_numbers_and_text() {
        let dto: CreateReportDto =
            serde_json::from_str(r#"{"latitude":-16.5,"longitude":"-68.15"}"#).unwrap();
        let submission = ReportSubmission::from(dto);
        assert_eq!(submission.latitude.as_deref(), Some("-16.5"));
        assert_eq!(submission.longitude.as_deref(), Some("-68.15"));
    }

    #[test]
    fn test_json_ignores_client_supplied_status() {
        let dto: Result<CreateReportDto, _> =
            serde_json::from_str(r#"{"description":"x","status":"APPROVED"}"#);
        assert!(dto.is_ok());
    }

    #[test]
    fn test_snippet_keeps_short_text() {
        assert_eq!(snippet("  corto  ", 10), "corto");
    }

    #[test]
    fn test_snippet_cuts_on_char_boundary() {
        let text = "ñ".repeat(300);
        let cut = snippet(&text, 240);
        assert_eq!(cut.chars().count(), 240);
        assert!(cut.ends_with('…'));
    }
}

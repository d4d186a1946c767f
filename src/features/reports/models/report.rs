use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Moderation state of a report, matching the `report_status` database enum.
///
/// Reports enter as `Pending`; `Approved` and `Rejected` are terminal and are
/// only ever set by the external moderation process.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "report_status", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Pending,
        ReportStatus::Approved,
        ReportStatus::Rejected,
    ];

    /// Only approved reports are visible on public read paths
    pub fn is_public(&self) -> bool {
        matches!(self, ReportStatus::Approved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "PENDING",
            ReportStatus::Approved => "APPROVED",
            ReportStatus::Rejected => "REJECTED",
        }
    }

    /// Badge label shown in the moderation listing
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pendiente",
            ReportStatus::Approved => "Aprobada",
            ReportStatus::Rejected => "Rechazada",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ReportStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown report status '{}'", wanted))
    }
}

/// Administrative departments a report can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Department {
    #[serde(rename = "La Paz")]
    LaPaz,
    Cochabamba,
    #[serde(rename = "Santa Cruz")]
    SantaCruz,
    Oruro,
    #[serde(rename = "Potosí")]
    Potosi,
    Chuquisaca,
    Tarija,
    Beni,
    Pando,
}

impl Department {
    pub const ALL: [Department; 9] = [
        Department::LaPaz,
        Department::Cochabamba,
        Department::SantaCruz,
        Department::Oruro,
        Department::Potosi,
        Department::Chuquisaca,
        Department::Tarija,
        Department::Beni,
        Department::Pando,
    ];

    /// Canonical label, also the value stored in `reports.department`
    pub fn label(&self) -> &'static str {
        match self {
            Department::LaPaz => "La Paz",
            Department::Cochabamba => "Cochabamba",
            Department::SantaCruz => "Santa Cruz",
            Department::Oruro => "Oruro",
            Department::Potosi => "Potosí",
            Department::Chuquisaca => "Chuquisaca",
            Department::Tarija => "Tarija",
            Department::Beni => "Beni",
            Department::Pando => "Pando",
        }
    }

    /// Match user input against the known departments.
    ///
    /// Case, surrounding whitespace and accents are ignored, so "potosi" and
    /// " POTOSÍ " both resolve to `Potosi`.
    pub fn parse(input: &str) -> Option<Department> {
        let wanted = fold(input.trim());
        if wanted.is_empty() {
            return None;
        }
        Department::ALL
            .into_iter()
            .find(|d| fold(d.label()) == wanted)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn fold(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'Á' => 'a',
            'é' | 'É' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'Ó' => 'o',
            'ú' | 'Ú' | 'ü' | 'Ü' => 'u',
            'ñ' | 'Ñ' => 'n',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Point where the incident happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build coordinates from raw text inputs.
    ///
    /// Both values must parse to finite numbers; otherwise neither is kept.
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Option<Coordinates> {
        let latitude = parse_finite(latitude?)?;
        let longitude = parse_finite(longitude?)?;
        Some(Coordinates {
            latitude,
            longitude,
        })
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Database model for report
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Report {
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

/// Normalized, validated data for inserting a report.
///
/// There is no status field: every insert is written as pending.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewReport {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "Description must be 1-2000 characters"
    ))]
    pub description: String,

    pub department: Department,

    #[validate(length(min = 1, max = 120, message = "City must be 1-120 characters"))]
    pub city: String,

    #[validate(length(max = 120, message = "Police unit must not exceed 120 characters"))]
    pub police_unit: Option<String>,

    #[validate(length(max = 120, message = "Police name must not exceed 120 characters"))]
    pub police_name: Option<String>,

    pub coordinates: Option<Coordinates>,

    pub is_anonymous: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(ReportStatus::default(), ReportStatus::Pending);
    }

    #[test]
    fn test_only_approved_is_public() {
        assert!(ReportStatus::Approved.is_public());
        assert!(!ReportStatus::Pending.is_public());
        assert!(!ReportStatus::Rejected.is_public());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("approved".parse::<ReportStatus>(), Ok(ReportStatus::Approved));
        assert_eq!(" PENDING ".parse::<ReportStatus>(), Ok(ReportStatus::Pending));
        assert!("published".parse::<ReportStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&ReportStatus::Rejected).unwrap();
        assert_eq!(json, "\"REJECTED\"");
    }

    #[test]
    fn test_department_parse() {
        assert_eq!(Department::parse("La Paz"), Some(Department::LaPaz));
        assert_eq!(Department::parse("  santa cruz "), Some(Department::SantaCruz));
        assert_eq!(Department::parse("Potosi"), Some(Department::Potosi));
        assert_eq!(Department::parse("POTOSÍ"), Some(Department::Potosi));
        assert_eq!(Department::parse("Lima"), None);
        assert_eq!(Department::parse("   "), None);
    }

    #[test]
    fn test_every_department_round_trips_through_its_label() {
        for department in Department::ALL {
            assert_eq!(Department::parse(department.label()), Some(department));
        }
    }

    #[test]
    fn test_coordinates_require_both_values() {
        assert_eq!(
            Coordinates::parse(Some("-16.5"), Some("-68.15")),
            Some(Coordinates {
                latitude: -16.5,
                longitude: -68.15
            })
        );
        assert_eq!(Coordinates::parse(Some("-16.5"), None), None);
        assert_eq!(Coordinates::parse(None, Some("-68.15")), None);
        assert_eq!(Coordinates::parse(Some("-16.5"), Some("oeste")), None);
        assert_eq!(Coordinates::parse(Some("NaN"), Some("-68.15")), None);
        assert_eq!(Coordinates::parse(Some("inf"), Some("-68.15")), None);
        assert_eq!(Coordinates::parse(Some(""), Some("")), None);
    }
}

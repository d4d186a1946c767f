//! Turns an untrusted submission into a `NewReport`.
//!
//! Required fields are checked after trimming, optional text collapses to
//! `None` when blank, and coordinates are kept only as a complete pair.

use validator::Validate;

use crate::features::reports::dtos::ReportSubmission;
use crate::features::reports::models::{Coordinates, Department, NewReport};

pub fn normalize(submission: ReportSubmission) -> Result<NewReport, Vec<String>> {
    let mut errors = Vec::new();

    let description = required(submission.description, "Description", &mut errors);
    let city = required(submission.city, "City", &mut errors);
    let department = required(submission.department, "Department", &mut errors).and_then(|d| {
        let parsed = Department::parse(&d);
        if parsed.is_none() {
            errors.push(format!(
                "Department must be one of: {}",
                Department::ALL
                    .iter()
                    .map(|d| d.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        parsed
    });

    let (Some(description), Some(city), Some(department)) = (description, city, department)
    else {
        return Err(errors);
    };

    let report = NewReport {
        description,
        department,
        city,
        police_unit: optional(submission.police_unit),
        police_name: optional(submission.police_name),
        coordinates: Coordinates::parse(
            submission.latitude.as_deref(),
            submission.longitude.as_deref(),
        ),
        is_anonymous: submission.is_anonymous,
    };

    report.validate().map_err(|e| {
        let mut messages: Vec<String> = e
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .map(|err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string())
            })
            .collect();
        messages.sort();
        messages
    })?;

    Ok(report)
}

fn required(value: Option<String>, field: &str, errors: &mut Vec<String>) -> Option<String> {
    let value = optional(value);
    if value.is_none() {
        errors.push(format!("{} is required", field));
    }
    value
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

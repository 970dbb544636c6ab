use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::reports::models::{Report, ReportStatus};
use crate::shared::validation::{validate_not_blank, validate_region};

/// Report types offered by the submission form
pub const REPORT_TYPES: [&str; 8] = [
    "Incumplimiento de Contrato Colectivo",
    "Condiciones de Trabajo Inseguras",
    "Acoso Laboral o Mobbing",
    "Retraso o Falta de Pago de Salarios",
    "Despido Injustificado",
    "Violación a la Libertad Sindical",
    "Discriminación",
    OTHER_REPORT_TYPE,
];

/// Report type that requires a free-text title
pub const OTHER_REPORT_TYPE: &str = "Otro";

fn validate_report_type(value: &str) -> Result<(), ValidationError> {
    if REPORT_TYPES.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("unknown_report_type");
    error.message = Some(format!("'{}' is not a known report type", value).into());
    Err(error)
}

fn validate_other_title(dto: &CreateReportDto) -> Result<(), ValidationError> {
    let blank = dto
        .other_title
        .as_deref()
        .is_none_or(|title| title.trim().is_empty());

    if dto.report_type == OTHER_REPORT_TYPE && blank {
        let mut error = ValidationError::new("other_title_required");
        error.message = Some("otherTitle is required when reportType is 'Otro'".into());
        return Err(error);
    }
    Ok(())
}

/// Anonymous report submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_other_title"))]
pub struct CreateReportDto {
    #[validate(custom(function = "validate_report_type"))]
    pub report_type: String,

    /// Title used when `reportType` is `Otro`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200, message = "otherTitle must not exceed 200 characters"))]
    pub other_title: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    /// Federal entity name, e.g. `Jalisco`
    #[validate(custom(function = "validate_region"))]
    pub state: String,
}

impl CreateReportDto {
    pub fn title(&self) -> String {
        match (&self.other_title, self.report_type.as_str()) {
            (Some(other), OTHER_REPORT_TYPE) => other.trim().to_string(),
            _ => self.report_type.clone(),
        }
    }
}

/// What an anonymous submitter can see about their report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResponseDto {
    pub id: String,
    pub title: String,
    pub status: ReportStatus,
    pub status_description: String,
    /// Zero-based position on the progress bar; absent for `No Procede`
    pub progress_step: Option<usize>,
    pub progress_total: usize,
    pub is_terminal: bool,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Report> for TrackingResponseDto {
    fn from(r: Report) -> Self {
        Self {
            status_description: r.status.public_description().to_string(),
            progress_step: r.status.progress_step(),
            progress_total: ReportStatus::PROGRESS.len(),
            is_terminal: r.status.is_terminal(),
            id: r.id,
            title: r.title,
            status: r.status,
            submitted_at: r.timestamp,
            updated_at: r.updated_at,
        }
    }
}

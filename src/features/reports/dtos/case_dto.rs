use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::{ActionStatus, Priority, ReportStatus};
use crate::shared::validation::validate_not_blank;

/// Request DTO for changing the status of a report, optionally with a note
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusDto {
    pub status: ReportStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000, message = "Note must not exceed 2000 characters"))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddNoteDto {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 2000, message = "Note must not exceed 2000 characters")
    )]
    pub text: String,

    /// Defaults to the authenticated staff member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateActionDto {
    #[validate(custom(function = "validate_not_blank"))]
    pub action: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub assigned_to: String,

    /// Calendar date, `YYYY-MM-DD`
    pub due_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateActionStatusDto {
    pub status: ActionStatus,
}

/// Assignee and priority; an absent field clears the stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDto {
    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RatingDto {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
}

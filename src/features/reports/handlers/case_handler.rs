use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, StaffUser};
use crate::features::dashboard::services::{ReportFilter, ReportFilterQuery};
use crate::features::reports::dtos::{
    AddNoteDto, AssignmentDto, ChangeStatusDto, CreateActionDto, RatingDto,
    UpdateActionStatusDto,
};
use crate::features::reports::models::Report;
use crate::features::reports::services::{ReportService, DEFAULT_NOTE_AUTHOR};
use crate::shared::types::{ApiResponse, Meta};

/// Explicit author, else the signed-in staff member
fn note_author(explicit: Option<&str>, staff: &StaffUser) -> String {
    explicit
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .or_else(|| Some(staff.username.trim()).filter(|u| !u.is_empty()))
        .unwrap_or(DEFAULT_NOTE_AUTHOR)
        .to_string()
}

fn ok(report: Report) -> Json<ApiResponse<Report>> {
    Json(ApiResponse::success(Some(report), None, None))
}

/// List reports, most recent first, narrowed by the filter query
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    params(ReportFilterQuery),
    responses(
        (status = 200, description = "Matching reports", body = ApiResponse<Vec<Report>>),
        (status = 400, description = "Invalid filter value"),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = [])),
    tag = "cases"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
    Query(query): Query<ReportFilterQuery>,
) -> Result<Json<ApiResponse<Vec<Report>>>> {
    let filter = ReportFilter::try_from(query)?;
    let reports = service.list(&filter).await;
    let total = reports.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(reports),
        None,
        Some(Meta { total }),
    )))
}

/// Full report detail
#[utoipa::path(
    get,
    path = "/api/admin/reports/{id}",
    params(("id" = String, Path, description = "Tracking id")),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<Report>),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Report not found")
    ),
    security(("basic_auth" = [])),
    tag = "cases"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Report>>> {
    Ok(ok(service.get(&id).await?))
}

/// Replace a report wholesale; notes may only be appended
#[utoipa::path(
    put,
    path = "/api/admin/reports/{id}",
    params(("id" = String, Path, description = "Tracking id")),
    request_body = Report,
    responses(
        (status = 200, description = "Report replaced", body = ApiResponse<Report>),
        (status = 400, description = "Id or creation timestamp changed, rating out of range or unknown state"),
        (status = 404, description = "Report not found"),
        (status = 409, description = "Existing internal notes were altered or transition not allowed")
    ),
    security(("basic_auth" = [])),
    tag = "cases"
)]
pub async fn replace_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppJson(report): AppJson<Report>,
) -> Result<Json<ApiResponse<Report>>> {
    Ok(ok(service.replace(&id, report).await?))
}

/// Change status, optionally recording a note in the same update
#[utoipa::path(
    patch,
    path = "/api/admin/reports/{id}/status",
    params(("id" = String, Path, description = "Tracking id")),
    request_body = ChangeStatusDto,
    responses(
        (status = 200, description = "Status changed", body = ApiResponse<Report>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Report not found"),
        (status = 409, description = "Transition not allowed")
    ),
    security(("basic_auth" = [])),
    tag = "cases"
)]
pub async fn change_status(
    staff: StaffUser,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<ChangeStatusDto>,
) -> Result<Json<ApiResponse<Report>>> {
    dto.validate()?;
    let author = note_author(None, &staff);
    Ok(ok(service
        .change_status(&id, dto.status, dto.note, &author)
        .await?))
}

/// Append an internal note
#[utoipa::path(
    post,
    path = "/api/admin/reports/{id}/notes",
    params(("id" = String, Path, description = "Tracking id")),
    request_body = AddNoteDto,
    responses(
        (status = 200, description = "Note added", body = ApiResponse<Report>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Report not found")
    ),
    security(("basic_auth" = [])),
    tag = "cases"
)]
pub async fn add_note(
    staff: StaffUser,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<AddNoteDto>,
) -> Result<Json<ApiResponse<Report>>> {
    dto.validate()?;
    let author = note_author(dto.author.as_deref(), &staff);
    Ok(ok(service.add_note(&id, &dto.text, &author).await?))
}

/// Add a follow-up action
#[utoipa::path(
    post,
    path = "/api/admin/reports/{id}/actions",
    params(("id" = String, Path, description = "Tracking id")),
    request_body = CreateActionDto,
    responses(
        (status = 200, description = "Action added", body = ApiResponse<Report>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Report not found")
    ),
    security(("basic_auth" = [])),
    tag = "cases"
)]
pub async fn add_action(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<CreateActionDto>,
) -> Result<Json<ApiResponse<Report>>> {
    Ok(ok(service.add_action(&id, dto).await?))
}

/// Move an action to a new status
#[utoipa::path(
    patch,
    path = "/api/admin/reports/{id}/actions/{action_id}",
    params(
        ("id" = String, Path, description = "Tracking id"),
        ("action_id" = String, Path, description = "Action id")
    ),
    request_body = UpdateActionStatusDto,
    responses(
        (status = 200, description = "Action updated", body = ApiResponse<Report>),
        (status = 404, description = "Report or action not found")
    ),
    security(("basic_auth" = [])),
    tag = "cases"
)]
pub async fn update_action_status(
    State(service): State<Arc<ReportService>>,
    Path((id, action_id)): Path<(String, String)>,
    AppJson(dto): AppJson<UpdateActionStatusDto>,
) -> Result<Json<ApiResponse<Report>>> {
    Ok(ok(service
        .update_action_status(&id, &action_id, dto.status)
        .await?))
}

/// Set assignee and priority; absent fields are cleared
#[utoipa::path(
    patch,
    path = "/api/admin/reports/{id}/assignment",
    params(("id" = String, Path, description = "Tracking id")),
    request_body = AssignmentDto,
    responses(
        (status = 200, description = "Assignment updated", body = ApiResponse<Report>),
        (status = 404, description = "Report not found")
    ),
    security(("basic_auth" = [])),
    tag = "cases"
)]
pub async fn assign_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<AssignmentDto>,
) -> Result<Json<ApiResponse<Report>>> {
    Ok(ok(service.assign(&id, dto).await?))
}

/// Record the satisfaction rating of a case
#[utoipa::path(
    post,
    path = "/api/admin/reports/{id}/rating",
    params(("id" = String, Path, description = "Tracking id")),
    request_body = RatingDto,
    responses(
        (status = 200, description = "Rating stored", body = ApiResponse<Report>),
        (status = 400, description = "Rating outside 1..=5"),
        (status = 404, description = "Report not found")
    ),
    security(("basic_auth" = [])),
    tag = "cases"
)]
pub async fn rate_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<RatingDto>,
) -> Result<Json<ApiResponse<Report>>> {
    dto.validate()?;
    Ok(ok(service.rate(&id, dto.rating).await?))
}

/// Run the classifier again on a stored report
#[utoipa::path(
    post,
    path = "/api/admin/reports/{id}/reclassify",
    params(("id" = String, Path, description = "Tracking id")),
    responses(
        (status = 200, description = "Analysis replaced", body = ApiResponse<Report>),
        (status = 404, description = "Report not found")
    ),
    security(("basic_auth" = [])),
    tag = "cases"
)]
pub async fn reclassify_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Report>>> {
    Ok(ok(service.reclassify(&id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(name: &str) -> StaffUser {
        StaffUser {
            username: name.to_string(),
        }
    }

    #[test]
    fn test_note_author_precedence() {
        assert_eq!(note_author(Some(" Agente 007 "), &staff("admin")), "Agente 007");
        assert_eq!(note_author(Some("  "), &staff("admin")), "admin");
        assert_eq!(note_author(None, &staff("")), DEFAULT_NOTE_AUTHOR);
    }
}

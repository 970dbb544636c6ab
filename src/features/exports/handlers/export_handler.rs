use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::services::{ReportFilter, ReportFilterQuery};
use crate::features::exports::services::{
    content_disposition, export_filename, region_export_filename, reports_to_csv,
};
use crate::features::regions::models::find_region;
use crate::features::reports::services::ReportService;

fn csv_response(csv: String, filename: &str) -> Result<Response> {
    let disposition = HeaderValue::from_str(&content_disposition(filename)).map_err(|e| {
        tracing::error!("Invalid export filename {}: {:?}", filename, e);
        AppError::Internal("Failed to build export response".to_string())
    })?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/csv; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

/// Download the filtered report set as CSV
#[utoipa::path(
    get,
    path = "/api/admin/exports/reports",
    params(ReportFilterQuery),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv", body = String),
        (status = 400, description = "Invalid filter value"),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = [])),
    tag = "exports"
)]
pub async fn export_reports(
    State(service): State<Arc<ReportService>>,
    Query(query): Query<ReportFilterQuery>,
) -> Result<Response> {
    let filter = ReportFilter::try_from(query)?;
    let reports = service.list(&filter).await;

    tracing::info!("Exporting {} reports", reports.len());
    csv_response(
        reports_to_csv(&reports)?,
        &export_filename(Utc::now().date_naive()),
    )
}

/// Download every report filed under one state as CSV
#[utoipa::path(
    get,
    path = "/api/admin/exports/regions/{state}",
    params(("state" = String, Path, description = "State code (e.g. NL) or exact name")),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv", body = String),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Unknown state")
    ),
    security(("basic_auth" = [])),
    tag = "exports"
)]
pub async fn export_region(
    State(service): State<Arc<ReportService>>,
    Path(state): Path<String>,
) -> Result<Response> {
    let region = find_region(&state)
        .ok_or_else(|| AppError::NotFound(format!("State {} not found", state)))?;

    let filter = ReportFilter {
        state: Some(region.name.to_string()),
        ..Default::default()
    };
    let reports = service.list(&filter).await;

    tracing::info!("Exporting {} reports for {}", reports.len(), region.name);
    csv_response(
        reports_to_csv(&reports)?,
        &region_export_filename(region.name, Utc::now().date_naive()),
    )
}

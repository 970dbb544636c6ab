use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{CreateReportDto, TrackingResponseDto};
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportService;
use crate::shared::types::ApiResponse;

/// Submit an anonymous report
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report stored; data.id is the tracking id", body = ApiResponse<Report>),
        (status = 400, description = "Validation error")
    ),
    tag = "reports"
)]
pub async fn submit_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<Report>>)> {
    let report = service.submit(dto).await?;
    let message = format!("Reporte recibido. Su ID de seguimiento es {}", report.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(report), Some(message), None)),
    ))
}

/// Public status of a report by tracking id
#[utoipa::path(
    get,
    path = "/api/reports/track/{tracking_id}",
    params(
        ("tracking_id" = String, Path, description = "Tracking id, e.g. CATEM-LZ4K9Q-7F3A")
    ),
    responses(
        (status = 200, description = "Report status", body = ApiResponse<TrackingResponseDto>),
        (status = 404, description = "No report with that tracking id")
    ),
    tag = "reports"
)]
pub async fn track_report(
    State(service): State<Arc<ReportService>>,
    Path(tracking_id): Path<String>,
) -> Result<Json<ApiResponse<TrackingResponseDto>>> {
    let status = service.track(&tracking_id).await?;
    Ok(Json(ApiResponse::success(Some(status), None, None)))
}

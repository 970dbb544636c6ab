use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::{DashboardService, ReportFilter, ReportFilterQuery};
use crate::shared::types::{ApiResponse, Meta};

// ============================================================================
// KPIs
// ============================================================================

/// Headline figures for the (optionally filtered) report set
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/kpis",
    tag = "Dashboard",
    params(ReportFilterQuery),
    responses(
        (status = 200, description = "Dashboard KPIs", body = ApiResponse<DashboardKpisDto>),
        (status = 400, description = "Invalid filter value"),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_kpis(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<ReportFilterQuery>,
) -> Result<Json<ApiResponse<DashboardKpisDto>>> {
    let filter = ReportFilter::try_from(query)?;
    let kpis = service.kpis(&filter).await;
    Ok(Json(ApiResponse::success(Some(kpis), None, None)))
}

// ============================================================================
// Charts
// ============================================================================

/// Bar data for every chart
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/charts",
    tag = "Dashboard",
    params(ReportFilterQuery),
    responses(
        (status = 200, description = "All chart series", body = ApiResponse<DashboardChartsDto>),
        (status = 400, description = "Invalid filter value"),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_charts(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<ReportFilterQuery>,
) -> Result<Json<ApiResponse<DashboardChartsDto>>> {
    let filter = ReportFilter::try_from(query)?;
    let charts = service.charts(&filter).await;
    Ok(Json(ApiResponse::success(Some(charts), None, None)))
}

/// Bar data for a single chart
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/charts/{dimension}",
    tag = "Dashboard",
    params(
        ("dimension" = ChartDimension, Path, description = "status, category, severity or state"),
        ReportFilterQuery
    ),
    responses(
        (status = 200, description = "Chart bars", body = ApiResponse<Vec<ChartBarDto>>),
        (status = 400, description = "Invalid dimension or filter value"),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_chart(
    State(service): State<Arc<DashboardService>>,
    Path(dimension): Path<String>,
    Query(query): Query<ReportFilterQuery>,
) -> Result<Json<ApiResponse<Vec<ChartBarDto>>>> {
    let dimension: ChartDimension =
        serde_json::from_value(serde_json::Value::String(dimension.clone()))
            .map_err(|_| AppError::BadRequest(format!("Unknown chart dimension '{}'", dimension)))?;
    let filter = ReportFilter::try_from(query)?;

    let bars = service.chart(dimension, &filter).await;
    let total = bars.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(bars),
        None,
        Some(Meta { total }),
    )))
}

/// Filter and reports behind a clicked chart bar
#[utoipa::path(
    post,
    path = "/api/admin/dashboard/drill-down",
    tag = "Dashboard",
    request_body = DrillDownDto,
    responses(
        (status = 200, description = "Filter and matching reports", body = ApiResponse<DrillDownResponseDto>),
        (status = 400, description = "Unknown label for the dimension"),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn drill_down(
    State(service): State<Arc<DashboardService>>,
    AppJson(selection): AppJson<DrillDownDto>,
) -> Result<Json<ApiResponse<DrillDownResponseDto>>> {
    let result = service.drill_down(&selection).await?;
    let total = result.reports.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(result),
        None,
        Some(Meta { total }),
    )))
}

// ============================================================================
// Statistics
// ============================================================================

/// Case management statistics
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/stats",
    tag = "Dashboard",
    params(ReportFilterQuery),
    responses(
        (status = 200, description = "Case statistics", body = ApiResponse<CaseStatsDto>),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_case_stats(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<ReportFilterQuery>,
) -> Result<Json<ApiResponse<CaseStatsDto>>> {
    let filter = ReportFilter::try_from(query)?;
    let stats = service.case_stats(&filter).await;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Report count per state, every state included
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/regions",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Reports per state", body = ApiResponse<Vec<RegionCountDto>>),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_regional_summary(
    State(service): State<Arc<DashboardService>>,
) -> Json<ApiResponse<Vec<RegionCountDto>>> {
    let regions = service.regional_summary().await;
    let total = regions.len() as i64;
    Json(ApiResponse::success(
        Some(regions),
        None,
        Some(Meta { total }),
    ))
}

use axum::{extract::Path, Json};

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::RegionResponseDto;
use crate::features::regions::models::{find_region, REGIONS};
use crate::shared::types::{ApiResponse, Meta};

/// List the states a report can be filed under
#[utoipa::path(
    get,
    path = "/api/regions",
    responses(
        (status = 200, description = "List of states", body = ApiResponse<Vec<RegionResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_regions() -> Json<ApiResponse<Vec<RegionResponseDto>>> {
    Json(ApiResponse::success(
        Some(REGIONS.iter().map(RegionResponseDto::from).collect()),
        None,
        Some(Meta {
            total: REGIONS.len() as i64,
        }),
    ))
}

/// Get a state by code or name
#[utoipa::path(
    get,
    path = "/api/regions/{code}",
    params(
        ("code" = String, Path, description = "State code (e.g. JAL) or exact name")
    ),
    responses(
        (status = 200, description = "State found", body = ApiResponse<RegionResponseDto>),
        (status = 404, description = "State not found")
    ),
    tag = "regions"
)]
pub async fn get_region(Path(code): Path<String>) -> Result<Json<ApiResponse<RegionResponseDto>>> {
    let region = find_region(&code)
        .map(RegionResponseDto::from)
        .ok_or_else(|| AppError::NotFound(format!("State {} not found", code)))?;
    Ok(Json(ApiResponse::success(Some(region), None, None)))
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::dashboard::services::ReportFilter;
use crate::features::reports::models::Report;

// ============================================================================
// KPIs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpisDto {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    /// Mean creation-to-last-note time of closed reports, 1 decimal
    pub average_resolution_days: Option<f64>,
    /// `"<x.y> días"` or `"N/A"`
    pub average_resolution_label: String,
}

// ============================================================================
// Charts
// ============================================================================

/// Grouping used by a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartDimension {
    Status,
    Category,
    Severity,
    State,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChartBarDto {
    pub label: String,
    pub value: usize,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardChartsDto {
    pub by_status: Vec<ChartBarDto>,
    pub by_category: Vec<ChartBarDto>,
    pub by_severity: Vec<ChartBarDto>,
    pub by_state: Vec<ChartBarDto>,
}

// ============================================================================
// Drill-down
// ============================================================================

/// A clicked chart bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DrillDownDto {
    pub dimension: ChartDimension,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrillDownResponseDto {
    pub filter: ReportFilter,
    pub reports: Vec<Report>,
}

// ============================================================================
// Case statistics
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LabelCountDto {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseStatsDto {
    pub total: usize,
    /// Every status in display order, zeros included
    pub by_status: Vec<LabelCountDto>,
    /// Every severity in order; reports without analysis are not counted
    pub by_severity: Vec<LabelCountDto>,
    /// Every priority in order; reports without priority are not counted
    pub by_priority: Vec<LabelCountDto>,
    pub average_rating: Option<f64>,
    pub average_resolution_days: Option<f64>,
}

// ============================================================================
// Regions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionCountDto {
    pub code: String,
    pub name: String,
    pub count: usize,
}

use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::{aggregation, ReportFilter};
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportStore;

/// Service for the managerial dashboard. Every figure is computed from a
/// fresh snapshot of the store, narrowed by the caller's filter.
pub struct DashboardService {
    store: Arc<ReportStore>,
}

impl DashboardService {
    pub fn new(store: Arc<ReportStore>) -> Self {
        Self { store }
    }

    async fn snapshot(&self, filter: &ReportFilter) -> Vec<Report> {
        filter.apply(self.store.get_all().await)
    }

    pub async fn kpis(&self, filter: &ReportFilter) -> DashboardKpisDto {
        aggregation::compute_kpis(&self.snapshot(filter).await)
    }

    pub async fn charts(&self, filter: &ReportFilter) -> DashboardChartsDto {
        aggregation::build_charts(&self.snapshot(filter).await)
    }

    pub async fn chart(&self, dimension: ChartDimension, filter: &ReportFilter) -> Vec<ChartBarDto> {
        aggregation::build_chart(&self.snapshot(filter).await, dimension)
    }

    /// Resolve a clicked bar into its filter and the reports behind it
    pub async fn drill_down(&self, selection: &DrillDownDto) -> Result<DrillDownResponseDto> {
        let filter = aggregation::drill_down(selection)?;
        let reports = self.snapshot(&filter).await;
        tracing::debug!(
            "Drill-down on {:?} '{}' matched {} reports",
            selection.dimension,
            selection.label,
            reports.len()
        );
        Ok(DrillDownResponseDto { filter, reports })
    }

    pub async fn case_stats(&self, filter: &ReportFilter) -> CaseStatsDto {
        aggregation::case_stats(&self.snapshot(filter).await)
    }

    pub async fn regional_summary(&self) -> Vec<RegionCountDto> {
        aggregation::regional_summary(&self.store.get_all().await)
    }
}

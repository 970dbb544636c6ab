use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::exports::handlers as exports_handlers;
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_regions,
        regions_handlers::get_region,
        // Reports (public)
        reports_handlers::report_handler::submit_report,
        reports_handlers::report_handler::track_report,
        // Case management (admin)
        reports_handlers::case_handler::list_reports,
        reports_handlers::case_handler::get_report,
        reports_handlers::case_handler::replace_report,
        reports_handlers::case_handler::change_status,
        reports_handlers::case_handler::add_note,
        reports_handlers::case_handler::add_action,
        reports_handlers::case_handler::update_action_status,
        reports_handlers::case_handler::assign_report,
        reports_handlers::case_handler::rate_report,
        reports_handlers::case_handler::reclassify_report,
        // Dashboard (admin)
        dashboard_handlers::dashboard_handler::get_kpis,
        dashboard_handlers::dashboard_handler::get_charts,
        dashboard_handlers::dashboard_handler::get_chart,
        dashboard_handlers::dashboard_handler::drill_down,
        dashboard_handlers::dashboard_handler::get_case_stats,
        dashboard_handlers::dashboard_handler::get_regional_summary,
        // Exports (admin)
        exports_handlers::export_handler::export_reports,
        exports_handlers::export_handler::export_region,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Regions
            regions_dtos::RegionResponseDto,
            ApiResponse<Vec<regions_dtos::RegionResponseDto>>,
            ApiResponse<regions_dtos::RegionResponseDto>,
            // Reports
            reports_models::ReportStatus,
            reports_models::Severity,
            reports_models::Priority,
            reports_models::ActionStatus,
            reports_models::CaseAction,
            reports_models::AnalysisSource,
            reports_models::Analysis,
            reports_models::InternalNote,
            reports_models::Report,
            reports_dtos::CreateReportDto,
            reports_dtos::TrackingResponseDto,
            reports_dtos::ChangeStatusDto,
            reports_dtos::AddNoteDto,
            reports_dtos::CreateActionDto,
            reports_dtos::UpdateActionStatusDto,
            reports_dtos::AssignmentDto,
            reports_dtos::RatingDto,
            ApiResponse<reports_models::Report>,
            ApiResponse<Vec<reports_models::Report>>,
            ApiResponse<reports_dtos::TrackingResponseDto>,
            // Dashboard
            dashboard_dtos::DashboardKpisDto,
            dashboard_dtos::ChartDimension,
            dashboard_dtos::ChartBarDto,
            dashboard_dtos::DashboardChartsDto,
            dashboard_dtos::DrillDownDto,
            dashboard_dtos::DrillDownResponseDto,
            dashboard_dtos::LabelCountDto,
            dashboard_dtos::CaseStatsDto,
            dashboard_dtos::RegionCountDto,
            crate::features::dashboard::services::ReportFilter,
            ApiResponse<dashboard_dtos::DashboardKpisDto>,
            ApiResponse<dashboard_dtos::DashboardChartsDto>,
            ApiResponse<Vec<dashboard_dtos::ChartBarDto>>,
            ApiResponse<dashboard_dtos::DrillDownResponseDto>,
            ApiResponse<dashboard_dtos::CaseStatsDto>,
            ApiResponse<Vec<dashboard_dtos::RegionCountDto>>,
        )
    ),
    tags(
        (name = "regions", description = "Mexican federal entities"),
        (name = "reports", description = "Anonymous report submission and tracking (public)"),
        (name = "cases", description = "Case management (staff only)"),
        (name = "Dashboard", description = "Managerial dashboard (staff only)"),
        (name = "exports", description = "CSV downloads (staff only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "CATEM Denuncias API",
        version = "0.1.0",
        description = "API documentation for the CATEM whistleblower report service",
    )
)]
pub struct ApiDoc;

/// Adds the HTTP Basic security scheme used by the staff routes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_staff_routes_with_basic_auth() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/reports"));
        assert!(doc.paths.paths.contains_key("/api/admin/dashboard/drill-down"));
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("basic_auth")));
    }
}

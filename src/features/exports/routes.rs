use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::exports::handlers;
use crate::features::reports::services::ReportService;

/// Create CSV export routes (admin only, auth applied by the caller)
pub fn routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/admin/exports/reports", get(handlers::export_reports))
        .route(
            "/api/admin/exports/regions/{state}",
            get(handlers::export_region),
        )
        .with_state(report_service)
}

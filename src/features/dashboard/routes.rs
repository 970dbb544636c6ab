use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create dashboard routes (admin only, auth applied by the caller)
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/admin/dashboard/kpis", get(handlers::get_kpis))
        .route("/api/admin/dashboard/charts", get(handlers::get_charts))
        .route(
            "/api/admin/dashboard/charts/{dimension}",
            get(handlers::get_chart),
        )
        .route("/api/admin/dashboard/drill-down", post(handlers::drill_down))
        .route("/api/admin/dashboard/stats", get(handlers::get_case_stats))
        .route(
            "/api/admin/dashboard/regions",
            get(handlers::get_regional_summary),
        )
        .with_state(dashboard_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::reports::services::{ReportStore, TrackingIdGenerator};
    use crate::shared::test_helpers::generated_reports;

    async fn server() -> TestServer {
        let store = Arc::new(ReportStore::new(TrackingIdGenerator::new("CATEM")));
        store.seed(generated_reports(24)).await;
        TestServer::new(routes(Arc::new(DashboardService::new(store)))).unwrap()
    }

    #[tokio::test]
    async fn test_kpis_with_filter_query() {
        let server = server().await;

        let all = server.get("/api/admin/dashboard/kpis").await;
        all.assert_status_ok();
        assert_eq!(all.json::<Value>()["data"]["total"], 24);

        let received = server
            .get("/api/admin/dashboard/kpis")
            .add_query_param("status", "Recibido")
            .add_query_param("category", "All")
            .await;
        received.assert_status_ok();
        assert_eq!(received.json::<Value>()["data"]["total"], 4);

        server
            .get("/api/admin/dashboard/kpis")
            .add_query_param("severity", "Extrema")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_single_chart_and_unknown_dimension() {
        let server = server().await;

        let status = server.get("/api/admin/dashboard/charts/status").await;
        status.assert_status_ok();
        let body: Value = status.json();
        assert_eq!(body["data"][0]["label"], "Recibido");
        assert_eq!(body["data"][0]["color"], "#3b82f6");

        server
            .get("/api/admin/dashboard/charts/priority")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_drill_down() {
        let server = server().await;

        let response = server
            .post("/api/admin/dashboard/drill-down")
            .json(&json!({ "dimension": "status", "label": "En Revisión" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["filter"], json!({ "status": "En Revisión" }));
        assert_eq!(body["meta"]["total"], 4);

        server
            .post("/api/admin/dashboard/drill-down")
            .json(&json!({ "dimension": "status", "label": "Archivado" }))
            .await
            .assert_status_bad_request();
    }
}

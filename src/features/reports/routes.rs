use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Anonymous submission and tracking (public)
pub fn public_routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/reports", post(handlers::submit_report))
        .route(
            "/api/reports/track/{tracking_id}",
            get(handlers::track_report),
        )
        .with_state(report_service)
}

/// Case management (admin auth middleware applied by caller)
pub fn admin_routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/admin/reports", get(handlers::list_reports))
        .route(
            "/api/admin/reports/{id}",
            get(handlers::get_report).put(handlers::replace_report),
        )
        .route(
            "/api/admin/reports/{id}/status",
            patch(handlers::change_status),
        )
        .route("/api/admin/reports/{id}/notes", post(handlers::add_note))
        .route("/api/admin/reports/{id}/actions", post(handlers::add_action))
        .route(
            "/api/admin/reports/{id}/actions/{action_id}",
            patch(handlers::update_action_status),
        )
        .route(
            "/api/admin/reports/{id}/assignment",
            patch(handlers::assign_report),
        )
        .route("/api/admin/reports/{id}/rating", post(handlers::rate_report))
        .route(
            "/api/admin/reports/{id}/reclassify",
            post(handlers::reclassify_report),
        )
        .with_state(report_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;
    use axum::middleware;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::core::middleware::admin_auth_middleware;
    use crate::features::classifier::services::ClassifierGateway;
    use crate::features::reports::models::TransitionPolicy;
    use crate::features::reports::services::{ReportStore, TrackingIdGenerator};
    use crate::shared::test_helpers::{admin_authorization, TEST_ADMIN_PASSWORD, TEST_ADMIN_USER};

    fn server() -> TestServer {
        let store = Arc::new(ReportStore::new(TrackingIdGenerator::new("CATEM")));
        let service = Arc::new(ReportService::new(
            store,
            Arc::new(ClassifierGateway::offline_only()),
            TransitionPolicy::default(),
        ));
        let credentials = Arc::new(format!("{}:{}", TEST_ADMIN_USER, TEST_ADMIN_PASSWORD));

        let app = public_routes(service.clone()).merge(admin_routes(service).layer(
            middleware::from_fn_with_state(credentials, admin_auth_middleware),
        ));
        TestServer::new(app).unwrap()
    }

    async fn submit(server: &TestServer) -> String {
        let response = server
            .post("/api/reports")
            .json(&json!({
                "reportType": "Condiciones de Trabajo Inseguras",
                "description": "No hay EPP en la línea de ensamble",
                "state": "Jalisco"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["data"]["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_submit_then_track() {
        let server = server();
        let id = submit(&server).await;

        let tracked = server
            .get(&format!("/api/reports/track/{}", id.to_lowercase()))
            .await;
        tracked.assert_status_ok();
        let body: Value = tracked.json();
        assert_eq!(body["data"]["id"], id.as_str());
        assert_eq!(body["data"]["status"], "Recibido");
        assert_eq!(body["data"]["progressStep"], 0);

        server
            .get("/api/reports/track/CATEM-ZZZZZZ-0000")
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_invalid_submission_is_rejected() {
        let server = server();
        server
            .post("/api/reports")
            .json(&json!({
                "reportType": "Otro",
                "description": "Falta agua",
                "state": "Jalisco"
            }))
            .await
            .assert_status_bad_request();

        let list = server
            .get("/api/admin/reports")
            .add_header(AUTHORIZATION, admin_authorization())
            .await;
        assert_eq!(list.json::<Value>()["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_admin_routes_require_credentials() {
        let server = server();

        let response = server.get("/api/admin/reports").await;
        response.assert_status_unauthorized();
        assert!(response
            .headers()
            .contains_key(axum::http::header::WWW_AUTHENTICATE));

        server
            .get("/api/admin/reports")
            .add_header(AUTHORIZATION, "Basic d3Jvbmc6d3Jvbmc=")
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_status_change_records_staff_note() {
        let server = server();
        let id = submit(&server).await;

        let response = server
            .patch(&format!("/api/admin/reports/{}/status", id))
            .add_header(AUTHORIZATION, admin_authorization())
            .json(&json!({ "status": "En Revisión", "note": "Se contactó a RH" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "En Revisión");
        assert_eq!(body["data"]["internalNotes"][0]["author"], TEST_ADMIN_USER);
        assert_eq!(body["data"]["internalNotes"][0]["text"], "Se contactó a RH");

        let tracked: Value = server
            .get(&format!("/api/reports/track/{}", id))
            .await
            .json();
        assert_eq!(tracked["data"]["status"], "En Revisión");
    }

    #[tokio::test]
    async fn test_case_management_flow() {
        let server = server();
        let id = submit(&server).await;

        let with_action: Value = server
            .post(&format!("/api/admin/reports/{}/actions", id))
            .add_header(AUTHORIZATION, admin_authorization())
            .json(&json!({
                "action": "Inspección de planta",
                "assignedTo": "Agente 002",
                "dueDate": "2025-08-15"
            }))
            .await
            .json();
        let action_id = with_action["data"]["actions"][0]["id"]
            .as_str()
            .unwrap()
            .to_string();

        server
            .patch(&format!("/api/admin/reports/{}/actions/{}", id, action_id))
            .add_header(AUTHORIZATION, admin_authorization())
            .json(&json!({ "status": "Completada" }))
            .await
            .assert_status_ok();

        server
            .post(&format!("/api/admin/reports/{}/rating", id))
            .add_header(AUTHORIZATION, admin_authorization())
            .json(&json!({ "rating": 9 }))
            .await
            .assert_status_bad_request();

        let filtered: Value = server
            .get("/api/admin/reports")
            .add_query_param("category", "Violación de Seguridad")
            .add_header(AUTHORIZATION, admin_authorization())
            .await
            .json();
        assert_eq!(filtered["meta"]["total"], 1);

        server
            .get("/api/admin/reports/CATEM-ZZZZZZ-0000")
            .add_header(AUTHORIZATION, admin_authorization())
            .await
            .assert_status_not_found();
    }
}

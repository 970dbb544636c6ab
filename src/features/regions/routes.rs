use axum::{routing::get, Router};

use crate::features::regions::handlers;

/// Create routes for the regions catalog (public)
pub fn routes() -> Router {
    Router::new()
        .route("/api/regions", get(handlers::list_regions))
        .route("/api/regions/{code}", get(handlers::get_region))
}

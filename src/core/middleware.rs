use crate::core::error::AppError;
use crate::core::extractor::StaffUser;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::now_v7().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Decoded `user:password` from a `Basic` authorization header
fn basic_credentials(req: &Request) -> Option<String> {
    let encoded = req
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Basic ")?;
    let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
    String::from_utf8(decoded).ok()
}

fn challenge(mut response: Response, realm: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(&format!("Basic realm=\"{}\"", realm)) {
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, value);
    }
    response
}

/// Guards the Swagger UI with fixed credentials
pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            if basic_credentials(&req).is_some_and(|creds| creds == *credentials) {
                return Ok(next.run(req).await);
            }

            let response = Response::builder()
                .status(StatusCode::UNAUTHORIZED)
                .body(Body::from("Unauthorized"))
                .unwrap_or_else(|_| StatusCode::UNAUTHORIZED.into_response());

            Err(challenge(response, "Swagger UI"))
        })
    }
}

/// Guards the staff routes and records who is acting.
///
/// `credentials` is the expected `user:password`; on success a [`StaffUser`]
/// is inserted into the request extensions.
pub async fn admin_auth_middleware(
    State(credentials): State<Arc<String>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(provided) = basic_credentials(&req) else {
        let error = AppError::Unauthorized("Missing or malformed authorization header".to_string());
        return Err(challenge(error.into_response(), "Admin"));
    };

    if provided != *credentials {
        tracing::warn!("Rejected admin credentials");
        let error = AppError::Unauthorized("Invalid credentials".to_string());
        return Err(challenge(error.into_response(), "Admin"));
    }

    let username = provided
        .split_once(':')
        .map(|(user, _)| user.to_string())
        .unwrap_or_default();
    req.extensions_mut().insert(StaffUser { username });

    Ok(next.run(req).await)
}

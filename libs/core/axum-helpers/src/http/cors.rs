use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::cors::CorsConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::errors::AppError;

pub const CORS_REJECTION_MESSAGE: &str = "Error de CORS";

/// CORS response headers for the configured origins.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin: {}", e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Rejects requests whose `Origin` is neither allowed nor the server's own.
///
/// Requests without an `Origin` header (curl, server-to-server) pass.
pub async fn origin_guard(
    State(config): State<Arc<CorsConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        let permitted = origin
            .to_str()
            .is_ok_and(|origin| config.is_allowed(origin) || is_same_origin(origin, request.headers()));

        if !permitted {
            warn!(origin = ?origin, path = %request.uri().path(), "Rejected cross-origin request");
            return AppError::Forbidden(CORS_REJECTION_MESSAGE.to_string()).into_response();
        }
    }

    next.run(request).await
}

fn is_same_origin(origin: &str, headers: &HeaderMap) -> bool {
    let Some(host) = headers.get(header::HOST).and_then(|h| h.to_str().ok()) else {
        return false;
    };
    origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .is_some_and(|authority| authority == host)
}

//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::{create_router, health_router};
use utoipa::openapi::OpenApi;

use crate::state::AppState;

/// Create all API routes, nested under `/api` by [`app`]
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// The complete application: API, documentation and probes
pub fn app(state: &AppState, openapi: OpenApi) -> Router {
    create_router(routes(state), openapi, &state.config.cors, &state.config.docs)
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::api_doc;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, cors::CorsConfig, docs::DocsConfig, server::ServerConfig};
    use serde_json::Value;
    use tower::ServiceExt;

    fn degraded_app() -> Router {
        let state = AppState {
            config: Config {
                app: app_info!(),
                database: None,
                server: ServerConfig::default(),
                cors: CorsConfig::new(["http://localhost:5173"]),
                docs: DocsConfig::default(),
                environment: Environment::Development,
            },
            db: None,
        };
        app(&state, api_doc().unwrap())
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = degraded_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_products_answer_500_without_database() {
        let (status, body) = send(get("/api/products")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["message"], "An internal server error occurred");
    }

    #[tokio::test]
    async fn test_validation_still_runs_without_database() {
        let (status, body) = send(get("/api/products/abc")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["errors"][0]["msg"], "ID No Válido");
    }

    #[tokio::test]
    async fn test_ready_reports_503_without_database() {
        let (status, body) = send(get("/ready")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "not ready");
        assert_eq!(json["database"], "disconnected");
    }

    #[tokio::test]
    async fn test_health_is_always_ok() {
        let (status, body) = send(get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["name"], "products_api");
    }

    #[tokio::test]
    async fn test_disallowed_origin_is_rejected() {
        let request = Request::builder()
            .uri("/api/products")
            .header("origin", "https://evil.example.com")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.contains("Error de CORS"));
    }

    #[tokio::test]
    async fn test_allowed_origin_gets_cors_headers() {
        let request = Request::builder()
            .uri("/api/products/abc")
            .header("origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = degraded_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn test_docs_are_served() {
        let (status, body) = send(get("/docs")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Documentación REST API Axum / Rust"));

        let (status, body) = send(get("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert!(json["paths"]["/api/products/{id}"]["patch"].is_object());
    }
}

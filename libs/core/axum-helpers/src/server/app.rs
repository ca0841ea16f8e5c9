use std::io;
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, middleware};
use core_config::{cors::CorsConfig, docs::DocsConfig, server::ServerConfig};
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::openapi::OpenApi;

use super::docs::docs_router;
use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, origin_guard, security_headers};

/// Combine API routes with documentation and cross-cutting middleware.
///
/// - `apis` is nested under `/api` and must already carry its state
/// - documentation viewers from [`docs_router`]
/// - JSON 404 fallback
/// - request tracing at INFO, security headers, origin guard, CORS, compression
///
/// Health probes are merged by the caller afterwards so they stay outside the
/// origin guard.
///
/// ```ignore
/// let router = create_router(api_routes, openapi, &config.cors, &config.docs)
///     .merge(health_router(config.app));
/// ```
pub fn create_router(
    apis: Router,
    openapi: OpenApi,
    cors: &CorsConfig,
    docs: &DocsConfig,
) -> Router {
    if cors.allowed_origins.is_empty() {
        info!("No CORS origins configured; cross-origin requests will be rejected");
    } else {
        info!("CORS configured with allowed origins: {}", cors.allowed_origins.join(", "));
    }
    let cors = Arc::new(cors.clone());

    Router::new()
        .merge(docs_router(openapi, docs))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn_with_state(cors.clone(), origin_guard))
        .layer(create_cors_layer(&cors))
        .layer(CompressionLayer::new())
}

/// Bind, serve and shut down gracefully.
///
/// On SIGINT/SIGTERM the server stops accepting connections, drains in-flight
/// requests and runs `cleanup`, which is abandoned after `shutdown_timeout`.
///
/// ```ignore
/// create_production_app(router, &config.server, Duration::from_secs(30), async move {
///     if let Some(db) = db {
///         db.close().await.ok();
///     }
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();
    let signal_listener = coordinator.clone();
    tokio::spawn(async move { signal_listener.wait_for_signal().await });

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_trigger = coordinator.clone();
    let cleanup_handle = tokio::spawn(async move {
        cleanup_trigger.wait_for_shutdown().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let graceful = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { graceful.wait_for_shutdown().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    // The server may also stop on its own error; make sure cleanup still runs.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;
    use utoipa::openapi::{InfoBuilder, OpenApiBuilder};

    fn router(origins: &[&str]) -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        let openapi = OpenApiBuilder::new()
            .info(InfoBuilder::new().title("test").version("0.0.0").build())
            .build();
        create_router(
            apis,
            openapi,
            &CorsConfig::new(origins.iter().copied()),
            &DocsConfig::default(),
        )
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_api_routes_are_nested_under_api() {
        let request = Request::builder().uri("/api/ping").body(Body::empty()).unwrap();
        let (status, body) = send(router(&[]), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "pong");
    }

    #[tokio::test]
    async fn test_unknown_path_returns_json_404() {
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let (status, body) = send(router(&[]), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_disallowed_origin_is_rejected_before_routing() {
        let request = Request::builder()
            .uri("/api/ping")
            .header("origin", "https://evil.example.com")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router(&["http://localhost:5173"]), request).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.contains("Error de CORS"));
    }
}

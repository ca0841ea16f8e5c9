//! # Axum Helpers
//!
//! Shared HTTP plumbing for the workspace's Axum services.
//!
//! - **[`server`]**: router assembly, documentation viewers, health probes, graceful shutdown
//! - **[`http`]**: CORS layer, origin guard, security headers
//! - **[`errors`]**: `AppError` and the structured `ErrorResponse` body
//! - **[`validation`]**: rule tables and the `Validated<T>` error-gate extractor
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router(api_routes, openapi, &config.cors, &config.docs)
//!     .merge(health_router(config.app));
//! create_production_app(router, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod http;
pub mod server;
pub mod validation;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    docs_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, origin_guard, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use validation::{
    Location, RequestInput, Rule, RuleSet, Validated, ValidationErrorBody, Violation,
};

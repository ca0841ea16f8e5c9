//! Server infrastructure: router assembly, documentation, health probes and
//! graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let app = create_router(api_routes, openapi, &config.cors, &config.docs)
//!     .merge(health_router(config.app));
//! create_production_app(app, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod docs;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use docs::{DOCS_PATH, OPENAPI_JSON_PATH, docs_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};

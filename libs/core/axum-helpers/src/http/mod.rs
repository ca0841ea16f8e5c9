//! HTTP middleware: CORS, origin guard, security headers.
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, origin_guard, security_headers};
//!
//! let cors = Arc::new(CorsConfig::from_env()?);
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(axum::middleware::from_fn_with_state(cors.clone(), origin_guard))
//!     .layer(create_cors_layer(&cors));
//! ```

pub mod cors;
pub mod security;

pub use cors::{CORS_REJECTION_MESSAGE, create_cors_layer, origin_guard};
pub use security::security_headers;

//! Subscriber and error-report setup for the binaries.

use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

const DEVELOPMENT_FILTER: &str = "debug,sqlx=warn,hyper=info";
const PRODUCTION_FILTER: &str = "error";

/// Install color-eyre report hooks. Later calls are no-ops.
///
/// Reports show the error location but not the environment section.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        PRODUCTION_FILTER
    } else {
        DEVELOPMENT_FILTER
    }
}

/// Initialize the global subscriber.
///
/// - Production: flattened JSON events without targets
/// - Development: pretty, multi-line output
///
/// Both carry a `tracing_error::ErrorLayer` so eyre reports include the
/// span trace. `RUST_LOG` overrides [`default_filter`].
///
/// Calling it again after a subscriber is installed only logs at debug.
///
/// ```ignore
/// use tracing::instrument;
/// use eyre::{Result, WrapErr};
///
/// #[instrument(skip(db), fields(product_id = id))]
/// async fn load_product(db: &DatabaseConnection, id: i32) -> Result<Option<Model>> {
///     Entity::find_by_id(id)
///         .one(db)
///         .await
///         .wrap_err("Failed to fetch product")
/// }
/// ```
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => info!("Tracing initialized for {:?}", environment),
        Err(_) => debug!("Tracing already initialized"),
    }
}

//! Application state management

use database::postgres::{
    check_health, connect_from_config_with_retry, run_migrations, DatabaseConnection,
    PostgresConfig,
};
use database::DatabaseError;
use migration::Migrator;
use tracing::{error, info};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when the database could not be reached at startup
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    /// Connect, verify and migrate the database.
    ///
    /// Failures are logged and swallowed: the process keeps serving and
    /// `/ready` reports the store as disconnected.
    pub async fn connect(config: Config) -> Self {
        let db = match config.database.clone() {
            Some(database) => match prepare_database(database).await {
                Ok(db) => Some(db),
                Err(e) => {
                    error!("Database unavailable, serving in degraded mode: {}", e);
                    None
                }
            },
            None => {
                error!("DATABASE_URL is not set, serving in degraded mode");
                None
            }
        };

        Self { config, db }
    }
}

async fn prepare_database(config: PostgresConfig) -> Result<DatabaseConnection, DatabaseError> {
    let db = connect_from_config_with_retry(config, None).await?;
    check_health(&db).await?;
    run_migrations::<Migrator>(&db, "products_api").await?;
    info!("Database connection ready");
    Ok(db)
}

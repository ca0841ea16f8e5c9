//! Configuration for Products API

use core_config::{
    app_info, cors::CorsConfig, docs::DocsConfig, server::ServerConfig, AppInfo, ConfigError,
    FromEnv,
};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when `DATABASE_URL` is not set; the API then runs degraded
    pub database: Option<PostgresConfig>,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub docs: DocsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let docs = DocsConfig::from_env()?;

        let database = match PostgresConfig::from_env() {
            Ok(config) => Some(config),
            Err(ConfigError::MissingEnvVar(_)) => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            app: app_info!(),
            database,
            server,
            cors,
            docs,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_without_database_url_is_degraded() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None::<&str>),
                ("PORT", Some("4000")),
                ("CORS_ALLOWED_ORIGIN", Some("http://localhost:5173")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.database.is_none());
                assert_eq!(config.server.port, 4000);
                assert!(config.cors.is_allowed("http://localhost:5173"));
                assert_eq!(config.app.name, "products_api");
            },
        );
    }

    #[test]
    fn test_config_reads_database_settings() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/products")),
                ("DB_MAX_CONNECTIONS", Some("20")),
            ],
            || {
                let config = Config::from_env().unwrap();
                let database = config.database.unwrap();
                assert_eq!(database.url(), "postgresql://localhost/products");
                assert_eq!(database.max_connections, 20);
            },
        );
    }

    #[test]
    fn test_config_rejects_malformed_database_settings() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/products")),
                ("DB_MAX_CONNECTIONS", Some("many")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}

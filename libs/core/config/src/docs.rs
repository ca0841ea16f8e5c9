use crate::{env_or_default, ConfigError, FromEnv};

const DEFAULT_TITLE: &str = "Documentación REST API Axum / Rust";
const DEFAULT_FAVICON: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/f/f6/HAL9000.svg/1200px-HAL9000.svg.png";
const DEFAULT_TOPBAR_COLOR: &str = "#2b3b45";

/// Presentation settings for the interactive API documentation page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsConfig {
    pub title: String,
    pub favicon_url: String,
    pub topbar_color: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            favicon_url: DEFAULT_FAVICON.to_string(),
            topbar_color: DEFAULT_TOPBAR_COLOR.to_string(),
        }
    }
}

impl FromEnv for DocsConfig {
    /// Reads `DOCS_TITLE`, `DOCS_FAVICON_URL` and `DOCS_TOPBAR_COLOR`, all optional.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            title: env_or_default("DOCS_TITLE", DEFAULT_TITLE),
            favicon_url: env_or_default("DOCS_FAVICON_URL", DEFAULT_FAVICON),
            topbar_color: env_or_default("DOCS_TOPBAR_COLOR", DEFAULT_TOPBAR_COLOR),
        })
    }
}

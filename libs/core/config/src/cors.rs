use crate::{env_list, ConfigError, FromEnv};

/// Cross-origin policy for browser clients
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty means every cross-origin request is refused.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive match against the `Origin` header value
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

impl FromEnv for CorsConfig {
    /// Reads `CORS_ALLOWED_ORIGIN` as a comma-separated list.
    ///
    /// A missing variable is not an error: the server still starts and
    /// only same-origin or non-browser clients get through.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            allowed_origins: env_list("CORS_ALLOWED_ORIGIN"),
        })
    }
}

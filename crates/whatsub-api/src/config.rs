use anyhow::Context;
use serde::Deserialize;
use whatsub_db::DbConfig;

/// Deployment environment, read from `APP_ENV`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Application configuration.
///
/// Everything comes from environment variables. Database settings use the
/// `DB_` prefix (`DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`,
/// `DB_MAX_CONNECTIONS`); the rest are unprefixed (`APP_ENV`, `BIND_ADDR`,
/// `ALLOWED_ORIGINS`, `REQUEST_TIMEOUT_SECS`).
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default, rename = "app_env")]
    pub env: Environment,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Comma-separated; empty means any origin is accepted
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(skip)]
    pub database: DbConfig,
}

fn default_bind_addr() -> String {
    "0.0.0.0:5000".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl ApiConfig {
    /// Read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Build the configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();

        let mut config: Self =
            envy::from_iter(vars.clone()).context("invalid application configuration")?;
        config.database = envy::prefixed("DB_")
            .from_iter(vars)
            .context("invalid database configuration")?;

        Ok(config)
    }

    /// Configured CORS origins, trimmed, without empty entries.
    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

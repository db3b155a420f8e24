use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

/// Connection settings for the PostgreSQL store.
///
/// Field names line up with the `DB_*` environment variables once the `DB_`
/// prefix is stripped (`DB_HOST` → `host`, `DB_MAX_CONNECTIONS` →
/// `max_connections`).
#[derive(Clone, Debug, Deserialize)]
pub struct DbConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_host() -> String {
    "localhost".to_string()
}

const fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_name() -> String {
    "whatsub".to_string()
}

const fn default_max_connections() -> u32 {
    10
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            name: default_name(),
            max_connections: default_max_connections(),
        }
    }
}

impl DbConfig {
    /// Build sqlx connect options from the individual settings.
    ///
    /// Parts are passed separately rather than through a URL so passwords never
    /// need percent-encoding.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

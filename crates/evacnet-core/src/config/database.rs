//! Database configuration.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Which record store backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    /// PostgreSQL via a sqlx connection pool.
    #[default]
    Postgres,
    /// Process-local maps; data is lost on restart.
    Memory,
}

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Record store backend.
    #[serde(default)]
    pub backend: DatabaseBackend,
    /// PostgreSQL connection URL. When empty, the URL is assembled from the
    /// `POSTGRES_*` environment variables at load time.
    #[serde(default)]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection acquire timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// Run embedded migrations on startup.
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: DatabaseBackend::default(),
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
            run_migrations: true,
        }
    }
}

/// Discrete PostgreSQL connection parameters, as supplied through the
/// `POSTGRES_DB`, `POSTGRES_USER`, `POSTGRES_PASSWORD`, `POSTGRES_HOST` and
/// `POSTGRES_PORT` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostgresParams {
    /// Database name.
    pub dbname: Option<String>,
    /// Role name.
    pub user: Option<String>,
    /// Role password.
    pub password: Option<String>,
    /// Server host.
    pub host: Option<String>,
    /// Server port.
    pub port: Option<String>,
}

impl PostgresParams {
    /// Read the parameters from the process environment.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            dbname: var("POSTGRES_DB"),
            user: var("POSTGRES_USER"),
            password: var("POSTGRES_PASSWORD"),
            host: var("POSTGRES_HOST"),
            port: var("POSTGRES_PORT"),
        }
    }

    /// Build a connection URL. Returns `None` when no database name is set.
    ///
    /// The user, password and database name are percent-encoded.
    pub fn to_url(&self) -> Option<String> {
        let dbname = encode(self.dbname.as_deref()?);
        let host = self.host.as_deref().unwrap_or("localhost");
        let port = self.port.as_deref().unwrap_or("5432");

        let credentials = match (self.user.as_deref(), self.password.as_deref()) {
            (Some(user), Some(password)) => format!("{}:{}@", encode(user), encode(password)),
            (Some(user), None) => format!("{}@", encode(user)),
            _ => String::new(),
        };

        Some(format!("postgres://{credentials}{host}:{port}/{dbname}"))
    }
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, NON_ALPHANUMERIC).to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

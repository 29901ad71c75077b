//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `EVACNET__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod database;
pub mod logging;
pub mod realtime;
pub mod routing;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseBackend, DatabaseConfig, PostgresParams};
pub use self::logging::LoggingConfig;
pub use self::realtime::RealtimeConfig;
pub use self::routing::RoutingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Every section has defaults, so an empty source set yields a usable
/// configuration (apart from credentials).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Record store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Routing API settings.
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Streaming relay settings.
    #[serde(default)]
    pub realtime: RealtimeConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges `config/default.toml`, the environment overlay
    /// `config/{env}.toml` and environment variables prefixed with
    /// `EVACNET__` (e.g. `EVACNET__ROUTING__API_KEY`), then fills
    /// credentials that are still empty from the conventional
    /// `POSTGRES_*` and `HERE_API_KEY` variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("EVACNET")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let mut config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.apply_fallbacks(
            &PostgresParams::from_env(),
            std::env::var("HERE_API_KEY").ok(),
        );
        Ok(config)
    }

    /// Fill empty credentials from discrete fallbacks.
    pub fn apply_fallbacks(&mut self, postgres: &PostgresParams, here_api_key: Option<String>) {
        if self.database.url.is_empty() {
            if let Some(url) = postgres.to_url() {
                debug!("Database URL assembled from POSTGRES_* variables");
                self.database.url = url;
            }
        }

        if self.routing.api_key.is_empty() {
            if let Some(key) = here_api_key.filter(|k| !k.is_empty()) {
                self.routing.api_key = key;
            }
        }
    }
}

//! Third-party routing API configuration.

use serde::{Deserialize, Serialize};

/// Routing provider (HERE Routing v8) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base URL of the routing API, without the `/routes` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key. Falls back to the `HERE_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: String,
    /// Transport mode passed to the API.
    #[serde(default = "default_transport_mode")]
    pub transport_mode: String,
    /// Origin used when a request names none, as `lat,lon`.
    #[serde(default = "default_origin")]
    pub default_origin: String,
    /// Destination used when a request names none, as `lat,lon`.
    #[serde(default = "default_destination")]
    pub default_destination: String,
    /// Area the route must avoid, as `west,south,east,north`.
    #[serde(default = "default_avoid_bbox")]
    pub avoid_bbox: String,
    /// Timeout for a single routing request in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            transport_mode: default_transport_mode(),
            default_origin: default_origin(),
            default_destination: default_destination(),
            avoid_bbox: default_avoid_bbox(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://router.hereapi.com/v8".to_string()
}

fn default_transport_mode() -> String {
    "car".to_string()
}

fn default_origin() -> String {
    "53.3441,-6.2573".to_string()
}

fn default_destination() -> String {
    "53.3430,-6.2672".to_string()
}

fn default_avoid_bbox() -> String {
    "-6.2700,53.3420,-6.2500,53.3460".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

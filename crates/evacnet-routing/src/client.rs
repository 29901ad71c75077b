//! HERE Routing API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, warn};

use evacnet_core::config::RoutingConfig;
use evacnet_core::error::{AppError, ErrorKind};
use evacnet_core::result::AppResult;

use crate::coordinate::Coordinate;

/// Something that can plan a route between two points.
///
/// Returns the encoded polyline of every section of the first route, in
/// travel order.
#[async_trait]
pub trait RouteSource: Send + Sync + 'static {
    /// Plan a route and return its section polylines.
    async fn fetch_polylines(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> AppResult<Vec<String>>;
}

/// `GET /routes` response, reduced to what the route map needs.
#[derive(Debug, Deserialize)]
struct RoutesResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
struct Section {
    polyline: String,
}

/// [`RouteSource`] backed by HERE Routing v8.
#[derive(Debug, Clone)]
pub struct HereRouteSource {
    client: reqwest::Client,
    config: RoutingConfig,
}

impl HereRouteSource {
    /// Build a client from the routing configuration.
    pub fn new(config: RoutingConfig) -> AppResult<Self> {
        if config.api_key.is_empty() {
            warn!("No routing API key configured; route map requests will fail");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build routing HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self { client, config })
    }

    fn routes_url(&self, origin: Coordinate, destination: Coordinate) -> AppResult<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let origin = origin.to_string();
        let destination = destination.to_string();
        let avoid = format!("bbox:{}", self.config.avoid_bbox);

        Url::parse_with_params(
            &format!("{base}/routes"),
            [
                ("origin", origin.as_str()),
                ("destination", destination.as_str()),
                ("transportMode", self.config.transport_mode.as_str()),
                ("avoid[areas]", avoid.as_str()),
                ("return", "polyline"),
                ("apiKey", self.config.api_key.as_str()),
            ],
        )
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid routing base URL '{base}': {e}"),
                e,
            )
        })
    }
}

#[async_trait]
impl RouteSource for HereRouteSource {
    async fn fetch_polylines(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> AppResult<Vec<String>> {
        if self.config.api_key.is_empty() {
            return Err(AppError::configuration(
                "No routing API key configured (set routing.api_key or HERE_API_KEY)",
            ));
        }

        let url = self.routes_url(origin, destination)?;
        debug!(%origin, %destination, "Requesting route");

        let response = self.client.get(url).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Routing API request failed: {e}"),
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Routing API returned {status}: {body}"
            )));
        }

        let parsed: RoutesResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Routing API returned an unexpected body: {e}"),
                e,
            )
        })?;

        let route = parsed
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service("Routing API returned no route"))?;

        Ok(route.sections.into_iter().map(|s| s.polyline).collect())
    }
}

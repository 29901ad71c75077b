//! Evacuation route map assembly.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use evacnet_core::config::RoutingConfig;
use evacnet_core::result::AppResult;

use crate::client::{HereRouteSource, RouteSource};
use crate::coordinate::Coordinate;
use crate::polyline;
use crate::restricted::restricted_areas;

/// A planned route together with the area it avoids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationMap {
    /// Decoded route, in travel order.
    pub route_map: Vec<Coordinate>,
    /// Closed polygon of the restricted area.
    pub restrict_areas: Vec<Coordinate>,
}

/// Builds evacuation maps from a [`RouteSource`].
#[derive(Clone)]
pub struct RouteService {
    source: Arc<dyn RouteSource>,
    default_origin: Coordinate,
    default_destination: Coordinate,
}

impl std::fmt::Debug for RouteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteService")
            .field("default_origin", &self.default_origin)
            .field("default_destination", &self.default_destination)
            .finish()
    }
}

impl RouteService {
    /// Create a service over the HERE Routing API.
    pub fn from_config(config: &RoutingConfig) -> AppResult<Self> {
        let source = HereRouteSource::new(config.clone())?;
        Self::new(Arc::new(source), config)
    }

    /// Create a service over any route source, taking defaults from
    /// `config`.
    pub fn new(source: Arc<dyn RouteSource>, config: &RoutingConfig) -> AppResult<Self> {
        Ok(Self {
            source,
            default_origin: config.default_origin.parse()?,
            default_destination: config.default_destination.parse()?,
        })
    }

    /// Plan a route and pair it with the restricted area.
    ///
    /// A missing `start` or `end` falls back to the configured default.
    pub async fn evacuation_map(
        &self,
        start: Option<Coordinate>,
        end: Option<Coordinate>,
    ) -> AppResult<EvacuationMap> {
        let origin = start.unwrap_or(self.default_origin);
        let destination = end.unwrap_or(self.default_destination);

        let polylines = self.source.fetch_polylines(origin, destination).await?;

        let mut route_map = Vec::new();
        for encoded in &polylines {
            route_map.extend(polyline::decode(encoded)?.into_iter().map(Coordinate::from));
        }

        info!(
            %origin,
            %destination,
            sections = polylines.len(),
            points = route_map.len(),
            "Evacuation route planned"
        );

        Ok(EvacuationMap {
            route_map,
            restrict_areas: restricted_areas(),
        })
    }
}

//! # evacnet-routing
//!
//! Builds the evacuation route map: fetches a route from the HERE Routing
//! API, decodes its flexible-polyline encoding into coordinates, and pairs
//! it with the fixed restricted-area polygon.

pub mod client;
pub mod coordinate;
pub mod polyline;
pub mod restricted;
pub mod service;

pub use client::{HereRouteSource, RouteSource};
pub use coordinate::Coordinate;
pub use service::{EvacuationMap, RouteService};

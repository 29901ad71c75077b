//! The restricted area drawn alongside every route.

use crate::coordinate::Coordinate;

/// Closed polygon around the restricted area, first vertex repeated last.
///
/// Its bounding box matches the default `routing.avoid_bbox`, so the default
/// route is planned around exactly the area drawn here.
const RESTRICTED_POLYGON: [(f64, f64); 5] = [
    (53.3460, -6.2700),
    (53.3460, -6.2500),
    (53.3420, -6.2500),
    (53.3420, -6.2700),
    (53.3460, -6.2700),
];

/// Vertices of the restricted polygon as `(lat, lon)`, closed.
pub fn restricted_areas() -> Vec<Coordinate> {
    RESTRICTED_POLYGON.iter().copied().map(Coordinate::from).collect()
}

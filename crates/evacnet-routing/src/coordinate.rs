//! Geographic coordinate pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use evacnet_core::error::AppError;

/// A WGS84 point.
///
/// Serialized as a two-element `[lat, lon]` array, which is the shape the
/// route map uses for both the route and the restricted polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, `-90..=90`.
    pub lat: f64,
    /// Longitude in degrees, `-180..=180`.
    pub lon: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, AppError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::validation(format!(
                "Latitude {lat} is outside -90..90"
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(AppError::validation(format!(
                "Longitude {lon} is outside -180..180"
            )));
        }
        Ok(Self { lat, lon })
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lat, c.lon)
    }
}

/// Formats as `lat,lon`, the form the routing API expects.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parses `lat,lon`.
impl FromStr for Coordinate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| AppError::validation(format!("Expected 'lat,lon', got '{s}'")))?;

        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| AppError::validation(format!("Invalid latitude in '{s}'")))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| AppError::validation(format!("Invalid longitude in '{s}'")))?;

        Self::new(lat, lon)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.lat, self.lon).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <(f64, f64)>::deserialize(deserializer).map(Self::from)
    }
}

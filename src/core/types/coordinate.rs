//! Coordinate data model
//!
//! A [`Coordinate`] is passed through every layer unchanged: no range checks
//! are applied to latitude or longitude.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque place identifier, e.g. an address or place name
pub type LocationKey = String;

/// Mapping from location key to coordinate, the unit of exchange between backends
pub type CoordinateDictionary = HashMap<LocationKey, Coordinate>;

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// On-disk shape of a coordinate inside the persisted blob: `{"lat": .., "lon": ..}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredLocation {
    pub lat: f64,
    pub lon: f64,
}

impl From<Coordinate> for StoredLocation {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.latitude,
            lon: coordinate.longitude,
        }
    }
}

impl From<StoredLocation> for Coordinate {
    fn from(location: StoredLocation) -> Self {
        Self::new(location.lat, location.lon)
    }
}

//! Test fixtures and data factories

use geocache::{Coordinate, CoordinateDictionary, LocationKey};

/// Build a key list from string literals
pub fn keys(names: &[&str]) -> Vec<LocationKey> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Build a dictionary from `(key, lat, lon)` triples
pub fn dict(entries: &[(&str, f64, f64)]) -> CoordinateDictionary {
    entries
        .iter()
        .map(|(k, lat, lon)| (k.to_string(), Coordinate::new(*lat, *lon)))
        .collect()
}

/// A handful of well-known cities
pub fn capitals() -> CoordinateDictionary {
    dict(&[
        ("Paris", 48.8566, 2.3522),
        ("Berlin", 52.52, 13.405),
        ("Madrid", 40.4168, -3.7038),
        ("Rome", 41.9028, 12.4964),
        ("Vienna", 48.2082, 16.3738),
    ])
}

/// `count` distinct generated places
pub fn generated(count: usize) -> CoordinateDictionary {
    (0..count)
        .map(|i| {
            (
                format!("place-{:05}", i),
                Coordinate::new((i % 180) as f64 - 90.0, (i % 360) as f64 - 180.0),
            )
        })
        .collect()
}

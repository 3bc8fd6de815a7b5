//! Core data types shared by every cache backend

pub mod coordinate;

pub use coordinate::{Coordinate, CoordinateDictionary, LocationKey, StoredLocation};

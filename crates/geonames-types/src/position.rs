//! Geographic positions and bounding boxes.

use serde::{Deserialize, Serialize};

use crate::FieldError;
use crate::value::parse_float;

/// A WGS84 position in decimal degrees.
///
/// A position that is missing on the wire is `(0, 0)`, which is also the
/// [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses a position from its textual components.
    ///
    /// Empty components are zero. A non-numeric component is rejected with an
    /// error naming it (`latitude` or `longitude`).
    ///
    /// # Errors
    ///
    /// Returns an error if either component is non-empty and not a number.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, FieldError> {
        Ok(Self {
            latitude: parse_float("latitude", latitude)?,
            longitude: parse_float("longitude", longitude)?,
        })
    }

    /// Returns true if both components are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// A rectangle bounded by four edges in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Eastern longitude.
    pub east: f64,
    /// Western longitude.
    pub west: f64,
    /// Northern latitude.
    pub north: f64,
    /// Southern latitude.
    pub south: f64,
}

impl BoundingBox {
    /// Creates a new bounding box.
    #[must_use]
    pub const fn new(east: f64, west: f64, north: f64, south: f64) -> Self {
        Self {
            east,
            west,
            north,
            south,
        }
    }
}

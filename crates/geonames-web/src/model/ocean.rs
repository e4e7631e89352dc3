//! Ocean and elevation lookups.

use geonames_types::{FieldError, Position};
use serde::{Deserialize, Serialize};

use crate::wire::{FromWire, Loose, float, int, position};

/// The ocean or sea at a point.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Ocean {
    /// GeoName of the body of water.
    pub geoname_id: u64,
    /// Name of the body of water.
    pub name: String,
    /// Distance in kilometers, 0 when the point is on the water.
    pub distance: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawOcean {
    geoname_id: Option<Loose>,
    name: String,
    distance: Option<Loose>,
}

impl FromWire for Ocean {
    type Wire = RawOcean;

    fn from_wire(wire: RawOcean) -> Result<Self, FieldError> {
        Ok(Self {
            geoname_id: int("geonameId", wire.geoname_id.as_ref())?,
            name: wire.name,
            distance: float("distance", wire.distance.as_ref())?,
        })
    }
}

/// Elevation of a point in one elevation model.
///
/// Points on the ocean report the model's no-data value, e.g. `-32768` for
/// SRTM3 or `-9999` for ASTER GDEM and GTOPO30.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Elevation {
    /// The queried point.
    pub position: Position,
    /// Elevation in meters.
    pub value: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawElevation {
    lat: Option<Loose>,
    lng: Option<Loose>,
    #[serde(alias = "astergdem", alias = "gtopo30", alias = "srtm1", alias = "srtm3")]
    value: Option<Loose>,
}

impl FromWire for Elevation {
    type Wire = RawElevation;

    fn from_wire(wire: RawElevation) -> Result<Self, FieldError> {
        Ok(Self {
            position: position(wire.lat.as_ref(), wire.lng.as_ref())?,
            value: int("elevation", wire.value.as_ref())?,
        })
    }
}

//! Earthquake results.

use chrono::NaiveDateTime;
use geonames_types::{FieldError, Position};
use serde::{Deserialize, Serialize};

use crate::wire::{FromWire, Loose, date_time, float, position};

/// A recorded earthquake.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Earthquake {
    /// Identifier assigned by the reporting source.
    pub id: String,
    /// Time of the event, UTC.
    pub datetime: Option<NaiveDateTime>,
    /// Depth in kilometers.
    pub depth: f64,
    /// Magnitude.
    pub magnitude: f64,
    /// Epicenter.
    pub position: Position,
    /// Reporting source.
    pub source: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEarthquake {
    eqid: String,
    datetime: String,
    depth: Option<Loose>,
    magnitude: Option<Loose>,
    lat: Option<Loose>,
    lng: Option<Loose>,
    src: String,
}

impl FromWire for Earthquake {
    type Wire = RawEarthquake;

    fn from_wire(wire: RawEarthquake) -> Result<Self, FieldError> {
        Ok(Self {
            id: wire.eqid,
            datetime: date_time("datetime", &wire.datetime)?,
            depth: float("depth", wire.depth.as_ref())?,
            magnitude: float("magnitude", wire.magnitude.as_ref())?,
            position: position(wire.lat.as_ref(), wire.lng.as_ref())?,
            source: wire.src,
        })
    }
}

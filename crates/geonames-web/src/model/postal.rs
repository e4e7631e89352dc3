//! Postal code results.

use geonames_types::{FieldError, Position};
use serde::{Deserialize, Serialize};

use super::AdminSubdivisions;
use crate::wire::{FromWire, Loose, RawAdmin, float, position};

/// A postal code and the place it serves.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PostalCode {
    /// The postal code.
    pub postal_code: String,
    /// Name of the place.
    pub place_name: String,
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
    /// WGS84 position of the place.
    pub position: Position,
    /// ISO 3166-2 subdivision code, when reported.
    pub iso3166_2: String,
    /// Administrative subdivisions of the place.
    pub admin: AdminSubdivisions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawPostalCode {
    // The lookup endpoint spells the key in lower case.
    #[serde(alias = "postalcode")]
    postal_code: String,
    place_name: String,
    country_code: String,
    lat: Option<Loose>,
    lng: Option<Loose>,
    #[serde(rename = "ISO3166-2")]
    iso3166_2: String,
    #[serde(flatten)]
    admin: RawAdmin,
}

impl FromWire for PostalCode {
    type Wire = RawPostalCode;

    fn from_wire(wire: RawPostalCode) -> Result<Self, FieldError> {
        Ok(Self {
            postal_code: wire.postal_code,
            place_name: wire.place_name,
            country_code: wire.country_code,
            position: position(wire.lat.as_ref(), wire.lng.as_ref())?,
            iso3166_2: wire.iso3166_2,
            admin: wire.admin.into_subdivisions()?,
        })
    }
}

/// A postal code with its distance from the queried point.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PostalCodeNearby {
    /// The postal code.
    #[serde(flatten)]
    pub postal_code: PostalCode,
    /// Distance in kilometers.
    pub distance: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawPostalCodeNearby {
    #[serde(flatten)]
    postal_code: RawPostalCode,
    distance: Option<Loose>,
}

impl FromWire for PostalCodeNearby {
    type Wire = RawPostalCodeNearby;

    fn from_wire(wire: RawPostalCodeNearby) -> Result<Self, FieldError> {
        Ok(Self {
            postal_code: PostalCode::from_wire(wire.postal_code)?,
            distance: float("distance", wire.distance.as_ref())?,
        })
    }
}

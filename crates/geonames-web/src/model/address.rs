//! Street address results.

use geonames_types::{FieldError, Position};
use serde::{Deserialize, Serialize};

use super::AdminSubdivisions;
use crate::wire::{FromWire, Loose, RawAdmin, float, position};

/// A street address.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Address {
    /// Street name.
    pub street: String,
    /// House number.
    pub house_number: String,
    /// Locality name.
    pub locality: String,
    /// Postal code.
    pub postal_code: String,
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
    /// WGS84 position of the address.
    pub position: Position,
    /// Administrative subdivisions of the address.
    pub admin: AdminSubdivisions,
    /// Identifier in the source dataset.
    pub source_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawAddress {
    street: String,
    house_number: String,
    locality: String,
    #[serde(alias = "postalCode")]
    postalcode: String,
    country_code: String,
    lat: Option<Loose>,
    lng: Option<Loose>,
    source_id: String,
    #[serde(flatten)]
    admin: RawAdmin,
}

impl FromWire for Address {
    type Wire = RawAddress;

    fn from_wire(wire: RawAddress) -> Result<Self, FieldError> {
        Ok(Self {
            street: wire.street,
            house_number: wire.house_number,
            locality: wire.locality,
            postal_code: wire.postalcode,
            country_code: wire.country_code,
            position: position(wire.lat.as_ref(), wire.lng.as_ref())?,
            admin: wire.admin.into_subdivisions()?,
            source_id: wire.source_id,
        })
    }
}

/// An address with its distance from the queried point.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AddressNearby {
    /// The address.
    #[serde(flatten)]
    pub address: Address,
    /// Distance in kilometers.
    pub distance: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawAddressNearby {
    #[serde(flatten)]
    address: RawAddress,
    distance: Option<Loose>,
}

impl FromWire for AddressNearby {
    type Wire = RawAddressNearby;

    fn from_wire(wire: RawAddressNearby) -> Result<Self, FieldError> {
        Ok(Self {
            address: Address::from_wire(wire.address)?,
            distance: float("distance", wire.distance.as_ref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_address_nearby() {
        let wire = serde_json::from_str(
            r#"{"adminCode2":"061","sourceId":"100","adminCode3":"","adminCode1":"CA",
                "lng":"-122.18032","distance":"0.04","houseNumber":"649",
                "locality":"Menlo Park","adminCode4":"","adminName2":"San Mateo",
                "street":"Oak Grove Ave","postalcode":"94025","countryCode":"US",
                "adminName1":"California","lat":"37.45127"}"#,
        )
        .unwrap();
        let nearby = AddressNearby::from_wire(wire).unwrap();
        assert_eq!(nearby.address.street, "Oak Grove Ave");
        assert_eq!(nearby.address.house_number, "649");
        assert_eq!(nearby.address.postal_code, "94025");
        assert_eq!(nearby.address.admin.second.name, "San Mateo");
        assert_relative_eq!(nearby.address.position.longitude, -122.18032);
        assert_relative_eq!(nearby.distance, 0.04);
    }

    #[test]
    fn test_bad_distance() {
        let wire = serde_json::from_str(r#"{"distance":"near"}"#).unwrap();
        let err = AddressNearby::from_wire(wire).unwrap_err();
        assert_eq!(err.field(), "distance");
    }
}

//! Country and country subdivision results.

use geonames_types::value::split_list;
use geonames_types::{BoundingBox, FieldError};
use serde::{Deserialize, Serialize};

use super::AdminSubdivisions;
use crate::wire::{FromWire, Loose, RawAdmin, RawBoundingBox, float, int};

/// The country at a point.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CountryNearby {
    /// ISO 3166 alpha-2 country code.
    pub code: String,
    /// Country name.
    pub name: String,
    /// Spoken languages, most used first.
    pub languages: Vec<String>,
    /// Distance to the border in kilometers, 0 when inside.
    pub distance: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawCountryNearby {
    country_code: String,
    country_name: String,
    languages: String,
    distance: Option<Loose>,
}

impl FromWire for CountryNearby {
    type Wire = RawCountryNearby;

    fn from_wire(wire: RawCountryNearby) -> Result<Self, FieldError> {
        Ok(Self {
            code: wire.country_code,
            name: wire.country_name,
            languages: split_list(&wire.languages),
            distance: float("distance", wire.distance.as_ref())?,
        })
    }
}

/// Country metadata from `countryInfoJSON`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CountryDetailed {
    /// ISO 3166 alpha-2 country code.
    pub code: String,
    /// Country name.
    pub name: String,
    /// ISO 3166 alpha-3 code.
    pub iso_alpha3: String,
    /// ISO 3166 numeric code.
    pub iso_numeric: u64,
    /// FIPS 10-4 code.
    pub fips_code: String,
    /// Continent code.
    pub continent: String,
    /// Continent name.
    pub continent_name: String,
    /// Capital city.
    pub capital: String,
    /// Spoken languages, most used first.
    pub languages: Vec<String>,
    /// GeoName of the country.
    pub geoname_id: u64,
    /// Population.
    pub population: u64,
    /// Area in square kilometers.
    pub area_in_sq_km: f64,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Postal code format.
    pub postal_code_format: String,
    /// Bounding box of the country.
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawCountryDetailed {
    country_code: String,
    country_name: String,
    iso_alpha3: String,
    iso_numeric: Option<Loose>,
    fips_code: String,
    continent: String,
    continent_name: String,
    capital: String,
    languages: String,
    geoname_id: Option<Loose>,
    population: Option<Loose>,
    area_in_sq_km: Option<Loose>,
    currency_code: String,
    postal_code_format: String,
    #[serde(flatten)]
    bounding_box: RawBoundingBox,
}

impl FromWire for CountryDetailed {
    type Wire = RawCountryDetailed;

    fn from_wire(wire: RawCountryDetailed) -> Result<Self, FieldError> {
        Ok(Self {
            code: wire.country_code,
            name: wire.country_name,
            iso_alpha3: wire.iso_alpha3,
            iso_numeric: int("isoNumeric", wire.iso_numeric.as_ref())?,
            fips_code: wire.fips_code,
            continent: wire.continent,
            continent_name: wire.continent_name,
            capital: wire.capital,
            languages: split_list(&wire.languages),
            geoname_id: int("geonameId", wire.geoname_id.as_ref())?,
            population: int("population", wire.population.as_ref())?,
            area_in_sq_km: float("areaInSqKm", wire.area_in_sq_km.as_ref())?,
            currency_code: wire.currency_code,
            postal_code_format: wire.postal_code_format,
            bounding_box: wire.bounding_box.into_bounding_box()?,
        })
    }
}

/// A code identifying a subdivision in one coding scheme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubdivisionCode {
    /// The code.
    pub code: String,
    /// Coding scheme, e.g. `FIPS` or `ISO3166-2`.
    pub kind: String,
    /// Admin level the code applies to, 0 when not reported.
    pub level: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSubdivisionCode {
    code: String,
    #[serde(rename = "type")]
    kind: String,
    level: Option<Loose>,
}

/// The first-order subdivision at a point.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CountrySubdivision {
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
    /// Country name.
    pub country_name: String,
    /// Administrative subdivisions at the point.
    pub admin: AdminSubdivisions,
    /// Codes of the subdivision in other schemes.
    pub codes: Vec<SubdivisionCode>,
    /// Distance to the border in kilometers, 0 when inside.
    pub distance: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawCountrySubdivision {
    country_code: String,
    country_name: String,
    codes: Vec<RawSubdivisionCode>,
    distance: Option<Loose>,
    #[serde(flatten)]
    admin: RawAdmin,
}

impl FromWire for CountrySubdivision {
    type Wire = RawCountrySubdivision;

    fn from_wire(wire: RawCountrySubdivision) -> Result<Self, FieldError> {
        let codes = wire
            .codes
            .into_iter()
            .map(|code| {
                Ok(SubdivisionCode {
                    code: code.code,
                    kind: code.kind,
                    level: int("level", code.level.as_ref())?,
                })
            })
            .collect::<Result<_, FieldError>>()?;

        Ok(Self {
            country_code: wire.country_code,
            country_name: wire.country_name,
            admin: wire.admin.into_subdivisions()?,
            codes,
            distance: float("distance", wire.distance.as_ref())?,
        })
    }
}

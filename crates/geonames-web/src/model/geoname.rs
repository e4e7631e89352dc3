//! Toponym results.

use geonames_types::{BoundingBox, FieldError, Position};
use serde::{Deserialize, Serialize};

use super::AdminSubdivisions;
use crate::wire::{FromWire, Loose, RawAdmin, RawBoundingBox, float, int, position};

/// A toponym as returned by the search and hierarchy endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GeoName {
    /// GeoName identifier.
    pub id: u64,
    /// Name, localized when a language was requested.
    pub name: String,
    /// Main name of the toponym.
    pub toponym_name: String,
    /// WGS84 position.
    pub position: Position,
    /// GeoName of the country.
    pub country_id: u64,
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
    /// Country name.
    pub country_name: String,
    /// Feature class (one letter).
    pub feature_class: String,
    /// Readable feature class.
    pub feature_class_name: String,
    /// Feature code within the class.
    pub feature_code: String,
    /// Readable feature code.
    pub feature_code_name: String,
    /// Population.
    pub population: u64,
    /// Administrative subdivisions containing the toponym.
    pub admin: AdminSubdivisions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawGeoName {
    geoname_id: Option<Loose>,
    name: String,
    toponym_name: String,
    lat: Option<Loose>,
    lng: Option<Loose>,
    country_id: Option<Loose>,
    country_code: String,
    country_name: String,
    fcl: String,
    fcl_name: String,
    fcode: String,
    fcode_name: String,
    population: Option<Loose>,
    #[serde(flatten)]
    admin: RawAdmin,
}

impl FromWire for GeoName {
    type Wire = RawGeoName;

    fn from_wire(wire: RawGeoName) -> Result<Self, FieldError> {
        Ok(Self {
            id: int("geonameId", wire.geoname_id.as_ref())?,
            name: wire.name,
            toponym_name: wire.toponym_name,
            position: position(wire.lat.as_ref(), wire.lng.as_ref())?,
            country_id: int("countryId", wire.country_id.as_ref())?,
            country_code: wire.country_code,
            country_name: wire.country_name,
            feature_class: wire.fcl,
            feature_class_name: wire.fcl_name,
            feature_code: wire.fcode,
            feature_code_name: wire.fcode_name,
            population: int("population", wire.population.as_ref())?,
            admin: wire.admin.into_subdivisions()?,
        })
    }
}

/// A toponym with its distance from the queried point.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GeoNameNearby {
    /// The toponym.
    #[serde(flatten)]
    pub geoname: GeoName,
    /// Distance in kilometers.
    pub distance: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawGeoNameNearby {
    #[serde(flatten)]
    geoname: RawGeoName,
    distance: Option<Loose>,
}

impl FromWire for GeoNameNearby {
    type Wire = RawGeoNameNearby;

    fn from_wire(wire: RawGeoNameNearby) -> Result<Self, FieldError> {
        Ok(Self {
            geoname: GeoName::from_wire(wire.geoname)?,
            distance: float("distance", wire.distance.as_ref())?,
        })
    }
}

/// An alternate name of a toponym.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternateName {
    /// Language tag, empty when unknown.
    pub lang: String,
    /// The name.
    pub name: String,
}

/// Timezone of a toponym.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TimezoneInfo {
    /// IANA timezone identifier.
    pub id: String,
    /// Offset to GMT on 1 January, in hours.
    pub gmt_offset: f64,
    /// Offset to GMT on 1 July, in hours.
    pub dst_offset: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawTimezoneInfo {
    time_zone_id: String,
    gmt_offset: Option<Loose>,
    dst_offset: Option<Loose>,
}

/// A toponym with the extra detail returned by `getJSON`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GeoNameDetailed {
    /// The toponym.
    #[serde(flatten)]
    pub geoname: GeoName,
    /// Continent code.
    pub continent_code: String,
    /// Alternate names, when requested with the `FULL` style.
    pub alternate_names: Vec<AlternateName>,
    /// Timezone of the toponym.
    pub timezone: TimezoneInfo,
    /// Elevation in meters.
    pub elevation: i32,
    /// SRTM3 elevation in meters; the service reports ocean as `-32768`.
    pub srtm3: i64,
    /// ASTER GDEM elevation in meters; the service reports ocean as `-9999`.
    pub astergdem: i64,
    /// Bounding box of the toponym.
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawGeoNameDetailed {
    #[serde(flatten)]
    geoname: RawGeoName,
    continent_code: String,
    alternate_names: Vec<AlternateName>,
    timezone: RawTimezoneInfo,
    elevation: Option<Loose>,
    srtm3: Option<Loose>,
    astergdem: Option<Loose>,
    bbox: RawBoundingBox,
}

impl FromWire for GeoNameDetailed {
    type Wire = RawGeoNameDetailed;

    fn from_wire(wire: RawGeoNameDetailed) -> Result<Self, FieldError> {
        Ok(Self {
            geoname: GeoName::from_wire(wire.geoname)?,
            continent_code: wire.continent_code,
            alternate_names: wire.alternate_names,
            timezone: TimezoneInfo {
                id: wire.timezone.time_zone_id,
                gmt_offset: float("gmtOffset", wire.timezone.gmt_offset.as_ref())?,
                dst_offset: float("dstOffset", wire.timezone.dst_offset.as_ref())?,
            },
            elevation: int("elevation", wire.elevation.as_ref())?,
            srtm3: int("srtm3", wire.srtm3.as_ref())?,
            astergdem: int("astergdem", wire.astergdem.as_ref())?,
            bounding_box: wire.bbox.into_bounding_box()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn decode<T: FromWire>(json: &str) -> Result<T, FieldError> {
        T::from_wire(serde_json::from_str(json).unwrap())
    }

    const INNSBRUCK: &str = r#"{
        "adminCode1": "07", "lng": "11.39454", "geonameId": 2775220,
        "toponymName": "Innsbruck", "countryId": "2782113", "fcl": "P",
        "population": 130894, "countryCode": "AT", "name": "Innsbruck",
        "fclName": "city, village,...", "adminCodes1": {"ISO3166_2": "7"},
        "countryName": "Austria", "fcodeName": "seat of a first-order administrative division",
        "adminName1": "Tyrol", "lat": "47.26266", "fcode": "PPLA", "distance": "1.2345"
    }"#;

    #[test]
    fn test_geoname_from_loose_wire() {
        let geoname: GeoName = decode(INNSBRUCK).unwrap();
        assert_eq!(geoname.id, 2_775_220);
        assert_eq!(geoname.toponym_name, "Innsbruck");
        assert_relative_eq!(geoname.position.latitude, 47.26266);
        assert_relative_eq!(geoname.position.longitude, 11.39454);
        assert_eq!(geoname.country_id, 2_782_113);
        assert_eq!(geoname.feature_class, "P");
        assert_eq!(geoname.feature_code, "PPLA");
        assert_eq!(geoname.population, 130_894);
        assert_eq!(geoname.admin.first.code, "07");
        assert_eq!(geoname.admin.first.name, "Tyrol");
        assert!(geoname.admin.second.is_empty());
    }

    #[test]
    fn test_nearby_reuses_base_decoder() {
        let nearby: GeoNameNearby = decode(INNSBRUCK).unwrap();
        assert_eq!(nearby.geoname.id, 2_775_220);
        assert_relative_eq!(nearby.distance, 1.2345);
    }

    #[test]
    fn test_bad_country_id_names_field() {
        let err = decode::<GeoName>(r#"{"countryId": "AT"}"#).unwrap_err();
        assert_eq!(err.field(), "countryId");
    }

    #[test]
    fn test_bad_latitude_names_component() {
        let err = decode::<GeoName>(r#"{"lat": "north", "lng": "1"}"#).unwrap_err();
        assert_eq!(err.field(), "latitude");
    }

    #[test]
    fn test_detailed() {
        let json = r#"{
            "geonameId": 2775220, "name": "Innsbruck", "lat": "47.26266", "lng": "11.39454",
            "continentCode": "EU", "elevation": 574, "srtm3": 582, "astergdem": -9999,
            "timezone": {"gmtOffset": 1, "timeZoneId": "Europe/Vienna", "dstOffset": 2},
            "bbox": {"east": 11.45, "south": 47.21, "north": 47.3, "west": 11.3, "accuracyLevel": 0},
            "alternateNames": [{"name": "Innsbruck", "lang": "de"}, {"name": "Oenipons"}],
            "adminId1": "2763586", "adminName1": "Tyrol", "adminCode1": "07"
        }"#;
        let detailed: GeoNameDetailed = decode(json).unwrap();
        assert_eq!(detailed.geoname.name, "Innsbruck");
        assert_eq!(detailed.geoname.admin.first.id, 2_763_586);
        assert_eq!(detailed.continent_code, "EU");
        assert_eq!(detailed.elevation, 574);
        assert_eq!(detailed.srtm3, 582);
        assert_eq!(detailed.astergdem, -9999);
        assert_eq!(detailed.timezone.id, "Europe/Vienna");
        assert_relative_eq!(detailed.timezone.dst_offset, 2.0);
        assert_relative_eq!(detailed.bounding_box.north, 47.3);
        assert_eq!(detailed.alternate_names.len(), 2);
        assert_eq!(detailed.alternate_names[1].lang, "");
    }

    #[test]
    fn test_missing_lists_are_empty() {
        let detailed: GeoNameDetailed = decode("{}").unwrap();
        assert!(detailed.alternate_names.is_empty());
        assert!(detailed.geoname.position.is_zero());
    }
}

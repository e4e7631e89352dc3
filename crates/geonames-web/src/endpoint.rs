//! Paths and response envelopes of the web-service endpoints.

use serde_json::Value;

/// Where the result sits in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Envelope {
    /// The whole body is the result.
    Root,
    /// The result is the value under a single key.
    Key(&'static str),
    /// As [`Envelope::Key`], falling back to an alternative spelling.
    KeyOr(&'static str, &'static str),
}

impl Envelope {
    /// Takes the result value out of a decoded body.
    pub(crate) fn select(self, mut root: Value) -> Option<Value> {
        match self {
            Self::Root => Some(root),
            Self::Key(key) => root.get_mut(key).map(Value::take),
            Self::KeyOr(key, alias) => {
                if root.get(key).is_some() {
                    root.get_mut(key).map(Value::take)
                } else {
                    root.get_mut(alias).map(Value::take)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Endpoint {
    pub(crate) path: &'static str,
    pub(crate) envelope: Envelope,
}

impl Endpoint {
    const fn new(path: &'static str, envelope: Envelope) -> Self {
        Self { path, envelope }
    }
}

pub(crate) const SEARCH: Endpoint = Endpoint::new("searchJSON", Envelope::Key("geonames"));
pub(crate) const GET: Endpoint = Endpoint::new("getJSON", Envelope::Root);
pub(crate) const HIERARCHY: Endpoint = Endpoint::new("hierarchyJSON", Envelope::Key("geonames"));
pub(crate) const CHILDREN: Endpoint = Endpoint::new("childrenJSON", Envelope::Key("geonames"));
pub(crate) const SIBLINGS: Endpoint = Endpoint::new("siblingsJSON", Envelope::Key("geonames"));
pub(crate) const NEIGHBOURS: Endpoint =
    Endpoint::new("neighboursJSON", Envelope::Key("geonames"));
pub(crate) const CONTAINS: Endpoint = Endpoint::new("containsJSON", Envelope::Key("geonames"));
pub(crate) const FIND_NEARBY: Endpoint =
    Endpoint::new("findNearbyJSON", Envelope::Key("geonames"));
pub(crate) const FIND_NEARBY_PLACE_NAME: Endpoint =
    Endpoint::new("findNearbyPlaceNameJSON", Envelope::Key("geonames"));
pub(crate) const FIND_NEARBY_POSTAL_CODES: Endpoint =
    Endpoint::new("findNearbyPostalCodesJSON", Envelope::Key("postalCodes"));
pub(crate) const POSTAL_CODE_LOOKUP: Endpoint = Endpoint::new(
    "postalCodeLookupJSON",
    Envelope::KeyOr("postalCodes", "postalcodes"),
);
pub(crate) const POSTAL_CODE_SEARCH: Endpoint =
    Endpoint::new("postalCodeSearchJSON", Envelope::Key("postalCodes"));
pub(crate) const ADDRESS: Endpoint = Endpoint::new("addressJSON", Envelope::Key("address"));
pub(crate) const GEOCODE_ADDRESS: Endpoint =
    Endpoint::new("geoCodeAddressJSON", Envelope::Key("address"));
pub(crate) const STREET_NAME_LOOKUP: Endpoint =
    Endpoint::new("streetNameLookupJSON", Envelope::Key("address"));
pub(crate) const COUNTRY_CODE: Endpoint = Endpoint::new("countryCodeJSON", Envelope::Root);
pub(crate) const COUNTRY_INFO: Endpoint =
    Endpoint::new("countryInfoJSON", Envelope::Key("geonames"));
pub(crate) const COUNTRY_SUBDIVISION: Endpoint =
    Endpoint::new("countrySubdivisionJSON", Envelope::Root);
pub(crate) const TIMEZONE: Endpoint = Endpoint::new("timezoneJSON", Envelope::Root);
pub(crate) const OCEAN: Endpoint = Endpoint::new("oceanJSON", Envelope::Key("ocean"));
// Elevation bodies are flat: the dataset key holds the value next to lat/lng.
pub(crate) const ASTERGDEM: Endpoint = Endpoint::new("astergdemJSON", Envelope::Root);
pub(crate) const GTOPO30: Endpoint = Endpoint::new("gtopo30JSON", Envelope::Root);
pub(crate) const SRTM1: Endpoint = Endpoint::new("srtm1JSON", Envelope::Root);
pub(crate) const SRTM3: Endpoint = Endpoint::new("srtm3JSON", Envelope::Root);
pub(crate) const EARTHQUAKES: Endpoint =
    Endpoint::new("earthquakesJSON", Envelope::Key("earthquakes"));
pub(crate) const WEATHER: Endpoint =
    Endpoint::new("weatherJSON", Envelope::Key("weatherObservations"));
pub(crate) const WEATHER_ICAO: Endpoint =
    Endpoint::new("weatherIcaoJSON", Envelope::Key("weatherObservation"));
pub(crate) const FIND_NEARBY_WEATHER: Endpoint =
    Endpoint::new("findNearByWeatherJSON", Envelope::Key("weatherObservation"));
pub(crate) const FIND_NEARBY_WIKIPEDIA: Endpoint =
    Endpoint::new("findNearbyWikipediaJSON", Envelope::Key("geonames"));
pub(crate) const WIKIPEDIA_SEARCH: Endpoint =
    Endpoint::new("wikipediaSearchJSON", Envelope::Key("geonames"));
pub(crate) const WIKIPEDIA_BOUNDING_BOX: Endpoint =
    Endpoint::new("wikipediaBoundingBoxJSON", Envelope::Key("geonames"));

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_key_and_root() {
        let body = json!({"geonames": [1, 2], "totalResultsCount": 2});
        assert_eq!(Envelope::Key("geonames").select(body.clone()), Some(json!([1, 2])));
        assert_eq!(Envelope::Root.select(body.clone()), Some(body));
        assert_eq!(Envelope::Key("address").select(json!({})), None);
    }

    #[test]
    fn test_select_alias() {
        let envelope = POSTAL_CODE_LOOKUP.envelope;
        assert_eq!(
            envelope.select(json!({"postalcodes": ["6020"]})),
            Some(json!(["6020"]))
        );
        assert_eq!(
            envelope.select(json!({"postalCodes": ["6020"], "postalcodes": []})),
            Some(json!(["6020"]))
        );
    }
}

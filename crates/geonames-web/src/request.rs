//! Request parameters of the web-service endpoints.
//!
//! Every request is a plain struct with public fields and a [`Default`];
//! fields left at their default are not sent.

use geonames_types::{AdminCode, BoundingBox, Position};

use crate::query_fields;

/// Full-text toponym search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchRequest {
    /// Search over all attributes.
    pub q: String,
    /// Search over the place name only.
    pub name: String,
    /// Exact place name.
    pub name_equals: String,
    /// Place name prefix.
    pub name_starts_with: String,
    /// Maximum number of results.
    pub max_rows: u32,
    /// Offset of the first result, for paging.
    pub start_row: u32,
    /// Restrict to these ISO alpha-2 country codes.
    pub country: Vec<String>,
    /// Rank results from this country first.
    pub country_bias: String,
    /// Restrict to a continent code.
    pub continent_code: String,
    /// Restrict to an administrative division.
    pub admin_code: AdminCode,
    /// Restrict to feature classes.
    pub feature_class: Vec<String>,
    /// Restrict to feature codes.
    pub feature_code: Vec<String>,
    /// Restrict to cities above a population, e.g. `cities15000`.
    pub cities: String,
    /// Language of returned names.
    pub lang: String,
    /// Language the names are searched in.
    pub search_lang: String,
    /// Response verbosity: `SHORT`, `MEDIUM`, `LONG` or `FULL`.
    pub style: String,
    /// Require the search term to match the name.
    pub is_name_required: bool,
    /// Search for a user tag.
    pub tag: String,
    /// `AND` or `OR` for multiple search terms.
    pub operator: String,
    /// Fuzziness between 0 and 1.
    pub fuzzy: f64,
    /// Restrict to a rectangle.
    pub bounding_box: BoundingBox,
    /// `population`, `elevation` or `relevance`.
    pub order_by: String,
    /// Include the bounding box of each result.
    pub include_bbox: bool,
}

query_fields!(SearchRequest {
    q => "q",
    name => "name",
    name_equals => "name_equals",
    name_starts_with => "name_startsWith",
    max_rows => "maxRows",
    start_row => "startRow",
    country => "country",
    country_bias => "countryBias",
    continent_code => "continentCode",
    admin_code => dive,
    feature_class => "featureClass",
    feature_code => "featureCode",
    cities => "cities",
    lang => "lang",
    search_lang => "searchlang",
    style => "style",
    is_name_required => "isNameRequired",
    tag => "tag",
    operator => "operator",
    fuzzy => "fuzzy",
    bounding_box => dive,
    order_by => "orderby",
    include_bbox => "inclBbox",
});

/// Details of a single toponym.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetRequest {
    /// GeoName to fetch.
    pub geoname_id: u64,
    /// Language of returned names.
    pub lang: String,
    /// Response verbosity.
    pub style: String,
}

query_fields!(GetRequest {
    geoname_id => "geonameId",
    lang => "lang",
    style => "style",
});

/// Ancestors of a toponym, from the continent down.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HierarchyRequest {
    /// GeoName whose ancestors are listed.
    pub geoname_id: u64,
    /// Language of returned names.
    pub lang: String,
    /// Response verbosity.
    pub style: String,
}

query_fields!(HierarchyRequest {
    geoname_id => "geonameId",
    lang => "lang",
    style => "style",
});

/// Direct administrative children of a toponym.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChildrenRequest {
    /// Parent GeoName.
    pub geoname_id: u64,
    /// Maximum number of results.
    pub max_rows: u32,
    /// Alternative hierarchy, e.g. `tourism`.
    pub hierarchy: String,
    /// Language of returned names.
    pub lang: String,
    /// Response verbosity.
    pub style: String,
}

query_fields!(ChildrenRequest {
    geoname_id => "geonameId",
    max_rows => "maxRows",
    hierarchy => "hierarchy",
    lang => "lang",
    style => "style",
});

/// Toponyms sharing a parent with a toponym.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiblingsRequest {
    /// GeoName whose siblings are listed.
    pub geoname_id: u64,
    /// Language of returned names.
    pub lang: String,
    /// Response verbosity.
    pub style: String,
}

query_fields!(SiblingsRequest {
    geoname_id => "geonameId",
    lang => "lang",
    style => "style",
});

/// Neighbouring countries or divisions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NeighboursRequest {
    /// GeoName of a country or division.
    pub geoname_id: u64,
    /// ISO alpha-2 country code, instead of `geoname_id`.
    pub country: String,
    /// Language of returned names.
    pub lang: String,
    /// Response verbosity.
    pub style: String,
}

query_fields!(NeighboursRequest {
    geoname_id => "geonameId",
    country => "country",
    lang => "lang",
    style => "style",
});

/// Toponyms inside the area of a toponym.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainsRequest {
    /// GeoName of the enclosing feature.
    pub geoname_id: u64,
    /// Restrict to a feature class.
    pub feature_class: String,
    /// Restrict to a feature code.
    pub feature_code: String,
    /// Language of returned names.
    pub lang: String,
    /// Response verbosity.
    pub style: String,
}

query_fields!(ContainsRequest {
    geoname_id => "geonameId",
    feature_class => "featureClass",
    feature_code => "featureCode",
    lang => "lang",
    style => "style",
});

/// Toponyms near a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindNearbyRequest {
    /// The point.
    pub position: Position,
    /// Restrict to feature classes.
    pub feature_class: Vec<String>,
    /// Restrict to feature codes.
    pub feature_code: Vec<String>,
    /// Search radius in kilometers.
    pub radius: f64,
    /// Maximum number of results.
    pub max_rows: u32,
    /// Response verbosity.
    pub style: String,
    /// Only return toponyms in the point's country.
    pub local_country: bool,
}

query_fields!(FindNearbyRequest {
    position => dive,
    feature_class => "featureClass",
    feature_code => "featureCode",
    radius => "radius",
    max_rows => "maxRows",
    style => "style",
    local_country => "localCountry",
});

/// Populated places near a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindNearbyPlaceNameRequest {
    /// The point.
    pub position: Position,
    /// Language of returned names.
    pub lang: String,
    /// Search radius in kilometers.
    pub radius: f64,
    /// Maximum number of results.
    pub max_rows: u32,
    /// Response verbosity.
    pub style: String,
    /// Only return places in the point's country.
    pub local_country: bool,
    /// Restrict to cities above a population, e.g. `cities15000`.
    pub cities: String,
}

query_fields!(FindNearbyPlaceNameRequest {
    position => dive,
    lang => "lang",
    radius => "radius",
    max_rows => "maxRows",
    style => "style",
    local_country => "localCountry",
    cities => "cities",
});

/// Postal codes near a point or another postal code.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindNearbyPostalCodesRequest {
    /// The point.
    pub position: Position,
    /// Postal code to search around, instead of a point.
    pub postal_code: String,
    /// ISO alpha-2 country code of `postal_code`.
    pub country: String,
    /// Search radius in kilometers.
    pub radius: f64,
    /// Maximum number of results.
    pub max_rows: u32,
    /// Response verbosity.
    pub style: String,
    /// Only return postal codes in the point's country.
    pub local_country: bool,
    /// Return only the postal code and place name.
    pub is_reduced: bool,
}

query_fields!(FindNearbyPostalCodesRequest {
    position => dive,
    postal_code => "postalcode",
    country => "country",
    radius => "radius",
    max_rows => "maxRows",
    style => "style",
    local_country => "localCountry",
    is_reduced => "isReduced",
});

/// Places served by a postal code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostalCodeLookupRequest {
    /// The postal code.
    pub postal_code: String,
    /// ISO alpha-2 country code.
    pub country: String,
    /// Maximum number of results.
    pub max_rows: u32,
    /// Response character set.
    pub charset: String,
}

query_fields!(PostalCodeLookupRequest {
    postal_code => "postalcode",
    country => "country",
    max_rows => "maxRows",
    charset => "charset",
});

/// Postal code search by code or place name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostalCodeSearchRequest {
    /// Exact postal code.
    pub postal_code: String,
    /// Postal code prefix.
    pub postal_code_starts_with: String,
    /// Place name.
    pub place_name: String,
    /// Place name prefix.
    pub place_name_starts_with: String,
    /// Restrict to these ISO alpha-2 country codes.
    pub country: Vec<String>,
    /// Rank results from this country first.
    pub country_bias: String,
    /// Maximum number of results.
    pub max_rows: u32,
    /// Response verbosity.
    pub style: String,
    /// `AND` or `OR` for multiple place name terms.
    pub operator: String,
    /// Response character set.
    pub charset: String,
    /// Return only the postal code and place name.
    pub is_reduced: bool,
    /// Restrict to a rectangle.
    pub bounding_box: BoundingBox,
}

query_fields!(PostalCodeSearchRequest {
    postal_code => "postalcode",
    postal_code_starts_with => "postalcode_startsWith",
    place_name => "placename",
    place_name_starts_with => "placename_startsWith",
    country => "country",
    country_bias => "countryBias",
    max_rows => "maxRows",
    style => "style",
    operator => "operator",
    charset => "charset",
    is_reduced => "isReduced",
    bounding_box => dive,
});

/// Reverse geocoding to the nearest address.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressRequest {
    /// The point.
    pub position: Position,
    /// Search radius in kilometers.
    pub radius: f64,
    /// Maximum number of results.
    pub max_rows: u32,
}

query_fields!(AddressRequest {
    position => dive,
    radius => "radius",
    max_rows => "maxRows",
});

/// Geocoding of a free-text address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeocodeAddressRequest {
    /// The address.
    pub q: String,
    /// ISO alpha-2 country code.
    pub country: String,
    /// Postal code.
    pub postal_code: String,
}

query_fields!(GeocodeAddressRequest {
    q => "q",
    country => "country",
    postal_code => "postalcode",
});

/// Street name search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreetNameLookupRequest {
    /// Street name prefix.
    pub q: String,
    /// ISO alpha-2 country code.
    pub country: String,
    /// Postal code.
    pub postal_code: String,
    /// Restrict to an administrative division.
    pub admin_code: AdminCode,
    /// Return each street name once.
    pub is_unique_street_name: bool,
}

query_fields!(StreetNameLookupRequest {
    q => "q",
    country => "country",
    postal_code => "postalcode",
    admin_code => dive,
    is_unique_street_name => "isUniqueStreetName",
});

/// Country at a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountryCodeRequest {
    /// The point.
    pub position: Position,
    /// Buffer in kilometers for points on the coast.
    pub radius: f64,
    /// Language of the country name.
    pub lang: String,
}

query_fields!(CountryCodeRequest {
    position => dive,
    radius => "radius",
    lang => "lang",
});

/// Country metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryInfoRequest {
    /// ISO alpha-2 country codes; empty lists every country.
    pub country: Vec<String>,
    /// Language of country names.
    pub lang: String,
}

query_fields!(CountryInfoRequest {
    country => "country",
    lang => "lang",
});

/// First-order subdivision at a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountrySubdivisionRequest {
    /// The point.
    pub position: Position,
    /// Buffer in kilometers for points on a border.
    pub radius: f64,
    /// Admin level to return.
    pub level: u32,
    /// Language of the names.
    pub lang: String,
}

query_fields!(CountrySubdivisionRequest {
    position => dive,
    radius => "radius",
    level => "level",
    lang => "lang",
});

/// Timezone at a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimezoneRequest {
    /// The point.
    pub position: Position,
    /// Buffer in kilometers for points on the coast.
    pub radius: f64,
    /// Language of the country name.
    pub lang: String,
    /// Date for sunrise and sunset, `YYYY-MM-DD`.
    pub date: String,
}

query_fields!(TimezoneRequest {
    position => dive,
    radius => "radius",
    lang => "lang",
    date => "date",
});

/// Ocean or sea at a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OceanRequest {
    /// The point.
    pub position: Position,
    /// Buffer in kilometers for points on the coast.
    pub radius: f64,
}

query_fields!(OceanRequest {
    position => dive,
    radius => "radius",
});

/// Elevation at a point, for any elevation model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElevationRequest {
    /// The point.
    pub position: Position,
}

query_fields!(ElevationRequest {
    position => dive,
});

/// Earthquakes inside a rectangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EarthquakesRequest {
    /// The rectangle.
    pub bounding_box: BoundingBox,
    /// Only earthquakes before this date, `YYYY-MM-DD`.
    pub date: String,
    /// Minimum magnitude.
    pub min_magnitude: f64,
    /// Maximum number of results.
    pub max_rows: u32,
}

query_fields!(EarthquakesRequest {
    bounding_box => dive,
    date => "date",
    min_magnitude => "minMagnitude",
    max_rows => "maxRows",
});

/// Weather stations inside a rectangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherRequest {
    /// The rectangle.
    pub bounding_box: BoundingBox,
    /// Maximum number of results.
    pub max_rows: u32,
}

query_fields!(WeatherRequest {
    bounding_box => dive,
    max_rows => "maxRows",
});

/// Latest observation of one station.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeatherIcaoRequest {
    /// ICAO code of the station.
    pub icao: String,
}

query_fields!(WeatherIcaoRequest {
    icao => "ICAO",
});

/// Observation of the station nearest to a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindNearbyWeatherRequest {
    /// The point.
    pub position: Position,
    /// Search radius in kilometers.
    pub radius: f64,
}

query_fields!(FindNearbyWeatherRequest {
    position => dive,
    radius => "radius",
});

/// Wikipedia articles near a point or postal code.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindNearbyWikipediaRequest {
    /// The point.
    pub position: Position,
    /// Postal code to search around, instead of a point.
    pub postal_code: String,
    /// ISO alpha-2 country code of `postal_code`.
    pub country: String,
    /// Search radius in kilometers.
    pub radius: f64,
    /// Maximum number of results.
    pub max_rows: u32,
    /// Wikipedia language.
    pub lang: String,
}

query_fields!(FindNearbyWikipediaRequest {
    position => dive,
    postal_code => "postalcode",
    country => "country",
    radius => "radius",
    max_rows => "maxRows",
    lang => "lang",
});

/// Full-text Wikipedia search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WikipediaSearchRequest {
    /// Search over title and text.
    pub q: String,
    /// Search over the title only.
    pub title: String,
    /// Maximum number of results.
    pub max_rows: u32,
    /// Wikipedia language.
    pub lang: String,
}

query_fields!(WikipediaSearchRequest {
    q => "q",
    title => "title",
    max_rows => "maxRows",
    lang => "lang",
});

/// Wikipedia articles inside a rectangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WikipediaBoundingBoxRequest {
    /// The rectangle.
    pub bounding_box: BoundingBox,
    /// Maximum number of results.
    pub max_rows: u32,
    /// Wikipedia language.
    pub lang: String,
}

query_fields!(WikipediaBoundingBoxRequest {
    bounding_box => dive,
    max_rows => "maxRows",
    lang => "lang",
});

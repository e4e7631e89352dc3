//! Web-service client: one method per JSON endpoint.

use std::time::Duration;

use geonames_types::normalize_base_url;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::endpoint::{self, Endpoint};
use crate::model::{
    Address, AddressNearby, CountryDetailed, CountryNearby, CountrySubdivision, Earthquake,
    Elevation, GeoName, GeoNameDetailed, GeoNameNearby, Ocean, PostalCode, PostalCodeNearby,
    Timezone, WeatherObservation, WeatherObservationNearby, Wikipedia, WikipediaNearby,
};
use crate::request::{
    AddressRequest, ChildrenRequest, ContainsRequest, CountryCodeRequest, CountryInfoRequest,
    CountrySubdivisionRequest, EarthquakesRequest, ElevationRequest, FindNearbyPlaceNameRequest,
    FindNearbyPostalCodesRequest, FindNearbyRequest, FindNearbyWeatherRequest,
    FindNearbyWikipediaRequest, GeocodeAddressRequest, GetRequest, HierarchyRequest,
    NeighboursRequest, OceanRequest, PostalCodeLookupRequest, PostalCodeSearchRequest,
    SearchRequest, SiblingsRequest, StreetNameLookupRequest, TimezoneRequest, WeatherIcaoRequest,
    WeatherRequest, WikipediaBoundingBoxRequest, WikipediaSearchRequest,
};
use crate::wire::{FromWire, decode_response};
use crate::{EncodeQuery, WebError};

/// Default web-service host.
pub const DEFAULT_BASE_URL: &str = "https://secure.geonames.org";

/// Configuration for the web-service client.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Account name sent with every request.
    pub username: String,
    /// Base URL of the service; normalized when the client is built.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl WebConfig {
    /// Creates a configuration for `username` with default settings.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(5),
            user_agent: format!("geonames/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Client for the GeoNames JSON web services.
///
/// Each method encodes its request, sends one GET, and decodes the body into
/// a typed result. Error bodies become [`WebError::Service`].
#[derive(Debug, Clone)]
pub struct WebClient {
    http: Client,
    base_url: String,
    username: String,
}

macro_rules! endpoints {
    ($(
        $(#[$doc:meta])*
        $name:ident($request:ty) -> $result:ty = $endpoint:ident;
    )*) => {
        $(
            $(#[$doc])*
            ///
            /// # Errors
            ///
            /// Returns a [`WebError`] if the request fails, the token is
            /// cancelled, or the service answers with an error.
            pub async fn $name(
                &self,
                cancel: &CancellationToken,
                request: &$request,
            ) -> Result<$result, WebError> {
                self.call(cancel, endpoint::$endpoint, request).await
            }
        )*
    };
}

impl WebClient {
    /// Creates a new web client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: WebConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client that sends requests through `http`.
    ///
    /// Timeout and user agent in `config` are ignored in favour of those
    /// already set on `http`.
    #[must_use]
    pub fn with_http_client(config: WebConfig, http: Client) -> Self {
        Self {
            http,
            base_url: normalize_base_url(&config.base_url),
            username: config.username,
        }
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the account name sent with every request.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[instrument(skip(self, cancel, endpoint, request), fields(path = endpoint.path))]
    async fn call<Q, T>(
        &self,
        cancel: &CancellationToken,
        endpoint: Endpoint,
        request: &Q,
    ) -> Result<T, WebError>
    where
        Q: EncodeQuery,
        T: FromWire,
    {
        if cancel.is_cancelled() {
            return Err(WebError::Cancelled);
        }

        let mut query = request.to_query();
        query.set("type", "json");
        query.set("username", self.username.as_str());

        let url = format!("{}/{}", self.base_url, endpoint.path);
        let exchange = async {
            let response = self
                .http
                .get(&url)
                .query(&query.pairs().collect::<Vec<_>>())
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(WebError::Cancelled),
            exchange = exchange => exchange?,
        };
        debug!(status, bytes = body.len(), "received response");

        decode_response(endpoint.envelope, status, &body)
    }

    endpoints! {
        /// Searches toponyms by name and attributes.
        search(SearchRequest) -> Vec<GeoName> = SEARCH;
        /// Fetches the full record of one toponym.
        get(GetRequest) -> GeoNameDetailed = GET;
        /// Lists the ancestors of a toponym, continent first.
        hierarchy(HierarchyRequest) -> Vec<GeoName> = HIERARCHY;
        /// Lists the direct administrative children of a toponym.
        children(ChildrenRequest) -> Vec<GeoName> = CHILDREN;
        /// Lists the toponyms sharing a parent with a toponym.
        siblings(SiblingsRequest) -> Vec<GeoName> = SIBLINGS;
        /// Lists neighbouring countries or divisions.
        neighbours(NeighboursRequest) -> Vec<GeoName> = NEIGHBOURS;
        /// Lists toponyms inside the area of a toponym.
        contains(ContainsRequest) -> Vec<GeoName> = CONTAINS;
        /// Finds toponyms near a point.
        find_nearby(FindNearbyRequest) -> Vec<GeoNameNearby> = FIND_NEARBY;
        /// Finds populated places near a point.
        find_nearby_place_name(FindNearbyPlaceNameRequest) -> Vec<GeoNameNearby>
            = FIND_NEARBY_PLACE_NAME;
        /// Finds postal codes near a point or postal code.
        find_nearby_postal_codes(FindNearbyPostalCodesRequest) -> Vec<PostalCodeNearby>
            = FIND_NEARBY_POSTAL_CODES;
        /// Lists the places served by a postal code.
        postal_code_lookup(PostalCodeLookupRequest) -> Vec<PostalCode> = POSTAL_CODE_LOOKUP;
        /// Searches postal codes by code or place name.
        postal_code_search(PostalCodeSearchRequest) -> Vec<PostalCode> = POSTAL_CODE_SEARCH;
        /// Finds the address nearest to a point.
        address(AddressRequest) -> AddressNearby = ADDRESS;
        /// Resolves a free-text address.
        geocode_address(GeocodeAddressRequest) -> Address = GEOCODE_ADDRESS;
        /// Searches street names.
        street_name_lookup(StreetNameLookupRequest) -> Vec<Address> = STREET_NAME_LOOKUP;
        /// Returns the country at a point.
        country_code(CountryCodeRequest) -> CountryNearby = COUNTRY_CODE;
        /// Returns country metadata.
        country_info(CountryInfoRequest) -> Vec<CountryDetailed> = COUNTRY_INFO;
        /// Returns the subdivision at a point.
        country_subdivision(CountrySubdivisionRequest) -> CountrySubdivision
            = COUNTRY_SUBDIVISION;
        /// Returns the timezone at a point.
        timezone(TimezoneRequest) -> Timezone = TIMEZONE;
        /// Returns the ocean or sea at a point.
        ocean(OceanRequest) -> Ocean = OCEAN;
        /// Returns the ASTER GDEM elevation of a point.
        astergdem(ElevationRequest) -> Elevation = ASTERGDEM;
        /// Returns the GTOPO30 elevation of a point.
        gtopo30(ElevationRequest) -> Elevation = GTOPO30;
        /// Returns the SRTM1 elevation of a point.
        srtm1(ElevationRequest) -> Elevation = SRTM1;
        /// Returns the SRTM3 elevation of a point.
        srtm3(ElevationRequest) -> Elevation = SRTM3;
        /// Lists earthquakes inside a rectangle.
        earthquakes(EarthquakesRequest) -> Vec<Earthquake> = EARTHQUAKES;
        /// Lists weather observations inside a rectangle.
        weather(WeatherRequest) -> Vec<WeatherObservation> = WEATHER;
        /// Returns the latest observation of a station.
        weather_icao(WeatherIcaoRequest) -> WeatherObservation = WEATHER_ICAO;
        /// Returns the observation of the station nearest to a point.
        find_nearby_weather(FindNearbyWeatherRequest) -> WeatherObservationNearby
            = FIND_NEARBY_WEATHER;
        /// Finds Wikipedia articles near a point or postal code.
        find_nearby_wikipedia(FindNearbyWikipediaRequest) -> Vec<WikipediaNearby>
            = FIND_NEARBY_WIKIPEDIA;
        /// Searches Wikipedia articles.
        wikipedia_search(WikipediaSearchRequest) -> Vec<Wikipedia> = WIKIPEDIA_SEARCH;
        /// Lists Wikipedia articles inside a rectangle.
        wikipedia_bounding_box(WikipediaBoundingBoxRequest) -> Vec<Wikipedia>
            = WIKIPEDIA_BOUNDING_BOX;
    }
}

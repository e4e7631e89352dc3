//! Typed client for the GeoNames JSON web services.
//!
//! This crate provides:
//!
//! - [`WebClient`] - One method per endpoint
//! - [`request`] - Request parameter structs
//! - [`model`] - Typed results
//! - [`Query`] / [`EncodeQuery`] / [`query_fields!`] - Query string encoding
//! - [`WebError`] / [`ServiceError`] - Call and service errors

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/geonames-rs/geonames/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod endpoint;
mod error;
pub mod model;
mod query;
pub mod request;
mod wire;

pub use client::{DEFAULT_BASE_URL, WebClient, WebConfig};
pub use error::{DecodeError, ErrorCode, ServiceError, WebError};
pub use model::{
    Address, AddressNearby, AdminSubdivision, AdminSubdivisions, AlternateName, CountryDetailed,
    CountryNearby, CountrySubdivision, Earthquake, Elevation, GeoName, GeoNameDetailed,
    GeoNameNearby, Ocean, PostalCode, PostalCodeNearby, SubdivisionCode, Timezone, TimezoneInfo,
    WeatherObservation, WeatherObservationNearby, Wikipedia, WikipediaNearby,
};
pub use query::{EncodeQuery, Query, QueryValue};
pub use request::{
    AddressRequest, ChildrenRequest, ContainsRequest, CountryCodeRequest, CountryInfoRequest,
    CountrySubdivisionRequest, EarthquakesRequest, ElevationRequest, FindNearbyPlaceNameRequest,
    FindNearbyPostalCodesRequest, FindNearbyRequest, FindNearbyWeatherRequest,
    FindNearbyWikipediaRequest, GeocodeAddressRequest, GetRequest, HierarchyRequest,
    NeighboursRequest, OceanRequest, PostalCodeLookupRequest, PostalCodeSearchRequest,
    SearchRequest, SiblingsRequest, StreetNameLookupRequest, TimezoneRequest, WeatherIcaoRequest,
    WeatherRequest, WikipediaBoundingBoxRequest, WikipediaSearchRequest,
};

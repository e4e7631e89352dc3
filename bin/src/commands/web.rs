//! Web-service lookups.

use crate::output::print_json;
use anyhow::{Context, Result};
use geonames_lib::Position;
use geonames_lib::web::request::{CountryCodeRequest, GetRequest, SearchRequest, TimezoneRequest};
use geonames_lib::web::{WebClient, WebConfig};
use tokio_util::sync::CancellationToken;

/// Creates a web client for `username`.
pub(crate) fn client(username: &str, base_url: Option<&str>) -> Result<WebClient> {
    let mut config = WebConfig::new(username);
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }
    WebClient::new(config).context("Failed to create web client")
}

/// Prints toponyms matching `query`.
pub(crate) async fn search(
    client: &WebClient,
    cancel: &CancellationToken,
    query: String,
    country: Vec<String>,
    max_rows: u32,
    lang: Option<String>,
) -> Result<()> {
    let request = SearchRequest {
        q: query,
        country,
        max_rows,
        lang: lang.unwrap_or_default(),
        ..SearchRequest::default()
    };
    let results = client
        .search(cancel, &request)
        .await
        .context("Search failed")?;
    print_json(&results)
}

/// Prints the full record of one toponym.
pub(crate) async fn get(
    client: &WebClient,
    cancel: &CancellationToken,
    geoname_id: u64,
    lang: Option<String>,
) -> Result<()> {
    let request = GetRequest {
        geoname_id,
        lang: lang.unwrap_or_default(),
        ..GetRequest::default()
    };
    let geoname = client
        .get(cancel, &request)
        .await
        .with_context(|| format!("Failed to fetch geoname {geoname_id}"))?;
    print_json(&geoname)
}

/// Prints the timezone at a point.
pub(crate) async fn timezone(
    client: &WebClient,
    cancel: &CancellationToken,
    lat: f64,
    lng: f64,
    radius: Option<f64>,
    date: Option<String>,
) -> Result<()> {
    let request = TimezoneRequest {
        position: Position::new(lat, lng),
        radius: radius.unwrap_or_default(),
        date: date.unwrap_or_default(),
        ..TimezoneRequest::default()
    };
    let timezone = client
        .timezone(cancel, &request)
        .await
        .with_context(|| format!("Timezone lookup failed for {lat},{lng}"))?;
    print_json(&timezone)
}

/// Prints the country at a point.
pub(crate) async fn country_code(
    client: &WebClient,
    cancel: &CancellationToken,
    lat: f64,
    lng: f64,
    radius: Option<f64>,
    lang: Option<String>,
) -> Result<()> {
    let request = CountryCodeRequest {
        position: Position::new(lat, lng),
        radius: radius.unwrap_or_default(),
        lang: lang.unwrap_or_default(),
    };
    let country = client
        .country_code(cancel, &request)
        .await
        .with_context(|| format!("Country lookup failed for {lat},{lng}"))?;
    print_json(&country)
}

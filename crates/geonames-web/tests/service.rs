//! End-to-end tests of the web client against a mock service.

use std::time::Duration;

use approx::assert_relative_eq;
use geonames_types::Position;
use geonames_web::{
    CountryCodeRequest, EarthquakesRequest, ElevationRequest, ErrorCode, PostalCodeLookupRequest,
    SearchRequest, WebClient, WebConfig, WebError,
};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WebClient {
    WebClient::new(WebConfig::new("test-user").with_base_url(server.uri())).unwrap()
}

async fn last_query(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    let request = requests.last().unwrap();
    request.url.query().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_country_code_happy_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countryCodeJSON"))
        .and(query_param("lat", "1.111"))
        .and(query_param("lng", "-1.111"))
        .and(query_param("radius", "10"))
        .and(query_param("lang", "en"))
        .and(query_param("type", "json"))
        .and(query_param("username", "test-user"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"countryCode":"US","countryName":"United States","languages":"en,es","distance":"0.111"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let request = CountryCodeRequest {
        position: Position::new(1.111, -1.111),
        radius: 10.0,
        lang: "en".into(),
    };
    let country = client_for(&server)
        .country_code(&CancellationToken::new(), &request)
        .await
        .unwrap();

    assert_eq!(country.code, "US");
    assert_eq!(country.name, "United States");
    assert_eq!(country.languages, ["en", "es"]);
    assert_relative_eq!(country.distance, 0.111);
}

#[tokio::test]
async fn test_error_body_becomes_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countryCodeJSON"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"status":{"message":"no country code found","value":15}}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .country_code(&CancellationToken::new(), &CountryCodeRequest::default())
        .await
        .unwrap_err();

    let service = err.service_error().unwrap();
    assert_eq!(service.code(), ErrorCode::NO_RESULT_FOUND);
    assert_eq!(service.message(), "no country code found");
    assert_eq!(
        err.to_string(),
        r#"got error response => code: 15, message: "no country code found""#
    );
}

#[tokio::test]
async fn test_status_on_success_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/searchJSON"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":{"message":"user account not enabled to use the free webservice.","value":10}}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(&CancellationToken::new(), &SearchRequest::default())
        .await
        .unwrap_err();
    assert!(
        err.service_error()
            .unwrap()
            .has_code(ErrorCode::AUTHORIZATION_EXCEPTION)
    );
}

#[tokio::test]
async fn test_zero_request_sends_only_type_and_username() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/earthquakesJSON"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"earthquakes":[]}"#))
        .mount(&server)
        .await;

    let quakes = client_for(&server)
        .earthquakes(&CancellationToken::new(), &EarthquakesRequest::default())
        .await
        .unwrap();

    assert!(quakes.is_empty());
    assert_eq!(last_query(&server).await, "type=json&username=test-user");
}

#[tokio::test]
async fn test_search_decodes_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/searchJSON"))
        .and(query_param("q", "innsbruck"))
        .and(query_param("maxRows", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"totalResultsCount":1,"geonames":[{"adminCode1":"07","lng":"11.39454",
                "geonameId":2775220,"toponymName":"Innsbruck","countryId":"2782113",
                "fcl":"P","population":130894,"countryCode":"AT","name":"Innsbruck",
                "fclName":"city, village,...","adminCodes1":{"ISO3166_2":"7"},
                "countryName":"Austria","fcodeName":"seat of a first-order administrative division",
                "adminName1":"Tyrol","lat":"47.26266","fcode":"PPLA"}]}"#,
        ))
        .mount(&server)
        .await;

    let request = SearchRequest {
        q: "innsbruck".into(),
        max_rows: 1,
        ..SearchRequest::default()
    };
    let results = client_for(&server)
        .search(&CancellationToken::new(), &request)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    let innsbruck = &results[0];
    assert_eq!(innsbruck.id, 2_775_220);
    assert_eq!(innsbruck.country_id, 2_782_113);
    assert_eq!(innsbruck.population, 130_894);
    assert_eq!(innsbruck.feature_code, "PPLA");
    assert_eq!(innsbruck.admin.first.code, "07");
    assert_eq!(innsbruck.admin.first.name, "Tyrol");
    assert_relative_eq!(innsbruck.position.latitude, 47.26266);
}

#[tokio::test]
async fn test_postal_code_lookup_accepts_lower_case_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/postalCodeLookupJSON"))
        .and(query_param("postalcode", "6020"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"postalcodes":[{"adminName1":"Tirol","adminCode1":"07","postalcode":"6020",
                "countryCode":"AT","lng":11.4,"placeName":"Innsbruck","lat":47.2667}]}"#,
        ))
        .mount(&server)
        .await;

    let request = PostalCodeLookupRequest {
        postal_code: "6020".into(),
        country: "AT".into(),
        ..PostalCodeLookupRequest::default()
    };
    let codes = client_for(&server)
        .postal_code_lookup(&CancellationToken::new(), &request)
        .await
        .unwrap();

    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].postal_code, "6020");
    assert_eq!(codes[0].place_name, "Innsbruck");
    assert_eq!(codes[0].admin.first.name, "Tirol");
}

#[tokio::test]
async fn test_elevation_reads_model_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/srtm3JSON"))
        .and(query_param("lat", "47.01"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"srtm3":206,"lng":10.2,"lat":47.01}"#),
        )
        .mount(&server)
        .await;

    let request = ElevationRequest {
        position: Position::new(47.01, 10.2),
    };
    let elevation = client_for(&server)
        .srtm3(&CancellationToken::new(), &request)
        .await
        .unwrap();
    assert_eq!(elevation.value, 206);
    assert_relative_eq!(elevation.position.longitude, 10.2);
}

#[tokio::test]
async fn test_malformed_field_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countryCodeJSON"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"countryCode":"US","distance":"far"}"#),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .country_code(&CancellationToken::new(), &CountryCodeRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WebError::Decode(_)));
    assert!(err.to_string().starts_with("decode response => parse distance => "));
}

#[tokio::test]
async fn test_cancel_before_start_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = client_for(&server)
        .earthquakes(&cancel, &EarthquakesRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_cancel_while_waiting_for_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timezoneJSON"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = client_for(&server)
        .timezone(&cancel, &Default::default())
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}

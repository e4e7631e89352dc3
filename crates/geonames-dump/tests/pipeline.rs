//! End-to-end tests of the dump client against a mock dump host.

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use geonames_dump::{
    AdminDivision, DumpClient, DumpConfig, DumpError, GeoName, Language, TimeZone,
};
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::write::SimpleFileOptions;

const INNSBRUCK: &str = "2775220\tInnsbruck\tInnsbruck\tInnsbruck,Insbruck\t47.26266\t11.39454\tP\tPPLA\tAT\t\t07\t703\t70101\t\t130894\t574\t582\tEurope/Vienna\t2023-03-03";

fn client_for(server: &MockServer, temp_dir: &TempDir) -> DumpClient {
    let config = DumpConfig {
        base_url: server.uri(),
        temp_dir: temp_dir.path().to_path_buf(),
        ..DumpConfig::default()
    };
    DumpClient::new(config).unwrap()
}

fn zipped(entry: &str, body: &str) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file(entry, SimpleFileOptions::default()).unwrap();
    writer.write_all(body.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn staged_files(temp_dir: &TempDir) -> usize {
    std::fs::read_dir(temp_dir.path()).unwrap().count()
}

async fn serve(server: &MockServer, file: &str, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(format!("/{file}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

/// Replaces one column of the Innsbruck row.
fn innsbruck_with(column: usize, value: &str) -> String {
    let mut fields: Vec<&str> = INNSBRUCK.split('\t').collect();
    fields[column] = value;
    fields.join("\t")
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[tokio::test]
async fn test_admin_divisions_round_trip() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    serve(
        &server,
        "admin1CodesASCII.txt",
        b"XX.XY\tFoo1\tFoo2\t1\nXY.YX\tBar1\tBar2\t2\n".to_vec(),
    )
    .await;

    let client = client_for(&server, &temp_dir);
    let mut divisions = Vec::new();
    client
        .admin_divisions_first(&CancellationToken::new(), |division: AdminDivision| {
            divisions.push(division);
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(divisions.len(), 2);
    assert_eq!(divisions[0].geoname_id, 1);
    assert_eq!(divisions[0].code, "XX.XY");
    assert_eq!(divisions[0].name, "Foo1");
    assert_eq!(divisions[0].ascii_name, "Foo2");
    assert_eq!(divisions[1].geoname_id, 2);
    assert_eq!(divisions[1].code, "XY.YX");
    assert_eq!(divisions[1].name, "Bar1");
    assert_eq!(divisions[1].ascii_name, "Bar2");
    assert_eq!(staged_files(&temp_dir), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn test_malformed_rows_are_logged_and_skipped() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer({
            let captured = captured.clone();
            move || captured.clone()
        })
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let malformed = [
        "only\tthree\tcolumns".to_string(),
        innsbruck_with(0, "abc"),
        innsbruck_with(4, "north"),
        innsbruck_with(5, "east"),
        innsbruck_with(14, "many"),
        innsbruck_with(15, "1.5"),
        innsbruck_with(16, "-"),
        innsbruck_with(18, "03/03/2023"),
    ];
    let mut body = String::new();
    body.push_str(INNSBRUCK);
    body.push('\n');
    for line in &malformed {
        body.push_str(line);
        body.push('\n');
    }
    body.push_str(&innsbruck_with(0, "2775221"));
    body.push('\n');

    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    serve(&server, "allCountries.zip", zipped("allCountries.txt", &body)).await;

    let client = client_for(&server, &temp_dir);
    let mut ids = Vec::new();
    client
        .all_countries(&CancellationToken::new(), |geoname: GeoName| {
            ids.push(geoname.id);
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(ids, vec![2_775_220, 2_775_221]);
    assert_eq!(staged_files(&temp_dir), 0);

    let logs = captured.text();
    assert_eq!(logs.matches("skipping row").count(), 8);
    for expected in [
        "invalid row length, expected 19, got 3",
        r#"parse id => invalid integer "abc": invalid digit found in string"#,
        r#"parse latitude => invalid float "north": invalid float literal"#,
        r#"parse longitude => invalid float "east": invalid float literal"#,
        r#"parse population => invalid integer "many": invalid digit found in string"#,
        r#"parse elevation => invalid integer "1.5": invalid digit found in string"#,
        r#"parse dem => invalid integer "-": invalid digit found in string"#,
        r#"parse modification_date => "03/03/2023" does not match layout "%Y-%m-%d""#,
    ] {
        assert!(logs.contains(expected), "missing {expected:?} in:\n{logs}");
    }
}

#[tokio::test]
async fn test_cancel_mid_stream_removes_staged_file() {
    let body: String = (1..=5000)
        .map(|id| format!("AT.{id}\tName{id}\tName{id}\t{id}\n"))
        .collect();

    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    serve(&server, "admin2Codes.txt", body.into_bytes()).await;

    let client = client_for(&server, &temp_dir);
    let cancel = CancellationToken::new();
    let mut seen = 0;
    let err = client
        .admin_divisions_second(&cancel, |_| {
            seen += 1;
            cancel.cancel();
            Ok(())
        })
        .await
        .unwrap_err();

    assert!(err.is_cancelled(), "unexpected {err}");
    assert_eq!(seen, 1);
    assert_eq!(staged_files(&temp_dir), 0);
}

#[tokio::test]
async fn test_cancel_before_start_sends_nothing() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, &temp_dir);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client
        .country_info(&cancel, |_| Ok(()))
        .await
        .unwrap_err();
    assert!(matches!(err, DumpError::Cancelled));
}

#[tokio::test]
async fn test_unexpected_status() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .and(path("/DE.zip"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server, &temp_dir);
    let err = client
        .by_country(&CancellationToken::new(), "de", |_| Ok(()))
        .await
        .unwrap_err();

    assert_eq!(err.unexpected_status(), Some(404));
    assert_eq!(err.to_string(), "download file => unexpected status code: 404");
    assert_eq!(staged_files(&temp_dir), 0);
}

#[tokio::test]
async fn test_missing_archive_entry() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    serve(&server, "hierarchy.zip", zipped("readme.txt", "nothing here\n")).await;

    let client = client_for(&server, &temp_dir);
    let err = client
        .hierarchy(&CancellationToken::new(), |_| Ok(()))
        .await
        .unwrap_err();

    assert!(err.is_file_not_found_in_archive(), "unexpected {err}");
    assert_eq!(
        err.to_string(),
        "parse file => file not found in archive: hierarchy.txt"
    );
    assert_eq!(staged_files(&temp_dir), 0);
}

#[tokio::test]
async fn test_header_lines_are_dropped() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    serve(
        &server,
        "timeZones.txt",
        b"CountryCode\tTimeZoneId\tGMT offset 1. Jan 2024\tDST offset 1. Jul 2024\trawOffset (independant of DST)\nAT\tEurope/Vienna\t1.0\t2.0\t1.0\n".to_vec(),
    )
    .await;
    serve(
        &server,
        "iso-languagecodes.txt",
        b"ISO 639-3\tISO 639-2\tISO 639-1\tLanguage Name\ndeu\tger\tde\tGerman\n".to_vec(),
    )
    .await;

    let client = client_for(&server, &temp_dir);
    let cancel = CancellationToken::new();

    let mut zones = Vec::new();
    client
        .time_zones(&cancel, |zone: TimeZone| {
            zones.push(zone);
            Ok(())
        })
        .await
        .unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].id, "Europe/Vienna");
    approx::assert_relative_eq!(zones[0].dst_offset, 2.0);

    let mut languages = Vec::new();
    client
        .languages(&cancel, |language: Language| {
            languages.push(language);
            Ok(())
        })
        .await
        .unwrap();
    assert_eq!(languages.len(), 1);
    assert_eq!(languages[0].iso639_1, "de");
    assert_eq!(languages[0].name, "German");
}

#[tokio::test]
async fn test_sink_errors_do_not_end_the_call() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    serve(
        &server,
        "userTags.zip",
        zipped("userTags.txt", "1\tskiing\n2\tbeach\n3\tmuseum\n"),
    )
    .await;

    let client = client_for(&server, &temp_dir);
    let mut tags = Vec::new();
    client
        .user_tags(&CancellationToken::new(), |tag| {
            if tag.geoname_id == 2 {
                return Err("full".into());
            }
            tags.push(tag.tag);
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(tags, vec!["skiing", "museum"]);
}

//! Dump client: one operation per published dataset.

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;

use geonames_types::normalize_base_url;
use reqwest::Client;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use crate::archive::scan_staged;
use crate::file::{CitySize, DumpFile, yesterday};
use crate::lines::{DEFAULT_MAX_LINE_LEN, Line, RecordSink};
use crate::records::{
    AdminCode5, AdminDivision, AlternateName, AlternateNameDeleted, Country, Feature, FromRow,
    GeoName, GeoNameDeleted, Hierarchy, Language, TimeZone, UserTag,
};
use crate::stage::stage;
use crate::{DumpError, SinkError};

/// Default dump host.
pub const DEFAULT_BASE_URL: &str = "https://download.geonames.org/export/dump";

/// Configuration for the dump client.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Base URL of the dump host; normalized when the client is built.
    pub base_url: String,
    /// Whole-request timeout, body transfer included.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Directory for staged downloads.
    pub temp_dir: PathBuf,
    /// Longest accepted line in bytes.
    pub max_line_len: usize,
    /// Lines buffered between the scanner and the sink.
    pub line_buffer: usize,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10 * 60), // allCountries is several hundred MB
            connect_timeout: Duration::from_secs(30),
            user_agent: format!("geonames/{}", env!("CARGO_PKG_VERSION")),
            temp_dir: std::env::temp_dir(),
            max_line_len: DEFAULT_MAX_LINE_LEN,
            line_buffer: 1024,
        }
    }
}

/// Client for the GeoNames bulk dumps.
///
/// Every operation downloads one file, stages it on disk, and streams its
/// records to `sink` in file order. Rows that fail to demarshal, and records
/// the sink rejects, are logged and skipped. The call returns once the whole
/// file has been read, the token is cancelled, or a transport, archive or
/// scanner error occurs. The staged file is always removed before returning.
#[derive(Debug, Clone)]
pub struct DumpClient {
    http: Client,
    base_url: String,
    config: DumpConfig,
}

impl DumpClient {
    /// Creates a new dump client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: DumpConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(DumpConfig::default())
    }

    /// Creates a client that sends requests through `http`.
    ///
    /// Timeouts and user agent in `config` are ignored in favour of those
    /// already set on `http`.
    #[must_use]
    pub fn with_http_client(config: DumpConfig, http: Client) -> Self {
        Self {
            http,
            base_url: normalize_base_url(&config.base_url),
            config,
        }
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &DumpConfig {
        &self.config
    }

    /// Returns the URL of a dump file.
    #[must_use]
    pub fn url(&self, file: &DumpFile) -> String {
        format!("{}/{}", self.base_url, file.file_name())
    }

    /// Streams every toponym (`allCountries.zip`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn all_countries<F>(
        &self,
        cancel: &CancellationToken,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(GeoName) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::AllCountries, sink).await
    }

    /// Streams the toponyms of one country (`<CODE>.zip`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn by_country<F>(
        &self,
        cancel: &CancellationToken,
        country_code: &str,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(GeoName) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::Country(country_code.to_string()), sink)
            .await
    }

    /// Streams toponyms that belong to no country (`no-country.zip`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn no_country<F>(&self, cancel: &CancellationToken, sink: F) -> Result<(), DumpError>
    where
        F: FnMut(GeoName) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::NoCountry, sink).await
    }

    /// Streams the cities above a population threshold (`cities<size>.zip`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn cities<F>(
        &self,
        cancel: &CancellationToken,
        size: CitySize,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(GeoName) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::Cities(size), sink).await
    }

    /// Streams all alternate names (`alternateNamesV2.zip`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn alternate_names<F>(
        &self,
        cancel: &CancellationToken,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(AlternateName) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::AlternateNames, sink).await
    }

    /// Streams parent/child relations (`hierarchy.zip`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn hierarchy<F>(&self, cancel: &CancellationToken, sink: F) -> Result<(), DumpError>
    where
        F: FnMut(Hierarchy) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::Hierarchy, sink).await
    }

    /// Streams user tags (`userTags.zip`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn user_tags<F>(&self, cancel: &CancellationToken, sink: F) -> Result<(), DumpError>
    where
        F: FnMut(UserTag) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::UserTags, sink).await
    }

    /// Streams first-order administrative divisions (`admin1CodesASCII.txt`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn admin_divisions_first<F>(
        &self,
        cancel: &CancellationToken,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(AdminDivision) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::AdminDivisionsFirst, sink).await
    }

    /// Streams second-order administrative divisions (`admin2Codes.txt`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn admin_divisions_second<F>(
        &self,
        cancel: &CancellationToken,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(AdminDivision) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::AdminDivisionsSecond, sink).await
    }

    /// Streams fifth-order administrative codes (`adminCode5.zip`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn admin_codes_fifth<F>(
        &self,
        cancel: &CancellationToken,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(AdminCode5) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::AdminCodesFifth, sink).await
    }

    /// Streams country metadata (`countryInfo.txt`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn country_info<F>(
        &self,
        cancel: &CancellationToken,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(Country) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::CountryInfo, sink).await
    }

    /// Streams timezones (`timeZones.txt`), dropping the header line.
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn time_zones<F>(&self, cancel: &CancellationToken, sink: F) -> Result<(), DumpError>
    where
        F: FnMut(TimeZone) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::TimeZones, sink).await
    }

    /// Streams feature code descriptions in `lang` (`featureCodes_<lang>.txt`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn feature_codes<F>(
        &self,
        cancel: &CancellationToken,
        lang: &str,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(Feature) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::FeatureCodes(lang.to_string()), sink)
            .await
    }

    /// Streams ISO 639 language codes (`iso-languagecodes.txt`), dropping the
    /// header line.
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn languages<F>(&self, cancel: &CancellationToken, sink: F) -> Result<(), DumpError>
    where
        F: FnMut(Language) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::Languages, sink).await
    }

    /// Streams yesterday's modified toponyms (`modifications-<date>.txt`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`]. Shortly
    /// after midnight the file may not be published yet, which surfaces as
    /// an unexpected status code.
    pub async fn modifications<F>(
        &self,
        cancel: &CancellationToken,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(GeoName) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::Modifications(yesterday()), sink)
            .await
    }

    /// Streams yesterday's deleted toponyms (`deletes-<date>.txt`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn deletes<F>(&self, cancel: &CancellationToken, sink: F) -> Result<(), DumpError>
    where
        F: FnMut(GeoNameDeleted) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::Deletes(yesterday()), sink).await
    }

    /// Streams yesterday's modified alternate names
    /// (`alternateNamesModifications-<date>.txt`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn alternate_names_modifications<F>(
        &self,
        cancel: &CancellationToken,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(AlternateName) -> Result<(), SinkError>,
    {
        self.fetch(
            cancel,
            &DumpFile::AlternateNamesModifications(yesterday()),
            sink,
        )
        .await
    }

    /// Streams yesterday's deleted alternate names
    /// (`alternateNamesDeletes-<date>.txt`).
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the pipeline; see [`DumpError`].
    pub async fn alternate_names_deletes<F>(
        &self,
        cancel: &CancellationToken,
        sink: F,
    ) -> Result<(), DumpError>
    where
        F: FnMut(AlternateNameDeleted) -> Result<(), SinkError>,
    {
        self.fetch(cancel, &DumpFile::AlternateNamesDeletes(yesterday()), sink)
            .await
    }

    /// Downloads, stages and parses one dump file.
    ///
    /// Scanning runs on the blocking pool and hands lines over a bounded
    /// channel; demarshalling and the sink run here, on the caller's task.
    #[instrument(skip(self, cancel, sink), fields(file = %file))]
    async fn fetch<T, F>(
        &self,
        cancel: &CancellationToken,
        file: &DumpFile,
        sink: F,
    ) -> Result<(), DumpError>
    where
        T: FromRow,
        F: FnMut(T) -> Result<(), SinkError>,
    {
        if cancel.is_cancelled() {
            return Err(DumpError::Cancelled);
        }

        let file_name = file.file_name();
        let staged = stage(
            &self.http,
            cancel,
            &self.url(file),
            &file_name,
            &self.config.temp_dir,
        )
        .await?;

        let (tx, mut rx) = mpsc::channel::<Line>(self.config.line_buffer.max(1));
        let scan_cancel = cancel.clone();
        let max_line_len = self.config.max_line_len;
        let scanner = tokio::task::spawn_blocking(move || {
            // `staged` lives until the scan ends; dropping it removes the file.
            let file = staged.reopen().map_err(crate::ParseError::Open)?;
            scan_staged(file, &file_name, &scan_cancel, max_line_len, |line| {
                match tx.blocking_send(line) {
                    Ok(()) => ControlFlow::Continue(()),
                    Err(_) => ControlFlow::Break(()),
                }
            })
        });

        let mut records = RecordSink::new(file.layout(), sink);
        while let Some(line) = rx.recv().await {
            if cancel.is_cancelled() {
                drop(rx);
                // Join so the staged file is gone before returning.
                let _ = scanner.await;
                return Err(DumpError::Cancelled);
            }
            records.accept(line);
        }

        let lines = scanner.await??;
        let summary = records.finish(lines);
        info!(
            lines = summary.lines,
            records = summary.records,
            skipped = summary.skipped,
            "finished dump file"
        );
        Ok(())
    }
}

//! Dump command implementation.
//!
//! Streams one dump dataset to stdout as NDJSON while a spinner on stderr
//! counts the records.

use crate::output::{NdjsonWriter, spinner};
use anyhow::{Context, Result, bail};
use clap::Subcommand;
use geonames_lib::dump::{CitySize, DumpClient, DumpConfig, SinkError};
use serde::Serialize;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// Dump datasets.
#[derive(Subcommand)]
pub(crate) enum Dataset {
    /// Every toponym (allCountries.zip)
    AllCountries,
    /// Toponyms of one country (<CODE>.zip)
    Country {
        /// ISO alpha-2 country code
        code: String,
    },
    /// Toponyms outside any country (no-country.zip)
    NoCountry,
    /// Cities above a population (cities<size>.zip)
    Cities {
        /// Population threshold: 500, 1000, 5000 or 15000
        size: CitySize,
    },
    /// Alternate names (alternateNamesV2.zip)
    AlternateNames,
    /// Parent/child relations (hierarchy.zip)
    Hierarchy,
    /// User tags (userTags.zip)
    UserTags,
    /// First-order divisions (admin1CodesASCII.txt)
    Admin1,
    /// Second-order divisions (admin2Codes.txt)
    Admin2,
    /// Fifth-order admin codes (adminCode5.zip)
    AdminCode5,
    /// Country metadata (countryInfo.txt)
    CountryInfo,
    /// Timezones (timeZones.txt)
    TimeZones,
    /// Feature classes and codes (featureCodes_<lang>.txt)
    FeatureCodes {
        /// Description language, e.g. en
        #[arg(default_value = "en")]
        lang: String,
    },
    /// ISO 639 language codes (iso-languagecodes.txt)
    Languages,
    /// Toponyms modified yesterday
    Modifications,
    /// Toponyms deleted yesterday
    Deletes,
    /// Alternate names modified yesterday
    AlternateNamesModifications,
    /// Alternate names deleted yesterday
    AlternateNamesDeletes,
}

/// Streams `dataset` to stdout.
pub(crate) async fn dump(
    cancel: &CancellationToken,
    dataset: Dataset,
    base_url: Option<&str>,
    temp_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let mut config = DumpConfig::default();
    if let Some(base_url) = base_url {
        config.base_url = base_url.to_string();
    }
    if let Some(temp_dir) = temp_dir {
        config.temp_dir = temp_dir;
    }
    let client = DumpClient::new(config).context("Failed to create dump client")?;

    let progress = spinner(quiet, String::new());
    let mut out = NdjsonWriter::new(progress.clone());

    let result = match dataset {
        Dataset::AllCountries => {
            progress.set_message("allCountries");
            client.all_countries(cancel, |r| emit(&mut out, cancel, &r)).await
        }
        Dataset::Country { code } => {
            progress.set_message(code.to_uppercase());
            client
                .by_country(cancel, &code, |r| emit(&mut out, cancel, &r))
                .await
        }
        Dataset::NoCountry => {
            progress.set_message("no-country");
            client.no_country(cancel, |r| emit(&mut out, cancel, &r)).await
        }
        Dataset::Cities { size } => {
            progress.set_message(format!("cities{size}"));
            client
                .cities(cancel, size, |r| emit(&mut out, cancel, &r))
                .await
        }
        Dataset::AlternateNames => {
            progress.set_message("alternateNamesV2");
            client
                .alternate_names(cancel, |r| emit(&mut out, cancel, &r))
                .await
        }
        Dataset::Hierarchy => {
            progress.set_message("hierarchy");
            client.hierarchy(cancel, |r| emit(&mut out, cancel, &r)).await
        }
        Dataset::UserTags => {
            progress.set_message("userTags");
            client.user_tags(cancel, |r| emit(&mut out, cancel, &r)).await
        }
        Dataset::Admin1 => {
            progress.set_message("admin1CodesASCII");
            client
                .admin_divisions_first(cancel, |r| emit(&mut out, cancel, &r))
                .await
        }
        Dataset::Admin2 => {
            progress.set_message("admin2Codes");
            client
                .admin_divisions_second(cancel, |r| emit(&mut out, cancel, &r))
                .await
        }
        Dataset::AdminCode5 => {
            progress.set_message("adminCode5");
            client
                .admin_codes_fifth(cancel, |r| emit(&mut out, cancel, &r))
                .await
        }
        Dataset::CountryInfo => {
            progress.set_message("countryInfo");
            client.country_info(cancel, |r| emit(&mut out, cancel, &r)).await
        }
        Dataset::TimeZones => {
            progress.set_message("timeZones");
            client.time_zones(cancel, |r| emit(&mut out, cancel, &r)).await
        }
        Dataset::FeatureCodes { lang } => {
            progress.set_message(format!("featureCodes_{lang}"));
            client
                .feature_codes(cancel, &lang, |r| emit(&mut out, cancel, &r))
                .await
        }
        Dataset::Languages => {
            progress.set_message("iso-languagecodes");
            client.languages(cancel, |r| emit(&mut out, cancel, &r)).await
        }
        Dataset::Modifications => {
            progress.set_message("modifications");
            client
                .modifications(cancel, |r| emit(&mut out, cancel, &r))
                .await
        }
        Dataset::Deletes => {
            progress.set_message("deletes");
            client.deletes(cancel, |r| emit(&mut out, cancel, &r)).await
        }
        Dataset::AlternateNamesModifications => {
            progress.set_message("alternateNamesModifications");
            client
                .alternate_names_modifications(cancel, |r| emit(&mut out, cancel, &r))
                .await
        }
        Dataset::AlternateNamesDeletes => {
            progress.set_message("alternateNamesDeletes");
            client
                .alternate_names_deletes(cancel, |r| emit(&mut out, cancel, &r))
                .await
        }
    };

    let written = out.finish()?;
    match result {
        Ok(()) => {
            progress.finish_with_message(format!("done, {written} records"));
            Ok(())
        }
        Err(err) if err.is_cancelled() => {
            progress.abandon_with_message(format!("cancelled after {written} records"));
            bail!("dump cancelled")
        }
        Err(err) => {
            progress.abandon();
            Err(err).context("Failed to stream dump")
        }
    }
}

/// Writes a record, stopping the stream once stdout is gone.
fn emit<T: Serialize>(
    out: &mut NdjsonWriter,
    cancel: &CancellationToken,
    record: &T,
) -> Result<(), SinkError> {
    out.write(record).map_err(|err| {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            cancel.cancel();
        }
        SinkError::from(err)
    })
}

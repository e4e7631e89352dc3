//! Streaming client for the GeoNames bulk dump files.
//!
//! This crate provides the dump pipeline:
//!
//! - [`DumpClient`] - One operation per published dataset
//! - [`DumpFile`] - File names on the dump host
//! - [`find_entry`] - Archive entry selection
//! - [`scan_lines`] / [`parse_records`] - Line scanning and row demarshalling
//! - [`records`] - Typed records and the [`FromRow`] trait

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/geonames-rs/geonames/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod archive;
mod client;
mod error;
mod file;
mod lines;
pub mod records;
mod stage;

pub use archive::find_entry;
pub use client::{DEFAULT_BASE_URL, DumpClient, DumpConfig};
pub use error::{DownloadError, DumpError, ParseError, RowError, SinkError};
pub use file::{CitySize, DumpFile, archive_entry_name, yesterday};
pub use lines::{
    DEFAULT_MAX_LINE_LEN, Layout, Line, ParseOptions, ParseSummary, parse_records, scan_lines,
};
pub use records::{
    ADMIN_HIERARCHY, AdminCode5, AdminDivision, AlternateName, AlternateNameDeleted, Country,
    Feature, FromRow, GeoName, GeoNameDeleted, Hierarchy, Language, TimeZone, UserTag,
};

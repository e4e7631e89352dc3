//! Core types for the geonames clients.
//!
//! This crate provides the pieces shared by the dump and web-service clients:
//!
//! - [`Position`] - A WGS84 latitude/longitude pair
//! - [`BoundingBox`] - A rectangle given by its four edges
//! - [`AdminCode`] - Five-level administrative code tuple
//! - [`FieldError`] - Field-named parse failure
//! - [`value`] - Primitive parsers for numbers, dates and comma lists
//! - [`normalize_base_url`] - Base URL normalization

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/geonames-rs/geonames/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod admin;
mod error;
mod position;
mod url;
pub mod value;

pub use admin::AdminCode;
pub use error::{FieldError, ValueError};
pub use position::{BoundingBox, Position};
pub use url::normalize_base_url;

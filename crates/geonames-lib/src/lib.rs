//! Rust client for the GeoNames bulk dumps and JSON web services.
//!
//! This is a facade crate over the geonames workspace crates. The dump and
//! web crates both define a `GeoName` and an `AlternateName`, so each is
//! exposed as its own module; the shared value types sit at the root.
//!
//! # Quick Start
//!
//! ```ignore
//! use geonames_lib::prelude::*;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cancel = CancellationToken::new();
//!
//!     let dump = DumpClient::with_defaults()?;
//!     dump.time_zones(&cancel, |zone| {
//!         println!("{} {}", zone.country_code, zone.id);
//!         Ok(())
//!     })
//!     .await?;
//!
//!     let web = WebClient::new(WebConfig::new("demo"))?;
//!     let request = TimezoneRequest {
//!         position: Position::new(47.26, 11.39),
//!         ..Default::default()
//!     };
//!     println!("{:?}", web.timezone(&cancel, &request).await?);
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/geonames-rs/geonames/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export shared value types
pub use geonames_types::*;

/// Bulk dump streaming.
#[cfg(feature = "dump")]
pub use geonames_dump as dump;

/// JSON web services.
#[cfg(feature = "web")]
pub use geonames_web as web;

/// Prelude module for convenient imports.
///
/// ```
/// use geonames_lib::prelude::*;
/// ```
pub mod prelude {
    pub use geonames_types::{AdminCode, BoundingBox, FieldError, Position};

    #[cfg(feature = "dump")]
    pub use geonames_dump::{CitySize, DumpClient, DumpConfig, DumpError, DumpFile, SinkError};

    #[cfg(feature = "web")]
    pub use geonames_web::request::*;
    #[cfg(feature = "web")]
    pub use geonames_web::{ErrorCode, ServiceError, WebClient, WebConfig, WebError};
}

//! Timezone offsets from `timeZones.txt`.

use geonames_types::value::parse_float;
use serde::Serialize;

use super::{FromRow, columns};
use crate::RowError;

/// A timezone with its offsets to GMT in hours.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TimeZone {
    /// ISO alpha-2 country code.
    pub country_code: String,
    /// IANA timezone identifier.
    pub id: String,
    /// GMT offset on 1st of January.
    pub gmt_offset: f64,
    /// DST offset on 1st of July.
    pub dst_offset: f64,
    /// Raw offset without DST.
    pub raw_offset: f64,
}

/// `CountryCode, TimeZoneId, GMT offset 1. Jan, DST offset 1. Jul, rawOffset`
///
/// The file's header line is dropped by the caller, not here.
impl FromRow for TimeZone {
    const COLUMNS: usize = 5;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [country_code, id, gmt_offset, dst_offset, raw_offset] = columns(row)?;
        Ok(Self {
            country_code,
            id,
            gmt_offset: parse_float("gmt_offset", &gmt_offset)?,
            dst_offset: parse_float("dst_offset", &dst_offset)?,
            raw_offset: parse_float("raw_offset", &raw_offset)?,
        })
    }
}

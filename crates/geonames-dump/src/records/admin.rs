//! Administrative division listings and small two-column records.

use geonames_types::value::parse_int;
use serde::Serialize;

use super::{FromRow, columns};
use crate::RowError;

/// A first or second-order administrative division.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AdminDivision {
    /// Concatenated code, e.g. `AT.07` or `AT.07.701`.
    pub code: String,
    /// Name in UTF-8.
    pub name: String,
    /// Name in plain ASCII.
    pub ascii_name: String,
    /// GeoName of the division.
    pub geoname_id: u64,
}

/// `code, name, name ascii, geonameid`
impl FromRow for AdminDivision {
    const COLUMNS: usize = 4;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [code, name, ascii_name, geoname_id] = columns(row)?;
        Ok(Self {
            code,
            name,
            ascii_name,
            geoname_id: parse_int("geoname_id", &geoname_id)?,
        })
    }
}

/// Fifth-order administrative code of a toponym.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AdminCode5 {
    /// GeoName the code belongs to.
    pub geoname_id: u64,
    /// The admin5 code.
    pub code: String,
}

/// `geonameId, adm5code`
impl FromRow for AdminCode5 {
    const COLUMNS: usize = 2;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [geoname_id, code] = columns(row)?;
        Ok(Self {
            geoname_id: parse_int("geoname_id", &geoname_id)?,
            code,
        })
    }
}

/// A user-supplied tag on a toponym.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UserTag {
    /// GeoName the tag belongs to.
    pub geoname_id: u64,
    /// The tag.
    pub tag: String,
}

/// `geonameId, tag`
impl FromRow for UserTag {
    const COLUMNS: usize = 2;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [geoname_id, tag] = columns(row)?;
        Ok(Self {
            geoname_id: parse_int("geoname_id", &geoname_id)?,
            tag,
        })
    }
}

//! Deletion records from the daily `deletes-*` delta files.

use geonames_types::value::parse_int;
use serde::Serialize;

use super::{FromRow, columns};
use crate::RowError;

/// A GeoName removed from the database.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GeoNameDeleted {
    /// Deleted GeoName.
    pub geoname_id: u64,
    /// Its last name.
    pub name: String,
    /// Reason given by the editor.
    pub comment: String,
}

/// `geonameId, name, comment`
impl FromRow for GeoNameDeleted {
    const COLUMNS: usize = 3;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [geoname_id, name, comment] = columns(row)?;
        Ok(Self {
            geoname_id: parse_int("geoname_id", &geoname_id)?,
            name,
            comment,
        })
    }
}

/// An alternate name removed from the database.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AlternateNameDeleted {
    /// Deleted alternate name.
    pub id: u64,
    /// GeoName it belonged to.
    pub geoname_id: u64,
    /// The removed name.
    pub name: String,
    /// Reason given by the editor.
    pub comment: String,
}

/// `alternateNameId, geonameId, name, comment`
impl FromRow for AlternateNameDeleted {
    const COLUMNS: usize = 4;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [id, geoname_id, name, comment] = columns(row)?;
        Ok(Self {
            id: parse_int("id", &id)?,
            geoname_id: parse_int("geoname_id", &geoname_id)?,
            name,
            comment,
        })
    }
}

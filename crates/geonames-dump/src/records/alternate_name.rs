//! Alternate names from `alternateNamesV2` and its daily deltas.

use geonames_types::value::{parse_flag, parse_int};
use serde::Serialize;

use super::{FromRow, columns};
use crate::RowError;

/// A name of a toponym in a given language or naming system.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AlternateName {
    /// Alternate name identifier.
    pub id: u64,
    /// GeoName the name belongs to.
    pub geoname_id: u64,
    /// ISO 639 language code, or a pseudo code such as `post`, `iata`,
    /// `icao`, `faac`, `wkdt`, `link` or `abbr`.
    pub language: String,
    /// The name itself.
    pub value: String,
    /// Official or preferred name.
    pub is_preferred: bool,
    /// Short name, e.g. "California" for "State of California".
    pub is_short: bool,
    /// Colloquial or slang term.
    pub is_colloquial: bool,
    /// Historic name no longer in use.
    pub is_historic: bool,
    /// Start of the period the name was used.
    pub from: String,
    /// End of the period the name was used.
    pub to: String,
}

/// `alternateNameId, geonameid, isolanguage, alternate name, isPreferredName,
/// isShortName, isColloquial, isHistoric, from, to`
impl FromRow for AlternateName {
    const COLUMNS: usize = 10;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [
            id,
            geoname_id,
            language,
            value,
            preferred,
            short,
            colloquial,
            historic,
            from,
            to,
        ] = columns(row)?;

        Ok(Self {
            id: parse_int("id", &id)?,
            geoname_id: parse_int("geoname_id", &geoname_id)?,
            language,
            value,
            is_preferred: parse_flag(&preferred),
            is_short: parse_flag(&short),
            is_colloquial: parse_flag(&colloquial),
            is_historic: parse_flag(&historic),
            from,
            to,
        })
    }
}

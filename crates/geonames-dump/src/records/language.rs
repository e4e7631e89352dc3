//! Language codes from `iso-languagecodes.txt`.

use serde::Serialize;

use super::{FromRow, columns};
use crate::RowError;

/// A language with its ISO 639 codes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Language {
    /// ISO 639-1 two-letter code, may be empty.
    pub iso639_1: String,
    /// ISO 639-2 code(s).
    pub iso639_2: String,
    /// ISO 639-3 three-letter code.
    pub iso639_3: String,
    /// Language name.
    pub name: String,
}

/// `ISO 639-3, ISO 639-2, ISO 639-1, Language Name`
///
/// The file lists the codes from the most to the least specific standard, so
/// the columns are assigned in reverse.
impl FromRow for Language {
    const COLUMNS: usize = 4;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [iso639_3, iso639_2, iso639_1, name] = columns(row)?;
        Ok(Self {
            iso639_1,
            iso639_2,
            iso639_3,
            name,
        })
    }
}

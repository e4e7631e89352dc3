//! Typed dump records and their row demarshallers.
//!
//! Column order is defined by the upstream dump files; every record documents
//! its layout next to its [`FromRow`] impl.

mod admin;
mod alternate_name;
mod country;
mod deleted;
mod feature;
mod geoname;
mod hierarchy;
mod language;
mod time_zone;

pub use admin::{AdminCode5, AdminDivision, UserTag};
pub use alternate_name::AlternateName;
pub use country::Country;
pub use deleted::{AlternateNameDeleted, GeoNameDeleted};
pub use feature::Feature;
pub use geoname::GeoName;
pub use hierarchy::{ADMIN_HIERARCHY, Hierarchy};
pub use language::Language;
pub use time_zone::TimeZone;

use crate::RowError;

/// A record that can be demarshalled from one tab-separated dump row.
pub trait FromRow: Sized {
    /// Number of columns a row must have.
    const COLUMNS: usize;

    /// Builds the record from the row's fields.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::InvalidLength`] if the row does not have exactly
    /// [`Self::COLUMNS`] fields, or a field error if a column fails to parse.
    fn from_row(row: Vec<String>) -> Result<Self, RowError>;
}

/// Moves the row into a fixed-size array, checking the column count.
pub(crate) fn columns<const N: usize>(row: Vec<String>) -> Result<[String; N], RowError> {
    row.try_into().map_err(|row: Vec<String>| RowError::InvalidLength {
        expected: N,
        got: row.len(),
    })
}

#[cfg(test)]
pub(crate) fn row(line: &str) -> Vec<String> {
    line.split('\t').map(str::to_string).collect()
}

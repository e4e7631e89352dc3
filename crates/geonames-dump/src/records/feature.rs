//! Feature code descriptions from `featureCodes_<lang>.txt`.

use serde::Serialize;

use super::{FromRow, columns};
use crate::RowError;

/// A feature class/code pair with its localized name and description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Feature {
    /// Composite code, `class.code` (e.g. `P.PPLC`).
    pub code: String,
    /// Short name.
    pub name: String,
    /// Longer description.
    pub description: String,
}

impl Feature {
    /// Splits the composite code into class and code.
    ///
    /// Returns `None` if the composite has no `.` separator.
    ///
    /// ```
    /// use geonames_dump::Feature;
    ///
    /// let feature = Feature { code: "P.PPLC".into(), ..Feature::default() };
    /// assert_eq!(feature.class_and_code(), Some(("P", "PPLC")));
    /// ```
    #[must_use]
    pub fn class_and_code(&self) -> Option<(&str, &str)> {
        self.code.split_once('.')
    }
}

impl FromRow for Feature {
    const COLUMNS: usize = 3;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [code, name, description] = columns(row)?;
        Ok(Self {
            code,
            name,
            description,
        })
    }
}

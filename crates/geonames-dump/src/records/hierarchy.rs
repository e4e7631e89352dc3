//! Parent/child relations from `hierarchy.zip`.

use geonames_types::value::parse_int;
use serde::Serialize;

use super::{FromRow, columns};
use crate::RowError;

/// Relation type of the administrative hierarchy.
pub const ADMIN_HIERARCHY: &str = "ADM";

/// A parent/child edge between two toponyms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Hierarchy {
    /// Parent GeoName.
    pub parent_id: u64,
    /// Child GeoName.
    pub child_id: u64,
    /// Relation type; `ADM` for the administrative hierarchy, may be empty.
    pub kind: String,
}

impl Hierarchy {
    /// Returns true if the edge belongs to the administrative hierarchy.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.kind == ADMIN_HIERARCHY
    }
}

/// `parentId, childId, type`
impl FromRow for Hierarchy {
    const COLUMNS: usize = 3;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [parent_id, child_id, kind] = columns(row)?;
        Ok(Self {
            parent_id: parse_int("parent_id", &parent_id)?,
            child_id: parse_int("child_id", &child_id)?,
            kind,
        })
    }
}

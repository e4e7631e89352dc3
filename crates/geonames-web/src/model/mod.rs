//! Typed web-service results.

mod address;
mod country;
mod earthquake;
mod geoname;
mod ocean;
mod postal;
mod timezone;
mod weather;
mod wikipedia;

pub use address::{Address, AddressNearby};
pub use country::{CountryDetailed, CountryNearby, CountrySubdivision, SubdivisionCode};
pub use earthquake::Earthquake;
pub use geoname::{AlternateName, GeoName, GeoNameDetailed, GeoNameNearby, TimezoneInfo};
pub use ocean::{Elevation, Ocean};
pub use postal::{PostalCode, PostalCodeNearby};
pub use timezone::Timezone;
pub use weather::{WeatherObservation, WeatherObservationNearby};
pub use wikipedia::{Wikipedia, WikipediaNearby};

use serde::Serialize;

/// One level of administrative subdivision.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AdminSubdivision {
    /// Admin code at this level.
    pub code: String,
    /// Name of the subdivision.
    pub name: String,
    /// GeoName of the subdivision, 0 when not reported.
    pub id: u64,
}

impl AdminSubdivision {
    /// Returns true if the service reported nothing for this level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty() && self.name.is_empty() && self.id == 0
    }
}

/// The five administrative subdivision levels of a result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AdminSubdivisions {
    /// First-order division (state, province).
    pub first: AdminSubdivision,
    /// Second-order division (county, district).
    pub second: AdminSubdivision,
    /// Third-order division.
    pub third: AdminSubdivision,
    /// Fourth-order division.
    pub fourth: AdminSubdivision,
    /// Fifth-order division.
    pub fifth: AdminSubdivision,
}

impl AdminSubdivisions {
    /// Returns the subdivision at `level` (1 to 5).
    #[must_use]
    pub const fn level(&self, level: usize) -> Option<&AdminSubdivision> {
        match level {
            1 => Some(&self.first),
            2 => Some(&self.second),
            3 => Some(&self.third),
            4 => Some(&self.fourth),
            5 => Some(&self.fifth),
            _ => None,
        }
    }

    /// Returns the admin codes alone.
    #[must_use]
    pub fn codes(&self) -> geonames_types::AdminCode {
        geonames_types::AdminCode {
            first: self.first.code.clone(),
            second: self.second.code.clone(),
            third: self.third.code.clone(),
            fourth: self.fourth.code.clone(),
            fifth: self.fifth.code.clone(),
        }
    }
}

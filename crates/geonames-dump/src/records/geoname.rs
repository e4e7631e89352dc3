//! GeoName records from `allCountries`, per-country, `cities*` and delta dumps.

use chrono::NaiveDate;
use geonames_types::value::{parse_date, parse_int, split_list};
use geonames_types::{AdminCode, Position};
use serde::Serialize;

use super::{FromRow, columns};
use crate::RowError;

/// A toponym as published in the dump files.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GeoName {
    /// GeoName identifier.
    pub id: u64,
    /// Name in UTF-8.
    pub name: String,
    /// Name in plain ASCII.
    pub ascii_name: String,
    /// Alternate names, ASCII transliterations and abbreviations.
    pub alternate_names: Vec<String>,
    /// WGS84 position.
    pub position: Position,
    /// Feature class (one letter).
    pub feature_class: String,
    /// Feature code within the class.
    pub feature_code: String,
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
    /// Alternate country codes.
    pub alternate_country_codes: Vec<String>,
    /// First to fourth-order administrative codes.
    pub admin_code: AdminCode,
    /// Population.
    pub population: i64,
    /// Elevation in meters, 0 when unknown.
    pub elevation: i64,
    /// Digital elevation model value (srtm3 or gtopo30).
    pub dem: i64,
    /// IANA timezone identifier.
    pub timezone: String,
    /// Date of last modification.
    pub modified: Option<NaiveDate>,
}

impl GeoName {
    /// Returns true if the toponym is assigned to a country.
    #[must_use]
    pub fn has_country(&self) -> bool {
        !self.country_code.is_empty()
    }
}

/// `id, name, asciiname, alternatenames, latitude, longitude, feature class,
/// feature code, country code, cc2, admin1..admin4, population, elevation,
/// dem, timezone, modification date`
impl FromRow for GeoName {
    const COLUMNS: usize = 19;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [
            id,
            name,
            ascii_name,
            alternate_names,
            latitude,
            longitude,
            feature_class,
            feature_code,
            country_code,
            alternate_country_codes,
            admin1,
            admin2,
            admin3,
            admin4,
            population,
            elevation,
            dem,
            timezone,
            modified,
        ] = columns(row)?;

        Ok(Self {
            id: parse_int("id", &id)?,
            name,
            ascii_name,
            alternate_names: split_list(&alternate_names),
            position: Position::parse(&latitude, &longitude)?,
            feature_class,
            feature_code,
            country_code,
            alternate_country_codes: split_list(&alternate_country_codes),
            admin_code: AdminCode {
                first: admin1,
                second: admin2,
                third: admin3,
                fourth: admin4,
                fifth: String::new(),
            },
            population: parse_int("population", &population)?,
            elevation: parse_int("elevation", &elevation)?,
            dem: parse_int("dem", &dem)?,
            timezone,
            modified: parse_date("modification_date", &modified)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::row;
    use approx::assert_relative_eq;

    const INNSBRUCK: &str = "2775220\tInnsbruck\tInnsbruck\tInnsbruck,Insbruck, ,Ενιπόντη\t47.26266\t11.39454\tP\tPPLA\tAT\t\t07\t703\t70101\t\t130894\t574\t582\tEurope/Vienna\t2023-03-03";

    #[test]
    fn test_parse_full_row() {
        let geoname = GeoName::from_row(row(INNSBRUCK)).unwrap();

        assert_eq!(geoname.id, 2_775_220);
        assert_eq!(geoname.name, "Innsbruck");
        assert_eq!(
            geoname.alternate_names,
            vec!["Innsbruck", "Insbruck", "Ενιπόντη"]
        );
        assert_relative_eq!(geoname.position.latitude, 47.26266);
        assert_relative_eq!(geoname.position.longitude, 11.39454);
        assert_eq!(geoname.feature_class, "P");
        assert_eq!(geoname.feature_code, "PPLA");
        assert_eq!(geoname.country_code, "AT");
        assert!(geoname.alternate_country_codes.is_empty());
        assert_eq!(geoname.admin_code.first, "07");
        assert_eq!(geoname.admin_code.third, "70101");
        assert_eq!(geoname.admin_code.fourth, "");
        assert_eq!(geoname.population, 130_894);
        assert_eq!(geoname.elevation, 574);
        assert_eq!(geoname.dem, 582);
        assert_eq!(geoname.timezone, "Europe/Vienna");
        assert_eq!(geoname.modified, NaiveDate::from_ymd_opt(2023, 3, 3));
        assert!(geoname.has_country());
    }

    #[test]
    fn test_empty_numeric_columns_are_zero() {
        let line = "1\tX\tX\t\t\t\tS\tHTL\t\t\t\t\t\t\t\t\t\t\t";
        let geoname = GeoName::from_row(row(line)).unwrap();
        assert!(geoname.position.is_zero());
        assert_eq!(geoname.population, 0);
        assert_eq!(geoname.elevation, 0);
        assert_eq!(geoname.modified, None);
        assert!(!geoname.has_country());
    }

    #[test]
    fn test_bad_columns_name_the_field() {
        let cases = [
            (0, "abc", "id"),
            (4, "north", "latitude"),
            (5, "east", "longitude"),
            (14, "many", "population"),
            (15, "1.5", "elevation"),
            (16, "-", "dem"),
            (18, "03/03/2023", "modification_date"),
        ];
        for (column, value, field) in cases {
            let mut fields = row(INNSBRUCK);
            fields[column] = value.to_string();
            match GeoName::from_row(fields) {
                Err(RowError::Field(err)) => assert_eq!(err.field(), field),
                other => panic!("column {column}: unexpected {other:?}"),
            }
        }
    }
}

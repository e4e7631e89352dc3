//! Country records from `countryInfo.txt`.

use geonames_types::value::{parse_float, parse_int, split_list};
use serde::Serialize;

use super::{FromRow, columns};
use crate::RowError;

/// Country metadata as published in `countryInfo.txt`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Country {
    /// ISO 3166 alpha-2 code.
    pub iso2: String,
    /// ISO 3166 alpha-3 code.
    pub iso3: String,
    /// ISO 3166 numeric code.
    pub iso_numeric: u64,
    /// FIPS 10-4 code.
    pub fips: String,
    /// Country name.
    pub name: String,
    /// Capital city.
    pub capital: String,
    /// Area in square kilometers.
    pub area: f64,
    /// Population.
    pub population: i64,
    /// Continent code.
    pub continent: String,
    /// Top level domain, including the leading dot.
    pub tld: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Currency name.
    pub currency_name: String,
    /// International dialing prefix.
    pub phone: String,
    /// Postal code format, `#` for digits and `@` for letters.
    pub postal_code_format: String,
    /// Postal code validation regex.
    pub postal_code_regex: String,
    /// Spoken languages, most common first.
    pub languages: Vec<String>,
    /// GeoName of the country itself.
    pub geoname_id: u64,
    /// ISO alpha-2 codes of neighbouring countries.
    pub neighbours: Vec<String>,
    /// Equivalent FIPS code.
    pub equivalent_fips_code: String,
}

/// `ISO, ISO3, ISO-Numeric, fips, Country, Capital, Area, Population,
/// Continent, tld, CurrencyCode, CurrencyName, Phone, Postal Code Format,
/// Postal Code Regex, Languages, geonameid, neighbours, EquivalentFipsCode`
impl FromRow for Country {
    const COLUMNS: usize = 19;

    fn from_row(row: Vec<String>) -> Result<Self, RowError> {
        let [
            iso2,
            iso3,
            iso_numeric,
            fips,
            name,
            capital,
            area,
            population,
            continent,
            tld,
            currency_code,
            currency_name,
            phone,
            postal_code_format,
            postal_code_regex,
            languages,
            geoname_id,
            neighbours,
            equivalent_fips_code,
        ] = columns(row)?;

        Ok(Self {
            iso2,
            iso3,
            iso_numeric: parse_int("iso_numeric", &iso_numeric)?,
            fips,
            name,
            capital,
            area: parse_float("area", &area)?,
            population: parse_int("population", &population)?,
            continent,
            tld,
            currency_code,
            currency_name,
            phone,
            postal_code_format,
            postal_code_regex,
            languages: split_list(&languages),
            geoname_id: parse_int("geoname_id", &geoname_id)?,
            neighbours: split_list(&neighbours),
            equivalent_fips_code,
        })
    }
}

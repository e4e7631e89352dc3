//! Dump file names.

use chrono::{Local, NaiveDate, TimeDelta};

use crate::lines::Layout;

/// Minimum population of the `cities*` extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CitySize {
    /// Cities with a population above 500, plus seats of admin divisions.
    Pop500,
    /// Cities with a population above 1000, plus seats of admin divisions.
    Pop1000,
    /// Cities with a population above 5000, plus PPLA.
    Pop5000,
    /// Cities with a population above 15000, plus capitals.
    Pop15000,
}

impl CitySize {
    /// Returns the population threshold.
    #[must_use]
    pub const fn min_population(&self) -> u32 {
        match self {
            Self::Pop500 => 500,
            Self::Pop1000 => 1000,
            Self::Pop5000 => 5000,
            Self::Pop15000 => 15000,
        }
    }

    /// Returns all sizes, smallest threshold first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Pop500, Self::Pop1000, Self::Pop5000, Self::Pop15000]
    }
}

impl std::fmt::Display for CitySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.min_population())
    }
}

impl std::str::FromStr for CitySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|size| size.min_population().to_string() == s.trim_start_matches("cities"))
            .ok_or_else(|| format!("unknown city size: {s} (expected 500, 1000, 5000 or 15000)"))
    }
}

/// A file published on the dump host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DumpFile {
    /// `allCountries.zip`
    AllCountries,
    /// `<CODE>.zip` for one ISO alpha-2 country code.
    Country(String),
    /// `no-country.zip`
    NoCountry,
    /// `cities<size>.zip`
    Cities(CitySize),
    /// `alternateNamesV2.zip`
    AlternateNames,
    /// `hierarchy.zip`
    Hierarchy,
    /// `userTags.zip`
    UserTags,
    /// `admin1CodesASCII.txt`
    AdminDivisionsFirst,
    /// `admin2Codes.txt`
    AdminDivisionsSecond,
    /// `adminCode5.zip`
    AdminCodesFifth,
    /// `countryInfo.txt`
    CountryInfo,
    /// `timeZones.txt`
    TimeZones,
    /// `featureCodes_<lang>.txt`
    FeatureCodes(String),
    /// `iso-languagecodes.txt`
    Languages,
    /// `modifications-<date>.txt`
    Modifications(NaiveDate),
    /// `deletes-<date>.txt`
    Deletes(NaiveDate),
    /// `alternateNamesModifications-<date>.txt`
    AlternateNamesModifications(NaiveDate),
    /// `alternateNamesDeletes-<date>.txt`
    AlternateNamesDeletes(NaiveDate),
}

impl DumpFile {
    /// Returns the file name on the dump host.
    #[must_use]
    pub fn file_name(&self) -> String {
        match self {
            Self::AllCountries => "allCountries.zip".to_string(),
            Self::Country(code) => format!("{}.zip", code.to_uppercase()),
            Self::NoCountry => "no-country.zip".to_string(),
            Self::Cities(size) => format!("cities{size}.zip"),
            Self::AlternateNames => "alternateNamesV2.zip".to_string(),
            Self::Hierarchy => "hierarchy.zip".to_string(),
            Self::UserTags => "userTags.zip".to_string(),
            Self::AdminDivisionsFirst => "admin1CodesASCII.txt".to_string(),
            Self::AdminDivisionsSecond => "admin2Codes.txt".to_string(),
            Self::AdminCodesFifth => "adminCode5.zip".to_string(),
            Self::CountryInfo => "countryInfo.txt".to_string(),
            Self::TimeZones => "timeZones.txt".to_string(),
            Self::FeatureCodes(lang) => format!("featureCodes_{lang}.txt"),
            Self::Languages => "iso-languagecodes.txt".to_string(),
            Self::Modifications(date) => format!("modifications-{}.txt", delta_date(*date)),
            Self::Deletes(date) => format!("deletes-{}.txt", delta_date(*date)),
            Self::AlternateNamesModifications(date) => {
                format!("alternateNamesModifications-{}.txt", delta_date(*date))
            }
            Self::AlternateNamesDeletes(date) => {
                format!("alternateNamesDeletes-{}.txt", delta_date(*date))
            }
        }
    }

    /// Returns how the file's first data line is treated.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        match self {
            Self::TimeZones | Self::Languages => Layout::SkipHeader,
            _ => Layout::Plain,
        }
    }
}

impl std::fmt::Display for DumpFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Returns the name of the text entry expected inside an archive.
///
/// Returns `None` if `file_name` is not a `.zip` archive.
///
/// ```
/// use geonames_dump::archive_entry_name;
///
/// assert_eq!(archive_entry_name("cities500.zip").as_deref(), Some("cities500.txt"));
/// assert_eq!(archive_entry_name("countryInfo.txt"), None);
/// ```
#[must_use]
pub fn archive_entry_name(file_name: &str) -> Option<String> {
    file_name
        .strip_suffix(".zip")
        .map(|stem| format!("{stem}.txt"))
}

/// Returns the date of the most recent delta files.
///
/// The dump host publishes the previous day's changes, so this is the local
/// date 24 hours before now.
#[must_use]
pub fn yesterday() -> NaiveDate {
    (Local::now() - TimeDelta::hours(24)).date_naive()
}

fn delta_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_file_names() {
        assert_eq!(DumpFile::AllCountries.file_name(), "allCountries.zip");
        assert_eq!(DumpFile::NoCountry.file_name(), "no-country.zip");
        assert_eq!(DumpFile::AlternateNames.file_name(), "alternateNamesV2.zip");
        assert_eq!(DumpFile::AdminDivisionsFirst.file_name(), "admin1CodesASCII.txt");
        assert_eq!(DumpFile::AdminCodesFifth.file_name(), "adminCode5.zip");
        assert_eq!(DumpFile::Languages.file_name(), "iso-languagecodes.txt");
    }

    #[test]
    fn test_parameterized_file_names() {
        assert_eq!(DumpFile::Country("at".into()).file_name(), "AT.zip");
        assert_eq!(DumpFile::Cities(CitySize::Pop15000).file_name(), "cities15000.zip");
        assert_eq!(
            DumpFile::FeatureCodes("en".into()).file_name(),
            "featureCodes_en.txt"
        );

        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            DumpFile::Modifications(date).file_name(),
            "modifications-2024-03-07.txt"
        );
        assert_eq!(
            DumpFile::AlternateNamesDeletes(date).file_name(),
            "alternateNamesDeletes-2024-03-07.txt"
        );
    }

    #[test]
    fn test_header_files() {
        assert_eq!(DumpFile::TimeZones.layout(), Layout::SkipHeader);
        assert_eq!(DumpFile::Languages.layout(), Layout::SkipHeader);
        assert_eq!(DumpFile::CountryInfo.layout(), Layout::Plain);
    }

    #[test]
    fn test_archive_entry_names() {
        for file in [
            DumpFile::AllCountries,
            DumpFile::Country("DE".into()),
            DumpFile::Cities(CitySize::Pop500),
            DumpFile::Hierarchy,
        ] {
            let name = file.file_name();
            let entry = archive_entry_name(&name).unwrap();
            assert_eq!(entry, name.replace(".zip", ".txt"));
        }
        assert_eq!(archive_entry_name(&DumpFile::TimeZones.file_name()), None);
    }

    #[test]
    fn test_city_size_from_str() {
        assert_eq!("1000".parse::<CitySize>().unwrap(), CitySize::Pop1000);
        assert_eq!("cities5000".parse::<CitySize>().unwrap(), CitySize::Pop5000);
        assert!("2000".parse::<CitySize>().is_err());
    }

    #[test]
    fn test_yesterday_is_one_day_back() {
        let today = Local::now().date_naive();
        let days = (today - yesterday()).num_days();
        assert!((0..=1).contains(&days));
    }
}

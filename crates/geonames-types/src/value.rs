//! Primitive field parsers.
//!
//! Every parser follows the same contract: the empty string is the zero value
//! of the target type and never an error, while a non-empty value must parse
//! strictly or the caller gets a [`FieldError`] naming the field.

use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{FieldError, ValueError};

/// Layout of calendar dates (`YYYY-MM-DD`).
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Layout of timestamps (`YYYY-MM-DD HH:MM:SS`).
pub const DATE_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses an integer field of any width.
///
/// # Errors
///
/// Returns an error if `value` is non-empty and not a valid integer of type `T`.
///
/// # Example
///
/// ```
/// use geonames_types::value::parse_int;
///
/// assert_eq!(parse_int::<u64>("id", "2950159").unwrap(), 2_950_159);
/// assert_eq!(parse_int::<i64>("population", "").unwrap(), 0);
/// assert!(parse_int::<u64>("id", "-1").is_err());
/// ```
pub fn parse_int<T>(field: &'static str, value: &str) -> Result<T, FieldError>
where
    T: FromStr<Err = ParseIntError> + Default,
{
    if value.is_empty() {
        return Ok(T::default());
    }
    value.parse().map_err(|source| {
        FieldError::new(
            field,
            ValueError::Integer {
                value: value.to_string(),
                source,
            },
        )
    })
}

/// Parses a floating point field.
///
/// # Errors
///
/// Returns an error if `value` is non-empty and not a valid float.
pub fn parse_float(field: &'static str, value: &str) -> Result<f64, FieldError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    value.parse().map_err(|source| {
        FieldError::new(
            field,
            ValueError::Float {
                value: value.to_string(),
                source,
            },
        )
    })
}

/// Parses a `YYYY-MM-DD` date field. The empty string yields `None`.
///
/// # Errors
///
/// Returns an error if `value` is non-empty and does not match [`DATE_LAYOUT`].
pub fn parse_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, FieldError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_LAYOUT)
        .map(Some)
        .map_err(|source| time_error(field, value, DATE_LAYOUT, source))
}

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp field. The empty string yields `None`.
///
/// # Errors
///
/// Returns an error if `value` is non-empty and does not match [`DATE_TIME_LAYOUT`].
pub fn parse_date_time(
    field: &'static str,
    value: &str,
) -> Result<Option<NaiveDateTime>, FieldError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(value, DATE_TIME_LAYOUT)
        .map(Some)
        .map_err(|source| time_error(field, value, DATE_TIME_LAYOUT, source))
}

fn time_error(
    field: &'static str,
    value: &str,
    layout: &'static str,
    source: chrono::ParseError,
) -> FieldError {
    FieldError::new(
        field,
        ValueError::Time {
            value: value.to_string(),
            layout,
            source,
        },
    )
}

/// Interprets a dump flag column: only the literal `"1"` is true.
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    value == "1"
}

/// Splits a comma-separated list, trimming each element and dropping empties.
///
/// ```
/// use geonames_types::value::split_list;
///
/// assert_eq!(split_list(" en, fr,,de "), vec!["en", "fr", "de"]);
/// assert!(split_list("").is_empty());
/// ```
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

//! Loose wire shapes and the two-pass response decoder.
//!
//! Every result type is first deserialized into a `Raw*` struct that mirrors
//! the JSON exactly, then converted into its strict form by [`FromWire`].

use std::borrow::Cow;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::NaiveDateTime;
use geonames_types::value::{parse_date_time, parse_float, parse_int};
use geonames_types::{BoundingBox, FieldError, Position};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoint::Envelope;
use crate::model::{AdminSubdivision, AdminSubdivisions};
use crate::{DecodeError, ErrorCode, ServiceError, WebError};

/// A result type with a loose wire form.
pub(crate) trait FromWire: Sized {
    /// Shape of the JSON as the service sends it.
    type Wire: DeserializeOwned + Default;

    /// Converts the loose form into the strict one.
    fn from_wire(wire: Self::Wire) -> Result<Self, FieldError>;
}

impl<T: FromWire> FromWire for Vec<T> {
    type Wire = Vec<T::Wire>;

    fn from_wire(wire: Self::Wire) -> Result<Self, FieldError> {
        wire.into_iter().map(T::from_wire).collect()
    }
}

/// A scalar the service sends either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Loose {
    Number(serde_json::Number),
    Text(String),
}

impl Loose {
    fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(number) => Cow::Owned(number.to_string()),
            Self::Text(text) => Cow::Borrowed(text),
        }
    }
}

pub(crate) fn int<T>(field: &'static str, value: Option<&Loose>) -> Result<T, FieldError>
where
    T: FromStr<Err = ParseIntError> + Default,
{
    value.map_or_else(|| Ok(T::default()), |value| parse_int(field, &value.text()))
}

pub(crate) fn float(field: &'static str, value: Option<&Loose>) -> Result<f64, FieldError> {
    value.map_or(Ok(0.0), |value| parse_float(field, &value.text()))
}

pub(crate) fn position(lat: Option<&Loose>, lng: Option<&Loose>) -> Result<Position, FieldError> {
    fn text(value: Option<&Loose>) -> Cow<'_, str> {
        value.map(Loose::text).unwrap_or_default()
    }
    Position::parse(&text(lat), &text(lng))
}

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp; empty is `None`.
pub(crate) fn date_time(
    field: &'static str,
    value: &str,
) -> Result<Option<NaiveDateTime>, FieldError> {
    parse_date_time(field, value.trim())
}

/// Admin codes, names and ids flattened as sibling keys of a result object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawAdmin {
    admin_code1: String,
    admin_code2: String,
    admin_code3: String,
    admin_code4: String,
    admin_code5: String,
    admin_name1: String,
    admin_name2: String,
    admin_name3: String,
    admin_name4: String,
    admin_name5: String,
    admin_id1: Option<Loose>,
    admin_id2: Option<Loose>,
    admin_id3: Option<Loose>,
    admin_id4: Option<Loose>,
    admin_id5: Option<Loose>,
}

impl RawAdmin {
    pub(crate) fn into_subdivisions(self) -> Result<AdminSubdivisions, FieldError> {
        Ok(AdminSubdivisions {
            first: AdminSubdivision {
                code: self.admin_code1,
                name: self.admin_name1,
                id: int("adminId1", self.admin_id1.as_ref())?,
            },
            second: AdminSubdivision {
                code: self.admin_code2,
                name: self.admin_name2,
                id: int("adminId2", self.admin_id2.as_ref())?,
            },
            third: AdminSubdivision {
                code: self.admin_code3,
                name: self.admin_name3,
                id: int("adminId3", self.admin_id3.as_ref())?,
            },
            fourth: AdminSubdivision {
                code: self.admin_code4,
                name: self.admin_name4,
                id: int("adminId4", self.admin_id4.as_ref())?,
            },
            fifth: AdminSubdivision {
                code: self.admin_code5,
                name: self.admin_name5,
                id: int("adminId5", self.admin_id5.as_ref())?,
            },
        })
    }
}

/// Bounding box as a nested object or as sibling keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawBoundingBox {
    east: Option<Loose>,
    west: Option<Loose>,
    north: Option<Loose>,
    south: Option<Loose>,
}

impl RawBoundingBox {
    pub(crate) fn into_bounding_box(self) -> Result<BoundingBox, FieldError> {
        Ok(BoundingBox {
            east: float("east", self.east.as_ref())?,
            west: float("west", self.west.as_ref())?,
            north: float("north", self.north.as_ref())?,
            south: float("south", self.south.as_ref())?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    #[serde(default)]
    message: String,
    value: Loose,
}

impl RawStatus {
    fn into_service_error(self) -> Result<ServiceError, FieldError> {
        let code: u32 = int("status.value", Some(&self.value))?;
        Ok(ServiceError::new(ErrorCode(code), self.message))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    status: RawStatus,
}

/// Decodes a response body for an endpoint answering under `envelope`.
///
/// A 200 body carrying a top-level `status` object is a service error, as is
/// every non-200 response.
pub(crate) fn decode_response<T: FromWire>(
    envelope: Envelope,
    status: u16,
    body: &[u8],
) -> Result<T, WebError> {
    if status != 200 {
        let error: ErrorBody = serde_json::from_slice(body)?;
        return Err(error.status.into_service_error()?.into());
    }

    let mut root: Value = serde_json::from_slice(body)?;
    if let Some(status) = root.get_mut("status").filter(|status| status.is_object()) {
        let status: RawStatus = serde_json::from_value(status.take())?;
        return Err(status.into_service_error()?.into());
    }

    let wire = match envelope.select(root) {
        Some(Value::Null) | None => T::Wire::default(),
        Some(value) => serde_json::from_value(value).map_err(DecodeError::Json)?,
    };
    Ok(T::from_wire(wire)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loose(json: &str) -> Loose {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_loose_numbers_and_strings() {
        assert_eq!(int::<u64>("population", Some(&loose("1234"))).unwrap(), 1234);
        assert_eq!(int::<u64>("population", Some(&loose(r#""1234""#))).unwrap(), 1234);
        assert_eq!(int::<u64>("population", Some(&loose(r#""""#))).unwrap(), 0);
        assert_eq!(int::<u64>("population", None).unwrap(), 0);
        approx::assert_relative_eq!(
            float("distance", Some(&loose(r#""0.111""#))).unwrap(),
            0.111
        );
        approx::assert_relative_eq!(float("distance", Some(&loose("2.5"))).unwrap(), 2.5);
    }

    #[test]
    fn test_loose_rejects_garbage() {
        let err = int::<u64>("countryId", Some(&loose(r#""abc""#))).unwrap_err();
        assert_eq!(err.field(), "countryId");
        assert!(err.to_string().starts_with(r#"parse countryId => invalid integer "abc""#));
    }

    #[test]
    fn test_loose_text_is_not_trimmed() {
        let err = int::<u64>("population", Some(&loose(r#"" 12 ""#))).unwrap_err();
        assert_eq!(err.field(), "population");
        assert!(float("distance", Some(&loose(r#""0.5 ""#))).is_err());
        assert!(position(Some(&loose(r#"" 47.26""#)), Some(&loose("11.39"))).is_err());
    }

    #[test]
    fn test_position_accepts_mixed_forms() {
        let parsed = position(Some(&loose(r#""47.26""#)), Some(&loose("11.39"))).unwrap();
        approx::assert_relative_eq!(parsed.latitude, 47.26);
        approx::assert_relative_eq!(parsed.longitude, 11.39);

        assert!(position(None, None).unwrap().is_zero());

        let err = position(Some(&loose("1")), Some(&loose(r#""east""#))).unwrap_err();
        assert_eq!(err.field(), "longitude");
    }

    #[test]
    fn test_admin_collapses_into_five_levels() {
        let raw: RawAdmin = serde_json::from_str(
            r#"{"adminCode1":"07","adminName1":"Tyrol","adminId1":"2763586","adminCode3":"70101"}"#,
        )
        .unwrap();
        let admin = raw.into_subdivisions().unwrap();
        assert_eq!(admin.first.code, "07");
        assert_eq!(admin.first.name, "Tyrol");
        assert_eq!(admin.first.id, 2_763_586);
        assert_eq!(admin.third.code, "70101");
        assert_eq!(admin.second, AdminSubdivision::default());
    }

    #[test]
    fn test_timestamps() {
        let parsed = date_time("datetime", "2011-03-11 04:46:23").unwrap().unwrap();
        assert_eq!(parsed.to_string(), "2011-03-11 04:46:23");
        assert_eq!(date_time("datetime", "").unwrap(), None);
        assert!(date_time("datetime", "2011-03-11T04:46:23Z").is_err());
    }

    #[test]
    fn test_error_body_on_non_200() {
        let body = br#"{"status":{"message":"user does not exist.","value":10}}"#;
        let err = decode_response::<Vec<crate::GeoName>>(Envelope::Key("geonames"), 404, body)
            .unwrap_err();
        let service = err.service_error().unwrap();
        assert_eq!(service.code(), ErrorCode::AUTHORIZATION_EXCEPTION);
        assert_eq!(service.message(), "user does not exist.");
    }

    #[test]
    fn test_status_on_200_is_an_error() {
        let body = br#"{"status":{"message":"no result found","value":"15"}}"#;
        let err = decode_response::<Vec<crate::GeoName>>(Envelope::Key("geonames"), 200, body)
            .unwrap_err();
        assert!(err.service_error().unwrap().has_code(ErrorCode::NO_RESULT_FOUND));
    }

    #[test]
    fn test_missing_envelope_is_empty() {
        let decoded =
            decode_response::<Vec<crate::GeoName>>(Envelope::Key("geonames"), 200, b"{}")
                .unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_unparseable_error_body() {
        let err = decode_response::<Vec<crate::GeoName>>(Envelope::Root, 500, b"<html>")
            .unwrap_err();
        assert!(matches!(err, WebError::Decode(DecodeError::Json(_))));
        assert!(err.to_string().starts_with("decode response => "));
    }
}

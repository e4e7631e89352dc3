//! Timezone at a point.

use chrono::NaiveDateTime;
use geonames_types::{FieldError, Position};
use serde::{Deserialize, Serialize};

use crate::wire::{FromWire, Loose, date_time, float, position};

/// Timezone, local time and daylight at a point.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Timezone {
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
    /// Country name.
    pub country_name: String,
    /// The queried point.
    pub position: Position,
    /// IANA timezone identifier.
    pub timezone_id: String,
    /// Offset to GMT on 1 January, in hours.
    pub gmt_offset: f64,
    /// Offset to GMT on 1 July, in hours.
    pub dst_offset: f64,
    /// Offset to GMT without daylight saving, in hours.
    pub raw_offset: f64,
    /// Local time at the point.
    pub time: Option<NaiveDateTime>,
    /// Local sunrise.
    pub sunrise: Option<NaiveDateTime>,
    /// Local sunset.
    pub sunset: Option<NaiveDateTime>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawTimezone {
    country_code: String,
    country_name: String,
    lat: Option<Loose>,
    lng: Option<Loose>,
    timezone_id: String,
    gmt_offset: Option<Loose>,
    dst_offset: Option<Loose>,
    raw_offset: Option<Loose>,
    time: String,
    sunrise: String,
    sunset: String,
}

impl FromWire for Timezone {
    type Wire = RawTimezone;

    fn from_wire(wire: RawTimezone) -> Result<Self, FieldError> {
        Ok(Self {
            country_code: wire.country_code,
            country_name: wire.country_name,
            position: position(wire.lat.as_ref(), wire.lng.as_ref())?,
            timezone_id: wire.timezone_id,
            gmt_offset: float("gmtOffset", wire.gmt_offset.as_ref())?,
            dst_offset: float("dstOffset", wire.dst_offset.as_ref())?,
            raw_offset: float("rawOffset", wire.raw_offset.as_ref())?,
            time: date_time("time", &wire.time)?,
            sunrise: date_time("sunrise", &wire.sunrise)?,
            sunset: date_time("sunset", &wire.sunset)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_timezone() {
        let wire = serde_json::from_str(
            r#"{"sunrise":"2024-06-21 05:20:00","lng":11.39,"countryCode":"AT",
                "gmtOffset":1,"rawOffset":1,"sunset":"2024-06-21 21:15:00",
                "timezoneId":"Europe/Vienna","dstOffset":2,"countryName":"Austria",
                "time":"2024-06-21 12:00:00","lat":47.26}"#,
        )
        .unwrap();
        let timezone = Timezone::from_wire(wire).unwrap();
        assert_eq!(timezone.timezone_id, "Europe/Vienna");
        assert_relative_eq!(timezone.dst_offset, 2.0);
        assert_eq!(
            timezone.sunrise.unwrap().format("%H:%M").to_string(),
            "05:20"
        );
        assert_eq!(timezone.time.unwrap().to_string(), "2024-06-21 12:00:00");
    }

    #[test]
    fn test_bad_timestamp_names_layout() {
        let wire = serde_json::from_str(r#"{"sunset":"21:15"}"#).unwrap();
        let err = Timezone::from_wire(wire).unwrap_err();
        assert_eq!(err.field(), "sunset");
        assert!(err.to_string().contains(r#"does not match layout "%Y-%m-%d %H:%M:%S""#));
    }
}

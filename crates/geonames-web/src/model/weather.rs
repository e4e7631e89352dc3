//! Weather station observations.

use chrono::NaiveDateTime;
use geonames_types::{FieldError, Position};
use serde::{Deserialize, Serialize};

use crate::wire::{FromWire, Loose, date_time, float, int, position};

/// A METAR observation reported by a weather station.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WeatherObservation {
    /// Raw METAR text.
    pub observation: String,
    /// ICAO code of the station.
    pub icao: String,
    /// Station name.
    pub station_name: String,
    /// ISO 3166 alpha-2 country code.
    pub country_code: String,
    /// Station position.
    pub position: Position,
    /// Station elevation in meters.
    pub elevation: i64,
    /// Observation time, UTC.
    pub datetime: Option<NaiveDateTime>,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Dew point in degrees Celsius.
    pub dew_point: f64,
    /// Relative humidity in percent.
    pub humidity: i64,
    /// Cloud cover description.
    pub clouds: String,
    /// Cloud cover code.
    pub clouds_code: String,
    /// Weather condition, `n/a` when none.
    pub weather_condition: String,
    /// Wind direction in degrees.
    pub wind_direction: i64,
    /// Wind speed in knots.
    pub wind_speed: f64,
    /// Altimeter setting in hPa.
    pub hecto_pasc_altimeter: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawWeatherObservation {
    observation: String,
    #[serde(rename = "ICAO")]
    icao: String,
    station_name: String,
    country_code: String,
    lat: Option<Loose>,
    lng: Option<Loose>,
    elevation: Option<Loose>,
    datetime: String,
    temperature: Option<Loose>,
    dew_point: Option<Loose>,
    humidity: Option<Loose>,
    clouds: String,
    clouds_code: String,
    weather_condition: String,
    wind_direction: Option<Loose>,
    wind_speed: Option<Loose>,
    hecto_pasc_altimeter: Option<Loose>,
}

impl FromWire for WeatherObservation {
    type Wire = RawWeatherObservation;

    fn from_wire(wire: RawWeatherObservation) -> Result<Self, FieldError> {
        Ok(Self {
            observation: wire.observation,
            icao: wire.icao,
            station_name: wire.station_name,
            country_code: wire.country_code,
            position: position(wire.lat.as_ref(), wire.lng.as_ref())?,
            elevation: int("elevation", wire.elevation.as_ref())?,
            datetime: date_time("datetime", &wire.datetime)?,
            temperature: float("temperature", wire.temperature.as_ref())?,
            dew_point: float("dewPoint", wire.dew_point.as_ref())?,
            humidity: int("humidity", wire.humidity.as_ref())?,
            clouds: wire.clouds,
            clouds_code: wire.clouds_code,
            weather_condition: wire.weather_condition,
            wind_direction: int("windDirection", wire.wind_direction.as_ref())?,
            wind_speed: float("windSpeed", wire.wind_speed.as_ref())?,
            hecto_pasc_altimeter: float(
                "hectoPascAltimeter",
                wire.hecto_pasc_altimeter.as_ref(),
            )?,
        })
    }
}

/// The observation of the station closest to a point.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WeatherObservationNearby {
    /// The observation.
    #[serde(flatten)]
    pub observation: WeatherObservation,
    /// Distance to the station in kilometers, 0 when not reported.
    pub distance: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawWeatherObservationNearby {
    #[serde(flatten)]
    observation: RawWeatherObservation,
    distance: Option<Loose>,
}

impl FromWire for WeatherObservationNearby {
    type Wire = RawWeatherObservationNearby;

    fn from_wire(wire: RawWeatherObservationNearby) -> Result<Self, FieldError> {
        Ok(Self {
            observation: WeatherObservation::from_wire(wire.observation)?,
            distance: float("distance", wire.distance.as_ref())?,
        })
    }
}

//! Builds [`CanonicalWeatherRecord`]s from raw forecast payloads.
//!
//! Every unit conversion for the record happens here, once:
//! wind m/s to km/h, temperature C to F, visibility m to km.

use chrono::Utc;
use serde_json::Value;

use crate::{
    error::WeatherError,
    model::{CanonicalWeatherRecord, Coordinates, CurrentConditions, Location, LocationInfo},
    payload::{number, section, text},
    units::{celsius_to_fahrenheit, metres_to_km, mps_to_kph},
    weather_code,
};

/// Name given to records assembled from bare coordinates.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Assemble a record for a geocoded place; the record carries its name.
pub fn assemble_for_location(
    location: &Location,
    payload: &Value,
) -> Result<CanonicalWeatherRecord, WeatherError> {
    assemble(&location.name, location.coordinates(), payload)
}

/// Assemble a record from coordinates only. The name is
/// [`UNKNOWN_LOCATION`]; callers that know better use
/// [`CanonicalWeatherRecord::with_location_name`].
pub fn assemble_for_coordinates(
    coordinates: Coordinates,
    payload: &Value,
) -> Result<CanonicalWeatherRecord, WeatherError> {
    assemble(UNKNOWN_LOCATION, coordinates, payload)
}

fn assemble(
    name: &str,
    coordinates: Coordinates,
    payload: &Value,
) -> Result<CanonicalWeatherRecord, WeatherError> {
    let current = section(payload, "current")?;

    let observed_at = text(current, "time")
        .map(str::to_string)
        .unwrap_or_else(|| Utc::now().to_rfc3339());

    let temp_c = number(current, "temperature_2m").unwrap_or(0.0);
    let feelslike_c = number(current, "apparent_temperature")
        .or_else(|| number(current, "temperature_2m"))
        .unwrap_or(0.0);
    let code = number(current, "weather_code").map_or(-1, |c| c as i64);
    let wind_dir = number(current, "wind_direction_10m")
        .map(|deg| format!("{deg}°"))
        .unwrap_or_default();

    Ok(CanonicalWeatherRecord {
        location: LocationInfo {
            name: name.to_string(),
            region: String::new(),
            country: String::new(),
            localtime: observed_at.clone(),
            lat: coordinates.lat,
            lon: coordinates.lon,
        },
        current: CurrentConditions {
            temp_c,
            temp_f: celsius_to_fahrenheit(temp_c),
            condition: weather_code::normalize(code),
            humidity: number(current, "relative_humidity_2m").unwrap_or(0.0),
            wind_kph: mps_to_kph(number(current, "wind_speed_10m").unwrap_or(0.0)),
            wind_dir,
            pressure_mb: number(current, "surface_pressure").unwrap_or(0.0),
            feelslike_c,
            uv: number(current, "uv_index").unwrap_or(0.0),
            vis_km: number(current, "visibility").map_or(0.0, metres_to_km),
            last_updated: observed_at,
        },
    })
}

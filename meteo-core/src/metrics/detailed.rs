use serde_json::Value;

use crate::{
    error::WeatherError,
    model::WeatherParameter,
    payload::{number, optional_section, section, series_number},
    units::{metres_to_km, mps_to_kph},
};

use super::{
    status::{ParameterKind, parameter_status},
    trend::TrendSource,
    wind::degrees_to_compass,
};

const DEFAULT_VISIBILITY_M: f64 = 10_000.0;
const DEFAULT_PRESSURE_HPA: f64 = 1013.0;

struct Row {
    kind: ParameterKind,
    name: &'static str,
    reading: f64,
    value: String,
    unit: String,
    description: &'static str,
    icon: &'static str,
}

/// Rows of the detailed-analysis table, built from a payload fetched with
/// [`crate::forecast::ForecastQuery::detailed_conditions`].
pub fn detailed_parameters(
    payload: &Value,
    trends: &dyn TrendSource,
) -> Result<Vec<WeatherParameter>, WeatherError> {
    let current = section(payload, "current")?;
    let hourly = optional_section(payload, "hourly");
    let first_hour = |key: &str| hourly.and_then(|h| series_number(h, key, 0));

    let temperature = number(current, "temperature_2m").unwrap_or(0.0);
    let apparent = number(current, "apparent_temperature").unwrap_or(0.0);
    let humidity = number(current, "relative_humidity_2m").unwrap_or(0.0);
    let wind_kph = mps_to_kph(number(current, "wind_speed_10m").unwrap_or(0.0));
    let wind_deg = number(current, "wind_direction_10m").unwrap_or(0.0);
    let visibility_km = metres_to_km(first_hour("visibility").unwrap_or(DEFAULT_VISIBILITY_M));
    let pressure = number(current, "surface_pressure").unwrap_or(DEFAULT_PRESSURE_HPA);
    let uv = number(current, "uv_index").unwrap_or(0.0);
    let dew_point = first_hour("dew_point_2m").unwrap_or(0.0);

    let rows = [
        Row {
            kind: ParameterKind::Temperature,
            name: "Temperature",
            reading: temperature,
            value: whole(temperature),
            unit: "°C".into(),
            description: "Current ambient temperature",
            icon: "🌡️",
        },
        Row {
            kind: ParameterKind::ApparentTemperature,
            name: "Feels like",
            reading: apparent,
            value: whole(apparent),
            unit: "°C".into(),
            description: "Temperature as perceived by the body",
            icon: "🌡️",
        },
        Row {
            kind: ParameterKind::Humidity,
            name: "Humidity",
            reading: humidity,
            value: whole(humidity),
            unit: "%".into(),
            description: "Relative humidity of the air",
            icon: "💧",
        },
        Row {
            kind: ParameterKind::WindSpeed,
            name: "Wind",
            reading: wind_kph,
            value: format!("{} km/h", whole(wind_kph)),
            unit: degrees_to_compass(wind_deg).into(),
            description: "Wind speed and direction",
            icon: "💨",
        },
        Row {
            kind: ParameterKind::Visibility,
            name: "Visibility",
            reading: visibility_km,
            value: whole(visibility_km),
            unit: "km".into(),
            description: "Atmospheric visibility distance",
            icon: "👁️",
        },
        Row {
            kind: ParameterKind::Pressure,
            name: "Pressure",
            reading: pressure,
            value: whole(pressure),
            unit: "hPa".into(),
            description: "Atmospheric pressure",
            icon: "📊",
        },
        Row {
            kind: ParameterKind::Uv,
            name: "UV index",
            reading: uv,
            value: whole(uv),
            unit: String::new(),
            description: "Ultraviolet radiation intensity",
            icon: "☀️",
        },
        Row {
            kind: ParameterKind::DewPoint,
            name: "Dew point",
            reading: dew_point,
            value: whole(dew_point),
            unit: "°C".into(),
            description: "Temperature at which vapour condenses",
            icon: "💧",
        },
    ];

    Ok(rows
        .into_iter()
        .map(|row| WeatherParameter {
            name: row.name.to_string(),
            value: row.value,
            unit: row.unit,
            status: parameter_status(row.kind, row.reading),
            trend: trends.trend(),
            recent_change: trends.recent_change(),
            description: row.description.to_string(),
            icon: row.icon.to_string(),
        })
        .collect())
}

fn whole(value: f64) -> String {
    format!("{}", value.round() as i64)
}

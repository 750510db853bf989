use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Latitude/longitude pair every panel is keyed by.
///
/// Only constructible through [`Coordinates::new`] (or
/// [`Location::coordinates`]) outside this crate, so the ranges always hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub(crate) lat: f64,
    pub(crate) lon: f64,
}

impl Coordinates {
    /// Latitude must be in [-90, 90] and longitude in [-180, 180].
    pub fn new(lat: f64, lon: f64) -> Result<Self, WeatherError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(WeatherError::data_shape(format!(
                "latitude {lat} is outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(WeatherError::data_shape(format!(
                "longitude {lon} is outside [-180, 180]"
            )));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// A resolved place, produced once per successful search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, WeatherError> {
        Coordinates::new(latitude, longitude)?;
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
        })
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.latitude,
            lon: self.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub name: String,
    pub region: String,
    pub country: String,
    pub localtime: String,
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions in fixed units: Celsius, km/h, hPa, km.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub humidity: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub feelslike_c: f64,
    pub uv: f64,
    pub vis_km: f64,
    pub last_updated: String,
}

/// Normalized record handed to the current-conditions consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalWeatherRecord {
    pub location: LocationInfo,
    pub current: CurrentConditions,
}

impl CanonicalWeatherRecord {
    /// Replace the location name, e.g. after assembling by coordinates.
    #[must_use]
    pub fn with_location_name(mut self, name: impl Into<String>) -> Self {
        self.location.name = name.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterStatus {
    Normal,
    Attention,
    Alert,
}

impl ParameterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterStatus::Normal => "Normal",
            ParameterStatus::Attention => "Attention",
            ParameterStatus::Alert => "Alert",
        }
    }
}

impl std::fmt::Display for ParameterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Falling,
    Steady,
}

impl Trend {
    pub const fn all() -> &'static [Trend] {
        &[Trend::Rising, Trend::Falling, Trend::Steady]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "Rising",
            Trend::Falling => "Falling",
            Trend::Steady => "Steady",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One row of the detailed-analysis table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherParameter {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub status: ParameterStatus,
    /// Simulated, see [`crate::metrics::TrendSource`].
    pub trend: Trend,
    /// Simulated, see [`crate::metrics::TrendSource`].
    pub recent_change: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day_name: String,
    pub icon: String,
    pub temp_max: i64,
    pub temp_min: i64,
    pub rain_chance: i64,
    pub humidity: i64,
    pub weather_code: i64,
}

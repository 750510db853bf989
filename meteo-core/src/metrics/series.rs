//! Chart series for the trend and wind/pressure panels.
//!
//! The upstream request carries only the current reading, so these series
//! are synthesized around it with a sine/cosine shape plus noise from the
//! caller's [`TrendSource`].

use std::f64::consts::PI;

use serde::Serialize;

use crate::model::CanonicalWeatherRecord;

use super::trend::TrendSource;

const ROSE_DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
const ROSE_FULL_MARK: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub time: String,
    pub temperature: i64,
    pub humidity: i64,
    pub feels_like: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressurePoint {
    pub time: String,
    pub pressure: f64,
    pub tendency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindRosePoint {
    pub direction: &'static str,
    pub speed: f64,
    pub full_mark: f64,
}

/// 24 hourly points around the current temperature and humidity.
pub fn trend_series(record: &CanonicalWeatherRecord, noise: &dyn TrendSource) -> Vec<TrendPoint> {
    let base_temp = record.current.temp_c;
    let base_humidity = record.current.humidity;

    (0..24)
        .map(|i| {
            let h = f64::from(i);
            TrendPoint {
                time: format!("{i:02}:00"),
                temperature: (base_temp + (h * PI / 12.0).sin() * 5.0 + noise.jitter(2.0)).round()
                    as i64,
                humidity: (base_humidity + (h * PI / 8.0).cos() * 10.0 + noise.jitter(5.0)).round()
                    as i64,
                feels_like: (base_temp + (h * PI / 12.0).sin() * 4.0 + noise.jitter(1.5)).round()
                    as i64,
            }
        })
        .collect()
}

/// 12 two-hourly pressure points; `tendency` is the noise-free curve.
pub fn pressure_series(
    record: &CanonicalWeatherRecord,
    noise: &dyn TrendSource,
) -> Vec<PressurePoint> {
    let base = record.current.pressure_mb;

    (0..12)
        .map(|i| {
            let wave = (f64::from(i) * PI / 6.0).sin();
            PressurePoint {
                time: format!("{:02}:00", i * 2),
                pressure: base + wave * 8.0 + noise.jitter(4.0),
                tendency: base + wave * 5.0,
            }
        })
        .collect()
}

/// Eight-direction wind rose around the current speed, clamped at zero.
pub fn wind_rose(record: &CanonicalWeatherRecord, noise: &dyn TrendSource) -> Vec<WindRosePoint> {
    let base = record.current.wind_kph;

    ROSE_DIRECTIONS
        .iter()
        .map(|&direction| WindRosePoint {
            direction,
            speed: (base + noise.jitter(10.0)).max(0.0),
            full_mark: ROSE_FULL_MARK,
        })
        .collect()
}

use serde::Serialize;

use crate::model::CanonicalWeatherRecord;

pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const SECTOR_DEGREES: f64 = 22.5;

/// 16-point compass label for a bearing in degrees.
pub fn degrees_to_compass(degrees: f64) -> &'static str {
    let index = (degrees / SECTOR_DEGREES).round() as i64;
    COMPASS_POINTS[index.rem_euclid(16) as usize]
}

/// Dial angle for a compass label; unknown labels point north.
pub fn compass_to_degrees(label: &str) -> f64 {
    COMPASS_POINTS
        .iter()
        .position(|p| *p == label)
        .map_or(0.0, |i| i as f64 * SECTOR_DEGREES)
}

/// Compass label for a record's `wind_dir` (`"225°"`), if it holds a bearing.
pub fn wind_dir_label(wind_dir: &str) -> Option<&'static str> {
    wind_dir
        .trim()
        .trim_end_matches('°')
        .parse::<f64>()
        .ok()
        .map(degrees_to_compass)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressureQuality {
    High,
    Normal,
    Low,
}

impl PressureQuality {
    pub fn text(&self) -> &'static str {
        match self {
            PressureQuality::High => "High pressure - stable weather",
            PressureQuality::Normal => "Normal pressure",
            PressureQuality::Low => "Low pressure - possible bad weather",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PressureQuality::High => "#4caf50",
            PressureQuality::Normal => "#2196f3",
            PressureQuality::Low => "#ff9800",
        }
    }
}

pub fn pressure_quality(pressure_hpa: f64) -> PressureQuality {
    if pressure_hpa > 1020.0 {
        PressureQuality::High
    } else if pressure_hpa > 1000.0 {
        PressureQuality::Normal
    } else {
        PressureQuality::Low
    }
}

/// Numbers behind the wind dial and pressure gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindPressureSummary {
    pub speed_kph: f64,
    pub direction: String,
    pub dial_angle: f64,
    pub pressure_mb: f64,
    pub pressure_quality: PressureQuality,
}

impl WindPressureSummary {
    pub fn from_record(record: &CanonicalWeatherRecord) -> Self {
        let current = &record.current;
        let direction = wind_dir_label(&current.wind_dir)
            .map(str::to_string)
            .unwrap_or_else(|| current.wind_dir.clone());

        Self {
            speed_kph: current.wind_kph,
            dial_angle: compass_to_degrees(&direction),
            direction,
            pressure_mb: current.pressure_mb,
            pressure_quality: pressure_quality(current.pressure_mb),
        }
    }
}

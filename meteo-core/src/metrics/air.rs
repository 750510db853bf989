use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;

use crate::model::CanonicalWeatherRecord;

/// Synthetic air-quality index derived from humidity alone.
pub fn air_quality_index(humidity: f64) -> i64 {
    (50.0 + (100.0 - humidity) * 0.6).round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
}

impl AqiCategory {
    pub fn from_index(aqi: i64) -> Self {
        match aqi {
            i64::MIN..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=150 => AqiCategory::UnhealthyForSensitive,
            _ => AqiCategory::Unhealthy,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitive => "Unhealthy for sensitive groups",
            AqiCategory::Unhealthy => "Unhealthy",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#10B981",
            AqiCategory::Moderate => "#F59E0B",
            AqiCategory::UnhealthyForSensitive => "#EF4444",
            AqiCategory::Unhealthy => "#7C2D12",
        }
    }
}

/// Donut buckets. The three values do not sum to 100; renderers divide by
/// the sum (see [`HumidityDistribution::shares`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HumidityDistribution {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl HumidityDistribution {
    /// Buckets as fractions of their sum; all zero when the sum is zero.
    pub fn shares(&self) -> (f64, f64, f64) {
        let total = self.low + self.medium + self.high;
        if total <= 0.0 {
            return (0.0, 0.0, 0.0);
        }
        (self.low / total, self.medium / total, self.high / total)
    }
}

pub fn humidity_distribution(humidity: f64) -> HumidityDistribution {
    HumidityDistribution {
        low: (100.0 - humidity - 20.0).max(0.0),
        medium: humidity.min(100.0),
        high: (humidity - 50.0).max(0.0),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalMetrics {
    pub atmospheric_pressure: f64,
    pub air_quality_index: i64,
    pub aqi_category: AqiCategory,
    pub humidity_distribution: HumidityDistribution,
    pub last_update: String,
}

impl TechnicalMetrics {
    pub fn from_record(record: &CanonicalWeatherRecord) -> Self {
        let humidity = record.current.humidity;
        let aqi = air_quality_index(humidity);
        Self {
            atmospheric_pressure: record.current.pressure_mb,
            air_quality_index: aqi,
            aqi_category: AqiCategory::from_index(aqi),
            humidity_distribution: humidity_distribution(humidity),
            last_update: format_timestamp(&record.current.last_updated),
        }
    }
}

/// `dd/mm/yyyy, HH:MM` for provider-local or RFC 3339 stamps; anything else
/// is returned untouched.
fn format_timestamp(raw: &str) -> String {
    const OUT: &str = "%d/%m/%Y, %H:%M";
    if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return local.format(OUT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(OUT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble_for_coordinates;
    use crate::model::Coordinates;
    use serde_json::json;

    #[test]
    fn aqi_formula() {
        assert_eq!(air_quality_index(100.0), 50);
        assert_eq!(air_quality_index(40.0), 86);
        assert_eq!(air_quality_index(0.0), 110);
        assert_eq!(air_quality_index(75.0), 65);
    }

    #[test]
    fn aqi_buckets() {
        assert_eq!(AqiCategory::from_index(50), AqiCategory::Good);
        assert_eq!(AqiCategory::from_index(51), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_index(100), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_index(150), AqiCategory::UnhealthyForSensitive);
        assert_eq!(AqiCategory::from_index(151), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::Unhealthy.color(), "#7C2D12");
    }

    #[test]
    fn humidity_buckets_follow_formula() {
        let d = humidity_distribution(40.0);
        assert_eq!(d, HumidityDistribution { low: 40.0, medium: 40.0, high: 0.0 });

        let d = humidity_distribution(90.0);
        assert_eq!(d, HumidityDistribution { low: 0.0, medium: 90.0, high: 40.0 });

        let d = humidity_distribution(0.0);
        assert_eq!(d, HumidityDistribution { low: 80.0, medium: 0.0, high: 0.0 });
    }

    #[test]
    fn shares_normalize_by_sum() {
        let (low, medium, high) = humidity_distribution(90.0).shares();
        assert!((low + medium + high - 1.0).abs() < 1e-12);
        assert!((medium - 90.0 / 130.0).abs() < 1e-12);

        let empty = HumidityDistribution { low: 0.0, medium: 0.0, high: 0.0 };
        assert_eq!(empty.shares(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn technical_metrics_from_record() {
        let payload = json!({
            "current": {
                "time": "2024-06-01T14:30",
                "relative_humidity_2m": 40,
                "surface_pressure": 1012.5
            }
        });
        let record =
            assemble_for_coordinates(Coordinates { lat: 1.0, lon: 2.0 }, &payload).unwrap();
        let metrics = TechnicalMetrics::from_record(&record);

        assert_eq!(metrics.atmospheric_pressure, 1012.5);
        assert_eq!(metrics.air_quality_index, 86);
        assert_eq!(metrics.aqi_category, AqiCategory::Moderate);
        assert_eq!(metrics.last_update, "01/06/2024, 14:30");
    }

    #[test]
    fn timestamp_formats() {
        assert_eq!(format_timestamp("2024-12-31T23:05:00+00:00"), "31/12/2024, 23:05");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}

use crate::model::ParameterStatus;

/// Parameters with status thresholds. Everything else is always `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Uv,
    Humidity,
    /// km/h
    WindSpeed,
    /// hPa
    Pressure,
    Temperature,
    ApparentTemperature,
    Visibility,
    DewPoint,
}

pub fn parameter_status(kind: ParameterKind, value: f64) -> ParameterStatus {
    match kind {
        ParameterKind::Uv if value >= 8.0 => ParameterStatus::Alert,
        ParameterKind::Uv if value >= 6.0 => ParameterStatus::Attention,
        ParameterKind::Humidity if value >= 80.0 || value <= 20.0 => ParameterStatus::Attention,
        ParameterKind::WindSpeed if value >= 25.0 => ParameterStatus::Alert,
        ParameterKind::WindSpeed if value >= 15.0 => ParameterStatus::Attention,
        ParameterKind::Pressure if value <= 1000.0 || value >= 1030.0 => {
            ParameterStatus::Attention
        }
        _ => ParameterStatus::Normal,
    }
}

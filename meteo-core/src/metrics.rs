//! Display-only values derived from weather data: parameter status,
//! simulated trends, wind compass mapping, air quality, forecast day names,
//! recommendations.

pub mod air;
pub mod detailed;
pub mod forecast;
pub mod recommend;
pub mod series;
pub mod status;
pub mod trend;
pub mod wind;

pub use air::{
    AqiCategory, HumidityDistribution, TechnicalMetrics, air_quality_index, humidity_distribution,
};
pub use detailed::detailed_parameters;
pub use forecast::{day_name, extended_forecast};
pub use recommend::{Category, Priority, Recommendation, RecommendationInput, recommendations};
pub use series::{
    PressurePoint, TrendPoint, WindRosePoint, pressure_series, trend_series, wind_rose,
};
pub use status::{ParameterKind, parameter_status};
pub use trend::{SimulatedTrends, TrendSource};
pub use wind::{
    PressureQuality, WindPressureSummary, compass_to_degrees, degrees_to_compass, pressure_quality,
    wind_dir_label,
};

//! Dashboard coordinator: one [`Panel`] per view, each fetching on its own.
//!
//! Panels share nothing but the coordinates they are given. A location
//! change starts one request per panel; a failure stays inside the panel
//! that hit it.

use chrono::Local;
use std::sync::Arc;

use crate::{
    error::WeatherError,
    metrics::{
        Recommendation, RecommendationInput, SimulatedTrends, TechnicalMetrics, TrendSource,
        recommendations,
    },
    model::{CanonicalWeatherRecord, Coordinates, ForecastDay, Location, WeatherParameter},
    panel::Panel,
    service::WeatherService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Current,
    Details,
    Forecast,
    Technical,
    Recommendations,
}

impl PanelKind {
    pub const fn all() -> &'static [PanelKind] {
        &[
            PanelKind::Current,
            PanelKind::Details,
            PanelKind::Forecast,
            PanelKind::Technical,
            PanelKind::Recommendations,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::Current => "current conditions",
            PanelKind::Details => "detailed analysis",
            PanelKind::Forecast => "extended forecast",
            PanelKind::Technical => "technical metrics",
            PanelKind::Recommendations => "recommendations",
        }
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Dashboard {
    service: WeatherService,
    trends: Arc<dyn TrendSource>,
    location: Option<Location>,
    current: Panel<CanonicalWeatherRecord>,
    details: Panel<Vec<WeatherParameter>>,
    forecast: Panel<Vec<ForecastDay>>,
    technical: Panel<TechnicalMetrics>,
    recommendations: Panel<Vec<Recommendation>>,
}

impl Dashboard {
    /// Dashboard using [`SimulatedTrends`] for trend placeholders.
    pub fn new(service: WeatherService) -> Self {
        Self::with_trends(service, Arc::new(SimulatedTrends))
    }

    pub fn with_trends(service: WeatherService, trends: Arc<dyn TrendSource>) -> Self {
        Self {
            service,
            trends,
            location: None,
            current: Panel::new("current"),
            details: Panel::new("details"),
            forecast: Panel::new("forecast"),
            technical: Panel::new("technical"),
            recommendations: Panel::new("recommendations"),
        }
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn trends(&self) -> &dyn TrendSource {
        self.trends.as_ref()
    }

    pub fn current(&self) -> &Panel<CanonicalWeatherRecord> {
        &self.current
    }

    pub fn details(&self) -> &Panel<Vec<WeatherParameter>> {
        &self.details
    }

    pub fn forecast(&self) -> &Panel<Vec<ForecastDay>> {
        &self.forecast
    }

    pub fn technical(&self) -> &Panel<TechnicalMetrics> {
        &self.technical
    }

    pub fn recommendations(&self) -> &Panel<Vec<Recommendation>> {
        &self.recommendations
    }

    /// Error message of `kind`'s panel, if it is in the error state.
    pub fn panel_error(&self, kind: PanelKind) -> Option<&str> {
        match kind {
            PanelKind::Current => self.current.state().error(),
            PanelKind::Details => self.details.state().error(),
            PanelKind::Forecast => self.forecast.state().error(),
            PanelKind::Technical => self.technical.state().error(),
            PanelKind::Recommendations => self.recommendations.state().error(),
        }
    }

    /// Point every panel at `location` and load them concurrently.
    pub async fn load(&mut self, location: Location) {
        let coords = location.coordinates();
        tracing::debug!(
            "Loading dashboard for {} ({}, {})",
            location.name,
            coords.lat(),
            coords.lon()
        );

        let current = self.current.begin(coords);
        let details = self.details.begin(coords);
        let forecast = self.forecast.begin(coords);
        let technical = self.technical.begin(coords);
        let advice = self.recommendations.begin(coords);
        let today = Local::now().date_naive();

        let (current_res, details_res, forecast_res, technical_res, advice_res) = tokio::join!(
            current_record(&self.service, coords, &location.name),
            self.service.detailed_conditions(coords, self.trends.as_ref()),
            self.service.extended_forecast(coords, today),
            technical_metrics(&self.service, coords),
            advice_for(&self.service, coords),
        );

        self.current.finish(current, current_res);
        self.details.finish(details, details_res);
        self.forecast.finish(forecast, forecast_res);
        self.technical.finish(technical, technical_res);
        self.recommendations.finish(advice, advice_res);
        self.location = Some(location);
    }

    /// Re-run one panel for the current location. Returns `false` when there
    /// is no location yet or the result was superseded.
    pub async fn retry(&mut self, kind: PanelKind) -> bool {
        let Some(location) = self.location.clone() else {
            return false;
        };
        let coords = location.coordinates();
        tracing::debug!("Retrying {} panel", kind);

        match kind {
            PanelKind::Current => {
                let ticket = self.current.begin(coords);
                let result = current_record(&self.service, coords, &location.name).await;
                self.current.finish(ticket, result)
            }
            PanelKind::Details => {
                let ticket = self.details.begin(coords);
                let result = self
                    .service
                    .detailed_conditions(coords, self.trends.as_ref())
                    .await;
                self.details.finish(ticket, result)
            }
            PanelKind::Forecast => {
                let ticket = self.forecast.begin(coords);
                let today = Local::now().date_naive();
                let result = self.service.extended_forecast(coords, today).await;
                self.forecast.finish(ticket, result)
            }
            PanelKind::Technical => {
                let ticket = self.technical.begin(coords);
                let result = technical_metrics(&self.service, coords).await;
                self.technical.finish(ticket, result)
            }
            PanelKind::Recommendations => {
                let ticket = self.recommendations.begin(coords);
                let result = advice_for(&self.service, coords).await;
                self.recommendations.finish(ticket, result)
            }
        }
    }

    /// Drop the location and return every panel to `Idle`.
    pub fn reset(&mut self) {
        self.location = None;
        self.current.reset();
        self.details.reset();
        self.forecast.reset();
        self.technical.reset();
        self.recommendations.reset();
    }
}

async fn current_record(
    service: &WeatherService,
    coords: Coordinates,
    name: &str,
) -> Result<CanonicalWeatherRecord, WeatherError> {
    let record = service.weather_by_coordinates(coords).await?;
    Ok(record.with_location_name(name))
}

async fn technical_metrics(
    service: &WeatherService,
    coords: Coordinates,
) -> Result<TechnicalMetrics, WeatherError> {
    let record = service.weather_by_coordinates(coords).await?;
    Ok(TechnicalMetrics::from_record(&record))
}

async fn advice_for(
    service: &WeatherService,
    coords: Coordinates,
) -> Result<Vec<Recommendation>, WeatherError> {
    let record = service.weather_by_coordinates(coords).await?;
    Ok(recommendations(&RecommendationInput::from_record(&record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{ForecastQuery, ForecastSource};
    use crate::geocode::Geocoder;
    use crate::model::Trend;
    use crate::panel::PanelState;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug)]
    struct NoGeocoder;

    #[async_trait]
    impl Geocoder for NoGeocoder {
        async fn geocode(&self, _query: &str) -> Result<Option<Location>, WeatherError> {
            Ok(None)
        }
    }

    #[derive(Debug, Default)]
    struct FakeForecasts {
        calls: AtomicUsize,
        fail_daily: AtomicBool,
    }

    #[async_trait]
    impl ForecastSource for FakeForecasts {
        async fn fetch(&self, query: &ForecastQuery) -> Result<Value, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !query.daily.is_empty() {
                if self.fail_daily.load(Ordering::SeqCst) {
                    return Err(WeatherError::fetch(
                        Some(reqwest::StatusCode::SERVICE_UNAVAILABLE),
                        "down",
                    ));
                }
                return Ok(json!({
                    "daily": {
                        "time": ["2024-06-01", "2024-06-02"],
                        "weather_code": [0, 3],
                        "temperature_2m_max": [25, 22],
                        "temperature_2m_min": [15, 13],
                        "precipitation_probability_mean": [5, 20],
                        "relative_humidity_2m_mean": [45, 60]
                    }
                }));
            }
            Ok(json!({
                "current": {
                    "temperature_2m": 22,
                    "relative_humidity_2m": 40,
                    "wind_speed_10m": 3,
                    "weather_code": 0,
                    "surface_pressure": 1015,
                    "uv_index": 6
                },
                "hourly": { "dew_point_2m": [8.2], "visibility": [30000] }
            }))
        }
    }

    struct Rising;

    impl TrendSource for Rising {
        fn trend(&self) -> Trend {
            Trend::Rising
        }
        fn recent_change(&self) -> String {
            "+1 hPa".into()
        }
        fn jitter(&self, _spread: f64) -> f64 {
            0.0
        }
    }

    fn dashboard(forecasts: Arc<FakeForecasts>) -> Dashboard {
        let service = WeatherService::new(Arc::new(NoGeocoder), forecasts);
        Dashboard::with_trends(service, Arc::new(Rising))
    }

    fn madrid() -> Location {
        Location::new("Madrid", 40.4, -3.7).unwrap()
    }

    #[tokio::test]
    async fn load_fills_every_panel_with_independent_requests() {
        let forecasts = Arc::new(FakeForecasts::default());
        let mut dash = dashboard(forecasts.clone());

        dash.load(madrid()).await;

        assert_eq!(forecasts.calls.load(Ordering::SeqCst), PanelKind::all().len());
        assert_eq!(dash.location().map(|l| l.name.as_str()), Some("Madrid"));

        let record = dash.current().state().value().expect("current loaded");
        assert_eq!(record.location.name, "Madrid");
        assert_eq!(record.current.condition.text, "Clear sky");

        let details = dash.details().state().value().expect("details loaded");
        assert_eq!(details.len(), 8);
        assert!(details.iter().all(|p| p.trend == Trend::Rising));

        assert_eq!(dash.forecast().state().value().map(Vec::len), Some(2));
        assert_eq!(
            dash.technical().state().value().map(|t| t.air_quality_index),
            Some(86)
        );
        assert_eq!(dash.recommendations().state().value().map(Vec::len), Some(4));

        for kind in PanelKind::all() {
            assert_eq!(dash.panel_error(*kind), None);
        }
    }

    #[tokio::test]
    async fn failure_is_scoped_to_its_panel_and_retry_recovers() {
        let forecasts = Arc::new(FakeForecasts::default());
        forecasts.fail_daily.store(true, Ordering::SeqCst);
        let mut dash = dashboard(forecasts.clone());

        dash.load(madrid()).await;

        assert!(dash.panel_error(PanelKind::Forecast).unwrap().contains("503"));
        assert!(dash.current().state().value().is_some());
        assert!(dash.details().state().value().is_some());

        forecasts.fail_daily.store(false, Ordering::SeqCst);
        assert!(dash.retry(PanelKind::Forecast).await);
        assert_eq!(dash.panel_error(PanelKind::Forecast), None);
        assert_eq!(dash.forecast().state().value().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn retry_without_location_is_noop() {
        let forecasts = Arc::new(FakeForecasts::default());
        let mut dash = dashboard(forecasts.clone());

        assert!(!dash.retry(PanelKind::Current).await);
        assert_eq!(forecasts.calls.load(Ordering::SeqCst), 0);
        assert_eq!(dash.current().state(), &PanelState::Idle);
    }

    #[tokio::test]
    async fn reset_returns_panels_to_idle() {
        let forecasts = Arc::new(FakeForecasts::default());
        let mut dash = dashboard(forecasts);

        dash.load(madrid()).await;
        dash.reset();

        assert!(dash.location().is_none());
        assert_eq!(dash.current().state(), &PanelState::Idle);
        assert_eq!(dash.forecast().state(), &PanelState::Idle);
    }
}

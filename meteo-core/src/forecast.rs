//! Forecast endpoint client. Returns raw payloads; normalization happens in
//! [`crate::assembler`] and [`crate::metrics`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt::Debug;

use crate::{config::Config, error::WeatherError, geocode::truncate_body, model::Coordinates};

pub const CURRENT_FIELDS: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "precipitation",
    "weather_code",
    "surface_pressure",
    "wind_speed_10m",
    "wind_direction_10m",
];

pub const DETAILED_CURRENT_FIELDS: &[&str] = &[
    "temperature_2m",
    "apparent_temperature",
    "relative_humidity_2m",
    "wind_speed_10m",
    "wind_direction_10m",
    "surface_pressure",
    "uv_index",
];

pub const DETAILED_HOURLY_FIELDS: &[&str] = &["dew_point_2m", "visibility"];

pub const DAILY_FIELDS: &[&str] = &[
    "weather_code",
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_probability_mean",
    "relative_humidity_2m_mean",
];

pub const EXTENDED_FORECAST_DAYS: u8 = 7;

/// Variables and window requested from the forecast endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    pub coordinates: Coordinates,
    pub current: Vec<String>,
    pub hourly: Vec<String>,
    pub daily: Vec<String>,
    pub forecast_days: Option<u8>,
}

impl ForecastQuery {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            current: Vec::new(),
            hourly: Vec::new(),
            daily: Vec::new(),
            forecast_days: None,
        }
    }

    /// Current conditions used by the canonical record.
    pub fn current_conditions(coordinates: Coordinates) -> Self {
        Self::new(coordinates).current(CURRENT_FIELDS)
    }

    /// Current conditions plus today's hourly dew point and visibility.
    pub fn detailed_conditions(coordinates: Coordinates) -> Self {
        Self::new(coordinates)
            .current(DETAILED_CURRENT_FIELDS)
            .hourly(DETAILED_HOURLY_FIELDS)
            .forecast_days(1)
    }

    /// Daily summaries for the extended forecast.
    pub fn extended_forecast(coordinates: Coordinates) -> Self {
        Self::new(coordinates)
            .daily(DAILY_FIELDS)
            .forecast_days(EXTENDED_FORECAST_DAYS)
    }

    pub fn current<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.current.extend(fields.into_iter().map(|f| f.as_ref().to_string()));
        self
    }

    pub fn hourly<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hourly.extend(fields.into_iter().map(|f| f.as_ref().to_string()));
        self
    }

    pub fn daily<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.daily.extend(fields.into_iter().map(|f| f.as_ref().to_string()));
        self
    }

    pub fn forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = Some(days);
        self
    }

    /// Query-string pairs in the order the endpoint documents them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("latitude", self.coordinates.lat.to_string()),
            ("longitude", self.coordinates.lon.to_string()),
        ];
        if !self.current.is_empty() {
            pairs.push(("current", self.current.join(",")));
        }
        if !self.hourly.is_empty() {
            pairs.push(("hourly", self.hourly.join(",")));
        }
        if !self.daily.is_empty() {
            pairs.push(("daily", self.daily.join(",")));
        }
        pairs.push(("timezone", "auto".to_string()));
        if let Some(days) = self.forecast_days {
            pairs.push(("forecast_days", days.to_string()));
        }
        pairs
    }
}

#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    /// Fetch the raw payload for `query`. Shape checks are left to the caller.
    async fn fetch(&self, query: &ForecastQuery) -> Result<Value, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    base_url: String,
    http: Client,
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.forecast_base_url.clone())
    }
}

#[async_trait]
impl ForecastSource for ForecastClient {
    async fn fetch(&self, query: &ForecastQuery) -> Result<Value, WeatherError> {
        let pairs = query.to_query_pairs();
        tracing::debug!(url = %self.base_url, ?pairs, "Forecast request");

        let res = self
            .http
            .get(&self.base_url)
            .query(&pairs)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Forecast request failed: {}", e);
                WeatherError::fetch(e.status(), format!("request failed: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            WeatherError::fetch(Some(status), format!("failed to read body: {e}"))
        })?;

        if !status.is_success() {
            tracing::warn!("Forecast endpoint answered {}", status);
            return Err(WeatherError::fetch(Some(status), truncate_body(&body)));
        }

        serde_json::from_str(&body)
            .map_err(|e| WeatherError::data_shape(format!("forecast body is not JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn madrid() -> Coordinates {
        Coordinates { lat: 40.4, lon: -3.7 }
    }

    #[test]
    fn current_conditions_pairs() {
        let pairs = ForecastQuery::current_conditions(madrid()).to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("latitude", "40.4".to_string()),
                ("longitude", "-3.7".to_string()),
                ("current", CURRENT_FIELDS.join(",")),
                ("timezone", "auto".to_string()),
            ]
        );
    }

    #[test]
    fn extended_forecast_pairs_skip_current() {
        let pairs = ForecastQuery::extended_forecast(madrid()).to_query_pairs();
        assert!(pairs.iter().all(|(k, _)| *k != "current"));
        assert!(pairs.contains(&("daily", DAILY_FIELDS.join(","))));
        assert_eq!(pairs.last(), Some(&("forecast_days", "7".to_string())));
    }

    #[test]
    fn detailed_pairs_include_hourly_and_one_day() {
        let pairs = ForecastQuery::detailed_conditions(madrid()).to_query_pairs();
        assert!(pairs.contains(&("hourly", "dew_point_2m,visibility".to_string())));
        assert!(pairs.contains(&("forecast_days", "1".to_string())));
        assert!(pairs.contains(&("current", DETAILED_CURRENT_FIELDS.join(","))));
    }

    #[tokio::test]
    async fn returns_raw_payload() {
        let server = MockServer::start().await;
        let body = json!({ "current": { "temperature_2m": 22, "weather_code": 0 } });
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "40.4"))
            .and(query_param("longitude", "-3.7"))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = ForecastClient::new(format!("{}/v1/forecast", server.uri()));
        let payload = client
            .fetch(&ForecastQuery::current_conditions(madrid()))
            .await
            .unwrap();
        assert_eq!(payload, body);
    }

    #[tokio::test]
    async fn non_success_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let client = ForecastClient::new(format!("{}/v1/forecast", server.uri()));
        let err = client
            .fetch(&ForecastQuery::current_conditions(madrid()))
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Fetch { .. }));
        assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
        assert!(err.to_string().contains("slow down"));
    }

    #[tokio::test]
    async fn non_json_body_is_data_shape_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = ForecastClient::new(format!("{}/v1/forecast", server.uri()));
        let err = client
            .fetch(&ForecastQuery::extended_forecast(madrid()))
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::DataShape(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_fetch_error_without_status() {
        let client = ForecastClient::new("http://127.0.0.1:9/v1/forecast");
        let err = client
            .fetch(&ForecastQuery::current_conditions(madrid()))
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::Fetch { status: None, .. }));
    }
}

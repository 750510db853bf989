//! Forward geocoding: free-text place name to coordinates.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::{
    config::Config,
    error::{GeocodeError, WeatherError},
    model::Location,
};

#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Resolve `query` to a single place.
    ///
    /// Whitespace-only queries resolve to `Ok(None)` without any request.
    async fn geocode(&self, query: &str) -> Result<Option<Location>, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    base_url: String,
    http: Client,
}

impl GeocodingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.geocoding_base_url.clone())
    }

    async fn lookup(&self, name: &str) -> Result<Location, GeocodeError> {
        tracing::debug!(url = %self.base_url, name, "Geocoding request");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("name", name),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::LookupFailed(format!("request failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| GeocodeError::LookupFailed(format!("failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(GeocodeError::LookupFailed(format!(
                "status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: GeoResponse = serde_json::from_str(&body)
            .map_err(|e| GeocodeError::LookupFailed(format!("invalid response: {e}")))?;

        let first = parsed
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| GeocodeError::NoResults(name.to_string()))?;

        Location::new(first.name, first.latitude, first.longitude)
            .map_err(|e| GeocodeError::LookupFailed(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Option<Vec<GeoResult>>,
}

#[async_trait]
impl Geocoder for GeocodingClient {
    async fn geocode(&self, query: &str) -> Result<Option<Location>, WeatherError> {
        let name = query.trim();
        if name.is_empty() {
            return Ok(None);
        }

        match self.lookup(name).await {
            Ok(location) => {
                tracing::info!(
                    "Geocoded '{}' to {} ({}, {})",
                    name,
                    location.name,
                    location.latitude,
                    location.longitude
                );
                Ok(Some(location))
            }
            Err(e) => {
                tracing::warn!("Geocoding '{}' failed: {}", name, e);
                Err(e.into())
            }
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

use chrono::NaiveDate;
use std::sync::Arc;

use crate::{
    assembler::{assemble_for_coordinates, assemble_for_location},
    config::Config,
    error::WeatherError,
    forecast::{ForecastClient, ForecastQuery, ForecastSource},
    geocode::{Geocoder, GeocodingClient},
    metrics::{TrendSource, detailed_parameters, extended_forecast},
    model::{CanonicalWeatherRecord, Coordinates, ForecastDay, Location, WeatherParameter},
};

/// Geocoding plus forecast fetching, one call per operation. Nothing is
/// cached: every call goes to the network.
#[derive(Debug, Clone)]
pub struct WeatherService {
    geocoder: Arc<dyn Geocoder>,
    forecasts: Arc<dyn ForecastSource>,
}

impl WeatherService {
    pub fn new(geocoder: Arc<dyn Geocoder>, forecasts: Arc<dyn ForecastSource>) -> Self {
        Self {
            geocoder,
            forecasts,
        }
    }

    /// Construct HTTP-backed clients from configured base URLs.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(GeocodingClient::from_config(config)),
            Arc::new(ForecastClient::from_config(config)),
        )
    }

    /// `Ok(None)` for blank queries.
    pub async fn locate(&self, query: &str) -> Result<Option<Location>, WeatherError> {
        self.geocoder.geocode(query).await
    }

    /// Geocode `query` and assemble its current conditions under the
    /// geocoded name.
    pub async fn current_weather(
        &self,
        query: &str,
    ) -> Result<Option<CanonicalWeatherRecord>, WeatherError> {
        let Some(location) = self.locate(query).await? else {
            return Ok(None);
        };
        let payload = self
            .forecasts
            .fetch(&ForecastQuery::current_conditions(location.coordinates()))
            .await?;
        assemble_for_location(&location, &payload).map(Some)
    }

    /// Current conditions for bare coordinates, named
    /// [`crate::assembler::UNKNOWN_LOCATION`].
    pub async fn weather_by_coordinates(
        &self,
        coordinates: Coordinates,
    ) -> Result<CanonicalWeatherRecord, WeatherError> {
        let payload = self
            .forecasts
            .fetch(&ForecastQuery::current_conditions(coordinates))
            .await?;
        assemble_for_coordinates(coordinates, &payload)
    }

    pub async fn detailed_conditions(
        &self,
        coordinates: Coordinates,
        trends: &dyn TrendSource,
    ) -> Result<Vec<WeatherParameter>, WeatherError> {
        let payload = self
            .forecasts
            .fetch(&ForecastQuery::detailed_conditions(coordinates))
            .await?;
        detailed_parameters(&payload, trends)
    }

    pub async fn extended_forecast(
        &self,
        coordinates: Coordinates,
        today: NaiveDate,
    ) -> Result<Vec<ForecastDay>, WeatherError> {
        let payload = self
            .forecasts
            .fetch(&ForecastQuery::extended_forecast(coordinates))
            .await?;
        extended_forecast(&payload, today)
    }
}

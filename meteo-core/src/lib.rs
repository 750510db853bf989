//! Core library for the `meteo` weather dashboard.
//!
//! This crate defines:
//! - Configuration of the geocoding and forecast endpoints
//! - HTTP clients for both endpoints, behind traits for substitution
//! - Normalization of raw forecast payloads into a canonical record
//! - Display-only derived metrics and per-panel load state
//!
//! It is used by `meteo-cli`, but can also be reused by other front ends.

pub mod assembler;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod metrics;
pub mod model;
pub mod panel;
mod payload;
pub mod service;
pub mod units;
pub mod weather_code;

pub use config::Config;
pub use dashboard::{Dashboard, PanelKind};
pub use error::{GeocodeError, WeatherError};
pub use forecast::{ForecastClient, ForecastQuery, ForecastSource};
pub use geocode::{Geocoder, GeocodingClient};
pub use model::{CanonicalWeatherRecord, Coordinates, ForecastDay, Location, WeatherParameter};
pub use panel::{Panel, PanelState};
pub use service::WeatherService;

//! Error taxonomy shared by every client, assembler and panel.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the free-text place lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// Transport failure, non-success status or unreadable body.
    #[error("lookup failed: {0}")]
    LookupFailed(String),

    /// The endpoint answered but had nothing for the query.
    #[error("no results for '{0}'")]
    NoResults(String),
}

/// Main error type of the dashboard core.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Geocoding error: {0}")]
    Geocode(#[from] GeocodeError),

    /// Forecast endpoint could not be reached or answered with a non-success status.
    #[error("Forecast request failed{}: {message}", status_suffix(.status))]
    Fetch {
        status: Option<StatusCode>,
        message: String,
    },

    /// The response was successful but is missing fields we need.
    #[error("Unexpected weather data: {0}")]
    DataShape(String),
}

fn status_suffix(status: &Option<StatusCode>) -> String {
    status.map(|s| format!(" with status {s}")).unwrap_or_default()
}

impl WeatherError {
    pub fn fetch<S: Into<String>>(status: Option<StatusCode>, message: S) -> Self {
        Self::Fetch {
            status,
            message: message.into(),
        }
    }

    pub fn data_shape<S: Into<String>>(message: S) -> Self {
        Self::DataShape(message.into())
    }

    /// HTTP status carried by a [`WeatherError::Fetch`], if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            WeatherError::Fetch { status, .. } => *status,
            _ => None,
        }
    }

    /// Message suitable for showing in a panel next to a retry action.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::Geocode(GeocodeError::NoResults(query)) => {
                format!("No places found for '{query}'. Try a different name.")
            }
            WeatherError::Geocode(GeocodeError::LookupFailed(_)) => {
                "Could not look up that place. Check your connection and try again.".to_string()
            }
            WeatherError::Fetch {
                status: Some(status),
                ..
            } => format!("The weather service answered with {status}. Try again later."),
            WeatherError::Fetch { status: None, .. } => {
                "Unable to reach the weather service. Check your connection.".to_string()
            }
            WeatherError::DataShape(_) => {
                "The weather service returned incomplete data.".to_string()
            }
        }
    }
}

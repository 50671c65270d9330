use std::time::Duration;
use thiserror::Error;

/// Failures at the weather I/O boundary.
///
/// An empty forecast is a successful response and never shows up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("location not found: {0}")]
    LocationNotFound(String),

    #[error("weather service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid weather response: {0}")]
    InvalidResponse(String),
}

#[derive(Error, Debug)]
pub enum CropWatchError {
    #[error("could not retrieve weather for location {location}: {source}")]
    WeatherUnavailable {
        location: String,
        #[source]
        source: FetchError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid rule catalog: {0}")]
    InvalidCatalog(String),
}

impl CropWatchError {
    pub fn weather_unavailable(location: impl Into<String>, source: FetchError) -> Self {
        CropWatchError::WeatherUnavailable {
            location: location.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CropWatchError>;

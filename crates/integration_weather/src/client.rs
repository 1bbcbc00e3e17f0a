//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap 2.5 API (`/weather` and `/forecast`).

use std::time::Duration;

use async_trait::async_trait;
use domain::UnitSystem;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiErrorBody, CurrentWeatherResponse, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider does not know the requested city (HTTP 404 on `/weather`)
    #[error("{0}")]
    CityNotFound(String),

    /// API key missing or rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// OpenWeatherMap client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `appid` (excluded from serialization to prevent leaks)
    #[serde(skip_serializing, default)]
    pub api_key: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city by name
    async fn current_by_city(
        &self,
        city: &str,
        unit: UnitSystem,
    ) -> Result<CurrentWeatherResponse, WeatherError>;

    /// Get the 5-day / 3-hour forecast for a location
    async fn forecast_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        unit: UnitSystem,
    ) -> Result<ForecastResponse, WeatherError>;
}

/// Which endpoint a response came from; decides what a 404 means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Weather,
    Forecast,
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub const fn config(&self) -> &OpenWeatherConfig {
        &self.config
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        match endpoint {
            Endpoint::Weather => format!("{base}/weather"),
            Endpoint::Forecast => format!("{base}/forecast"),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let url = self.endpoint_url(endpoint);
        // The key goes in the query string; never log the full request URL.
        debug!(url = %url, "Sending weather request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    WeatherError::ConnectionFailed(e.to_string())
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        let response = Self::check_status(response, endpoint).await?;

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Map non-success statuses to errors, keeping the provider's message
    async fn check_status(response: Response, endpoint: Endpoint) -> Result<Response, WeatherError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ApiErrorBody>(&body).ok())
            .map_or_else(|| format!("HTTP {status}"), |body| body.message);
        warn!(status = %status, message = %message, "Weather API returned an error");

        Err(match status {
            StatusCode::NOT_FOUND if endpoint == Endpoint::Weather => {
                WeatherError::CityNotFound(message)
            },
            StatusCode::UNAUTHORIZED => WeatherError::Unauthorized(message),
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(message),
            _ => WeatherError::RequestFailed(message),
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(unit = %unit))]
    async fn current_by_city(
        &self,
        city: &str,
        unit: UnitSystem,
    ) -> Result<CurrentWeatherResponse, WeatherError> {
        let response: CurrentWeatherResponse = self
            .get_json(
                Endpoint::Weather,
                &[
                    ("q", city.to_string()),
                    ("units", unit.as_query_param().to_string()),
                ],
            )
            .await?;

        debug!(
            name = %response.name,
            lat = response.coord.lat,
            lon = response.coord.lon,
            "Current weather received"
        );
        Ok(response)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, unit = %unit))]
    async fn forecast_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        unit: UnitSystem,
    ) -> Result<ForecastResponse, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let response: ForecastResponse = self
            .get_json(
                Endpoint::Forecast,
                &[
                    ("lat", latitude.to_string()),
                    ("lon", longitude.to_string()),
                    ("units", unit.as_query_param().to_string()),
                ],
            )
            .await?;

        debug!(samples = response.list.len(), "Forecast received");
        Ok(response)
    }
}

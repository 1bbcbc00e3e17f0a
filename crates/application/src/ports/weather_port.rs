//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{CityName, CurrentWeather, ForecastSample, GeoLocation, UnitSystem};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a city by name
    ///
    /// Returns `ApplicationError::CityNotFound` if the provider does not know the city.
    async fn current_weather(
        &self,
        city: &CityName,
        unit: UnitSystem,
    ) -> Result<CurrentWeather, ApplicationError>;

    /// Get the raw 3-hourly forecast feed for a location
    async fn forecast(
        &self,
        location: &GeoLocation,
        unit: UnitSystem,
    ) -> Result<Vec<ForecastSample>, ApplicationError>;
}

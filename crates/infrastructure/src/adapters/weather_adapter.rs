//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{CityName, Condition, CurrentWeather, ForecastSample, GeoLocation, UnitSystem};
use integration_weather::{
    CurrentWeatherResponse, ForecastItem, OpenWeatherClient, OpenWeatherConfig, WeatherClient,
    WeatherDescription, WeatherError,
};
use tracing::{debug, instrument};

use crate::config::WeatherAppConfig;

/// Adapter for weather services using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .field("base_url", &self.client.config().base_url)
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenWeatherClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create from the application configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if no API key is configured.
    pub fn from_app_config(config: &WeatherAppConfig) -> Result<Self, ApplicationError> {
        let client_config = config.client_config().ok_or_else(|| {
            ApplicationError::Configuration(
                "weather.api_key is not set (use SKYCAST_WEATHER__API_KEY)".to_string(),
            )
        })?;
        Self::with_config(client_config)
    }

    /// Map integration weather error to application error
    ///
    /// Only an unknown city keeps its own kind; everything else is a network failure.
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::CityNotFound(msg) => ApplicationError::CityNotFound(msg),
            other => ApplicationError::NetworkFailure(other.to_string()),
        }
    }

    fn malformed(what: &str) -> ApplicationError {
        ApplicationError::NetworkFailure(format!("Malformed weather response: {what}"))
    }

    fn map_condition(
        description: Option<&WeatherDescription>,
    ) -> Result<Condition, ApplicationError> {
        description
            .map(|w| Condition::new(&w.description, &w.icon))
            .ok_or_else(|| Self::malformed("missing weather condition"))
    }

    /// Convert the wire response into the domain record, rejecting anything incomplete
    fn map_current(
        response: &CurrentWeatherResponse,
        unit: UnitSystem,
    ) -> Result<CurrentWeather, ApplicationError> {
        let coordinates = GeoLocation::new(response.coord.lat, response.coord.lon)
            .map_err(|e| Self::malformed(&e.to_string()))?;

        Ok(CurrentWeather {
            city_name: response.name.clone(),
            coordinates,
            temperature: response.main.temp,
            feels_like: response.main.feels_like,
            temp_min: response.main.temp_min,
            temp_max: response.main.temp_max,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
            pressure: response.main.pressure,
            condition: Self::map_condition(response.primary_condition())?,
            unit,
        })
    }

    fn map_sample(item: &ForecastItem) -> Result<ForecastSample, ApplicationError> {
        let timestamp = ForecastSample::parse_timestamp(&item.dt_txt)
            .map_err(|e| Self::malformed(&e.to_string()))?;

        Ok(ForecastSample::new(
            timestamp,
            item.main.temp_max,
            item.main.temp_min,
            Self::map_condition(item.primary_condition())?,
        ))
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city, unit = %unit))]
    async fn current_weather(
        &self,
        city: &CityName,
        unit: UnitSystem,
    ) -> Result<CurrentWeather, ApplicationError> {
        let result = self
            .client
            .current_by_city(city.as_str(), unit)
            .await
            .map_err(Self::map_error)
            .and_then(|response| Self::map_current(&response, unit));

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    condition = %current.condition,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }

    #[instrument(
        skip(self),
        fields(lat = location.latitude(), lon = location.longitude(), unit = %unit)
    )]
    async fn forecast(
        &self,
        location: &GeoLocation,
        unit: UnitSystem,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let result: Result<Vec<ForecastSample>, ApplicationError> = self
            .client
            .forecast_by_coordinates(location.latitude(), location.longitude(), unit)
            .await
            .map_err(Self::map_error)
            .and_then(|response| response.list.iter().map(Self::map_sample).collect());

        match &result {
            Ok(samples) => {
                debug!(samples = samples.len(), "Retrieved weather forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result
    }
}

//! Weather lookup service
//!
//! Runs one query cycle: current weather by city name, then, only if that
//! succeeded, the forecast for the returned coordinates in the same unit system.

use std::{fmt, sync::Arc};

use domain::{CurrentWeather, ForecastSample, LocationQuery, reduce_to_daily};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::LookupError,
    ports::WeatherPort,
    services::WeatherView,
};

/// Result of one query cycle
///
/// At most one error is surfaced. A failed current-weather request means
/// the forecast was never requested.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    Complete {
        current: CurrentWeather,
        /// Raw 3-hourly feed
        forecast: Vec<ForecastSample>,
        /// One sample per day
        daily: Vec<ForecastSample>,
    },
    CurrentFailed(LookupError),
    ForecastFailed {
        current: CurrentWeather,
        error: LookupError,
    },
}

impl LookupOutcome {
    /// The surfaced error, if any
    #[must_use]
    pub const fn error(&self) -> Option<&LookupError> {
        match self {
            Self::Complete { .. } => None,
            Self::CurrentFailed(err) | Self::ForecastFailed { error: err, .. } => Some(err),
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

/// Orchestrates the two dependent weather requests
pub struct WeatherLookupService {
    weather_port: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherLookupService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherLookupService").finish_non_exhaustive()
    }
}

impl WeatherLookupService {
    /// Create a new lookup service
    pub fn new(weather_port: Arc<dyn WeatherPort>) -> Self {
        Self { weather_port }
    }

    /// Fetch current weather and, on success, the dependent forecast
    #[instrument(skip(self), fields(city = %query.city, unit = %query.unit))]
    pub async fn fetch_weather(&self, query: &LocationQuery) -> LookupOutcome {
        let current = match self.weather_port.current_weather(&query.city, query.unit).await {
            Ok(current) => current,
            Err(e) => {
                warn!(error = %e, "Current weather lookup failed");
                return LookupOutcome::CurrentFailed(LookupError::from_current_stage(&e));
            },
        };

        debug!(coordinates = %current.coordinates, "Fetching forecast");
        match self.weather_port.forecast(&current.coordinates, query.unit).await {
            Ok(forecast) => {
                let daily = reduce_to_daily(&forecast);
                info!(
                    samples = forecast.len(),
                    days = daily.len(),
                    "Weather lookup complete"
                );
                LookupOutcome::Complete {
                    current,
                    forecast,
                    daily,
                }
            },
            Err(e) => {
                warn!(error = %e, "Forecast lookup failed");
                LookupOutcome::ForecastFailed {
                    current,
                    error: LookupError::from_forecast_stage(&e),
                }
            },
        }
    }

    /// Run a full cycle against the shared view
    ///
    /// Each stage's result is stored as soon as it arrives. If a newer cycle
    /// starts while this one waits, its results are dropped and the forecast
    /// request is skipped. Returns whether the cycle ran to completion as the
    /// newest one.
    #[instrument(skip(self, view), fields(city = %query.city, unit = %query.unit))]
    pub async fn run_cycle(&self, view: &WeatherView, query: LocationQuery) -> bool {
        let ticket = view.begin_cycle(query.clone());

        let current = self
            .weather_port
            .current_weather(&query.city, query.unit)
            .await
            .map_err(|e| LookupError::from_current_stage(&e));

        let coordinates = current.as_ref().ok().map(|c| c.coordinates);
        if !view.apply_current(&ticket, current) {
            debug!(cycle_id = %ticket.cycle_id(), "Cycle superseded before forecast");
            return false;
        }
        let Some(coordinates) = coordinates else {
            return true;
        };

        let forecast = self
            .weather_port
            .forecast(&coordinates, query.unit)
            .await
            .map_err(|e| LookupError::from_forecast_stage(&e));

        view.apply_forecast(&ticket, forecast)
    }
}

//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current weather by city name and the 5-day / 3-hour forecast
//! by coordinates. Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, OpenWeatherConfig, WeatherClient, WeatherError};
pub use models::{
    Coordinates, CurrentWeatherResponse, ForecastCity, ForecastItem, ForecastReadings,
    ForecastResponse, MainReadings, WeatherDescription, Wind,
};

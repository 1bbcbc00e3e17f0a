//! Current weather entity

use serde::{Deserialize, Serialize};

use super::Condition;
use crate::value_objects::{GeoLocation, UnitSystem};

/// Current conditions for a city, in the unit system of the query that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// City name as resolved by the provider
    pub city_name: String,
    /// Coordinates used for the dependent forecast request
    pub coordinates: GeoLocation,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    pub wind_speed: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    pub condition: Condition,
    pub unit: UnitSystem,
}

impl CurrentWeather {
    /// One-line summary of current conditions
    #[must_use]
    pub fn summary(&self) -> String {
        let symbol = self.unit.temperature_symbol();
        format!(
            "{}: {:.1}{symbol} {} (feels like {:.1}{symbol}), humidity {}%, wind {:.1} {}",
            self.city_name,
            self.temperature,
            self.condition.description,
            self.feels_like,
            self.humidity,
            self.wind_speed,
            self.unit.wind_speed_unit()
        )
    }
}

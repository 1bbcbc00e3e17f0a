//! OpenWeatherMap wire models
//!
//! Only the fields the client consumes are modelled; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Response of `GET /weather?q=...`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    /// City name as resolved by the provider
    pub name: String,
    pub coord: Coordinates,
    pub main: MainReadings,
    pub wind: Wind,
    /// Condition list, the first entry is the primary condition
    #[serde(default)]
    pub weather: Vec<WeatherDescription>,
}

impl CurrentWeatherResponse {
    #[must_use]
    pub fn primary_condition(&self) -> Option<&WeatherDescription> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// hPa
    pub pressure: f64,
    /// Percent
    pub humidity: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    #[serde(default)]
    pub deg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherDescription {
    pub id: u32,
    /// Condition group, e.g. `Clouds`
    pub main: String,
    pub description: String,
    /// Icon identifier, e.g. `04d`
    pub icon: String,
}

/// Response of `GET /forecast?lat=...&lon=...`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// 3-hourly samples in ascending order
    pub list: Vec<ForecastItem>,
    #[serde(default)]
    pub city: Option<ForecastCity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastItem {
    /// Unix timestamp (UTC)
    pub dt: i64,
    /// `"YYYY-MM-DD HH:MM:SS"`
    pub dt_txt: String,
    pub main: ForecastReadings,
    #[serde(default)]
    pub weather: Vec<WeatherDescription>,
}

impl ForecastItem {
    #[must_use]
    pub fn primary_condition(&self) -> Option<&WeatherDescription> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReadings {
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastCity {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// Error body returned with non-2xx statuses, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_weather_payload() {
        let json = r#"{
            "coord": {"lon": 139.69, "lat": 35.68},
            "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
            "base": "stations",
            "main": {"temp": 12.3, "feels_like": 10.9, "temp_min": 10.0, "temp_max": 14.2,
                     "pressure": 1016, "humidity": 60},
            "wind": {"speed": 3.6, "deg": 340},
            "name": "Tokyo",
            "cod": 200
        }"#;

        let parsed: CurrentWeatherResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name, "Tokyo");
        assert!((parsed.coord.lat - 35.68).abs() < f64::EPSILON);
        assert_eq!(parsed.main.humidity, 60);
        assert_eq!(parsed.primary_condition().map(|w| w.icon.as_str()), Some("04d"));
    }

    #[test]
    fn missing_condition_list_is_empty() {
        let json = r#"{
            "coord": {"lon": 2.35, "lat": 48.85},
            "main": {"temp": 1, "feels_like": 1, "temp_min": 1, "temp_max": 1,
                     "pressure": 1000, "humidity": 90},
            "wind": {"speed": 1},
            "name": "Paris"
        }"#;

        let parsed: CurrentWeatherResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.primary_condition().is_none());
        assert!(parsed.wind.deg.is_none());
    }

    #[test]
    fn parses_forecast_payload() {
        let json = r#"{
            "cod": "200",
            "cnt": 1,
            "list": [{
                "dt": 1704067200,
                "dt_txt": "2024-01-01 00:00:00",
                "main": {"temp": 5.0, "temp_min": 3.1, "temp_max": 6.2, "humidity": 70},
                "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10n"}]
            }],
            "city": {"name": "Tokyo", "country": "JP"}
        }"#;

        let parsed: ForecastResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.list.len(), 1);
        assert_eq!(parsed.list[0].dt_txt, "2024-01-01 00:00:00");
        assert_eq!(
            parsed.list[0].primary_condition().map(|w| w.description.as_str()),
            Some("light rain")
        );
        assert_eq!(parsed.city.map(|c| c.name), Some("Tokyo".to_string()));
    }

    #[test]
    fn parses_error_body_with_string_or_numeric_code() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"cod":"404","message":"city not found"}"#).unwrap();
        assert_eq!(body.message, "city not found");

        let body: ApiErrorBody =
            serde_json::from_str(r#"{"cod":401,"message":"Invalid API key"}"#).unwrap();
        assert_eq!(body.message, "Invalid API key");
    }
}

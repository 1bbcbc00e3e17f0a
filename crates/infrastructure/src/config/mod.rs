//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: OpenWeatherMap endpoint, key, timeout
//! - `search`: default query and suggestion candidates
//! - `logging`: log filter and output format
//!
//! Sources, later ones winning: built-in defaults, an optional TOML file,
//! then `SKYCAST_*` environment variables with `__` between nested keys
//! (e.g. `SKYCAST_WEATHER__API_KEY`).

mod integrations;
mod logging;
mod search;

use std::path::Path;

use domain::CityName;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use integrations::WeatherAppConfig;
pub use logging::{LogFormat, TelemetryAppConfig};
pub use search::SearchConfig;

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "skycast";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SKYCAST";

/// Longest accepted request timeout
const MAX_TIMEOUT_SECS: u64 = 300;

/// Semantic problems in an otherwise well-formed configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("weather.base_url must be an http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("weather.timeout_secs must be between 1 and 300, got {0}")]
    InvalidTimeout(u64),

    #[error("search.cities must not be empty")]
    NoCandidateCities,

    #[error("search.default_city must not be empty")]
    EmptyDefaultCity,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Search defaults and suggestion candidates
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from `skycast.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
            Self::env_source(),
        )
    }

    /// Load configuration from an explicit file and the environment
    ///
    /// The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true), Self::env_source())
    }

    fn env_source() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("search.cities")
            .try_parsing(true)
    }

    fn build<F>(file: F, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        debug!(
            base_url = %app_config.weather.base_url,
            api_key_set = app_config.weather.api_key().is_some(),
            default_city = %app_config.search.default_city,
            "Configuration loaded"
        );
        Ok(app_config)
    }

    /// Check values that deserialize fine but cannot work
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let base_url = self.weather.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(base_url.to_string()));
        }

        if self.weather.timeout_secs == 0 || self.weather.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError::InvalidTimeout(
                self.weather.timeout_secs,
            ));
        }

        if self.search.cities.iter().all(|c| c.trim().is_empty()) {
            return Err(ConfigValidationError::NoCandidateCities);
        }

        if CityName::new(&self.search.default_city).is_err() {
            return Err(ConfigValidationError::EmptyDefaultCity);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UnitSystem;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::env_source().source(Some(map))
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn load_with(file: Option<&Path>, vars: &[(&str, &str)]) -> AppConfig {
        match file {
            Some(path) => AppConfig::build(config::File::from(path), env(vars)),
            None => AppConfig::build(
                config::File::with_name("does-not-exist").required(false),
                env(vars),
            ),
        }
        .unwrap()
    }

    #[test]
    fn defaults_when_nothing_is_configured() {
        let config = load_with(None, &[]);
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.weather.timeout_secs, 30);
        assert!(config.weather.api_key().is_none());
        assert_eq!(config.search.default_city, "New Delhi");
        assert_eq!(config.search.default_unit, UnitSystem::Metric);
        assert_eq!(config.search.cities.len(), 5);
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = toml_file(
            r#"
            [weather]
            base_url = "http://localhost:8080/data/2.5"
            timeout_secs = 10

            [search]
            default_city = "Tokyo"
            default_unit = "imperial"
            cities = ["Tokyo", "Toronto"]

            [telemetry]
            log_filter = "debug"
            log_format = "json"
            "#,
        );

        let config = load_with(Some(file.path()), &[]);
        assert_eq!(config.weather.base_url, "http://localhost:8080/data/2.5");
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.search.default_city, "Tokyo");
        assert_eq!(config.search.default_unit, UnitSystem::Imperial);
        assert_eq!(config.search.cities, ["Tokyo", "Toronto"]);
        assert_eq!(config.telemetry.log_filter, "debug");
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file(
            r#"
            [weather]
            timeout_secs = 10
            "#,
        );

        let config = load_with(
            Some(file.path()),
            &[
                ("SKYCAST_WEATHER__API_KEY", "from-env"),
                ("SKYCAST_WEATHER__TIMEOUT_SECS", "45"),
                ("SKYCAST_SEARCH__DEFAULT_CITY", "Paris"),
            ],
        );
        assert_eq!(config.weather.api_key(), Some("from-env"));
        assert_eq!(config.weather.timeout_secs, 45);
        assert_eq!(config.search.default_city, "Paris");
    }

    #[test]
    fn environment_city_list_is_comma_separated() {
        let config = load_with(None, &[("SKYCAST_SEARCH__CITIES", "Lima,London")]);
        assert_eq!(config.search.cities, ["Lima", "London"]);
    }

    #[test]
    fn load_from_missing_path_fails() {
        let result = AppConfig::load_from_path(Path::new("/nonexistent/skycast.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_from_path_reads_file() {
        let file = toml_file(
            r#"
            [search]
            default_city = "London"
            "#,
        );
        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.search.default_city, "London");
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let mut config = AppConfig::default();
        config.weather.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn validate_rejects_bad_timeouts() {
        let mut config = AppConfig::default();
        config.weather.timeout_secs = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout(0)));

        config.weather.timeout_secs = 301;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout(301)));

        config.weather.timeout_secs = 300;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_city_list() {
        let mut config = AppConfig::default();
        config.search.cities = vec![" ".to_string()];
        assert_eq!(config.validate(), Err(ConfigValidationError::NoCandidateCities));
    }

    #[test]
    fn validate_rejects_blank_default_city() {
        let mut config = AppConfig::default();
        config.search.default_city = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyDefaultCity));
    }

    #[test]
    fn serialization_skips_api_key() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some(secrecy::SecretString::from("hidden"));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("hidden"));
    }
}

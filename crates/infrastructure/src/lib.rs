//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the OpenWeatherMap adapter, configuration loading, and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, ConfigValidationError, LogFormat, SearchConfig, TelemetryAppConfig,
    WeatherAppConfig,
};
pub use telemetry::{TelemetryError, init_telemetry};

//! Application-level errors

use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The provider does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Transport failure, provider error, or malformed response
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Message without the variant prefix
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::CityNotFound(msg)
            | Self::NetworkFailure(msg)
            | Self::Configuration(msg)
            | Self::Internal(msg) => msg.clone(),
            Self::Domain(err) => err.to_string(),
        }
    }
}

/// Error surfaced to the user for one query cycle
///
/// The kind follows the stage that failed: anything going wrong while
/// fetching the forecast is `ForecastUnavailable`, whatever the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum LookupError {
    #[error("{0}")]
    CityNotFound(String),

    #[error("{0}")]
    ForecastUnavailable(String),

    #[error("{0}")]
    NetworkFailure(String),
}

impl LookupError {
    /// Collapse a failure of the current-weather request
    #[must_use]
    pub fn from_current_stage(err: &ApplicationError) -> Self {
        match err {
            ApplicationError::CityNotFound(msg) => Self::CityNotFound(msg.clone()),
            other => Self::NetworkFailure(other.detail()),
        }
    }

    /// Collapse a failure of the forecast request
    #[must_use]
    pub fn from_forecast_stage(err: &ApplicationError) -> Self {
        Self::ForecastUnavailable(err.detail())
    }

    /// Message as received, for display
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::CityNotFound(msg) | Self::ForecastUnavailable(msg) | Self::NetworkFailure(msg) => {
                msg
            },
        }
    }
}

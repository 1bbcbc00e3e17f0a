//! Forecast sample entity

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Condition;
use crate::errors::DomainError;

/// Wire format of forecast timestamps (`dt_txt`)
pub const FORECAST_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One point of the 3-hourly forecast feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    #[serde(with = "timestamp_text")]
    pub timestamp: NaiveDateTime,
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition: Condition,
}

impl ForecastSample {
    #[must_use]
    pub const fn new(
        timestamp: NaiveDateTime,
        temp_max: f64,
        temp_min: f64,
        condition: Condition,
    ) -> Self {
        Self {
            timestamp,
            temp_max,
            temp_min,
            condition,
        }
    }

    /// Parse a `"YYYY-MM-DD HH:MM:SS"` timestamp
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if the text does not match the format.
    pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, DomainError> {
        NaiveDateTime::parse_from_str(text, FORECAST_TIMESTAMP_FORMAT)
            .map_err(|e| DomainError::InvalidDateTime(format!("{text}: {e}")))
    }

    /// Timestamp rendered back in the wire format
    #[must_use]
    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(FORECAST_TIMESTAMP_FORMAT).to_string()
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    #[must_use]
    pub fn time_of_day(&self) -> NaiveTime {
        self.timestamp.time()
    }

    /// Short weekday label (`Mon`, `Tue`, ...)
    #[must_use]
    pub fn weekday_label(&self) -> String {
        self.timestamp.format("%a").to_string()
    }
}

mod timestamp_text {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use super::FORECAST_TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORECAST_TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, FORECAST_TIMESTAMP_FORMAT).map_err(D::Error::custom)
    }
}

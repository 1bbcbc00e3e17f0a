//! Measurement unit system value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Measurement convention applied to both requests of a query cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, metres per second
    #[default]
    Metric,
    /// Fahrenheit, miles per hour
    Imperial,
}

impl UnitSystem {
    /// The other unit system
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    /// Value of the provider's `units` query parameter
    #[must_use]
    pub const fn as_query_param(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    #[must_use]
    pub const fn temperature_symbol(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Unit the provider reports wind speed in for this system
    #[must_use]
    pub const fn wind_speed_unit(self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_param())
    }
}

impl FromStr for UnitSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "c" | "celsius" => Ok(Self::Metric),
            "imperial" | "f" | "fahrenheit" => Ok(Self::Imperial),
            _ => Err(DomainError::UnknownUnitSystem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_metric() {
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
    }

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(UnitSystem::Metric.toggle(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Imperial.toggle(), UnitSystem::Metric);
        assert_eq!(UnitSystem::Metric.toggle().toggle(), UnitSystem::Metric);
    }

    #[test]
    fn query_param_values() {
        assert_eq!(UnitSystem::Metric.as_query_param(), "metric");
        assert_eq!(UnitSystem::Imperial.as_query_param(), "imperial");
    }

    #[test]
    fn symbols() {
        assert_eq!(UnitSystem::Metric.temperature_symbol(), "°C");
        assert_eq!(UnitSystem::Imperial.temperature_symbol(), "°F");
        assert_eq!(UnitSystem::Metric.wind_speed_unit(), "m/s");
        assert_eq!(UnitSystem::Imperial.wind_speed_unit(), "mph");
    }

    #[test]
    fn from_str_accepts_aliases() {
        assert_eq!("metric".parse::<UnitSystem>().ok(), Some(UnitSystem::Metric));
        assert_eq!("C".parse::<UnitSystem>().ok(), Some(UnitSystem::Metric));
        assert_eq!(
            "Imperial".parse::<UnitSystem>().ok(),
            Some(UnitSystem::Imperial)
        );
        assert_eq!("f".parse::<UnitSystem>().ok(), Some(UnitSystem::Imperial));
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!(matches!(
            "kelvin".parse::<UnitSystem>(),
            Err(DomainError::UnknownUnitSystem(_))
        ));
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&UnitSystem::Imperial).expect("serialize");
        assert_eq!(json, "\"imperial\"");
        let parsed: UnitSystem = serde_json::from_str("\"metric\"").expect("deserialize");
        assert_eq!(parsed, UnitSystem::Metric);
    }
}

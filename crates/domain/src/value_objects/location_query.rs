//! Location query value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CityName, UnitSystem};

/// What the user asked for: a city and the unit system to report in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationQuery {
    pub city: CityName,
    pub unit: UnitSystem,
}

impl LocationQuery {
    #[must_use]
    pub const fn new(city: CityName, unit: UnitSystem) -> Self {
        Self { city, unit }
    }

    /// Same city, other unit system
    #[must_use]
    pub fn with_toggled_unit(&self) -> Self {
        Self {
            city: self.city.clone(),
            unit: self.unit.toggle(),
        }
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.city, self.unit)
    }
}

//! City search configuration

use domain::{DEFAULT_CITIES, UnitSystem};
use serde::{Deserialize, Serialize};

/// Startup query and suggestion candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// City looked up when no city is given
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Unit system used until toggled
    #[serde(default)]
    pub default_unit: UnitSystem,

    /// Candidates offered as suggestions, in display order
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
}

fn default_city() -> String {
    "New Delhi".to_string()
}

fn default_cities() -> Vec<String> {
    DEFAULT_CITIES.iter().map(ToString::to_string).collect()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            default_unit: UnitSystem::default(),
            cities: default_cities(),
        }
    }
}

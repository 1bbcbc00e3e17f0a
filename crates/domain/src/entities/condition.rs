//! Weather condition as reported by the provider

use serde::{Deserialize, Serialize};
use std::fmt;

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Human-readable description plus the provider's icon identifier (e.g. `"04d"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon_id: String,
}

impl Condition {
    #[must_use]
    pub fn new(description: impl Into<String>, icon_id: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            icon_id: icon_id.into(),
        }
    }

    /// Small icon, as used on forecast cards
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}.png", self.icon_id)
    }

    /// Double-resolution icon, as used for current conditions
    #[must_use]
    pub fn icon_url_large(&self) -> String {
        format!("{ICON_BASE_URL}/{}@2x.png", self.icon_id)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

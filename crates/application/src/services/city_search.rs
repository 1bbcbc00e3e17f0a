//! City search input with a suggestion dropdown

use domain::{CityName, DomainError, suggest};

/// State of the search box and its suggestion list
///
/// Typing refilters the candidates and shows the list only for a non-empty
/// term. Focusing the input shows the list as last filtered. Picking a
/// suggestion fills the input and hides the list.
#[derive(Debug, Clone)]
pub struct CitySearch {
    cities: Vec<String>,
    input: String,
    filtered: Vec<String>,
    visible: bool,
}

impl CitySearch {
    /// Start with `initial` in the input and the list hidden
    #[must_use]
    pub fn new(cities: Vec<String>, initial: impl Into<String>) -> Self {
        Self {
            cities,
            input: initial.into(),
            filtered: Vec::new(),
            visible: false,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Replace the input text and refilter
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.filtered = suggest(&self.cities, &self.input);
        self.visible = !self.input.is_empty();
    }

    pub fn focus(&mut self) {
        self.visible = true;
    }

    pub fn blur(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Suggestions to show, empty while the list is hidden
    #[must_use]
    pub fn visible_suggestions(&self) -> &[String] {
        if self.visible { &self.filtered } else { &[] }
    }

    /// Pick a city from the list; returns the name to look up
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if `city` is blank.
    pub fn select(&mut self, city: &str) -> Result<CityName, DomainError> {
        let name = CityName::new(city)?;
        self.input = name.as_str().to_string();
        self.visible = false;
        Ok(name)
    }

    /// Submit whatever is in the input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the input is blank.
    pub fn submit(&mut self) -> Result<CityName, DomainError> {
        self.visible = false;
        CityName::new(&self.input)
    }
}

//! City suggestion filter

/// Cities offered when no list is configured
pub const DEFAULT_CITIES: [&str; 5] = ["New York", "New Delhi", "Tokyo", "Paris", "London"];

/// Candidates starting with `prefix`, ignoring case, in candidate order
///
/// An empty prefix matches every candidate. Whether suggestions are shown
/// for an empty input is decided by the caller.
#[must_use]
pub fn suggest<S: AsRef<str>>(cities: &[S], prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    cities
        .iter()
        .map(AsRef::as_ref)
        .filter(|city| city.to_lowercase().starts_with(&prefix))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_prefix_keeps_order() {
        assert_eq!(
            suggest(&DEFAULT_CITIES, "New"),
            vec!["New York".to_string(), "New Delhi".to_string()]
        );
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(suggest(&DEFAULT_CITIES, "new d"), vec!["New Delhi".to_string()]);
        assert_eq!(suggest(&DEFAULT_CITIES, "TOK"), vec!["Tokyo".to_string()]);
    }

    #[test]
    fn prefix_only_not_substring() {
        assert!(suggest(&DEFAULT_CITIES, "york").is_empty());
        assert!(suggest(&DEFAULT_CITIES, "Berlin").is_empty());
    }

    #[test]
    fn empty_prefix_matches_all() {
        assert_eq!(suggest(&DEFAULT_CITIES, "").len(), DEFAULT_CITIES.len());
    }

    #[test]
    fn works_with_owned_lists() {
        let cities = vec!["Lima".to_string(), "London".to_string(), "Lisbon".to_string()];
        assert_eq!(
            suggest(&cities, "li"),
            vec!["Lima".to_string(), "Lisbon".to_string()]
        );
    }
}

//! Property-based tests for the domain layer
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use domain::{
    CityName, Condition, DEFAULT_CITIES, ForecastSample, GeoLocation, UnitSystem, anchor_time,
    reduce_to_daily, suggest,
};
use proptest::prelude::*;

fn feed(start: NaiveDateTime, step_hours: i64, count: usize) -> Vec<ForecastSample> {
    (0..count)
        .map(|i| {
            let offset = i64::try_from(i).unwrap() * step_hours;
            ForecastSample::new(
                start + Duration::hours(offset),
                25.0,
                15.0,
                Condition::new("scattered clouds", "03d"),
            )
        })
        .collect()
}

fn feed_start() -> impl Strategy<Value = NaiveDateTime> {
    (0u32..365, 0u32..8).prop_map(|(day, slot)| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(slot * 3, 0, 0)
            .unwrap()
            + Duration::days(i64::from(day))
    })
}

// ============================================================================
// Forecast Reduction Property Tests
// ============================================================================

mod forecast_tests {
    use super::*;

    proptest! {
        #[test]
        fn every_kept_sample_shares_the_anchor(
            start in feed_start(),
            count in 1usize..80
        ) {
            let samples = feed(start, 3, count);
            let anchor = anchor_time(&samples).unwrap();
            let daily = reduce_to_daily(&samples);

            prop_assert!(!daily.is_empty());
            prop_assert!(daily.iter().all(|s| s.time_of_day() == anchor));
        }

        #[test]
        fn output_is_at_most_one_per_day(
            start in feed_start(),
            count in 0usize..80
        ) {
            let samples = feed(start, 3, count);
            let daily = reduce_to_daily(&samples);

            prop_assert!(daily.len() <= count.div_ceil(8));
            for pair in daily.windows(2) {
                prop_assert!(pair[0].date() < pair[1].date());
            }
        }

        #[test]
        fn output_is_an_ordered_subsequence(
            start in feed_start(),
            count in 0usize..80
        ) {
            let samples = feed(start, 3, count);
            let daily = reduce_to_daily(&samples);

            let mut remaining = samples.iter();
            for kept in &daily {
                prop_assert!(remaining.any(|s| s == kept));
            }
        }

        #[test]
        fn reduction_is_idempotent(
            start in feed_start(),
            count in 0usize..80
        ) {
            let once = reduce_to_daily(&feed(start, 3, count));
            prop_assert_eq!(reduce_to_daily(&once), once.clone());
        }
    }
}

// ============================================================================
// Suggestion Property Tests
// ============================================================================

mod suggestion_tests {
    use super::*;

    proptest! {
        #[test]
        fn suggestions_start_with_prefix(prefix in "[a-zA-Z ]{0,6}") {
            let lowered = prefix.to_lowercase();
            for city in suggest(&DEFAULT_CITIES, &prefix) {
                prop_assert!(city.to_lowercase().starts_with(&lowered));
            }
        }

        #[test]
        fn suggestions_are_case_insensitive(prefix in "[a-zA-Z]{1,4}") {
            prop_assert_eq!(
                suggest(&DEFAULT_CITIES, &prefix.to_uppercase()),
                suggest(&DEFAULT_CITIES, &prefix.to_lowercase())
            );
        }

        #[test]
        fn every_city_suggests_itself(index in 0usize..5, len in 1usize..4) {
            let city = DEFAULT_CITIES[index];
            let prefix: String = city.chars().take(len).collect();
            let result = suggest(&DEFAULT_CITIES, &prefix);
            prop_assert!(result.iter().any(|c| c == city));
        }
    }
}

// ============================================================================
// Value Object Property Tests
// ============================================================================

mod value_object_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn city_name_is_trimmed(name in "[A-Za-z]{1,12}", pad in " {0,3}") {
            let city = CityName::new(format!("{pad}{name}{pad}")).unwrap();
            prop_assert_eq!(city.as_str(), name.as_str());
        }

        #[test]
        fn whitespace_city_rejected(blank in "[ \t]{0,5}") {
            prop_assert!(CityName::new(blank).is_err());
        }

        #[test]
        fn unit_toggle_is_an_involution(metric in any::<bool>()) {
            let unit = if metric { UnitSystem::Metric } else { UnitSystem::Imperial };
            prop_assert_eq!(unit.toggle().toggle(), unit);
            prop_assert_ne!(unit.toggle(), unit);
        }
    }
}

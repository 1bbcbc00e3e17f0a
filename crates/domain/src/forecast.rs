//! Forecast reduction
//!
//! The provider returns samples every 3 hours. For display we keep one
//! sample per day: every sample whose time-of-day matches the first
//! sample's. There is no aggregation across a day, and the anchor is
//! whatever hour the feed starts at, even an off-cycle one.

use chrono::NaiveTime;

use crate::entities::ForecastSample;

/// Time-of-day of the first sample, or `None` for an empty feed
#[must_use]
pub fn anchor_time(samples: &[ForecastSample]) -> Option<NaiveTime> {
    samples.first().map(ForecastSample::time_of_day)
}

/// Keep the samples sharing the first sample's time-of-day, in input order
///
/// An empty input yields an empty output.
#[must_use]
pub fn reduce_to_daily(samples: &[ForecastSample]) -> Vec<ForecastSample> {
    let Some(anchor) = anchor_time(samples) else {
        return Vec::new();
    };

    samples
        .iter()
        .filter(|sample| sample.time_of_day() == anchor)
        .cloned()
        .collect()
}

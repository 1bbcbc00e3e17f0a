//! View-state container for query cycles
//!
//! Holds the results of the newest query cycle. Every cycle is bound to a
//! [`CycleTicket`]; results arriving with an older ticket are dropped, so a
//! slow response from a superseded search never overwrites a newer one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::{CurrentWeather, ForecastSample, LocationQuery, reduce_to_daily};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::LookupError;
use crate::services::LookupOutcome;

/// Identifies one query cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTicket {
    generation: u64,
    cycle_id: Uuid,
}

impl CycleTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Random id for correlating log lines of one cycle
    #[must_use]
    pub const fn cycle_id(&self) -> Uuid {
        self.cycle_id
    }
}

/// Point-in-time copy of the view state
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewSnapshot {
    pub generation: u64,
    pub query: Option<LocationQuery>,
    pub current: Option<CurrentWeather>,
    pub current_error: Option<LookupError>,
    pub current_loading: bool,
    /// Daily forecast, already reduced
    pub daily: Vec<ForecastSample>,
    pub forecast_error: Option<LookupError>,
    pub forecast_loading: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// What should be shown for a snapshot
#[derive(Debug, Clone, Copy)]
pub enum ViewStatus<'a> {
    /// No cycle has run yet
    Idle,
    Loading,
    CurrentFailed(&'a LookupError),
    ForecastFailed(&'a LookupError),
    Ready {
        current: &'a CurrentWeather,
        daily: &'a [ForecastSample],
    },
}

impl ViewSnapshot {
    /// True while either request of the cycle is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.current_loading || self.forecast_loading
    }

    /// Current-weather error wins over forecast error, which hides the details
    #[must_use]
    pub fn status(&self) -> ViewStatus<'_> {
        if let Some(err) = &self.current_error {
            return ViewStatus::CurrentFailed(err);
        }
        if let Some(err) = &self.forecast_error {
            return ViewStatus::ForecastFailed(err);
        }
        if self.is_loading() {
            return ViewStatus::Loading;
        }
        match &self.current {
            Some(current) => ViewStatus::Ready {
                current,
                daily: &self.daily,
            },
            None => ViewStatus::Idle,
        }
    }
}

/// Shared, cloneable handle to the view state
#[derive(Debug, Clone, Default)]
pub struct WeatherView {
    state: Arc<Mutex<ViewSnapshot>>,
}

impl WeatherView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, superseding any running one
    ///
    /// Clears previous results and marks the current-weather stage as loading.
    pub fn begin_cycle(&self, query: LocationQuery) -> CycleTicket {
        let mut state = self.state.lock();
        let generation = state.generation + 1;
        let ticket = CycleTicket {
            generation,
            cycle_id: Uuid::new_v4(),
        };
        debug!(
            generation = ticket.generation,
            cycle_id = %ticket.cycle_id,
            query = %query,
            "Beginning query cycle"
        );
        *state = ViewSnapshot {
            generation,
            query: Some(query),
            current_loading: true,
            ..ViewSnapshot::default()
        };
        ticket
    }

    /// Whether `ticket` still belongs to the newest cycle
    #[must_use]
    pub fn is_current(&self, ticket: &CycleTicket) -> bool {
        self.state.lock().generation == ticket.generation
    }

    /// Store the current-weather result; returns `false` if the ticket is stale
    ///
    /// On success the forecast stage is marked as loading.
    pub fn apply_current(
        &self,
        ticket: &CycleTicket,
        result: Result<CurrentWeather, LookupError>,
    ) -> bool {
        let mut state = self.state.lock();
        if state.generation != ticket.generation {
            debug!(generation = ticket.generation, "Discarding stale current weather");
            return false;
        }
        state.current_loading = false;
        match result {
            Ok(current) => {
                state.current = Some(current);
                state.forecast_loading = true;
            },
            Err(err) => state.current_error = Some(err),
        }
        state.updated_at = Some(Utc::now());
        true
    }

    /// Store the forecast result, reduced to one sample per day
    ///
    /// Returns `false` if the ticket is stale.
    pub fn apply_forecast(
        &self,
        ticket: &CycleTicket,
        result: Result<Vec<ForecastSample>, LookupError>,
    ) -> bool {
        let mut state = self.state.lock();
        if state.generation != ticket.generation {
            debug!(generation = ticket.generation, "Discarding stale forecast");
            return false;
        }
        state.forecast_loading = false;
        match result {
            Ok(samples) => state.daily = reduce_to_daily(&samples),
            Err(err) => state.forecast_error = Some(err),
        }
        state.updated_at = Some(Utc::now());
        true
    }

    /// Store a whole cycle's outcome at once
    pub fn apply_outcome(&self, ticket: &CycleTicket, outcome: LookupOutcome) -> bool {
        match outcome {
            LookupOutcome::Complete {
                current, forecast, ..
            } => {
                self.apply_current(ticket, Ok(current)) && self.apply_forecast(ticket, Ok(forecast))
            },
            LookupOutcome::CurrentFailed(err) => self.apply_current(ticket, Err(err)),
            LookupOutcome::ForecastFailed { current, error } => {
                self.apply_current(ticket, Ok(current)) && self.apply_forecast(ticket, Err(error))
            },
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.lock().clone()
    }
}

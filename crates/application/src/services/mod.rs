//! Application services - Use case implementations

mod city_search;
mod weather_lookup_service;
mod weather_view;

pub use city_search::CitySearch;
pub use weather_lookup_service::{LookupOutcome, WeatherLookupService};
pub use weather_view::{CycleTicket, ViewSnapshot, ViewStatus, WeatherView};

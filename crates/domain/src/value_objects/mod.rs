//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod geo_location;
mod location_query;
mod unit_system;

pub use city_name::CityName;
pub use geo_location::GeoLocation;
pub use location_query::LocationQuery;
pub use unit_system::UnitSystem;

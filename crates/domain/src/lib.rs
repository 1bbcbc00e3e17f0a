//! Domain layer for Skycast
//!
//! Contains the weather entities, value objects, and the pure logic that
//! works on them: forecast reduction and city suggestions.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod forecast;
pub mod suggestions;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use forecast::{anchor_time, reduce_to_daily};
pub use suggestions::{DEFAULT_CITIES, suggest};
pub use value_objects::*;

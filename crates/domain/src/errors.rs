//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Coordinates outside of the valid range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Unknown unit system name
    #[error("Unknown unit system: {0}")]
    UnknownUnitSystem(String),
}

//! Application layer - Use cases and orchestration
//!
//! Contains the weather port, the query-cycle orchestration, and the
//! view-state container the front end renders from.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, LookupError};
pub use ports::*;
pub use services::*;

//! Logging initialization
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a `fmt`
//! layer on stderr, so stdout stays free for command output.

mod subscriber;

pub use subscriber::{TelemetryError, build_env_filter, init_telemetry};

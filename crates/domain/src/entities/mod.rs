//! Domain entities - Weather records produced by one query cycle

mod condition;
mod current_weather;
mod forecast_sample;

pub use condition::Condition;
pub use current_weather::CurrentWeather;
pub use forecast_sample::{FORECAST_TIMESTAMP_FORMAT, ForecastSample};

//! Terminal rendering of lookup results

use std::fmt::Write as _;

use application::{LookupError, LookupOutcome, ViewSnapshot, ViewStatus};
use domain::{CurrentWeather, ForecastSample};

#[allow(clippy::cast_possible_truncation)]
fn rounded(value: f64) -> i64 {
    value.round() as i64
}

/// Render the view state, error first, then loading, then details
pub fn render_snapshot(snapshot: &ViewSnapshot) -> String {
    match snapshot.status() {
        ViewStatus::Idle => "No search yet.".to_string(),
        ViewStatus::Loading => match &snapshot.query {
            Some(query) => format!("Loading weather for {query}..."),
            None => "Loading...".to_string(),
        },
        ViewStatus::CurrentFailed(err) | ViewStatus::ForecastFailed(err) => render_error(err),
        ViewStatus::Ready { current, daily } => render_details(current, daily),
    }
}

/// Render a one-shot outcome with the same precedence as the view
pub fn render_outcome(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Complete { current, daily, .. } => render_details(current, daily),
        LookupOutcome::CurrentFailed(err) | LookupOutcome::ForecastFailed { error: err, .. } => {
            render_error(err)
        },
    }
}

pub fn render_error(err: &LookupError) -> String {
    format!("Error: {err}")
}

fn render_details(current: &CurrentWeather, daily: &[ForecastSample]) -> String {
    let mut out = render_current(current);
    if !daily.is_empty() {
        out.push('\n');
        out.push_str(&render_daily(daily, current.unit.temperature_symbol()));
    }
    out
}

pub fn render_current(current: &CurrentWeather) -> String {
    let temp = current.unit.temperature_symbol();
    let mut out = String::new();
    let _ = writeln!(out, "{}", current.city_name);
    let _ = writeln!(out, "  {}", current.condition.icon_url_large());
    let _ = writeln!(
        out,
        "  {:.1}{temp}  {}",
        current.temperature, current.condition.description
    );
    let _ = writeln!(out, "  Feels like: {:.1}{temp}", current.feels_like);
    let _ = writeln!(
        out,
        "  Max/Min:    {:.1}{temp} / {:.1}{temp}",
        current.temp_max, current.temp_min
    );
    let _ = writeln!(out, "  Humidity:   {}%", current.humidity);
    let _ = writeln!(
        out,
        "  Wind:       {:.1} {}",
        current.wind_speed,
        current.unit.wind_speed_unit()
    );
    let _ = write!(out, "  Pressure:   {:.0} hPa", current.pressure);
    out
}

/// One line per day: weekday, icon, description, rounded max / min
pub fn render_daily(daily: &[ForecastSample], symbol: &str) -> String {
    daily
        .iter()
        .map(|sample| {
            format!(
                "  {}  {:>4}{symbol} / {:>4}{symbol}  {}  {}",
                sample.weekday_label(),
                rounded(sample.temp_max),
                rounded(sample.temp_min),
                sample.condition.description,
                sample.condition.icon_url(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered suggestion list, as picked with `:pick N`
pub fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return "No matching cities.".to_string();
    }
    suggestions
        .iter()
        .enumerate()
        .map(|(i, city)| format!("  {}. {city}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON for `--json`
pub fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"))
}

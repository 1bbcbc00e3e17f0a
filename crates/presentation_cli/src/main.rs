//! Skycast CLI
//!
//! Current weather and a five-day outlook from OpenWeatherMap.

#![allow(clippy::print_stdout)]

mod render;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{CitySearch, WeatherLookupService};
use clap::{Parser, Subcommand};
use domain::{CityName, LocationQuery, UnitSystem, suggest};
use infrastructure::{AppConfig, WeatherAdapter, init_telemetry};
use tracing::debug;

/// Skycast CLI
#[derive(Debug, Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Weather lookup for the terminal", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./skycast.toml if present)
    #[arg(short, long, global = true, env = "SKYCAST_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Defaults to an interactive session
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up current weather and the daily forecast for a city
    ///
    /// Example: skycast weather Tokyo --unit imperial
    Weather {
        /// City name (default: search.default_city)
        city: Option<String>,

        /// metric or imperial (default: search.default_unit)
        #[arg(short, long)]
        unit: Option<UnitSystem>,
    },

    /// List configured cities starting with a prefix
    Suggest {
        /// Case-insensitive prefix
        prefix: String,
    },

    /// Start an interactive session
    Interactive {
        /// City looked up on start (default: search.default_city)
        city: Option<String>,

        /// metric or imperial (default: search.default_unit)
        #[arg(short, long)]
        unit: Option<UnitSystem>,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };
    config.validate()?;
    Ok(config)
}

fn build_service(config: &AppConfig) -> anyhow::Result<Arc<WeatherLookupService>> {
    let adapter = WeatherAdapter::from_app_config(&config.weather)?;
    debug!(?adapter, "Weather adapter ready");
    Ok(Arc::new(WeatherLookupService::new(Arc::new(adapter))))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref())?;
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_telemetry(&config.telemetry)?;

    match cli.command {
        Some(Commands::Suggest { prefix }) => {
            let matches = suggest(&config.search.cities, &prefix);
            if cli.json {
                println!("{}", render::to_json(&matches));
            } else {
                println!("{}", render::render_suggestions(&matches));
            }
        },

        Some(Commands::Weather { city, unit }) => {
            let city = CityName::new(city.as_deref().unwrap_or(&config.search.default_city))?;
            let query = LocationQuery::new(city, unit.unwrap_or(config.search.default_unit));
            let service = build_service(&config)?;

            let outcome = service.fetch_weather(&query).await;
            if cli.json {
                println!("{}", render::to_json(&outcome));
            } else {
                println!("{}", render::render_outcome(&outcome));
            }

            if outcome.error().is_some() {
                std::process::exit(1);
            }
        },

        Some(Commands::Interactive { city, unit }) => {
            run_interactive(&config, city, unit, cli.json).await?;
        },

        None => run_interactive(&config, None, None, cli.json).await?,
    }

    Ok(())
}

async fn run_interactive(
    config: &AppConfig,
    city: Option<String>,
    unit: Option<UnitSystem>,
    json: bool,
) -> anyhow::Result<()> {
    let service = build_service(config)?;
    let search = CitySearch::new(
        config.search.cities.clone(),
        city.unwrap_or_else(|| config.search.default_city.clone()),
    );
    let unit = unit.unwrap_or(config.search.default_unit);

    session::Session::new(service, search, unit, json).run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn weather_parses_unit() {
        let cli = Cli::try_parse_from(["skycast", "weather", "Tokyo", "--unit", "imperial"]).unwrap();
        match cli.command {
            Some(Commands::Weather { city, unit }) => {
                assert_eq!(city.as_deref(), Some("Tokyo"));
                assert_eq!(unit, Some(UnitSystem::Imperial));
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["skycast"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn load_config_rejects_missing_file() {
        let path = PathBuf::from("/nonexistent/skycast.toml");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn build_service_requires_api_key() {
        let err = build_service(&AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }
}

//! Interactive weather session
//!
//! Reads one command per line from stdin. Plain text looks a city up;
//! lines starting with `?` or `:` drive the suggestion list and settings.
//! Each lookup runs as its own task. Starting a new one aborts the previous
//! task, and the view drops anything the aborted cycle might still deliver.

use std::sync::Arc;

use application::{CitySearch, WeatherLookupService, WeatherView};
use domain::{CityName, LocationQuery, UnitSystem};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::render;

pub const HELP: &str = "\
Commands:
  <city>       look up a city
  ?<text>      filter the city suggestions
  :list        show the suggestion list
  :pick <n>    look up suggestion number n
  :unit        toggle metric/imperial and repeat the last lookup
  :show        print the current result again
  :help        show this help
  :quit        leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Filter(String),
    List,
    Pick(usize),
    ToggleUnit,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if let Some(text) = line.strip_prefix('?') {
            return Self::Filter(text.trim().to_string());
        }
        let Some(command) = line.strip_prefix(':') else {
            return Self::Search(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("list"), None) => Self::List,
            (Some("pick"), Some(n)) => n
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map_or_else(|| Self::Unknown(line.to_string()), Self::Pick),
            (Some("unit"), None) => Self::ToggleUnit,
            (Some("show"), None) => Self::Show,
            (Some("help"), None) => Self::Help,
            (Some("quit" | "q" | "exit"), None) => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Whether the input loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub struct Session {
    service: Arc<WeatherLookupService>,
    view: WeatherView,
    search: CitySearch,
    unit: UnitSystem,
    last_city: Option<CityName>,
    in_flight: Option<JoinHandle<()>>,
    json: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("unit", &self.unit)
            .field("last_city", &self.last_city)
            .field("json", &self.json)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(
        service: Arc<WeatherLookupService>,
        search: CitySearch,
        unit: UnitSystem,
        json: bool,
    ) -> Self {
        Self {
            service,
            view: WeatherView::new(),
            search,
            unit,
            last_city: None,
            in_flight: None,
            json,
        }
    }

    pub const fn view(&self) -> &WeatherView {
        &self.view
    }

    pub const fn unit(&self) -> UnitSystem {
        self.unit
    }

    /// Look up the city in the search box, then read commands until EOF or `:quit`
    pub async fn run(mut self) -> anyhow::Result<()> {
        println!("{HELP}\n");
        match self.search.submit() {
            Ok(city) => self.lookup(city),
            Err(e) => println!("{e}"),
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if self.handle(SessionCommand::parse(&line)) == Step::Quit {
                break;
            }
        }

        self.wait_idle().await;
        Ok(())
    }

    pub fn handle(&mut self, command: SessionCommand) -> Step {
        debug!(?command, "Session command");
        match command {
            SessionCommand::Search(text) => {
                self.search.type_text(text);
                match self.search.submit() {
                    Ok(city) => self.lookup(city),
                    Err(e) => println!("{e}"),
                }
            },
            SessionCommand::Filter(text) => {
                self.search.type_text(text);
                self.print_suggestions();
            },
            SessionCommand::List => {
                self.search.focus();
                self.print_suggestions();
            },
            SessionCommand::Pick(n) => {
                let picked = n
                    .checked_sub(1)
                    .and_then(|i| self.search.visible_suggestions().get(i).cloned());
                match picked.map(|city| self.search.select(&city)) {
                    Some(Ok(city)) => self.lookup(city),
                    Some(Err(e)) => println!("{e}"),
                    None => println!("No suggestion number {n}."),
                }
            },
            SessionCommand::ToggleUnit => {
                self.unit = self.unit.toggle();
                println!("Units: {}", self.unit());
                if let Some(city) = self.last_city.clone() {
                    self.lookup(city);
                }
            },
            SessionCommand::Show => self.print_view(),
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Quit => return Step::Quit,
            SessionCommand::Empty => {},
            SessionCommand::Unknown(line) => println!("Unknown command: {line} (try :help)"),
        }
        Step::Continue
    }

    /// Start a cycle for `city`, superseding the running one
    fn lookup(&mut self, city: CityName) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let query = LocationQuery::new(city.clone(), self.unit);
        self.last_city = Some(city);
        info!(query = %query, "Starting lookup");

        let service = Arc::clone(&self.service);
        let view = self.view.clone();
        let json = self.json;
        self.in_flight = Some(tokio::spawn(async move {
            if service.run_cycle(&view, query).await {
                print_snapshot(&view, json);
            }
        }));
    }

    /// Wait for the running lookup, if any
    pub async fn wait_idle(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if let Err(e) = handle.await {
                debug!(error = %e, "Lookup task ended early");
            }
        }
    }

    fn print_suggestions(&self) {
        if self.search.is_visible() {
            println!("{}", render::render_suggestions(self.search.visible_suggestions()));
        }
    }

    fn print_view(&self) {
        print_snapshot(self.view(), self.json);
    }
}

fn print_snapshot(view: &WeatherView, json: bool) {
    let snapshot = view.snapshot();
    if json {
        println!("{}", render::to_json(&snapshot));
    } else {
        println!("{}\n", render::render_snapshot(&snapshot));
    }
}

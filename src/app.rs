//! Application state management for the Taiwan weather dashboard
//!
//! This module wires keyboard input to location selection, starts fetches and
//! feeds their outcomes into the view state.

use std::sync::Arc;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};

use crate::cli::StartupConfig;
use crate::data::{all_locations, ForecastSource, Location};
use crate::fetch::{FetchOutcome, Fetcher};
use crate::render::build_view;
use crate::state::{Completion, ViewState};

/// Maximum scroll offset of the upcoming list
const MAX_SCROLL: u16 = 100;

/// Main application struct managing state and data
pub struct App {
    /// What the dashboard shows
    pub state: ViewState,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Scroll offset of the upcoming list
    pub upcoming_scroll: u16,
    fetcher: Fetcher,
}

impl App {
    /// Creates a new App that fetches from `source`
    ///
    /// Nothing is fetched until [`App::start`] or a location is selected.
    pub fn new(source: Arc<dyn ForecastSource>, config: &StartupConfig) -> Self {
        Self {
            state: ViewState::new(config.initial_location),
            should_quit: false,
            show_help: false,
            upcoming_scroll: 0,
            fetcher: Fetcher::new(source, config.fetch),
        }
    }

    /// Fetches the initially active location
    pub fn start(&mut self) {
        self.select_location(self.state.active);
    }

    /// Highlights `location` and fetches its forecast
    pub fn select_location(&mut self, location: Location) {
        let request = self.state.begin_fetch(location);
        self.upcoming_scroll = 0;
        self.fetcher.spawn(request, location);
    }

    /// Fetches the active location again
    pub fn refresh(&mut self) {
        self.select_location(self.state.active);
    }

    /// Applies every fetch that has finished since the last call
    pub fn poll_fetches(&mut self) {
        while let Some(outcome) = self.fetcher.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Waits until the latest fetch has been applied
    pub async fn settle(&mut self) {
        while self.state.loading {
            match self.fetcher.recv().await {
                Some(outcome) => {
                    self.apply_outcome(outcome);
                }
                None => break,
            }
        }
    }

    /// Builds the view for a finished fetch and hands it to the view state
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> Completion {
        let FetchOutcome {
            request,
            location,
            result,
        } = outcome;

        let today = Local::now().date_naive();
        let view = result.and_then(|data| {
            build_view(&data, today).inspect_err(|err| {
                tracing::warn!(location = location.id(), error = %err, "forecast could not be rendered");
            })
        });

        let completion = self.state.complete_fetch(request, location, view);
        if completion == Completion::Stale {
            tracing::debug!(
                request = request.0,
                latest = self.state.latest_request().0,
                location = location.id(),
                "discarding stale forecast"
            );
        }
        completion
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `1`-`4`: Select a location by position
    /// - `Left`/`h`, `Right`/`l`: Previous/next location
    /// - `r`: Fetch the active location again
    /// - `Up`/`k`, `Down`/`j`: Scroll the upcoming list
    /// - `?`: Toggle help overlay
    /// - `q` or `Esc`: Quit
    ///
    /// While an error notice is shown only `Enter`, `Esc`, `Space` (dismiss)
    /// and `q` are accepted.
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if self.state.notice.is_some() {
            match key_event.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                    self.state.dismiss_notice();
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                _ => {}
            }
            return;
        }

        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(location) = all_locations().get(index) {
                    self.select_location(*location);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_location(self.state.active.previous());
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.select_location(self.state.active.next());
            }
            KeyCode::Char('r') => {
                self.refresh();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.upcoming_scroll = self.upcoming_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.upcoming_scroll < MAX_SCROLL {
                    self.upcoming_scroll += 1;
                }
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
    }
}

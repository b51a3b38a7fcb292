//! Taiwan weather dashboard - city forecasts in the terminal
//!
//! A terminal UI application that shows the current forecast window for a
//! Taiwanese city with umbrella and clothing advice, plus the upcoming windows.

mod ui;

use std::io;
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use twweather::app::App;
use twweather::cli::{Cli, StartupConfig};
use twweather::data::ForecastClient;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the dashboard plus whichever overlay is open
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    ui::render_dashboard(frame, app);

    if app.show_help {
        ui::render_help_overlay(frame);
    }
    if let Some(notice) = &app.state.notice {
        ui::render_notice(frame, notice);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments before touching the terminal so errors print normally
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    };

    twweather::logging::init(config.log_file.clone())?;
    tracing::info!(location = config.initial_location.id(), "starting");

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Arc::new(ForecastClient::new()), &config);
    app.start();

    // Main event loop
    loop {
        app.poll_fetches();

        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    tracing::info!("exiting");

    Ok(())
}

//! Contact TUI - terminal contact form
//!
//! A Ratatui-based form that validates a name, email address and message and
//! delivers them through the EmailJS REST API.

mod app;
mod config;
mod controller;
mod platform;
mod provider;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use controller::FormController;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use provider::EmailJsClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

/// Writer for log output. The alternate screen owns the terminal, so logs
/// go to a file in the cache directory when one is available.
fn log_writer() -> BoxMakeWriter {
    let file = ProjectDirs::from("io", "contact", "contact-tui").and_then(|dirs| {
        let dir = dirs.cache_dir();
        fs::create_dir_all(dir).ok()?;
        File::options()
            .create(true)
            .append(true)
            .open(dir.join("contact-tui.log"))
            .ok()
    });

    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    // Load and validate configuration once, before the UI starts. A broken
    // config file is reported in the UI unless the environment fills the gap.
    let (config, file_error) = AppConfig::load_or_init();
    let provider_config = config
        .provider_config()
        .map_err(|err| file_error.unwrap_or(err));
    match &provider_config {
        Ok(_) => tracing::info!("EmailJS configured, endpoint {}", config.endpoint()),
        Err(err) => tracing::warn!("EmailJS not configured ({err}); submissions are disabled"),
    }
    let client = EmailJsClient::new(config.endpoint());
    let mut app = App::new(FormController::new(provider_config, Box::new(client)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Event loop. Deliveries run on runtime worker threads, so blocking on
/// terminal input here never stalls a request.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Expire the banner and pick up a finished delivery
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while the banner may be fading or a delivery may
        // finish (16ms = ~60fps)
        let poll_duration = if app.controller.banner.is_some() || app.controller.is_sending() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.request_quit();
                    } else {
                        app.handle_key(key);
                    }
                }
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}

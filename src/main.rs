//! Salami Card - Eid salami card maker for the terminal
//!
//! A Ratatui-based TUI for filling in a bKash number, name, message and two
//! images, previewing the card, exporting it as PNG or PDF and copying a
//! shareable link.

mod app;
mod config;
mod error;
mod export;
mod platform;
mod share;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::CardConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use share::SystemClipboard;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a file to append logs to
const LOG_FILE_ENV: &str = "SALAMI_CARD_LOG";

#[derive(Debug, Parser)]
#[command(name = "salami-card", version, about = "Create and share Eid salami cards")]
struct Cli {
    /// Share link or query string (`?name=..&phone=..&msg=..`) to prefill the card
    link: Option<String>,

    /// Directory that downloaded cards are written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Origin used when building share links
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Persist --output-dir and --base-url to the config file and exit
    #[arg(long)]
    save_config: bool,
}

fn init_logging() -> Result<()> {
    let writer = match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| {
                    format!("failed to open log file {}", PathBuf::from(&path).display())
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        // The TUI owns the terminal, so logs go nowhere unless a file is set
        None => BoxMakeWriter::new(io::sink),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salami_card=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = CardConfig::load()
        .context("failed to load config")?
        .with_overrides(cli.output_dir, cli.base_url);

    if cli.save_config {
        match config.save()? {
            Some(path) => println!("Saved config to {}", path.display()),
            None => println!("No config directory available on this platform"),
        }
        return Ok(());
    }

    let mut app = App::new(&config, cli.link.as_deref(), Box::new(SystemClipboard));
    tracing::info!(output_dir = %app.output_dir().display(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

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

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key).await?;
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}

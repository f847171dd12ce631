//! Photoroll - browse event photo rolls from the terminal

use std::fs::{self, OpenOptions};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use photoroll_tui::app::TuiConfig;
use photoroll_tui::store::EventStore;
use photoroll_tui::App;

#[derive(Parser)]
#[command(name = "photoroll")]
#[command(about = "Browse event photo rolls, with PIN-protected private events", long_about = None)]
#[command(version)]
struct Args {
    /// Config file (defaults to ~/.config/photoroll/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Event store file
    #[arg(long)]
    store: Option<PathBuf>,

    /// Act as this user
    #[arg(long)]
    user: Option<String>,

    /// Write logs here instead of the data directory
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Add a demo private event if the store is empty
    #[arg(long)]
    seed_demo: bool,

    /// Do not ring the bell on a wrong PIN
    #[arg(long)]
    no_haptics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TuiConfig::load_from(path),
        None => TuiConfig::load(),
    };
    if let Some(user) = args.user.clone() {
        config.user = Some(user);
    }
    if let Some(store) = args.store.clone() {
        config.store_path = Some(store);
    }
    if args.no_haptics {
        config.haptics = false;
    }

    // The terminal belongs to the UI, so logs go to a file
    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path)?;
    tracing::info!("Starting Photoroll v{}", env!("CARGO_PKG_VERSION"));

    let store_path = config
        .store_path
        .clone()
        .unwrap_or_else(EventStore::default_path);
    let mut store = EventStore::open(&store_path)
        .with_context(|| format!("failed to open event store {}", store_path.display()))?;

    if args.seed_demo && store.is_empty() {
        store.seed_demo(&config.user_name())?;
        tracing::info!("Seeded demo event");
    }

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_app(App::new(config, store)).await;

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("photoroll")
        .join("photoroll.log")
}

fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive("photoroll=info".parse()?)
                .add_directive("photoroll_tui=info".parse()?)
                .add_directive("photoroll_pin=info".parse()?),
        )
        .init();

    Ok(())
}

/// Main application runner
async fn run_app(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

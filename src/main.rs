// rosterview - Group roster viewer for the mentoring dashboard
//
// Fetches the caller's group roster (mentors with Line IDs, mentees) from the
// dashboard API once and shows it in a terminal interface.
//
// Architecture:
// - Roster core: data model, HTTP source, view model and pure view
// - TUI (ratatui): Renders the roster and handles selection and copying
// - Headless: Prints the same view as plain text and exits
// - Logging: tracing, routed to the TUI buffer, stderr or rolling files

mod cli;
mod config;
mod headless;
mod logging;
mod roster;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use roster::{HttpRosterSource, RosterSource};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle CLI commands first (config --show, --reset, --path)
    // If a command was handled, exit early
    if cli::handle_command(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration first to determine TUI vs headless mode
    let mut config = Config::from_env();
    if cli.headless {
        config.enable_tui = false;
    }

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let file_guard = init_tracing(&config, &log_buffer);

    let source = HttpRosterSource::new(&config.base_url, config.session_cookie.clone())?;
    let endpoint = source.url().to_string();
    tracing::debug!(endpoint = %endpoint, "Roster source ready");
    let source: Arc<dyn RosterSource> = Arc::new(source);

    if config.enable_tui {
        tracing::info!("Starting TUI");
        tui::run_tui(config, log_buffer, source, endpoint).await?;
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        let loaded = headless::run(source, &mut std::io::stdout().lock()).await?;
        if !loaded {
            // exit() skips destructors; flush pending file logs first
            drop(file_guard);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Initialize tracing/logging with conditional output
///
/// In TUI mode logs are captured to the buffer (prevents garbling the display).
/// In headless mode they go to stderr. File logging optionally adds a JSON
/// rolling file on top of either.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("rosterview={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = config
        .enable_tui
        .then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer = (!config.enable_tui)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };

                // Wrap in non-blocking writer (writes happen in background thread)
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                // Fall back to non-file logging
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Mounting the roster view model for the lifetime of the screen

pub mod app;
pub mod clipboard;
pub mod components;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::roster::RosterSource;
use anyhow::{Context, Result};
use app::App;
use clipboard::SystemClipboard;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use theme::Theme;

/// Run the TUI
///
/// Sets up the terminal, mounts the roster panel, runs the event loop and
/// restores the terminal when done.
pub async fn run_tui(
    config: Config,
    log_buffer: LogBuffer,
    source: Arc<dyn RosterSource>,
    endpoint: String,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let theme = Theme::by_name(&config.theme);
    if !theme.name.eq_ignore_ascii_case(&config.theme) {
        tracing::warn!("Unknown theme {:?}, using {}", config.theme, theme.name);
    }

    let mut app = App::new(
        source,
        Box::new(SystemClipboard),
        theme,
        endpoint,
        log_buffer,
    );

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Unmount before restoring so a late outcome never lands
    app.shutdown();

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles keyboard input and timer ticks. The roster fetch runs on its own
/// task; each tick polls the view model for its outcome.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        app.handle_key(key_event);
                    }
                }
            } => {}

            // Periodic tick: settle fetch, expire toast, animate spinner
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

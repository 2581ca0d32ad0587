//! Terminal front end.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, map_key, map_mouse, move_cursor};
pub use ui::{HitMap, draw};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument, warn};

use crate::config::AppConfig;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
///
/// The terminal is restored on every exit path, including panics.
#[instrument(skip_all, fields(mouse = *config.mouse()))]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter(*config.mouse())?;
    install_panic_hook(guard.mouse);

    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(*config.show_hint());
            run_app(&mut terminal, &mut app)
        });
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    guard.finish().context("Failed to restore terminal")?;
    res
}

/// Undoes raw mode, alternate screen and mouse capture.
///
/// Every step runs even when an earlier one fails; the first error is
/// returned.
fn restore_terminal<W: Write>(
    out: &mut W,
    mouse: bool,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let mut first_err = disable_raw().err();
    if mouse && let Err(e) = execute!(out, DisableMouseCapture) {
        first_err.get_or_insert(e);
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen) {
        first_err.get_or_insert(e);
    }
    if let Err(e) = execute!(out, Show) {
        first_err.get_or_insert(e);
    }
    first_err.map_or(Ok(()), Err)
}

/// Restores the terminal before the default panic message is printed.
fn install_panic_hook(mouse: bool) {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal(&mut io::stdout(), mouse, disable_raw_mode);
        original_hook(panic_info);
    }));
}

/// Holds the terminal in raw mode; restores it when dropped.
struct TerminalGuard {
    mouse: bool,
    restored: bool,
}

impl TerminalGuard {
    /// Enables raw mode and the alternate screen, optionally mouse capture.
    ///
    /// The guard exists as soon as raw mode is on, so a later setup
    /// failure still restores the terminal.
    fn enter(mouse: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = Self {
            mouse: false,
            restored: false,
        };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        if mouse {
            execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
            guard.mouse = true;
        }
        Ok(guard)
    }

    /// Restores the terminal and reports the first failure.
    fn finish(mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal(&mut io::stdout(), self.mouse, disable_raw_mode)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = restore_terminal(&mut io::stdout(), self.mouse, disable_raw_mode) {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Draws, announces status changes, then blocks for the next event.
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        let mut hits = HitMap::default();
        terminal.draw(|frame| hits = draw(frame, &*app))?;
        app.set_hits(hits);

        if let Some(text) = app.take_announcement() {
            info!(status = %text, "Status announced");
            execute!(terminal.backend_mut(), SetTitle(&text))?;
        }

        let event = event::read().context("Failed to read terminal event")?;
        app.handle_event(event);

        if *app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}

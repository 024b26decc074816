//! # Terminal UI
//!
//! Owns the terminal for the lifetime of the window.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  loop {                                                  │
//! │      draw(state)                                         │
//! │      poll 250ms ──► key press ──► input::handle_key_event │
//! │                                        │                 │
//! │                          Some(action) ─┴─► dispatch      │
//! │      break when state.should_quit                        │
//! │  }                                                       │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod input;
mod render;

pub use input::handle_key_event;
pub use render::render;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::commands;
use crate::error::AppError;
use crate::state::{AppState, DbState};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the event loop until Close. The terminal is restored on every exit
/// path, including panics.
pub fn run(db: &DbState, state: &mut AppState) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }
    install_panic_hook();

    let result = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(mut terminal) => {
            let result = event_loop(&mut terminal, db, state);
            let _ = terminal.show_cursor();
            result
        }
        Err(err) => Err(err.into()),
    };

    restore_terminal()?;
    info!("Window closed");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    db: &DbState,
    state: &mut AppState,
) -> Result<(), AppError> {
    while !state.should_quit {
        terminal.draw(|frame| render(frame, state))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = handle_key_event(state, key) {
                    commands::dispatch(db, state, action);
                }
            }
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

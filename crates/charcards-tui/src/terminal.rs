//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. The fetch goes through a
//! [`CharacterClient`].

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use charcards_app::{App, AppEvent, Driver, FetchFuture, KeyInput};
use charcards_client::CharacterClient;
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{FutureExt, StreamExt};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui;

/// Interval between ticks when no terminal event arrives.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns the terminal (raw mode, alternate screen) for its whole lifetime and
/// restores it on drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    client: CharacterClient,
    /// Last clicked card, shown in the status bar while it stays selected.
    clicked: Option<u64>,
}

impl TerminalDriver {
    /// Take over the terminal.
    ///
    /// Raw mode is switched back off if the rest of the setup fails.
    pub fn new(client: CharacterClient) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let terminal = undo_on_error(Self::enter_screen, restore_terminal)?;

        Ok(Self { terminal, event_stream: EventStream::new(), client, clicked: None })
    }

    fn enter_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        stdout().execute(EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout()))
    }

    /// Convert a crossterm key event to `KeyInput`.
    ///
    /// Ctrl-C maps to Esc since raw mode swallows the signal.
    fn convert_key(event: KeyEvent) -> Option<KeyInput> {
        if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
            return Some(KeyInput::Esc);
        }

        match event.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        Ok(Self::convert_key(key_event).map(AppEvent::Key))
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(Some(AppEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    // Input closed; nothing more will arrive, so quit
                    None => Ok(Some(AppEvent::Key(KeyInput::Esc))),
                    _ => Ok(None),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(TICK_INTERVAL) => Ok(Some(AppEvent::Tick)),
        }
    }

    fn fetch_characters(&mut self) -> FetchFuture {
        let client = self.client.clone();
        async move { client.get_characters().await }.boxed()
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let clicked = self.clicked;
        self.terminal.draw(|frame| {
            ui::render(frame, app, clicked);
        })?;
        Ok(())
    }

    fn card_clicked(&mut self, app: &App, id: u64) -> Result<(), Self::Error> {
        self.clicked = Some(id);
        self.render(app)
    }

    fn stop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leave raw mode and the alternate screen, ignoring failures.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

/// Run `step`, calling `undo` before returning its error.
fn undo_on_error<T>(step: impl FnOnce() -> io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    step().inspect_err(|_| undo())
}

//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and drawing
//! into the frame.

mod cards;
mod message;
mod status;

use charcards_app::{App, View};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Shown while the fetch is in flight.
pub const LOADING_TEXT: &str = "Loading characters...";
/// Prefix of the error view.
pub const ERROR_PREFIX: &str = "Error: ";
/// Shown when the fetch returned no characters.
pub const EMPTY_TEXT: &str = "No characters found.";

/// Render the entire UI.
///
/// `clicked` is the last clicked card id; the status bar notes the click
/// while that card stays selected.
pub fn render(frame: &mut Frame, app: &App, clicked: Option<u64>) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    match app.view() {
        View::Loading => message::render_loading(frame, *main_area),
        View::Error(error) => message::render_error(frame, error, *main_area),
        View::Empty => message::render_empty(frame, *main_area),
        View::Cards { characters, selected } => {
            cards::render(frame, characters, selected, *main_area);
        },
    }
    let clicked = clicked.and_then(|id| app.selected_character().filter(|c| c.id == id));
    status::render(frame, app, clicked, *status_area);
}

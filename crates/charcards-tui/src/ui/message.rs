//! Single-message views
//!
//! Loading, error and empty states share one centered, bordered paragraph.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{EMPTY_TEXT, ERROR_PREFIX, LOADING_TEXT};

/// Render the loading view.
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(LOADING_TEXT, Style::default().fg(Color::Yellow)));
    render_message(frame, line, area);
}

/// Render the error view.
pub fn render_error(frame: &mut Frame, error: &str, area: Rect) {
    let style = Style::default().fg(Color::Red);
    let line = Line::from(vec![Span::styled(ERROR_PREFIX, style), Span::styled(error, style)]);
    render_message(frame, line, area);
}

/// Render the empty-state view.
pub fn render_empty(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(EMPTY_TEXT, Style::default().fg(Color::DarkGray)));
    render_message(frame, line, area);
}

fn render_message(frame: &mut Frame, line: Line<'_>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Characters ");
    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

//! Status bar
//!
//! Displays fetch phase, the last card click, status counts and key hints.

use charcards_app::{App, Phase};
use charcards_client::Character;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const KEY_HINTS: &str = " | arrows: move | enter: click | q: quit";

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, clicked: Option<&Character>, area: Rect) {
    let phase = match app.phase() {
        Phase::Idle => Span::styled("Idle", Style::default().fg(Color::Gray)),
        Phase::Loading => Span::styled("Loading", Style::default().fg(Color::Yellow)),
        Phase::Success => Span::styled(
            "Loaded",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Phase::Error => Span::styled("Failed", Style::default().fg(Color::Red)),
    };

    let stats = app.stats();
    let counts = if stats.total == 0 {
        String::new()
    } else {
        format!(
            " | {} characters | alive {} | dead {} | unknown {}",
            stats.total, stats.alive, stats.dead, stats.unknown
        )
    };

    let click = clicked.map_or_else(String::new, |c| format!(" | clicked #{} {}", c.id, c.name));

    let status_line = Line::from(vec![
        Span::raw(" "),
        phase,
        Span::styled(click, Style::default().fg(Color::Cyan)),
        Span::raw(counts),
        Span::styled(KEY_HINTS, Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}

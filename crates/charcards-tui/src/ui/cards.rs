//! Card grid
//!
//! Lays characters out as a grid of bordered cards in upstream order, left
//! to right then top to bottom. Rows scroll so the selected card stays
//! visible.

use charcards_client::Character;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Preferred card width; columns are derived from it.
const CARD_WIDTH: u16 = 32;
/// Border plus species and image lines.
const CARD_HEIGHT: u16 = 4;

/// Render the card grid.
pub fn render(frame: &mut Frame, characters: &[Character], selected: usize, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let columns = usize::from((area.width / CARD_WIDTH).max(1));
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let card_width = area.width / columns as u16;

    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let first = first_row * columns;
    let last = characters.len().min(first + visible_rows * columns);

    for (index, character) in characters.iter().enumerate().take(last).skip(first) {
        let row = (index / columns - first_row) as u16;
        let column = (index % columns) as u16;
        let rect = Rect::new(
            area.x + column * card_width,
            area.y + row * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        )
        .intersection(area);

        render_card(frame, character, index == selected, rect);
    }
}

/// Render one card: name as title, species and image URL as body.
fn render_card(frame: &mut Frame, character: &Character, is_selected: bool, area: Rect) {
    let border_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let label_style = Style::default().fg(Color::DarkGray);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", character.name), border_style))
        .title(Line::from(format!(" #{} ", character.id)).right_aligned());

    let body = vec![
        Line::from(vec![Span::styled("Species: ", label_style), Span::raw(&character.species)]),
        Line::from(vec![Span::styled("Image: ", label_style), Span::raw(&character.image)]),
    ];

    frame.render_widget(Paragraph::new(body).block(block), area);
}

//! Terminal rendering tests.
//!
//! # Test Strategy
//!
//! Each test drives an [`App`] into a state, draws it into a ratatui
//! `TestBackend` and reads the buffer back as text. Checks are on what a user
//! would see: which view is on screen, which cards, in what order.

use charcards_client::{Character, FetchError};
use charcards_tui::{App, AppEvent, KeyInput, ui};
use ratatui::{Terminal, backend::TestBackend};

const WIDTH: u16 = 64;
const HEIGHT: u16 = 24;

fn character(id: u64, name: &str, status: &str) -> Character {
    Character {
        id,
        name: name.into(),
        status: status.into(),
        species: "Human".into(),
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
    }
}

/// Draw the app and return the screen as one string per row.
fn draw(app: &App) -> Vec<String> {
    draw_with_click(app, None)
}

fn draw_with_click(app: &App, clicked: Option<u64>) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::render(frame, app, clicked)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..HEIGHT)
        .map(|y| (0..WIDTH).filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol())).collect())
        .collect()
}

fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}

/// (row, column) of the first occurrence of `needle`, in reading order.
fn position_of(screen: &[String], needle: &str) -> Option<(usize, usize)> {
    screen.iter().enumerate().find_map(|(y, row)| row.find(needle).map(|x| (y, x)))
}

fn mounted() -> App {
    let mut app = App::new();
    let _ = app.mount();
    app
}

#[test]
fn loading_view_shows_only_loading() {
    let screen = draw(&mounted());

    assert!(screen_contains(&screen, ui::LOADING_TEXT));
    assert!(!screen_contains(&screen, ui::EMPTY_TEXT));
    assert!(!screen_contains(&screen, ui::ERROR_PREFIX.trim_end()));
}

#[test]
fn cards_render_in_order_with_species_and_image() {
    let mut app = mounted();
    let _ = app.handle(AppEvent::CharactersLoaded {
        characters: vec![
            character(1, "Rick Sanchez", "Alive"),
            character(2, "Morty Smith", "Alive"),
        ],
    });

    let screen = draw(&app);

    let rick = position_of(&screen, "Rick Sanchez").unwrap();
    let morty = position_of(&screen, "Morty Smith").unwrap();
    assert!(rick < morty, "cards should follow upstream order");
    assert!(screen_contains(&screen, "Species: Human"));
    assert!(screen_contains(&screen, "Image: https://rickandmorty"));
    assert!(screen_contains(&screen, "#1"));
    assert!(!screen_contains(&screen, ui::LOADING_TEXT));
    assert!(!screen_contains(&screen, ui::EMPTY_TEXT));
}

#[test]
fn status_bar_counts_statuses() {
    let mut app = mounted();
    let _ = app.handle(AppEvent::CharactersLoaded {
        characters: vec![
            character(1, "Rick Sanchez", "Alive"),
            character(2, "Birdperson", "Dead"),
            character(3, "Mr. Poopybutthole", "unknown"),
        ],
    });

    let screen = draw(&app);
    let status = &screen[usize::from(HEIGHT) - 1];

    assert!(status.contains("3 characters"), "status bar: {status:?}");
    assert!(status.contains("alive 1"));
    assert!(status.contains("dead 1"));
}

#[test]
fn empty_results_show_empty_state() {
    let mut app = mounted();
    let _ = app.handle(AppEvent::CharactersLoaded { characters: vec![] });

    let screen = draw(&app);

    assert!(screen_contains(&screen, ui::EMPTY_TEXT));
    assert!(!screen_contains(&screen, "Species:"));
}

#[test]
fn error_view_shows_status_code() {
    let mut app = mounted();
    let _ = app.handle(AppEvent::FetchFailed {
        error: FetchError::HttpStatus { status: 500, reason: "Internal Server Error".into() },
    });

    let screen = draw(&app);

    assert!(screen_contains(&screen, "Error:"));
    assert!(screen_contains(&screen, "500"));
    assert!(!screen_contains(&screen, ui::LOADING_TEXT));
}

#[test]
fn selection_scrolls_into_view() {
    let mut app = mounted();
    let characters = (1..=30).map(|id| character(id, &format!("Name{id:02}"), "Alive")).collect();
    let _ = app.handle(AppEvent::CharactersLoaded { characters });
    let _ = app.handle(AppEvent::Key(KeyInput::End));

    let screen = draw(&app);

    assert!(screen_contains(&screen, "Name30"));
    assert!(!screen_contains(&screen, "Name01"));
}

#[test]
fn click_shows_in_status_bar_while_selected() {
    let mut app = mounted();
    let _ = app.handle(AppEvent::CharactersLoaded {
        characters: vec![
            character(1, "Rick Sanchez", "Alive"),
            character(2, "Morty Smith", "Alive"),
        ],
    });
    let _ = app.handle(AppEvent::Key(KeyInput::Right));

    let screen = draw_with_click(&app, Some(2));
    let status = &screen[usize::from(HEIGHT) - 1];
    assert!(status.contains("clicked #2 Morty Smith"), "status bar: {status:?}");

    let _ = app.handle(AppEvent::Key(KeyInput::Left));
    let screen = draw_with_click(&app, Some(2));
    let status = &screen[usize::from(HEIGHT) - 1];
    assert!(!status.contains("clicked"), "status bar: {status:?}");
    assert!(status.contains("2 characters"));
}

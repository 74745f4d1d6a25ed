//! Application state machine.
//!
//! This module defines the [`App`] state machine, which owns the presentation
//! state of the character list completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//! [`AppAction::Render`] is emitted exactly when observable state changed.
//!
//! # Responsibilities
//!
//! - Triggers the character fetch once, on mount.
//! - Stores the collection, the loading flag and the error message.
//! - Picks the view to render from those three fields.
//! - Tracks the selected card.

use charcards_client::{Character, CharacterStats, FetchError};

use crate::{AppAction, AppEvent, KeyInput, Phase, View};

/// Shown when a fetch error has no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error while loading characters";

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies.
#[derive(Debug, Clone)]
pub struct App {
    /// Fetched collection. Empty until a fetch succeeds.
    characters: Vec<Character>,
    /// Fetch in flight.
    loading: bool,
    /// Message of the last failed fetch. `None` if no failure.
    error: Option<String>,
    /// Mount happened; the fetch has been requested.
    mounted: bool,
    /// Index of the highlighted card.
    selected: usize,
}

impl App {
    /// Create an unmounted App.
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            loading: false,
            error: None,
            mounted: false,
            selected: 0,
        }
    }

    /// Mount the App and request the fetch.
    ///
    /// Only the first call has an effect; the fetch is never re-triggered.
    pub fn mount(&mut self) -> Vec<AppAction> {
        if self.mounted {
            return vec![];
        }

        self.mounted = true;
        self.loading = true;
        self.error = None;
        vec![AppAction::FetchCharacters, AppAction::Render]
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            // Frontends lay out against the current frame, so a resize only redraws
            AppEvent::Resize(..) => vec![AppAction::Render],
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::CharactersLoaded { characters } => {
                self.characters = characters;
                self.selected = 0;
                self.loading = false;
                vec![AppAction::Render]
            },
            AppEvent::FetchFailed { error } => {
                self.error = Some(error_message(&error));
                self.loading = false;
                vec![AppAction::Render]
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Esc | KeyInput::Char('q') => vec![AppAction::Quit],
            KeyInput::Enter => self.click_selected(),
            KeyInput::Up | KeyInput::Left => self.select(self.selected.saturating_sub(1)),
            KeyInput::Down | KeyInput::Right => self.select(self.selected.saturating_add(1)),
            KeyInput::Home => self.select(0),
            KeyInput::End => self.select(usize::MAX),
            KeyInput::Char(_) => vec![],
        }
    }

    /// Move the selection, clamped to the collection. Ignored outside the
    /// card view.
    fn select(&mut self, index: usize) -> Vec<AppAction> {
        let View::Cards { characters, .. } = self.view() else {
            return vec![];
        };

        let index = index.min(characters.len() - 1);
        if index == self.selected {
            return vec![];
        }

        self.selected = index;
        vec![AppAction::Render]
    }

    /// Click the selected card. Leaves all state untouched.
    fn click_selected(&self) -> Vec<AppAction> {
        match self.view() {
            View::Cards { characters, selected } => characters
                .get(selected)
                .map(|c| vec![AppAction::CardClicked { id: c.id }])
                .unwrap_or_default(),
            View::Loading | View::Error(_) | View::Empty => vec![],
        }
    }

    /// View to render, chosen in priority order.
    pub fn view(&self) -> View<'_> {
        if self.loading {
            View::Loading
        } else if let Some(message) = &self.error {
            View::Error(message)
        } else if self.characters.is_empty() {
            View::Empty
        } else {
            View::Cards { characters: &self.characters, selected: self.selected }
        }
    }

    /// Lifecycle of the fetch.
    pub fn phase(&self) -> Phase {
        if !self.mounted {
            Phase::Idle
        } else if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Success
        }
    }

    /// Fetch in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the failed fetch. `None` if no failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetched collection, in upstream order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Index of the highlighted card.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Highlighted character. `None` outside the card view.
    pub fn selected_character(&self) -> Option<&Character> {
        match self.view() {
            View::Cards { characters, selected } => characters.get(selected),
            View::Loading | View::Error(_) | View::Empty => None,
        }
    }

    /// Status counts of the fetched collection.
    pub fn stats(&self) -> CharacterStats {
        CharacterStats::from_characters(&self.characters)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse a fetch error into the message shown to the user.
fn error_message(error: &FetchError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() { UNKNOWN_ERROR_MESSAGE.to_string() } else { message }
}

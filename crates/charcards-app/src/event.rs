//! Application input events.
//!
//! This module defines [`AppEvent`], the inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two sources:
//! - User interactions (keyboard, resize) and ticks.
//! - Completion of the character fetch.

use charcards_client::{Character, FetchError};

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Fetch succeeded.
    CharactersLoaded {
        /// Collection in upstream order.
        characters: Vec<Character>,
    },

    /// Fetch failed.
    FetchFailed {
        /// Why the fetch failed.
        error: FetchError,
    },
}

impl AppEvent {
    /// Turn the outcome of a fetch into the matching event.
    pub fn from_fetch(result: Result<Vec<Character>, FetchError>) -> Self {
        match result {
            Ok(characters) => Self::CharactersLoaded { characters },
            Err(error) => Self::FetchFailed { error },
        }
    }
}

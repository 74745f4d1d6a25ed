//! Application side-effects.
//!
//! This module defines the [`AppAction`] enum, the instructions produced by
//! the [`crate::App`] state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Observable state changed; render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Start the one character fetch.
    FetchCharacters,

    /// A card was clicked. Diagnostic only.
    CardClicked {
        /// Upstream id of the clicked character.
        id: u64,
    },
}

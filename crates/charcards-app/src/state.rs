//! Observable application state types.
//!
//! [`View`] is what a frontend draws. It is derived from the App's fields on
//! every call, so the four views can never overlap: exactly one variant is
//! produced per render.

use charcards_client::Character;

/// Lifecycle of the one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not mounted yet; no fetch requested.
    Idle,
    /// Fetch in flight.
    Loading,
    /// Fetch returned a collection (possibly empty).
    Success,
    /// Fetch failed.
    Error,
}

/// The view to render, chosen in priority order: loading, error, empty,
/// cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Fetch in flight.
    Loading,
    /// Fetch failed with this message.
    Error(&'a str),
    /// Nothing to show.
    Empty,
    /// One card per character, in order.
    Cards {
        /// Characters in upstream order.
        characters: &'a [Character],
        /// Index of the highlighted card.
        selected: usize,
    },
}

impl View<'_> {
    /// Ids of the rendered cards, in order. Empty for non-card views.
    pub fn card_ids(&self) -> Vec<u64> {
        match self {
            View::Cards { characters, .. } => characters.iter().map(|c| c.id).collect(),
            View::Loading | View::Error(_) | View::Empty => Vec::new(),
        }
    }
}

//! Character records and the response envelope.
//!
//! Records are taken verbatim from the upstream API. Nothing here validates
//! field contents: whatever the server sends is what gets displayed.

use serde::{Deserialize, Serialize};

/// A single character returned by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Stable upstream identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Life status as reported upstream (`Alive`, `Dead`, `unknown`).
    pub status: String,
    /// Species label.
    pub species: String,
    /// Portrait image URL.
    pub image: String,
}

/// JSON envelope wrapping the collection under `results`.
///
/// Any other envelope fields (`info`, paging links) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiResponse {
    /// Characters in upstream order.
    pub results: Vec<Character>,
}

/// Counts of a collection grouped by life status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterStats {
    /// Number of characters in the collection.
    pub total: usize,
    /// Characters whose status is `Alive`.
    pub alive: usize,
    /// Characters whose status is `Dead`.
    pub dead: usize,
    /// Characters with any other status.
    pub unknown: usize,
}

impl CharacterStats {
    /// Tally a collection. Status comparison ignores ASCII case.
    pub fn from_characters(characters: &[Character]) -> Self {
        characters.iter().fold(Self::default(), |mut stats, character| {
            stats.total += 1;
            if character.status.eq_ignore_ascii_case("alive") {
                stats.alive += 1;
            } else if character.status.eq_ignore_ascii_case("dead") {
                stats.dead += 1;
            } else {
                stats.unknown += 1;
            }
            stats
        })
    }
}

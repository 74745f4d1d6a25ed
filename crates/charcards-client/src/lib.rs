//! Data access for the character card viewer.
//!
//! Issues one HTTP GET against the character endpoint, checks the status,
//! decodes the JSON envelope and hands back the contained collection.
//!
//! # Components
//!
//! - [`CharacterClient`]: performs the request
//! - [`Character`], [`CharacterStats`]: the fetched data
//! - [`FetchError`]: every way the fetch can fail

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod character;
mod client;
mod error;

pub use character::{ApiResponse, Character, CharacterStats};
pub use client::{CHARACTERS_API_URL, CharacterClient, decode_characters};
pub use error::FetchError;

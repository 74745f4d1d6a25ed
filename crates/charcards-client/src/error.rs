//! Fetch error taxonomy.
//!
//! One variant per layer that can fail: HTTP status, transport below HTTP,
//! and body decoding. The presentation layer collapses all of them into a
//! single message, so the `Display` output is what the user reads.

use thiserror::Error;

/// Errors returned by [`crate::CharacterClient::get_characters`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-success status.
    #[error("failed to fetch characters: {status}{}", with_separator(.reason))]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
        /// Reason phrase as received. May be empty.
        reason: String,
    },

    /// Network, DNS or TLS failure below the HTTP layer.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body is not valid JSON or does not match the envelope shape.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Prefix a non-empty reason with the space that separates it from the code.
fn with_separator(reason: &str) -> String {
    if reason.is_empty() { String::new() } else { format!(" {reason}") }
}

impl FetchError {
    /// Short stable name of the variant, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HttpStatus { .. } => "http_status",
            Self::Transport(_) => "transport",
            Self::Parse(_) => "parse",
        }
    }

    /// HTTP status code, when the failure came from a status check.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }
}

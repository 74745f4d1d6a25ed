//! HTTP client for the character endpoint.
//!
//! Wraps a [`reqwest::Client`] and the endpoint URL. There are no retries,
//! timeouts or caching: one call is one GET.

use crate::{ApiResponse, Character, FetchError};

/// Fixed upstream endpoint serving the first page of characters.
pub const CHARACTERS_API_URL: &str = "https://rickandmortyapi.com/api/character";

/// HTTP client for the character endpoint.
#[derive(Debug, Clone)]
pub struct CharacterClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CharacterClient {
    /// Create a client targeting [`CHARACTERS_API_URL`].
    pub fn new() -> Self {
        Self::with_endpoint(CHARACTERS_API_URL)
    }

    /// Create a client that sends the same request to another URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }

    /// URL the request is sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the character collection.
    ///
    /// Fails with [`FetchError::HttpStatus`] on any non-2xx status, with
    /// [`FetchError::Parse`] when the body is not the expected envelope, and
    /// with [`FetchError::Transport`] when the request never got a response.
    pub async fn get_characters(&self) -> Result<Vec<Character>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching characters");

        match self.request().await {
            Ok(characters) => {
                tracing::debug!(count = characters.len(), "characters fetched");
                Ok(characters)
            },
            Err(e) => {
                tracing::warn!(error = %e, "character fetch failed");
                Err(e)
            },
        }
    }

    async fn request(&self) -> Result<Vec<Character>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                reason: reason_phrase(&response),
            });
        }

        let body = response.text().await?;
        decode_characters(&body)
    }
}

/// Reason phrase the server sent.
///
/// hyper only records the phrase when it differs from the canonical one for
/// the code, so the canonical phrase is the fallback. Empty for HTTP/2 and for
/// codes without a canonical phrase.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response.status().canonical_reason().unwrap_or_default().to_string(),
    }
}

impl Default for CharacterClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a response body and return its `results` verbatim.
pub fn decode_characters(body: &str) -> Result<Vec<Character>, FetchError> {
    let envelope: ApiResponse = serde_json::from_str(body)?;
    Ok(envelope.results)
}

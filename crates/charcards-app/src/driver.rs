//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use charcards_client::{Character, FetchError};
use futures::future::BoxFuture;

use crate::{App, AppEvent};

/// In-flight character fetch, owned by the runtime.
///
/// Dropping it aborts the request.
pub type FetchFuture = BoxFuture<'static, Result<Vec<Character>, FetchError>>;

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, ratatui for rendering, reqwest
///   for the fetch
/// - **Tests**: scripted events and canned fetch results
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input event.
    ///
    /// Returns an event or `None` if nothing happened before the driver's
    /// own timeout.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Start the character fetch.
    ///
    /// The returned future owns everything it needs so the runtime can keep
    /// polling input while it is pending.
    fn fetch_characters(&mut self) -> FetchFuture;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Show that a card was clicked.
    ///
    /// The runtime has already logged the click. The default does nothing
    /// else.
    ///
    /// # Errors
    ///
    /// Returns an error if redrawing fails.
    fn card_clicked(&mut self, _app: &App, _id: u64) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Release platform resources.
    fn stop(&mut self);
}

//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: presentation state machine
//! - [`Driver`]: platform-specific I/O
//! - the one in-flight character fetch
//!
//! Everything runs on a single task. The fetch future is polled alongside
//! input, so the UI stays responsive while it is pending. Quitting drops the
//! fetch, which aborts the request.

use charcards_client::{Character, FetchError};

use crate::{App, AppAction, AppEvent, Driver, FetchFuture};

/// What woke the loop up.
enum Step {
    /// Driver produced input (or timed out with nothing).
    Input(Option<AppEvent>),
    /// The fetch resolved.
    Fetched(Result<Vec<Character>, FetchError>),
}

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    /// Fetch started by [`AppAction::FetchCharacters`]. `None` before mount
    /// and after it resolves.
    pending_fetch: Option<FetchFuture>,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver, app: App::new(), pending_fetch: None }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// Mounts the App (which starts the fetch), then repeatedly waits for
    /// input or fetch completion and feeds the result to the App. Returns the
    /// App as it was when the loop ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<App, D::Error> {
        let actions = self.app.mount();
        let mut should_quit = self.process_actions(actions)?;

        while !should_quit {
            should_quit = self.process_cycle().await?;
        }

        if self.pending_fetch.take().is_some() {
            tracing::debug!("dropping unfinished character fetch");
        }
        self.driver.stop();
        Ok(self.app)
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let step = match self.pending_fetch.as_mut() {
            Some(fetch) => tokio::select! {
                biased;

                result = fetch => Step::Fetched(result),
                event = self.driver.poll_event() => Step::Input(event?),
            },
            None => Step::Input(self.driver.poll_event().await?),
        };

        let event = match step {
            Step::Input(Some(event)) => event,
            Step::Input(None) => return Ok(false),
            Step::Fetched(result) => {
                self.pending_fetch = None;
                if let Err(error) = &result {
                    tracing::warn!(kind = error.kind(), %error, "failed to load characters");
                }
                AppEvent::from_fetch(result)
            },
        };

        let actions = self.app.handle(event);
        self.process_actions(actions)
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::FetchCharacters => {
                    if self.pending_fetch.is_some() {
                        tracing::warn!("character fetch already in flight");
                    } else {
                        self.pending_fetch = Some(self.driver.fetch_characters());
                    }
                },
                AppAction::CardClicked { id } => {
                    tracing::info!(character_id = id, "card clicked");
                    self.driver.card_clicked(&self.app, id)?;
                },
            }
        }
        Ok(false)
    }
}

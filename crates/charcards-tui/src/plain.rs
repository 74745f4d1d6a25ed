//! Plain-text output.
//!
//! [`PlainDriver`] runs the same [`Runtime`](charcards_app::Runtime) as the
//! terminal UI but has no input: it waits for the fetch, writes the resulting
//! view as text once, then quits.

use std::{
    fmt::Write as _,
    io::{self, Write},
};

use charcards_app::{App, AppEvent, Driver, FetchFuture, KeyInput, View};
use charcards_client::CharacterClient;
use futures::FutureExt;

use crate::ui::{EMPTY_TEXT, ERROR_PREFIX, LOADING_TEXT};

/// Format the current view as plain text.
///
/// Cards are separated by blank lines and followed by a status summary.
pub fn render(app: &App) -> String {
    match app.view() {
        View::Loading => format!("{LOADING_TEXT}\n"),
        View::Error(message) => format!("{ERROR_PREFIX}{message}\n"),
        View::Empty => format!("{EMPTY_TEXT}\n"),
        View::Cards { characters, .. } => {
            let mut out = String::new();
            for character in characters {
                let _ = writeln!(out, "{}", character.name);
                let _ = writeln!(out, "  Species: {}", character.species);
                let _ = writeln!(out, "  Image: {}", character.image);
                out.push('\n');
            }

            let stats = app.stats();
            let _ = writeln!(
                out,
                "{} characters ({} alive, {} dead, {} unknown)",
                stats.total, stats.alive, stats.dead, stats.unknown
            );
            out
        },
    }
}

/// Driver that prints the settled view once and quits.
pub struct PlainDriver<W> {
    client: CharacterClient,
    out: W,
    /// A non-loading view has been written.
    written: bool,
}

impl<W: Write + Send> PlainDriver<W> {
    /// Create a driver writing to `out`.
    pub fn new(client: CharacterClient, out: W) -> Self {
        Self { client, out, written: false }
    }
}

impl<W: Write + Send> Driver for PlainDriver<W> {
    type Error = io::Error;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        if self.written {
            return Ok(Some(AppEvent::Key(KeyInput::Esc)));
        }

        // No input source: wait for the fetch to settle the view
        std::future::pending::<()>().await;
        Ok(None)
    }

    fn fetch_characters(&mut self) -> FetchFuture {
        let client = self.client.clone();
        async move { client.get_characters().await }.boxed()
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        if app.is_loading() || self.written {
            return Ok(());
        }

        self.out.write_all(render(app).as_bytes())?;
        self.out.flush()?;
        self.written = true;
        Ok(())
    }

    fn stop(&mut self) {}
}

//! Runtime behavior with a scripted driver.
//!
//! # Oracle Pattern
//!
//! The driver records every render as a [`Rendered`] summary. Tests end with
//! oracle checks that verify:
//! - the fetch was started exactly once
//! - renders show the expected views in order
//! - clicks reach the driver and nothing else changes

use std::{
    convert::Infallible,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use charcards_app::{App, AppEvent, Driver, FetchFuture, KeyInput, Runtime, View};
use charcards_client::{Character, FetchError};
use futures::FutureExt;
use tokio::sync::mpsc;

/// What a single render showed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Rendered {
    Loading,
    Error(String),
    Empty,
    Cards { ids: Vec<u64>, selected: usize },
}

impl Rendered {
    fn of(app: &App) -> Self {
        match app.view() {
            View::Loading => Self::Loading,
            View::Error(message) => Self::Error(message.to_string()),
            View::Empty => Self::Empty,
            view @ View::Cards { selected, .. } => Self::Cards { ids: view.card_ids(), selected },
        }
    }
}

/// Shared observations, readable after the runtime consumed the driver.
#[derive(Default)]
struct Record {
    renders: Mutex<Vec<Rendered>>,
    clicks: Mutex<Vec<u64>>,
    fetches: AtomicUsize,
    stopped: AtomicBool,
}

impl Record {
    fn renders(&self) -> Vec<Rendered> {
        self.renders.lock().unwrap().clone()
    }

    fn clicks(&self) -> Vec<u64> {
        self.clicks.lock().unwrap().clone()
    }
}

struct ScriptedDriver {
    events: mpsc::UnboundedReceiver<AppEvent>,
    fetch: Option<FetchFuture>,
    record: Arc<Record>,
}

impl ScriptedDriver {
    /// Driver whose input is `keys` and whose one fetch resolves to `fetch`.
    fn new(keys: &[KeyInput], fetch: FetchFuture) -> (Self, Arc<Record>) {
        let (tx, events) = mpsc::unbounded_channel();
        for key in keys {
            tx.send(AppEvent::Key(*key)).unwrap();
        }
        // Keep the sender alive for the whole run so recv() waits instead of
        // reporting a closed channel.
        std::mem::forget(tx);

        let record = Arc::new(Record::default());
        (Self { events, fetch: Some(fetch), record: record.clone() }, record)
    }
}

impl Driver for ScriptedDriver {
    type Error = Infallible;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        Ok(self.events.recv().await)
    }

    fn fetch_characters(&mut self) -> FetchFuture {
        self.record.fetches.fetch_add(1, Ordering::SeqCst);
        self.fetch.take().unwrap_or_else(|| futures::future::pending().boxed())
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.record.renders.lock().unwrap().push(Rendered::of(app));
        Ok(())
    }

    fn card_clicked(&mut self, app: &App, id: u64) -> Result<(), Self::Error> {
        assert_eq!(app.selected_character().map(|c| c.id), Some(id));
        self.record.clicks.lock().unwrap().push(id);
        Ok(())
    }

    fn stop(&mut self) {
        self.record.stopped.store(true, Ordering::SeqCst);
    }
}

/// Sets a flag when dropped, to observe fetch cancellation.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

fn character(id: u64, name: &str) -> Character {
    Character {
        id,
        name: name.into(),
        status: "Alive".into(),
        species: "Human".into(),
        image: format!("u{id}"),
    }
}

fn ready(result: Result<Vec<Character>, FetchError>) -> FetchFuture {
    futures::future::ready(result).boxed()
}

#[tokio::test]
async fn successful_fetch_renders_cards_in_order() {
    let characters = vec![character(1, "Rick Sanchez"), character(2, "Morty Smith")];
    let (driver, record) = ScriptedDriver::new(&[KeyInput::Esc], ready(Ok(characters)));

    Runtime::new(driver).run().await.unwrap();

    assert_eq!(record.renders(), vec![
        Rendered::Loading,
        Rendered::Cards { ids: vec![1, 2], selected: 0 },
    ]);
    assert_eq!(record.fetches.load(Ordering::SeqCst), 1);
    assert!(record.stopped.load(Ordering::SeqCst));
}

#[tokio::test]
async fn empty_results_render_empty_view() {
    let (driver, record) = ScriptedDriver::new(&[KeyInput::Esc], ready(Ok(vec![])));

    Runtime::new(driver).run().await.unwrap();

    assert_eq!(record.renders(), vec![Rendered::Loading, Rendered::Empty]);
}

#[tokio::test]
async fn server_error_renders_message_with_status() {
    let error = FetchError::HttpStatus { status: 500, reason: "Internal Server Error".into() };
    let (driver, record) = ScriptedDriver::new(&[KeyInput::Esc], ready(Err(error)));

    Runtime::new(driver).run().await.unwrap();

    let renders = record.renders();
    assert_eq!(renders.len(), 2);
    assert!(matches!(&renders[1], Rendered::Error(message) if message.contains("500")));
}

#[tokio::test]
async fn invalid_body_renders_non_empty_error() {
    let error = charcards_client::decode_characters("not json").unwrap_err();
    let (driver, record) = ScriptedDriver::new(&[KeyInput::Esc], ready(Err(error)));

    Runtime::new(driver).run().await.unwrap();

    assert!(matches!(
        record.renders().last(),
        Some(Rendered::Error(message)) if !message.is_empty()
    ));
}

#[tokio::test]
async fn unresolved_fetch_only_renders_loading_and_is_dropped_on_quit() {
    let dropped = Arc::new(AtomicBool::new(false));
    let guard = DropFlag(dropped.clone());
    let fetch = async move {
        let _guard = guard;
        futures::future::pending::<Result<Vec<Character>, FetchError>>().await
    }
    .boxed();

    let keys = [KeyInput::Down, KeyInput::Enter, KeyInput::Char('x'), KeyInput::Esc];
    let (driver, record) = ScriptedDriver::new(&keys, fetch);

    Runtime::new(driver).run().await.unwrap();

    assert!(record.renders().iter().all(|r| *r == Rendered::Loading));
    assert!(record.clicks().is_empty());
    assert!(dropped.load(Ordering::SeqCst), "in-flight fetch should be dropped on quit");
}

#[tokio::test]
async fn navigation_and_click_reach_driver() {
    let characters =
        vec![character(1, "Rick Sanchez"), character(2, "Morty Smith"), character(3, "Summer")];
    let keys = [KeyInput::Down, KeyInput::Down, KeyInput::Enter, KeyInput::Home, KeyInput::Enter];
    let mut script = keys.to_vec();
    script.push(KeyInput::Char('q'));
    let (driver, record) = ScriptedDriver::new(&script, ready(Ok(characters)));

    Runtime::new(driver).run().await.unwrap();

    assert_eq!(record.clicks(), vec![3, 1]);
    assert_eq!(record.renders().last(), Some(&Rendered::Cards { ids: vec![1, 2, 3], selected: 0 }));
    assert_eq!(record.fetches.load(Ordering::SeqCst), 1);
}

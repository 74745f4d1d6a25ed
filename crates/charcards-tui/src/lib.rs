//! Terminal UI for the character card viewer
//!
//! A thin shell over [`charcards_app::Driver`] that provides terminal I/O.
//! All orchestration logic lives in the generic [`charcards_app::Runtime`].
//!
//! Two drivers are provided:
//! - [`TerminalDriver`]: interactive full-screen card browser
//! - [`PlainDriver`]: fetch once, print the result as text, exit

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod plain;
pub mod terminal;
pub mod ui;

pub use charcards_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use plain::PlainDriver;
pub use terminal::{TerminalDriver, TerminalError};

//! Application layer for the character card viewer.
//!
//! A pure state machine and a generic runtime. The state machine holds the
//! fetched collection, the loading flag and the error message, and decides
//! which of the four views to show. The runtime wires it to platform I/O
//! through a [`Driver`].
//!
//! # Components
//!
//! - [`App`]: presentation state machine (fetch trigger, view policy,
//!   card selection)
//! - [`Driver`]: trait for platform-specific I/O
//! - [`Runtime`]: orchestration loop using a Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::{App, UNKNOWN_ERROR_MESSAGE};
pub use driver::{Driver, FetchFuture};
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
pub use state::{Phase, View};

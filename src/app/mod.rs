//! Application layer: state, events, and side-effect actions.
//!
//! The layer follows a strict unidirectional flow: the terminal shim
//! translates input into [`Event`]s, [`handle_event`] mutates [`AppState`]
//! and returns [`Action`]s, and the shim executes those effects (worker
//! posts, preference writes, quitting). Nothing in this layer performs I/O
//! directly.
//!
//! [`Event`]: handler::Event
//! [`handle_event`]: handler::handle_event
//! [`AppState`]: state::AppState
//! [`Action`]: actions::Action

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::{AppState, DetailPane};

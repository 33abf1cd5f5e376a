//! Actions representing side effects to be executed by the terminal shim.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! keeping state transitions pure while the shim in `main.rs` performs the
//! effectful work: posting fetch requests, persisting preferences, and
//! shutting the terminal down.

use crate::storage::Preferences;
use crate::worker::WorkerRequest;

/// Commands produced by the event handler and executed by the shim.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Leaves the event loop and restores the terminal.
    Quit,

    /// Posts a fetch request to the background worker thread.
    PostToWorker(WorkerRequest),

    /// Persists the given preference snapshot through the store's single
    /// update path.
    SavePreferences(Preferences),
}

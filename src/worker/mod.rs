//! Background fetch worker for asynchronous API calls.
//!
//! The two network operations (full list fetch, single-record fetch) run on a
//! dedicated thread behind an mpsc request/response protocol, so fetches
//! suspend only the requesting view (a loading indicator) and never the event
//! loop. Responses are tagged with the generation of the state that requested
//! them; the handler discards stale ones instead of applying them to a view
//! that has moved on.
//!
//! # Modules
//!
//! - [`messages`]: Request/response protocol types
//! - [`handler`]: Worker thread spawn and run loop

pub mod handler;
pub mod messages;

pub use handler::FetchWorker;
pub use messages::{WorkerRequest, WorkerResponse};

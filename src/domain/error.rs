//! Error types for atlascope.
//!
//! This module defines the centralized error type [`AtlascopeError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented with
//! the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Most runtime failures never surface as errors to the caller: per the
//! error-handling policy, network failures are converted to empty lists or
//! absent details at the API boundary. `AtlascopeError` covers the remaining
//! fallible surfaces: startup, storage, theming, and worker plumbing.

use thiserror::Error;

/// The main error type for atlascope operations.
///
/// Consolidates the error conditions that can occur during startup and in the
/// storage/worker layers. Variants wrapping external errors use `#[from]` for
/// automatic conversion with `?`.
#[derive(Debug, Error)]
pub enum AtlascopeError {
    /// HTTP transport failure (connection, timeout, bad status, decode).
    ///
    /// Only observed inside the API client; the public fetch operations catch
    /// this and return empty/absent values instead.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Preference store operation failed.
    ///
    /// Occurs when reading from or writing to the preference backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background fetch worker failed.
    ///
    /// Occurs when the request or response channel to the worker thread has
    /// been disconnected.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for atlascope operations.
///
/// Type alias for `std::result::Result<T, AtlascopeError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, AtlascopeError>;

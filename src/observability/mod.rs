//! Structured logging with rotating file output.
//!
//! The app renders to stdout, so diagnostics cannot share it. All `tracing`
//! events are instead formatted to a log file in the data directory, with
//! size-based rotation keeping disk usage bounded.
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `ATLASCOPE_LOG` environment variable (highest priority)
//! 2. `log_level` option in the config file
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;

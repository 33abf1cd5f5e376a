//! Platform-specific utilities.
//!
//! Currently holds filesystem path resolution for the data and config
//! directories.

pub mod paths;

pub use paths::{config_file, get_data_dir, log_file, preferences_file};

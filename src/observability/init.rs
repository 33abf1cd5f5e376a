//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber: an `EnvFilter` for level
//! control and a fmt layer writing structured log lines to a rotating file.
//! Logs go to a file rather than the terminal because stdout is owned by the
//! renderer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;

/// Environment variable overriding the configured log level.
const LOG_ENV_VAR: &str = "ATLASCOPE_LOG";

/// Initializes the tracing subscriber with rotating file output.
///
/// Level resolution, highest priority first:
/// 1. `ATLASCOPE_LOG` environment variable (full `EnvFilter` syntax)
/// 2. `log_level` from the config file
/// 3. Default: `"info"`
///
/// Logs land in the data directory as `atlascope.log`, rotated at 10 MB with
/// three backups retained.
///
/// Silently does nothing when the data directory cannot be created
/// (observability is optional) and is idempotent: only the first call
/// installs a subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level));

    let writer = FileWriter::new(paths::log_file());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

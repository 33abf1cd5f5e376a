//! Filesystem locations for app data and configuration.
//!
//! This module resolves the platform-specific directories the app stores its
//! files in, following the usual conventions (`~/.local/share/atlascope` and
//! `~/.config/atlascope` on Linux). All resolution goes through the `dirs`
//! crate; when no home directory can be determined, paths fall back to the
//! current directory so the app still runs in minimal environments.

use std::path::PathBuf;

/// Directory name used under both the data and config roots.
const APP_DIR: &str = "atlascope";

/// Returns the data directory for preference and log storage.
///
/// Resolves to `~/.local/share/atlascope` on Linux,
/// `~/Library/Application Support/atlascope` on macOS.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Path of the JSON preference store within the data directory.
#[must_use]
pub fn preferences_file() -> PathBuf {
    get_data_dir().join("preferences.json")
}

/// Path of the rotating log file within the data directory.
#[must_use]
pub fn log_file() -> PathBuf {
    get_data_dir().join("atlascope.log")
}

/// Path of the optional TOML config file.
///
/// Resolves to `~/.config/atlascope/config.toml` on Linux.
#[must_use]
pub fn config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_app_data_dir() {
        let data_dir = get_data_dir();
        assert!(data_dir.ends_with(APP_DIR));
        assert_eq!(preferences_file().parent(), Some(data_dir.as_path()));
        assert_eq!(log_file().parent(), Some(data_dir.as_path()));
        assert!(config_file().ends_with("atlascope/config.toml"));
    }
}

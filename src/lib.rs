//! Atlascope: a terminal country directory backed by the REST Countries API.
//!
//! Atlascope fetches the full country catalog once, then lets you browse it
//! entirely locally:
//! - Substring search over country names, combinable with facet filters
//!   (region, subregion, population bracket)
//! - Sorting by name, population, or area in either direction
//! - Two list renderings (table and card grid) with either fixed pages or a
//!   continuously growing window
//! - A per-country detail page fetched on demand
//! - Preferences (theme, view, pagination) persisted between runs
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Async fetch │
//! │ - Theming     │   │ - Preferences │   │ - Generations │
//! │ - Components  │   │ - Backend API │   │ - mpsc bridge │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Engine, Domain, API, Infrastructure Layers         │
//! │  - List presentation engine (engine/)               │
//! │  - Country model, filters, errors (domain/)         │
//! │  - REST Countries client (api/)                     │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! │  - Rotating log file output                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (countries, filters, errors)
//! - [`engine`]: Sort/paginate/load-more list presentation engine
//! - [`api`]: Blocking HTTP client for the REST Countries API
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: JSON file persistence for preferences
//! - [`worker`]: Background worker thread for API fetches
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: tracing setup with rotating file output
//!
//! # Configuration
//!
//! An optional TOML file at `~/.config/atlascope/config.toml`:
//!
//! ```toml
//! theme = "light"
//! # theme_file = "/path/to/custom-theme.toml"
//! log_level = "debug"
//! # api_base_url = "http://localhost:8080/v3.1"
//! ```
//!
//! All keys are optional; a missing or unreadable file means defaults. The
//! `ATLASCOPE_LOG` environment variable overrides `log_level`.

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{AtlascopeError, CountryDetail, CountrySummary, Result};
pub use engine::{DisplayMode, ListPresenter, SortSpec, ViewStyle};
pub use storage::Preferences;
pub use ui::Theme;

use serde::Deserialize;

/// Application configuration loaded from the optional TOML config file.
///
/// Every field is optional; omissions fall back to built-in defaults, and a
/// missing or unparseable file behaves like an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Built-in theme name (`dark` or `light`).
    ///
    /// Overrides the persisted dark-mode preference when set. Ignored if
    /// `theme_file` is set.
    #[serde(default)]
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for the format.
    #[serde(default)]
    pub theme_file: Option<String>,

    /// Log level for the tracing subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or full
    /// `EnvFilter` syntax. Default: `"info"`.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Base URL of the REST Countries API.
    ///
    /// Mostly useful for pointing at a local mirror. Default:
    /// `https://restcountries.com/v3.1`.
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl Config {
    /// Loads the configuration from the default config file location.
    ///
    /// Returns defaults when the file does not exist or cannot be parsed;
    /// the app must start regardless of config state.
    #[must_use]
    pub fn load() -> Self {
        Self::from_file(infrastructure::config_file())
    }

    fn from_file(path: std::path::PathBuf) -> Self {
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&contents).unwrap_or_default()
    }
}

/// Resolves the active theme from configuration and persisted preferences.
///
/// Precedence: custom theme file, then configured built-in name, then the
/// persisted dark-mode preference. Any load failure falls back to the next
/// source rather than failing startup.
#[must_use]
pub fn resolve_theme(config: &Config, preferences: &Preferences) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(theme_file) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using built-in");
            }
        }
    }

    if let Some(name) = &config.theme {
        if let Some(theme) = Theme::from_name(name) {
            return theme;
        }
        tracing::warn!(theme = %name, "unknown theme name, using preference default");
    }

    if preferences.dark_mode {
        Theme::dark()
    } else {
        Theme::light()
    }
}

/// Creates the initial application state from configuration and persisted
/// preferences.
#[must_use]
pub fn initialize(config: &Config, preferences: Preferences) -> AppState {
    tracing::debug!("initializing atlascope");

    let theme = resolve_theme(config, &preferences);
    AppState::new(preferences, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_partial_toml() {
        let config: Config = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(config.theme.as_deref(), Some("light"));
        assert!(config.log_level.is_none());
        assert!(config.api_base_url.is_none());
    }

    #[test]
    fn theme_resolution_follows_preferences_by_default() {
        let config = Config::default();
        let dark_prefs = Preferences::default();
        assert_eq!(resolve_theme(&config, &dark_prefs).name, "dark");

        let light_prefs = Preferences {
            dark_mode: false,
            ..Preferences::default()
        };
        assert_eq!(resolve_theme(&config, &light_prefs).name, "light");
    }

    #[test]
    fn configured_theme_name_wins_over_preferences() {
        let config = Config {
            theme: Some("light".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config, &Preferences::default()).name, "light");

        let bad = Config {
            theme: Some("nonexistent".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&bad, &Preferences::default()).name, "dark");
    }
}

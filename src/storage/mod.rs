//! Storage layer for persisted UI preferences.
//!
//! The only persistent state the app keeps: the dark-mode flag, the
//! pagination-mode flag, and the view-style selector. Read once at startup,
//! written through one `update` function on every change.
//!
//! # Modules
//!
//! - `backend`: Preference store trait abstraction
//! - `json`: JSON file-based implementation with atomic writes
//! - `models`: Persisted record types

pub mod backend;
pub mod json;
pub mod models;

pub use backend::PreferenceStore;
pub use json::JsonPreferences;
pub use models::Preferences;

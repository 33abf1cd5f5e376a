//! Preference store abstraction.
//!
//! This module defines the [`PreferenceStore`] trait that abstracts over
//! persistence backends for UI preferences. The trait is minimal by design:
//! read once at startup, and funnel every mutation through a single `update`
//! entry point so writes cannot scatter across components.

use crate::domain::error::Result;
use crate::storage::models::Preferences;

/// Abstraction over persistent preference backends.
///
/// # Implementations
///
/// - [`JsonPreferences`](crate::storage::JsonPreferences): JSON file with
///   atomic writes (default)
pub trait PreferenceStore: Send {
    /// Returns the current preferences.
    ///
    /// Backends fall back to [`Preferences::default`] when nothing has been
    /// persisted yet.
    fn load(&self) -> Preferences;

    /// Applies a mutation and persists the result.
    ///
    /// This is the single write path for preferences; callers never persist
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. In-memory state is updated
    /// regardless, so the session keeps the user's choice either way.
    fn update(&mut self, apply: &mut dyn FnMut(&mut Preferences)) -> Result<()>;
}

//! Preference records for the persistence layer.
//!
//! [`Preferences`] is the single explicit configuration object the shell
//! reads at startup and writes on every change. Serde defaults encode the
//! documented fallbacks (dark mode on, pagination on, table view), so a
//! missing or partial file degrades to the defaults instead of failing.

use serde::{Deserialize, Serialize};

use crate::engine::ViewStyle;

/// Persisted UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Dark color scheme flag. Default: on.
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Paginated (vs. continuous scroll) list mode. Default: on.
    #[serde(default = "default_true")]
    pub paginated: bool,

    /// Active list rendering, stored as `"list"` or `"card"`. Default: list.
    #[serde(default = "default_view_mode")]
    pub view_mode: ViewStyle,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            paginated: true,
            view_mode: ViewStyle::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_view_mode() -> ViewStyle {
    ViewStyle::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let preferences: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(preferences, Preferences::default());
        assert!(preferences.dark_mode);
        assert!(preferences.paginated);
        assert_eq!(preferences.view_mode, ViewStyle::Table);
    }

    #[test]
    fn view_mode_round_trips_through_original_string_values() {
        let json = serde_json::to_string(&Preferences {
            view_mode: ViewStyle::Card,
            ..Preferences::default()
        })
        .unwrap();
        assert!(json.contains("\"card\""));

        let parsed: Preferences =
            serde_json::from_str(r#"{"dark_mode": false, "view_mode": "list"}"#).unwrap();
        assert!(!parsed.dark_mode);
        assert_eq!(parsed.view_mode, ViewStyle::Table);
    }
}

//! Input mode state types for the application.
//!
//! These enums control how keyboard input is interpreted and which chrome the
//! renderer shows. The app operates in one of three input modes: normal
//! navigation, active search (typing or navigating results), and the filter
//! panel for facet constraints.

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query or navigate the filtered
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to
    /// Navigating).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts j/k for movement, enter to open a detail page, and / to
    /// return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and which footer text and chrome
/// the renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search with a [`SearchFocus`] variant.
    Search(SearchFocus),

    /// Filter panel focused: keys cycle the region/subregion/population
    /// facets.
    Filter,
}

//! The list presentation engine.
//!
//! [`ListPresenter`] owns the view state for one list: it takes the filtered
//! record list plus a sort specification and produces the ordered visible
//! subset together with pagination or load-more continuation state. The same
//! engine backs both the card grid and the table view, parameterized only by
//! a per-style [`BatchProfile`], so the two views cannot drift apart.
//!
//! View state is recomputed wholesale on every input change: replacing the
//! records, the sort spec, or the display mode discards the previous page or
//! accumulated window entirely. The engine never fails; empty or out-of-range
//! inputs simply produce an empty visible slice.

use serde::{Deserialize, Serialize};

use crate::domain::CountrySummary;
use crate::engine::sort::{sort_records, SortSpec};

/// The two list renderings the app offers.
///
/// Serialized into the preference store with the values the original UI used
/// ("list" for the table, "card" for the grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewStyle {
    /// Tabular rows with name/region/population/area columns.
    #[serde(rename = "list")]
    Table,

    /// Bordered card grid.
    #[serde(rename = "card")]
    Card,
}

impl ViewStyle {
    /// Flips between table and card rendering.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Table => Self::Card,
            Self::Card => Self::Table,
        }
    }

    /// Returns the window sizing constants for this style.
    ///
    /// The two styles carry different initial/continuation batch sizes; this
    /// is a presentational choice per style, not a shared invariant.
    #[must_use]
    pub fn profile(self) -> BatchProfile {
        match self {
            Self::Table => BatchProfile {
                page_size: 16,
                initial: 20,
                batch: 10,
            },
            Self::Card => BatchProfile {
                page_size: 12,
                initial: 24,
                batch: 12,
            },
        }
    }

    /// Display label for the header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Table => "list",
            Self::Card => "card",
        }
    }
}

/// Window sizing constants for one view style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProfile {
    /// Items per page in paginated mode.
    pub page_size: usize,

    /// Initial window size in continuous mode.
    pub initial: usize,

    /// Items appended per load-more signal in continuous mode.
    pub batch: usize,
}

/// Mutually exclusive presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Fixed-size page windows with first/previous/next/last navigation.
    Paginated,

    /// Growing window fed by end-proximity (load more) signals.
    Continuous,
}

/// The combined sort/paginate/load-more state machine behind every list view.
///
/// Owns the sorted copy of the filtered records exclusively; callers read the
/// visible window through [`visible`](Self::visible) and drive transitions
/// through the navigation and load-more methods.
#[derive(Debug, Clone)]
pub struct ListPresenter {
    /// Filtered records, sorted under `sort`. Replaced, never patched.
    sorted: Vec<CountrySummary>,

    /// Window sizing for the active view style.
    profile: BatchProfile,

    /// Active presentation mode.
    mode: DisplayMode,

    /// Active sort specification.
    sort: SortSpec,

    /// Current page index, meaningful only in paginated mode.
    page: usize,

    /// Number of items revealed so far, meaningful only in continuous mode.
    loaded: usize,
}

impl ListPresenter {
    /// Creates an empty presenter for the given profile, mode, and sort.
    #[must_use]
    pub fn new(profile: BatchProfile, mode: DisplayMode, sort: SortSpec) -> Self {
        Self {
            sorted: Vec::new(),
            profile,
            mode,
            sort,
            page: 0,
            loaded: 0,
        }
    }

    /// Replaces the backing records with a new filtered list.
    ///
    /// Sorts under the current spec and resets the window: page 0 in
    /// paginated mode, the initial slice in continuous mode. Previously
    /// accumulated continuous state never survives a source change.
    pub fn set_records(&mut self, mut filtered: Vec<CountrySummary>) {
        sort_records(&mut filtered, self.sort);
        self.sorted = filtered;
        self.reset_window();

        tracing::debug!(
            total = self.sorted.len(),
            mode = ?self.mode,
            "presenter records replaced"
        );
    }

    /// Changes the sort specification, re-sorting and resetting the window.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        sort_records(&mut self.sorted, self.sort);
        self.reset_window();
    }

    /// Switches between paginated and continuous mode, resetting the window.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.reset_window();
    }

    /// Swaps in the sizing profile of a different view style, resetting the
    /// window so the new sizes apply from the start.
    pub fn set_profile(&mut self, profile: BatchProfile) {
        self.profile = profile;
        self.reset_window();
    }

    /// The active sort specification.
    #[must_use]
    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// The active presentation mode.
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The active window sizing profile.
    #[must_use]
    pub fn profile(&self) -> BatchProfile {
        self.profile
    }

    /// Total number of backing (filtered) records.
    #[must_use]
    pub fn total(&self) -> usize {
        self.sorted.len()
    }

    /// The ordered visible subset for the current window.
    #[must_use]
    pub fn visible(&self) -> &[CountrySummary] {
        match self.mode {
            DisplayMode::Paginated => {
                let start = (self.page * self.profile.page_size).min(self.sorted.len());
                let end = (start + self.profile.page_size).min(self.sorted.len());
                &self.sorted[start..end]
            }
            DisplayMode::Continuous => &self.sorted[..self.loaded.min(self.sorted.len())],
        }
    }

    /// Current page index (zero-based). Meaningful only when paginated.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Number of pages for the current records, at least 1.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.sorted.len().div_ceil(self.profile.page_size).max(1)
    }

    /// Jumps to page `n`, clamped to the valid range.
    pub fn go_to_page(&mut self, n: usize) {
        self.page = n.min(self.page_count() - 1);
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.go_to_page(0);
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        self.go_to_page(self.page_count() - 1);
    }

    /// Advances one page; a no-op on the last page.
    pub fn next_page(&mut self) {
        self.go_to_page(self.page.saturating_add(1));
    }

    /// Goes back one page; a no-op on the first page.
    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    /// Whether backward navigation is a no-op (first/previous disabled).
    #[must_use]
    pub fn at_first_page(&self) -> bool {
        self.page == 0
    }

    /// Whether forward navigation is a no-op (next/last disabled).
    #[must_use]
    pub fn at_last_page(&self) -> bool {
        self.page + 1 >= self.page_count()
    }

    /// Reveals the next batch in continuous mode.
    ///
    /// Returns whether anything was appended. Idempotent once the end of the
    /// sorted list is reached: further signals neither error nor duplicate.
    /// A no-op in paginated mode.
    pub fn load_more(&mut self) -> bool {
        if self.mode != DisplayMode::Continuous {
            return false;
        }

        let before = self.loaded;
        self.loaded = (self.loaded + self.profile.batch).min(self.sorted.len());

        if self.loaded > before {
            tracing::debug!(loaded = self.loaded, total = self.sorted.len(), "window extended");
            true
        } else {
            false
        }
    }

    /// Whether the continuous window already covers every record.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.loaded >= self.sorted.len()
    }

    fn reset_window(&mut self) {
        self.page = 0;
        self.loaded = self.profile.initial.min(self.sorted.len());
    }
}

/// Single-registration guard for the end-proximity (load more) signal.
///
/// The host event loop delivers end-reached signals; this guard mirrors the
/// register/deregister contract of a viewport observer so a doubly-registered
/// observer can never deliver duplicate load-more triggers. Register when
/// entering continuous mode, release exactly once when leaving it or tearing
/// the view down.
#[derive(Debug, Default)]
pub struct ScrollSentinel {
    registered: bool,
}

impl ScrollSentinel {
    /// Registers the sentinel. Returns `false` (and changes nothing) when
    /// already registered; callers must release before re-registering.
    pub fn register(&mut self) -> bool {
        if self.registered {
            tracing::warn!("scroll sentinel already registered, ignoring");
            return false;
        }
        self.registered = true;
        true
    }

    /// Releases the sentinel. Safe to call when not registered.
    pub fn release(&mut self) {
        self.registered = false;
    }

    /// Whether the sentinel is currently registered.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Accepts an end-proximity signal.
    ///
    /// Returns whether the signal should reach the engine; signals arriving
    /// while unregistered (paginated mode, detail screen) are dropped.
    #[must_use]
    pub fn observe(&self) -> bool {
        self.registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sort::{SortDirection, SortKey};
    use std::collections::BTreeSet;

    fn country(code: &str, name: &str, population: u64) -> CountrySummary {
        CountrySummary {
            code: code.to_string(),
            common_name: name.to_string(),
            population,
            area: population as f64,
            region: String::new(),
            subregion: None,
            flag_svg: String::new(),
        }
    }

    fn numbered(count: usize) -> Vec<CountrySummary> {
        (0..count)
            .map(|i| country(&format!("C{i:02}"), &format!("Country {i:02}"), i as u64))
            .collect()
    }

    fn presenter(profile: BatchProfile, mode: DisplayMode) -> ListPresenter {
        ListPresenter::new(
            profile,
            mode,
            SortSpec {
                key: SortKey::Population,
                direction: SortDirection::Ascending,
            },
        )
    }

    const SMALL: BatchProfile = BatchProfile {
        page_size: 2,
        initial: 2,
        batch: 1,
    };

    #[test]
    fn windowing_example_paginated_and_continuous() {
        // Records from the end-to-end example: sort by population ascending
        // yields Iceland, France, Brazil.
        let records = vec![
            country("BRA", "Brazil", 213_000_000),
            country("ISL", "Iceland", 370_000),
            country("FRA", "France", 67_000_000),
        ];

        let mut paged = presenter(SMALL, DisplayMode::Paginated);
        paged.set_records(records.clone());
        paged.go_to_page(1);
        let names: Vec<&str> = paged.visible().iter().map(|c| c.common_name.as_str()).collect();
        assert_eq!(names, vec!["Brazil"]);

        let mut continuous = presenter(SMALL, DisplayMode::Continuous);
        continuous.set_records(records);
        let names: Vec<&str> = continuous
            .visible()
            .iter()
            .map(|c| c.common_name.as_str())
            .collect();
        assert_eq!(names, vec!["Iceland", "France"]);
    }

    #[test]
    fn paginated_windows_partition_the_sorted_list() {
        let mut p = presenter(ViewStyle::Table.profile(), DisplayMode::Paginated);
        p.set_records(numbered(50));

        let page_size = ViewStyle::Table.profile().page_size;
        let mut seen = Vec::new();
        for page in 0..p.page_count() {
            p.go_to_page(page);
            assert!(p.visible().len() <= page_size);
            seen.extend(p.visible().iter().cloned());
        }

        // Union over all pages reconstructs the sorted list exactly once.
        assert_eq!(seen.len(), 50);
        let codes: BTreeSet<&str> = seen.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes.len(), 50);
        for window in seen.windows(2) {
            assert!(window[0].population <= window[1].population);
        }
    }

    #[test]
    fn navigation_clamps_at_both_boundaries() {
        let mut p = presenter(SMALL, DisplayMode::Paginated);
        p.set_records(numbered(5));
        assert_eq!(p.page_count(), 3);

        assert!(p.at_first_page());
        p.previous_page();
        assert_eq!(p.current_page(), 0);

        p.go_to_page(99);
        assert_eq!(p.current_page(), 2);
        assert!(p.at_last_page());
        p.next_page();
        assert_eq!(p.current_page(), 2);

        p.first_page();
        assert_eq!(p.current_page(), 0);
        p.last_page();
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn empty_records_produce_empty_visible_without_error() {
        let mut p = presenter(SMALL, DisplayMode::Paginated);
        p.set_records(Vec::new());
        assert!(p.visible().is_empty());
        assert_eq!(p.page_count(), 1);
        p.next_page();
        p.last_page();
        assert!(p.visible().is_empty());

        p.set_mode(DisplayMode::Continuous);
        assert!(p.visible().is_empty());
        assert!(!p.load_more());
    }

    #[test]
    fn continuous_append_reaches_the_full_list_without_loss_or_duplication() {
        let mut p = presenter(ViewStyle::Card.profile(), DisplayMode::Continuous);
        p.set_records(numbered(50));
        assert_eq!(p.visible().len(), 24);

        while p.load_more() {}
        assert_eq!(p.visible().len(), 50);
        assert!(p.is_exhausted());

        let codes: BTreeSet<&str> = p.visible().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes.len(), 50);

        // Further signals beyond exhaustion are no-ops.
        assert!(!p.load_more());
        assert_eq!(p.visible().len(), 50);
    }

    #[test]
    fn load_more_is_a_noop_in_paginated_mode() {
        let mut p = presenter(SMALL, DisplayMode::Paginated);
        p.set_records(numbered(5));
        assert!(!p.load_more());
        assert_eq!(p.visible().len(), 2);
    }

    #[test]
    fn source_or_sort_change_resets_the_window() {
        let mut p = presenter(SMALL, DisplayMode::Paginated);
        p.set_records(numbered(6));
        p.go_to_page(2);
        p.set_records(numbered(6));
        assert_eq!(p.current_page(), 0);

        p.go_to_page(2);
        p.set_sort(SortSpec {
            key: SortKey::Population,
            direction: SortDirection::Descending,
        });
        assert_eq!(p.current_page(), 0);

        p.set_mode(DisplayMode::Continuous);
        while p.load_more() {}
        assert_eq!(p.visible().len(), 6);
        p.set_sort(SortSpec::default());
        // Accumulation is discarded back to the initial slice.
        assert_eq!(p.visible().len(), 2);
    }

    #[test]
    fn sentinel_registers_once_and_drops_unregistered_signals() {
        let mut sentinel = ScrollSentinel::default();
        assert!(!sentinel.observe());

        assert!(sentinel.register());
        assert!(!sentinel.register());
        assert!(sentinel.observe());

        sentinel.release();
        assert!(!sentinel.is_registered());
        assert!(!sentinel.observe());
        assert!(sentinel.register());
    }
}

//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the app,
//! along with methods for filtering, selection management, and UI view model
//! generation. It is the single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the fetched catalog) from derived state
//! (the presenter's sorted window, the selection). The catalog is immutable
//! once fetched; every input change flows through [`refresh_list`]
//! (re-filter, re-sort, reset windows) rather than patching derived state in
//! place. View models are computed on demand from state snapshots.
//!
//! [`refresh_list`]: AppState::refresh_list

use crate::domain::filter::cycle_option;
use crate::domain::{CountryCatalog, CountryDetail, CountryFilter, CountrySummary, FacetOptions};
use crate::engine::{DisplayMode, ListPresenter, ScrollSentinel, SortSpec, ViewStyle};
use crate::storage::Preferences;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyViewModel, DetailViewModel, DisplayItem, EmptyState, FilterPanelInfo, FooterInfo,
    HeaderInfo, ListBody, LoadProgress, PaginationInfo, SearchBarInfo, UIViewModel, CARD_CELL_HEIGHT,
    CARD_CELL_WIDTH,
};
use super::modes::{InputMode, SearchFocus};

/// How close (in items) the selection must get to the end of the loaded
/// window before the event loop delivers an end-proximity signal.
pub const END_PROXIMITY: usize = 3;

/// State of the detail page overlay. `None` on the state means browsing.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPane {
    /// The cca3 code this pane was opened for; late responses for other
    /// codes are ignored.
    pub code: String,

    /// Whether the detail fetch is still in flight.
    pub loading: bool,

    /// The fetched record; `None` after loading means "not found".
    pub detail: Option<CountryDetail>,
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input and worker
/// responses. View models are computed on demand from state snapshots.
#[derive(Debug)]
pub struct AppState {
    /// The full unfiltered country list from the last successful fetch.
    pub catalog: CountryCatalog,

    /// Facet option lists derived from the full catalog (never from the
    /// filtered list, so they stay stable while filtering).
    pub facets: FacetOptions,

    /// Active filter constraints.
    pub filter: CountryFilter,

    /// The list presentation engine owning the sorted visible window.
    pub presenter: ListPresenter,

    /// Registration guard for the end-proximity signal.
    pub sentinel: ScrollSentinel,

    /// Active list rendering (table or card grid).
    pub view_style: ViewStyle,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Detail page overlay, `None` while browsing.
    pub detail_pane: Option<DetailPane>,

    /// Zero-based selection index within the presenter's visible items.
    pub selected_index: usize,

    /// Whether the initial (or a refresh) list fetch is in flight.
    pub loading: bool,

    /// Fetch generation; responses tagged with an older generation are
    /// stale and dropped.
    pub generation: u64,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Current preference snapshot (mirrors the store).
    pub preferences: Preferences,
}

impl AppState {
    /// Creates the initial state from persisted preferences and a theme.
    ///
    /// The catalog starts empty with a list fetch expected; the presenter is
    /// configured from the preferences (view style profile, display mode)
    /// and the sentinel is registered when starting in continuous mode.
    #[must_use]
    pub fn new(preferences: Preferences, theme: Theme) -> Self {
        let view_style = preferences.view_mode;
        let mode = display_mode(&preferences);
        let presenter = ListPresenter::new(view_style.profile(), mode, SortSpec::default());

        let mut sentinel = ScrollSentinel::default();
        if mode == DisplayMode::Continuous {
            sentinel.register();
        }

        Self {
            catalog: CountryCatalog::default(),
            facets: FacetOptions::default(),
            filter: CountryFilter::default(),
            presenter,
            sentinel,
            view_style,
            input_mode: InputMode::Normal,
            detail_pane: None,
            selected_index: 0,
            loading: true,
            generation: 0,
            theme,
            preferences,
        }
    }

    /// Installs a freshly fetched catalog and rebuilds all derived state.
    pub fn set_catalog(&mut self, countries: Vec<CountrySummary>) {
        self.facets = FacetOptions::from_records(&countries);
        self.catalog = CountryCatalog::new(countries);
        self.loading = false;
        self.refresh_list();
    }

    /// Re-derives the presenter's records from the catalog and filter.
    ///
    /// Called after any change to the source list or the filter; the
    /// presenter resets its window and the selection returns to the top.
    pub fn refresh_list(&mut self) {
        self.presenter.set_records(self.filter.apply(&self.catalog.records));
        self.selected_index = 0;
    }

    /// Returns a reference to the currently selected country, if any.
    #[must_use]
    pub fn selected_country(&self) -> Option<&CountrySummary> {
        self.presenter.visible().get(self.selected_index)
    }

    /// Moves the selection down one item.
    ///
    /// Wraps to the top at the end, except in continuous mode with more
    /// records still unloaded, where the selection holds position until the
    /// end-proximity signal extends the window.
    pub fn move_selection_down(&mut self) {
        let visible_len = self.presenter.visible().len();
        if visible_len == 0 {
            return;
        }

        if self.selected_index + 1 < visible_len {
            self.selected_index += 1;
        } else if self.presenter.mode() == DisplayMode::Continuous && !self.presenter.is_exhausted()
        {
            // Hold at the boundary; the load-more signal will extend the list.
        } else {
            self.selected_index = 0;
        }
    }

    /// Moves the selection up one item, wrapping to the bottom at the top.
    pub fn move_selection_up(&mut self) {
        let visible_len = self.presenter.visible().len();
        if visible_len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = visible_len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Clamps the selection after the visible window shrank.
    pub fn clamp_selection(&mut self) {
        let visible_len = self.presenter.visible().len();
        if visible_len == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(visible_len - 1);
        }
    }

    /// Whether the event loop should deliver an end-proximity signal: the
    /// selection has entered the trailing rows of a registered, unexhausted
    /// continuous window.
    #[must_use]
    pub fn wants_more(&self) -> bool {
        if self.detail_pane.is_some() || !self.sentinel.is_registered() {
            return false;
        }
        if self.presenter.mode() != DisplayMode::Continuous || self.presenter.is_exhausted() {
            return false;
        }
        let visible_len = self.presenter.visible().len();
        self.selected_index + END_PROXIMITY >= visible_len
    }

    /// Computes a renderable view model from current state and terminal
    /// dimensions.
    ///
    /// Handles windowing (centering the selection in the available rows),
    /// search match highlighting, and the loading/empty/detail body states.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            filter_panel: self.compute_filter_panel(),
            body: self.compute_body(rows, cols),
        }
    }

    fn compute_body(&self, rows: usize, cols: usize) -> BodyViewModel {
        if let Some(pane) = &self.detail_pane {
            if pane.loading {
                return BodyViewModel::DetailLoading {
                    code: pane.code.clone(),
                };
            }
            return match &pane.detail {
                Some(detail) => BodyViewModel::Detail(Box::new(DetailViewModel::bind(detail))),
                None => BodyViewModel::DetailNotFound {
                    code: pane.code.clone(),
                },
            };
        }

        if self.loading {
            return BodyViewModel::Loading;
        }

        let visible = self.presenter.visible();
        if visible.is_empty() {
            let (message, subtitle) = if self.filter.is_active() {
                (
                    "No countries match".to_string(),
                    "Adjust the search or filters, or press c to clear them".to_string(),
                )
            } else {
                (
                    "No countries available".to_string(),
                    "Press r to retry the fetch".to_string(),
                )
            };
            return BodyViewModel::Empty(EmptyState { message, subtitle });
        }

        let capacity = self.viewport_capacity(rows, cols);
        let (start, end) = self.window_bounds(visible.len(), capacity, cols);

        let items: Vec<DisplayItem> = visible[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, country)| {
                self.compute_display_item(country, start + relative_idx)
            })
            .collect();

        let body = ListBody {
            items,
            selected_index: self.selected_index.saturating_sub(start),
            pagination: self.compute_pagination(),
            progress: self.compute_progress(),
        };

        match self.view_style {
            ViewStyle::Table => BodyViewModel::Table(body),
            ViewStyle::Card => BodyViewModel::Cards(body),
        }
    }

    /// Number of items the viewport can show for the active view style.
    fn viewport_capacity(&self, rows: usize, cols: usize) -> usize {
        let available_rows = self.calculate_available_rows(rows);
        match self.view_style {
            ViewStyle::Table => available_rows.max(1),
            ViewStyle::Card => {
                let columns = (cols / CARD_CELL_WIDTH).max(1);
                let card_rows = (available_rows / CARD_CELL_HEIGHT).max(1);
                columns * card_rows
            }
        }
    }

    /// Rows left for list content after the surrounding chrome.
    fn calculate_available_rows(&self, rows: usize) -> usize {
        // Blank + title + subtitle + border on top, status + border + footer
        // at the bottom.
        let mut chrome = 7;
        if matches!(self.input_mode, InputMode::Search(_)) {
            chrome += 3;
        }
        if self.input_mode == InputMode::Filter {
            chrome += 3;
        }
        if self.view_style == ViewStyle::Table {
            chrome += 1;
        }
        rows.saturating_sub(chrome)
    }

    /// Centers the selection within `capacity` items, aligning card windows
    /// to full grid rows.
    fn window_bounds(&self, len: usize, capacity: usize, cols: usize) -> (usize, usize) {
        let align = match self.view_style {
            ViewStyle::Table => 1,
            ViewStyle::Card => (cols / CARD_CELL_WIDTH).max(1),
        };

        let mut start = self.selected_index.saturating_sub(capacity / 2);
        start -= start % align;
        let end = (start + capacity).min(len);

        if end - start < capacity && len >= capacity {
            start = end.saturating_sub(capacity);
            start -= start % align;
        }

        (start, end)
    }

    fn compute_display_item(&self, country: &CountrySummary, absolute_idx: usize) -> DisplayItem {
        let highlight_ranges = if matches!(self.input_mode, InputMode::Search(_)) {
            substring_ranges(&country.common_name, &self.filter.query)
        } else {
            Vec::new()
        };

        DisplayItem {
            name: country.common_name.clone(),
            region: country.region.clone(),
            population: country.population,
            area: country.area,
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_pagination(&self) -> Option<PaginationInfo> {
        if self.presenter.mode() != DisplayMode::Paginated {
            return None;
        }
        Some(PaginationInfo {
            page: self.presenter.current_page(),
            page_count: self.presenter.page_count(),
            at_first: self.presenter.at_first_page(),
            at_last: self.presenter.at_last_page(),
        })
    }

    fn compute_progress(&self) -> Option<LoadProgress> {
        if self.presenter.mode() != DisplayMode::Continuous {
            return None;
        }
        Some(LoadProgress {
            loaded: self.presenter.visible().len(),
            total: self.presenter.total(),
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        let sort = self.presenter.sort();
        let subtitle = format!(
            "{} of {} · sort: {} {} · {} view · updated {}",
            self.presenter.total(),
            self.catalog.records.len(),
            sort.key.label(),
            sort.direction.glyph(),
            self.view_style.label(),
            self.catalog.time_ago(),
        );
        HeaderInfo {
            title: "Atlascope".to_string(),
            subtitle,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.detail_pane.is_some() {
            "esc: back | q: quit".to_string()
        } else {
            match self.input_mode {
                InputMode::Normal => {
                    let paging = if self.presenter.mode() == DisplayMode::Paginated {
                        "n/b: page | g/G: first/last | "
                    } else {
                        ""
                    };
                    format!(
                        "j/k: move | enter: details | /: search | f: filters | \
                         s: sort | o: order | {paging}v: view | p: pages | d: theme | q: quit"
                    )
                }
                InputMode::Search(SearchFocus::Typing) => {
                    "type to search | enter: results | esc: cancel".to_string()
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "j/k: move | enter: details | /: edit query | esc: exit search".to_string()
                }
                InputMode::Filter => {
                    "r: region | s: subregion | p: population | c: clear | esc: close".to_string()
                }
            }
        };
        FooterInfo { keybindings }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.filter.query.clone(),
                typing: focus == SearchFocus::Typing,
            }),
            _ => None,
        }
    }

    fn compute_filter_panel(&self) -> Option<FilterPanelInfo> {
        if self.input_mode != InputMode::Filter {
            return None;
        }
        let all = "All".to_string();
        Some(FilterPanelInfo {
            region: self.filter.region.clone().unwrap_or_else(|| all.clone()),
            subregion: self.filter.subregion.clone().unwrap_or_else(|| all.clone()),
            population: self
                .filter
                .population
                .map_or(all, |bracket| bracket.label().to_string()),
        })
    }

    /// Cycles the region facet (None -> each region -> None) and re-filters.
    pub fn cycle_region(&mut self) {
        self.filter.region = cycle_option(&self.filter.region, &self.facets.regions);
        self.refresh_list();
    }

    /// Cycles the subregion facet and re-filters.
    pub fn cycle_subregion(&mut self) {
        self.filter.subregion = cycle_option(&self.filter.subregion, &self.facets.subregions);
        self.refresh_list();
    }

    /// Cycles the population bracket and re-filters.
    pub fn cycle_population(&mut self) {
        self.filter.population = cycle_option(
            &self.filter.population,
            &crate::domain::PopulationBracket::ALL,
        );
        self.refresh_list();
    }
}

/// Maps the persisted pagination flag to the engine's display mode.
#[must_use]
pub fn display_mode(preferences: &Preferences) -> DisplayMode {
    if preferences.paginated {
        DisplayMode::Paginated
    } else {
        DisplayMode::Continuous
    }
}

/// Byte ranges of case-insensitive occurrences of `query` in `text`.
///
/// Used for search match highlighting. Empty queries highlight nothing.
fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }

    let haystack = text.to_lowercase();
    let needle = query.to_lowercase();

    // Lowercasing can change byte lengths for non-ASCII text; only emit
    // ranges that still fall on character boundaries of the original.
    let mut ranges = Vec::new();
    let mut offset = 0;
    while let Some(position) = haystack[offset..].find(&needle) {
        let start = offset + position;
        let end = start + needle.len();
        if text.is_char_boundary(start) && text.get(start..end).is_some() {
            ranges.push((start, end));
        }
        offset = start + needle.len().max(1);
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, name: &str, population: u64) -> CountrySummary {
        CountrySummary {
            code: code.to_string(),
            common_name: name.to_string(),
            population,
            area: 0.0,
            region: "Europe".to_string(),
            subregion: None,
            flag_svg: String::new(),
        }
    }

    fn loaded_state(paginated: bool, count: usize) -> AppState {
        let preferences = Preferences {
            paginated,
            ..Preferences::default()
        };
        let mut state = AppState::new(preferences, Theme::default());
        let records: Vec<CountrySummary> = (0..count)
            .map(|i| country(&format!("C{i:02}"), &format!("Country {i:02}"), i as u64))
            .collect();
        state.set_catalog(records);
        state
    }

    #[test]
    fn continuous_start_registers_the_sentinel() {
        let state = loaded_state(false, 5);
        assert!(state.sentinel.is_registered());

        let paginated = loaded_state(true, 5);
        assert!(!paginated.sentinel.is_registered());
    }

    #[test]
    fn selection_holds_at_continuous_boundary_until_loaded() {
        let mut state = loaded_state(false, 30);
        // Table profile: initial continuous window of 20.
        assert_eq!(state.presenter.visible().len(), 20);

        for _ in 0..40 {
            state.move_selection_down();
        }
        assert_eq!(state.selected_index, 19);
        assert!(state.wants_more());

        assert!(state.presenter.load_more());
        state.move_selection_down();
        assert_eq!(state.selected_index, 20);
    }

    #[test]
    fn selection_wraps_in_paginated_mode() {
        let mut state = loaded_state(true, 3);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn wants_more_is_false_on_detail_screen_and_when_exhausted() {
        let mut state = loaded_state(false, 30);
        for _ in 0..19 {
            state.move_selection_down();
        }
        assert!(state.wants_more());

        state.detail_pane = Some(DetailPane {
            code: "C00".to_string(),
            loading: true,
            detail: None,
        });
        assert!(!state.wants_more());
        state.detail_pane = None;

        while state.presenter.load_more() {}
        assert!(!state.wants_more());
    }

    #[test]
    fn substring_ranges_are_case_insensitive_and_repeating() {
        assert_eq!(substring_ranges("Iceland", "lan"), vec![(3, 6)]);
        assert_eq!(substring_ranges("Iceland", "ICE"), vec![(0, 3)]);
        assert_eq!(substring_ranges("banana", "an"), vec![(1, 3), (3, 5)]);
        assert!(substring_ranges("Iceland", "").is_empty());
        assert!(substring_ranges("Iceland", "xyz").is_empty());
    }

    #[test]
    fn facet_cycling_refilters_and_resets_selection() {
        let mut state = loaded_state(true, 5);
        state.move_selection_down();
        state.cycle_region();
        assert_eq!(state.filter.region.as_deref(), Some("Europe"));
        assert_eq!(state.selected_index, 0);

        state.cycle_region();
        assert!(state.filter.region.is_none());
    }
}

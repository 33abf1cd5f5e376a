//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like highlight ranges, selection
//! state, and placeholder-substituted detail fields.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data. The
//! body is an enum because the screens are mutually exclusive: one of loading,
//! empty, a list (table or cards), or the detail page.

use crate::domain::CountryDetail;
use crate::ui::helpers::{format_area, format_count};

/// Width of one card cell in the grid, including padding.
pub const CARD_CELL_WIDTH: usize = 30;

/// Height of one card cell in the grid, including the border row.
pub const CARD_CELL_HEIGHT: usize = 5;

/// Placeholder for detail fields with no data.
pub const NOT_AVAILABLE: &str = "Not available";

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render one frame. Optional
/// chrome (search bar, filter panel) is present only in the matching input
/// mode.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, catalog summary line).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints for the current mode).
    pub footer: FooterInfo,

    /// Search input box, present in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Facet panel, present in filter mode.
    pub filter_panel: Option<FilterPanelInfo>,

    /// The main screen content.
    pub body: BodyViewModel,
}

/// The mutually exclusive main screen states.
#[derive(Debug, Clone)]
pub enum BodyViewModel {
    /// Initial or refresh fetch in flight.
    Loading,

    /// No records to show, with an explanation.
    Empty(EmptyState),

    /// Tabular rows.
    Table(ListBody),

    /// Bordered card grid.
    Cards(ListBody),

    /// Detail fetch in flight for the named code.
    DetailLoading { code: String },

    /// Fully loaded detail page.
    Detail(Box<DetailViewModel>),

    /// Detail fetch finished with no record for the code.
    DetailNotFound { code: String },
}

/// Shared content of the table and card bodies.
#[derive(Debug, Clone)]
pub struct ListBody {
    /// Items windowed to the viewport, in display order.
    pub items: Vec<DisplayItem>,

    /// Selection index relative to `items`.
    pub selected_index: usize,

    /// Page navigation state, present in paginated mode.
    pub pagination: Option<PaginationInfo>,

    /// Loaded/total counts, present in continuous mode.
    pub progress: Option<LoadProgress>,
}

/// Display information for a single country row or card.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Common country name.
    pub name: String,

    /// Region (continent) name.
    pub region: String,

    /// Population count, formatted by the renderer.
    pub population: u64,

    /// Land area in square kilometres.
    pub area: f64,

    /// Whether this item is currently selected.
    pub is_selected: bool,

    /// Byte ranges of the name to highlight for search matches.
    ///
    /// Each tuple is `(start, end)` in byte indices on char boundaries.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Summary line: counts, sort, view style, freshness.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit | /: search").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No countries match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether the input field has focus (shows the cursor).
    pub typing: bool,
}

/// Facet panel display information: the current value of each facet,
/// with "All" standing in for no constraint.
#[derive(Debug, Clone)]
pub struct FilterPanelInfo {
    /// Selected region, or "All".
    pub region: String,

    /// Selected subregion, or "All".
    pub subregion: String,

    /// Selected population bracket label, or "All".
    pub population: String,
}

/// Page navigation state for the paginated footer row.
#[derive(Debug, Clone)]
pub struct PaginationInfo {
    /// Zero-based current page index.
    pub page: usize,

    /// Total number of pages (at least 1).
    pub page_count: usize,

    /// Whether first/previous navigation is disabled.
    pub at_first: bool,

    /// Whether next/last navigation is disabled.
    pub at_last: bool,
}

/// Loaded/total counts for the continuous-mode status row.
#[derive(Debug, Clone)]
pub struct LoadProgress {
    /// Items revealed so far.
    pub loaded: usize,

    /// Total items after filtering.
    pub total: usize,
}

/// A labelled field on the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    /// Field label (e.g., "Capital").
    pub label: &'static str,

    /// Pre-formatted value, never empty: missing data is substituted with
    /// the "Not available" placeholder before it reaches the renderer.
    pub value: String,
}

/// Display-ready detail page content.
///
/// Binding happens once per fetched record: every optional or empty source
/// field is replaced with [`NOT_AVAILABLE`], lists are joined with commas,
/// and numbers are formatted, so the renderer deals in plain strings only.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    /// Common country name, the page title.
    pub name: String,

    /// Official long-form name.
    pub official_name: String,

    /// Labelled fields in display order.
    pub fields: Vec<DetailField>,

    /// External map link, if the record carries one.
    pub map_url: Option<String>,
}

impl DetailViewModel {
    /// Binds a fetched record into display-ready fields.
    #[must_use]
    pub fn bind(detail: &CountryDetail) -> Self {
        let fields = vec![
            DetailField {
                label: "Region",
                value: text_or_placeholder(&detail.region),
            },
            DetailField {
                label: "Subregion",
                value: option_or_placeholder(detail.subregion.as_deref()),
            },
            DetailField {
                label: "Capital",
                value: list_or_placeholder(&detail.capitals),
            },
            DetailField {
                label: "Population",
                value: format_count(detail.population),
            },
            DetailField {
                label: "Area",
                value: format_area(detail.area),
            },
            DetailField {
                label: "Languages",
                value: list_or_placeholder(&detail.languages),
            },
            DetailField {
                label: "Currencies",
                value: list_or_placeholder(
                    &detail
                        .currencies
                        .iter()
                        .map(crate::domain::Currency::display)
                        .collect::<Vec<_>>(),
                ),
            },
            DetailField {
                label: "Timezones",
                value: list_or_placeholder(&detail.timezones),
            },
            DetailField {
                label: "Top-level domains",
                value: list_or_placeholder(&detail.top_level_domains),
            },
            DetailField {
                label: "Calling code",
                value: option_or_placeholder(detail.calling_code.as_deref()),
            },
            DetailField {
                label: "Demonym",
                value: option_or_placeholder(detail.demonym.as_deref()),
            },
        ];

        Self {
            name: detail.common_name.clone(),
            official_name: detail.official_name.clone(),
            fields,
            map_url: detail.map_url.clone(),
        }
    }
}

fn text_or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

fn option_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn list_or_placeholder(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;

    fn minimal_detail() -> CountryDetail {
        CountryDetail {
            code: "ISL".to_string(),
            common_name: "Iceland".to_string(),
            official_name: "Iceland".to_string(),
            population: 366_425,
            area: 103_000.0,
            region: "Europe".to_string(),
            subregion: None,
            flag_svg: String::new(),
            capitals: Vec::new(),
            languages: Vec::new(),
            currencies: Vec::new(),
            timezones: Vec::new(),
            top_level_domains: Vec::new(),
            calling_code: None,
            demonym: None,
            map_url: None,
            coat_of_arms_svg: None,
        }
    }

    fn field<'a>(vm: &'a DetailViewModel, label: &str) -> &'a str {
        &vm.fields
            .iter()
            .find(|f| f.label == label)
            .unwrap_or_else(|| panic!("missing field {label}"))
            .value
    }

    #[test]
    fn missing_fields_bind_to_the_placeholder() {
        let vm = DetailViewModel::bind(&minimal_detail());
        for label in [
            "Subregion",
            "Capital",
            "Languages",
            "Currencies",
            "Timezones",
            "Top-level domains",
            "Calling code",
            "Demonym",
        ] {
            assert_eq!(field(&vm, label), NOT_AVAILABLE, "field {label}");
        }
        assert!(vm.map_url.is_none());
    }

    #[test]
    fn populated_fields_are_joined_and_formatted() {
        let mut detail = minimal_detail();
        detail.capitals = vec!["Reykjavik".to_string()];
        detail.languages = vec!["Icelandic".to_string(), "Danish".to_string()];
        detail.currencies = vec![Currency {
            name: "Icelandic krona".to_string(),
            symbol: "kr".to_string(),
        }];
        detail.calling_code = Some("+354".to_string());
        detail.map_url = Some("https://goo.gl/maps/example".to_string());

        let vm = DetailViewModel::bind(&detail);
        assert_eq!(vm.name, "Iceland");
        assert_eq!(field(&vm, "Capital"), "Reykjavik");
        assert_eq!(field(&vm, "Languages"), "Icelandic, Danish");
        assert_eq!(field(&vm, "Currencies"), "Icelandic krona (kr)");
        assert_eq!(field(&vm, "Population"), "366,425");
        assert_eq!(field(&vm, "Calling code"), "+354");
        assert_eq!(vm.map_url.as_deref(), Some("https://goo.gl/maps/example"));
    }
}

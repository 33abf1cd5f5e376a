//! Event handling and state transitions.
//!
//! [`handle_event`] is the single entry point for all input: keyboard events
//! translated by the terminal shim, end-proximity signals from the event
//! loop, and responses drained from the fetch worker. It mutates the state
//! and returns whether a re-render is needed plus any side effects for the
//! shim to execute.

use crate::domain::error::Result;
use crate::engine::DisplayMode;
use crate::worker::{WorkerRequest, WorkerResponse};
use super::actions::Action;
use super::modes::{InputMode, SearchFocus};
use super::state::{display_mode, AppState, DetailPane};

/// Input events delivered to the handler.
///
/// Keyboard input is translated into these by the shim in `main.rs`; the
/// handler itself never sees raw key codes.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Move the selection down one item.
    MoveDown,
    /// Move the selection up one item.
    MoveUp,
    /// Open the detail page for the selected country.
    OpenDetail,
    /// Leave the detail page, or back out of the current input mode.
    Escape,
    /// Quit the application.
    Quit,

    /// Advance to the next page (paginated mode).
    NextPage,
    /// Go back to the previous page (paginated mode).
    PreviousPage,
    /// Jump to the first page (paginated mode).
    FirstPage,
    /// Jump to the last page (paginated mode).
    LastPage,

    /// Enter search mode with the input field focused.
    EnterSearch,
    /// Switch search focus from the input field to the results.
    FocusResults,
    /// Switch search focus from the results back to the input field.
    FocusSearchBar,
    /// Append a character to the search query.
    SearchChar(char),
    /// Delete the last character of the search query.
    SearchBackspace,

    /// Open the filter panel.
    EnterFilterPanel,
    /// Cycle the region facet.
    CycleRegion,
    /// Cycle the subregion facet.
    CycleSubregion,
    /// Cycle the population bracket.
    CyclePopulation,
    /// Clear all filter constraints including the search query.
    ClearFilters,

    /// Toggle between the table and card views.
    ToggleViewStyle,
    /// Toggle between paginated and continuous display modes.
    TogglePagination,
    /// Toggle between the dark and light themes.
    ToggleDarkMode,
    /// Advance the sort key (name, population, area).
    CycleSortKey,
    /// Flip the sort direction.
    ToggleSortDirection,

    /// Re-fetch the country list from the API.
    Refresh,
    /// The selection reached the trailing rows of a continuous window.
    EndReached,
    /// A response drained from the fetch worker.
    WorkerResponse(WorkerResponse),
}

/// Processes one event against the state.
///
/// Returns `(should_render, actions)`: whether the UI must be redrawn, and
/// side effects for the shim to execute. Events that do not apply in the
/// current mode are ignored without a render.
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::MoveDown => {
            state.move_selection_down();
            Ok((true, Vec::new()))
        }
        Event::MoveUp => {
            state.move_selection_up();
            Ok((true, Vec::new()))
        }

        Event::OpenDetail => handle_open_detail(state),
        Event::Escape => handle_escape(state),

        Event::NextPage => handle_page_change(state, |s| s.presenter.next_page()),
        Event::PreviousPage => handle_page_change(state, |s| s.presenter.previous_page()),
        Event::FirstPage => handle_page_change(state, |s| s.presenter.first_page()),
        Event::LastPage => handle_page_change(state, |s| s.presenter.last_page()),

        Event::EnterSearch => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, Vec::new()))
        }
        Event::FocusResults => {
            if state.input_mode == InputMode::Search(SearchFocus::Typing) {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
                return Ok((true, Vec::new()));
            }
            Ok((false, Vec::new()))
        }
        Event::FocusSearchBar => {
            if state.input_mode == InputMode::Search(SearchFocus::Navigating) {
                state.input_mode = InputMode::Search(SearchFocus::Typing);
                return Ok((true, Vec::new()));
            }
            Ok((false, Vec::new()))
        }
        Event::SearchChar(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, Vec::new()));
            }
            state.filter.query.push(c);
            state.refresh_list();
            Ok((true, Vec::new()))
        }
        Event::SearchBackspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, Vec::new()));
            }
            if state.filter.query.pop().is_some() {
                state.refresh_list();
            }
            Ok((true, Vec::new()))
        }

        Event::EnterFilterPanel => {
            state.input_mode = InputMode::Filter;
            Ok((true, Vec::new()))
        }
        Event::CycleRegion => {
            state.cycle_region();
            Ok((true, Vec::new()))
        }
        Event::CycleSubregion => {
            state.cycle_subregion();
            Ok((true, Vec::new()))
        }
        Event::CyclePopulation => {
            state.cycle_population();
            Ok((true, Vec::new()))
        }
        Event::ClearFilters => {
            state.filter.clear();
            state.refresh_list();
            Ok((true, Vec::new()))
        }

        Event::ToggleViewStyle => handle_toggle_view_style(state),
        Event::TogglePagination => handle_toggle_pagination(state),
        Event::ToggleDarkMode => handle_toggle_dark_mode(state),

        Event::CycleSortKey => {
            let mut sort = state.presenter.sort();
            sort.key = sort.key.next();
            state.presenter.set_sort(sort);
            state.selected_index = 0;
            Ok((true, Vec::new()))
        }
        Event::ToggleSortDirection => {
            let mut sort = state.presenter.sort();
            sort.direction = sort.direction.toggled();
            state.presenter.set_sort(sort);
            state.selected_index = 0;
            Ok((true, Vec::new()))
        }

        Event::Refresh => {
            state.generation += 1;
            state.loading = true;
            tracing::info!(generation = state.generation, "refreshing country list");
            Ok((
                true,
                vec![Action::PostToWorker(WorkerRequest::FetchAllCountries {
                    generation: state.generation,
                })],
            ))
        }

        Event::EndReached => {
            if !state.sentinel.observe() {
                return Ok((false, Vec::new()));
            }
            let grew = state.presenter.load_more();
            Ok((grew, Vec::new()))
        }

        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

fn handle_open_detail(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.detail_pane.is_some() {
        return Ok((false, Vec::new()));
    }
    let Some(country) = state.selected_country() else {
        return Ok((false, Vec::new()));
    };

    let code = country.code.clone();
    state.detail_pane = Some(DetailPane {
        code: code.clone(),
        loading: true,
        detail: None,
    });
    tracing::debug!(code = %code, "opening detail page");

    Ok((
        true,
        vec![Action::PostToWorker(WorkerRequest::FetchCountryDetails {
            code,
            generation: state.generation,
        })],
    ))
}

fn handle_escape(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.detail_pane.take().is_some() {
        return Ok((true, Vec::new()));
    }
    match state.input_mode {
        InputMode::Search(_) | InputMode::Filter => {
            state.input_mode = InputMode::Normal;
            Ok((true, Vec::new()))
        }
        InputMode::Normal => Ok((false, Vec::new())),
    }
}

fn handle_page_change(
    state: &mut AppState,
    navigate: impl FnOnce(&mut AppState),
) -> Result<(bool, Vec<Action>)> {
    if state.presenter.mode() != DisplayMode::Paginated {
        return Ok((false, Vec::new()));
    }
    let before = state.presenter.current_page();
    navigate(state);
    if state.presenter.current_page() == before {
        return Ok((false, Vec::new()));
    }
    state.selected_index = 0;
    Ok((true, Vec::new()))
}

fn handle_toggle_view_style(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    state.view_style = state.view_style.toggled();
    state.preferences.view_mode = state.view_style;
    state.presenter.set_profile(state.view_style.profile());
    state.selected_index = 0;
    tracing::debug!(view = state.view_style.label(), "view style toggled");
    Ok((
        true,
        vec![Action::SavePreferences(state.preferences)],
    ))
}

fn handle_toggle_pagination(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    state.preferences.paginated = !state.preferences.paginated;
    let mode = display_mode(&state.preferences);
    state.presenter.set_mode(mode);
    state.selected_index = 0;

    // The end-proximity signal only applies to a continuous window.
    match mode {
        DisplayMode::Continuous => {
            state.sentinel.register();
        }
        DisplayMode::Paginated => {
            state.sentinel.release();
        }
    }

    Ok((
        true,
        vec![Action::SavePreferences(state.preferences)],
    ))
}

fn handle_toggle_dark_mode(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    state.preferences.dark_mode = !state.preferences.dark_mode;
    state.theme = if state.preferences.dark_mode {
        crate::ui::theme::Theme::dark()
    } else {
        crate::ui::theme::Theme::light()
    };
    Ok((
        true,
        vec![Action::SavePreferences(state.preferences)],
    ))
}

fn handle_worker_response(
    state: &mut AppState,
    response: WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    if response.generation() != state.generation {
        tracing::debug!(
            response_generation = response.generation(),
            current_generation = state.generation,
            "dropping stale worker response"
        );
        return Ok((false, Vec::new()));
    }

    match response {
        WorkerResponse::CountriesLoaded { countries, .. } => {
            tracing::info!(count = countries.len(), "country list loaded");
            state.set_catalog(countries);
            Ok((true, Vec::new()))
        }
        WorkerResponse::DetailLoaded { code, detail, .. } => {
            let Some(pane) = state.detail_pane.as_mut() else {
                tracing::debug!(code = %code, "detail response with no detail pane open");
                return Ok((false, Vec::new()));
            };
            if pane.code != code {
                tracing::debug!(
                    response_code = %code,
                    pane_code = %pane.code,
                    "dropping detail response for a different country"
                );
                return Ok((false, Vec::new()));
            }
            pane.loading = false;
            pane.detail = detail.map(|d| *d);
            Ok((true, Vec::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountryDetail, CountrySummary};
    use crate::storage::Preferences;
    use crate::ui::theme::Theme;

    fn country(code: &str, name: &str, population: u64) -> CountrySummary {
        CountrySummary {
            code: code.to_string(),
            common_name: name.to_string(),
            population,
            area: 100.0,
            region: "Europe".to_string(),
            subregion: Some("Northern Europe".to_string()),
            flag_svg: String::new(),
        }
    }

    fn detail_for(code: &str) -> CountryDetail {
        CountryDetail {
            code: code.to_string(),
            common_name: "Iceland".to_string(),
            official_name: "Iceland".to_string(),
            population: 366_425,
            area: 103_000.0,
            region: "Europe".to_string(),
            subregion: Some("Northern Europe".to_string()),
            flag_svg: String::new(),
            capitals: vec!["Reykjavik".to_string()],
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

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Preferences::default(), Theme::default());
        state.set_catalog(vec![
            country("ISL", "Iceland", 366_425),
            country("NOR", "Norway", 5_379_475),
            country("SWE", "Sweden", 10_353_442),
        ]);
        state
    }

    #[test]
    fn quit_emits_quit_action_without_render() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(&mut state, Event::Quit).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn open_detail_posts_fetch_and_shows_loading_pane() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(&mut state, Event::OpenDetail).unwrap();
        assert!(render);

        let pane = state.detail_pane.as_ref().unwrap();
        assert_eq!(pane.code, "ISL");
        assert!(pane.loading);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerRequest::FetchCountryDetails {
                code: "ISL".to_string(),
                generation: 0,
            })]
        );
    }

    #[test]
    fn detail_response_for_open_pane_is_applied() {
        let mut state = loaded_state();
        handle_event(&mut state, Event::OpenDetail).unwrap();

        let response = WorkerResponse::DetailLoaded {
            code: "ISL".to_string(),
            detail: Some(Box::new(detail_for("ISL"))),
            generation: 0,
        };
        let (render, _) = handle_event(&mut state, Event::WorkerResponse(response)).unwrap();
        assert!(render);

        let pane = state.detail_pane.as_ref().unwrap();
        assert!(!pane.loading);
        assert!(pane.detail.is_some());
    }

    #[test]
    fn detail_response_for_other_code_is_dropped() {
        let mut state = loaded_state();
        handle_event(&mut state, Event::OpenDetail).unwrap();

        let response = WorkerResponse::DetailLoaded {
            code: "NOR".to_string(),
            detail: Some(Box::new(detail_for("NOR"))),
            generation: 0,
        };
        let (render, _) = handle_event(&mut state, Event::WorkerResponse(response)).unwrap();
        assert!(!render);
        assert!(state.detail_pane.as_ref().unwrap().loading);
    }

    #[test]
    fn stale_generation_response_is_dropped() {
        let mut state = loaded_state();
        handle_event(&mut state, Event::Refresh).unwrap();
        assert_eq!(state.generation, 1);

        let stale = WorkerResponse::CountriesLoaded {
            countries: vec![country("FRA", "France", 67_391_582)],
            generation: 0,
        };
        let (render, _) = handle_event(&mut state, Event::WorkerResponse(stale)).unwrap();
        assert!(!render);
        assert_eq!(state.catalog.records.len(), 3);
    }

    #[test]
    fn escape_leaves_detail_then_search() {
        let mut state = loaded_state();
        handle_event(&mut state, Event::EnterSearch).unwrap();
        handle_event(&mut state, Event::FocusResults).unwrap();
        handle_event(&mut state, Event::OpenDetail).unwrap();

        let (render, _) = handle_event(&mut state, Event::Escape).unwrap();
        assert!(render);
        assert!(state.detail_pane.is_none());
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        handle_event(&mut state, Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn typing_updates_query_and_resets_selection() {
        let mut state = loaded_state();
        state.move_selection_down();
        handle_event(&mut state, Event::EnterSearch).unwrap();
        handle_event(&mut state, Event::SearchChar('i')).unwrap();
        handle_event(&mut state, Event::SearchChar('c')).unwrap();

        assert_eq!(state.filter.query, "ic");
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.presenter.total(), 1);

        handle_event(&mut state, Event::SearchBackspace).unwrap();
        assert_eq!(state.filter.query, "i");
    }

    #[test]
    fn search_chars_are_ignored_outside_typing_focus() {
        let mut state = loaded_state();
        let (render, _) = handle_event(&mut state, Event::SearchChar('x')).unwrap();
        assert!(!render);
        assert!(state.filter.query.is_empty());
    }

    #[test]
    fn pagination_toggle_saves_preferences_and_registers_sentinel() {
        let mut state = loaded_state();
        assert!(!state.sentinel.is_registered());

        let (_, actions) = handle_event(&mut state, Event::TogglePagination).unwrap();
        assert!(state.sentinel.is_registered());
        assert!(!state.preferences.paginated);
        assert!(matches!(actions[0], Action::SavePreferences(_)));

        handle_event(&mut state, Event::TogglePagination).unwrap();
        assert!(!state.sentinel.is_registered());
        assert!(state.preferences.paginated);
    }

    #[test]
    fn page_navigation_is_ignored_in_continuous_mode() {
        let mut state = loaded_state();
        handle_event(&mut state, Event::TogglePagination).unwrap();
        let (render, _) = handle_event(&mut state, Event::NextPage).unwrap();
        assert!(!render);
    }

    #[test]
    fn end_reached_extends_a_registered_continuous_window() {
        let mut state = AppState::new(
            Preferences {
                paginated: false,
                ..Preferences::default()
            },
            Theme::default(),
        );
        let records: Vec<CountrySummary> = (0..25)
            .map(|i| country(&format!("C{i:02}"), &format!("Country {i:02}"), i as u64))
            .collect();
        state.set_catalog(records);
        assert_eq!(state.presenter.visible().len(), 20);

        let (render, _) = handle_event(&mut state, Event::EndReached).unwrap();
        assert!(render);
        assert_eq!(state.presenter.visible().len(), 25);

        // Exhausted: further signals change nothing.
        let (render, _) = handle_event(&mut state, Event::EndReached).unwrap();
        assert!(!render);
    }

    #[test]
    fn view_style_toggle_swaps_profile_and_persists() {
        let mut state = loaded_state();
        let (_, actions) = handle_event(&mut state, Event::ToggleViewStyle).unwrap();
        assert_eq!(state.view_style, crate::engine::ViewStyle::Card);
        assert_eq!(state.presenter.profile().page_size, 12);
        assert!(matches!(actions[0], Action::SavePreferences(_)));
    }

    #[test]
    fn sort_cycle_resets_selection() {
        let mut state = loaded_state();
        state.move_selection_down();
        handle_event(&mut state, Event::CycleSortKey).unwrap();
        assert_eq!(state.selected_index, 0);
        assert_eq!(
            state.presenter.sort().key,
            crate::engine::SortKey::Population
        );
    }
}

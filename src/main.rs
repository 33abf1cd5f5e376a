//! Terminal shim: entry point, event loop, and effect execution.
//!
//! Owns everything the pure application layer must not touch: terminal setup
//! and restoration, raw keyboard input, the fetch worker lifecycle, and the
//! preference store. Keyboard input is translated into [`Event`]s per input
//! mode, handed to [`handle_event`], and the returned [`Action`]s are
//! executed here.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};

use atlascope::api::CountryApi;
use atlascope::app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
use atlascope::infrastructure::paths;
use atlascope::observability::init_tracing;
use atlascope::storage::{JsonPreferences, PreferenceStore};
use atlascope::worker::{FetchWorker, WorkerRequest};
use atlascope::{Config, Result};

/// How long one poll for keyboard input waits before the loop services the
/// worker channel again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// RAII guard for terminal state.
///
/// Enters the alternate screen, enables raw mode, and hides the cursor on
/// construction; restores all three on drop, including during a panic
/// unwind, so the user's shell is never left in raw mode.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
    }
}

fn main() -> Result<()> {
    let config = Config::load();
    init_tracing(&config);
    tracing::info!("atlascope starting");

    let mut store = JsonPreferences::new(paths::preferences_file())?;
    let preferences = store.load();

    let mut state = atlascope::initialize(&config, preferences);

    let api = match &config.api_base_url {
        Some(base_url) => CountryApi::with_base_url(base_url.clone())?,
        None => CountryApi::new()?,
    };
    let worker = FetchWorker::spawn(api);
    worker.post(WorkerRequest::FetchAllCountries {
        generation: state.generation,
    });

    let guard = TerminalGuard::new()?;
    let result = run_event_loop(&mut state, &worker, &mut store);
    drop(guard);

    tracing::info!("atlascope exiting");
    result
}

/// The blocking event loop: render, poll input, drain the worker.
fn run_event_loop(
    state: &mut AppState,
    worker: &FetchWorker,
    store: &mut JsonPreferences,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            render_frame(state)?;
            needs_render = false;
        }

        let mut pending: Vec<Event> = Vec::new();

        if event::poll(POLL_INTERVAL)? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    pending.extend(translate_key(state, key));
                }
            } else {
                // Resize and other terminal events just trigger a redraw.
                needs_render = true;
            }
        }

        for response in worker.drain_responses() {
            pending.push(Event::WorkerResponse(response));
        }

        for app_event in pending {
            let (render, actions) = handle_event(state, app_event)?;
            needs_render |= render;

            for action in actions {
                match action {
                    Action::Quit => return Ok(()),
                    Action::PostToWorker(request) => worker.post(request),
                    Action::SavePreferences(preferences) => {
                        if let Err(e) = store.update(&mut |prefs| *prefs = preferences) {
                            tracing::error!(error = %e, "failed to persist preferences");
                        }
                    }
                }
            }
        }

        // Selection near the end of a continuous window: deliver the
        // end-proximity signal the engine's load-more path expects.
        if state.wants_more() {
            let (render, _) = handle_event(state, Event::EndReached)?;
            needs_render |= render;
        }
    }
}

fn render_frame(state: &AppState) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    execute!(io::stdout(), Clear(ClearType::All))?;
    atlascope::ui::render(state, rows as usize, cols as usize);
    io::stdout().flush()?;
    Ok(())
}

/// Maps a raw key press to application events for the current input mode.
fn translate_key(state: &AppState, key: KeyEvent) -> Option<Event> {
    // Ctrl+C always quits, whatever the mode.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::Quit);
    }

    if state.detail_pane.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Event::Escape),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Normal => translate_normal_key(key.code),
        InputMode::Search(SearchFocus::Typing) => match key.code {
            KeyCode::Esc => Some(Event::Escape),
            KeyCode::Enter => Some(Event::FocusResults),
            KeyCode::Backspace => Some(Event::SearchBackspace),
            KeyCode::Char(c) => Some(Event::SearchChar(c)),
            _ => None,
        },
        InputMode::Search(SearchFocus::Navigating) => match key.code {
            KeyCode::Esc => Some(Event::Escape),
            KeyCode::Char('/') => Some(Event::FocusSearchBar),
            KeyCode::Char('j') | KeyCode::Down => Some(Event::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Event::MoveUp),
            KeyCode::Enter => Some(Event::OpenDetail),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        },
        InputMode::Filter => match key.code {
            KeyCode::Esc => Some(Event::Escape),
            KeyCode::Char('r') => Some(Event::CycleRegion),
            KeyCode::Char('s') => Some(Event::CycleSubregion),
            KeyCode::Char('p') => Some(Event::CyclePopulation),
            KeyCode::Char('c') => Some(Event::ClearFilters),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        },
    }
}

fn translate_normal_key(code: KeyCode) -> Option<Event> {
    match code {
        KeyCode::Char('q') => Some(Event::Quit),
        KeyCode::Esc => Some(Event::Escape),
        KeyCode::Char('j') | KeyCode::Down => Some(Event::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Event::MoveUp),
        KeyCode::Enter => Some(Event::OpenDetail),
        KeyCode::Char('/') => Some(Event::EnterSearch),
        KeyCode::Char('f') => Some(Event::EnterFilterPanel),
        KeyCode::Char('s') => Some(Event::CycleSortKey),
        KeyCode::Char('o') => Some(Event::ToggleSortDirection),
        KeyCode::Char('v') => Some(Event::ToggleViewStyle),
        KeyCode::Char('p') => Some(Event::TogglePagination),
        KeyCode::Char('d') => Some(Event::ToggleDarkMode),
        KeyCode::Char('n') | KeyCode::Right => Some(Event::NextPage),
        KeyCode::Char('b') | KeyCode::Left => Some(Event::PreviousPage),
        KeyCode::Char('g') => Some(Event::FirstPage),
        KeyCode::Char('G') => Some(Event::LastPage),
        KeyCode::Char('r') => Some(Event::Refresh),
        KeyCode::Char('c') => Some(Event::ClearFilters),
        _ => None,
    }
}

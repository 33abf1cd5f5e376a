//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to [`components::render_frame`]
//!
//! Output goes to stdout as ANSI-styled text via `print!`; the shim owns
//! screen clearing and cursor visibility around each frame.

use crate::app::AppState;
use crate::ui::components;

/// Renders the UI to stdout.
///
/// Computes the view model from application state and hands it to the frame
/// renderer together with the active theme and terminal dimensions.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_frame(&viewmodel, &state.theme, rows, cols);
}

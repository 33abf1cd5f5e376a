//! User interface rendering layer.
//!
//! This layer follows the MVVM pattern: application state is transformed
//! into immutable view models, which component renderers turn into
//! ANSI-styled terminal output.
//!
//! # Modules
//!
//! - [`theme`]: Color schemes and ANSI escape sequence generation
//! - [`viewmodel`]: Renderable state snapshots, including the detail binder
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Per-element renderers (header, table, cards, detail...)
//! - [`helpers`]: Cursor positioning, highlighting, number formatting

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;

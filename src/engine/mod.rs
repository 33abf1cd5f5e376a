//! The list presentation engine.
//!
//! This is the app's only genuinely stateful, order-sensitive logic: the
//! combined sort/paginate/load-more state machine behind every list view.
//! The original UI encoded it twice with divergent window sizes, once per
//! view; here a single [`ListPresenter`] is parameterized by a per-style
//! [`BatchProfile`] so the grid and the table cannot diverge.
//!
//! # Modules
//!
//! - [`sort`]: Sort specification and stable record ordering
//! - [`presenter`]: Window state machine and the scroll sentinel guard

pub mod presenter;
pub mod sort;

pub use presenter::{BatchProfile, DisplayMode, ListPresenter, ScrollSentinel, ViewStyle};
pub use sort::{SortDirection, SortKey, SortSpec};

//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar and catalog summary line
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`filter`]: Facet panel (region / subregion / population)
//! - [`table`]: Country list as columns (NAME, REGION, POPULATION, AREA)
//! - [`cards`]: Country list as a bordered card grid
//! - [`detail`]: Single-country detail page
//! - [`empty`]: Empty state message for no matches
//!
//! # Layout
//!
//! [`render_frame`] owns row accounting: a blank line, the two header rows
//! and a border on top; the status row (pagination or load progress), a
//! border, and the footer pinned to the bottom; the body in between.

mod cards;
mod detail;
mod empty;
mod filter;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyViewModel, ListBody, UIViewModel};

use cards::render_card_grid;
use detail::{render_detail, render_detail_message};
use empty::render_empty_state;
use filter::render_filter_panel;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one complete frame from a view model.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    if let Some(panel) = &vm.filter_panel {
        current_row = render_filter_panel(current_row, panel, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let status_row = border_row.saturating_sub(1);

    match &vm.body {
        BodyViewModel::Loading => {
            render_centered_message(current_row + 1, "Loading countries\u{2026}", theme, cols);
        }
        BodyViewModel::Empty(empty) => {
            render_empty_state(current_row + 1, empty, theme, cols);
        }
        BodyViewModel::Table(body) => {
            let row = render_table_headers(current_row, theme);
            render_table_rows(row, &body.items, theme, cols);
            render_status_row(status_row, body, theme, cols);
        }
        BodyViewModel::Cards(body) => {
            render_card_grid(current_row, body, theme, cols);
            render_status_row(status_row, body, theme, cols);
        }
        BodyViewModel::DetailLoading { code } => {
            render_detail_message(
                current_row + 1,
                &format!("Loading {code}\u{2026}"),
                theme,
                cols,
            );
        }
        BodyViewModel::Detail(detail) => {
            render_detail(current_row, detail, theme, cols);
        }
        BodyViewModel::DetailNotFound { code } => {
            render_detail_message(
                current_row + 1,
                &format!("No country found for {code}"),
                theme,
                cols,
            );
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the pagination or load-progress line above the footer border.
fn render_status_row(row: usize, body: &ListBody, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));

    let text = if let Some(p) = &body.pagination {
        let first = nav_label("|<", p.at_first);
        let prev = nav_label("< prev", p.at_first);
        let next = nav_label("next >", p.at_last);
        let last = nav_label(">|", p.at_last);
        format!(
            "{first}  {prev}   page {} of {}   {next}  {last}",
            p.page + 1,
            p.page_count
        )
    } else if let Some(progress) = &body.progress {
        if progress.loaded >= progress.total {
            format!("all {} shown", progress.total)
        } else {
            format!("{} of {} loaded \u{2014} scroll for more", progress.loaded, progress.total)
        }
    } else {
        String::new()
    };

    let padding = cols.saturating_sub(text.chars().count()) / 2;
    print!("{}{text}", " ".repeat(padding));
    print!("{}", Theme::reset());
}

fn nav_label(label: &str, disabled: bool) -> String {
    if disabled {
        format!("({label})")
    } else {
        label.to_string()
    }
}

/// Renders a single dimmed message centered horizontally.
fn render_centered_message(row: usize, message: &str, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    let padding = cols.saturating_sub(message.chars().count()) / 2;
    print!("{}{message}", " ".repeat(padding));
    print!("{}", Theme::reset());
}

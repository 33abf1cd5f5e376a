//! Detail page component renderer.
//!
//! Renders the single-country page: the common name as a heading, the
//! official name beneath it, then the labelled field list. Field values are
//! already placeholder-substituted by the view model binder, so every field
//! renders unconditionally.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailViewModel;

/// Left margin for the detail page content.
const DETAIL_MARGIN: usize = 3;

/// Width of the field label column.
const LABEL_WIDTH: usize = 20;

/// Renders the detail page starting at the specified row.
///
/// Returns the next available row position.
pub fn render_detail(row: usize, detail: &DetailViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    position_cursor(current_row, DETAIL_MARGIN);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", detail.name);
    print!("{}", Theme::reset());
    current_row += 1;

    if detail.official_name != detail.name {
        position_cursor(current_row, DETAIL_MARGIN);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", detail.official_name);
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    let value_width = cols.saturating_sub(DETAIL_MARGIN + LABEL_WIDTH + 1);
    for field in &detail.fields {
        position_cursor(current_row, DETAIL_MARGIN);
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        print!("{:<LABEL_WIDTH$}", field.label);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", clip(&field.value, value_width));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if let Some(url) = &detail.map_url {
        current_row += 1;
        position_cursor(current_row, DETAIL_MARGIN);
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        print!("{:<LABEL_WIDTH$}", "Map");
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", clip(url, value_width));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

/// Renders a single centered message for the loading and not-found states.
pub fn render_detail_message(row: usize, message: &str, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    let padding = cols.saturating_sub(message.chars().count()) / 2;
    print!("{}{message}", " ".repeat(padding));
    print!("{}", Theme::reset());
}

fn clip(text: &str, width: usize) -> String {
    crate::ui::helpers::truncate(text, width)
}

//! Card grid component renderer.
//!
//! Renders the country list as a grid of bordered cards, as many per row as
//! the terminal width allows. Cards carry the same fields as the table rows
//! (name, region, population, area) in a stacked layout.

use crate::ui::helpers::{format_area, format_count, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListBody, CARD_CELL_HEIGHT, CARD_CELL_WIDTH};

/// Inner box width: the cell minus one column of spacing.
const BOX_WIDTH: usize = CARD_CELL_WIDTH - 1;

/// Renders the card grid starting at the specified row.
///
/// Cards flow left to right, top to bottom. The selected card swaps its
/// border and text to the selection colors.
///
/// Returns the next available row position.
pub fn render_card_grid(row: usize, body: &ListBody, theme: &Theme, cols: usize) -> usize {
    let columns = (cols / CARD_CELL_WIDTH).max(1);

    for (index, item) in body.items.iter().enumerate() {
        let grid_row = index / columns;
        let grid_col = index % columns;
        let top = row + grid_row * CARD_CELL_HEIGHT;
        let left = 1 + grid_col * CARD_CELL_WIDTH;
        render_card(top, left, item, theme);
    }

    let used_rows = body.items.len().div_ceil(columns) * CARD_CELL_HEIGHT;
    row + used_rows
}

fn render_card(top: usize, left: usize, item: &DisplayItem, theme: &Theme) {
    let (border_color, text_color) = if item.is_selected {
        (&theme.colors.selection_bg, &theme.colors.selection_bg)
    } else {
        (&theme.colors.border, &theme.colors.text_normal)
    };
    let inner = BOX_WIDTH - 2;

    position_cursor(top, left);
    print!("{}", Theme::fg(border_color));
    print!("\u{250c}{}\u{2510}", "\u{2500}".repeat(inner));

    let name = truncate(&item.name, inner - 2);
    position_cursor(top + 1, left);
    print!("\u{2502}");
    print!("{}{}", Theme::bold(), Theme::fg(text_color));
    print!(" {name}");
    print!("{}", " ".repeat(inner.saturating_sub(name.chars().count() + 1)));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(border_color));
    print!("\u{2502}");

    let region = truncate(&item.region, inner - 2);
    render_card_line(top + 2, left, &region, inner, border_color, &theme.colors.text_dim);

    let stats = format!(
        "{} \u{00b7} {}",
        format_count(item.population),
        format_area(item.area)
    );
    let stats = truncate(&stats, inner - 2);
    render_card_line(top + 3, left, &stats, inner, border_color, &theme.colors.text_dim);

    position_cursor(top + 4, left);
    print!("{}", Theme::fg(border_color));
    print!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner));
    print!("{}", Theme::reset());
}

fn render_card_line(
    row: usize,
    left: usize,
    text: &str,
    inner: usize,
    border_color: &str,
    text_color: &str,
) {
    position_cursor(row, left);
    print!("{}", Theme::fg(border_color));
    print!("\u{2502}");
    print!("{}", Theme::fg(text_color));
    print!(" {text}");
    print!("{}", " ".repeat(inner.saturating_sub(text.chars().count() + 1)));
    print!("{}", Theme::fg(border_color));
    print!("\u{2502}");
    print!("{}", Theme::reset());
}

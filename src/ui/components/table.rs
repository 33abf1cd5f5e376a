//! Table component renderer.
//!
//! This module renders the country list as a four-column table with NAME,
//! REGION, POPULATION, and AREA columns. It supports selection highlighting
//! and search match highlighting on the name column.

use crate::ui::helpers::{self, format_area, format_count, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Fixed width of the NAME column.
const NAME_WIDTH: usize = 34;

/// Fixed width of the REGION column.
const REGION_WIDTH: usize = 12;

/// Fixed width of the right-aligned POPULATION column.
const POPULATION_WIDTH: usize = 15;

/// Renders the table column headers at the specified row.
///
/// Returns the next available row position (row + 1).
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<NAME_WIDTH$} {:<REGION_WIDTH$} {:>POPULATION_WIDTH$}  {}",
        "NAME", "REGION", "POPULATION", "AREA"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// Returns the next available row position (row + number of items).
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row.
///
/// Styling precedence: the selection background covers the full row and
/// disables match highlighting; otherwise matched name ranges get the
/// highlight colors. The row is padded to the full terminal width so the
/// selection background renders consistently.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let name = truncate(&item.name, NAME_WIDTH);
    if item.highlight_ranges.is_empty() {
        print!("{name}");
    } else {
        // Highlight ranges index the untruncated name; a truncated name
        // falls back to plain rendering rather than risking a mid-range cut.
        if name == item.name {
            helpers::render_highlighted_text(
                &item.name,
                &item.highlight_ranges,
                theme,
                item.is_selected,
            );
        } else {
            print!("{name}");
        }
    }
    print!("{}", " ".repeat(NAME_WIDTH.saturating_sub(name.chars().count()) + 1));

    let region = truncate(&item.region, REGION_WIDTH);
    print!("{region}");
    print!("{}", " ".repeat(REGION_WIDTH.saturating_sub(region.chars().count()) + 1));

    let population = format_count(item.population);
    print!(
        "{}{population}",
        " ".repeat(POPULATION_WIDTH.saturating_sub(population.chars().count()))
    );

    let area = format_area(item.area);
    print!("  {area}");

    let line_len = NAME_WIDTH + 1 + REGION_WIDTH + 1 + POPULATION_WIDTH + 2 + area.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

//! Facet panel component renderer.
//!
//! Renders the three facet selectors (region, subregion, population bracket)
//! in a bordered box while the filter panel is open. Each facet shows its
//! cycle key and current value, with "All" standing in for no constraint.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterPanelInfo;

/// Horizontal margin for the panel box, matching the search bar.
const PANEL_MARGIN: usize = 5;

/// Renders the facet panel at the specified row.
///
/// Returns the next available row position (row + 3).
pub fn render_filter_panel(
    row: usize,
    panel: &FilterPanelInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(PANEL_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(PANEL_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("\u{250c}{}\u{2510}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());

    let line = format!(
        " [r] Region: {}   [s] Subregion: {}   [p] Population: {}",
        panel.region, panel.subregion, panel.population
    );
    let padding = inner_width.saturating_sub(line.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(PANEL_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("\u{2502}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{line}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("\u{2502}");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(PANEL_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

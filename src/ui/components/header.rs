//! Header component renderer.
//!
//! Renders the title bar (centered, bold) and the catalog summary line
//! beneath it (counts, sort, view style, freshness).

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the two header rows at the specified row.
///
/// The title is centered with bold styling; the subtitle sits centered and
/// dimmed on the line below. Both lines are padded to the full terminal
/// width so an optional header background renders as a solid bar.
///
/// Returns the next available row position (row + 2).
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    render_centered_line(row, &header.title, theme, cols, true);
    render_centered_line(row + 1, &header.subtitle, theme, cols, false);
    row + 2
}

fn render_centered_line(row: usize, text: &str, theme: &Theme, cols: usize, bold: bool) {
    let text_len = text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    if bold {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));

    print!("{}", Theme::reset());
}

//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, search match highlighting with proper ANSI
//! escape sequence management, and number formatting for population and area
//! values.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted byte ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// byte ranges (which are guaranteed to fall on char boundaries by the view
/// model). Match highlighting is disabled on selected rows to avoid
/// conflicting with the selection background.
///
/// Prints to stdout using ANSI escape sequences; normal sections inherit
/// whatever styling is already active.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            print!("{}", &text[current_pos..start]);
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        print!("{}", &text[start..end.min(text.len())]);
        print!("{}", Theme::reset());

        current_pos = end;
    }

    if current_pos < text.len() {
        print!("{}", &text[current_pos..]);
    }
}

/// Formats an integer count with comma thousands separators.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a land area in square kilometres.
///
/// Areas are integral in practice; the fractional part is dropped after
/// rounding and the unit suffix appended.
#[must_use]
pub fn format_area(value: f64) -> String {
    if value <= 0.0 {
        return crate::ui::viewmodel::NOT_AVAILABLE.to_string();
    }
    format!("{} km\u{00b2}", format_count(value.round() as u64))
}

/// Truncates a string to at most `width` characters, appending an ellipsis
/// when anything was cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{cut}\u{2026}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(366_425), "366,425");
        assert_eq!(format_count(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn area_formats_with_unit_or_placeholder() {
        assert_eq!(format_area(103_000.0), "103,000 km\u{00b2}");
        assert_eq!(format_area(0.0), "Not available");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Iceland", 10), "Iceland");
        assert_eq!(truncate("Svalbard and Jan Mayen", 10), "Svalbard \u{2026}");
        assert_eq!(truncate("Curaçao", 5), "Cura\u{2026}");
    }
}

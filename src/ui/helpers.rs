//! Shared rendering utilities.
//!
//! Low-level primitives used across the UI components: cursor positioning and
//! centered line output with ANSI color management.

use crate::ui::theme::Theme;

/// Moves the terminal cursor to a 1-based row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders one line of text centered within `cols`, in the given color.
///
/// The line is padded to the full width so stale content from a previous
/// frame cannot bleed through.
pub fn render_centered_line(row: usize, text: &str, color: &str, cols: usize) {
    let text_len = text.chars().count().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}

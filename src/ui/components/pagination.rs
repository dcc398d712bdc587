//! Pagination bar component renderer.
//!
//! Renders the page position, total result count, and paging hints under the
//! result table, plus an inline indicator while a refresh is in flight.

use crate::ui::helpers::render_centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationBar;

pub fn render_pagination(
    row: usize,
    pagination: &PaginationBar,
    refreshing: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let prev = if pagination.has_prev { "‹ " } else { "  " };
    let next = if pagination.has_next { " ›" } else { "  " };
    let indicator = if refreshing { "  (refreshing)" } else { "" };
    let filter = pagination
        .filter
        .as_ref()
        .map(|query| format!("  ·  filtered by: {query}"))
        .unwrap_or_default();

    let line = format!(
        "{prev}page {}/{}{next}  ·  {} characters{filter}{indicator}",
        pagination.page,
        pagination.total_pages.max(1),
        pagination.total_count,
    );
    render_centered_line(row, &line, &theme.colors.accent_fg, cols);
    row + 1
}

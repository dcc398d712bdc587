//! Banner component renderer for loader, error, and empty screens.
//!
//! Renders a centered primary message with a dimmed secondary line, used for
//! every non-table screen state.

use crate::ui::helpers::render_centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;

pub fn render_banner(banner: &BannerInfo, color: &str, theme: &Theme, rows: usize, cols: usize) {
    let message_row = (rows / 2).saturating_sub(1).max(4);

    render_centered_line(message_row, &banner.message, color, cols);

    if !banner.detail.is_empty() {
        render_centered_line(message_row + 1, &banner.detail, &theme.colors.text_dim, cols);
    }
}

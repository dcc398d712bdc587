//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with branding and page position
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, raw query, settle indicator)
//! - [`table`]: Character list with columns (NAME, STATUS, SPECIES, LOCATION)
//! - [`pagination`]: Page position and result totals under the table
//! - [`detail`]: Character detail sheet with episode list
//! - [`banner`]: Centered loader/error/empty screens
//!
//! # Layout Modes
//!
//! The module provides three high-level layout functions:
//!
//! - [`render_list_mode`]: Header + optional `SearchBar` + Table + Pagination + Footer
//! - [`render_detail_mode`]: Header + Detail sheet + Footer
//! - [`render_banner_mode`]: Header + centered Banner + Footer

mod banner;
mod detail;
mod footer;
mod header;
mod pagination;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BannerInfo, DetailViewModel, ListViewModel, UIViewModel};

use banner::render_banner;
use detail::render_detail;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_chrome_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

pub fn render_list_mode(
    vm: &UIViewModel,
    list: &ListViewModel,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_table_headers(current_row, theme);
    current_row = render_table_rows(current_row, &list.rows, theme, cols);
    let _current_row = render_pagination(current_row + 1, &list.pagination, list.refreshing, theme, cols);

    render_chrome_bottom(vm, theme, cols, rows);
}

pub fn render_detail_mode(
    vm: &UIViewModel,
    detail: &DetailViewModel,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_detail(current_row + 1, detail, theme, cols, rows);

    render_chrome_bottom(vm, theme, cols, rows);
}

pub fn render_banner_mode(
    vm: &UIViewModel,
    banner: &BannerInfo,
    color: &str,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    let _current_row = render_border(current_row, &theme.colors.border, cols);
    render_banner(banner, color, theme, rows, cols);

    render_chrome_bottom(vm, theme, cols, rows);
}

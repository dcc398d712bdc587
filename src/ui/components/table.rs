//! Character table component renderer.
//!
//! Renders the result list as a four-column table (NAME, STATUS, SPECIES,
//! LOCATION) with selection highlighting and status badge colors.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CharacterRow;

const NAME_WIDTH: usize = 32;
const STATUS_WIDTH: usize = 12;
const SPECIES_WIDTH: usize = 16;

pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<NAME_WIDTH$}{:<STATUS_WIDTH$}{:<SPECIES_WIDTH$}{}",
        "NAME", "STATUS", "SPECIES", "LAST KNOWN LOCATION"
    );
    print!("{}", Theme::reset());
    row + 1
}

pub fn render_table_rows(row: usize, rows: &[CharacterRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_table_row(row: usize, item: &CharacterRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!("{:<NAME_WIDTH$}", item.name);

    // The status badge keeps its color only on unselected rows; selection
    // colors win otherwise.
    if !item.is_selected {
        print!("{}", Theme::fg(theme.status_color(item.status_kind)));
    }
    print!("{:<STATUS_WIDTH$}", item.status);
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!("{:<SPECIES_WIDTH$}", item.species);
    print!("{}", item.location);

    let line_len = NAME_WIDTH + STATUS_WIDTH + SPECIES_WIDTH + item.location.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

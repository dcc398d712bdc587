//! Character detail sheet renderer.
//!
//! Renders the focused character's fields as a label/value sheet followed by
//! its episode list. Enrichment placeholders arrive pre-formatted in the view
//! model; this component only lays them out.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailViewModel;

const LABEL_WIDTH: usize = 14;
const SHEET_MARGIN: usize = 3;

pub fn render_detail(
    row: usize,
    detail: &DetailViewModel,
    theme: &Theme,
    cols: usize,
    rows: usize,
) -> usize {
    let mut current_row = row;

    position_cursor(current_row, SHEET_MARGIN);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", detail.name);
    print!("  ");
    print!("{}", Theme::fg(theme.status_color(detail.status_kind)));
    print!("● {}", detail.status);
    print!("{}", Theme::reset());
    current_row += 2;

    let location = detail
        .location_detail
        .clone()
        .unwrap_or_else(|| detail.location.clone());
    let fields = [
        ("Species", &detail.species),
        ("Gender", &detail.gender),
        ("Type", &detail.character_type),
        ("Origin", &detail.origin),
        ("Location", &location),
        ("First seen", &detail.created),
    ];

    for (label, value) in fields {
        current_row = render_field(current_row, label, value, theme);
    }
    current_row += 1;

    position_cursor(current_row, SHEET_MARGIN);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("Episodes ({})", detail.episode_count);
    print!("{}", Theme::reset());
    current_row += 1;

    let episode_rows = rows.saturating_sub(current_row + 2);
    for line in detail.episodes.iter().take(episode_rows) {
        position_cursor(current_row, SHEET_MARGIN + 2);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", truncate_line(line, cols.saturating_sub(SHEET_MARGIN + 2)));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if detail.episodes.len() > episode_rows {
        position_cursor(current_row, SHEET_MARGIN + 2);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("… and {} more", detail.episodes.len() - episode_rows);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

fn render_field(row: usize, label: &str, value: &str, theme: &Theme) -> usize {
    position_cursor(row, SHEET_MARGIN);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{label:<LABEL_WIDTH$}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{value}");
    print!("{}", Theme::reset());
    row + 1
}

fn truncate_line(line: &str, max_len: usize) -> String {
    if line.chars().count() <= max_len {
        line.to_string()
    } else {
        line.chars().take(max_len.saturating_sub(1)).collect::<String>() + "…"
    }
}

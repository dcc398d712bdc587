//! Pure formatting utilities mapping raw field values to display text.
//!
//! Everything here is total: malformed input degrades to a readable fallback
//! instead of an error, because these run on every render.

use chrono::DateTime;

use crate::domain::Episode;

/// Classification of a character's life status, used to pick a badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Alive,
    Dead,
    Unknown,
}

/// Classifies a raw status string, case-insensitively.
///
/// Anything the service invents beyond the three documented values maps to
/// [`StatusKind::Unknown`].
#[must_use]
pub fn status_kind(status: &str) -> StatusKind {
    match status.to_lowercase().as_str() {
        "alive" => StatusKind::Alive,
        "dead" => StatusKind::Dead,
        _ => StatusKind::Unknown,
    }
}

/// Uppercases the first character and lowercases the rest.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Replaces blank or literal-"unknown" values with a uniform placeholder.
#[must_use]
pub fn display_or_unknown(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "Unknown".to_string()
    } else {
        capitalize(trimmed)
    }
}

/// One display line for an episode: code, title, and air date.
#[must_use]
pub fn format_episode(episode: &Episode) -> String {
    let mut line = String::new();
    if !episode.episode.is_empty() {
        line.push_str(&episode.episode);
        line.push_str("  ");
    }
    line.push_str(&episode.name);
    if !episode.air_date.is_empty() {
        line.push_str(&format!(" ({})", episode.air_date));
    }
    line
}

/// Formats a count with comma thousand separators.
#[must_use]
pub fn format_number(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncates display text to `max_len` characters, appending an ellipsis.
///
/// Operates on characters, not bytes, so multi-byte names cannot be split
/// mid-codepoint.
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Formats the record creation timestamp as a human-readable date.
///
/// Falls back to the raw string when it is not an RFC 3339 timestamp.
#[must_use]
pub fn format_created(created: &str) -> String {
    DateTime::parse_from_rfc3339(created).map_or_else(
        |_| created.to_string(),
        |datetime| datetime.format("%B %-d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification_is_case_insensitive() {
        assert_eq!(status_kind("Alive"), StatusKind::Alive);
        assert_eq!(status_kind("dead"), StatusKind::Dead);
        assert_eq!(status_kind("unknown"), StatusKind::Unknown);
        assert_eq!(status_kind("Presumed dead"), StatusKind::Unknown);
        assert_eq!(status_kind(""), StatusKind::Unknown);
    }

    #[test]
    fn capitalize_normalizes_case() {
        assert_eq!(capitalize("alive"), "Alive");
        assert_eq!(capitalize("DEAD"), "Dead");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn blank_fields_display_as_unknown() {
        assert_eq!(display_or_unknown(""), "Unknown");
        assert_eq!(display_or_unknown("   "), "Unknown");
        assert_eq!(display_or_unknown("human"), "Human");
    }

    #[test]
    fn number_formatting_inserts_thousand_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(826), "826");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        assert_eq!(truncate("Rick Sanchez", 20), "Rick Sanchez");
        assert_eq!(truncate("Abradolf Lincler", 10), "Abradol...");
        assert_eq!(truncate("Pickle Rick", 8), "Pickl...");
    }

    #[test]
    fn episode_lines_combine_code_title_and_date() {
        let episode = Episode {
            id: 1,
            name: "Pilot".to_string(),
            air_date: "December 2, 2013".to_string(),
            episode: "S01E01".to_string(),
            ..Episode::default()
        };
        assert_eq!(format_episode(&episode), "S01E01  Pilot (December 2, 2013)");
    }

    #[test]
    fn created_timestamps_become_readable_dates() {
        assert_eq!(
            format_created("2017-11-04T18:48:46.250Z"),
            "November 4, 2017"
        );
        assert_eq!(format_created("not a date"), "not a date");
    }
}

//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like formatted columns and status
//! badge classifications.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

use crate::ui::format::StatusKind;

/// Complete renderable representation of the UI.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar content.
    pub header: HeaderInfo,

    /// Search bar content, absent when the bar is hidden.
    pub search_bar: Option<SearchBarInfo>,

    /// The main screen area below header and search bar.
    pub screen: ScreenViewModel,

    /// Help bar content.
    pub footer: FooterInfo,
}

/// What occupies the main screen area.
#[derive(Debug, Clone)]
pub enum ScreenViewModel {
    /// Full-page loader, shown only before the first response ever lands.
    Loader(BannerInfo),

    /// Error panel with a retry hint.
    Error(BannerInfo),

    /// Zero-result state.
    Empty(BannerInfo),

    /// The character result table.
    List(ListViewModel),

    /// The character detail sheet.
    Detail(DetailViewModel),
}

/// Centered message plus secondary line for loader/error/empty screens.
#[derive(Debug, Clone)]
pub struct BannerInfo {
    pub message: String,
    pub detail: String,
}

/// The visible window of the character result table.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    /// Pre-formatted rows for the visible window.
    pub rows: Vec<CharacterRow>,

    /// Cursor position relative to the visible window.
    pub selected_index: usize,

    /// Whether a refresh is in flight behind the visible results.
    pub refreshing: bool,

    /// Page position and result totals.
    pub pagination: PaginationBar,
}

/// One formatted table row.
#[derive(Debug, Clone)]
pub struct CharacterRow {
    pub name: String,
    pub status: String,
    pub status_kind: StatusKind,
    pub species: String,
    pub location: String,
    pub is_selected: bool,
}

/// Page position line rendered under the table.
#[derive(Debug, Clone)]
pub struct PaginationBar {
    pub page: u32,
    pub total_pages: u32,
    /// Total result count, already formatted with separators.
    pub total_count: String,
    /// The active name filter, when one is committed.
    pub filter: Option<String>,
    pub has_next: bool,
    pub has_prev: bool,
}

/// The character detail sheet, fully formatted.
#[derive(Debug, Clone)]
pub struct DetailViewModel {
    pub name: String,
    pub status: String,
    pub status_kind: StatusKind,
    pub species: String,
    pub gender: String,
    pub character_type: String,
    pub origin: String,
    pub location: String,

    /// Expanded location line (type and dimension), present once the
    /// location enrichment has resolved.
    pub location_detail: Option<String>,

    /// One line per episode, or a single placeholder line while pending or
    /// unavailable.
    pub episodes: Vec<String>,

    /// Number of episode references on the record itself, independent of
    /// enrichment progress.
    pub episode_count: usize,

    /// Record creation date, already formatted.
    pub created: String,
}

/// Title bar content.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,

    /// Context line under the title, e.g. the page position. May be empty.
    pub subtitle: String,
}

/// Help bar content.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding hints for the current mode.
    pub keybindings: String,
}

/// Search bar content.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// The raw query as typed, ahead of debounce settlement.
    pub query: String,

    /// Whether the bar currently captures keystrokes.
    pub focused: bool,

    /// Whether a debounce window is still open for this query.
    pub pending: bool,
}

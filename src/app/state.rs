//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with selection management, navigation helpers, and UI view
//! model generation. It serves as the single source of truth for all
//! transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates browsing intent (the committed page and query) from
//! derived state (fetch results, selection, the raw search buffer) so the
//! event handler can reason about each independently. View models are
//! computed on demand from state snapshots.
//!
//! # State Components
//!
//! - **Paging**: the committed `(page, query)` pair driving list fetches
//! - **Raw query**: the search buffer as typed, ahead of the debounce window
//! - **List**: the fetch orchestrator holding results, pagination and phase
//! - **Detail**: the focused character plus its enrichment data
//! - **History**: the navigation stack mirroring the current location
//! - **Input mode**: controls keybinding interpretation and search focus

use crate::domain::{Character, Episode, Location as ApiLocation, PageQuery};
use crate::nav::{History, Location, Route};
use crate::ui::format;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BannerInfo, CharacterRow, DetailViewModel, FooterInfo, HeaderInfo, ListViewModel,
    PaginationBar, ScreenViewModel, SearchBarInfo, UIViewModel,
};

use super::debounce::Debouncer;
use super::fetch::Orchestrator;
use super::modes::{FetchPhase, InputMode};

/// An enrichment resource fetched independently of the primary record.
///
/// Enrichment failures never propagate; they degrade to `Unavailable` and the
/// UI renders a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment<T> {
    /// Not requested yet, or still in flight.
    Pending,

    /// Fetched successfully.
    Ready(T),

    /// The fetch failed, or the record had nothing to enrich.
    Unavailable,
}

/// State of the character detail view.
#[derive(Debug, Clone)]
pub struct DetailState {
    /// The character id this view is for. Responses tagged with another id
    /// are discarded.
    pub id: u32,

    /// Lifecycle of the primary character fetch. Enrichment outcomes never
    /// move this phase.
    pub phase: FetchPhase,

    /// The character record, once the primary fetch succeeds.
    pub character: Option<Character>,

    /// Episodes resolved from the character's episode URL list.
    pub episodes: Enrichment<Vec<Episode>>,

    /// Full record for the character's last known location.
    pub location: Enrichment<ApiLocation>,

    /// Human-readable error from a failed primary fetch.
    pub error: Option<String>,
}

impl DetailState {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            phase: FetchPhase::Uninitialized,
            character: None,
            episodes: Enrichment::Pending,
            location: Enrichment::Pending,
            error: None,
        }
    }
}

/// Central application state container.
///
/// Holds all transient UI state including fetch results, the search buffer,
/// navigation history, selection, and mode information. Mutated by the event
/// handler in response to user input and host events. View models are
/// computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Base URL of the upstream API, without a trailing slash.
    ///
    /// Taken from plugin configuration so tests and mirrors can point the
    /// plugin elsewhere.
    pub base_url: String,

    /// Committed browsing intent: the `(page, query)` pair list fetches are
    /// keyed on.
    ///
    /// Only ever updated together with a fetch dispatch and a history write,
    /// so the URL, the state, and the outstanding request cannot disagree.
    pub paging: PageQuery,

    /// The search buffer exactly as typed.
    ///
    /// Runs ahead of `paging.query()` while the debounce window is open;
    /// the two converge when the window settles or is flushed.
    pub raw_query: String,

    /// Current input handling mode.
    ///
    /// Determines active keybindings and whether the search bar captures
    /// printable characters.
    pub input_mode: InputMode,

    /// Fetch orchestrator for the character list.
    pub list: Orchestrator,

    /// Debounce window for search input.
    pub debounce: Debouncer,

    /// Zero-based cursor position within the visible result list.
    ///
    /// Clamped whenever results change. Wraps around during navigation.
    pub selected_index: usize,

    /// Detail view state, present while the detail route is active.
    pub detail: Option<DetailState>,

    /// Navigation history mirroring the browsing state.
    pub history: History,

    /// Color scheme for UI rendering.
    ///
    /// Loaded from plugin configuration on initialization.
    pub theme: Theme,
}

impl AppState {
    /// Creates application state for a starting location.
    ///
    /// The location becomes the single history entry; browsing intent is
    /// seeded from its paging component so the first fetch reflects it.
    #[must_use]
    pub fn new(base_url: String, start: Location, debounce_ms: u64, theme: Theme) -> Self {
        let paging = start.paging.clone();
        let raw_query = paging.query().to_string();
        Self {
            base_url,
            paging,
            raw_query,
            input_mode: InputMode::Normal,
            list: Orchestrator::new(),
            debounce: Debouncer::new(debounce_ms),
            selected_index: 0,
            detail: None,
            history: History::new(start),
            theme,
        }
    }

    /// The route currently on top of the history stack.
    #[must_use]
    pub fn route(&self) -> Route {
        self.history.current().route
    }

    /// Moves the cursor down by one row, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        let count = self.list.state().results.len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves the cursor up by one row, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        let count = self.list.state().results.len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The character under the cursor, if any results are visible.
    #[must_use]
    pub fn selected_character(&self) -> Option<&Character> {
        self.list.state().results.get(self.selected_index)
    }

    /// Clamps the cursor after the result set changed.
    pub fn clamp_selection(&mut self) {
        let count = self.list.state().results.len();
        if count == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(count - 1);
        }
    }

    /// The canonical location for the current browsing state.
    ///
    /// List routes encode the committed paging; the detail route encodes the
    /// focused character id.
    #[must_use]
    pub fn canonical_location(&self) -> Location {
        match self.route() {
            Route::List => Location::list(self.paging.clone()),
            Route::Detail { id } => Location::detail(id, self.paging.clone()),
        }
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// Handles windowing (showing a subset of rows centered on the cursor),
    /// loading and error chrome, and the search bar.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let screen = match self.route() {
            Route::Detail { .. } => self.compute_detail_screen(),
            Route::List => self.compute_list_screen(rows, cols),
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            screen,
            footer: self.compute_footer(),
        }
    }

    fn compute_list_screen(&self, rows: usize, cols: usize) -> ScreenViewModel {
        let list = self.list.state();

        if list.phase.is_initial_load() {
            return ScreenViewModel::Loader(BannerInfo {
                message: "Loading characters...".to_string(),
                detail: String::new(),
            });
        }

        if list.phase == FetchPhase::Failed {
            return ScreenViewModel::Error(BannerInfo {
                message: "Could not load characters".to_string(),
                detail: list
                    .error
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        if list.results.is_empty() {
            let detail = if self.paging.query().trim().is_empty() {
                "No characters to show".to_string()
            } else {
                format!("No characters match \"{}\"", self.paging.query().trim())
            };
            return ScreenViewModel::Empty(BannerInfo {
                message: "No results".to_string(),
                detail,
            });
        }

        let available_rows = Self::available_list_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(list.results.len());
        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && list.results.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let items: Vec<CharacterRow> = list.results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, character)| {
                let absolute_idx = visible_start + relative_idx;
                Self::compute_row(character, absolute_idx == self.selected_index, cols)
            })
            .collect();

        ScreenViewModel::List(ListViewModel {
            rows: items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            refreshing: list.phase == FetchPhase::Refreshing,
            pagination: PaginationBar {
                page: self.paging.page(),
                total_pages: list.page_info.total_pages,
                total_count: format::format_number(list.page_info.total_count),
                filter: {
                    let committed = self.paging.query().trim();
                    (!committed.is_empty()).then(|| committed.to_string())
                },
                has_next: list.page_info.has_next,
                has_prev: list.page_info.has_prev,
            },
        })
    }

    fn compute_row(character: &Character, is_selected: bool, cols: usize) -> CharacterRow {
        const NAME_COLUMN_WIDTH: usize = 32;
        const STATUS_COLUMN_WIDTH: usize = 12;
        const SPECIES_COLUMN_WIDTH: usize = 16;
        const SAFETY_MARGIN: usize = 4;

        let max_location_width = cols
            .saturating_sub(NAME_COLUMN_WIDTH + STATUS_COLUMN_WIDTH + SPECIES_COLUMN_WIDTH)
            .saturating_sub(SAFETY_MARGIN);

        CharacterRow {
            name: format::truncate(&character.name, NAME_COLUMN_WIDTH - 2),
            status: format::capitalize(&character.status),
            status_kind: format::status_kind(&character.status),
            species: format::truncate(&character.species, SPECIES_COLUMN_WIDTH - 2),
            location: format::truncate(&character.location.name, max_location_width),
            is_selected,
        }
    }

    fn compute_detail_screen(&self) -> ScreenViewModel {
        let Some(detail) = self.detail.as_ref() else {
            return ScreenViewModel::Loader(BannerInfo {
                message: "Loading character...".to_string(),
                detail: String::new(),
            });
        };

        if detail.phase == FetchPhase::Failed {
            return ScreenViewModel::Error(BannerInfo {
                message: "Could not load character".to_string(),
                detail: detail
                    .error
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        let Some(character) = detail.character.as_ref() else {
            return ScreenViewModel::Loader(BannerInfo {
                message: "Loading character...".to_string(),
                detail: String::new(),
            });
        };

        let episodes = match &detail.episodes {
            Enrichment::Ready(episodes) => episodes
                .iter()
                .map(|episode| format::format_episode(episode))
                .collect(),
            Enrichment::Pending => vec!["Loading episodes...".to_string()],
            Enrichment::Unavailable => vec!["Episode information unavailable".to_string()],
        };

        let location_detail = match &detail.location {
            Enrichment::Ready(location) => Some(format!(
                "{} ({}, {})",
                location.name,
                format::display_or_unknown(&location.r#type),
                format::display_or_unknown(&location.dimension)
            )),
            Enrichment::Pending => None,
            Enrichment::Unavailable => None,
        };

        ScreenViewModel::Detail(DetailViewModel {
            name: character.name.clone(),
            status: format::capitalize(&character.status),
            status_kind: format::status_kind(&character.status),
            species: format::display_or_unknown(&character.species),
            gender: format::display_or_unknown(&character.gender),
            character_type: format::display_or_unknown(&character.r#type),
            origin: format::display_or_unknown(&character.origin.name),
            location: format::display_or_unknown(&character.location.name),
            location_detail,
            episodes,
            episode_count: character.episode.len(),
            created: format::format_created(&character.created),
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = match self.route() {
            Route::Detail { .. } => "character".to_string(),
            Route::List => {
                let list = self.list.state();
                if list.phase == FetchPhase::Success || list.phase == FetchPhase::Refreshing {
                    format!(
                        "page {}/{}",
                        self.paging.page(),
                        list.page_info.total_pages.max(1)
                    )
                } else {
                    String::new()
                }
            }
        };
        HeaderInfo {
            title: "Mortydex".to_string(),
            subtitle,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.route() != Route::List {
            return None;
        }
        if self.input_mode != InputMode::Search && self.raw_query.is_empty() {
            return None;
        }
        Some(SearchBarInfo {
            query: self.raw_query.clone(),
            focused: self.input_mode == InputMode::Search,
            pending: self.debounce.is_pending(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.route(), self.input_mode) {
            (_, InputMode::Search) => "enter: search  esc: cancel".to_string(),
            (Route::List, InputMode::Normal) => {
                "j/k: move  h/l: page  /: search  enter: open  r: retry  q: quit".to_string()
            }
            (Route::Detail { .. }, InputMode::Normal) => {
                "esc/b: back  r: retry  q: quit".to_string()
            }
        };
        FooterInfo { keybindings }
    }

    /// Rows left for result lines after header, search bar, pagination, and
    /// footer chrome.
    fn available_list_rows(rows: usize) -> usize {
        const CHROME_ROWS: usize = 6;
        rows.saturating_sub(CHROME_ROWS).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BASE_URL;
    use crate::domain::ResourceRef;

    fn character(id: u32, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            r#type: String::new(),
            gender: "Male".to_string(),
            origin: ResourceRef::default(),
            location: ResourceRef::default(),
            image: String::new(),
            episode: vec![],
            url: String::new(),
            created: String::new(),
        }
    }

    fn state_with_results(names: &[&str]) -> AppState {
        let mut state = AppState::new(
            BASE_URL.to_string(),
            Location::list_root(),
            500,
            Theme::default(),
        );
        let (_, key) = state.list.request(BASE_URL, &state.paging.clone()).unwrap();
        let results: Vec<Character> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| character(idx as u32 + 1, name))
            .collect();
        let body = serde_json::json!({
            "info": {"count": results.len(), "pages": 1, "next": null, "prev": null},
            "results": results.iter().map(|c| serde_json::json!({
                "id": c.id, "name": c.name, "status": "Alive",
                "species": "Human", "gender": "Male"
            })).collect::<Vec<_>>()
        });
        state
            .list
            .on_response(&key, Ok(serde_json::from_value(body).unwrap()));
        state
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state_with_results(&["Rick", "Morty", "Summer"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_clamped_when_results_shrink() {
        let mut state = state_with_results(&["Rick", "Morty", "Summer"]);
        state.selected_index = 2;

        let next = state.paging.with_query("rick");
        let (_, key) = state.list.request(BASE_URL, &next).unwrap();
        let body = serde_json::json!({
            "info": {"count": 1, "pages": 1, "next": null, "prev": null},
            "results": [{"id": 1, "name": "Rick Sanchez", "status": "Alive",
                         "species": "Human", "gender": "Male"}]
        });
        state
            .list
            .on_response(&key, Ok(serde_json::from_value(body).unwrap()));
        state.clamp_selection();

        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn initial_load_shows_the_full_page_loader() {
        let mut state = AppState::new(
            BASE_URL.to_string(),
            Location::list_root(),
            500,
            Theme::default(),
        );
        state.list.request(BASE_URL, &state.paging.clone());

        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.screen, ScreenViewModel::Loader(_)));
    }

    #[test]
    fn refresh_keeps_results_visible() {
        let mut state = state_with_results(&["Rick", "Morty"]);
        state.list.request(BASE_URL, &state.paging.with_page(2));

        let vm = state.compute_viewmodel(24, 80);
        match vm.screen {
            ScreenViewModel::List(list) => {
                assert!(list.refreshing);
                assert_eq!(list.rows.len(), 2);
            }
            other => panic!("expected list screen, got {other:?}"),
        }
    }

    #[test]
    fn empty_results_mention_the_committed_query() {
        let mut state = state_with_results(&[]);
        state.paging = state.paging.with_query("flurbo");

        let vm = state.compute_viewmodel(24, 80);
        match vm.screen {
            ScreenViewModel::Empty(banner) => {
                assert!(banner.detail.contains("flurbo"));
            }
            other => panic!("expected empty screen, got {other:?}"),
        }
    }

    #[test]
    fn pagination_annotates_the_active_filter() {
        let mut state = state_with_results(&["Rick"]);
        state.paging = state.paging.with_query("rick");

        let vm = state.compute_viewmodel(24, 80);
        match vm.screen {
            ScreenViewModel::List(list) => {
                assert_eq!(list.pagination.filter.as_deref(), Some("rick"));
            }
            other => panic!("expected list screen, got {other:?}"),
        }

        state.paging = state.paging.with_query("   ");
        let vm = state.compute_viewmodel(24, 80);
        match vm.screen {
            ScreenViewModel::List(list) => assert!(list.pagination.filter.is_none()),
            other => panic!("expected list screen, got {other:?}"),
        }
    }

    #[test]
    fn search_bar_hidden_when_idle_and_blank() {
        let state = state_with_results(&["Rick"]);
        assert!(state.compute_viewmodel(24, 80).search_bar.is_none());
    }

    #[test]
    fn detail_route_renders_enrichment_placeholders() {
        let mut state = state_with_results(&["Rick"]);
        state.history.push(Location::detail(1, state.paging.clone()));
        let mut detail = DetailState::new(1);
        detail.phase = FetchPhase::Success;
        let mut rick = character(1, "Rick Sanchez");
        rick.episode = vec!["https://rickandmortyapi.com/api/episode/1".to_string()];
        detail.character = Some(rick);
        detail.episodes = Enrichment::Unavailable;
        detail.location = Enrichment::Unavailable;
        state.detail = Some(detail);

        let vm = state.compute_viewmodel(24, 80);
        match vm.screen {
            ScreenViewModel::Detail(detail) => {
                assert_eq!(detail.episodes, vec!["Episode information unavailable"]);
                assert!(detail.location_detail.is_none());
            }
            other => panic!("expected detail screen, got {other:?}"),
        }
    }
}

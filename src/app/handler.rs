//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! timer ticks, and HTTP responses, translating them into state changes and
//! action sequences. It serves as the primary control flow coordinator for
//! the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods and the orchestrator
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextPage`, `PrevPage`, `OpenDetail`, `Back`
//! - **Input**: `Char`, `Backspace`, `SubmitSearch`
//! - **Mode Switching**: `SearchMode`, `ExitSearch`
//! - **System**: `Initialize`, `TimerTick`, `HttpResponse`
//!
//! # URL discipline
//!
//! The history entry is rewritten only when the settled `(page, query)` pair
//! changes, always via replace, and never before the first mount fetch has
//! been issued. Keystroke-level transients stay out of the history entirely.

use std::collections::BTreeMap;

use crate::api;
use crate::app::{Action, AppState, HttpRequest, RequestContext};
use crate::domain::{MortydexError, Result};
use crate::nav::{Location, Route};

use super::fetch::FetchKey;
use super::modes::{FetchPhase, InputMode};
use super::state::{DetailState, Enrichment};

/// Semantic events produced by the plugin shim from raw host events.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the cursor down one row.
    KeyDown,

    /// Moves the cursor up one row.
    KeyUp,

    /// Requests the plugin UI be closed.
    CloseFocus,

    /// Advances to the next result page, if one exists.
    NextPage,

    /// Returns to the previous result page, if one exists.
    PrevPage,

    /// Opens the detail view for the character under the cursor.
    OpenDetail,

    /// Leaves the detail view, returning to the remembered list state.
    Back,

    /// Gives the search bar focus.
    SearchMode,

    /// Drops search focus, reverting uncommitted edits.
    ExitSearch,

    /// A printable character typed into the search bar.
    Char(char),

    /// Deletes the last character of the search buffer.
    Backspace,

    /// Explicit search submission; settles the query without waiting for the
    /// debounce window.
    SubmitSearch,

    /// Re-issues the fetch for the current view after a failure.
    Retry,

    /// Permissions are granted and the plugin may issue its mount fetch.
    Initialize,

    /// A debounce timer armed earlier has fired.
    TimerTick,

    /// An HTTP response arrived from the host runtime.
    HttpResponse {
        /// HTTP status, or 0 when the transport itself failed.
        status: u16,
        body: Vec<u8>,
        /// The context map echoed back by the host.
        context: BTreeMap<String, String>,
    },
}

/// Processes an event against application state.
///
/// Returns whether the UI needs re-rendering, plus the side effects to
/// execute. State transitions and effect emission happen together so a
/// committed paging change, its history write, and its fetch can never
/// disagree.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::NextPage => turn_page(state, 1),
        Event::PrevPage => turn_page(state, -1),
        Event::OpenDetail => {
            let Some(character) = state.selected_character() else {
                tracing::debug!("no character selected");
                return Ok((false, vec![]));
            };
            let id = character.id;
            tracing::debug!(character_id = id, name = %character.name, "opening detail view");

            state.input_mode = InputMode::Normal;
            state.history.push(Location::detail(id, state.paging.clone()));
            Ok((true, open_detail(state, id)))
        }
        Event::Back => {
            if state.route() == Route::List {
                return Ok((false, vec![]));
            }
            state.detail = None;
            if state.history.back().is_none() {
                // Detail was the mount location; fall back to the list root
                // and fetch it.
                state.history.replace(Location::list(state.paging.clone()));
                return Ok((true, issue_list_fetch(state)));
            }
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            if state.route() != Route::List {
                return Ok((false, vec![]));
            }
            tracing::debug!("search bar focused");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Normal;
            // Uncommitted edits are reverted; any pending timers settle as
            // no-ops because raw and committed agree again.
            state.raw_query = state.paging.query().to_string();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.raw_query.push(*c);
            Ok((true, on_raw_query_change(state)))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            if state.raw_query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, on_raw_query_change(state)))
        }
        Event::SubmitSearch => {
            state.input_mode = InputMode::Normal;
            state.debounce.flush();
            Ok((true, settle_query(state)))
        }
        Event::TimerTick => {
            if !state.debounce.tick() {
                return Ok((false, vec![]));
            }
            Ok((true, settle_query(state)))
        }
        Event::Retry => match state.route() {
            Route::List => {
                tracing::debug!("retrying list fetch");
                let mut actions = Vec::new();
                let paging = state.paging.clone();
                if let Some((url, key)) = state.list.retry(&state.base_url, &paging) {
                    actions.push(list_request(url, key));
                }
                Ok((true, actions))
            }
            Route::Detail { id } => {
                tracing::debug!(character_id = id, "retrying detail fetch");
                Ok((true, open_detail(state, id)))
            }
        },
        Event::Initialize => {
            tracing::debug!(location = %state.canonical_location().encode(), "mounting");
            let actions = match state.route() {
                Route::List => issue_list_fetch(state),
                Route::Detail { id } => open_detail(state, id),
            };
            Ok((true, actions))
        }
        Event::HttpResponse {
            status,
            body,
            context,
        } => on_http_response(state, *status, body, context),
    }
}

/// Moves the committed page by `delta`, bounded by the pagination metadata.
fn turn_page(state: &mut AppState, delta: i32) -> Result<(bool, Vec<Action>)> {
    if state.route() != Route::List {
        return Ok((false, vec![]));
    }
    let info = state.list.state().page_info;
    let allowed = if delta > 0 { info.has_next } else { info.has_prev };
    if !allowed {
        return Ok((false, vec![]));
    }

    let page = state.paging.page().saturating_add_signed(delta);
    state.paging = state.paging.with_page(page);
    state.selected_index = 0;
    sync_url(state);
    Ok((true, issue_list_fetch(state)))
}

/// Reacts to a raw search buffer edit: arms the debounce window and, per the
/// list contract, snaps the committed page back to 1 right away.
///
/// The page snap is an immediate settled change (it fetches page 1 under the
/// old committed query); the query itself only settles when the window does.
fn on_raw_query_change(state: &mut AppState) -> Vec<Action> {
    let mut actions = vec![Action::StartTimer(state.debounce.input())];

    if state.paging.page() != 1 {
        state.paging = state.paging.with_page(1);
        state.selected_index = 0;
        sync_url(state);
        actions.extend(issue_list_fetch(state));
    }

    actions
}

/// Commits the raw query if it differs from the committed one.
fn settle_query(state: &mut AppState) -> Vec<Action> {
    if state.raw_query.trim() == state.paging.query().trim() {
        return vec![];
    }
    tracing::debug!(query = %state.raw_query, "search query settled");
    state.paging = state.paging.with_query(state.raw_query.clone());
    state.selected_index = 0;
    sync_url(state);
    issue_list_fetch(state)
}

/// Rewrites the current history entry with the canonical location.
///
/// Replace, never push: incremental paging and query changes must not pollute
/// back navigation. Skipped until the mount fetch has been issued, so the
/// start location is not clobbered by initialization itself.
fn sync_url(state: &mut AppState) {
    if !state.list.is_initialized() {
        return;
    }
    let location = state.canonical_location();
    tracing::debug!(location = %location.encode(), "history entry replaced");
    state.history.replace(location);
}

/// Issues the list fetch for the committed paging, returning the HTTP action
/// unless the duplicate-key guard suppressed it.
fn issue_list_fetch(state: &mut AppState) -> Vec<Action> {
    let paging = state.paging.clone();
    match state.list.request(&state.base_url, &paging) {
        Some((url, key)) => vec![list_request(url, key)],
        None => vec![],
    }
}

fn list_request(url: String, key: FetchKey) -> Action {
    Action::Http(HttpRequest::new(url, RequestContext::CharacterList { key }))
}

/// Resets detail state and issues the primary character fetch.
fn open_detail(state: &mut AppState, id: u32) -> Vec<Action> {
    let mut detail = DetailState::new(id);
    detail.phase = FetchPhase::Loading;
    state.detail = Some(detail);

    vec![Action::Http(HttpRequest::new(
        api::character(&state.base_url, id),
        RequestContext::Character { id },
    ))]
}

/// Routes a settled HTTP response to the view it belongs to.
fn on_http_response(
    state: &mut AppState,
    status: u16,
    body: &[u8],
    context: &BTreeMap<String, String>,
) -> Result<(bool, Vec<Action>)> {
    let context = RequestContext::from_map(context)?;

    match context {
        RequestContext::CharacterList { key } => {
            let outcome = if status == 0 {
                Err(transport_failure())
            } else {
                api::decode_character_list(status, body)
            };
            let changed = state.list.on_response(&key, outcome);
            if changed {
                state.clamp_selection();
            }
            Ok((changed, vec![]))
        }
        RequestContext::Character { id } => on_character_response(state, id, status, body),
        RequestContext::Episodes { id } => {
            let Some(detail) = state.detail.as_mut().filter(|d| d.id == id) else {
                tracing::debug!(character_id = id, "discarding stale episode response");
                return Ok((false, vec![]));
            };
            let outcome = if status == 0 {
                Err(transport_failure())
            } else {
                api::decode_episodes(status, body)
            };
            detail.episodes = match outcome {
                Ok(episodes) => Enrichment::Ready(episodes),
                Err(error) => {
                    tracing::warn!(character_id = id, %error, "episode enrichment failed");
                    Enrichment::Unavailable
                }
            };
            Ok((true, vec![]))
        }
        RequestContext::Location { id } => {
            let Some(detail) = state.detail.as_mut().filter(|d| d.id == id) else {
                tracing::debug!(character_id = id, "discarding stale location response");
                return Ok((false, vec![]));
            };
            let outcome = if status == 0 {
                Err(transport_failure())
            } else {
                api::decode_location(status, body)
            };
            detail.location = match outcome {
                Ok(location) => Enrichment::Ready(location),
                Err(error) => {
                    tracing::warn!(character_id = id, %error, "location enrichment failed");
                    Enrichment::Unavailable
                }
            };
            Ok((true, vec![]))
        }
    }
}

/// Applies the primary character response and kicks off enrichment fetches.
///
/// Enrichment is strictly best-effort: a character with no episodes or an
/// invalid location URL degrades to placeholders without any request, and
/// enrichment can never fail the detail view itself.
fn on_character_response(
    state: &mut AppState,
    id: u32,
    status: u16,
    body: &[u8],
) -> Result<(bool, Vec<Action>)> {
    let base_url = state.base_url.clone();
    let Some(detail) = state.detail.as_mut().filter(|d| d.id == id) else {
        tracing::debug!(character_id = id, "discarding stale character response");
        return Ok((false, vec![]));
    };

    let outcome = if status == 0 {
        Err(transport_failure())
    } else {
        api::decode_character(status, body)
    };

    let character = match outcome {
        Ok(character) => character,
        Err(error) => {
            tracing::debug!(character_id = id, %error, "character fetch failed");
            detail.phase = FetchPhase::Failed;
            detail.error = Some(error.to_string());
            return Ok((true, vec![]));
        }
    };

    let mut actions = Vec::new();

    let episode_ids = api::extract_ids(&character.episode);
    if episode_ids.is_empty() {
        detail.episodes = Enrichment::Unavailable;
    } else {
        match api::episodes(&base_url, &episode_ids) {
            Ok(url) => actions.push(Action::Http(HttpRequest::new(
                url,
                RequestContext::Episodes { id },
            ))),
            Err(error) => {
                tracing::warn!(character_id = id, %error, "episode url rejected");
                detail.episodes = Enrichment::Unavailable;
            }
        }
    }

    match api::validate_location_url(&character.location.url) {
        Ok(_) => match api::extract_id(&character.location.url) {
            Some(location_id) => actions.push(Action::Http(HttpRequest::new(
                api::location(&base_url, location_id),
                RequestContext::Location { id },
            ))),
            None => detail.location = Enrichment::Unavailable,
        },
        Err(error) => {
            tracing::debug!(character_id = id, %error, "location enrichment skipped");
            detail.location = Enrichment::Unavailable;
        }
    }

    detail.character = Some(character);
    detail.phase = FetchPhase::Success;
    detail.error = None;

    Ok((true, actions))
}

fn transport_failure() -> MortydexError {
    MortydexError::Network("request did not reach the server".to_string())
}

/// Short name for span fields; the full event can carry response bodies.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "key_down",
        Event::KeyUp => "key_up",
        Event::CloseFocus => "close_focus",
        Event::NextPage => "next_page",
        Event::PrevPage => "prev_page",
        Event::OpenDetail => "open_detail",
        Event::Back => "back",
        Event::SearchMode => "search_mode",
        Event::ExitSearch => "exit_search",
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::SubmitSearch => "submit_search",
        Event::Retry => "retry",
        Event::Initialize => "initialize",
        Event::TimerTick => "timer_tick",
        Event::HttpResponse { .. } => "http_response",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BASE_URL;
    use crate::ui::theme::Theme;

    fn new_state() -> AppState {
        AppState::new(
            BASE_URL.to_string(),
            Location::list_root(),
            500,
            Theme::default(),
        )
    }

    fn state_at(start: Location) -> AppState {
        AppState::new(BASE_URL.to_string(), start, 500, Theme::default())
    }

    fn list_body(count: u32, pages: u32, names: &[&str], next: bool, prev: bool) -> Vec<u8> {
        let results: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                serde_json::json!({
                    "id": idx + 1, "name": name, "status": "Alive",
                    "species": "Human", "gender": "Male"
                })
            })
            .collect();
        serde_json::json!({
            "info": {
                "count": count, "pages": pages,
                "next": if next { Some("n") } else { None },
                "prev": if prev { Some("p") } else { None }
            },
            "results": results
        })
        .to_string()
        .into_bytes()
    }

    fn character_body(id: u32, episode_urls: &[&str], location_url: &str) -> Vec<u8> {
        serde_json::json!({
            "id": id, "name": "Rick Sanchez", "status": "Alive",
            "species": "Human", "gender": "Male",
            "location": {"name": "Citadel of Ricks", "url": location_url},
            "episode": episode_urls
        })
        .to_string()
        .into_bytes()
    }

    fn http_actions(actions: &[Action]) -> Vec<HttpRequest> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::Http(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }

    fn respond(state: &mut AppState, request: &HttpRequest, status: u16, body: Vec<u8>) -> Vec<Action> {
        let context = request.context.to_map().unwrap();
        let (_, actions) = handle_event(
            state,
            &Event::HttpResponse {
                status,
                body,
                context,
            },
        )
        .unwrap();
        actions
    }

    /// Drives a fresh state through mount and one successful list response.
    fn mounted_state(names: &[&str], pages: u32) -> AppState {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Initialize).unwrap();
        let requests = http_actions(&actions);
        assert_eq!(requests.len(), 1);
        let request = requests[0].clone();
        respond(
            &mut state,
            &request,
            200,
            list_body(names.len() as u32, pages, names, pages > 1, false),
        );
        state
    }

    #[test]
    fn mount_issues_exactly_one_list_fetch() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Initialize).unwrap();
        assert_eq!(http_actions(&actions).len(), 1);

        // A second initialize (same key) is suppressed by the guard.
        let (_, actions) = handle_event(&mut state, &Event::Initialize).unwrap();
        assert!(http_actions(&actions).is_empty());
    }

    #[test]
    fn mount_from_a_detail_location_fetches_the_character() {
        let mut state = state_at(Location::detail(7, crate::domain::PageQuery::default()));
        let (_, actions) = handle_event(&mut state, &Event::Initialize).unwrap();

        let requests = http_actions(&actions);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].context, RequestContext::Character { id: 7 });
    }

    #[test]
    fn typing_is_debounced_into_one_settled_fetch() {
        let mut state = mounted_state(&["Rick", "Morty"], 1);
        handle_event(&mut state, &Event::SearchMode).unwrap();

        let mut timers = 0;
        for c in ['r', 'i', 'c', 'k'] {
            let (_, actions) = handle_event(&mut state, &Event::Char(c)).unwrap();
            timers += actions
                .iter()
                .filter(|a| matches!(a, Action::StartTimer(_)))
                .count();
            assert!(http_actions(&actions).is_empty());
        }
        assert_eq!(timers, 4);

        // First three ticks are superseded; only the last settles.
        for _ in 0..3 {
            let (_, actions) = handle_event(&mut state, &Event::TimerTick).unwrap();
            assert!(actions.is_empty());
        }
        let (_, actions) = handle_event(&mut state, &Event::TimerTick).unwrap();
        let requests = http_actions(&actions);
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.contains("name=rick"));
        assert_eq!(state.paging.query(), "rick");
    }

    #[test]
    fn typing_on_a_deep_page_snaps_back_to_page_one() {
        let mut state = mounted_state(&["Rick"], 3);
        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.paging.page(), 2);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Char('r')).unwrap();

        // The page snap fetches page 1 under the old query immediately; the
        // query itself is still waiting on the debounce window.
        assert_eq!(state.paging.page(), 1);
        assert_eq!(state.paging.query(), "");
        let requests = http_actions(&actions);
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].url.contains("name="));
    }

    #[test]
    fn submit_bypasses_the_debounce_window() {
        let mut state = mounted_state(&["Rick"], 1);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('m')).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert_eq!(http_actions(&actions).len(), 1);
        assert_eq!(state.paging.query(), "m");

        // The abandoned timer later fires as a no-op.
        let (_, actions) = handle_event(&mut state, &Event::TimerTick).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn settling_an_unchanged_query_fetches_nothing() {
        let mut state = mounted_state(&["Rick"], 1);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('x')).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();

        for _ in 0..2 {
            let (_, actions) = handle_event(&mut state, &Event::TimerTick).unwrap();
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn escape_reverts_uncommitted_edits() {
        let mut state = mounted_state(&["Rick"], 1);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        handle_event(&mut state, &Event::ExitSearch).unwrap();

        assert_eq!(state.raw_query, "");
        let (_, actions) = handle_event(&mut state, &Event::TimerTick).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn page_turns_are_bounded_by_pagination_metadata() {
        let mut state = mounted_state(&["Rick"], 1);

        // Single page: both directions refuse.
        let (changed, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(!changed && actions.is_empty());
        let (changed, actions) = handle_event(&mut state, &Event::PrevPage).unwrap();
        assert!(!changed && actions.is_empty());
    }

    #[test]
    fn url_reflects_settled_state_with_replace_semantics() {
        let mut state = mounted_state(&["Rick"], 3);
        handle_event(&mut state, &Event::NextPage).unwrap();

        assert_eq!(state.history.current().encode(), "/?page=2");
        // Replace, not push: back from the list root stays put.
        assert!(state.history.back().is_none());
    }

    #[test]
    fn url_is_untouched_before_initialization() {
        let mut state = new_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('a')).unwrap();

        assert_eq!(state.history.current().encode(), "/");
    }

    #[test]
    fn retry_after_failure_reissues_the_same_key() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Initialize).unwrap();
        let request = http_actions(&actions)[0].clone();
        respond(&mut state, &request, 500, b"oops".to_vec());
        assert_eq!(state.list.state().phase, FetchPhase::Failed);

        let (_, actions) = handle_event(&mut state, &Event::Retry).unwrap();
        let requests = http_actions(&actions);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, request.url);
    }

    #[test]
    fn transport_failure_maps_to_a_network_error() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Initialize).unwrap();
        let request = http_actions(&actions)[0].clone();
        respond(&mut state, &request, 0, Vec::new());

        assert_eq!(state.list.state().phase, FetchPhase::Failed);
        assert!(state
            .list
            .state()
            .error
            .as_deref()
            .is_some_and(|message| message.contains("server")));
    }

    #[test]
    fn opening_detail_pushes_history_and_fetches_the_character() {
        let mut state = mounted_state(&["Rick"], 1);
        let (_, actions) = handle_event(&mut state, &Event::OpenDetail).unwrap();

        assert_eq!(state.route(), Route::Detail { id: 1 });
        let requests = http_actions(&actions);
        assert_eq!(requests[0].context, RequestContext::Character { id: 1 });

        // Back pops to the list without refetching.
        let (_, actions) = handle_event(&mut state, &Event::Back).unwrap();
        assert_eq!(state.route(), Route::List);
        assert!(actions.is_empty());
    }

    #[test]
    fn character_response_spawns_enrichment_requests() {
        let mut state = mounted_state(&["Rick"], 1);
        let (_, actions) = handle_event(&mut state, &Event::OpenDetail).unwrap();
        let request = http_actions(&actions)[0].clone();

        let body = character_body(
            1,
            &[
                "https://rickandmortyapi.com/api/episode/1",
                "https://rickandmortyapi.com/api/episode/2",
            ],
            "https://rickandmortyapi.com/api/location/3",
        );
        let actions = respond(&mut state, &request, 200, body);

        let requests = http_actions(&actions);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].context, RequestContext::Episodes { id: 1 });
        assert_eq!(requests[1].context, RequestContext::Location { id: 1 });
        assert!(requests[0].url.contains("/episode/1,2"));
    }

    #[test]
    fn characters_without_episodes_or_location_get_placeholders() {
        let mut state = mounted_state(&["Rick"], 1);
        let (_, actions) = handle_event(&mut state, &Event::OpenDetail).unwrap();
        let request = http_actions(&actions)[0].clone();

        let body = character_body(1, &[], "");
        let actions = respond(&mut state, &request, 200, body);

        assert!(http_actions(&actions).is_empty());
        let detail = state.detail.as_ref().unwrap();
        assert_eq!(detail.phase, FetchPhase::Success);
        assert_eq!(detail.episodes, Enrichment::Unavailable);
        assert_eq!(detail.location, Enrichment::Unavailable);
    }

    #[test]
    fn enrichment_failure_never_fails_the_detail_view() {
        let mut state = mounted_state(&["Rick"], 1);
        let (_, actions) = handle_event(&mut state, &Event::OpenDetail).unwrap();
        let request = http_actions(&actions)[0].clone();

        let body = character_body(
            1,
            &["https://rickandmortyapi.com/api/episode/1"],
            "https://rickandmortyapi.com/api/location/3",
        );
        let actions = respond(&mut state, &request, 200, body);
        let enrichments = http_actions(&actions);

        for enrichment in &enrichments {
            respond(&mut state, enrichment, 500, b"boom".to_vec());
        }

        let detail = state.detail.as_ref().unwrap();
        assert_eq!(detail.phase, FetchPhase::Success);
        assert_eq!(detail.episodes, Enrichment::Unavailable);
        assert_eq!(detail.location, Enrichment::Unavailable);
    }

    #[test]
    fn stale_enrichment_responses_are_discarded() {
        let mut state = mounted_state(&["Rick"], 1);
        let (_, actions) = handle_event(&mut state, &Event::OpenDetail).unwrap();
        let request = http_actions(&actions)[0].clone();

        let body = character_body(1, &["https://rickandmortyapi.com/api/episode/1"], "");
        let actions = respond(&mut state, &request, 200, body);
        let enrichment = http_actions(&actions)[0].clone();

        // User backs out before the enrichment lands.
        handle_event(&mut state, &Event::Back).unwrap();
        let (changed, _) = handle_event(
            &mut state,
            &Event::HttpResponse {
                status: 200,
                body: b"[]".to_vec(),
                context: enrichment.context.to_map().unwrap(),
            },
        )
        .unwrap();

        assert!(!changed);
        assert!(state.detail.is_none());
    }

    #[test]
    fn list_404_renders_as_a_failed_empty_state() {
        let mut state = mounted_state(&["Rick"], 1);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        let request = http_actions(&actions)[0].clone();

        respond(
            &mut state,
            &request,
            404,
            br#"{"error": "There is nothing here"}"#.to_vec(),
        );

        let list = state.list.state();
        assert_eq!(list.phase, FetchPhase::Failed);
        assert!(list.results.is_empty());
        assert_eq!(list.page_info.total_pages, 0);
    }
}

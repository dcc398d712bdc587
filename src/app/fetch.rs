//! Fetch orchestration for the character list.
//!
//! The orchestrator translates a [`PageQuery`] into at most one outstanding
//! network call and reconciles responses into [`FetchState`]. It owns two
//! guards:
//!
//! - a latest-issued key: re-dispatching the key that was most recently issued
//!   is a no-op, whether or not the request has resolved yet;
//! - an in-flight registry keyed by `(page, query)`, with entries removed when
//!   a request settles, so distinct-key races can be reasoned about and only a
//!   response matching the current key may mutate state.
//!
//! Results and pagination metadata are only ever written together, from one
//! successful response. A manual retry clears the latest-issued key first, so
//! a failed key is always eligible for replay.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::api::{self, CharactersResponse};
use crate::domain::{Character, MortydexError, PageQuery, PaginationInfo};

use super::modes::FetchPhase;

/// Identity of one list request: the `(page, query)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchKey {
    pub page: u32,
    pub query: String,
}

impl FetchKey {
    /// The key for a paging snapshot. The query is trimmed so that padding
    /// whitespace cannot defeat duplicate suppression.
    #[must_use]
    pub fn of(paging: &PageQuery) -> Self {
        Self {
            page: paging.page(),
            query: paging.query().trim().to_string(),
        }
    }
}

/// Result state of the character list view.
///
/// `results` and `page_info` move together, atomically, from a single settled
/// response; no partial updates exist.
#[derive(Debug, Clone)]
pub struct FetchState {
    pub phase: FetchPhase,
    pub results: Vec<Character>,
    pub page_info: PaginationInfo,
    pub error: Option<String>,
}

impl FetchState {
    fn new() -> Self {
        Self {
            phase: FetchPhase::Uninitialized,
            results: Vec::new(),
            page_info: PaginationInfo::zeroed(),
            error: None,
        }
    }
}

/// Duplicate-request guard: latest-issued key plus in-flight registry.
#[derive(Debug, Clone, Default)]
struct RequestGuard {
    latest: Option<FetchKey>,
    in_flight: HashSet<FetchKey>,
}

impl RequestGuard {
    /// Consults the guard; on pass, records `key` as latest and in flight.
    ///
    /// Re-dispatching a superseded key that is still outstanding issues no
    /// second request, but the key becomes latest again so the outstanding
    /// response is allowed to apply.
    fn try_issue(&mut self, key: &FetchKey) -> bool {
        if self.latest.as_ref() == Some(key) {
            return false;
        }
        if self.in_flight.contains(key) {
            self.latest = Some(key.clone());
            return false;
        }
        self.latest = Some(key.clone());
        self.in_flight.insert(key.clone());
        true
    }

    /// Removes a settled request from the registry.
    fn settle(&mut self, key: &FetchKey) {
        self.in_flight.remove(key);
    }

    /// Whether `key` is the latest-issued request.
    fn is_current(&self, key: &FetchKey) -> bool {
        self.latest.as_ref() == Some(key)
    }

    /// Forgets the latest-issued key so the same key can be replayed.
    fn clear_latest(&mut self) {
        self.latest = None;
    }
}

/// Orchestrates list fetches: duplicate suppression, phase transitions, and
/// atomic application of settled responses.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    state: FetchState,
    guard: RequestGuard,
    /// Set once the first response has ever succeeded; from then on requests
    /// refresh inline instead of re-entering the full-page loader.
    initialized: bool,
}

impl Orchestrator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FetchState::new(),
            guard: RequestGuard::default(),
            initialized: false,
        }
    }

    /// Read access to the current fetch state.
    #[must_use]
    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    /// Whether the first response has been applied.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Issues a request for the given paging snapshot, unless suppressed.
    ///
    /// Returns the URL to fetch together with its key, or `None` when the
    /// duplicate-key guard suppressed the request. On issue, the phase moves
    /// to `Loading` (first-ever request) or `Refreshing` (anything later) and
    /// the previous error is cleared.
    pub fn request(&mut self, base_url: &str, paging: &PageQuery) -> Option<(String, FetchKey)> {
        let key = FetchKey::of(paging);
        if !self.guard.try_issue(&key) {
            tracing::debug!(page = key.page, query = %key.query, "duplicate request suppressed");
            return None;
        }

        self.state.phase = if self.initialized {
            FetchPhase::Refreshing
        } else {
            FetchPhase::Loading
        };
        self.state.error = None;

        let url = api::character_list(base_url, key.page, &key.query);
        tracing::debug!(page = key.page, query = %key.query, %url, "issuing list request");
        Some((url, key))
    }

    /// Issues a retry for the given paging snapshot.
    ///
    /// The duplicate-key guard is keyed on issuance, so a plain `request`
    /// after a failure would be a no-op; retry explicitly clears the
    /// latest-issued key first.
    pub fn retry(&mut self, base_url: &str, paging: &PageQuery) -> Option<(String, FetchKey)> {
        tracing::debug!("manual retry requested");
        self.guard.clear_latest();
        self.request(base_url, paging)
    }

    /// Applies a settled response; returns `true` when state changed.
    ///
    /// The request is removed from the in-flight registry unconditionally, but
    /// only the response matching the current (latest-issued) key may mutate
    /// state: a stale response from a superseded key is discarded.
    pub fn on_response(
        &mut self,
        key: &FetchKey,
        outcome: Result<CharactersResponse, MortydexError>,
    ) -> bool {
        self.guard.settle(key);

        if !self.guard.is_current(key) {
            tracing::debug!(page = key.page, query = %key.query, "discarding stale response");
            return false;
        }

        match outcome {
            Ok(response) => {
                self.state.page_info = PaginationInfo::from(&response.info);
                self.state.results = response.results;
                self.state.phase = FetchPhase::Success;
                self.state.error = None;
                self.initialized = true;
                tracing::debug!(
                    result_count = self.state.results.len(),
                    total = self.state.page_info.total_count,
                    "list response applied"
                );
            }
            Err(error) => {
                tracing::debug!(%error, "list request failed");
                self.state.phase = FetchPhase::Failed;
                self.state.error = Some(error.to_string());
                self.state.results = Vec::new();
                self.state.page_info = PaginationInfo::zeroed();
            }
        }
        true
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BASE_URL;

    fn ok_response(count: u32, pages: u32, with_next: bool) -> CharactersResponse {
        let body = serde_json::json!({
            "info": {
                "count": count,
                "pages": pages,
                "next": if with_next { Some("next") } else { None },
                "prev": null
            },
            "results": [
                {"id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human", "gender": "Male"}
            ]
        });
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn identical_key_issued_twice_yields_one_request() {
        let mut orchestrator = Orchestrator::new();
        let paging = PageQuery::new(2, "rick");

        assert!(orchestrator.request(BASE_URL, &paging).is_some());
        // Second dispatch before the first resolves: suppressed.
        assert!(orchestrator.request(BASE_URL, &paging).is_none());
    }

    #[test]
    fn same_key_stays_suppressed_after_success() {
        let mut orchestrator = Orchestrator::new();
        let paging = PageQuery::new(1, "");
        let (_, key) = orchestrator.request(BASE_URL, &paging).unwrap();
        orchestrator.on_response(&key, Ok(ok_response(826, 42, true)));

        assert!(orchestrator.request(BASE_URL, &paging).is_none());
    }

    #[test]
    fn retry_replays_a_failed_key() {
        let mut orchestrator = Orchestrator::new();
        let paging = PageQuery::new(1, "zzzznotexist");
        let (_, key) = orchestrator.request(BASE_URL, &paging).unwrap();
        orchestrator.on_response(&key, Err(MortydexError::NotFound("no characters".into())));

        // Plain re-dispatch of the unchanged key is still a no-op...
        assert!(orchestrator.request(BASE_URL, &paging).is_none());
        // ...but an explicit retry always re-fetches.
        assert!(orchestrator.retry(BASE_URL, &paging).is_some());
    }

    #[test]
    fn failure_clears_results_and_zeroes_pagination() {
        let mut orchestrator = Orchestrator::new();
        let paging = PageQuery::new(1, "");
        let (_, key) = orchestrator.request(BASE_URL, &paging).unwrap();
        orchestrator.on_response(&key, Ok(ok_response(826, 42, true)));

        let next = paging.with_page(2);
        let (_, key2) = orchestrator.request(BASE_URL, &next).unwrap();
        orchestrator.on_response(&key2, Err(MortydexError::Transport { status: 500 }));

        let state = orchestrator.state();
        assert_eq!(state.phase, FetchPhase::Failed);
        assert!(state.results.is_empty());
        assert_eq!(state.page_info, PaginationInfo::zeroed());
        assert!(state.error.is_some());
    }

    #[test]
    fn stale_response_does_not_mutate_state() {
        let mut orchestrator = Orchestrator::new();
        let first = PageQuery::new(1, "rick");
        let second = PageQuery::new(1, "morty");

        let (_, key1) = orchestrator.request(BASE_URL, &first).unwrap();
        let (_, key2) = orchestrator.request(BASE_URL, &second).unwrap();

        // The superseded response lands late and is discarded.
        assert!(!orchestrator.on_response(&key1, Ok(ok_response(10, 1, false))));
        assert_eq!(orchestrator.state().phase, FetchPhase::Loading);

        // The current response applies.
        assert!(orchestrator.on_response(&key2, Ok(ok_response(826, 42, true))));
        assert_eq!(orchestrator.state().phase, FetchPhase::Success);
    }

    #[test]
    fn returning_to_an_in_flight_key_lets_its_response_apply() {
        let mut orchestrator = Orchestrator::new();
        let first = PageQuery::new(1, "rick");
        let second = PageQuery::new(1, "morty");

        let (_, key1) = orchestrator.request(BASE_URL, &first).unwrap();
        orchestrator.request(BASE_URL, &second).unwrap();
        // Back to the first key while its request is still outstanding: no
        // duplicate HTTP request is issued...
        assert!(orchestrator.request(BASE_URL, &first).is_none());

        // ...but when the outstanding response lands it is current, not stale.
        assert!(orchestrator.on_response(&key1, Ok(ok_response(10, 1, false))));
        assert_eq!(orchestrator.state().phase, FetchPhase::Success);
    }

    #[test]
    fn first_request_loads_then_later_requests_refresh() {
        let mut orchestrator = Orchestrator::new();
        let paging = PageQuery::new(1, "");
        let (_, key) = orchestrator.request(BASE_URL, &paging).unwrap();
        assert_eq!(orchestrator.state().phase, FetchPhase::Loading);
        orchestrator.on_response(&key, Ok(ok_response(826, 42, true)));

        orchestrator.request(BASE_URL, &paging.with_page(2)).unwrap();
        assert_eq!(orchestrator.state().phase, FetchPhase::Refreshing);
    }

    #[test]
    fn key_trims_the_query() {
        let padded = PageQuery::new(3, "  rick ");
        assert_eq!(FetchKey::of(&padded), FetchKey {
            page: 3,
            query: "rick".to_string(),
        });
    }
}

//! Routes and canonical location encoding.
//!
//! Two routes exist: the character list (with `page` and `search` query
//! parameters) and the character detail view (with the id as a path segment).
//! The query-string encoding is canonical: `page` is written only when greater
//! than 1 (page 1 is the implicit default) and `search` only when non-blank
//! after trimming, so default state encodes to a bare path.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::domain::PageQuery;

/// The two navigable routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Character list with paging and search.
    List,
    /// Detail view for one character.
    Detail {
        /// Character id from the path segment.
        id: u32,
    },
}

/// A canonical position in the plugin: route plus settled paging state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub paging: PageQuery,
}

impl Location {
    /// The list root with default paging: what `/` means in a browser.
    #[must_use]
    pub fn list_root() -> Self {
        Self {
            route: Route::List,
            paging: PageQuery::default(),
        }
    }

    /// A list location for the given settled paging state.
    #[must_use]
    pub const fn list(paging: PageQuery) -> Self {
        Self {
            route: Route::List,
            paging,
        }
    }

    /// A detail location, remembering the list paging it was entered from.
    #[must_use]
    pub const fn detail(id: u32, paging: PageQuery) -> Self {
        Self {
            route: Route::Detail { id },
            paging,
        }
    }

    /// Encodes this location as a canonical path plus query string.
    ///
    /// `page` appears only when > 1 and `search` only when non-blank after
    /// trimming, so `(page=1, query="")` encodes to `/` with no parameters.
    #[must_use]
    pub fn encode(&self) -> String {
        let path = match self.route {
            Route::List => "/".to_string(),
            Route::Detail { id } => format!("/character/{id}"),
        };

        let mut params = Vec::new();
        if self.paging.page() > 1 {
            params.push(format!("page={}", self.paging.page()));
        }
        let trimmed = self.paging.query().trim();
        if !trimmed.is_empty() {
            params.push(format!(
                "search={}",
                utf8_percent_encode(trimmed, NON_ALPHANUMERIC)
            ));
        }

        if params.is_empty() {
            path
        } else {
            format!("{path}?{}", params.join("&"))
        }
    }

    /// Parses a location string back into a route and paging state.
    ///
    /// Applies the mount-time defaults: `page` falls back to 1 when absent,
    /// non-numeric, or non-positive; `search` falls back to the empty string.
    /// Unrecognized paths resolve to the list root so a stale configuration
    /// value can never wedge the plugin.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query_string) = match input.split_once('?') {
            Some((path, qs)) => (path, qs),
            None => (input, ""),
        };

        let mut page = 1u32;
        let mut query = String::new();
        for pair in query_string.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "page" => {
                    if let Ok(parsed) = value.parse::<u32>() {
                        if parsed >= 1 {
                            page = parsed;
                        }
                    }
                }
                "search" => {
                    query = percent_decode_str(value).decode_utf8_lossy().into_owned();
                }
                _ => {}
            }
        }
        let paging = PageQuery::new(page, query);

        let route = path
            .strip_prefix("/character/")
            .and_then(|segment| segment.trim_end_matches('/').parse::<u32>().ok())
            .map_or(Route::List, |id| Route::Detail { id });

        Self { route, paging }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_encodes_to_bare_root() {
        let loc = Location::list(PageQuery::new(1, ""));
        assert_eq!(loc.encode(), "/");
    }

    #[test]
    fn list_root_starts_at_page_one() {
        let root = Location::list_root();
        assert_eq!(root.paging.page(), 1);
        assert_eq!(root.encode(), "/");
    }

    #[test]
    fn page_and_search_round_trip() {
        let parsed = Location::parse("/?page=3&search=morty");
        assert_eq!(parsed.route, Route::List);
        assert_eq!(parsed.paging.page(), 3);
        assert_eq!(parsed.paging.query(), "morty");
        assert_eq!(parsed.encode(), "/?page=3&search=morty");
    }

    #[test]
    fn settling_to_defaults_removes_parameters() {
        // Start at a non-default location, settle back to (1, "").
        let loc = Location::list(PageQuery::new(1, "  "));
        assert_eq!(loc.encode(), "/");
    }

    #[test]
    fn page_one_is_omitted_but_search_kept() {
        let loc = Location::list(PageQuery::new(1, "rick"));
        assert_eq!(loc.encode(), "/?search=rick");
    }

    #[test]
    fn search_is_percent_encoded() {
        let loc = Location::list(PageQuery::new(2, "rick sanchez"));
        assert_eq!(loc.encode(), "/?page=2&search=rick%20sanchez");
        let parsed = Location::parse("/?page=2&search=rick%20sanchez");
        assert_eq!(parsed.paging.query(), "rick sanchez");
    }

    #[test]
    fn invalid_page_values_default_to_one() {
        assert_eq!(Location::parse("/?page=0").paging.page(), 1);
        assert_eq!(Location::parse("/?page=-3").paging.page(), 1);
        assert_eq!(Location::parse("/?page=abc").paging.page(), 1);
        assert_eq!(Location::parse("/").paging.page(), 1);
    }

    #[test]
    fn detail_paths_parse_and_encode() {
        let parsed = Location::parse("/character/42");
        assert_eq!(parsed.route, Route::Detail { id: 42 });
        assert_eq!(
            Location::detail(42, PageQuery::new(2, "rick")).encode(),
            "/character/42?page=2&search=rick"
        );
    }

    #[test]
    fn unrecognized_paths_fall_back_to_list() {
        assert_eq!(Location::parse("/about").route, Route::List);
        assert_eq!(Location::parse("/character/abc").route, Route::List);
        assert_eq!(Location::parse("").route, Route::List);
    }
}

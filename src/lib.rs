//! Mortydex: a Rick and Morty character browser for Zellij.
//!
//! Browse, search, paginate, and inspect characters from the public
//! [Rick and Morty API](https://rickandmortyapi.com) without leaving the
//! terminal. Search input is debounced, list fetches are deduplicated by
//! their `(page, query)` key, and the navigation state round-trips through a
//! browser-style location string.
//!
//! # Layers
//!
//! - [`domain`]: records, paging types, and the error taxonomy
//! - [`api`]: URL construction and response decoding for the remote service
//! - [`app`]: state, event handling, fetch orchestration, debounce
//! - [`nav`]: locations, routes, and history with replace/push semantics
//! - [`ui`]: view models, components, themes, ANSI rendering
//! - [`observability`]: file-based OTLP tracing
//! - [`infrastructure`]: sandbox path handling

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod nav;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{MortydexError, PageQuery, Result};
pub use nav::{History, Location, Route};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration, read from the Zellij plugin configuration map.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the character service, without a trailing slash.
    pub base_url: String,

    /// Debounce window for search input, in milliseconds.
    pub debounce_ms: u64,

    /// Location string to mount at, e.g. `/?page=3&search=morty` or
    /// `/character/42`.
    pub start_location: String,

    /// Built-in theme name.
    pub theme_name: Option<String>,

    /// Path to a custom theme TOML file; takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `mortydex=trace`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            debounce_ms: app::DEFAULT_DEBOUNCE_MS,
            start_location: "/".to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds a configuration from Zellij's plugin configuration map.
    ///
    /// Unknown keys are ignored and malformed values fall back to defaults;
    /// a bad configuration must never prevent the plugin from loading.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let base_url = config
            .get("base_url")
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| api::BASE_URL.to_string());

        let debounce_ms = config
            .get("debounce_ms")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(app::DEFAULT_DEBOUNCE_MS);

        let start_location = config
            .get("start_location")
            .cloned()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "/".to_string());

        Self {
            base_url,
            debounce_ms,
            start_location,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Builds the initial application state from configuration.
///
/// The start location is parsed the way a browser would parse the address
/// bar on first load: page defaults to 1, search to empty, and unknown paths
/// resolve to the list root.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(start_location = %config.start_location, "initializing mortydex plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let start = Location::parse(&config.start_location);
    AppState::new(config.base_url.clone(), start, config.debounce_ms, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_survive_an_empty_map() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.base_url, api::BASE_URL);
        assert_eq!(config.debounce_ms, app::DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.start_location, "/");
    }

    #[test]
    fn config_reads_and_normalizes_values() {
        let mut map = BTreeMap::new();
        map.insert("base_url".to_string(), "http://localhost:8080/".to_string());
        map.insert("debounce_ms".to_string(), "250".to_string());
        map.insert("start_location".to_string(), "/?page=2".to_string());
        map.insert("debug".to_string(), "ignored".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.start_location, "/?page=2");
    }

    #[test]
    fn initialize_mounts_at_the_configured_location() {
        let config = Config {
            start_location: "/?page=3&search=morty".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.paging.page(), 3);
        assert_eq!(state.paging.query(), "morty");
        assert_eq!(state.raw_query, "morty");
        assert_eq!(state.route(), Route::List);
    }

    #[test]
    fn initialize_handles_detail_locations() {
        let config = Config {
            start_location: "/character/42".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.route(), Route::Detail { id: 42 });
    }
}

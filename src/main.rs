//! Zellij plugin shim for Mortydex.
//!
//! Translates raw Zellij events (keys, timers, web request results) into the
//! application's semantic [`Event`]s, and executes the [`Action`]s the
//! handler returns against the host runtime (HTTP via `web_request`, timers
//! via `set_timeout`).
//!
//! # Lifecycle
//!
//! 1. **Load**: parse configuration, initialize tracing and state
//! 2. **Subscribe**: register for `Key`, `Timer`, `WebRequestResult`, and
//!    `PermissionRequestResult` events
//! 3. **Permissions**: request `WebAccess`; the mount fetch waits for the
//!    grant
//! 4. **Update/Render**: unidirectional event → state → action loop

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;

use zellij_tile::prelude::*;

use mortydex::nav::Route;
use mortydex::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

struct State {
    app: mortydex::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: mortydex::initialize(&default_config),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        mortydex::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(base_url = %config.base_url, start_location = %config.start_location, "parsed configuration");
        self.app = mortydex::initialize(&config);
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::TimerTick,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Event::HttpResponse {
                    status,
                    body,
                    context,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match Self::map_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        mortydex::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps a raw key to a semantic event, honoring the current input mode
    /// and route.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if self.app.input_mode == InputMode::Search {
            return Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        let on_detail = matches!(self.app.route(), Route::Detail { .. });

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Right | BareKey::Char('l') if !on_detail => Event::NextPage,
            BareKey::Left | BareKey::Char('h') if !on_detail => Event::PrevPage,
            BareKey::Esc | BareKey::Char('b') if on_detail => Event::Back,
            BareKey::Enter if !on_detail => Event::OpenDetail,
            BareKey::Char('/') if !on_detail => Event::SearchMode,
            BareKey::Char('r') => Event::Retry,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_permission_result(permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - issuing mount fetch");
                Some(Event::Initialize)
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - plugin cannot fetch characters");
                None
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::StartTimer(seconds) => {
                tracing::debug!(seconds, "arming debounce timer");
                set_timeout(*seconds);
            }
            Action::Http(request) => match request.context.to_map() {
                Ok(context) => {
                    tracing::debug!(url = %request.url, "dispatching web request");
                    web_request(
                        &request.url,
                        HttpVerb::Get,
                        BTreeMap::new(),
                        Vec::new(),
                        context,
                    );
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to encode request context");
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_mounts_at_the_list_root() {
        let state = State::default();
        assert_eq!(state.app.route(), Route::List);
        assert_eq!(state.app.paging.page(), 1);
    }
}

//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or system events.
//! Actions bridge pure state transformations and effectful operations like
//! issuing HTTP requests or arming the debounce timer.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The plugin runtime executes
//! these actions in sequence via the action processor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::app::FetchKey;
use crate::domain::{MortydexError, Result};

/// Key under which [`RequestContext`] rides in the host request context map.
const CONTEXT_KEY: &str = "request";

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action
/// processor. They represent the boundary between pure state transformations
/// and effectful operations like network fetches and timers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Arms a one-shot timer that fires after the given number of seconds.
    ///
    /// Used by the search debouncer; the timer events carry no payload, so the
    /// debouncer counts outstanding timers instead of cancelling them.
    StartTimer(f64),

    /// Issues an HTTP GET through the host runtime.
    Http(HttpRequest),
}

/// One outgoing GET request plus the context echoed back with its response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub context: RequestContext,
}

impl HttpRequest {
    #[must_use]
    pub fn new(url: String, context: RequestContext) -> Self {
        Self { url, context }
    }
}

/// Identifies what an HTTP response is for, so the handler can route it.
///
/// The host echoes an arbitrary string map back with each response; the
/// context is serialized into that map on dispatch and recovered on arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequestContext {
    /// A character list page, tagged with its duplicate-guard key.
    CharacterList { key: FetchKey },

    /// A single character for the detail view.
    Character { id: u32 },

    /// Episode enrichment for the detail view of character `id`.
    Episodes { id: u32 },

    /// Location enrichment for the detail view of character `id`.
    Location { id: u32 },
}

impl RequestContext {
    /// Encodes the context into the string map the host carries alongside a
    /// request.
    pub fn to_map(&self) -> Result<BTreeMap<String, String>> {
        let encoded = serde_json::to_string(self)?;
        let mut map = BTreeMap::new();
        map.insert(CONTEXT_KEY.to_string(), encoded);
        Ok(map)
    }

    /// Decodes a context previously written by [`Self::to_map`].
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let encoded = map.get(CONTEXT_KEY).ok_or_else(|| {
            MortydexError::Validation("response context is missing its request tag".to_string())
        })?;
        Ok(serde_json::from_str(encoded)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_survives_the_host_map() {
        let context = RequestContext::CharacterList {
            key: FetchKey {
                page: 3,
                query: "morty".to_string(),
            },
        };

        let map = context.to_map().unwrap();
        assert_eq!(RequestContext::from_map(&map).unwrap(), context);
    }

    #[test]
    fn map_without_a_tag_is_rejected() {
        let map = BTreeMap::new();
        assert!(RequestContext::from_map(&map).is_err());
    }

    #[test]
    fn enrichment_contexts_round_trip() {
        for context in [
            RequestContext::Character { id: 1 },
            RequestContext::Episodes { id: 1 },
            RequestContext::Location { id: 1 },
        ] {
            let map = context.to_map().unwrap();
            assert_eq!(RequestContext::from_map(&map).unwrap(), context);
        }
    }
}

//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/api layers. It implements the
//! event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── HTTP Responses ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Settlement window for search input
//! - [`fetch`]: Fetch orchestration and the duplicate-request guard
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and fetch phase state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod debounce;
pub mod fetch;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::{Action, HttpRequest, RequestContext};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use fetch::{FetchKey, FetchState, Orchestrator};
pub use handler::{handle_event, Event};
pub use modes::{FetchPhase, InputMode};
pub use state::{AppState, DetailState, Enrichment};

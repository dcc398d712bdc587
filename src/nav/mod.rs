//! Navigation: routes, canonical locations, and history.
//!
//! A browser would keep this state in the address bar; inside a Zellij pane the
//! plugin keeps an explicit [`Location`] synchronized with the settled paging
//! state instead. The canonical encoding is one-way: it is written from settled
//! state and never itself triggers a fetch. The inverse mapping runs exactly
//! once, on mount, against the `start_location` configuration value.
//!
//! # Modules
//!
//! - [`location`]: Route and location types with query-string encode/parse
//! - [`history`]: Replace/push/back history semantics

pub mod history;
pub mod location;

pub use history::History;
pub use location::{Location, Route};

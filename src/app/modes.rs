//! Input mode and fetch phase state machines.
//!
//! These enums control keybinding interpretation and which loading chrome the
//! UI shows. The fetch phase machine is deliberately one-way about full-page
//! loading: once the first list response has landed, later requests only ever
//! pass through [`FetchPhase::Refreshing`], never back through the full-page
//! loader.

/// Current input handling mode.
///
/// Determines active keybindings and whether the search bar captures
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command mode.
    Normal,

    /// The search bar has focus; printable keys edit the raw query.
    Search,
}

/// Lifecycle phase of a fetching view.
///
/// `Uninitialized → Loading → {Success, Failed}` on first use; subsequent
/// requests go `{Success, Failed} → Refreshing → {Success, Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// Nothing has been requested yet.
    Uninitialized,

    /// First-ever request is in flight; the full-page loader is shown.
    Loading,

    /// A later request is in flight; results stay visible behind an inline
    /// refreshing indicator.
    Refreshing,

    /// The most recent request resolved with data.
    Success,

    /// The most recent request failed; an error panel with a retry hint is
    /// shown.
    Failed,
}

impl FetchPhase {
    /// Whether the full-page loader (rather than inline chrome) applies.
    #[must_use]
    pub const fn is_initial_load(self) -> bool {
        matches!(self, Self::Uninitialized | Self::Loading)
    }

    /// Whether a request is currently outstanding.
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::Loading | Self::Refreshing)
    }
}

//! Browser-style history with replace, push, and back.
//!
//! Incremental updates to the settled paging state use [`History::replace`] so
//! back navigation is never polluted by keystroke-by-keystroke churn; route
//! changes (list into detail) use [`History::push`] so [`History::back`] can
//! return to the exact prior list state.

use super::location::Location;

/// An ordered stack of visited locations; the last entry is current.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
}

impl History {
    /// Creates a history rooted at the given initial location.
    #[must_use]
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// The current location.
    #[must_use]
    pub fn current(&self) -> &Location {
        // Invariant: entries is never empty.
        self.entries.last().unwrap_or_else(|| unreachable!())
    }

    /// Replaces the current entry without growing the stack.
    pub fn replace(&mut self, location: Location) {
        if let Some(last) = self.entries.last_mut() {
            *last = location;
        }
    }

    /// Pushes a new entry, making it current.
    pub fn push(&mut self, location: Location) {
        self.entries.push(location);
    }

    /// Navigates back one entry and returns the new current location.
    ///
    /// Returns `None` when there is no prior entry; callers fall back to the
    /// list root in that case.
    pub fn back(&mut self) -> Option<Location> {
        if self.entries.len() > 1 {
            self.entries.pop();
            Some(self.current().clone())
        } else {
            None
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::list_root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageQuery;
    use crate::nav::Route;

    #[test]
    fn replace_does_not_grow_the_stack() {
        let mut history = History::default();
        history.replace(Location::list(PageQuery::new(2, "")));
        history.replace(Location::list(PageQuery::new(3, "")));
        assert_eq!(history.current().paging.page(), 3);
        assert!(history.back().is_none());
    }

    #[test]
    fn back_returns_the_prior_list_state() {
        let paging = PageQuery::new(4, "morty");
        let mut history = History::new(Location::list(paging.clone()));
        history.push(Location::detail(7, paging.clone()));
        assert_eq!(history.current().route, Route::Detail { id: 7 });

        let back = history.back().expect("prior entry exists");
        assert_eq!(back.route, Route::List);
        assert_eq!(back.paging, paging);
    }

    #[test]
    fn back_at_the_root_yields_none() {
        let mut history = History::default();
        assert!(history.back().is_none());
        // Current stays at the root.
        assert_eq!(history.current().route, Route::List);
    }
}

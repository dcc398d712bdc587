//! Cancellable scheduled settlement for the search input.
//!
//! Every keystroke updates the raw query immediately; the settled value that
//! reaches the fetch orchestrator trails behind by a quiet window (500 ms by
//! default). Zellij timers deliver bare `Timer` events with no payload, so a
//! pending settlement cannot be cancelled by handle: instead the debouncer
//! counts outstanding timers and arms a dirty flag. Superseded timers drain the
//! counter without effect; only the timer that ends a burst settles. An
//! explicit submit flushes immediately, bypassing the window.

/// Default quiet window before a raw query change settles.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Tracks pending settlement of the raw search query.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_secs: f64,
    outstanding: u32,
    dirty: bool,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet window in milliseconds.
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_secs: delay_ms as f64 / 1000.0,
            outstanding: 0,
            dirty: false,
        }
    }

    /// Records a raw query change and returns the timer delay to schedule.
    ///
    /// Each call supersedes any pending settlement: earlier timers will fire
    /// first and drain without settling.
    pub fn input(&mut self) -> f64 {
        self.dirty = true;
        self.outstanding += 1;
        self.delay_secs
    }

    /// Consumes one timer expiry; returns `true` when the value settles.
    ///
    /// Settlement happens only when the final timer of a burst fires with the
    /// dirty flag still armed.
    pub fn tick(&mut self) -> bool {
        self.outstanding = self.outstanding.saturating_sub(1);
        if self.outstanding == 0 && self.dirty {
            self.dirty = false;
            true
        } else {
            false
        }
    }

    /// Settles immediately (explicit form submission).
    ///
    /// Clears the dirty flag so any still-outstanding timers fire as no-ops.
    pub fn flush(&mut self) {
        self.dirty = false;
    }

    /// Whether a settlement is still pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.dirty
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_edit_settles_on_its_timer() {
        let mut debouncer = Debouncer::default();
        debouncer.input();
        assert!(debouncer.tick());
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn rapid_edits_settle_exactly_once() {
        let mut debouncer = Debouncer::default();
        // Three keystrokes inside the quiet window: three timers scheduled.
        debouncer.input();
        debouncer.input();
        debouncer.input();

        // The first two timers are superseded and drain without settling.
        assert!(!debouncer.tick());
        assert!(!debouncer.tick());
        // Only the last timer of the burst settles.
        assert!(debouncer.tick());
        // A stray extra tick is a no-op.
        assert!(!debouncer.tick());
    }

    #[test]
    fn flush_bypasses_the_timer() {
        let mut debouncer = Debouncer::default();
        debouncer.input();
        debouncer.flush();
        assert!(!debouncer.is_pending());
        // The timer scheduled by the edit later fires as a no-op.
        assert!(!debouncer.tick());
    }

    #[test]
    fn edits_after_a_settlement_start_a_new_burst() {
        let mut debouncer = Debouncer::default();
        debouncer.input();
        assert!(debouncer.tick());

        debouncer.input();
        assert!(debouncer.tick());
    }
}

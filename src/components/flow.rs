//! Fetch Flow Bookkeeping
//!
//! Pure decision logic behind the components' overlapping async work: a
//! monotonic sequence number tagging each issued fetch, and the single
//! pending-debounce slot of the search box. Components own the real timer,
//! network call and signal writes; every ordering decision funnels through
//! here so it can be tested without a browser.

/// Monotonic tag for overlapping async fetches.
///
/// Each newly issued request claims the next number; a completion may be
/// applied only while its number is still current, so a slow response for
/// superseded input can never overwrite newer state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchSequence(u64);

impl FetchSequence {
    /// Claim the next sequence number, superseding everything outstanding.
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether a completion tagged `seq` still belongs to the newest request.
    pub fn is_current(self, seq: u64) -> bool {
        self.0 == seq
    }
}

/// Decision core of the debounced search box.
///
/// A keystroke supersedes all outstanding work and, when its text is
/// non-empty, occupies the single pending-debounce slot. At most one timer
/// is live at a time; elapse fires a fetch only for the slot's owner, and
/// completions are applied only while their tag is current.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchFlow {
    seq: FetchSequence,
    pending: Option<u64>,
}

impl SearchFlow {
    /// Keystroke. Returns the tag for the replacement debounce timer, or
    /// `None` when the text is empty and no fetch may be scheduled.
    pub fn on_input(&mut self, text: &str) -> Option<u64> {
        let seq = self.seq.next();
        if text.trim().is_empty() {
            self.pending = None;
            None
        } else {
            self.pending = Some(seq);
            Some(seq)
        }
    }

    /// Debounce elapse for the timer tagged `seq`. True exactly when that
    /// timer still owns the pending slot, i.e. for the final settled value
    /// of a burst of keystrokes.
    pub fn on_elapsed(&mut self, seq: u64) -> bool {
        if self.pending == Some(seq) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Whether a completed fetch tagged `seq` may populate the list.
    pub fn is_current(&self, seq: u64) -> bool {
        self.seq.is_current(seq)
    }

    /// Selection, dismissal or teardown: drop the pending slot and
    /// supersede anything in flight.
    pub fn invalidate(&mut self) {
        self.seq.next();
        self.pending = None;
    }
}

//! Search input coalescing

use std::time::Duration;
use tokio::time::Instant;

/// Holds the latest typed query until the input has been quiet for `window`
#[derive(Debug)]
pub struct SearchDebouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        SearchDebouncer {
            window,
            pending: None,
        }
    }

    /// Record a keystroke; each call pushes the deadline back.
    /// A window too large to represent applies the query on the next tick.
    pub fn push(&mut self, query: String, now: Instant) {
        let deadline = now.checked_add(self.window).unwrap_or(now);
        self.pending = Some((query, deadline));
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn pending_query(&self) -> Option<&str> {
        self.pending.as_ref().map(|(query, _)| query.as_str())
    }

    /// The pending query, if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.pending.take().map(|(query, _)| query),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

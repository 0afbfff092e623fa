/// Identifies one elevation-query round in a deterministic, stable way.
///
/// Both surface queries issued for the same sketch update share a ticket.
/// This is intentionally a small, copyable handle so callers can hold it
/// across an await point without borrowing the tracker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(pub u64);

/// Enforces the at-most-one-outstanding elevation-query policy.
///
/// Every sketch update calls `begin`, which supersedes whatever round was
/// still pending. A superseded round's `complete` returns false, so a stale
/// query result can never reach the profile extractor. The tracker issues
/// strictly increasing tickets and never reuses one.
#[derive(Debug, Default)]
pub struct QueryTracker {
    next: u64,
    pending: Option<QueryTicket>,
}

impl QueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new query round, cancelling any round still pending.
    pub fn begin(&mut self) -> QueryTicket {
        let ticket = QueryTicket(self.next);
        self.next += 1;
        self.pending = Some(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.pending == Some(ticket)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Marks `ticket`'s round as finished.
    ///
    /// Returns true only when `ticket` is still the current round; a stale
    /// or already-completed ticket returns false and leaves state untouched.
    pub fn complete(&mut self, ticket: QueryTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            return true;
        }
        false
    }

    /// Explicit cancellation (reset/clear path).
    ///
    /// Returns the ticket that was pending, if any.
    pub fn cancel(&mut self) -> Option<QueryTicket> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::QueryTracker;

    #[test]
    fn begin_supersedes_pending_round() {
        let mut t = QueryTracker::new();
        let first = t.begin();
        let second = t.begin();

        assert!(!t.is_current(first));
        assert!(t.is_current(second));
        assert!(!t.complete(first), "superseded round must not complete");
        assert!(t.complete(second));
        assert!(!t.has_pending());
    }

    #[test]
    fn tickets_strictly_increase() {
        let mut t = QueryTracker::new();
        let a = t.begin();
        t.complete(a);
        let b = t.begin();
        t.cancel();
        let c = t.begin();
        assert!(a < b && b < c);
    }

    #[test]
    fn complete_is_one_shot() {
        let mut t = QueryTracker::new();
        let ticket = t.begin();
        assert!(t.complete(ticket));
        assert!(!t.complete(ticket));
    }

    #[test]
    fn cancel_clears_pending() {
        let mut t = QueryTracker::new();
        let ticket = t.begin();
        assert_eq!(t.cancel(), Some(ticket));
        assert_eq!(t.cancel(), None);
        assert!(!t.complete(ticket));
    }
}

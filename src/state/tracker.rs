//! Request generation counters
//!
//! Each list owns a tracker. Every load takes a ticket; when the response
//! arrives it is applied only if no newer ticket has been issued since.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: Cell<u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket
    pub fn issue(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.get() == ticket.0
    }

    pub fn latest(&self) -> u64 {
        self.issued.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert_eq!(second.generation(), 2);
    }
}

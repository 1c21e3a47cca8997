use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Epoch tickets for in-flight fetches.
///
/// Requests are never aborted; instead each one carries the epoch it was
/// issued under, and its result is applied only while that epoch is still
/// current. Issuing a newer fetch, or retiring the coordinator on page
/// teardown, invalidates everything outstanding — so the last *issued*
/// fetch wins and unmounted pages never mutate state.
#[derive(Clone, Default)]
pub struct FetchCoordinator {
    epoch: Arc<AtomicU64>,
}

pub struct FetchTicket {
    issued_at: u64,
    epoch: Arc<AtomicU64>,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> FetchTicket {
        let next = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            issued_at: next,
            epoch: Arc::clone(&self.epoch),
        }
    }

    /// Invalidate every outstanding ticket without issuing a new one.
    pub fn retire(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.epoch.load(Ordering::SeqCst) == self.issued_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let coordinator = FetchCoordinator::new();
        let ticket = coordinator.issue();
        assert!(ticket.is_current());
    }

    #[test]
    fn test_newer_fetch_supersedes_older_one() {
        let coordinator = FetchCoordinator::new();
        let first = coordinator.issue();
        let second = coordinator.issue();
        assert!(!first.is_current(), "superseded response must be discarded");
        assert!(second.is_current());
    }

    #[test]
    fn test_retire_invalidates_outstanding_tickets() {
        let coordinator = FetchCoordinator::new();
        let ticket = coordinator.issue();
        coordinator.retire();
        assert!(!ticket.is_current());
    }
}

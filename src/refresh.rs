use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one refresh attempt. Obtained from
/// [`RefreshCoordinator::begin`] before starting a fetch and presented
/// again when the result arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    sequence: u64,
}

/// Serializes overlapping forecast refreshes.
///
/// Fetches for the same view can overlap: a manual refresh and a profile
/// switch may both be in flight at once, and a slow
/// earlier request must not overwrite the result of a later one. Each
/// attempt takes a ticket up front and presents it back through
/// [`commit`](RefreshCoordinator::commit), which succeeds at most once
/// per ticket and only while that ticket is the newest one issued.
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    latest: AtomicU64,
    applied: AtomicU64,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh attempt, superseding all earlier tickets.
    pub fn begin(&self) -> RefreshTicket {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RefreshTicket { sequence }
    }

    /// Claim the right to apply the result for `ticket`. Succeeds only
    /// while `ticket` is the newest one issued, and at most once per
    /// ticket. A false return means the result belongs to a superseded
    /// or already-applied fetch and must be discarded.
    pub fn commit(&self, ticket: RefreshTicket) -> bool {
        if self.latest.load(Ordering::SeqCst) != ticket.sequence {
            return false;
        }
        self.applied.fetch_max(ticket.sequence, Ordering::SeqCst) < ticket.sequence
    }
}

//! Last-request-wins sequencing for overlapping loads.
//!
//! Every load takes a ticket from [`RequestGuard::begin`]. When its response
//! arrives, the result is applied only if no newer load has started since.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation number handed to one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestGuard {
    generation: AtomicU64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, invalidating every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recent load.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}

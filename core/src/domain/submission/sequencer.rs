use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU64, Ordering},
};

use crate::domain::common::entities::app_errors::CoreError;

/// Monotonic id attached to each issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A response paired with the ticket of the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequenced<T> {
    pub ticket: RequestTicket,
    pub value: T,
}

impl<T> Sequenced<T> {
    /// Keep the value only if no newer request has been issued since.
    pub fn into_latest(self, sequencer: &RequestSequencer) -> Option<T> {
        sequencer.accept(self.ticket, self.value)
    }
}

/// Per-form request bookkeeping: a pending flag that blocks duplicate
/// submissions, and sequence numbers so a late response to a superseded
/// request is dropped instead of overwriting newer state.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
    pending: Arc<AtomicBool>,
}

impl RequestSequencer {
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_latest(ticket) {
            Some(value)
        } else {
            tracing::debug!(ticket = ticket.0, "Discarding stale response");
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Mark the form as busy until the returned guard drops.
    pub fn try_begin(&self) -> Result<PendingGuard, CoreError> {
        self.pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| CoreError::SubmissionPending)?;

        Ok(PendingGuard {
            pending: Arc::clone(&self.pending),
        })
    }
}

#[derive(Debug)]
pub struct PendingGuard {
    pending: Arc<AtomicBool>,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.pending.store(false, Ordering::SeqCst);
    }
}

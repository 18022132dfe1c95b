use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Tracks client-side preview resources (object urls, decoded frames) so that
/// every allocation is paired with a release.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    inner: Arc<PreviewCounters>,
}

#[derive(Debug, Default)]
struct PreviewCounters {
    live: AtomicUsize,
    allocated: AtomicUsize,
}

impl PreviewRegistry {
    pub fn allocate(&self) -> PreviewHandle {
        self.inner.live.fetch_add(1, Ordering::SeqCst);
        self.inner.allocated.fetch_add(1, Ordering::SeqCst);
        PreviewHandle {
            counters: Arc::clone(&self.inner),
        }
    }

    /// Previews currently held.
    pub fn live(&self) -> usize {
        self.inner.live.load(Ordering::SeqCst)
    }

    pub fn allocated_total(&self) -> usize {
        self.inner.allocated.load(Ordering::SeqCst)
    }
}

/// Released on drop.
#[derive(Debug)]
pub struct PreviewHandle {
    counters: Arc<PreviewCounters>,
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.counters.live.fetch_sub(1, Ordering::SeqCst);
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters collected while streaming a dump.
#[derive(Debug, Default)]
pub struct ParseStats {
    pub pages_seen: AtomicU64,
    pub words_emitted: AtomicU64,
    pub redirects_skipped: AtomicU64,
    pub namespace_skipped: AtomicU64,
    pub unfinished_skipped: AtomicU64,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_pages(&self) {
        self.pages_seen.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_words(&self) {
        self.words_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_redirects(&self) {
        self.redirects_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_namespaced(&self) {
        self.namespace_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_unfinished(&self) {
        self.unfinished_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn pages(&self) -> u64 {
        self.pages_seen.load(Ordering::Relaxed)
    }

    pub fn words(&self) -> u64 {
        self.words_emitted.load(Ordering::Relaxed)
    }

    pub fn redirects(&self) -> u64 {
        self.redirects_skipped.load(Ordering::Relaxed)
    }

    pub fn namespaced(&self) -> u64 {
        self.namespace_skipped.load(Ordering::Relaxed)
    }

    pub fn unfinished(&self) -> u64 {
        self.unfinished_skipped.load(Ordering::Relaxed)
    }

    /// Pages that produced no entry, for any reason.
    pub fn skipped(&self) -> u64 {
        self.redirects() + self.namespaced() + self.unfinished()
    }
}

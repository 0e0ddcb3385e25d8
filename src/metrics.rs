use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared counters for one extraction run. Handles are cheap to clone and
/// safe to read from a monitoring thread while the extractor runs.
#[derive(Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    start_time: Instant,
    records_assembled: AtomicU64,
    entries_emitted: AtomicU64,
    records_skipped: AtomicU64,
    bytes_read: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                start_time: Instant::now(),
                records_assembled: AtomicU64::new(0),
                entries_emitted: AtomicU64::new(0),
                records_skipped: AtomicU64::new(0),
                bytes_read: AtomicU64::new(0),
            }),
        }
    }

    pub fn inc_records(&self) {
        self.inner.records_assembled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_entries(&self) {
        self.inner.entries_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_skipped(&self) {
        self.inner.records_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_bytes_read(&self, bytes: u64) {
        self.inner.bytes_read.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn records(&self) -> u64 {
        self.inner.records_assembled.load(Ordering::Relaxed)
    }

    pub fn entries(&self) -> u64 {
        self.inner.entries_emitted.load(Ordering::Relaxed)
    }

    pub fn skipped(&self) -> u64 {
        self.inner.records_skipped.load(Ordering::Relaxed)
    }

    pub fn bytes_read(&self) -> u64 {
        self.inner.bytes_read.load(Ordering::Relaxed)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.inner.start_time.elapsed().as_secs_f64()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

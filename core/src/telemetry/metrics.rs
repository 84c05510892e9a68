use std::sync::Mutex;

/// Counts how sample blocks moved through a driver.
pub struct KernelCounters {
    inner: Mutex<Counters>,
}

struct Counters {
    processed: usize,
    degenerate: usize,
    rejected: usize,
}

impl KernelCounters {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                processed: 0,
                degenerate: 0,
                rejected: 0,
            }),
        }
    }

    pub fn record_processed(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.processed += 1;
        }
    }

    pub fn record_degenerate(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.degenerate += 1;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.rejected += 1;
        }
    }

    /// Returns (processed, degenerate, rejected).
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.processed, counters.degenerate, counters.rejected)
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for KernelCounters {
    fn default() -> Self {
        Self::new()
    }
}

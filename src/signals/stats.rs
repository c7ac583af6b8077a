/*!
 * Lock-Free Signal Statistics
 * Atomic counters for zero-contention stats tracking in hot paths
 */

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Signal statistics snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignalStats {
    pub total_recorded: u64,
    pub total_delivered: u64,
    pub total_ignored: u64,
    pub total_unknown_dropped: u64,
    pub handlers_registered: usize,
}

/// Atomic signal statistics for lock-free updates
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - All operations use relaxed ordering
#[repr(C, align(64))]
pub struct AtomicSignalStats {
    total_recorded: AtomicU64,
    total_delivered: AtomicU64,
    total_ignored: AtomicU64,
    total_unknown_dropped: AtomicU64,
    handlers_registered: AtomicUsize,
}

impl AtomicSignalStats {
    pub const fn new() -> Self {
        Self {
            total_recorded: AtomicU64::new(0),
            total_delivered: AtomicU64::new(0),
            total_ignored: AtomicU64::new(0),
            total_unknown_dropped: AtomicU64::new(0),
            handlers_registered: AtomicUsize::new(0),
        }
    }

    /// Increment recorded count (lock-free, async-signal-safe)
    #[inline(always)]
    pub fn inc_recorded(&self) {
        self.total_recorded.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment delivered count
    #[inline(always)]
    pub fn inc_delivered(&self) {
        self.total_delivered.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment ignored-delivery count
    #[inline(always)]
    pub fn inc_ignored(&self) {
        self.total_ignored.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment unknown-host-signal count (lock-free, async-signal-safe)
    #[inline(always)]
    pub fn inc_unknown_dropped(&self) {
        self.total_unknown_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_handlers(&self) {
        self.handlers_registered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dec_handlers(&self) {
        let mut current = self.handlers_registered.load(Ordering::Relaxed);
        loop {
            let next = current.saturating_sub(1);
            match self.handlers_registered.compare_exchange_weak(
                current,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(observed) => current = observed,
            }
        }
    }

    /// Read-only snapshot; requires no synchronization
    pub fn snapshot(&self) -> SignalStats {
        SignalStats {
            total_recorded: self.total_recorded.load(Ordering::Relaxed),
            total_delivered: self.total_delivered.load(Ordering::Relaxed),
            total_ignored: self.total_ignored.load(Ordering::Relaxed),
            total_unknown_dropped: self.total_unknown_dropped.load(Ordering::Relaxed),
            handlers_registered: self.handlers_registered.load(Ordering::Relaxed),
        }
    }
}

impl Default for AtomicSignalStats {
    fn default() -> Self {
        Self::new()
    }
}

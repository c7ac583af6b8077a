/*!
 * Pending-Signal Set
 * Lock-free per-context record of raised but undelivered signals
 */

use super::types::{Signal, SIGNAL_SLOTS};
use std::sync::atomic::{AtomicBool, Ordering};

/// Per-context pending-signal set
///
/// Written from the host's asynchronous signal-delivery path, so `record`
/// is a fixed pair of atomic stores: no allocation, no locking, nothing
/// that could deadlock against an interrupted critical section. The
/// aggregate flag keeps the interpreter's safepoint check to a single
/// atomic load.
///
/// # Performance
/// - Cache-line aligned to prevent false sharing with neighboring context state
#[repr(C, align(64))]
pub struct PendingSet {
    flags: [AtomicBool; SIGNAL_SLOTS],
    any: AtomicBool,
}

impl PendingSet {
    pub fn new() -> Self {
        Self {
            flags: std::array::from_fn(|_| AtomicBool::new(false)),
            any: AtomicBool::new(false),
        }
    }

    /// Mark a signal pending
    ///
    /// Async-signal-safe: the per-signal flag is published before the
    /// aggregate flag so a drain that observes `any` also observes the flag.
    #[inline]
    pub fn record(&self, signal: Signal) {
        self.flags[signal.number() as usize].store(true, Ordering::Release);
        self.any.store(true, Ordering::Release);
    }

    /// Mark a signal pending by raw internal number
    ///
    /// Trampoline entry; unknown numbers are reported, not recorded.
    /// Allocation-free like `record`.
    #[inline]
    pub fn record_raw(&self, number: u32) -> bool {
        match Signal::from_number(number) {
            Ok(signal) => {
                self.record(signal);
                true
            }
            Err(_) => false,
        }
    }

    /// Check whether any signal is pending
    ///
    /// # Performance
    /// Hot path - evaluated at every safepoint
    #[inline(always)]
    pub fn has_pending(&self) -> bool {
        self.any.load(Ordering::Acquire)
    }

    /// Atomically clear and return the pending signals in ascending order
    ///
    /// Signals recorded concurrently with the sweep either land in this
    /// drain or re-raise the aggregate flag for the next one; none are lost.
    pub fn drain(&self) -> Vec<Signal> {
        if !self.any.swap(false, Ordering::AcqRel) {
            return Vec::new();
        }
        let mut drained = Vec::new();
        for signal in Signal::ALL {
            if self.flags[signal.number() as usize].swap(false, Ordering::AcqRel) {
                drained.push(signal);
            }
        }
        drained
    }
}

impl Default for PendingSet {
    fn default() -> Self {
        Self::new()
    }
}

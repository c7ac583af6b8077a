/*!
 * Runtime Context
 * One independent instance of the execution engine
 */

mod registry;

pub use registry::ContextRegistry;

use crate::blocking::SectionState;
use crate::core::types::ContextId;
use crate::signals::{
    AtomicSignalStats, HandlerTable, PendingSet, Signal, SignalAction, SignalResult, SignalStats,
};
use std::sync::atomic::{AtomicU32, AtomicU8};
use std::sync::Arc;

/// Handle to one runtime instance
///
/// Owns the instance's pending-signal set, blocking-section state, and
/// handler table. There is no ambient global: every operation in the
/// subsystem takes a context explicitly, so any number of instances can
/// coexist in one process. Cloning is cheap and shares the instance.
#[derive(Clone)]
pub struct RuntimeContext {
    pub(crate) inner: Arc<ContextInner>,
}

pub(crate) struct ContextInner {
    pub(crate) id: ContextId,
    pub(crate) pending: PendingSet,
    pub(crate) handlers: HandlerTable,
    pub(crate) section: AtomicU8,
    pub(crate) handler_depth: AtomicU32,
    pub(crate) stats: AtomicSignalStats,
}

impl RuntimeContext {
    pub(crate) fn new(id: ContextId) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                id,
                pending: PendingSet::new(),
                handlers: HandlerTable::new(id),
                section: AtomicU8::new(SectionState::Running as u8),
                handler_depth: AtomicU32::new(0),
                stats: AtomicSignalStats::new(),
            }),
        }
    }

    /// Context ID
    pub fn id(&self) -> ContextId {
        self.inner.id
    }

    /// Mark a signal pending for this context
    ///
    /// Async-signal-safe: atomic stores only.
    #[inline]
    pub fn record(&self, signal: Signal) {
        self.inner.pending.record(signal);
        self.inner.stats.inc_recorded();
    }

    /// Mark a signal pending by raw internal number; false if unrecognized
    #[inline]
    pub fn record_raw(&self, number: u32) -> bool {
        let recorded = self.inner.pending.record_raw(number);
        if recorded {
            self.inner.stats.inc_recorded();
        }
        recorded
    }

    /// Check whether any signal is pending
    ///
    /// # Performance
    /// Hot path - a single atomic load
    #[inline(always)]
    pub fn has_pending(&self) -> bool {
        self.inner.pending.has_pending()
    }

    /// Atomically clear and return pending signals in ascending order
    pub fn drain_pending(&self) -> Vec<Signal> {
        self.inner.pending.drain()
    }

    /// Register an action for a signal, returning the previous registration
    pub fn set_signal_action(
        &self,
        signal: Signal,
        action: SignalAction,
    ) -> SignalResult<Option<SignalAction>> {
        let previous = self.inner.handlers.set_action(signal, action)?;
        if previous.is_none() {
            self.inner.stats.inc_handlers();
        }
        Ok(previous)
    }

    /// Look up the registered action for a signal
    pub fn signal_action(&self, signal: Signal) -> Option<SignalAction> {
        self.inner.handlers.action(signal)
    }

    /// Remove a registration, returning it
    pub fn clear_signal_action(&self, signal: Signal) -> Option<SignalAction> {
        let previous = self.inner.handlers.remove(signal);
        if previous.is_some() {
            self.inner.stats.dec_handlers();
        }
        previous
    }

    /// Signal statistics snapshot
    pub fn stats(&self) -> SignalStats {
        self.inner.stats.snapshot()
    }

    pub(crate) fn stats_ref(&self) -> &AtomicSignalStats {
        &self.inner.stats
    }
}

impl std::fmt::Debug for RuntimeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeContext")
            .field("id", &self.inner.id)
            .field("section", &self.section_state())
            .field("pending", &self.has_pending())
            .finish()
    }
}

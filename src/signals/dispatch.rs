/*!
 * Safepoint Dispatcher
 * Drains the pending-signal set and runs interpreted handlers
 */

use super::handlers::SignalAction;
use super::types::{Signal, SignalDisposition, SignalResult};
use crate::context::RuntimeContext;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::Ordering;

/// Control outcome the interpreter acts on after a dispatch pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Resume interpreted execution
    Proceed,
    /// Default disposition asked to stop the context
    Stop,
    /// Default disposition asked to terminate the context
    Terminate(Signal),
}

/// Result of one safepoint dispatch pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    /// Signals delivered (handler invoked or ignored)
    pub delivered: usize,
    pub control: Control,
}

impl Dispatch {
    pub(crate) const fn none() -> Self {
        Self {
            delivered: 0,
            control: Control::Proceed,
        }
    }
}

impl RuntimeContext {
    /// Safepoint entry: deliver pending signals to interpreted handlers
    ///
    /// Called by the interpreter wherever its state is consistent enough to
    /// reenter user code. The no-pending case is a single atomic load.
    /// Signals a handler records while running are deferred to the next
    /// pass; a handler error propagates out unmodified, with the signals it
    /// preempted re-recorded so none are dropped.
    pub fn poll_signals(&self) -> SignalResult<Dispatch> {
        if !self.inner.pending.has_pending() {
            return Ok(Dispatch::none());
        }

        let drained = self.inner.pending.drain();
        debug!(
            "Context {}: dispatching {} pending signal(s)",
            self.id(),
            drained.len()
        );

        let mut delivered = 0;
        let mut control = Control::Proceed;

        for (i, signal) in drained.iter().enumerate() {
            let signal = *signal;
            match self.inner.handlers.action(signal) {
                Some(SignalAction::Handler(handler)) => {
                    let depth = self.inner.handler_depth.fetch_add(1, Ordering::Relaxed);
                    let result = handler(self, signal, depth > 0);
                    self.inner.handler_depth.fetch_sub(1, Ordering::Relaxed);

                    if let Err(err) = result {
                        // Undelivered remainder goes back in the set before
                        // the handler's exception propagates
                        for later in &drained[i + 1..] {
                            self.inner.pending.record(*later);
                        }
                        warn!(
                            "Context {}: handler for {} raised: {}",
                            self.id(),
                            signal,
                            err
                        );
                        return Err(err);
                    }
                    delivered += 1;
                    self.inner.stats.inc_delivered();
                }
                Some(SignalAction::Ignore) => {
                    delivered += 1;
                    self.inner.stats.inc_ignored();
                }
                Some(SignalAction::Default) | None => {
                    match signal.default_disposition() {
                        SignalDisposition::Ignore => {
                            delivered += 1;
                            self.inner.stats.inc_ignored();
                        }
                        SignalDisposition::Stop => {
                            delivered += 1;
                            self.inner.stats.inc_delivered();
                            if control == Control::Proceed {
                                control = Control::Stop;
                            }
                        }
                        SignalDisposition::Continue => {
                            delivered += 1;
                            self.inner.stats.inc_delivered();
                        }
                        SignalDisposition::Terminate => {
                            // The context is going away; whatever remains
                            // pending stays recorded for teardown to inspect
                            for later in &drained[i + 1..] {
                                self.inner.pending.record(*later);
                            }
                            debug!(
                                "Context {}: default disposition terminates on {}",
                                self.id(),
                                signal
                            );
                            return Ok(Dispatch {
                                delivered,
                                control: Control::Terminate(signal),
                            });
                        }
                    }
                }
            }
        }

        Ok(Dispatch { delivered, control })
    }
}

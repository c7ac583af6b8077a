/*!
 * Blocking-Section Bracket
 * Marks a context as outside interpreter control during a host call
 */

use crate::context::RuntimeContext;
use crate::signals::{Dispatch, SignalError, SignalResult};
use log::{error, trace, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::Ordering;

/// Blocking-section state of a context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SectionState {
    /// Interpreted or runtime code is executing
    Running = 0,
    /// Control has left for a blocking host call
    Blocked = 1,
}

impl RuntimeContext {
    /// Current blocking-section state
    pub fn section_state(&self) -> SectionState {
        match self.inner.section.load(Ordering::Acquire) {
            0 => SectionState::Running,
            _ => SectionState::Blocked,
        }
    }

    /// Declare that this context is about to block in a host call
    ///
    /// Brackets do not nest: a second enter without an intervening leave is
    /// a bug in the calling wrapper. Debug builds abort on it; release
    /// builds report `BracketMisuse` and leave the state untouched.
    pub fn enter_blocking(&self) -> SignalResult<()> {
        match self.inner.section.compare_exchange(
            SectionState::Running as u8,
            SectionState::Blocked as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                trace!("Context {}: entered blocking section", self.id());
                Ok(())
            }
            Err(_) => {
                debug_assert!(false, "enter_blocking on already-blocked context {}", self.id());
                error!(
                    "Context {}: enter_blocking while already blocked",
                    self.id()
                );
                Err(SignalError::BracketMisuse {
                    context: self.id(),
                    reason: "enter_blocking while already blocked".into(),
                })
            }
        }
    }

    /// Declare that the host call has returned
    ///
    /// Runs one dispatcher pass before handing control back: anything
    /// recorded while the context was blocked is delivered here, no later
    /// than the first safepoint after the bracket.
    pub fn leave_blocking(&self) -> SignalResult<Dispatch> {
        match self.inner.section.compare_exchange(
            SectionState::Blocked as u8,
            SectionState::Running as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                trace!("Context {}: left blocking section", self.id());
                self.poll_signals()
            }
            Err(_) => {
                debug_assert!(false, "leave_blocking on running context {}", self.id());
                error!("Context {}: leave_blocking while not blocked", self.id());
                Err(SignalError::BracketMisuse {
                    context: self.id(),
                    reason: "leave_blocking while not blocked".into(),
                })
            }
        }
    }

    /// Enter the bracket and return a guard that guarantees the leave
    ///
    /// `BlockingSection::exit` is the normal path and reports the dispatch
    /// that ran on leaving; dropping the guard (panic, early return)
    /// restores `Running` without dispatching, so the bracket is released
    /// on every exit path.
    pub fn blocking_section(&self) -> SignalResult<BlockingSection<'_>> {
        self.enter_blocking()?;
        Ok(BlockingSection {
            ctx: self,
            armed: true,
        })
    }
}

/// Guard for one blocking-section bracket
#[must_use = "dropping the guard skips the leave-time signal dispatch"]
pub struct BlockingSection<'a> {
    ctx: &'a RuntimeContext,
    armed: bool,
}

impl BlockingSection<'_> {
    /// Leave the bracket and dispatch signals recorded while blocked
    pub fn exit(mut self) -> SignalResult<Dispatch> {
        self.armed = false;
        self.ctx.leave_blocking()
    }

    /// The bracketed context
    pub fn context(&self) -> &RuntimeContext {
        self.ctx
    }
}

impl Drop for BlockingSection<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        // Unwind path: restore Running but leave delivery to the next
        // safepoint, where handler code is safe to run again
        let restored = self
            .ctx
            .inner
            .section
            .compare_exchange(
                SectionState::Blocked as u8,
                SectionState::Running as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        if restored {
            warn!(
                "Context {}: blocking section released on unwind",
                self.ctx.id()
            );
        }
    }
}

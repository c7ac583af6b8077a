/*!
 * Signal Handler Table
 * Per-context registration of interpreted-level signal handlers
 */

use super::types::{Signal, SignalError, SignalResult};
use crate::context::RuntimeContext;
use crate::core::types::ContextId;
use ahash::HashMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Handler table capacity per context
pub(crate) const MAX_HANDLERS_PER_CONTEXT: usize = 32;

/// Signal handler callback type
///
/// The `bool` argument reports whether this invocation happens while the
/// context is already inside another handler, letting interpreted code
/// bound its own reentry.
pub type HandlerFn = Arc<dyn Fn(&RuntimeContext, Signal, bool) -> SignalResult<()> + Send + Sync>;

/// Registered disposition for one signal
#[derive(Clone)]
pub enum SignalAction {
    /// Apply the signal's default disposition
    Default,
    /// Ignore the signal
    Ignore,
    /// Invoke an interpreted-level callback
    Handler(HandlerFn),
}

impl fmt::Debug for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalAction::Default => write!(f, "Default"),
            SignalAction::Ignore => write!(f, "Ignore"),
            SignalAction::Handler(_) => write!(f, "Handler(..)"),
        }
    }
}

/// Per-context handler table
///
/// Read from safepoints only, never from the asynchronous recording path,
/// so an ordinary read-write lock is safe here.
pub struct HandlerTable {
    context: ContextId,
    actions: RwLock<HashMap<Signal, SignalAction>>,
}

impl HandlerTable {
    pub fn new(context: ContextId) -> Self {
        Self {
            context,
            actions: RwLock::new(HashMap::default()),
        }
    }

    /// Register an action for a signal, returning the previous registration
    pub fn set_action(
        &self,
        signal: Signal,
        action: SignalAction,
    ) -> SignalResult<Option<SignalAction>> {
        if !signal.can_catch() {
            return Err(SignalError::UncatchableSignal(signal));
        }

        let mut actions = self.actions.write();
        if !actions.contains_key(&signal) && actions.len() >= MAX_HANDLERS_PER_CONTEXT {
            return Err(SignalError::TooManyHandlers(self.context));
        }
        Ok(actions.insert(signal, action))
    }

    /// Look up the registered action for a signal
    pub fn action(&self, signal: Signal) -> Option<SignalAction> {
        self.actions.read().get(&signal).cloned()
    }

    /// Remove a registration, returning it
    pub fn remove(&self, signal: Signal) -> Option<SignalAction> {
        self.actions.write().remove(&signal)
    }

    /// Number of registered actions
    pub fn count(&self) -> usize {
        self.actions.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> HandlerTable {
        HandlerTable::new(1)
    }

    #[test]
    fn set_action_returns_previous() {
        let t = table();
        assert!(t.set_action(Signal::SIGINT, SignalAction::Ignore).unwrap().is_none());
        let prev = t.set_action(Signal::SIGINT, SignalAction::Default).unwrap();
        assert!(matches!(prev, Some(SignalAction::Ignore)));
    }

    #[test]
    fn uncatchable_signals_are_rejected() {
        let t = table();
        assert!(matches!(
            t.set_action(Signal::SIGKILL, SignalAction::Ignore),
            Err(SignalError::UncatchableSignal(Signal::SIGKILL))
        ));
        assert!(matches!(
            t.set_action(Signal::SIGSTOP, SignalAction::Ignore),
            Err(SignalError::UncatchableSignal(Signal::SIGSTOP))
        ));
    }

    #[test]
    fn remove_returns_registration() {
        let t = table();
        t.set_action(Signal::SIGUSR1, SignalAction::Ignore).unwrap();
        assert!(t.remove(Signal::SIGUSR1).is_some());
        assert!(t.remove(Signal::SIGUSR1).is_none());
        assert_eq!(t.count(), 0);
    }

    #[test]
    fn handler_capacity_is_enforced() {
        let t = table();
        let mut registered = 0;
        for sig in Signal::ALL {
            if !sig.can_catch() {
                continue;
            }
            if registered == MAX_HANDLERS_PER_CONTEXT {
                assert!(matches!(
                    t.set_action(sig, SignalAction::Ignore),
                    Err(SignalError::TooManyHandlers(1))
                ));
                return;
            }
            t.set_action(sig, SignalAction::Ignore).unwrap();
            registered += 1;
        }
        // 27 catchable signals fit in the 32-slot table; re-registration
        // of an existing entry must still succeed at capacity
        assert!(t.set_action(Signal::SIGINT, SignalAction::Default).is_ok());
    }
}

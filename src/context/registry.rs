/*!
 * Context Registry
 * Tracks live runtime instances for host-side lookup
 */

use super::RuntimeContext;
use crate::core::types::ContextId;
use ahash::RandomState;
use dashmap::DashMap;
use log::{debug, info};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Registry of live contexts
///
/// Lets host-side glue (signal trampolines, embedder callbacks) resolve a
/// context ID back to its handle. The registry holds one reference per
/// live context; contexts themselves never reach through it to touch each
/// other's state.
#[derive(Clone)]
pub struct ContextRegistry {
    contexts: Arc<DashMap<ContextId, RuntimeContext, RandomState>>,
    next_id: Arc<AtomicU64>,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self {
            contexts: Arc::new(DashMap::with_hasher(RandomState::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Create a new runtime instance
    pub fn create(&self) -> RuntimeContext {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let ctx = RuntimeContext::new(id);
        self.contexts.insert(id, ctx.clone());
        info!("Created runtime context {}", id);
        ctx
    }

    /// Look up a live context by ID
    pub fn get(&self, id: ContextId) -> Option<RuntimeContext> {
        self.contexts.get(&id).map(|entry| entry.value().clone())
    }

    /// Remove a context at instance teardown
    pub fn destroy(&self, id: ContextId) -> bool {
        let removed = self.contexts.remove(&id).is_some();
        if removed {
            debug!("Destroyed runtime context {}", id);
        }
        removed
    }

    /// Number of live contexts
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

impl Default for ContextRegistry {
    fn default() -> Self {
        Self::new()
    }
}

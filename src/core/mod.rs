/*!
 * Core Module
 * Shared primitives for the runtime
 */

pub mod types;

pub use types::{ContextId, HostSignal};

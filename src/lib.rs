/*!
 * Kestrel Runtime
 * Signal delivery and blocking-section subsystem for a multi-instance
 * embeddable execution engine
 */

pub mod blocking;
pub mod context;
pub mod core;
pub mod foreign;
pub mod signals;

// Re-exports
pub use blocking::{BlockingSection, SectionState};
pub use context::{ContextRegistry, RuntimeContext};
pub use core::types::{ContextId, HostSignal};
pub use foreign::{fchown, ForeignError, ForeignResult};
pub use signals::{
    deliver_host_signal, translate, Control, Dispatch, HandlerFn, Signal, SignalAction,
    SignalDisposition, SignalError, SignalResult, SignalStats,
};

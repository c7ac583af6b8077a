/*!
 * Signals Module
 * Per-context signal recording, translation, and safepoint dispatch
 */

mod delivery;
mod dispatch;
mod handlers;
mod pending;
mod stats;
pub mod translate;
pub mod types;

// Re-export public API
pub use delivery::deliver_host_signal;
pub use dispatch::{Control, Dispatch};
pub use handlers::{HandlerFn, HandlerTable, SignalAction};
pub use pending::PendingSet;
pub use stats::{AtomicSignalStats, SignalStats};
pub use types::{Signal, SignalDisposition, SignalError, SignalResult, SIGNAL_SLOTS};

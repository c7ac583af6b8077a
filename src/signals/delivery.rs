/*!
 * Host Signal Delivery
 * Trampoline body for the operating system's signal-delivery path
 */

use super::translate;
use crate::context::RuntimeContext;
use crate::core::types::HostSignal;

/// Record a host signal against a context
///
/// This is the entire body of the host trampoline: translate, record,
/// return. It runs in an asynchronous interruption of arbitrary runtime
/// code, so it performs only atomic stores; no allocation, no locking,
/// no logging. Unrecognized host numbers are counted and dropped, never
/// fatal.
///
/// Returns whether the signal was recognized and recorded.
#[inline]
pub fn deliver_host_signal(ctx: &RuntimeContext, host: HostSignal) -> bool {
    match translate::to_internal(host) {
        Some(signal) => {
            ctx.record(signal);
            true
        }
        None => {
            ctx.stats_ref().inc_unknown_dropped();
            false
        }
    }
}

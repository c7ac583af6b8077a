/*!
 * Foreign-Call Module
 * The convention host-OS wrappers follow to cross out of the interpreter
 */

mod chown;
mod errors;

// Re-export public API
pub use chown::fchown;
pub use errors::{ForeignError, ForeignResult};

use crate::context::RuntimeContext;
use log::debug;

/// Run a host call inside a blocking-section bracket
///
/// The shape every wrapper reduces to: enter the bracket, perform the
/// call, leave the bracket (dispatching signals recorded meanwhile), then
/// translate the host's failure code. A handler exception raised during
/// the leave-time dispatch propagates in place of the wrapper's result;
/// the host failure, if any, is translated only after the bracket is
/// fully released.
pub(crate) fn blocking_host_call<T>(
    ctx: &RuntimeContext,
    op: &'static str,
    call: impl FnOnce() -> Result<T, i32>,
) -> ForeignResult<T> {
    let section = ctx.blocking_section()?;
    let outcome = call();
    section.exit()?;

    outcome.map_err(|errno| {
        debug!("Context {}: {} failed with errno {}", ctx.id(), op, errno);
        ForeignError::host(op, errno)
    })
}

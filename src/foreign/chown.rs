/*!
 * Ownership-Change Wrapper
 * File-ownership syscall binding illustrating the foreign-call convention
 */

use super::errors::{ForeignError, ForeignResult};
use crate::context::RuntimeContext;

/// Change the owner and group of an open file
///
/// Standard wrapper shape: validate arguments, bracket the host call in a
/// blocking section, translate failure codes into a catchable error
/// carrying the operation name. The bracket is released on every path,
/// including failure.
#[cfg(all(unix, feature = "os-chown"))]
pub fn fchown(ctx: &RuntimeContext, fd: i32, uid: u32, gid: u32) -> ForeignResult<()> {
    if fd < 0 {
        return Err(ForeignError::invalid_argument(
            "fchown: negative file descriptor",
        ));
    }

    super::blocking_host_call(ctx, "fchown", || {
        let rc = unsafe { libc::fchown(fd, uid as libc::uid_t, gid as libc::gid_t) };
        if rc == -1 {
            Err(std::io::Error::last_os_error()
                .raw_os_error()
                .unwrap_or(libc::EIO))
        } else {
            Ok(())
        }
    })
}

/// Ownership-change stub for builds without the host capability
///
/// Fails deterministically without touching the blocking-section state or
/// attempting any host call; selected at build time, not per call.
#[cfg(not(all(unix, feature = "os-chown")))]
pub fn fchown(_ctx: &RuntimeContext, _fd: i32, _uid: u32, _gid: u32) -> ForeignResult<()> {
    Err(ForeignError::not_supported("fchown"))
}

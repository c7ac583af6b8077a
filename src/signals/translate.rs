/*!
 * Signal Number Translator
 * Bidirectional mapping between host signal numbers and internal identifiers
 */

use super::types::Signal;
use crate::core::types::HostSignal;

/// Host-to-internal translation table
///
/// Built from libc constants so the internal numbering stays identical
/// across hosts while the host side follows each platform's values.
/// Immutable and shared read-only by every context.
#[cfg(unix)]
const TABLE: &[(HostSignal, Signal)] = &[
    (libc::SIGHUP, Signal::SIGHUP),
    (libc::SIGINT, Signal::SIGINT),
    (libc::SIGQUIT, Signal::SIGQUIT),
    (libc::SIGILL, Signal::SIGILL),
    (libc::SIGTRAP, Signal::SIGTRAP),
    (libc::SIGABRT, Signal::SIGABRT),
    (libc::SIGBUS, Signal::SIGBUS),
    (libc::SIGFPE, Signal::SIGFPE),
    (libc::SIGKILL, Signal::SIGKILL),
    (libc::SIGUSR1, Signal::SIGUSR1),
    (libc::SIGSEGV, Signal::SIGSEGV),
    (libc::SIGUSR2, Signal::SIGUSR2),
    (libc::SIGPIPE, Signal::SIGPIPE),
    (libc::SIGALRM, Signal::SIGALRM),
    (libc::SIGTERM, Signal::SIGTERM),
    (libc::SIGCHLD, Signal::SIGCHLD),
    (libc::SIGCONT, Signal::SIGCONT),
    (libc::SIGSTOP, Signal::SIGSTOP),
    (libc::SIGTSTP, Signal::SIGTSTP),
    (libc::SIGTTIN, Signal::SIGTTIN),
    (libc::SIGTTOU, Signal::SIGTTOU),
    (libc::SIGURG, Signal::SIGURG),
    (libc::SIGXCPU, Signal::SIGXCPU),
    (libc::SIGXFSZ, Signal::SIGXFSZ),
    (libc::SIGVTALRM, Signal::SIGVTALRM),
    (libc::SIGPROF, Signal::SIGPROF),
    (libc::SIGWINCH, Signal::SIGWINCH),
    (libc::SIGIO, Signal::SIGIO),
    (libc::SIGSYS, Signal::SIGSYS),
];

#[cfg(not(unix))]
const TABLE: &[(HostSignal, Signal)] = &[];

/// Translate a host signal number to its internal identifier
///
/// Returns `None` for numbers the host defines but the runtime does not
/// recognize. Allocation-free and panic-free; safe from the host
/// signal-delivery path.
#[inline]
pub fn to_internal(host: HostSignal) -> Option<Signal> {
    // Table is small; a linear scan stays allocation-free
    TABLE.iter().find(|(h, _)| *h == host).map(|(_, s)| *s)
}

/// Translate an internal identifier to the host signal number
#[inline]
pub fn to_host(signal: Signal) -> Option<HostSignal> {
    TABLE.iter().find(|(_, s)| *s == signal).map(|(h, _)| *h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn round_trip_every_recognized_host_signal() {
        for (host, _) in TABLE {
            let internal = to_internal(*host).unwrap();
            assert_eq!(to_host(internal), Some(*host));
        }
    }

    #[test]
    #[cfg(unix)]
    fn internal_numbering_is_host_independent() {
        // SIGCHLD is 17 on Linux and 20 on BSD; internal id is fixed
        assert_eq!(to_internal(libc::SIGCHLD), Some(Signal::SIGCHLD));
        assert_eq!(Signal::SIGCHLD.number(), 16);
    }

    #[test]
    fn unknown_host_number_yields_none() {
        assert_eq!(to_internal(0), None);
        assert_eq!(to_internal(-1), None);
        assert_eq!(to_internal(4096), None);
    }
}

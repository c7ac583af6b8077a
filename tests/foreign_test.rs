/*!
 * Foreign-Call Wrapper Tests
 * The ownership-change wrapper as the representative convention
 */

use kestrel_runtime::{fchown, ContextRegistry, ForeignError, SectionState};

#[test]
#[cfg(all(unix, feature = "os-chown"))]
fn fchown_succeeds_on_owned_file() {
    use std::os::unix::io::AsRawFd;

    let registry = ContextRegistry::new();
    let ctx = registry.create();
    let file = tempfile::tempfile().unwrap();

    let uid = unsafe { libc::geteuid() };
    let gid = unsafe { libc::getegid() };
    fchown(&ctx, file.as_raw_fd(), uid, gid).unwrap();
    assert_eq!(ctx.section_state(), SectionState::Running);
}

#[test]
#[cfg(all(unix, feature = "os-chown"))]
fn failing_host_call_raises_with_op_name_and_code() {
    let registry = ContextRegistry::new();
    let ctx = registry.create();

    let err = fchown(&ctx, i32::MAX, 0, 0).unwrap_err();
    match err {
        ForeignError::Host { op, errno } => {
            assert_eq!(op, "fchown");
            assert_eq!(errno, libc::EBADF);
        }
        other => panic!("expected host error, got {other:?}"),
    }

    // Blocking-section state returns to RUNNING regardless of the failure
    assert_eq!(ctx.section_state(), SectionState::Running);
}

#[test]
#[cfg(all(unix, feature = "os-chown"))]
fn wrapper_dispatches_signals_recorded_during_the_call() {
    use kestrel_runtime::{Signal, SignalAction};
    use std::os::unix::io::AsRawFd;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let registry = ContextRegistry::new();
    let ctx = registry.create();
    let hits = Arc::new(AtomicUsize::new(0));

    let observed = hits.clone();
    ctx.set_signal_action(
        Signal::SIGALRM,
        SignalAction::Handler(Arc::new(move |_, _, _| {
            observed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })),
    )
    .unwrap();

    // Signal arrives before the wrapper's bracket closes
    ctx.record(Signal::SIGALRM);

    let file = tempfile::tempfile().unwrap();
    let uid = unsafe { libc::geteuid() };
    let gid = unsafe { libc::getegid() };
    fchown(&ctx, file.as_raw_fd(), uid, gid).unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(!ctx.has_pending());
}

#[test]
#[cfg(not(all(unix, feature = "os-chown")))]
fn absent_capability_fails_without_touching_the_bracket() {
    let registry = ContextRegistry::new();
    let ctx = registry.create();

    let err = fchown(&ctx, 3, 0, 0).unwrap_err();
    assert_eq!(err, ForeignError::NotSupported("fchown".into()));
    assert_eq!(ctx.section_state(), SectionState::Running);
    assert!(!ctx.has_pending());
}

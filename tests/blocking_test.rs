/*!
 * Blocking Section Tests
 * Bracket discipline and delivery of signals recorded while blocked
 */

use kestrel_runtime::{ContextRegistry, SectionState, Signal, SignalAction};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[test]
fn signal_recorded_while_blocked_is_dispatched_on_leave() {
    let registry = ContextRegistry::new();
    let ctx = registry.create();
    let hits = Arc::new(AtomicUsize::new(0));

    let observed = hits.clone();
    ctx.set_signal_action(
        Signal::SIGVTALRM,
        SignalAction::Handler(Arc::new(move |_, _, _| {
            observed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })),
    )
    .unwrap();

    // Context enters a blocking foreign call; internal signal 5 arrives
    ctx.enter_blocking().unwrap();
    assert_eq!(ctx.section_state(), SectionState::Blocked);
    ctx.record(Signal::SIGVTALRM);

    // leave_blocking itself is the first safepoint after the bracket
    let dispatch = ctx.leave_blocking().unwrap();
    assert_eq!(dispatch.delivered, 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(!ctx.has_pending());
}

#[test]
fn other_threads_can_record_into_a_blocked_context() {
    let registry = ContextRegistry::new();
    let ctx = registry.create();

    ctx.enter_blocking().unwrap();

    let writer = ctx.clone();
    thread::spawn(move || {
        // The host signal path keeps writing while the context is blocked
        writer.record(Signal::SIGCHLD);
        writer.record(Signal::SIGWINCH);
    })
    .join()
    .unwrap();

    assert!(ctx.has_pending());
    let dispatch = ctx.leave_blocking().unwrap();
    // Both default-ignored, both consumed
    assert_eq!(dispatch.delivered, 2);
    assert!(!ctx.has_pending());
}

#[test]
#[cfg(not(debug_assertions))]
fn nested_brackets_are_flagged() {
    use kestrel_runtime::SignalError;

    let registry = ContextRegistry::new();
    let ctx = registry.create();

    ctx.enter_blocking().unwrap();
    assert!(matches!(
        ctx.enter_blocking(),
        Err(SignalError::BracketMisuse { .. })
    ));
    ctx.leave_blocking().unwrap();

    assert!(matches!(
        ctx.leave_blocking(),
        Err(SignalError::BracketMisuse { .. })
    ));
}

#[test]
fn brackets_on_one_context_leave_others_untouched() {
    let registry = ContextRegistry::new();
    let a = registry.create();
    let b = registry.create();

    a.enter_blocking().unwrap();
    assert_eq!(a.section_state(), SectionState::Blocked);
    assert_eq!(b.section_state(), SectionState::Running);

    b.enter_blocking().unwrap();
    b.leave_blocking().unwrap();
    assert_eq!(a.section_state(), SectionState::Blocked);

    a.leave_blocking().unwrap();
    assert_eq!(a.section_state(), SectionState::Running);
}

#[test]
fn guard_releases_on_panic_path() {
    let registry = ContextRegistry::new();
    let ctx = registry.create();

    let inner = ctx.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let _section = inner.blocking_section().unwrap();
        panic!("host call blew up");
    }));
    assert!(result.is_err());

    // The bracket was released on unwind; a fresh one works
    assert_eq!(ctx.section_state(), SectionState::Running);
    ctx.enter_blocking().unwrap();
    ctx.leave_blocking().unwrap();
}

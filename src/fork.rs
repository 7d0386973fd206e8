//! A minimal fork/join helper: run exactly two closures concurrently, wait for both.

use std::{panic::resume_unwind, thread};

/// Runs `a` and `b` on two dedicated threads and blocks until both have completed.
///
/// Neither closure starts executing before both threads exist: the pair is released through a
/// zero-capacity channel rendezvous, so everything the caller did before `join2` is visible to
/// both closures from their first instruction.
///
/// If either closure panics, the panic is re-raised on the calling thread, but only after *both*
/// threads have been joined. If both panic, `b`'s payload is the one re-raised.
pub(crate) fn join2<RA, RB, A, B>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    let (start_tx, start_rx) = crossbeam_channel::bounded::<()>(0);
    thread::scope(|s| {
        let start_a = start_rx.clone();
        let task_a = s.spawn(move || {
            let _ = start_a.recv();
            a()
        });
        let task_b = s.spawn(move || {
            let _ = start_rx.recv();
            b()
        });

        // Each send rendezvouses with one `recv`, releasing one task.
        let _ = start_tx.send(());
        let _ = start_tx.send(());

        let result_a = task_a.join();
        let result_b = task_b.join();
        match (result_a, result_b) {
            (Ok(ra), Ok(rb)) => (ra, rb),
            (_, Err(payload)) | (Err(payload), _) => resume_unwind(payload),
        }
    })
}

#[cfg(test)]
mod tests {
    use std::{
        panic::{catch_unwind, AssertUnwindSafe},
        sync::atomic::{AtomicBool, Ordering},
    };

    use super::*;

    fn silent_panic(payload: String) {
        resume_unwind(Box::new(payload));
    }

    #[test]
    fn returns_both_results() {
        let (a, b) = join2(|| 1, || "two");
        assert_eq!(a, 1);
        assert_eq!(b, "two");
    }

    #[test]
    fn closures_run_concurrently() {
        // Each closure can only finish if the other one is running at the same time.
        let (tx, rx) = crossbeam_channel::bounded::<()>(0);
        let ((), ()) = join2(
            move || tx.send(()).unwrap(),
            move || rx.recv().unwrap(),
        );
    }

    #[test]
    fn panic_propagates_after_both_tasks_joined() {
        let finished = AtomicBool::new(false);
        let payload = catch_unwind(AssertUnwindSafe(|| {
            join2(
                || finished.store(true, Ordering::Relaxed),
                || silent_panic("boom".into()),
            )
        }))
        .unwrap_err();
        assert_eq!(*payload.downcast::<String>().unwrap(), "boom");
        assert!(finished.load(Ordering::Relaxed));
    }

    #[test]
    fn second_closures_payload_wins_when_both_panic() {
        let payload = catch_unwind(AssertUnwindSafe(|| {
            join2(
                || silent_panic("first".into()),
                || silent_panic("second".into()),
            )
        }))
        .unwrap_err();
        assert_eq!(*payload.downcast::<String>().unwrap(), "second");
    }
}

//! Scope-exit helpers used for failure-safe cleanup.

/// Drop guard returned by [`cleanup`].
#[must_use = "`Cleanup` should be assigned to a variable, or it will run immediately"]
pub(crate) struct Cleanup<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Drop for Cleanup<F> {
    fn drop(&mut self) {
        if let Some(cb) = self.0.take() {
            cb();
        }
    }
}

/// Returns a guard that runs `cb` when it goes out of scope, on normal and unwinding exits alike.
pub(crate) fn cleanup<F: FnOnce()>(cb: F) -> Cleanup<F> {
    Cleanup(Some(cb))
}

//! The coordinator that ties the signal store, the render loop and the unit of work together.

use std::{sync::Arc, time::Duration};

use crate::{
    fork,
    frames::FrameSet,
    guard::cleanup,
    region::{ConsoleRegion, OutputRegion},
    render::{self, FRAME_INTERVAL},
    store::{MemoryStore, SignalKey, SignalStore, StoreError},
};

/// Runs units of work behind an animated terminal spinner.
///
/// A `Spinner` is a bundle of configuration: a [`FrameSet`], a redraw interval and a
/// [`SignalStore`]. Every call to [`Spinner::run`] is an independent invocation with its own
/// freshly generated [`SignalKey`], so a single `Spinner` may be used from several threads at
/// once without the invocations interfering with each other.
///
/// Most callers don't need to configure anything and can use the [`WithSpinner`] mixin instead.
pub struct Spinner {
    store: Arc<dyn SignalStore>,
    frames: FrameSet,
    interval: Duration,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    /// Creates a spinner with the braille frame set, a 100 ms redraw interval and an in-memory
    /// signal store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            frames: FrameSet::default(),
            interval: FRAME_INTERVAL,
        }
    }

    /// Replaces the frame set used for the animation.
    pub fn frames(self, frames: FrameSet) -> Self {
        Self { frames, ..self }
    }

    /// Sets the delay between redraws.
    ///
    /// The render loop re-checks the stop signal once per redraw, so this is also the worst-case
    /// latency between the work finishing and the spinner disappearing.
    pub fn interval(self, interval: Duration) -> Self {
        Self { interval, ..self }
    }

    /// Replaces the signal store that coordinates the render loop and the work.
    ///
    /// The default in-memory store is sufficient as long as both tasks of an invocation run
    /// inside the same process. A store with wider visibility only becomes necessary when the
    /// tasks stop sharing memory.
    pub fn store(self, store: Arc<dyn SignalStore>) -> Self {
        Self { store, ..self }
    }

    /// Runs `work` while drawing the spinner on stderr, and returns `work`'s value verbatim.
    ///
    /// When stderr is not connected to a terminal, the animation is skipped and `work` runs
    /// directly on the calling thread; rendering is best-effort and never affects the work's
    /// result.
    ///
    /// # Errors
    ///
    /// Fails if the signal store rejects the initial write; in that case `work` has not been
    /// started. A panic inside `work` is re-raised on the calling thread after the spinner has
    /// been torn down.
    pub fn run<T, F>(&self, label: &str, work: F) -> Result<T, StoreError>
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        match ConsoleRegion::acquire() {
            Some(region) => self.run_with(region, label, work),
            None => {
                log::debug!("stderr is not a terminal, running '{label}' without a spinner");
                Ok(work())
            }
        }
    }

    /// Like [`Spinner::run`], but draws into a caller-supplied [`OutputRegion`].
    ///
    /// The region is owned by the render loop until `work` completes; it is overwritten once per
    /// frame and cleared exactly once at the end.
    pub fn run_with<R, T, F>(&self, region: R, label: &str, work: F) -> Result<T, StoreError>
    where
        R: OutputRegion,
        F: FnOnce() -> T + Send,
        T: Send,
    {
        let key = SignalKey::generate();
        let store = &*self.store;

        // The running state must land in the store before either task starts, or the render
        // loop's first poll could observe an absent key and exit without drawing. A failure here
        // is fatal: a spinner whose stop signal cannot be observed must not be started.
        store.put(key.as_str(), true)?;
        log::trace!("spinner invocation '{key}' starting");

        let _cleanup = cleanup(|| {
            if let Err(err) = store.forget(key.as_str()) {
                log::warn!("failed to remove spinner signal '{key}': {err}");
            }
            log::trace!("spinner invocation '{key}' finished");
        });

        let ((), value) = fork::join2(
            || render::animate(store, &key, region, label, &self.frames, self.interval),
            || {
                // The stop signal is written on normal return and during unwind alike; this
                // guard is the only writer of the stopped state.
                let _stop = cleanup(|| {
                    if let Err(err) = store.put(key.as_str(), false) {
                        log::warn!("failed to write stop signal for spinner '{key}': {err}");
                    }
                });
                work()
            },
        );

        Ok(value)
    }
}

/// Mixin that adds spinner-wrapped execution to any component.
///
/// All methods are provided, so opting in takes one line:
///
/// ```
/// use twirl::WithSpinner;
///
/// struct Importer;
/// impl WithSpinner for Importer {}
///
/// let answer = Importer.with_spinner("crunching numbers", || 40 + 2);
/// assert_eq!(answer, 42);
/// ```
pub trait WithSpinner {
    /// Runs `work` behind a spinner labelled `label` and returns its value.
    fn with_spinner<T, F>(&self, label: &str, work: F) -> T
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        self.with_spinner_frames(label, FrameSet::default(), work)
    }

    /// Like [`WithSpinner::with_spinner`], with a custom frame set.
    fn with_spinner_frames<T, F>(&self, label: &str, frames: FrameSet, work: F) -> T
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        match Spinner::new().frames(frames).run(label, work) {
            Ok(value) => value,
            // `Spinner::new` uses the in-memory store, which cannot fail.
            Err(_) => unreachable!("in-memory signal store reported an error"),
        }
    }
}

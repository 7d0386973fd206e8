//! The render half of a spinner invocation.

use std::{thread, time::Duration};

use crate::{
    frames::FrameSet,
    region::OutputRegion,
    store::{SignalKey, SignalStore},
};

/// Default delay between frame redraws.
///
/// The delay doubles as the stop-signal polling granularity, so it is also the worst-case
/// latency between the work finishing and the spinner disappearing.
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Draws `frames` into `region` until the signal at `key` no longer reads as running.
///
/// The signal is polled once per frame. An absent slot reads the same as a stopped one: the
/// coordinator stores the running state before this loop starts, so an absent key means the
/// invocation is already being torn down and nothing must be drawn. The region is cleared
/// exactly once on exit, whether or not anything was drawn.
pub(crate) fn animate<R: OutputRegion>(
    store: &dyn SignalStore,
    key: &SignalKey,
    mut region: R,
    label: &str,
    frames: &FrameSet,
    interval: Duration,
) {
    log::trace!("render loop for '{key}' starting");
    let mut index = 0;
    while spinning(store, key) {
        region.overwrite(&format!("{} {label}", frames.frame(index)));
        thread::sleep(interval);
        index = index.wrapping_add(1);
    }
    region.clear();
    log::trace!("render loop for '{key}' exiting");
}

fn spinning(store: &dyn SignalStore, key: &SignalKey) -> bool {
    match store.get(key.as_str()) {
        Ok(Some(running)) => running,
        // Removal mid-read must never be observable as "running".
        Ok(None) => false,
        Err(err) => {
            log::warn!("stopping spinner '{key}': signal store read failed: {err}");
            false
        }
    }
}

//! Run a unit of work while an animated spinner twirls next to it in the terminal.
//!
//! The work and the animation run as two concurrently scheduled tasks that are joined before the
//! call returns; the work itself never learns that anything is being drawn. The two tasks
//! coordinate through a shared [`SignalStore`]: each invocation generates a unique [`SignalKey`],
//! stores a "running" flag under it *before* either task starts, and the work's completion flips
//! the flag to stop the render loop. The render loop polls the flag once per frame, so the
//! spinner disappears at most one frame interval after the work finishes, and a final clear is
//! guaranteed even when the work panics.
//!
//! # Usage
//!
//! Opt a component into the [`WithSpinner`] mixin and wrap any closure:
//!
//! ```
//! use twirl::WithSpinner;
//!
//! struct Importer;
//! impl WithSpinner for Importer {}
//!
//! let records = Importer.with_spinner("importing records", || {
//!     // something slow
//!     1234
//! });
//! assert_eq!(records, 1234);
//! ```
//!
//! Failures come back untouched, with the spinner torn down first:
//!
//! ```
//! use twirl::WithSpinner;
//!
//! struct Importer;
//! impl WithSpinner for Importer {}
//!
//! let outcome: Result<(), String> =
//!     Importer.with_spinner("importing records", || Err("no records".to_string()));
//! assert_eq!(outcome, Err("no records".to_string()));
//! ```
//!
//! For custom frames, a different redraw interval, or an injected signal store, build a
//! [`Spinner`] directly:
//!
//! ```
//! use std::time::Duration;
//! use twirl::{FrameSet, Spinner};
//!
//! let spinner = Spinner::new()
//!     .frames(FrameSet::line())
//!     .interval(Duration::from_millis(50));
//! let sum = spinner.run("adding", || (1..=10).sum::<u32>()).unwrap();
//! assert_eq!(sum, 55);
//! ```
//!
//! # Rendering
//!
//! The spinner redraws a single line of stderr in place and clears it exactly once when the work
//! completes. When stderr is not connected to a terminal, rendering is skipped entirely and the
//! work runs as if called directly; the animation is best-effort and never affects the work's
//! result. Other render targets can implement [`OutputRegion`] and be passed to
//! [`Spinner::run_with`].

mod fork;
mod frames;
mod guard;
mod region;
mod render;
mod spinner;
mod store;

pub use frames::FrameSet;
pub use region::{ConsoleRegion, OutputRegion};
pub use spinner::{Spinner, WithSpinner};
pub use store::{MemoryStore, SignalKey, SignalStore, StoreError};

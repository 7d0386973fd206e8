//! Terminal output regions.

use std::io::{self, IsTerminal, Write};

/// A terminal area that can be redrawn in place.
///
/// The render loop owns the region for the duration of one invocation: it overwrites it once per
/// frame and clears it exactly once when the spinner stops. Implementations that draw somewhere
/// other than a real terminal can be passed to [`Spinner::run_with`][crate::Spinner::run_with];
/// the crate's own tests use a region that records calls instead of drawing.
pub trait OutputRegion: Send {
    /// Replaces the region's contents with `text`.
    fn overwrite(&mut self, text: &str);

    /// Erases the region. Called exactly once, after the final [`overwrite`][Self::overwrite].
    fn clear(&mut self);
}

/// An [`OutputRegion`] that redraws the current line of stderr.
///
/// Rendering goes to stderr so the spinner never mixes with data the work writes to stdout.
/// Write errors are ignored; rendering is best-effort.
#[derive(Debug)]
pub struct ConsoleRegion {
    stderr: io::Stderr,
}

impl ConsoleRegion {
    /// Acquires the stderr line, or `None` when stderr is not connected to a terminal.
    pub fn acquire() -> Option<Self> {
        let stderr = io::stderr();
        if stderr.is_terminal() {
            Some(Self { stderr })
        } else {
            None
        }
    }
}

impl OutputRegion for ConsoleRegion {
    fn overwrite(&mut self, text: &str) {
        // \r returns to the start of the line, CSI 2K erases it.
        let _ = write!(self.stderr, "\r\x1b[2K{text}");
        let _ = self.stderr.flush();
    }

    fn clear(&mut self) {
        let _ = write!(self.stderr, "\r\x1b[2K");
        let _ = self.stderr.flush();
    }
}

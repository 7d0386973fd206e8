//! Animation frame sets.

/// An ordered, non-empty sequence of frames cycled by the render loop.
///
/// The order is significant (it defines the animation's direction) and the set is immutable for
/// the duration of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    frames: Vec<String>,
}

impl FrameSet {
    /// The braille dot spinner. This is the default frame set.
    pub fn dots() -> Self {
        Self::preset(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
    }

    /// The classic four-frame line spinner.
    pub fn line() -> Self {
        Self::preset(&["|", "/", "-", "\\"])
    }

    /// An arrow rotating counterclockwise.
    pub fn arrow() -> Self {
        Self::preset(&["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"])
    }

    /// A bar bouncing between its lowest and highest fill.
    pub fn bounce() -> Self {
        Self::preset(&[
            "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂",
        ])
    }

    /// Builds a frame set from caller-supplied frames, in iteration order.
    ///
    /// An empty iterator yields the default set instead, so a `FrameSet` is never empty.
    pub fn custom<I>(frames: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        if frames.is_empty() {
            Self::default()
        } else {
            Self { frames }
        }
    }

    /// Returns the frames in animation order.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Returns the frame drawn at draw number `index`, wrapping around the set.
    pub(crate) fn frame(&self, index: usize) -> &str {
        &self.frames[index % self.frames.len()]
    }

    fn preset(frames: &[&str]) -> Self {
        Self {
            frames: frames.iter().map(|frame| frame.to_string()).collect(),
        }
    }
}

impl Default for FrameSet {
    fn default() -> Self {
        Self::dots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_braille_dots() {
        assert_eq!(FrameSet::default(), FrameSet::dots());
    }

    #[test]
    fn presets_are_non_empty() {
        for preset in [
            FrameSet::dots(),
            FrameSet::line(),
            FrameSet::arrow(),
            FrameSet::bounce(),
        ] {
            assert!(!preset.frames().is_empty());
            assert!(preset.frames().iter().all(|frame| !frame.is_empty()));
        }
    }

    #[test]
    fn custom_preserves_order() {
        let frames = FrameSet::custom(["A", "B", "C"]);
        assert_eq!(frames.frames(), ["A", "B", "C"]);
    }

    #[test]
    fn empty_custom_falls_back_to_the_default() {
        let frames = FrameSet::custom(Vec::<String>::new());
        assert_eq!(frames, FrameSet::default());
    }

    #[test]
    fn frame_lookup_wraps_around() {
        let frames = FrameSet::custom(["A", "B", "C"]);
        assert_eq!(frames.frame(0), "A");
        assert_eq!(frames.frame(2), "C");
        assert_eq!(frames.frame(3), "A");
    }
}

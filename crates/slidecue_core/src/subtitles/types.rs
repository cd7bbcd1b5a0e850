//! Parser output types.
//!
//! Timing values are `f64` seconds, the canonical unit throughout the
//! crate. A cue is a parsed record only; it becomes a slide (and gains
//! an id) when a timeline is built from it.

/// One timed caption record parsed from a subtitle file.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    /// Start time in seconds.
    pub start_seconds: f64,
    /// End time in seconds.
    pub end_seconds: f64,
    /// Caption text; multiple lines are joined with `\n` and trimmed.
    pub text: String,
    /// Index into the external image list, `None` when no list is loaded.
    pub image_index: Option<usize>,
}

impl SubtitleCue {
    /// Create a cue without an image binding.
    pub fn new(start_seconds: f64, end_seconds: f64, text: impl Into<String>) -> Self {
        Self {
            start_seconds,
            end_seconds,
            text: text.into(),
            image_index: None,
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }
}

//! The editing session.
//!
//! A [`Session`] owns the timeline, the timing-mode tag, and the
//! at-most-one outstanding [`PendingShift`]. Every operation runs to
//! completion on the caller's thread; the playback clock and the
//! image list are external collaborators reached through the
//! [`Transport`] and [`ImageList`] traits.
//!
//! All mutations are all-or-nothing: invalid input or a rejected
//! shift leaves the timeline exactly as it was, and any mutation
//! unrelated to an outstanding proposal discards that proposal.

use serde::{Deserialize, Serialize};

use crate::config::TimingSettings;
use crate::subtitles::{self, ParseError};
use crate::timecode;
use crate::timeline::autoshift::{self, PendingShift, ShiftRejected};
use crate::timeline::{Boundary, SlideId, Timeline};

/// Provenance of the current timeline. Informational only; it frames
/// the UI and export labeling, never the timeline semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingMode {
    /// Slides entered by hand while listening to the narration.
    #[default]
    Manual,
    /// Slides imported from a subtitle file.
    Subtitle,
}

impl TimingMode {
    /// Display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Subtitle => "subtitle",
        }
    }
}

/// External playback clock, sampled each tick. Playback itself
/// (play/pause, seeking, volume) is owned by the caller.
pub trait Transport {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    /// Total media duration in seconds.
    fn duration(&self) -> f64;
}

/// External image list; only its length matters to the core.
pub trait ImageList {
    /// Number of loaded images.
    fn count(&self) -> usize;
}

impl ImageList for usize {
    fn count(&self) -> usize {
        *self
    }
}

/// Outcome of a boundary edit.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The field was replaced directly.
    Applied,
    /// An auto-shift proposal is outstanding; apply or cancel it.
    Proposed,
    /// The input did not resolve to a usable time; nothing changed.
    Ignored,
    /// The auto-shift engine refused the edit; nothing changed.
    Rejected(ShiftRejected),
}

/// One editing session: the timeline plus its auxiliary state.
#[derive(Debug)]
pub struct Session {
    timeline: Timeline,
    timing_mode: TimingMode,
    pending: Option<PendingShift>,
    auto_shift: bool,
    default_span_seconds: f64,
}

impl Session {
    /// Create an empty session with default timing settings.
    pub fn new() -> Self {
        Self::with_settings(&TimingSettings::default())
    }

    /// Create an empty session configured from settings.
    pub fn with_settings(settings: &TimingSettings) -> Self {
        Self {
            timeline: Timeline::new(),
            timing_mode: TimingMode::Manual,
            pending: None,
            auto_shift: settings.auto_shift,
            default_span_seconds: settings.default_slide_span_seconds,
        }
    }

    /// The live timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Provenance of the current timeline.
    pub fn timing_mode(&self) -> TimingMode {
        self.timing_mode
    }

    /// The outstanding proposal, if any.
    pub fn pending(&self) -> Option<&PendingShift> {
        self.pending.as_ref()
    }

    /// Whether end-boundary edits cascade to later slides.
    pub fn auto_shift(&self) -> bool {
        self.auto_shift
    }

    /// Enable or disable auto-shift for subsequent edits.
    pub fn set_auto_shift(&mut self, enabled: bool) {
        self.auto_shift = enabled;
    }

    /// Resolve the active slide for the transport's current position.
    ///
    /// Safe to call at arbitrary sampling frequency; reads only.
    pub fn tick(&self, transport: &dyn Transport) -> Option<usize> {
        self.timeline.active_slide_at(transport.current_time())
    }

    /// Replace the timeline wholesale from subtitle text.
    ///
    /// On success the mode becomes [`TimingMode::Subtitle`] and any
    /// pending shift is discarded. A failed import leaves the session
    /// untouched.
    pub fn import_subtitles(
        &mut self,
        content: &str,
        images: &dyn ImageList,
    ) -> Result<usize, ParseError> {
        let cues = subtitles::parse_srt(content, images.count())?;
        let count = cues.len();
        self.timeline = Timeline::from_cues(cues);
        self.timing_mode = TimingMode::Subtitle;
        self.pending = None;
        tracing::info!("imported {} slides from subtitle text", count);
        Ok(count)
    }

    /// Create the default manual timeline: one slide per image.
    ///
    /// Only acts when the timeline is empty and the mode is manual
    /// (images arriving after timing exists must not clobber it).
    /// Returns whether slides were created.
    pub fn load_default_slides(&mut self, images: &dyn ImageList) -> bool {
        if !self.timeline.is_empty() || self.timing_mode != TimingMode::Manual {
            return false;
        }
        self.timeline = Timeline::default_slides(images.count(), self.default_span_seconds);
        self.pending = None;
        !self.timeline.is_empty()
    }

    /// Insert a slide starting at `at_seconds` with the default span
    /// and caption. Switches the session to manual mode.
    pub fn add_slide_at(&mut self, at_seconds: f64, images: &dyn ImageList) -> SlideId {
        let ordinal = self.timeline.len();
        let image_index = match images.count() {
            0 => None,
            count => Some(ordinal.min(count - 1)),
        };
        let id = self.timeline.insert_at(
            at_seconds,
            format!("Slide {}", ordinal + 1),
            image_index,
            self.default_span_seconds,
        );
        self.timing_mode = TimingMode::Manual;
        self.pending = None;
        id
    }

    /// Insert a slide at the transport's current position.
    pub fn add_slide_at_current_time(
        &mut self,
        transport: &dyn Transport,
        images: &dyn ImageList,
    ) -> SlideId {
        self.add_slide_at(transport.current_time(), images)
    }

    /// Remove a slide. Neighbors are untouched; any pending shift is
    /// discarded.
    pub fn remove_slide(&mut self, id: SlideId) -> bool {
        self.pending = None;
        self.timeline.remove(id)
    }

    /// Replace a slide's caption.
    pub fn edit_caption(&mut self, id: SlideId, text: impl Into<String>) -> bool {
        self.pending = None;
        self.timeline.update_text(id, text)
    }

    /// Edit one boundary of a slide from free-text input.
    ///
    /// The text is parsed by the timecode module; unparseable or
    /// negative values are ignored. End edits with auto-shift enabled
    /// route through the engine and leave a proposal pending instead
    /// of mutating; everything else replaces the field directly.
    pub fn edit_boundary(&mut self, id: SlideId, boundary: Boundary, raw: &str) -> EditOutcome {
        let seconds = match timecode::parse_timestamp(raw) {
            Ok(s) if s >= 0.0 => s,
            _ => return EditOutcome::Ignored,
        };

        // Any new edit supersedes an outstanding proposal.
        self.pending = None;

        if boundary == Boundary::End && self.auto_shift {
            match autoshift::propose(&self.timeline, id, seconds) {
                Ok(pending) => {
                    self.pending = Some(pending);
                    EditOutcome::Proposed
                }
                Err(rejected) => EditOutcome::Rejected(rejected),
            }
        } else if self.timeline.set_boundary(id, boundary, seconds) {
            EditOutcome::Applied
        } else {
            EditOutcome::Ignored
        }
    }

    /// Nudge a slide's end time by a fixed step (see
    /// [`autoshift::QUICK_ADJUST_STEPS`]).
    pub fn quick_adjust(&mut self, id: SlideId, delta_seconds: f64) -> EditOutcome {
        self.pending = None;

        if self.auto_shift {
            return match autoshift::quick_adjust(&self.timeline, id, delta_seconds) {
                Ok(pending) => {
                    self.pending = Some(pending);
                    EditOutcome::Proposed
                }
                Err(rejected) => EditOutcome::Rejected(rejected),
            };
        }

        let Some(slide) = self.timeline.get(id) else {
            return EditOutcome::Ignored;
        };
        let new_end = slide.end_seconds + delta_seconds;
        if new_end < 0.0 {
            return EditOutcome::Ignored;
        }
        self.timeline.set_boundary(id, Boundary::End, new_end);
        EditOutcome::Applied
    }

    /// Commit the outstanding proposal into the timeline.
    ///
    /// Returns `false` when there is nothing to apply, or the
    /// proposal went stale (its target slide was deleted).
    pub fn apply_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => pending.apply_to(&mut self.timeline),
            None => false,
        }
    }

    /// Discard the outstanding proposal, leaving the timeline as it
    /// was before the edit. Returns whether one existed.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Remove all slides and any pending shift.
    pub fn clear(&mut self) {
        self.timeline.clear();
        self.pending = None;
    }

    /// Export the timeline as SRT text.
    pub fn export(&self) -> String {
        subtitles::write_srt(self.timeline.slides())
    }
}

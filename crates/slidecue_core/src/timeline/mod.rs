//! The ordered slide collection.
//!
//! A [`Timeline`] owns its [`Slide`]s by value and keeps them sorted
//! by start time after every committed mutation. Lookups for the
//! playback clock go through [`Timeline::active_slide_at`], which is
//! defined purely by start-time thresholds so it stays well-behaved
//! even when manual editing has produced overlapping intervals.
//!
//! Cascading end-boundary edits live in [`autoshift`]; the timeline
//! itself performs no cascading.

pub mod autoshift;

use crate::subtitles::SubtitleCue;

/// Default span for a newly created slide, in seconds.
pub const DEFAULT_SLIDE_SPAN_SECONDS: f64 = 10.0;

/// Opaque slide identifier.
///
/// Assigned from a per-timeline monotonic counter at creation time;
/// stable across edits and never reused. (A wall-clock id would
/// collide for two creations in the same tick.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(u64);

/// One caption bound to one time interval and, optionally, one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Stable unique identifier.
    pub id: SlideId,
    /// Caption text; may be empty, may contain line breaks.
    pub text: String,
    /// Start of the interval in seconds.
    pub start_seconds: f64,
    /// End of the interval in seconds.
    pub end_seconds: f64,
    /// Index into the external image list, `None` when no list is loaded.
    pub image_index: Option<usize>,
}

impl Slide {
    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }

    /// Translate both boundaries by an offset, preserving duration.
    pub fn shift(&mut self, delta_seconds: f64) {
        self.start_seconds += delta_seconds;
        self.end_seconds += delta_seconds;
    }
}

/// Which boundary of a slide an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

/// Ordered sequence of slides for one session.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    slides: Vec<Slide>,
    next_id: u64,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a timeline from parser output, assigning fresh ids.
    ///
    /// Cues are kept in block order; ties in start time preserve it.
    pub fn from_cues(cues: Vec<SubtitleCue>) -> Self {
        let mut timeline = Self::new();
        for cue in cues {
            let id = timeline.allocate_id();
            timeline.slides.push(Slide {
                id,
                text: cue.text,
                start_seconds: cue.start_seconds,
                end_seconds: cue.end_seconds,
                image_index: cue.image_index,
            });
        }
        timeline
    }

    /// Build a default manual timeline: one slide per image, each
    /// spanning `span_seconds`, captions `Slide 1`, `Slide 2`, ...
    pub fn default_slides(image_count: usize, span_seconds: f64) -> Self {
        let mut timeline = Self::new();
        for i in 0..image_count {
            let id = timeline.allocate_id();
            timeline.slides.push(Slide {
                id,
                text: format!("Slide {}", i + 1),
                start_seconds: i as f64 * span_seconds,
                end_seconds: (i + 1) as f64 * span_seconds,
                image_index: Some(i),
            });
        }
        timeline
    }

    /// The slides in ascending start-time order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the timeline holds no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Look up a slide by id.
    pub fn get(&self, id: SlideId) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    /// Position of a slide in sorted order.
    pub fn index_of(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// Insert a new slide starting at `start_seconds` and spanning
    /// `span_seconds`, then re-sort. Returns the new slide's id.
    ///
    /// Overlap with existing slides is not validated here; manual
    /// insertion is free-form and only auto-shift edits are guarded.
    pub fn insert_at(
        &mut self,
        start_seconds: f64,
        text: String,
        image_index: Option<usize>,
        span_seconds: f64,
    ) -> SlideId {
        let id = self.allocate_id();
        self.slides.push(Slide {
            id,
            text,
            start_seconds,
            end_seconds: start_seconds + span_seconds,
            image_index,
        });
        self.sort_by_start();
        id
    }

    /// Remove the slide with the given id. Neighbors are untouched.
    pub fn remove(&mut self, id: SlideId) -> bool {
        let before = self.slides.len();
        self.slides.retain(|s| s.id != id);
        self.slides.len() != before
    }

    /// Replace a slide's caption text.
    pub fn update_text(&mut self, id: SlideId, text: impl Into<String>) -> bool {
        match self.slide_mut(id) {
            Some(slide) => {
                slide.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Replace one boundary of a slide directly, with no cascading.
    ///
    /// Start edits re-sort the timeline to keep the ordering invariant.
    pub fn set_boundary(&mut self, id: SlideId, boundary: Boundary, seconds: f64) -> bool {
        let Some(slide) = self.slide_mut(id) else {
            return false;
        };
        match boundary {
            Boundary::Start => {
                slide.start_seconds = seconds;
                self.sort_by_start();
            }
            Boundary::End => slide.end_seconds = seconds,
        }
        true
    }

    /// Index of the active slide for playback position `t`.
    ///
    /// Returns the last slide (in sorted order) whose start time is at
    /// or before `t`, index 0 when `t` precedes every slide, and
    /// `None` for an empty timeline. Defined by start thresholds
    /// alone, so the backward scan gives a stable answer even across
    /// overlapping intervals.
    pub fn active_slide_at(&self, t: f64) -> Option<usize> {
        if self.slides.is_empty() {
            return None;
        }
        Some(
            self.slides
                .iter()
                .rposition(|s| s.start_seconds <= t)
                .unwrap_or(0),
        )
    }

    /// Remove all slides. Id allocation continues; ids are never reused.
    pub fn clear(&mut self) {
        self.slides.clear();
    }

    fn allocate_id(&mut self) -> SlideId {
        self.next_id += 1;
        SlideId(self.next_id)
    }

    fn slide_mut(&mut self, id: SlideId) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.id == id)
    }

    fn sort_by_start(&mut self) {
        self.slides.sort_by(|a, b| {
            a.start_seconds
                .partial_cmp(&b.start_seconds)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}

//! Cascading end-boundary edits with two-phase commit.
//!
//! When a slide's end time changes while auto-shift is on, every
//! later slide is translated by the same delta so the narration stays
//! aligned: each later slide keeps its own duration and its gap to
//! its neighbors.
//!
//! Nothing here mutates a live timeline. [`propose`] (or
//! [`quick_adjust`]) validates the edit and returns a
//! [`PendingShift`], which the session either applies with
//! [`PendingShift::apply_to`] or drops to cancel. A rejected proposal
//! leaves the timeline exactly as it was.

use crate::timeline::{Slide, SlideId, Timeline};

/// Minimum slide duration, and the closest an edited end time may
/// come to the untranslated successor's start, in seconds.
pub const MIN_GAP_SECONDS: f64 = 0.1;

/// Relative steps offered by the quick-adjust controls, in seconds.
pub const QUICK_ADJUST_STEPS: [f64; 4] = [-1.0, -0.5, 0.5, 1.0];

/// Reasons an auto-shift proposal is refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShiftRejected {
    /// The edited slide no longer exists.
    #[error("no slide with the requested id")]
    UnknownSlide,

    /// The new end time stops just short of the untranslated
    /// successor's start.
    #[error("end time {new_end_seconds}s is within 0.1s of the next slide's start at {next_start_seconds}s")]
    TooCloseToNext {
        new_end_seconds: f64,
        next_start_seconds: f64,
    },

    /// The edit would leave a slide shorter than the minimum duration.
    #[error("slide duration would drop below 0.1s")]
    DurationTooShort,

    /// The new end time is negative.
    #[error("end time {0}s is negative")]
    NegativeEnd(f64),
}

/// An uncommitted batch edit: the changed slide's new end time plus
/// the translated intervals of every later slide.
///
/// Holds copies of the proposed state only; the live timeline is
/// untouched until [`apply_to`](Self::apply_to).
#[derive(Debug, Clone, PartialEq)]
pub struct PendingShift {
    slide_id: SlideId,
    new_end_seconds: f64,
    delta_seconds: f64,
    shifted: Vec<Slide>,
}

impl PendingShift {
    /// Id of the slide whose end boundary changed.
    pub fn slide_id(&self) -> SlideId {
        self.slide_id
    }

    /// The proposed end time, in seconds.
    pub fn new_end_seconds(&self) -> f64 {
        self.new_end_seconds
    }

    /// The translation applied to every later slide, in seconds.
    pub fn delta_seconds(&self) -> f64 {
        self.delta_seconds
    }

    /// Proposed state of the slides after the edited one.
    pub fn shifted_slides(&self) -> &[Slide] {
        &self.shifted
    }

    /// Write the batch into the timeline.
    ///
    /// Returns `false` without mutating anything when the target
    /// slide has been deleted since the proposal (stale proposals are
    /// silently invalidated). Shifted entries whose slides were
    /// deleted are skipped.
    pub fn apply_to(self, timeline: &mut Timeline) -> bool {
        if timeline.get(self.slide_id).is_none() {
            return false;
        }

        tracing::debug!(
            "applying shift: slide {:?} end -> {}s, {} later slides moved by {}s",
            self.slide_id,
            self.new_end_seconds,
            self.shifted.len(),
            self.delta_seconds
        );

        if let Some(target) = timeline.slides.iter_mut().find(|s| s.id == self.slide_id) {
            target.end_seconds = self.new_end_seconds;
        }
        for proposed in self.shifted {
            if let Some(slide) = timeline.slides.iter_mut().find(|s| s.id == proposed.id) {
                slide.start_seconds = proposed.start_seconds;
                slide.end_seconds = proposed.end_seconds;
            }
        }
        timeline.sort_by_start();
        true
    }
}

/// Validate an end-boundary edit and compute the cascading batch.
///
/// `delta = new_end_seconds - current end`; every slide after the
/// edited one (in sorted order) is translated by `delta`, preserving
/// its duration exactly.
///
/// # Errors
/// - [`ShiftRejected::NegativeEnd`] for a negative end time.
/// - [`ShiftRejected::UnknownSlide`] when the id does not resolve.
/// - [`ShiftRejected::DurationTooShort`] when the edited slide's own
///   proposed duration, or any translated slide's duration, would
///   fall below [`MIN_GAP_SECONDS`]. A pure translation preserves
///   durations, so the latter is a guard for future non-uniform edit
///   modes.
/// - [`ShiftRejected::TooCloseToNext`] when the new end lands inside
///   the open band `(next.start - MIN_GAP, next.start)` of the
///   untranslated successor. The successor itself moves by the same
///   delta, so its own gap is preserved by construction; the band
///   check exists to refuse degenerate near-touching results.
pub fn propose(
    timeline: &Timeline,
    slide_id: SlideId,
    new_end_seconds: f64,
) -> Result<PendingShift, ShiftRejected> {
    if new_end_seconds < 0.0 {
        return Err(ShiftRejected::NegativeEnd(new_end_seconds));
    }

    let index = timeline
        .index_of(slide_id)
        .ok_or(ShiftRejected::UnknownSlide)?;
    let slide = &timeline.slides()[index];
    let delta_seconds = new_end_seconds - slide.end_seconds;

    if new_end_seconds - slide.start_seconds < MIN_GAP_SECONDS {
        return Err(ShiftRejected::DurationTooShort);
    }

    if let Some(next) = timeline.slides().get(index + 1) {
        let gap = next.start_seconds - new_end_seconds;
        if gap > 0.0 && gap < MIN_GAP_SECONDS {
            return Err(ShiftRejected::TooCloseToNext {
                new_end_seconds,
                next_start_seconds: next.start_seconds,
            });
        }
    }

    let mut shifted = Vec::with_capacity(timeline.len() - index - 1);
    for later in &timeline.slides()[index + 1..] {
        let mut moved = later.clone();
        moved.shift(delta_seconds);
        if moved.duration_seconds() < MIN_GAP_SECONDS {
            return Err(ShiftRejected::DurationTooShort);
        }
        shifted.push(moved);
    }

    tracing::debug!(
        "proposed shift: slide {:?} end {} -> {}s (delta {}s, {} slides follow)",
        slide_id,
        slide.end_seconds,
        new_end_seconds,
        delta_seconds,
        shifted.len()
    );

    Ok(PendingShift {
        slide_id,
        new_end_seconds,
        delta_seconds,
        shifted,
    })
}

/// Quick-adjust: the same algorithm with `new_end = current + delta`.
///
/// The UI offers the fixed step set [`QUICK_ADJUST_STEPS`]; a result
/// below zero is rejected.
pub fn quick_adjust(
    timeline: &Timeline,
    slide_id: SlideId,
    delta_seconds: f64,
) -> Result<PendingShift, ShiftRejected> {
    let slide = timeline.get(slide_id).ok_or(ShiftRejected::UnknownSlide)?;
    propose(timeline, slide_id, slide.end_seconds + delta_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A(0-5), B(5-10) like the canonical editing scenario.
    fn two_slide_timeline() -> (Timeline, SlideId, SlideId) {
        let mut timeline = Timeline::new();
        let a = timeline.insert_at(0.0, "A".to_string(), None, 5.0);
        let b = timeline.insert_at(5.0, "B".to_string(), None, 5.0);
        (timeline, a, b)
    }

    #[test]
    fn extend_shifts_later_slides() {
        let (mut timeline, a, b) = two_slide_timeline();

        let pending = propose(&timeline, a, 6.0).unwrap();
        assert_eq!(pending.delta_seconds(), 1.0);

        // Nothing applied yet.
        assert_eq!(timeline.get(a).unwrap().end_seconds, 5.0);
        assert_eq!(timeline.get(b).unwrap().start_seconds, 5.0);

        assert!(pending.apply_to(&mut timeline));
        assert_eq!(timeline.get(a).unwrap().end_seconds, 6.0);
        assert_eq!(timeline.get(b).unwrap().start_seconds, 6.0);
        assert_eq!(timeline.get(b).unwrap().end_seconds, 11.0);
    }

    #[test]
    fn near_touching_end_is_rejected() {
        let (timeline, a, _) = two_slide_timeline();

        let err = propose(&timeline, a, 4.95).unwrap_err();
        assert!(matches!(err, ShiftRejected::TooCloseToNext { .. }));
        // The timeline is untouched.
        assert_eq!(timeline.get(a).unwrap().end_seconds, 5.0);
    }

    #[test]
    fn gap_of_at_least_min_is_allowed() {
        let (timeline, a, _) = two_slide_timeline();
        // 4.75 leaves a 0.25s gap to B's start at 5.0.
        let pending = propose(&timeline, a, 4.75).unwrap();
        assert!((pending.delta_seconds() + 0.25).abs() < 1e-9);
    }

    #[test]
    fn shrink_pulls_later_slides_back() {
        let (mut timeline, a, b) = two_slide_timeline();

        let pending = propose(&timeline, a, 3.0).unwrap();
        assert!(pending.apply_to(&mut timeline));
        assert_eq!(timeline.get(b).unwrap().start_seconds, 3.0);
        assert_eq!(timeline.get(b).unwrap().end_seconds, 8.0);
    }

    #[test]
    fn durations_preserved_for_all_shifted_slides() {
        let mut timeline = Timeline::new();
        let a = timeline.insert_at(0.0, "A".to_string(), None, 5.0);
        timeline.insert_at(5.0, "B".to_string(), None, 2.5);
        timeline.insert_at(9.0, "C".to_string(), None, 7.25);

        let before: Vec<f64> = timeline
            .slides()
            .iter()
            .map(Slide::duration_seconds)
            .collect();

        let pending = propose(&timeline, a, 7.0).unwrap();
        for (slide, duration) in pending.shifted_slides().iter().zip(&before[1..]) {
            assert!((slide.duration_seconds() - duration).abs() < 1e-9);
        }
    }

    #[test]
    fn degenerate_own_span_is_rejected() {
        let (timeline, a, _) = two_slide_timeline();
        assert_eq!(
            propose(&timeline, a, 0.05).unwrap_err(),
            ShiftRejected::DurationTooShort
        );
    }

    #[test]
    fn negative_end_is_rejected() {
        let (timeline, a, _) = two_slide_timeline();
        assert!(matches!(
            propose(&timeline, a, -1.0).unwrap_err(),
            ShiftRejected::NegativeEnd(_)
        ));
    }

    #[test]
    fn unknown_slide_is_rejected() {
        let (mut timeline, a, _) = two_slide_timeline();
        timeline.remove(a);
        assert_eq!(
            propose(&timeline, a, 6.0).unwrap_err(),
            ShiftRejected::UnknownSlide
        );
    }

    #[test]
    fn last_slide_has_no_successor_check() {
        let (mut timeline, _, b) = two_slide_timeline();
        let pending = propose(&timeline, b, 20.0).unwrap();
        assert!(pending.shifted_slides().is_empty());
        assert!(pending.apply_to(&mut timeline));
        assert_eq!(timeline.get(b).unwrap().end_seconds, 20.0);
    }

    #[test]
    fn quick_adjust_steps() {
        let (timeline, a, _) = two_slide_timeline();

        let pending = quick_adjust(&timeline, a, 1.0).unwrap();
        assert_eq!(pending.new_end_seconds(), 6.0);

        let pending = quick_adjust(&timeline, a, -0.5).unwrap();
        assert_eq!(pending.new_end_seconds(), 4.5);
    }

    #[test]
    fn quick_adjust_below_zero_is_rejected() {
        let mut timeline = Timeline::new();
        let a = timeline.insert_at(0.0, "A".to_string(), None, 0.5);
        assert!(matches!(
            quick_adjust(&timeline, a, -1.0).unwrap_err(),
            ShiftRejected::NegativeEnd(_)
        ));
    }

    #[test]
    fn stale_pending_is_invalidated_by_deletion() {
        let (mut timeline, a, b) = two_slide_timeline();

        let pending = propose(&timeline, a, 6.0).unwrap();
        timeline.remove(a);

        assert!(!pending.apply_to(&mut timeline));
        // B is untouched.
        assert_eq!(timeline.get(b).unwrap().start_seconds, 5.0);
    }

    #[test]
    fn deleted_shifted_slide_is_skipped_on_apply() {
        let (mut timeline, a, b) = two_slide_timeline();
        let pending = propose(&timeline, a, 6.0).unwrap();
        timeline.remove(b);

        assert!(pending.apply_to(&mut timeline));
        assert_eq!(timeline.get(a).unwrap().end_seconds, 6.0);
    }

    #[test]
    fn rejection_is_atomic() {
        let (timeline, a, b) = two_slide_timeline();
        let snapshot = timeline.clone();

        let _ = propose(&timeline, a, 4.95).unwrap_err();
        assert_eq!(timeline.slides(), snapshot.slides());
        assert_eq!(timeline.get(b).unwrap().start_seconds, 5.0);
    }
}

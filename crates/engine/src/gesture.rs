//! Horizontal drag gestures turned into page navigation.

/// Minimum horizontal displacement, in input units, that counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Advance,
    Retreat,
    None,
}

/// Decides what a drag from `start` to `end` does.
///
/// A leftward drag longer than `threshold` advances, a rightward one
/// retreats, anything shorter is ignored.
pub fn decide_navigation(start: f64, end: f64, threshold: f64) -> Navigation {
    let distance = start - end;
    if distance > threshold {
        Navigation::Advance
    } else if distance < -threshold {
        Navigation::Retreat
    } else {
        Navigation::None
    }
}

/// Samples the start and last position of one drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSampler {
    start: Option<f64>,
    end: Option<f64>,
}

impl DragSampler {
    /// Starts a new gesture, discarding any previous end position.
    pub fn begin(&mut self, x: f64) {
        self.start = Some(x);
        self.end = None;
    }

    pub fn moved(&mut self, x: f64) {
        self.end = Some(x);
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Ends the gesture and clears the sample.
    ///
    /// A gesture with no start or no recorded end yields `Navigation::None`.
    pub fn finish(&mut self, threshold: f64) -> Navigation {
        let sample = std::mem::take(self);
        match (sample.start, sample.end) {
            (Some(start), Some(end)) => decide_navigation(start, end, threshold),
            _ => Navigation::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_drag_past_threshold_advances() {
        assert_eq!(
            decide_navigation(100.0, 30.0, SWIPE_THRESHOLD),
            Navigation::Advance
        );
    }

    #[test]
    fn rightward_drag_past_threshold_retreats() {
        assert_eq!(
            decide_navigation(30.0, 100.0, SWIPE_THRESHOLD),
            Navigation::Retreat
        );
    }

    #[test]
    fn short_drags_do_nothing() {
        assert_eq!(
            decide_navigation(100.0, 50.0, SWIPE_THRESHOLD),
            Navigation::None
        );
        assert_eq!(
            decide_navigation(50.0, 100.0, SWIPE_THRESHOLD),
            Navigation::None
        );
        assert_eq!(
            decide_navigation(10.0, 10.0, SWIPE_THRESHOLD),
            Navigation::None
        );
    }

    #[test]
    fn gesture_without_end_is_ignored() {
        let mut sampler = DragSampler::default();
        sampler.begin(100.0);
        assert!(sampler.is_active());
        assert_eq!(sampler.finish(SWIPE_THRESHOLD), Navigation::None);
        assert!(!sampler.is_active());
    }

    #[test]
    fn begin_clears_stale_end() {
        let mut sampler = DragSampler::default();
        sampler.begin(200.0);
        sampler.moved(10.0);
        sampler.begin(200.0);
        assert_eq!(sampler.finish(SWIPE_THRESHOLD), Navigation::None);
    }

    #[test]
    fn zero_start_is_a_valid_sample() {
        let mut sampler = DragSampler::default();
        sampler.begin(0.0);
        sampler.moved(80.0);
        assert_eq!(sampler.finish(SWIPE_THRESHOLD), Navigation::Retreat);
    }

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut sampler = DragSampler::default();
        sampler.moved(80.0);
        assert_eq!(sampler.finish(SWIPE_THRESHOLD), Navigation::None);
    }
}

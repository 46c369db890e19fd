//! Baseline bookkeeping: each observed frame is compared against the
//! previous one and then replaces it.

use tracing::{debug, warn};

use crate::compare::{compare_frames, Comparison};
use crate::frame::Frame;
use crate::types::Resolution;

/// Holds the previous frame. Starts without a baseline.
#[derive(Debug, Default)]
pub struct Monitor {
    baseline: Option<Frame>,
    frames_observed: u64,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `frame` against the baseline, then store it as the new
    /// baseline. A missing baseline counts as a 0×0 previous frame, so the
    /// first observation is a size mismatch scoring `0.0`.
    pub fn observe(&mut self, frame: Frame) -> Comparison {
        self.frames_observed += 1;
        let outcome = match &self.baseline {
            Some(previous) => compare_frames(&frame, previous),
            None => {
                warn!("Frames have different sizes: no previous frame vs current {}", frame.resolution());
                Comparison::SizeMismatch { previous: Resolution::ZERO, current: frame.resolution() }
            }
        };

        if let Comparison::Compared { matching, total } = outcome {
            debug!("Frame #{}: {}/{} pixels unchanged", self.frames_observed, matching, total);
        }

        self.baseline = Some(frame);
        outcome
    }

    #[cfg(test)]
    pub fn baseline(&self) -> Option<&Frame> {
        self.baseline.as_ref()
    }

    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }

    pub fn frames_observed(&self) -> u64 {
        self.frames_observed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid(w: u32, h: u32, v: u8) -> Frame {
        Frame::new(RgbaImage::from_pixel(w, h, Rgba([v, v, v, 255])))
    }

    #[test]
    fn first_frame_scores_zero_and_sets_baseline() {
        let mut monitor = Monitor::new();
        assert!(!monitor.has_baseline());

        let cmp = monitor.observe(solid(4, 4, 0));
        assert_eq!(
            cmp,
            Comparison::SizeMismatch {
                previous: Resolution::ZERO,
                current: Resolution::new(4, 4),
            }
        );
        assert_eq!(cmp.similarity(), 0.0);
        assert!(monitor.has_baseline());
        assert_eq!(monitor.frames_observed(), 1);
    }

    #[test]
    fn each_frame_replaces_the_baseline() {
        let mut monitor = Monitor::new();
        monitor.observe(solid(4, 4, 0));

        assert_eq!(monitor.observe(solid(4, 4, 255)).similarity(), 0.0);

        // Compared against the white frame, not the original black one.
        assert_eq!(monitor.observe(solid(4, 4, 255)).similarity(), 100.0);
    }

    #[test]
    fn size_mismatch_still_replaces_the_baseline() {
        let mut monitor = Monitor::new();
        monitor.observe(solid(4, 4, 0));

        let cmp = monitor.observe(solid(8, 2, 0));
        assert!(cmp.is_size_mismatch());
        assert_eq!(cmp.similarity(), 0.0);

        let baseline = monitor.baseline().expect("baseline kept");
        assert_eq!(baseline.image().dimensions(), (8, 2));
        assert_eq!(monitor.observe(solid(8, 2, 0)).similarity(), 100.0);
    }
}

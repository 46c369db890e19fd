//! Exact pixel-equality comparison between two frames.

use tracing::warn;

use crate::frame::Frame;
use crate::types::Resolution;

/// Outcome of comparing a new frame against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Same resolution; `matching` of `total` pixels are identical.
    Compared { matching: u64, total: u64 },
    /// Resolutions differ, no pixels were compared.
    SizeMismatch { previous: Resolution, current: Resolution },
}

impl Comparison {
    /// Similarity percentage in `[0, 100]`. A size mismatch scores `0.0`;
    /// two empty frames are identical and score `100.0`.
    pub fn similarity(&self) -> f64 {
        match *self {
            Comparison::Compared { total: 0, .. } => 100.0,
            Comparison::Compared { matching, total } => {
                (matching as f64 / total as f64) * 100.0
            }
            Comparison::SizeMismatch { .. } => 0.0,
        }
    }

    #[cfg(test)]
    pub fn is_size_mismatch(&self) -> bool {
        matches!(self, Comparison::SizeMismatch { .. })
    }
}

/// Count pixels whose RGBA value is identical at the same coordinates.
pub fn compare_frames(current: &Frame, previous: &Frame) -> Comparison {
    let (cur_res, prev_res) = (current.resolution(), previous.resolution());
    if cur_res != prev_res {
        warn!("Frames have different sizes: previous {} vs current {}", prev_res, cur_res);
        return Comparison::SizeMismatch { previous: prev_res, current: cur_res };
    }

    let matching = current
        .image()
        .pixels()
        .zip(previous.image().pixels())
        .filter(|(a, b)| a == b)
        .count() as u64;

    Comparison::Compared { matching, total: cur_res.total_pixels() }
}

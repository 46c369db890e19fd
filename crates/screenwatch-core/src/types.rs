// MARK: - Resolution

/// Width × height of a frame or an on-screen area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn total_pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Largest resolution with the same aspect ratio that fits inside
    /// `bounds`. Scales up as well as down. Never collapses a non-empty side
    /// to zero.
    pub fn fit_within(&self, bounds: Resolution) -> Resolution {
        if self.is_empty() || bounds.is_empty() {
            return Resolution::ZERO;
        }
        let scale_w = bounds.width as f64 / self.width as f64;
        let scale_h = bounds.height as f64 / self.height as f64;
        let scale = scale_w.min(scale_h);

        let width = ((self.width as f64 * scale).round() as u32).clamp(1, bounds.width);
        let height = ((self.height as f64 * scale).round() as u32).clamp(1, bounds.height);
        Resolution { width, height }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::Resolution;

    const AREA: Resolution = Resolution { width: 700, height: 500 };

    #[test]
    fn wide_screen_is_limited_by_width() {
        let fitted = Resolution::new(1920, 1080).fit_within(AREA);
        assert_eq!(fitted, Resolution::new(700, 394));
    }

    #[test]
    fn tall_screen_is_limited_by_height() {
        let fitted = Resolution::new(1080, 1920).fit_within(AREA);
        assert_eq!(fitted, Resolution::new(281, 500));
    }

    #[test]
    fn small_frames_are_scaled_up() {
        let fitted = Resolution::new(70, 50).fit_within(AREA);
        assert_eq!(fitted, AREA);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(Resolution::new(0, 1080).fit_within(AREA), Resolution::ZERO);
        assert_eq!(Resolution::new(1920, 1080).fit_within(Resolution::ZERO), Resolution::ZERO);
    }

    #[test]
    fn display_uses_times_sign() {
        assert_eq!(Resolution::new(2560, 1440).to_string(), "2560×1440");
        assert_eq!(Resolution::new(2560, 1440).total_pixels(), 3_686_400);
    }
}

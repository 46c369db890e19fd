use std::time::Duration;

use crate::errors::ScreenWatchError;
use crate::types::Resolution;

/// Interval between two timer-driven captures.
pub const CAPTURE_INTERVAL: Duration = Duration::from_secs(60);
/// Fixed outer window size.
pub const WINDOW_SIZE: Resolution = Resolution { width: 800, height: 600 };
/// Area the latest frame is scaled into.
pub const DISPLAY_AREA: Resolution = Resolution { width: 700, height: 500 };

/// Runtime settings for the capture/compare loop.
///
/// Production values are the compile-time constants above; tests build
/// their own with short intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    pub capture_interval: Duration,
    pub window_size: Resolution,
    pub display_area: Resolution,
    /// Capacity of the capture → UI event channel.
    pub channel_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            capture_interval: CAPTURE_INTERVAL,
            window_size: WINDOW_SIZE,
            display_area: DISPLAY_AREA,
            channel_capacity: 4,
        }
    }
}

impl MonitorConfig {
    pub fn validate(&self) -> Result<(), ScreenWatchError> {
        if self.capture_interval.is_zero() {
            return Err(invalid("capture interval must be non-zero"));
        }
        if self.display_area.is_empty() {
            return Err(invalid("display area must be non-empty"));
        }
        if self.display_area.width > self.window_size.width
            || self.display_area.height > self.window_size.height
        {
            return Err(invalid(format!(
                "display area {} does not fit window {}",
                self.display_area, self.window_size
            )));
        }
        if self.channel_capacity == 0 {
            return Err(invalid("channel capacity must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ScreenWatchError {
    ScreenWatchError::ConfigurationInvalid { reason: reason.into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = MonitorConfig::default();
        assert_eq!(cfg.capture_interval, Duration::from_secs(60));
        assert_eq!(cfg.window_size, Resolution::new(800, 600));
        assert_eq!(cfg.display_area, Resolution::new(700, 500));
        cfg.validate().expect("default config is valid");
    }

    #[test]
    fn rejects_zero_interval() {
        let cfg = MonitorConfig { capture_interval: Duration::ZERO, ..Default::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ScreenWatchError::ConfigurationInvalid { .. })
        ));
    }

    #[test]
    fn rejects_display_area_larger_than_window() {
        let cfg = MonitorConfig {
            display_area: Resolution::new(900, 500),
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("900×500"), "{err}");
    }
}

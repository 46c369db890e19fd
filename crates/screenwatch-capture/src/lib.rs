//! screenwatch-capture — full-screen capture of the primary monitor.
//!
//! # Backend
//!
//! `xcap` handles the platform split (X11 / Wayland portal, GDI / DXGI,
//! CoreGraphics). Each capture re-enumerates monitors so a monitor that was
//! unplugged or re-arranged since the last cycle is picked up.
//!
//! ```text
//! Monitor::all() ──► primary (or first) ──► capture_image() ──► RgbaImage ──► Frame
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use screenwatch_capture::{FrameSource, ScreenCapturer};
//! let mut capturer = ScreenCapturer::primary();
//! let frame = capturer.capture()?;
//! println!("{}", frame.resolution());
//! # Ok::<(), screenwatch_core::CaptureError>(())
//! ```

use screenwatch_core::{CaptureError, Frame};
use tracing::debug;
use xcap::Monitor;

// ── FrameSource ───────────────────────────────────────────────────────────────

/// Anything that can produce a full-screen frame on demand.
///
/// `capture` blocks; callers on an async runtime should run it through
/// `tokio::task::spawn_blocking`.
pub trait FrameSource: Send + 'static {
    fn capture(&mut self) -> Result<Frame, CaptureError>;
}

// ── ScreenCapturer ────────────────────────────────────────────────────────────

/// Captures the primary monitor, falling back to the first one listed.
#[derive(Debug, Default, Clone)]
pub struct ScreenCapturer {
    captures: u64,
}

impl ScreenCapturer {
    pub fn primary() -> Self {
        Self::default()
    }

    /// Number of successful captures so far.
    #[cfg(test)]
    pub fn captures(&self) -> u64 {
        self.captures
    }
}

impl FrameSource for ScreenCapturer {
    fn capture(&mut self) -> Result<Frame, CaptureError> {
        let monitors = Monitor::all()
            .map_err(|e| CaptureError::EnumerationFailed { reason: e.to_string() })?;

        let monitor = monitors
            .iter()
            .find(|m| m.is_primary())
            .or_else(|| monitors.first())
            .ok_or(CaptureError::NoMonitor)?;

        let image = monitor
            .capture_image()
            .map_err(|e| CaptureError::CaptureFailed { reason: e.to_string() })?;

        let frame = Frame::new(image);
        if frame.is_empty() {
            return Err(CaptureError::EmptyFrame(frame.resolution()));
        }

        self.captures += 1;
        debug!(
            "Captured monitor '{}' at {} (capture #{})",
            monitor.name(),
            frame.resolution(),
            self.captures
        );
        Ok(frame)
    }
}

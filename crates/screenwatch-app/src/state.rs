use image::RgbaImage;
use screenwatch_core::{Comparison, Monitor};
use tracing::{info, warn};

use crate::trigger::{CaptureEvent, CaptureTrigger};

// ── RunState ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    pub fn label(&self) -> &'static str {
        match self {
            RunState::Stopped => "Program is not running",
            RunState::Running => "Program is running",
        }
    }

    pub fn color(&self) -> egui::Color32 {
        match self {
            RunState::Stopped => egui::Color32::RED,
            RunState::Running => egui::Color32::GREEN,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

// ── ViewState ─────────────────────────────────────────────────────────────────

/// Everything the window shows. Owned and mutated by the UI thread only.
#[derive(Debug, Default)]
pub struct ViewState {
    pub run_state:   RunState,
    monitor:         Monitor,
    last_comparison: Option<Comparison>,
    /// Scaled image waiting to be uploaded as a texture.
    pending_preview: Option<RgbaImage>,
}

impl ViewState {
    pub fn set_running(&mut self, running: bool) {
        self.run_state = if running { RunState::Running } else { RunState::Stopped };
    }

    /// Apply one message from the capture task: compare, replace the
    /// baseline, then queue the new image for display.
    pub fn apply(&mut self, event: CaptureEvent) {
        match event {
            CaptureEvent::Preview(preview) => {
                self.pending_preview = Some(preview);
            }
            CaptureEvent::Captured(captured) => {
                self.last_comparison = Some(self.monitor.observe(captured.frame));
                self.pending_preview = Some(captured.preview);
            }
        }
    }

    pub fn similarity(&self) -> Option<f64> {
        self.last_comparison.map(|c| c.similarity())
    }

    pub fn similarity_text(&self) -> String {
        match self.similarity() {
            Some(pct) => format!("Similarity: {:.2}%", pct),
            None => "Similarity: N/A".to_owned(),
        }
    }

    pub fn take_pending_preview(&mut self) -> Option<RgbaImage> {
        self.pending_preview.take()
    }

    #[cfg(test)]
    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }
}

// ── TriggerSlot ───────────────────────────────────────────────────────────────

/// Owns at most one live capture timer.
#[derive(Default)]
pub struct TriggerSlot {
    trigger: Option<CaptureTrigger>,
}

impl TriggerSlot {
    /// A trigger is held and its task is still running.
    pub fn is_active(&self) -> bool {
        self.trigger.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Spawn a trigger unless one is already live. Returns whether `spawn`
    /// was called.
    pub fn start(&mut self, spawn: impl FnOnce() -> CaptureTrigger) -> bool {
        if self.is_active() {
            return false;
        }
        self.trigger = Some(spawn());
        true
    }

    pub fn stop(&mut self) {
        if let Some(trigger) = self.trigger.take() {
            trigger.stop();
            info!("Stopped after {} capture(s) this run", trigger.captures());
        }
    }

    /// Drop a trigger whose task ended without a stop request. Returns
    /// `true` if one did.
    pub fn reap(&mut self) -> bool {
        if !self.trigger.as_ref().is_some_and(|t| t.is_finished()) {
            return false;
        }
        self.trigger = None;
        warn!("Capture trigger ended on its own, marking as not running");
        true
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

//! `CaptureTrigger` — the repeating capture timer.
//!
//! ```text
//! interval tick ──► spawn_blocking(FrameSource::capture) ──► scale preview
//!                                                              │
//!                        UI thread ◄── mpsc::Sender<CaptureEvent>
//! ```
//!
//! The task never compares frames itself: comparison and baseline updates
//! happen on the UI thread when it drains the channel, so they are naturally
//! serialised.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use image::RgbaImage;
use screenwatch_capture::FrameSource;
use screenwatch_core::{CaptureError, Frame, Resolution};
use tokio::sync::mpsc;
use tokio::task::{self, JoinHandle};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{error, info, warn};

// ── Events ────────────────────────────────────────────────────────────────────

/// A captured frame plus its copy already scaled for the display area.
#[derive(Debug)]
pub struct CapturedFrame {
    pub frame:   Frame,
    pub preview: RgbaImage,
}

/// Message posted from the capture task to the UI thread.
#[derive(Debug)]
pub enum CaptureEvent {
    /// One-off startup snapshot, shown but never used as a baseline.
    Preview(RgbaImage),
    /// Timer-driven capture, to be compared against the baseline.
    Captured(CapturedFrame),
}

// ── CaptureTrigger ────────────────────────────────────────────────────────────

/// Handle to a running capture timer. Dropping it also stops the timer.
pub struct CaptureTrigger {
    /// Send a `()` to request shutdown.
    stop_tx:  mpsc::Sender<()>,
    captures: Arc<AtomicU64>,
    handle:   JoinHandle<()>,
}

impl CaptureTrigger {
    /// Start firing every `period`, first one a full period from now.
    ///
    /// Must be called from within a tokio runtime context.
    pub fn spawn(
        source:       Box<dyn FrameSource>,
        period:       Duration,
        display_area: Resolution,
        events:       mpsc::Sender<CaptureEvent>,
        waker:        egui::Context,
    ) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>(1);
        let captures = Arc::new(AtomicU64::new(0));

        let handle = tokio::spawn(run_trigger(
            source,
            period,
            display_area,
            stop_rx,
            events,
            Arc::clone(&captures),
            waker,
        ));
        info!("Capture trigger started (every {:?})", period);

        Self { stop_tx, captures, handle }
    }

    /// Request stop (non-blocking). No further ticks fire after this.
    pub fn stop(&self) {
        let _ = self.stop_tx.try_send(());
    }

    /// Stop and wait for the task to finish.
    #[cfg(test)]
    pub async fn shutdown(self) {
        self.stop();
        if let Err(e) = self.handle.await {
            warn!("Capture trigger task ended abnormally: {}", e);
        }
    }

    /// Successful captures posted so far.
    pub fn captures(&self) -> u64 {
        self.captures.load(Ordering::Relaxed)
    }

    /// True once the task has ended, whether stopped or after a crashed capture.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Take a single snapshot in the background and post it as a
/// [`CaptureEvent::Preview`].
pub fn spawn_preview(
    source:       Box<dyn FrameSource>,
    display_area: Resolution,
    events:       mpsc::Sender<CaptureEvent>,
    waker:        egui::Context,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match capture_blocking(source, display_area).await {
            (_, Ok(captured)) => {
                if events.send(CaptureEvent::Preview(captured.preview)).await.is_ok() {
                    waker.request_repaint();
                }
            }
            (_, Err(e)) => warn!("Startup preview capture failed: {}", e),
        }
    })
}

// ── Timer task ────────────────────────────────────────────────────────────────

async fn run_trigger(
    mut source:   Box<dyn FrameSource>,
    period:       Duration,
    display_area: Resolution,
    mut stop_rx:  mpsc::Receiver<()>,
    events:       mpsc::Sender<CaptureEvent>,
    captures:     Arc<AtomicU64>,
    waker:        egui::Context,
) {
    let mut ticker = capture_ticker(period);

    loop {
        tokio::select! {
            biased;
            _ = stop_rx.recv() => break,
            _ = ticker.tick() => {}
        }

        let (returned, result) = capture_blocking(source, display_area).await;
        let Some(returned) = returned else {
            error!("Capture source lost after a panicked capture, stopping trigger");
            break;
        };
        source = returned;

        match result {
            Ok(captured) => {
                captures.fetch_add(1, Ordering::Relaxed);
                if events.send(CaptureEvent::Captured(captured)).await.is_err() {
                    // UI side is gone, nothing left to report to.
                    break;
                }
                waker.request_repaint();
            }
            Err(e) => warn!("Capture failed, skipping this cycle: {}", e),
        }
    }

    info!("Capture trigger stopped after {} capture(s)", captures.load(Ordering::Relaxed));
}

/// First tick one full `period` from now. A slow capture pushes the
/// schedule back instead of bursting.
fn capture_ticker(period: Duration) -> Interval {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Run one capture on the blocking pool. Hands the source back unless the
/// capture panicked.
async fn capture_blocking(
    mut source:   Box<dyn FrameSource>,
    display_area: Resolution,
) -> (Option<Box<dyn FrameSource>>, Result<CapturedFrame, CaptureError>) {
    let joined = task::spawn_blocking(move || {
        let result = source.capture().map(|frame| {
            let preview = frame.scaled_to_fit(display_area);
            CapturedFrame { frame, preview }
        });
        (source, result)
    })
    .await;

    match joined {
        Ok((source, result)) => (Some(source), result),
        Err(e) => (None, Err(CaptureError::TaskAborted { reason: e.to_string() })),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

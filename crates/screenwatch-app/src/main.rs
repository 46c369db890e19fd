//! ScreenWatch — periodic screen capture with frame-to-frame similarity.
//!
//! ```text
//! tokio runtime (background)                 egui / glow main thread
//! ─────────────────────────────              ─────────────────────────────
//! CaptureTrigger (60 s interval)
//!   │ spawn_blocking(xcap capture)
//!   │ scale to 700×500
//!   ▼
//! mpsc::Sender<CaptureEvent> ──────────────► ScreenWatchApp::poll_events
//!                                               Monitor::observe (compare,
//!                                               replace baseline) → texture
//! ```

mod state;
#[cfg(test)]
mod test_support;
mod trigger;
mod ui;

use std::time::Duration;

use anyhow::{Context, Result};
use screenwatch_capture::{FrameSource, ScreenCapturer};
use screenwatch_core::MonitorConfig;
use tracing::info;

fn primary_screen() -> Box<dyn FrameSource> {
    Box::new(ScreenCapturer::primary())
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("screenwatch-capture")
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")
}

fn main() -> eframe::Result<()> {
    // ── Logging ───────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    info!("ScreenWatch v{}", env!("CARGO_PKG_VERSION"));

    let config = MonitorConfig::default();
    config
        .validate()
        .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    // ── Background runtime ────────────────────────────────────────────────
    // Capture work runs here, off the egui/glow main thread.
    let runtime = build_runtime().map_err(|e| eframe::Error::AppCreation(e.into()))?;
    let rt_handle = runtime.handle().clone();

    // ── Window options ────────────────────────────────────────────────────
    let window = config.window_size;
    let window_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ScreenWatch")
            .with_inner_size([window.width as f32, window.height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "ScreenWatch",
        window_options,
        Box::new(move |cc| {
            Ok(Box::new(ui::ScreenWatchApp::new(cc, rt_handle, config, primary_screen)))
        }),
    )?;

    runtime.shutdown_timeout(Duration::from_secs(2));
    info!("ScreenWatch exited cleanly.");
    Ok(())
}
